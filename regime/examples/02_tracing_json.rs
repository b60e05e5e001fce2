mod common;
use common::{config_from_env, get_source};
use regime::Regime;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,regime=debug,regime_core=debug,regime_http=debug
    // (spans are emitted when the crates are built with the `tracing` feature).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .try_init();

    let cfg = config_from_env();
    let regime = Regime::builder()
        .with_source(get_source(&cfg)?)
        .config(cfg)
        .build()?;

    // The snapshot is what a presentation layer consumes.
    let snapshot = regime.snapshot().await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
