mod common;
use common::{config_from_env, get_source};
use regime::{Regime, Session, SessionState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Resolve the backend (mock in CI when REGIME_EXAMPLES_USE_MOCK is set).
    let cfg = config_from_env();
    let source = get_source(&cfg)?;

    // 2. Build the orchestrator with the same timeouts.
    let regime = Regime::builder().with_source(source).config(cfg).build()?;

    // 3. Watch the session while it loads.
    let session = Session::new();
    let mut states = session.subscribe();
    let watcher = async {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            println!("session: {}", state.name());
            if state.is_terminal() {
                break;
            }
        }
    };
    let (loaded, ()) = tokio::join!(session.load(&regime), watcher);
    let snapshot = loaded?;

    // 4. Summarize what the chart would show.
    if let (Some(first), Some(last)) = (snapshot.series.first(), snapshot.series.last()) {
        println!(
            "{} observations, {} .. {}",
            snapshot.series.len(),
            first.date,
            last.date
        );
    }
    for e in &snapshot.events {
        println!(
            "  event @{:>4} {}  {}",
            e.index, e.date, e.event.label
        );
    }
    match (snapshot.stats(), snapshot.marker()) {
        (Some(stats), Some(marker)) => println!(
            "change point {} (index {}, price {:.2}), sigma {:.4} -> {:.4}, P(increase) {:.1}%, {} days highlighted",
            marker.date,
            marker.index,
            marker.price,
            stats.sigma_before,
            stats.sigma_after,
            stats.prob_sigma_increase,
            snapshot.highlighted().len(),
        ),
        (Some(stats), None) => println!(
            "change point {} not on the price axis; sigma {:.4} -> {:.4}",
            stats.date, stats.sigma_before, stats.sigma_after
        ),
        (None, _) => println!("no change-point result"),
    }

    debug_assert!(matches!(session.state(), SessionState::Ready(_)));
    Ok(())
}
