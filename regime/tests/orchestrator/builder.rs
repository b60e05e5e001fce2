use std::sync::Arc;
use std::time::Duration;

use regime::{Regime, RegimeConfig, RegimeError};
use regime_mock::MockSource;

#[test]
fn builder_requires_a_source() {
    let err = Regime::builder().build().err().expect("no source");
    assert!(matches!(err, RegimeError::InvalidArg(_)));
}

#[test]
fn builder_rejects_zero_timeouts() {
    let err = Regime::builder()
        .with_source(Arc::new(MockSource::new()))
        .endpoint_timeout(Some(Duration::ZERO))
        .build()
        .err()
        .expect("zero endpoint timeout");
    assert!(matches!(err, RegimeError::InvalidArg(ref m) if m.contains("endpoint_timeout")));

    let err = Regime::builder()
        .with_source(Arc::new(MockSource::new()))
        .request_timeout(Some(Duration::ZERO))
        .build()
        .err()
        .expect("zero request timeout");
    assert!(matches!(err, RegimeError::InvalidArg(ref m) if m.contains("request_timeout")));
}

#[test]
fn builder_applies_config_then_overrides() {
    let cfg = RegimeConfig {
        base_url: "http://backend.test:8080".into(),
        endpoint_timeout: Some(Duration::from_secs(5)),
        request_timeout: Some(Duration::from_secs(20)),
    };
    let regime = Regime::builder()
        .with_source(Arc::new(MockSource::new()))
        .config(cfg)
        .endpoint_timeout(None)
        .build()
        .expect("valid");

    assert_eq!(regime.config().base_url, "http://backend.test:8080");
    assert_eq!(regime.config().endpoint_timeout, None);
    assert_eq!(
        regime.config().request_timeout,
        Some(Duration::from_secs(20))
    );
    assert_eq!(regime.source_name(), "regime-mock");
}

#[test]
fn defaults_match_config_defaults() {
    let regime = Regime::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()
        .expect("valid");
    assert_eq!(regime.config(), &RegimeConfig::default());
}
