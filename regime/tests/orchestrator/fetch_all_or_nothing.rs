use regime::{Endpoint, RegimeError};
use regime_mock::{DynamicMockSource, MockBehavior, fixture_events, fixture_prices};

use crate::helpers::*;

#[tokio::test]
async fn all_endpoints_succeed() {
    let (src, _ctl) = DynamicMockSource::new_with_controller("P0");
    let raw = regime_with(src).fetch_all().await.expect("fetch");
    assert_eq!(raw.prices, fixture_prices());
    assert_eq!(raw.events, fixture_events());
    assert!(raw.change_point.is_some());
}

#[tokio::test]
async fn each_single_failure_fails_the_fetch_with_that_error() {
    for endpoint in Endpoint::ALL {
        let (src, ctl) = DynamicMockSource::new_with_controller("P0");
        ctl.fail(endpoint, down(endpoint)).await;

        let err = regime_with(src).fetch_all().await.unwrap_err();
        assert_eq!(err, down(endpoint), "failing {endpoint}");
        assert_eq!(err.endpoint(), Some(endpoint));
    }
}

#[tokio::test]
async fn several_failures_aggregate() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.fail(Endpoint::ChangePointResults, down(Endpoint::ChangePointResults))
        .await;
    ctl.fail(
        Endpoint::HistoricalPrices,
        RegimeError::malformed(Endpoint::HistoricalPrices, "expected a sequence"),
    )
    .await;

    let err = regime_with(src).fetch_all().await.unwrap_err();
    let parts = err.clone().flatten();
    assert_eq!(parts.len(), 2);
    // Fixed endpoint order, not completion order.
    assert_eq!(parts[0].endpoint(), Some(Endpoint::HistoricalPrices));
    assert_eq!(parts[1].endpoint(), Some(Endpoint::ChangePointResults));
    assert!(matches!(err, RegimeError::FetchFailed(_)));
    assert!(!err.is_network());
}

#[tokio::test]
async fn snapshot_is_not_built_from_partial_data() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.fail(Endpoint::KeyEvents, down(Endpoint::KeyEvents)).await;
    let regime = regime_with(src);
    assert_eq!(regime.snapshot().await.unwrap_err(), down(Endpoint::KeyEvents));
}

#[tokio::test]
async fn no_retries_after_failure() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.fail(Endpoint::HistoricalPrices, down(Endpoint::HistoricalPrices))
        .await;
    let _ = regime_with(src).fetch_all().await;
    for endpoint in Endpoint::ALL {
        assert_eq!(ctl.calls(endpoint).await, 1, "{endpoint}");
    }
}

#[tokio::test]
async fn absent_change_point_is_not_a_failure() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.set_change_point_behavior(MockBehavior::Return(None)).await;
    let snapshot = regime_with(src).snapshot().await.expect("snapshot");
    assert!(snapshot.change_point.is_none());
    assert_eq!(snapshot.events.len(), ALIGNED_EVENT_INDICES.len());
}
