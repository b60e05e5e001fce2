use std::time::Duration;

use regime_mock::{
    DynamicMockSource, MockBehavior, fixture_change_point, fixture_events, fixture_prices,
};

use crate::helpers::*;

#[tokio::test(start_paused = true)]
async fn endpoints_are_fetched_concurrently() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.set_prices_behavior(MockBehavior::ReturnAfter(
        Duration::from_secs(3),
        fixture_prices(),
    ))
    .await;
    ctl.set_events_behavior(MockBehavior::ReturnAfter(
        Duration::from_secs(2),
        fixture_events(),
    ))
    .await;
    ctl.set_change_point_behavior(MockBehavior::ReturnAfter(
        Duration::from_secs(1),
        Some(fixture_change_point()),
    ))
    .await;

    let started = tokio::time::Instant::now();
    let snapshot = regime_with(src).snapshot().await.expect("snapshot");
    // Joined: the slowest endpoint dominates, not the sum.
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(3) && elapsed < Duration::from_secs(4));
    assert_eq!(snapshot.series.len(), FIXTURE_LEN);
}

#[tokio::test(start_paused = true)]
async fn slow_endpoint_under_its_timeout_succeeds() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.set_events_behavior(MockBehavior::ReturnAfter(
        Duration::from_secs(4),
        fixture_events(),
    ))
    .await;

    let regime = regime_with_timeouts(src, Some(Duration::from_secs(5)), None);
    let raw = regime.fetch_all().await.expect("within timeout");
    assert_eq!(raw.events.len(), 6);
}
