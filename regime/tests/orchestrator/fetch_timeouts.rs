use std::time::Duration;

use regime::{Endpoint, RegimeError};
use regime_mock::DynamicMockSource;

use crate::helpers::*;

#[tokio::test(start_paused = true)]
async fn hung_endpoint_hits_endpoint_timeout() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.hang(Endpoint::KeyEvents).await;

    let regime = regime_with_timeouts(src, Some(Duration::from_secs(1)), None);
    let err = regime.fetch_all().await.unwrap_err();
    assert_eq!(err, RegimeError::endpoint_timeout(Endpoint::KeyEvents));
    assert!(err.is_network());
}

#[tokio::test(start_paused = true)]
async fn default_endpoint_timeout_is_thirty_seconds() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.hang(Endpoint::ChangePointResults).await;

    let started = tokio::time::Instant::now();
    let err = regime_with(src).fetch_all().await.unwrap_err();
    assert_eq!(
        err,
        RegimeError::endpoint_timeout(Endpoint::ChangePointResults)
    );
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(30) && elapsed < Duration::from_secs(31));
}

#[tokio::test(start_paused = true)]
async fn request_deadline_bounds_the_join() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.hang(Endpoint::HistoricalPrices).await;

    let regime = regime_with_timeouts(src, None, Some(Duration::from_secs(2)));
    assert_eq!(
        regime.fetch_all().await.unwrap_err(),
        RegimeError::RequestTimeout
    );
}

#[tokio::test(start_paused = true)]
async fn request_deadline_wins_over_longer_endpoint_timeout() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.hang(Endpoint::KeyEvents).await;

    let regime = regime_with_timeouts(
        src,
        Some(Duration::from_secs(10)),
        Some(Duration::from_secs(3)),
    );
    let started = tokio::time::Instant::now();
    assert_eq!(
        regime.fetch_all().await.unwrap_err(),
        RegimeError::RequestTimeout
    );
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(3) && elapsed < Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn every_endpoint_timing_out_aggregates_network_errors() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    for endpoint in Endpoint::ALL {
        ctl.hang(endpoint).await;
    }

    let regime = regime_with_timeouts(src, Some(Duration::from_millis(500)), None);
    let err = regime.fetch_all().await.unwrap_err();
    assert_eq!(
        err.clone().flatten(),
        Endpoint::ALL
            .iter()
            .map(|e| RegimeError::endpoint_timeout(*e))
            .collect::<Vec<_>>()
    );
    assert!(err.is_network());
}
