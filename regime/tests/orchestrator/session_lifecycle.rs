use std::sync::Arc;
use std::time::Duration;

use regime::{Endpoint, RawPrice, RawPriceRecord, RegimeError, Session, SessionState};
use regime_mock::{DynamicMockSource, MockBehavior, MockSource, fixture_prices};

use crate::helpers::*;

#[tokio::test(start_paused = true)]
async fn subscribers_see_loading_then_ready() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.set_prices_behavior(MockBehavior::ReturnAfter(
        Duration::from_millis(200),
        fixture_prices(),
    ))
    .await;
    let regime = regime_with(src);
    let session = Session::new();
    let mut rx = session.subscribe();
    assert_eq!(*rx.borrow(), SessionState::Idle);

    let observer = async {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            seen.push(state.name());
            if state.is_terminal() {
                break;
            }
        }
        seen
    };
    let (loaded, seen) = tokio::join!(session.load(&regime), observer);

    let snapshot = loaded.expect("ready");
    assert_eq!(seen, ["loading", "ready"]);
    let state = session.state();
    assert!(Arc::ptr_eq(state.snapshot().expect("ready"), &snapshot));
}

#[tokio::test]
async fn one_failing_endpoint_leaves_session_failed() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.fail(Endpoint::ChangePointResults, down(Endpoint::ChangePointResults))
        .await;
    let session = Session::new();

    let err = session.load(&regime_with(src)).await.unwrap_err();
    let state = session.state();
    assert_eq!(state, SessionState::Failed(err));
    assert!(state.snapshot().is_none());
    assert_eq!(state.error(), Some(&down(Endpoint::ChangePointResults)));
}

#[tokio::test]
async fn normalization_failure_leaves_session_failed() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    let mut rows = fixture_prices();
    rows[3] = RawPriceRecord::new("2008-08-14 00:00:00", RawPrice::Text("n/a".into()));
    ctl.set_prices_behavior(MockBehavior::Return(rows)).await;
    let session = Session::new();

    let err = session.load(&regime_with(src)).await.unwrap_err();
    assert_eq!(err, RegimeError::coercion(3, "n/a"));
    assert_eq!(session.state().error(), Some(&err));
}

#[tokio::test]
async fn second_load_is_rejected() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    let regime = regime_with(src);
    let session = Session::new();
    session.load(&regime).await.expect("first load");

    let err = session.load(&regime).await.unwrap_err();
    assert_eq!(
        err,
        RegimeError::InvalidTransition {
            from: "ready".into(),
            to: "loading".into(),
        }
    );
    assert_eq!(session.state().name(), "ready");
    assert_eq!(ctl.calls(Endpoint::HistoricalPrices).await, 1);
}

#[tokio::test]
async fn failed_session_does_not_retry() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.fail(Endpoint::KeyEvents, down(Endpoint::KeyEvents)).await;
    let regime = regime_with(src);
    let session = Session::new();
    let _ = session.load(&regime).await;

    ctl.reset().await;
    let err = session.load(&regime).await.unwrap_err();
    assert!(matches!(err, RegimeError::InvalidTransition { ref from, .. } if from == "failed"));
    assert_eq!(ctl.calls(Endpoint::KeyEvents).await, 0);
}

#[tokio::test(start_paused = true)]
async fn concurrent_loads_only_one_proceeds() {
    let (src, ctl) = DynamicMockSource::new_with_controller("P0");
    ctl.set_events_behavior(MockBehavior::ReturnAfter(
        Duration::from_millis(50),
        regime_mock::fixture_events(),
    ))
    .await;
    let regime = regime_with(src);
    let session = Session::new();

    let (a, b) = tokio::join!(session.load(&regime), session.load(&regime));
    assert!(a.is_ok());
    assert_eq!(
        b.unwrap_err(),
        RegimeError::InvalidTransition {
            from: "loading".into(),
            to: "loading".into(),
        }
    );
    assert_eq!(ctl.calls(Endpoint::KeyEvents).await, 1);
}

#[tokio::test]
async fn settled_resolves_with_terminal_state() {
    let regime = regime_with(Arc::new(MockSource::new()));
    let session = Session::default();

    let (loaded, settled) = tokio::join!(session.load(&regime), session.settled());
    assert!(loaded.is_ok());
    assert_eq!(settled.name(), "ready");
    assert_eq!(session.settled().await, session.state());
}
