use sourced_eventbus::bus::{AppendError, RetryPolicy, RetryingAppender};
use sourced_eventbus::{Error, Event, EventStore};

use crate::support::{SlowStartLog, UnreachableLog};

#[test]
fn retrying_appender_recovers_from_timeouts() {
    let log = SlowStartLog::new(2);
    let store = EventStore::new(RetryingAppender::new(&log, RetryPolicy::immediate(3)));

    let committed = store
        .commit(&Event::new("HouseWasSold", [("price", 100000.0)]))
        .unwrap();

    assert_eq!(log.attempts(), 3);
    assert_eq!(
        store.publish(&committed.payload).unwrap().message,
        "House was sold for 100000.00"
    );
}

#[test]
fn exhausted_retries_surface_the_last_error() {
    let store = EventStore::new(RetryingAppender::new(
        UnreachableLog,
        RetryPolicy::immediate(4),
    ));

    let err = store
        .commit(&Event::new("HouseWasSold", [("price", 1.0)]))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Append {
            source: AppendError::ConnectionFailed(_),
            ..
        }
    ));
}
