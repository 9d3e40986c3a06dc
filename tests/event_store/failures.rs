use sourced_eventbus::bus::{AppendError, InMemoryLog};
use sourced_eventbus::{Args, Error, ErrorKind, Event, EventStore, HandlerError};

use crate::support::UnreachableLog;

#[test]
fn append_failure_is_recoverable() {
    let store = EventStore::new(UnreachableLog);

    let err = store
        .commit(&Event::new("HouseWasSold", [("price", 250000.0)]))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Append);
    assert!(err.is_retryable());
    assert!(matches!(
        err,
        Error::Append {
            source: AppendError::ConnectionFailed(_),
            ..
        }
    ));
}

#[test]
fn malformed_bytes_are_dropped_with_decode_error() {
    let store = EventStore::new(InMemoryLog::new());

    let inputs: [&[u8]; 4] = [b"", b"{", b"[1,2,3]", br#"{"id":"1","args":{}}"#];
    for bytes in inputs {
        let err = store.publish(bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode, "input: {:?}", bytes);
        assert!(!err.is_retryable());
    }
}

#[test]
fn unregistered_projection_is_not_found() {
    let store = EventStore::new(InMemoryLog::new());
    let committed = store
        .commit(&Event::new("HouseWasDemolished", Args::new()))
        .unwrap();

    let err = store.publish(&committed.payload).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "handler does not exist: HouseWasDemolished");
}

#[test]
fn invalid_price_is_invalid_argument() {
    let store = EventStore::new(InMemoryLog::new());

    for args in [Args::from([("price", "invalid")]), Args::new()] {
        let committed = store.commit(&Event::new("HouseWasSold", args)).unwrap();
        let err = store.publish(&committed.payload).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(
            err,
            Error::Handler {
                ref projection,
                source: HandlerError::InvalidArgument(ref message),
            } if projection == "HouseWasSold" && message == "price not provided or invalid"
        ));
    }
}

#[test]
fn non_finite_price_is_rejected_before_append() {
    let log = InMemoryLog::new();
    let store = EventStore::new(log.clone());

    let err = store
        .commit(&Event::new("HouseWasSold", [("price", f64::NAN)]))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(matches!(err, Error::NonFiniteNumber(ref key) if key == "price"));
    assert!(log.is_empty());
}

#[test]
fn empty_projection_is_rejected_before_append() {
    let log = InMemoryLog::new();
    let store = EventStore::new(log.clone());

    let err = store.commit(&Event::new("", Args::new())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(log.is_empty());
}
