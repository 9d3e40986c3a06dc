use std::collections::HashSet;

use sourced_eventbus::bus::InMemoryLog;
use sourced_eventbus::{ArgValue, Args, Event, EventStore};

#[test]
fn commit_then_publish_house_was_sold() {
    let store = EventStore::new(InMemoryLog::new());

    let committed = store
        .commit(&Event::new("HouseWasSold", [("price", 100000.0)]))
        .unwrap();
    let result = store.publish(&committed.payload).unwrap();

    assert_eq!(result.message, "House was sold for 100000.00");
}

#[test]
fn committed_bytes_round_trip_through_decode() {
    let store = EventStore::new(InMemoryLog::new());
    let event = Event::new(
        "HouseWasSold",
        Args::new()
            .with("price", 425000.0)
            .with("buyer", "alice")
            .with("mortgage", true)
            .with("rooms", vec!["kitchen", "bath", "attic"])
            .with("agent", ArgValue::Null),
    );

    let committed = store.commit(&event).unwrap();
    let decoded = store.dispatcher().decode(&committed.payload).unwrap();

    assert_eq!(decoded, event);
    assert_eq!(decoded.id(), event.id());
}

#[test]
fn log_holds_one_topic_per_projection() {
    let log = InMemoryLog::new();
    let store = EventStore::new(log.clone());

    store
        .commit(&Event::new("HouseWasSold", [("price", 1.0)]))
        .unwrap();
    store
        .commit(&Event::new("HouseWasSold", [("price", 2.0)]))
        .unwrap();
    // Committing needs no registered handler.
    store
        .commit(&Event::new("HouseWasListed", [("price", 3.0)]))
        .unwrap();

    assert_eq!(log.topics(), vec!["HouseWasListed", "HouseWasSold"]);
    let sold = log.records("HouseWasSold");
    assert_eq!(sold.len(), 2);
    assert_eq!(sold[1].offset, 1);
}

#[test]
fn publish_replays_every_record_in_a_topic() {
    let log = InMemoryLog::new();
    let store = EventStore::new(log.clone());

    for price in [100.0, 200.5, 300.25] {
        store
            .commit(&Event::new("HouseWasSold", [("price", price)]))
            .unwrap();
    }

    let messages: Vec<String> = log
        .records("HouseWasSold")
        .iter()
        .map(|record| store.publish(&record.payload).unwrap().message)
        .collect();

    assert_eq!(
        messages,
        vec![
            "House was sold for 100.00",
            "House was sold for 200.50",
            "House was sold for 300.25",
        ]
    );
}

#[test]
fn repeated_events_get_distinct_ids() {
    let ids: HashSet<String> = (0..500)
        .map(|_| {
            Event::new("HouseWasSold", [("price", 1.0)])
                .id()
                .to_string()
        })
        .collect();
    assert_eq!(ids.len(), 500);
}
