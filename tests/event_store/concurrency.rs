use std::sync::Arc;
use std::thread;

use sourced_eventbus::bus::InMemoryLog;
use sourced_eventbus::{Event, EventStore, PartitionKey};

#[test]
fn one_store_serves_many_threads() {
    let log = InMemoryLog::with_partitions(4);
    let store = Arc::new(EventStore::new(log.clone()));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..25 {
                    let price = f64::from(worker * 1000 + i);
                    let committed = store
                        .commit(&Event::new("HouseWasSold", [("price", price)]))
                        .unwrap();
                    let result = store.publish(&committed.payload).unwrap();
                    assert_eq!(result.message, format!("House was sold for {:.2}", price));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(log.len(), 200);
    for partition in 0..4 {
        let offsets: Vec<i64> = log
            .partition("HouseWasSold", partition)
            .iter()
            .map(|r| r.offset)
            .collect();
        let expected: Vec<i64> = (0..offsets.len() as i64).collect();
        assert_eq!(offsets, expected);
    }
}

#[test]
fn stores_share_one_producer() {
    let log = Arc::new(InMemoryLog::new());
    let keyed = EventStore::builder(Arc::clone(&log))
        .partition_key(PartitionKey::EventId)
        .build();
    let unkeyed = EventStore::new(Arc::clone(&log));

    keyed
        .commit(&Event::new("HouseWasSold", [("price", 1.0)]))
        .unwrap();
    let second = unkeyed
        .commit(&Event::new("HouseWasSold", [("price", 2.0)]))
        .unwrap();

    assert_eq!(second.receipt.offset, 1);
    assert_eq!(log.len(), 2);
}
