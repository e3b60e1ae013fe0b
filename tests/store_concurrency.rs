use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use exoplanet_query::query::QueryParams;
use exoplanet_query::store::DatasetStore;
use exoplanet_query::types::{ExoplanetRecord, FilterOptionSet};

/// A dataset of `n` rows whose hosts are all tagged with `generation`.
fn generation(generation: usize, n: usize) -> Vec<ExoplanetRecord> {
    (0..n)
        .map(|i| {
            ExoplanetRecord::new(
                2000 + (i % 20) as i32,
                "Transit",
                format!("gen{generation}-host{i}"),
                format!("gen{generation}-facility"),
            )
        })
        .collect()
}

#[test]
fn readers_never_observe_a_mixed_snapshot() {
    let store = Arc::new(DatasetStore::new());
    store.load(generation(0, 50));
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut checks = 0usize;
                loop {
                    let snapshot = store.snapshot();
                    // Options must be exactly the ones derived from the captured rows.
                    assert_eq!(
                        snapshot.filter_options(),
                        &FilterOptionSet::from_records(snapshot.records())
                    );
                    let tag = snapshot.records()[0].discovery_facility.clone();
                    assert!(snapshot.records().iter().all(|r| r.discovery_facility == tag));
                    checks += 1;
                    if stop.load(Ordering::SeqCst) {
                        break;
                    }
                }
                checks
            })
        })
        .collect();

    for g in 1..40 {
        store.load(generation(g, 20 + g));
    }
    stop.store(true, Ordering::SeqCst);

    for r in readers {
        assert!(r.join().unwrap() > 0);
    }
    assert_eq!(store.snapshot().row_count(), 59);
}

#[test]
fn ingestion_cycles_are_serialized() {
    let store = Arc::new(DatasetStore::new());
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_in_flight = Arc::new(AtomicUsize::new(0));

    let writers: Vec<_> = (0..4)
        .map(|g| {
            let store = Arc::clone(&store);
            let in_flight = Arc::clone(&in_flight);
            let max_in_flight = Arc::clone(&max_in_flight);
            thread::spawn(move || {
                store
                    .refresh(|| {
                        let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                        max_in_flight.fetch_max(now, Ordering::SeqCst);
                        thread::sleep(Duration::from_millis(10));
                        in_flight.fetch_sub(1, Ordering::SeqCst);
                        Ok(generation(g, 5))
                    })
                    .unwrap()
            })
        })
        .collect();

    for w in writers {
        w.join().unwrap();
    }
    assert_eq!(max_in_flight.load(Ordering::SeqCst), 1);
    assert_eq!(store.snapshot().row_count(), 5);
}

#[test]
fn captured_snapshot_query_is_unaffected_by_reload() {
    let store = DatasetStore::new();
    store.load(generation(1, 30));
    let captured = store.snapshot();

    store.load(generation(2, 3));

    let params = QueryParams::default().paged(1, 100);
    let old = exoplanet_query::query::evaluate(&captured, &params).unwrap();
    let new = store.query(&params).unwrap();
    assert_eq!(old.total, 30);
    assert_eq!(new.total, 3);
    assert!(old.data.iter().all(|r| r.discovery_facility == "gen1-facility"));
}
