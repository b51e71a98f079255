//! Concurrency properties: disjoint writers, reset_all racing set, and
//! per-record snapshot consistency. Plain threads: every store operation
//! is synchronous and short.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use telemap_core::options::SeriesOptions;
use telemap_store::info::InfoMetric;
use telemap_store::notify::NoopNotifier;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn info(name: &str, labels: &[&str]) -> Arc<InfoMetric> {
    Arc::new(
        InfoMetric::new(SeriesOptions::new(name, labels), Arc::new(NoopNotifier))
            .expect("valid options"),
    )
}

#[test]
fn disjoint_writers_never_lose_entries() {
    init_tracing();
    let m = info("worker.info", &["worker"]);

    const WRITERS: usize = 16;
    const ROUNDS: usize = 100;

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let m = Arc::clone(&m);
            thread::spawn(move || {
                let worker = format!("w{w}");
                for round in 0..ROUNDS {
                    m.set(Some(json!(round)), &[("worker", worker.as_str())], None);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let snap = m.snapshot();
    assert_eq!(snap.len(), WRITERS);
    for rec in &snap {
        assert_eq!(rec.value, Some(json!(ROUNDS - 1)));
    }
}

#[test]
fn reset_all_racing_set_stays_sound() {
    init_tracing();
    let m = info("race.info", &["id"]);

    for i in 0..8 {
        let id = format!("s{i}");
        m.set(Some(json!(0)), &[("id", id.as_str())], None);
    }

    let setter = {
        let m = Arc::clone(&m);
        thread::spawn(move || {
            for round in 0..500 {
                let id = format!("s{}", round % 8);
                m.set(Some(json!(round)), &[("id", id.as_str())], None);
            }
        })
    };
    let resetter = {
        let m = Arc::clone(&m);
        thread::spawn(move || {
            for _ in 0..100 {
                m.reset_all(None);
            }
        })
    };
    setter.join().unwrap();
    resetter.join().unwrap();

    // No entry is ever dropped; each record is either reset or holds the
    // last write for its key.
    let snap = m.snapshot();
    assert_eq!(snap.len(), 8);
    for rec in &snap {
        if let Some(v) = &rec.value {
            assert!(v.is_number());
        }
    }
}

#[test]
fn snapshots_observe_whole_records() {
    init_tracing();
    let m = info("pair.info", &["id"]);

    // Writer keeps value == timestamp for its single series; a torn read
    // would surface as a mismatched pair.
    let writer = {
        let m = Arc::clone(&m);
        thread::spawn(move || {
            for round in 0u64..2000 {
                m.set(Some(json!(round)), &[("id", "only")], Some(round));
            }
        })
    };

    for _ in 0..200 {
        for rec in m.snapshot() {
            if let Some(v) = &rec.value {
                assert_eq!(v.as_u64(), Some(rec.timestamp));
            }
        }
    }
    writer.join().unwrap();
}
