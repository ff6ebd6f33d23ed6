/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::{IdentityChangedListener, IdentityTracker, SharedIdentityChangedListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

#[derive(Default)]
struct CountingListener {
    changes: AtomicUsize,
    last: Mutex<Option<(String, String)>>,
}

impl IdentityChangedListener for CountingListener {
    fn identity_changed(&self, old_identity_id: &str, new_identity_id: &str) {
        self.changes.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((old_identity_id.into(), new_identity_id.into()));
    }
}

struct Forward(Arc<CountingListener>);

impl IdentityChangedListener for Forward {
    fn identity_changed(&self, old_identity_id: &str, new_identity_id: &str) {
        self.0.identity_changed(old_identity_id, new_identity_id)
    }
}

#[test]
fn trait_objects_and_shared_listeners_can_be_registered() {
    let counter = Arc::new(CountingListener::default());
    let tracker = IdentityTracker::with_identity_id("us-east-1:a");
    tracker.register(Forward(counter.clone()));
    tracker.register(SharedIdentityChangedListener::new(Forward(counter.clone())));

    tracker.update("us-east-1:b");
    assert_eq!(counter.changes.load(Ordering::SeqCst), 2);
    assert_eq!(
        *counter.last.lock().unwrap(),
        Some(("us-east-1:a".to_string(), "us-east-1:b".to_string()))
    );
}

#[test]
fn concurrent_updates_notify_once_per_change() {
    let counter = Arc::new(CountingListener::default());
    let tracker = IdentityTracker::with_identity_id("id-0");
    tracker.register(Forward(counter.clone()));

    let workers: Vec<_> = (1..=8)
        .map(|idx| {
            let tracker = tracker.clone();
            thread::spawn(move || tracker.update(format!("id-{}", idx)))
        })
        .collect();
    let changed = workers
        .into_iter()
        .map(|worker| worker.join().unwrap())
        .filter(|changed| *changed)
        .count();

    assert_eq!(changed, 8);
    assert_eq!(counter.changes.load(Ordering::SeqCst), 8);
    assert!(tracker.identity_id().is_some());
}

fn recorder(log: &Arc<Mutex<Vec<String>>>) -> impl Fn(&str, &str) + Send + Sync {
    let log = log.clone();
    move |old: &str, new: &str| log.lock().unwrap().push(format!("{}->{}", old, new))
}

#[test]
fn overlapping_updates_are_delivered_in_the_order_applied() {
    let tracker = IdentityTracker::with_identity_id("id-0");

    // the first listener stalls inside the first notification until released
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let gate = Mutex::new(Some((entered_tx, release_rx)));
    tracker.register(move |_: &str, _: &str| {
        let first = gate.lock().unwrap().take();
        if let Some((entered, release)) = first {
            entered.send(()).unwrap();
            release.recv().unwrap();
        }
    });
    let log = Arc::new(Mutex::new(vec![]));
    tracker.register(recorder(&log));

    let background = {
        let tracker = tracker.clone();
        thread::spawn(move || tracker.update("id-1"))
    };
    entered_rx.recv().unwrap();

    assert!(tracker.update("id-2"));
    assert_eq!(tracker.identity_id().as_deref(), Some("id-2"));
    assert!(log.lock().unwrap().is_empty());

    release_tx.send(()).unwrap();
    assert!(background.join().unwrap());
    assert_eq!(
        *log.lock().unwrap(),
        vec!["id-0->id-1".to_string(), "id-1->id-2".to_string()]
    );
}

#[test]
fn concurrent_deliveries_form_an_unbroken_chain() {
    let tracker = IdentityTracker::with_identity_id("id-0");
    let log = Arc::new(Mutex::new(vec![]));
    tracker.register(recorder(&log));

    let workers: Vec<_> = (1..=16)
        .map(|idx| {
            let tracker = tracker.clone();
            thread::spawn(move || tracker.update(format!("id-{}", idx)))
        })
        .collect();
    for worker in workers {
        assert!(worker.join().unwrap());
    }

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 16);
    let mut expected_old = "id-0".to_string();
    for entry in log.iter() {
        let (old, new) = entry.split_at(entry.find("->").unwrap());
        assert_eq!(old, expected_old);
        expected_old = new[2..].to_string();
    }
    assert_eq!(tracker.identity_id(), Some(expected_old));
}
