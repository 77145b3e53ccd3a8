use std::{sync::Arc, thread};

use push_bridge::{
    models::{
        event::{EventKind, LifecycleEvent},
        notification::NotificationRecord,
    },
    sequencer::EventSequencer,
};
use uuid::Uuid;

/// Test: Only the first admission of a pair succeeds
#[test]
fn test_duplicates_are_rejected() {
    let sequencer = EventSequencer::new();
    let id = format!("test_dedup_{}", Uuid::new_v4());

    assert!(sequencer.admit(EventKind::Tapped, &id));
    assert!(!sequencer.admit(EventKind::Tapped, &id));
    assert!(!sequencer.admit(EventKind::Tapped, &id));
    assert_eq!(sequencer.admitted_count(EventKind::Tapped), 1);
}

/// Test: A different occurrence id always admits
#[test]
fn test_distinct_ids_admit() {
    let sequencer = EventSequencer::new();

    assert!(sequencer.admit(EventKind::Received, "m-1"));
    assert!(sequencer.admit(EventKind::Received, "m-2"));
    assert_eq!(sequencer.admitted_count(EventKind::Received), 2);
}

/// Test: Kinds are keyed independently
#[test]
fn test_received_and_tapped_are_independent() {
    let sequencer = EventSequencer::new();

    assert!(sequencer.admit(EventKind::Received, "m-1"));
    assert!(sequencer.admit(EventKind::Tapped, "m-1"));
    assert!(sequencer.admit(EventKind::TokenRefresh, "m-1"));
    assert!(!sequencer.admit(EventKind::Tapped, "m-1"));
}

/// Test: A fresh sequencer forgets earlier admissions
#[test]
fn test_new_sequencer_starts_empty() {
    let first = EventSequencer::new();
    assert!(first.admit(EventKind::Received, "m-1"));

    let restarted = EventSequencer::new();
    assert!(restarted.admit(EventKind::Received, "m-1"));
}

/// Test: admit_event keys on the event's kind and occurrence id
#[test]
fn test_admit_event() {
    let sequencer = EventSequencer::new();
    let event = LifecycleEvent::tapped(NotificationRecord::new("m-9"));

    assert!(sequencer.admit_event(&event));
    assert!(!sequencer.admit(EventKind::Tapped, "m-9"));
}

/// Test: Racing admissions of the same pair admit exactly once
#[test]
fn test_concurrent_admissions_admit_once() {
    let sequencer = Arc::new(EventSequencer::new());
    let id = format!("test_concurrent_{}", Uuid::new_v4());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let sequencer = Arc::clone(&sequencer);
            let id = id.clone();
            thread::spawn(move || sequencer.admit(EventKind::Received, &id))
        })
        .collect();

    let admitted = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|admitted| *admitted)
        .count();

    assert_eq!(admitted, 1);
}
