use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, PoisonError},
};

use tracing::debug;

use crate::models::event::{EventKind, LifecycleEvent};

/// Remembers every `(kind, occurrence_id)` admitted during this process and
/// rejects repeats. Nothing is persisted; a new process starts empty.
#[derive(Debug, Default)]
pub struct EventSequencer {
    admitted: Mutex<HashMap<EventKind, HashSet<String>>>,
}

impl EventSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only the first time the pair is seen.
    pub fn admit(&self, kind: EventKind, occurrence_id: &str) -> bool {
        let first = self
            .admitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(kind)
            .or_default()
            .insert(occurrence_id.to_string());

        if !first {
            debug!(%kind, occurrence_id, "Duplicate occurrence suppressed");
        }

        first
    }

    pub fn admit_event(&self, event: &LifecycleEvent) -> bool {
        self.admit(event.kind, &event.occurrence_id)
    }

    pub fn admitted_count(&self, kind: EventKind) -> usize {
        self.admitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .map_or(0, HashSet::len)
    }
}
