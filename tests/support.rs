use std::sync::{Arc, Mutex};

use push_bridge::{
    bridge::{EventBridge, EventListener},
    hub::NotificationHub,
    models::{
        event::LifecycleEvent,
        payload::{Payload, parse_payload},
    },
    normalizer::PayloadNormalizer,
};

pub fn payload(json: &str) -> Payload {
    parse_payload(json).expect("test payload must be a JSON object")
}

/// Listener that keeps every delivered event in order.
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<LifecycleEvent>>,
}

impl RecordingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn occurrence_ids(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .map(|event| event.occurrence_id)
            .collect()
    }
}

impl EventListener for RecordingListener {
    fn on_event(&self, event: LifecycleEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn new_hub() -> (Arc<NotificationHub>, Arc<EventBridge>) {
    let bridge = Arc::new(EventBridge::new());
    let hub = NotificationHub::new(PayloadNormalizer::default(), Arc::clone(&bridge));
    (Arc::new(hub), bridge)
}
