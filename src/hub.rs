use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    bridge::EventBridge,
    error::NavigationError,
    models::{
        event::{EventKind, LifecycleEvent},
        message::InboundCallback,
        payload::Payload,
        target::Target,
        token::PushChannel,
    },
    normalizer::PayloadNormalizer,
    resolver::resolve,
    sequencer::EventSequencer,
    token_tracker::TokenTracker,
};

/// Executes a resolved [`Target`]. Implemented by the host platform.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &Target) -> Result<(), NavigationError>;
}

/// Entry point for native delivery callbacks. Built once per process and
/// shared with every adapter that needs to feed it.
pub struct NotificationHub {
    normalizer: PayloadNormalizer,
    sequencer: EventSequencer,
    tokens: TokenTracker,
    bridge: Arc<EventBridge>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl NotificationHub {
    pub fn new(normalizer: PayloadNormalizer, bridge: Arc<EventBridge>) -> Self {
        Self {
            normalizer,
            sequencer: EventSequencer::new(),
            tokens: TokenTracker::new(),
            bridge,
            navigator: None,
        }
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn bridge(&self) -> &Arc<EventBridge> {
        &self.bridge
    }

    pub fn tokens(&self) -> &TokenTracker {
        &self.tokens
    }

    pub fn admitted_count(&self, kind: EventKind) -> usize {
        self.sequencer.admitted_count(kind)
    }

    /// Returns the published event, or `None` when the message was already seen.
    pub fn on_message_received(&self, raw: &Payload) -> Option<LifecycleEvent> {
        let event = LifecycleEvent::received(self.normalizer.normalize(raw));
        self.admit_and_publish(event)
    }

    /// Publishes the tap and returns where it should lead. Navigation is only
    /// triggered the first time a given message is tapped.
    pub fn on_notification_tapped(&self, raw: &Payload) -> Target {
        let record = self.normalizer.normalize(raw);
        let target = resolve(&record);
        let message_id = record.message_id.clone();

        if self.admit_and_publish(LifecycleEvent::tapped(record)).is_some() {
            self.navigate(&message_id, &target);
        }

        target
    }

    pub fn on_token_update(&self, channel: PushChannel, value: &str) -> Option<LifecycleEvent> {
        let event = self.tokens.report(channel, value)?;
        self.admit_and_publish(event)
    }

    pub fn dispatch(&self, callback: InboundCallback) {
        match callback {
            InboundCallback::MessageReceived { payload } => {
                self.on_message_received(&payload);
            }
            InboundCallback::NotificationTapped { payload } => {
                self.on_notification_tapped(&payload);
            }
            InboundCallback::TokenUpdate { channel, token } => {
                self.on_token_update(channel, &token);
            }
        }
    }

    fn admit_and_publish(&self, event: LifecycleEvent) -> Option<LifecycleEvent> {
        if !self.sequencer.admit_event(&event) {
            return None;
        }

        info!(
            kind = %event.kind,
            occurrence_id = %event.occurrence_id,
            "Lifecycle event admitted"
        );

        self.bridge.publish(event.clone());
        Some(event)
    }

    fn navigate(&self, message_id: &str, target: &Target) {
        let Some(navigator) = &self.navigator else {
            return;
        };

        if let Err(e) = navigator.navigate(target) {
            warn!(message_id, ?target, error = %e, "Navigation failed");
        }
    }
}
