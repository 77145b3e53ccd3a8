use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use tracing::{debug, warn};

use crate::models::{
    event::LifecycleEvent,
    token::{PushChannel, TokenInfo},
    validation::validate_push_token,
};

/// Last-known push token per channel, kept for the lifetime of the process.
#[derive(Debug, Default)]
pub struct TokenTracker {
    current: Mutex<HashMap<PushChannel, String>>,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` and returns a refresh event only when it differs from the
    /// previously stored token for `channel`.
    pub fn report(&self, channel: PushChannel, value: &str) -> Option<LifecycleEvent> {
        if let Err(e) = validate_push_token(channel, value) {
            warn!(%channel, error = %e, "Tracking push token with unexpected shape");
        }

        let previous = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(channel, value.to_string());

        if previous.as_deref() == Some(value) {
            debug!(%channel, "Push token unchanged");
            return None;
        }

        Some(LifecycleEvent::token_refresh(TokenInfo {
            value: value.to_string(),
            channel,
        }))
    }

    pub fn current(&self, channel: PushChannel) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&channel)
            .cloned()
    }
}
