//! Single-listener hand-off between the native callbacks and the application.
//!
//! While no listener is attached, published events queue up. Attaching a
//! listener flushes the queue in publish order, after which events are
//! delivered as they are published. All deliveries go through one drain loop so
//! concurrent publishers cannot overtake each other, and the listener is always
//! called with the bridge lock released.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread,
};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::models::{event::LifecycleEvent, status::BridgeState};

pub trait EventListener: Send + Sync {
    fn on_event(&self, event: LifecycleEvent);
}

impl<F> EventListener for F
where
    F: Fn(LifecycleEvent) + Send + Sync,
{
    fn on_event(&self, event: LifecycleEvent) {
        self(event)
    }
}

/// Forwards events into a tokio channel so an async task can consume them.
pub struct ChannelListener {
    sender: UnboundedSender<LifecycleEvent>,
}

impl ChannelListener {
    pub fn channel() -> (Self, UnboundedReceiver<LifecycleEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl EventListener for ChannelListener {
    fn on_event(&self, event: LifecycleEvent) {
        let kind = event.kind;
        let occurrence_id = event.occurrence_id.clone();
        if self.sender.send(event).is_err() {
            warn!(%kind, %occurrence_id, "Listener channel closed, event dropped");
        }
    }
}

#[derive(Default)]
struct BridgeInner {
    listener: Option<Arc<dyn EventListener>>,
    pending: VecDeque<LifecycleEvent>,
    draining: bool,
}

#[derive(Default)]
pub struct EventBridge {
    inner: Mutex<BridgeInner>,
}

impl EventBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `listener`, replacing any previous one, and flushes buffered events to it.
    pub fn attach_listener(&self, listener: Arc<dyn EventListener>) {
        let (replaced, pending) = {
            let mut inner = self.lock();
            let replaced = inner.listener.replace(listener).is_some();
            (replaced, inner.pending.len())
        };

        info!(replaced, pending, "Listener attached");
        self.drain();
    }

    pub fn detach_listener(&self) {
        if self.lock().listener.take().is_some() {
            info!("Listener detached, buffering events");
        }
    }

    pub fn publish(&self, event: LifecycleEvent) {
        {
            let mut inner = self.lock();
            inner.pending.push_back(event);

            if inner.listener.is_none() {
                debug!(pending = inner.pending.len(), "No listener attached, event buffered");
                return;
            }
        }

        self.drain();
    }

    pub fn state(&self) -> BridgeState {
        if self.lock().listener.is_some() {
            BridgeState::Attached
        } else {
            BridgeState::Detached
        }
    }

    pub fn pending_len(&self) -> usize {
        self.lock().pending.len()
    }

    fn drain(&self) {
        {
            let mut inner = self.lock();
            if inner.draining {
                return;
            }
            inner.draining = true;
        }

        let _guard = DrainGuard { bridge: self };

        loop {
            let (listener, event) = {
                let mut inner = self.lock();
                let next = inner
                    .listener
                    .clone()
                    .and_then(|listener| inner.pending.pop_front().map(|event| (listener, event)));

                match next {
                    Some(next) => next,
                    None => {
                        inner.draining = false;
                        return;
                    }
                }
            };

            listener.on_event(event);
        }
    }

    fn lock(&self) -> MutexGuard<'_, BridgeInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the drain flag if a listener panics mid-delivery.
struct DrainGuard<'a> {
    bridge: &'a EventBridge,
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.bridge.lock().draining = false;
        }
    }
}
