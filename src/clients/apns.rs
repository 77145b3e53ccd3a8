use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    hub::NotificationHub,
    models::{event::LifecycleEvent, payload::Payload, target::Target, token::PushChannel},
};

/// Feeds the application delegate and notification-center delegate callbacks
/// into the hub.
///
/// A notification that cold-starts the app is typically reported twice, once
/// through the launch options and once through `did_receive_response`. Both go
/// through the same tap path, so only the first one is published.
pub struct ApnsDelegateAdapter {
    hub: Arc<NotificationHub>,
}

impl ApnsDelegateAdapter {
    pub fn new(hub: Arc<NotificationHub>) -> Self {
        info!("APNs delegate adapter initialized");
        Self { hub }
    }

    /// Foreground presentation of an incoming notification.
    pub fn will_present(&self, user_info: &Payload) -> Option<LifecycleEvent> {
        debug!(fields = user_info.len(), "Notification received in foreground");
        self.hub.on_message_received(user_info)
    }

    pub fn did_receive_response(&self, user_info: &Payload) -> Target {
        debug!(fields = user_info.len(), "Notification tapped");
        self.hub.on_notification_tapped(user_info)
    }

    pub fn did_finish_launching(&self, remote_notification: Option<&Payload>) -> Option<Target> {
        let user_info = remote_notification?;
        info!("App launched from notification");
        Some(self.hub.on_notification_tapped(user_info))
    }

    pub fn did_register_device_token(&self, device_token: &[u8]) -> Option<LifecycleEvent> {
        self.hub
            .on_token_update(PushChannel::Apns, &hex::encode(device_token))
    }

    /// Firebase registration token delivered through the messaging delegate.
    pub fn did_receive_registration_token(&self, token: Option<&str>) -> Option<LifecycleEvent> {
        let Some(token) = token else {
            warn!("FCM registration token is nil");
            return None;
        };

        self.hub.on_token_update(PushChannel::Fcm, token)
    }
}
