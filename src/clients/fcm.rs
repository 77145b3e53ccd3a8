use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    hub::NotificationHub,
    models::{
        event::LifecycleEvent,
        fcm::RemoteMessage,
        notification::NotificationRecord,
        payload::{Payload, PayloadValue},
        target::Target,
        token::PushChannel,
    },
    normalizer::{CLIX_KEY, TAP_MARKER_KEY},
};

/// Feeds Firebase messaging callbacks into the hub.
pub struct FcmMessagingAdapter {
    hub: Arc<NotificationHub>,
}

impl FcmMessagingAdapter {
    pub fn new(hub: Arc<NotificationHub>) -> Self {
        info!("FCM messaging adapter initialized");
        Self { hub }
    }

    pub fn on_new_token(&self, token: &str) -> Option<LifecycleEvent> {
        self.hub.on_token_update(PushChannel::Fcm, token)
    }

    pub fn on_message_received(&self, message: &RemoteMessage) -> Option<LifecycleEvent> {
        debug!(
            from = ?message.from,
            message_id = ?message.message_id,
            data_fields = message.data.len(),
            "FCM message received"
        );

        self.hub.on_message_received(&flatten_remote_message(message))
    }

    /// Handles the extras of an activity launch. Returns `None` when the launch
    /// was not caused by a notification tap.
    pub fn on_launch_extras(&self, extras: &Payload) -> Option<Target> {
        if !is_notification_tap(extras) {
            debug!(extras = extras.len(), "Launch extras carry no notification");
            return None;
        }

        Some(self.hub.on_notification_tapped(extras))
    }
}

/// Merges data fields, the transport message id and the `notification` block
/// into one payload. An explicit `messageId` data field wins over the transport id.
pub fn flatten_remote_message(message: &RemoteMessage) -> Payload {
    let mut payload: Payload = message
        .data
        .iter()
        .map(|(key, value)| (key.clone(), PayloadValue::from(value.as_str())))
        .collect();

    if let Some(message_id) = &message.message_id {
        payload
            .entry("messageId".to_string())
            .or_insert_with(|| PayloadValue::from(message_id.as_str()));
    }

    if let Some(notification) = &message.notification {
        let envelope: Payload = [
            ("title", &notification.title),
            ("body", &notification.body),
            ("image", &notification.image_url),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| (key.to_string(), PayloadValue::from(v.as_str())))
        })
        .collect();

        if !envelope.is_empty() {
            payload.insert("notification".to_string(), PayloadValue::Map(envelope));
        }
    }

    payload
}

/// Extras attached to a displayed notification, so that tapping it later
/// normalizes to the same record.
pub fn tap_extras(record: &NotificationRecord) -> Payload {
    let mut extras = record.custom_properties.clone();

    extras.insert("messageId".to_string(), PayloadValue::from(record.message_id.as_str()));

    let fields = [
        ("title", &record.title),
        ("body", &record.body),
        ("imageUrl", &record.image_url),
        ("landingUrl", &record.landing_url),
        ("campaignId", &record.campaign_id),
        ("trackingId", &record.tracking_id),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            extras.insert(key.to_string(), PayloadValue::from(value.as_str()));
        }
    }

    extras.insert(TAP_MARKER_KEY.to_string(), PayloadValue::Bool(true));
    extras
}

pub fn is_notification_tap(extras: &Payload) -> bool {
    extras
        .get(TAP_MARKER_KEY)
        .is_some_and(PayloadValue::is_truthy)
        || ["messageId", "clix_message_id", CLIX_KEY]
            .iter()
            .any(|key| extras.contains_key(*key))
}
