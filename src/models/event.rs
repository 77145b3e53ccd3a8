use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    notification::NotificationRecord,
    payload::Payload,
    token::{PushChannel, TokenInfo},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Received,
    Tapped,
    TokenRefresh,
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Received => write!(f, "received"),
            EventKind::Tapped => write!(f, "tapped"),
            EventKind::TokenRefresh => write!(f, "tokenRefresh"),
        }
    }
}

/// A single lifecycle fact. `occurrence_id` is the dedup key.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleEvent {
    pub kind: EventKind,
    pub occurrence_id: String,
    pub record: Option<NotificationRecord>,
    pub token: Option<TokenInfo>,
    pub timestamp: DateTime<Utc>,
}

impl LifecycleEvent {
    pub fn received(record: NotificationRecord) -> Self {
        Self::for_record(EventKind::Received, record)
    }

    pub fn tapped(record: NotificationRecord) -> Self {
        Self::for_record(EventKind::Tapped, record)
    }

    pub fn token_refresh(token: TokenInfo) -> Self {
        Self {
            kind: EventKind::TokenRefresh,
            occurrence_id: token.value.clone(),
            record: None,
            token: Some(token),
            timestamp: Utc::now(),
        }
    }

    fn for_record(kind: EventKind, record: NotificationRecord) -> Self {
        Self {
            kind,
            occurrence_id: record.message_id.clone(),
            record: Some(record),
            token: None,
            timestamp: Utc::now(),
        }
    }

    pub fn to_wire(&self) -> WireEvent {
        let mut wire = WireEvent {
            kind: self.kind,
            message_id: None,
            title: None,
            body: None,
            image_url: None,
            landing_url: None,
            campaign_id: None,
            tracking_id: None,
            custom_properties: None,
            token: None,
            channel: None,
            timestamp: Some(self.timestamp),
        };

        if let Some(record) = &self.record {
            wire.message_id = Some(record.message_id.clone());
            wire.title = record.title.clone();
            wire.body = record.body.clone();
            wire.image_url = record.image_url.clone();
            wire.landing_url = record.landing_url.clone();
            wire.campaign_id = record.campaign_id.clone();
            wire.tracking_id = record.tracking_id.clone();
            if !record.custom_properties.is_empty() {
                wire.custom_properties = Some(record.custom_properties.clone());
            }
        }

        if let Some(token) = &self.token {
            wire.token = Some(token.value.clone());
            wire.channel = Some(token.channel);
        }

        wire
    }
}

/// Flat shape of a [`LifecycleEvent`] once it crosses a serialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEvent {
    pub kind: EventKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<Payload>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<PushChannel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}
