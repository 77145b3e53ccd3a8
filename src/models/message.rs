use serde::{Deserialize, Serialize};

use crate::models::{payload::Payload, token::PushChannel};

/// A native callback in serialized form, one per line on the replay binary's stdin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "callback", rename_all = "camelCase")]
pub enum InboundCallback {
    MessageReceived {
        payload: Payload,
    },
    NotificationTapped {
        payload: Payload,
    },
    #[serde(rename_all = "camelCase")]
    TokenUpdate {
        channel: PushChannel,
        token: String,
    },
}
