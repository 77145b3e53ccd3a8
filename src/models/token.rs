use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Native push-transport family a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PushChannel {
    #[serde(rename = "FCM")]
    Fcm,
    #[serde(rename = "APNs")]
    Apns,
}

impl PushChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PushChannel::Fcm => "FCM",
            PushChannel::Apns => "APNs",
        }
    }
}

impl Display for PushChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub value: String,
    pub channel: PushChannel,
}
