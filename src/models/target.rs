use serde::{Deserialize, Serialize};

/// Where a tapped notification should take the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "url", rename_all = "camelCase")]
pub enum Target {
    OpenUrl(String),
    LaunchApp,
}
