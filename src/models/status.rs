use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeState {
    /// No listener; published events are buffered.
    Detached,
    /// Events go straight to the listener.
    Attached,
}

impl Display for BridgeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BridgeState::Detached => write!(f, "detached"),
            BridgeState::Attached => write!(f, "attached"),
        }
    }
}
