use thiserror::Error;

/// Failures reported by a [`Navigator`](crate::hub::Navigator). The hub only logs them.
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("No handler can open {0}")]
    NoHandler(String),

    #[error("Navigation rejected: {0}")]
    Rejected(String),
}
