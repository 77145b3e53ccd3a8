use anyhow::{Result, anyhow};

use crate::models::token::PushChannel;

pub fn validate_push_token(channel: PushChannel, token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(anyhow!("Device token cannot be empty"));
    }

    match channel {
        PushChannel::Fcm => validate_fcm_token(token),
        PushChannel::Apns => validate_apns_token(token),
    }
}

fn validate_fcm_token(token: &str) -> Result<()> {
    if token.len() < 20 {
        return Err(anyhow!("FCM token too short (minimum 20 characters)"));
    }

    if token.len() > 4096 {
        return Err(anyhow!("FCM token too long (maximum 4096 characters)"));
    }

    let valid_chars = token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ':' || c == '.');

    if !valid_chars {
        return Err(anyhow!("FCM token contains invalid characters"));
    }

    Ok(())
}

fn validate_apns_token(token: &str) -> Result<()> {
    if token.len() < 64 || token.len() % 2 != 0 {
        return Err(anyhow!(
            "APNs token must be an even number of hex digits, at least 64"
        ));
    }

    if !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(anyhow!("APNs token contains non-hex characters"));
    }

    Ok(())
}
