use tracing::debug;
use url::Url;

use crate::{
    models::{notification::NotificationRecord, target::Target},
    utils::non_blank,
};

/// Maps a tapped notification to a navigation target. Anything that is not an
/// absolute URI falls back to launching the app.
pub fn resolve(record: &NotificationRecord) -> Target {
    let Some(landing_url) = record.landing_url.as_deref().and_then(non_blank) else {
        return Target::LaunchApp;
    };

    match Url::parse(landing_url) {
        Ok(_) => Target::OpenUrl(landing_url.to_string()),
        Err(e) => {
            debug!(
                message_id = %record.message_id,
                landing_url,
                error = %e,
                "Landing URL is not an absolute URI, launching app"
            );
            Target::LaunchApp
        }
    }
}
