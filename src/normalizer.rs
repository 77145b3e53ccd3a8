//! Turns raw channel payloads into [`NotificationRecord`]s.
//!
//! Each field is taken from the first source that has it, in this order:
//! the structured `clix` object, the well-known top-level key, alias keys,
//! nested transport envelopes (`notification`, `aps`, `fcm_options`), and
//! finally a default for `title` and `body`. Normalization never fails.

use std::borrow::Cow;

use tracing::debug;

use crate::{
    models::{
        notification::NotificationRecord,
        payload::{Payload, PayloadValue, parse_payload},
    },
    utils::{non_blank, synthesize_message_id},
};

pub const CLIX_KEY: &str = "clix";
pub const TAP_MARKER_KEY: &str = "clix_notification_tapped";
pub const DEFAULT_TITLE: &str = "Notification";

const ENVELOPE_KEYS: &[&str] = &["notification", "aps", "fcm_options"];
const IDENTITY_KEYS: &[&str] = &["userId", "deviceId"];

struct FieldSource {
    clix_keys: &'static [&'static str],
    well_known: &'static str,
    aliases: &'static [&'static str],
    nested: &'static [&'static [&'static str]],
    skip_blank: bool,
}

const TITLE: FieldSource = FieldSource {
    clix_keys: &["title"],
    well_known: "title",
    aliases: &["Title", "TITLE"],
    nested: &[&["notification", "title"], &["aps", "alert", "title"]],
    skip_blank: false,
};

const BODY: FieldSource = FieldSource {
    clix_keys: &["body"],
    well_known: "body",
    aliases: &["Body", "BODY", "message", "Message"],
    nested: &[
        &["notification", "body"],
        &["aps", "alert", "body"],
        &["aps", "alert"],
    ],
    skip_blank: false,
};

const MESSAGE_ID: FieldSource = FieldSource {
    clix_keys: &["message_id", "messageId"],
    well_known: "messageId",
    aliases: &[
        "message_id",
        "clix_message_id",
        "google.message_id",
        "gcm.message_id",
    ],
    nested: &[],
    skip_blank: true,
};

const LANDING_URL: FieldSource = FieldSource {
    clix_keys: &["landing_url", "landingUrl"],
    well_known: "landingUrl",
    aliases: &["landing_url", "clix_landing_url", "destination_url"],
    nested: &[],
    skip_blank: false,
};

const IMAGE_URL: FieldSource = FieldSource {
    clix_keys: &["image_url", "imageUrl"],
    well_known: "imageUrl",
    aliases: &["image_url", "image"],
    nested: &[&["fcm_options", "image"], &["notification", "image"]],
    skip_blank: false,
};

const CAMPAIGN_ID: FieldSource = FieldSource {
    clix_keys: &["campaign_id", "campaignId"],
    well_known: "campaignId",
    aliases: &["campaign_id"],
    nested: &[],
    skip_blank: false,
};

const TRACKING_ID: FieldSource = FieldSource {
    clix_keys: &["tracking_id", "trackingId"],
    well_known: "trackingId",
    aliases: &["tracking_id"],
    nested: &[],
    skip_blank: false,
};

const ALL_FIELDS: &[&FieldSource] = &[
    &TITLE,
    &BODY,
    &MESSAGE_ID,
    &LANDING_URL,
    &IMAGE_URL,
    &CAMPAIGN_ID,
    &TRACKING_ID,
];

#[derive(Debug, Clone)]
pub struct PayloadNormalizer {
    default_title: String,
    default_body: String,
}

impl Default for PayloadNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, "")
    }
}

impl PayloadNormalizer {
    pub fn new(default_title: impl Into<String>, default_body: impl Into<String>) -> Self {
        Self {
            default_title: default_title.into(),
            default_body: default_body.into(),
        }
    }

    pub fn normalize(&self, raw: &Payload) -> NotificationRecord {
        let clix = clix_object(raw);
        let clix = clix.as_deref();

        let message_id = resolve_field(&MESSAGE_ID, clix, raw)
            .unwrap_or_else(|| synthesize_message_id(raw));

        NotificationRecord {
            message_id,
            title: Some(
                resolve_field(&TITLE, clix, raw).unwrap_or_else(|| self.default_title.clone()),
            ),
            body: Some(
                resolve_field(&BODY, clix, raw).unwrap_or_else(|| self.default_body.clone()),
            ),
            image_url: resolve_field(&IMAGE_URL, clix, raw),
            landing_url: resolve_field(&LANDING_URL, clix, raw),
            campaign_id: resolve_field(&CAMPAIGN_ID, clix, raw),
            tracking_id: resolve_field(&TRACKING_ID, clix, raw),
            custom_properties: custom_properties(raw),
        }
    }
}

/// Normalizes with the built-in title and body defaults.
pub fn normalize(raw: &Payload) -> NotificationRecord {
    PayloadNormalizer::default().normalize(raw)
}

/// Top-level keys that never end up in `custom_properties`.
pub fn is_reserved_key(key: &str) -> bool {
    key == CLIX_KEY
        || key == TAP_MARKER_KEY
        || ENVELOPE_KEYS.contains(&key)
        || IDENTITY_KEYS.contains(&key)
        || ALL_FIELDS
            .iter()
            .any(|field| field.well_known == key || field.aliases.contains(&key))
}

fn clix_object(raw: &Payload) -> Option<Cow<'_, Payload>> {
    match raw.get(CLIX_KEY)? {
        PayloadValue::Map(map) => Some(Cow::Borrowed(map)),
        PayloadValue::Text(text) => match parse_payload(text) {
            Some(map) => Some(Cow::Owned(map)),
            None => {
                debug!(clix = %text, "clix payload is not a JSON object, falling back");
                None
            }
        },
        _ => None,
    }
}

fn resolve_field(source: &FieldSource, clix: Option<&Payload>, raw: &Payload) -> Option<String> {
    clix.and_then(|clix| first_text(source, clix, source.clix_keys))
        .or_else(|| first_text(source, raw, &[source.well_known]))
        .or_else(|| first_text(source, raw, source.aliases))
        .or_else(|| {
            source
                .nested
                .iter()
                .find_map(|path| lookup_path(raw, path).and_then(|value| field_text(source, value)))
        })
}

fn first_text(source: &FieldSource, map: &Payload, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| map.get(*key).and_then(|value| field_text(source, value)))
}

/// Blank text counts as absent for fields that must carry an identity.
fn field_text(source: &FieldSource, value: &PayloadValue) -> Option<String> {
    value
        .as_field_text()
        .filter(|text| !source.skip_blank || non_blank(text).is_some())
}

fn lookup_path<'a>(raw: &'a Payload, path: &[&str]) -> Option<&'a PayloadValue> {
    let (first, rest) = path.split_first()?;
    let mut current = raw.get(*first)?;
    for key in rest {
        current = current.as_map()?.get(*key)?;
    }
    Some(current)
}

fn custom_properties(raw: &Payload) -> Payload {
    raw.iter()
        .filter(|(key, _)| !is_reserved_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
