use sha2::{Digest, Sha256};

use crate::models::payload::{Payload, PayloadValue};

const SYNTHETIC_ID_PREFIX: &str = "local-";

/// Deterministic message id for payloads that carry none. Same payload, same id.
pub fn synthesize_message_id(raw: &Payload) -> String {
    let mut hasher = Sha256::new();

    // BTreeMap iteration is sorted by key.
    for (key, value) in raw {
        hasher.update(key.as_bytes());
        hasher.update([0x1f]);
        hasher.update(canonical_value(value).as_bytes());
        hasher.update([0x1e]);
    }

    format!("{}{}", SYNTHETIC_ID_PREFIX, hex::encode(hasher.finalize()))
}

fn canonical_value(value: &PayloadValue) -> String {
    match value {
        PayloadValue::Text(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_id_is_stable_and_key_order_independent() {
        let mut a = Payload::new();
        a.insert("b".to_string(), PayloadValue::from("2"));
        a.insert("a".to_string(), PayloadValue::Int(1));

        let mut b = Payload::new();
        b.insert("a".to_string(), PayloadValue::Int(1));
        b.insert("b".to_string(), PayloadValue::from("2"));

        let id = synthesize_message_id(&a);
        assert_eq!(id, synthesize_message_id(&b));
        assert!(id.starts_with(SYNTHETIC_ID_PREFIX));
        assert_eq!(id.len(), SYNTHETIC_ID_PREFIX.len() + 64);
    }

    #[test]
    fn test_synthesized_id_distinguishes_text_from_list() {
        let mut text = Payload::new();
        text.insert("n".to_string(), PayloadValue::from("1"));

        let mut list = Payload::new();
        list.insert("n".to_string(), PayloadValue::List(vec![PayloadValue::Int(1)]));

        assert_ne!(synthesize_message_id(&text), synthesize_message_id(&list));
    }

    #[test]
    fn test_synthesized_id_matches_stringified_scalars() {
        let mut text = Payload::new();
        text.insert("n".to_string(), PayloadValue::from("1"));

        let mut number = Payload::new();
        number.insert("n".to_string(), PayloadValue::Int(1));

        assert_eq!(synthesize_message_id(&text), synthesize_message_id(&number));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  x "), Some("x"));
        assert_eq!(non_blank("   "), None);
    }
}
