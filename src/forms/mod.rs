//! JSON request payloads and their conversion into domain types.

use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod products;
pub mod tags;

/// Maximum allowed length for category, product and tag names.
pub(crate) const NAME_MAX_LEN: usize = 255;
pub(crate) const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Distinguishes an explicit `null` from an absent field: absent stays `None`,
/// `null` becomes `Some(None)`. Pair with `#[serde(default)]`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Trim the input, collapse whitespace runs into single spaces and drop control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_some")]
        value: Option<Option<i32>>,
    }

    #[test]
    fn sanitize_inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Summer \t\n Sale  "), "Summer Sale");
    }

    #[test]
    fn sanitize_inline_text_drops_control_characters() {
        assert_eq!(sanitize_inline_text("Shoe\u{0007}s"), "Shoes");
    }

    #[test]
    fn deserialize_some_separates_null_from_absent() {
        let absent: Patch = serde_json::from_str("{}").expect("valid json");
        let null: Patch = serde_json::from_str(r#"{"value": null}"#).expect("valid json");
        let set: Patch = serde_json::from_str(r#"{"value": 4}"#).expect("valid json");

        assert_eq!(absent.value, None);
        assert_eq!(null.value, Some(None));
        assert_eq!(set.value, Some(Some(4)));
    }
}
