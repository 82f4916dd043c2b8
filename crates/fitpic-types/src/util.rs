use serde::{Deserialize, Deserializer};

/// Deserialize an identifier that older snapshots stored as a number
/// (millisecond timestamps) and newer ones store as a string.
pub fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// Truncate a display string to `max_chars` characters, appending an ellipsis.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
    }

    #[test]
    fn test_string_or_number_accepts_both() {
        let a: Holder = serde_json::from_str(r#"{"id": 1712345678901}"#).unwrap();
        assert_eq!(a.id, "1712345678901");
        let b: Holder = serde_json::from_str(r#"{"id": "favorites"}"#).unwrap();
        assert_eq!(b.id, "favorites");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Weekend Casual", 8), "Weekend…");
    }
}
