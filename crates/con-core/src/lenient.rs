//! Tolerant field readers for hand-edited collection files.
//!
//! The website dataset is also edited by hand, so a record may carry `null`
//! or a number where a string is expected. These readers normalize such
//! scalars instead of failing the whole collection. Arrays and objects in a
//! scalar position are still rejected.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `null` reads as empty; numbers and booleans as their JSON text.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(_) | Value::Object(_) => Err(de::Error::custom("expected a string")),
        other => Ok(scalar_text(other).unwrap_or_default()),
    }
}

/// Like [`text`], but blank or `null` reads as `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = text(deserializer)?;
    Ok((!text.trim().is_empty()).then_some(text))
}

/// `null` reads as no tags, a lone string as one tag. Null entries are dropped.
pub fn tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.into_iter().filter_map(scalar_text).collect()),
        Value::Object(_) => Err(de::Error::custom("expected a list of tags")),
        scalar => Ok(scalar_text(scalar).into_iter().collect()),
    }
}

/// `null`, negative or fractional counts read as 0; numeric strings are parsed.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(_) => Ok(0),
        Value::Number(n) => Ok(n
            .as_u64()
            .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
            .unwrap_or(0)),
        Value::String(s) => Ok(s.trim().parse().unwrap_or(0)),
        Value::Array(_) | Value::Object(_) => Err(de::Error::custom("expected a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Fields {
        #[serde(deserialize_with = "text")]
        title: String,
        #[serde(deserialize_with = "optional_text")]
        note: Option<String>,
        #[serde(deserialize_with = "tags")]
        tags: Vec<String>,
        #[serde(deserialize_with = "count")]
        count: u32,
    }

    fn read(value: serde_json::Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_nulls_read_as_defaults() {
        let fields = read(json!({"title": null, "note": null, "tags": null, "count": null}));
        assert_eq!(fields.title, "");
        assert_eq!(fields.note, None);
        assert!(fields.tags.is_empty());
        assert_eq!(fields.count, 0);
    }

    #[test]
    fn test_scalars_are_normalized() {
        let fields = read(json!({"title": 45, "note": "  ", "tags": ["a", null, 2], "count": "12"}));
        assert_eq!(fields.title, "45");
        assert_eq!(fields.note, None);
        assert_eq!(fields.tags, vec!["a", "2"]);
        assert_eq!(fields.count, 12);

        assert_eq!(read(json!({"tags": "solo", "count": -3})).tags, vec!["solo"]);
        assert_eq!(read(json!({"count": -3})).count, 0);
    }

    #[test]
    fn test_structures_in_scalar_position_are_rejected() {
        assert!(serde_json::from_value::<Fields>(json!({"title": {"en": "x"}})).is_err());
        assert!(serde_json::from_value::<Fields>(json!({"count": [1]})).is_err());
    }
}
