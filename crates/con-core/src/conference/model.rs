//! Conference records as stored in `data/conferences.json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;
use crate::record::Record;
use crate::slug::slugify;

/// A conference in the website dataset.
///
/// Field names are camelCase on disk. Fields this tool does not know about
/// are kept in `extra` so rewriting the file never drops them. `null` or
/// mistyped scalars read as their defaults instead of failing the collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Conference {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub website_url: String,
    #[serde(deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub session_count: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Conference {
    /// Creates a conference whose slug and id are both derived from `name`.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id: slug.clone(),
            slug,
            name,
            ..Self::default()
        }
    }
}

impl Record for Conference {
    const KIND: &'static str = "conference";

    fn id(&self) -> &str {
        &self.id
    }
}

/// On-disk shape of the conference collection file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConferenceDocument {
    #[serde(default)]
    pub conferences: Vec<Conference>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_name_derives_slug_and_id() {
        let conference = Conference::from_name("RustConf 2024: Montréal!");
        assert_eq!(conference.slug, "rustconf-2024-montr-al");
        assert_eq!(conference.id, conference.slug);
        assert!(conference.tags.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let conference: Conference = serde_json::from_value(json!({"id": "a"})).unwrap();
        assert_eq!(conference.id, "a");
        assert!(conference.tags.is_empty());
        assert_eq!(conference.session_count, 0);
    }

    #[test]
    fn test_camel_case_and_unknown_fields_survive() {
        let raw = json!({
            "id": "jsconf",
            "name": "JSConf",
            "slug": "jsconf",
            "description": "",
            "date": "2024-05-01",
            "location": "Berlin",
            "websiteUrl": "https://jsconf.example",
            "tags": ["js"],
            "sessionCount": 12,
            "featured": true
        });
        let conference: Conference = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(conference.website_url, "https://jsconf.example");
        assert_eq!(conference.session_count, 12);
        assert_eq!(conference.extra.get("featured"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&conference).unwrap(), raw);
    }

    #[test]
    fn test_null_and_mistyped_fields_read_as_defaults() {
        let raw = json!({
            "conferences": [{
                "id": "a",
                "name": "A",
                "websiteUrl": null,
                "sessionCount": null,
                "tags": null,
                "date": 2024
            }]
        });
        let document: ConferenceDocument = serde_json::from_value(raw).unwrap();
        let conference = &document.conferences[0];
        assert_eq!(conference.website_url, "");
        assert_eq!(conference.session_count, 0);
        assert!(conference.tags.is_empty());
        assert_eq!(conference.date, "2024");
    }

    #[test]
    fn test_document_without_key_is_empty() {
        let document: ConferenceDocument = serde_json::from_str("{}").unwrap();
        assert!(document.conferences.is_empty());
    }
}
