//! Session records as stored in `data/sessions/<conferenceId>-sessions.json`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::lenient;
use crate::record::Record;
use crate::slug::slugify;

/// An `extractedAt` value, kept exactly as written so rewrites do not
/// reformat it. [`Timestamp::to_utc`] parses it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Formats `at` as RFC 3339 with a `Z` suffix.
    pub fn from_utc(at: DateTime<Utc>) -> Self {
        Self(at.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The instant, or `None` when the text is not RFC 3339.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.0.trim())
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    /// Accepts RFC 3339 text only; the text is kept verbatim.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(text)?;
        Ok(Self(text.to_string()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A talk recorded at a conference.
///
/// `null` or mistyped scalars read as their defaults, and unknown fields are
/// kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub speaker: String,
    #[serde(deserialize_with = "lenient::text")]
    pub youtube_url: String,
    #[serde(deserialize_with = "lenient::text")]
    pub summary: String,
    #[serde(deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub transcript: String,
    /// When the video metadata was extracted. Blank or `null` reads as `None`;
    /// text that is not RFC 3339 is kept and reported by dataset validation.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_timestamp"
    )]
    pub extracted_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// Creates a session whose id is derived from `title`.
    pub fn from_title(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: slugify(&title),
            title,
            ..Self::default()
        }
    }
}

impl Record for Session {
    const KIND: &'static str = "session";

    fn id(&self) -> &str {
        &self.id
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::optional_text(deserializer)?.map(Timestamp))
}

/// On-disk shape of a per-conference session collection file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    #[serde(default)]
    pub conference_id: String,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl SessionDocument {
    pub fn empty(conference_id: impl Into<String>) -> Self {
        Self {
            conference_id: conference_id.into(),
            sessions: Vec::new(),
        }
    }
}
