//! Field rules for conference and session records.
//!
//! The record store accepts any record; these rules back the form checks and
//! the "Validate Data" menu command.

use serde::{Deserialize, Serialize};

use crate::conference::Conference;
use crate::record::{Record, duplicate_ids};
use crate::session::Session;
use crate::youtube;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    Conference,
    Session,
}

/// One broken rule on one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub record_kind: RecordKind,
    pub record_id: String,
    /// Parent conference of a session issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_id: Option<String>,
    pub field: String,
    pub message: String,
}

/// Outcome of validating the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub conferences_checked: usize,
    pub sessions_checked: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

fn required(value: &str, field: &str, label: &str, issues: &mut Vec<(String, String)>) {
    if value.trim().is_empty() {
        issues.push((field.to_string(), format!("{} is required", label)));
    }
}

/// Whether `id` can name a per-conference session file.
///
/// Blank ids, `.`/`..` and ids containing path separators cannot.
pub fn is_usable_conference_id(id: &str) -> bool {
    !(id.trim().is_empty() || id.contains(['/', '\\']) || id == "." || id == "..")
}

/// Issue for a conference whose id cannot address its session file.
pub fn unusable_conference_id_issue(conference_id: &str) -> ValidationIssue {
    ValidationIssue {
        record_kind: RecordKind::Conference,
        record_id: conference_id.to_string(),
        conference_id: None,
        field: "id".to_string(),
        message: format!(
            "ID '{}' cannot name a session file (no '/', '\\', '.' or '..')",
            conference_id
        ),
    }
}

/// Checks the required fields of a conference.
pub fn validate_conference(conference: &Conference) -> Vec<ValidationIssue> {
    let mut problems = Vec::new();
    required(&conference.name, "name", "Conference name", &mut problems);
    required(&conference.date, "date", "Date", &mut problems);
    required(&conference.location, "location", "Location", &mut problems);
    required(&conference.slug, "slug", "Slug", &mut problems);
    required(&conference.id, "id", "ID", &mut problems);

    problems
        .into_iter()
        .map(|(field, message)| ValidationIssue {
            record_kind: RecordKind::Conference,
            record_id: conference.id.clone(),
            conference_id: None,
            field,
            message,
        })
        .collect()
}

/// Checks the required fields and video link of a session.
pub fn validate_session(conference_id: &str, session: &Session) -> Vec<ValidationIssue> {
    let mut problems = Vec::new();
    required(&session.title, "title", "Session title", &mut problems);
    required(&session.speaker, "speaker", "Speaker", &mut problems);
    required(&session.id, "id", "ID", &mut problems);
    if !session.youtube_url.trim().is_empty() && !youtube::is_valid_url(&session.youtube_url) {
        problems.push(("youtubeUrl".to_string(), "Invalid YouTube URL".to_string()));
    }
    if let Some(extracted_at) = &session.extracted_at {
        if extracted_at.to_utc().is_none() {
            problems.push((
                "extractedAt".to_string(),
                format!("'{}' is not an RFC 3339 timestamp", extracted_at),
            ));
        }
    }

    problems
        .into_iter()
        .map(|(field, message)| ValidationIssue {
            record_kind: RecordKind::Session,
            record_id: session.id.clone(),
            conference_id: Some(conference_id.to_string()),
            field,
            message,
        })
        .collect()
}

/// Issues for ids that occur more than once in one collection.
pub fn duplicate_id_issues<R: Record>(
    kind: RecordKind,
    conference_id: Option<&str>,
    records: &[R],
) -> Vec<ValidationIssue> {
    duplicate_ids(records)
        .into_iter()
        .map(|id| ValidationIssue {
            record_kind: kind,
            message: format!("Duplicate {} id '{}'", R::KIND, id),
            record_id: id,
            conference_id: conference_id.map(str::to_string),
            field: "id".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_conference() -> Conference {
        Conference {
            date: "2024-09-10".to_string(),
            location: "Montreal".to_string(),
            ..Conference::from_name("RustConf")
        }
    }

    #[test]
    fn test_complete_conference_passes() {
        assert!(validate_conference(&complete_conference()).is_empty());
    }

    #[test]
    fn test_blank_fields_reported() {
        let conference = Conference {
            location: "   ".to_string(),
            ..complete_conference()
        };
        let issues = validate_conference(&conference);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "location");
        assert_eq!(issues[0].record_kind, RecordKind::Conference);
    }

    #[test]
    fn test_session_video_link_checked() {
        let session = Session {
            speaker: "Ferris".to_string(),
            youtube_url: "https://vimeo.com/1".to_string(),
            ..Session::from_title("Intro")
        };
        let issues = validate_session("rustconf", &session);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "youtubeUrl");
        assert_eq!(issues[0].conference_id.as_deref(), Some("rustconf"));
    }

    #[test]
    fn test_session_extracted_at_checked() {
        let mut session: Session = serde_json::from_value(serde_json::json!({
            "id": "intro",
            "title": "Intro",
            "speaker": "Ferris",
            "extractedAt": "2024-05-01T10:00:00+02:00"
        }))
        .unwrap();
        assert!(validate_session("rustconf", &session).is_empty());

        session.extracted_at = Some(crate::session::Timestamp::from_utc(chrono::Utc::now()));
        assert!(validate_session("rustconf", &session).is_empty());

        let session: Session = serde_json::from_value(serde_json::json!({
            "id": "intro",
            "title": "Intro",
            "speaker": "Ferris",
            "extractedAt": "last tuesday"
        }))
        .unwrap();
        let issues = validate_session("rustconf", &session);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "extractedAt");
    }

    #[test]
    fn test_usable_conference_ids() {
        assert!(is_usable_conference_id("rustconf-2024"));
        for id in ["", "  ", ".", "..", "rust/conf", "rust\\conf"] {
            assert!(!is_usable_conference_id(id), "{id:?}");
        }
    }

    #[test]
    fn test_duplicate_ids() {
        let conferences = vec![complete_conference(), complete_conference()];
        let issues = duplicate_id_issues(RecordKind::Conference, None, &conferences);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].record_id, "rustconf");
    }
}
