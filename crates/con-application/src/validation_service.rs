//! Whole-dataset validation behind the "Validate Data" menu command.

use std::sync::Arc;

use con_core::Result;
use con_core::conference::ConferenceRepository;
use con_core::session::SessionRepository;
use con_core::validation::{
    RecordKind, ValidationReport, duplicate_id_issues, is_usable_conference_id,
    unusable_conference_id_issue, validate_conference, validate_session,
};

/// Walks every conference and its sessions and collects broken field rules.
pub struct DataValidationService {
    conferences: Arc<dyn ConferenceRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl DataValidationService {
    pub fn new(
        conferences: Arc<dyn ConferenceRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            conferences,
            sessions,
        }
    }

    pub async fn validate_dataset(&self) -> Result<ValidationReport> {
        let conferences = self.conferences.list().await?;
        let mut report = ValidationReport {
            conferences_checked: conferences.len(),
            issues: duplicate_id_issues(RecordKind::Conference, None, &conferences),
            ..ValidationReport::default()
        };

        for conference in &conferences {
            report.issues.extend(validate_conference(conference));
            if !is_usable_conference_id(&conference.id) {
                // A blank id is already reported as missing.
                if !conference.id.trim().is_empty() {
                    report.issues.push(unusable_conference_id_issue(&conference.id));
                }
                continue;
            }

            let sessions = self.sessions.list(&conference.id).await?;
            report.sessions_checked += sessions.len();
            report.issues.extend(duplicate_id_issues(
                RecordKind::Session,
                Some(&conference.id),
                &sessions,
            ));
            for session in &sessions {
                report.issues.extend(validate_session(&conference.id, session));
            }
        }

        tracing::info!(
            "[DataValidation] Checked {} conferences and {} sessions, {} issues",
            report.conferences_checked,
            report.sessions_checked,
            report.issues.len()
        );
        Ok(report)
    }
}
