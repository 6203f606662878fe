use chrono::Local;
use chrono::SecondsFormat;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use uuid::Uuid;

use super::GenerationRequest;
use super::ProjectSpecification;

/// One completed generation as it sits in the history file. Entries are
/// immutable once written; newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: String,
    pub request: GenerationRequest,
    pub result: Vec<ProjectSpecification>,
}

impl HistoryEntry {
    pub fn new(request: GenerationRequest, result: Vec<ProjectSpecification>) -> HistoryEntry {
        return HistoryEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            request,
            result,
        };
    }

    /// Label shown in the history sidebar and `history list`.
    pub fn label(&self) -> String {
        let title = self
            .result
            .first()
            .map(|spec| return spec.title.clone())
            .unwrap_or_else(|| return "Untitled".to_string());

        return format!("{} : {}", self.request.industry, title);
    }
}
