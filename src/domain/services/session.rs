#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::domain::models::GenerationRequest;
use crate::domain::models::HistoryEntry;
use crate::domain::models::ProjectSpecification;
use crate::domain::models::View;
use crate::domain::services::HistoryStore;

/// Single owner of session state. Every UI surface reads from here and
/// mutates through the methods below; nothing else touches the fields.
///
/// Requests are stamped with a sequence number on submit. Completions and
/// failures carry the stamp back, and anything that does not match the
/// latest stamp is dropped instead of clobbering newer state.
pub struct SessionController {
    pub view: View,
    pub loading: bool,
    pub error: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub active_history_id: Option<String>,
    pub last_request: Option<GenerationRequest>,
    pub current_result: Vec<ProjectSpecification>,
    store: HistoryStore,
    seq: u64,
}

impl SessionController {
    pub async fn new(store: HistoryStore) -> SessionController {
        let history = store.load_all().await;

        return SessionController {
            view: View::Landing,
            loading: false,
            error: None,
            history,
            active_history_id: None,
            last_request: None,
            current_result: vec![],
            store,
            seq: 0,
        };
    }

    pub fn start(&mut self) {
        if self.view == View::Landing {
            self.view = View::Home;
        }
    }

    /// Admits a new generation and returns its sequence stamp, or None when
    /// one is already in flight.
    pub fn submit(&mut self, request: GenerationRequest) -> Option<u64> {
        if self.loading {
            return None;
        }

        self.loading = true;
        self.error = None;
        self.last_request = Some(request);
        self.seq += 1;

        return Some(self.seq);
    }

    /// Re-runs the last submitted request verbatim.
    pub fn regenerate(&mut self) -> Option<(u64, GenerationRequest)> {
        if self.loading {
            return None;
        }

        let request = self.last_request.clone()?;
        self.loading = true;
        self.error = None;
        self.seq += 1;

        return Some((self.seq, request));
    }

    pub async fn complete_generation(
        &mut self,
        seq: u64,
        request: GenerationRequest,
        result: Vec<ProjectSpecification>,
    ) {
        if seq != self.seq {
            tracing::debug!(seq = seq, current = self.seq, "Dropping stale generation result");
            return;
        }

        self.loading = false;
        self.error = None;
        self.current_result = result.clone();

        let entry = HistoryEntry::new(request, result);
        self.active_history_id = Some(entry.id.clone());
        self.history = self.store.insert(entry, &self.history).await;
        self.view = View::Results;
    }

    pub fn fail_generation(&mut self, seq: u64, message: String) {
        if seq != self.seq {
            tracing::debug!(seq = seq, current = self.seq, "Dropping stale generation failure");
            return;
        }

        self.loading = false;
        self.error = Some(message);
    }

    /// Restores a stored entry into the results view. Returns false when the
    /// id is unknown or a generation is in flight.
    pub fn load_from_history(&mut self, id: &str) -> bool {
        if self.loading {
            return false;
        }

        let Some(entry) = self.history.iter().find(|entry| return entry.id == id) else {
            return false;
        };

        self.current_result = entry.result.clone();
        self.last_request = Some(entry.request.clone());
        self.active_history_id = Some(entry.id.clone());
        self.error = None;
        self.view = View::Results;

        return true;
    }

    /// Back to a blank generation form. Keeps the last request around so a
    /// later regenerate still works from history context.
    pub fn new_project(&mut self) {
        self.view = View::Home;
        self.current_result = vec![];
        self.active_history_id = None;
        self.error = None;
    }

    pub fn open_developer_info(&mut self) {
        self.active_history_id = None;
        self.view = View::Developer;
    }

    /// Leaves the developer screen without dropping any session data.
    pub fn close_developer_info(&mut self) {
        if self.view == View::Developer {
            self.view = View::Home;
        }
    }

    /// Empties the store and falls back to a blank form, as NewProject does.
    pub async fn clear_history(&mut self) {
        if let Err(err) = self.store.clear().await {
            tracing::error!(error = ?err, "Failed to clear history");
        }

        self.history = vec![];
        self.new_project();
    }
}
