use serde_json::Value;

use crate::api::models::DashboardSummary;
use crate::api::{ApiError, Endpoint};
use crate::view::fetch::{self, FetchState};

#[derive(Clone, Debug)]
pub struct DashboardView {
    pub state: FetchState<DashboardSummary>,
    /// Path of the last snapshot written during this mount.
    pub snapshot_saved: Option<String>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            snapshot_saved: None,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::Dashboard
    }

    /// Loaded only once the payload object carries at least one key; an empty
    /// object keeps the view blank.
    pub fn receive(&mut self, outcome: Result<Value, ApiError>) {
        self.state = match outcome {
            Ok(Value::Object(map)) if map.is_empty() => FetchState::Loading,
            Ok(value @ Value::Object(_)) => fetch::decode(Endpoint::Dashboard, Ok(value)),
            Ok(other) => {
                log::warn!("dashboard payload is not an object: {other}");
                FetchState::Failed
            }
            Err(err) => fetch::decode(Endpoint::Dashboard, Err(err)),
        };
    }

    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.state.loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_stays_blank() {
        let mut view = DashboardView::new();
        view.receive(Ok(json!({})));
        assert_eq!(view.state, FetchState::Loading);
    }

    #[test]
    fn test_any_key_counts_as_loaded() {
        let mut view = DashboardView::new();
        view.receive(Ok(json!({"activitys": []})));
        let summary = view.summary().unwrap();
        assert_eq!(summary.total.word, 0);
        assert!(summary.activitys.is_empty());
    }

    #[test]
    fn test_negative_non_correct_total_passes_through() {
        let mut view = DashboardView::new();
        view.receive(Ok(json!({
            "total": {"word": 5, "isCorrect": 8, "bookmark": 1},
            "activitys": [],
            "learningLog": []
        })));
        assert_eq!(view.summary().unwrap().total.non_correct_total(), -3);
    }

    #[test]
    fn test_array_payload_fails() {
        let mut view = DashboardView::new();
        view.receive(Ok(json!([1, 2])));
        assert!(view.state.is_failed());
    }
}
