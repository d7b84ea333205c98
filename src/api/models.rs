//! View models mirrored from API responses. None of these are owned by the
//! client: flags are observed, never derived.

use serde::{Deserialize, Serialize};

/// String-typed boolean the backend expects in update bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "TRUE")]
    True,
    #[serde(rename = "FALSE")]
    False,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagUpdate {
    pub pkey: i64,
    pub flag: Flag,
}

impl FlagUpdate {
    pub fn set(pkey: i64) -> Self {
        Self {
            pkey,
            flag: Flag::True,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterWord {
    pub eng_val: String,
    pub jap_val: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteWord {
    pub pkey: i64,
}

/// `{msg}` body returned by the mutation endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub msg: String,
}

/// One quiz item from `/learning`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub id: i64,
    pub english: String,
    #[serde(default)]
    pub japanese: Option<String>,
    pub correct: String,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub bookmark_flag: bool,
    #[serde(default)]
    pub is_correct: Option<bool>,
}

/// Activity row. The list endpoint sends `{date, detail}`, the dashboard feed
/// sends `{type, detail}`; both land here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub detail: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub english: String,
    #[serde(default)]
    pub japanese: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishListEntry {
    #[serde(default)]
    pub is_correct: bool,
    pub english: String,
    #[serde(default)]
    pub japanese: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningLogEntry {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub count: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default)]
    pub word: i64,
    #[serde(default)]
    pub bookmark: i64,
    #[serde(default, rename = "isCorrect")]
    pub is_correct: i64,
}

impl Totals {
    /// Words not yet learned. Not clamped: inconsistent upstream totals
    /// produce a negative count and it is passed on as-is.
    pub fn non_correct_total(&self) -> i64 {
        self.word - self.is_correct
    }
}

/// Aggregate payload of the dashboard endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total: Totals,
    #[serde(default)]
    pub activitys: Vec<ActivityRecord>,
    #[serde(default, rename = "learningLog")]
    pub learning_log: Vec<LearningLogEntry>,
}

impl DashboardSummary {
    /// One chart point per log entry, in response order.
    pub fn learning_log_points(&self) -> Vec<(f64, f64)> {
        self.learning_log
            .iter()
            .enumerate()
            .map(|(i, entry)| (i as f64, entry.count as f64))
            .collect()
    }
}
