use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::diagnosis::DiagnosisCategory;

/// Maximum number of entries kept in the recent-prediction history.
pub const RECENT_HISTORY_LIMIT: usize = 5;

/// One entry in the recent-prediction history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentPrediction {
    pub diagnosis: DiagnosisCategory,
    pub timestamp: jiff::Timestamp,
}

/// The persisted, process-wide statistics record.
///
/// Counters are monotone and never reset; their sum equals the total number
/// of classification calls ever made. The history holds at most
/// [`RECENT_HISTORY_LIMIT`] entries, insertion ordered, oldest evicted first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRecord {
    pub category_counts: BTreeMap<DiagnosisCategory, u64>,
    pub last_predictions: Vec<RecentPrediction>,
    pub last_prediction_date: Option<jiff::Timestamp>,
}

impl StatsRecord {
    /// A fresh record: all five counters at zero, empty history, no timestamp.
    pub fn new() -> Self {
        Self {
            category_counts: DiagnosisCategory::ALL.iter().map(|&c| (c, 0)).collect(),
            last_predictions: Vec::new(),
            last_prediction_date: None,
        }
    }

    /// Apply one classification outcome: bump the category counter, push the
    /// prediction onto the history, trim to the last
    /// [`RECENT_HISTORY_LIMIT`], and stamp the update time.
    pub fn apply(&mut self, category: DiagnosisCategory, timestamp: jiff::Timestamp) {
        *self.category_counts.entry(category).or_insert(0) += 1;
        self.last_predictions.push(RecentPrediction {
            diagnosis: category,
            timestamp,
        });
        if self.last_predictions.len() > RECENT_HISTORY_LIMIT {
            let excess = self.last_predictions.len() - RECENT_HISTORY_LIMIT;
            self.last_predictions.drain(..excess);
        }
        self.last_prediction_date = Some(timestamp);
    }

    /// Sum of all category counters.
    pub fn total(&self) -> u64 {
        self.category_counts.values().sum()
    }
}

impl Default for StatsRecord {
    fn default() -> Self {
        Self::new()
    }
}
