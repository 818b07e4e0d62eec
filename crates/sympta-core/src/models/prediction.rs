use serde::{Deserialize, Serialize};

use crate::models::diagnosis::DiagnosisCategory;
use crate::models::symptoms::Lifestyle;

/// One entry in the append-only prediction log.
///
/// Written once per classification call, in call order; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub timestamp: jiff::Timestamp,
    pub patient_id: String,
    pub patient_name: String,
    pub age: u32,
    pub diagnosis: DiagnosisCategory,
    pub primary_symptoms: Vec<String>,
    pub lifestyle: Lifestyle,
}
