use serde::{Deserialize, Serialize};

/// Patient identity and demographics.
///
/// Carried through to responses and the prediction log; never scored.
/// `patient_id` is an opaque correlation key supplied by the caller —
/// it is not validated for uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Patient {
    pub patient_id: String,
    pub patient_name: String,
    pub age: u32,
    pub sex: String,
    pub weight: f64,
    pub height: f64,
}
