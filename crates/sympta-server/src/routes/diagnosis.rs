use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sympta_audit::events::AuditEvent;
use sympta_core::models::diagnosis::DiagnosisCategory;
use sympta_core::models::patient::Patient;
use sympta_core::models::prediction::PredictionRecord;
use sympta_core::models::symptoms::{Lifestyle, PrimarySymptom, SecondarySymptoms};
use sympta_scoring::{classify, risk_score, risk_score_from_parts};

use crate::error::ApiError;
use crate::state::AppState;

/// The strict structured request shape. Unknown fields are rejected before
/// scoring; the patient block is required.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosisRequest {
    pub patient: Patient,
    #[serde(default)]
    pub lifestyle: Lifestyle,
    #[serde(default)]
    pub primary_symptoms: Vec<PrimarySymptom>,
    #[serde(default)]
    pub secondary_symptoms: SecondarySymptoms,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResponse {
    pub patient_id: String,
    pub patient_name: String,
    pub age: u32,
    pub sex: String,
    pub diagnosis: DiagnosisCategory,
    pub recommendations: String,
    pub severity_tier: u8,
    pub risk_label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedDiagnosisResponse {
    pub diagnosis: DiagnosisCategory,
    pub risk_score: u32,
    pub patient_id: String,
    pub patient_name: String,
}

/// `POST /api/diagnosis` — the structured variant.
pub async fn diagnose(
    State(state): State<AppState>,
    Json(request): Json<DiagnosisRequest>,
) -> Result<Json<DiagnosisResponse>, ApiError> {
    let score = risk_score(
        &request.lifestyle,
        &request.primary_symptoms,
        &request.secondary_symptoms,
    );
    let category = classify(score, request.secondary_symptoms.critical_trigger());

    let primary_names = request
        .primary_symptoms
        .iter()
        .map(|s| s.name.clone())
        .collect();
    record_classification(
        &state,
        category,
        score,
        &request.patient.patient_id,
        &request.patient.patient_name,
        request.patient.age,
        primary_names,
        request.lifestyle,
    )
    .await?;

    Ok(Json(DiagnosisResponse {
        patient_id: request.patient.patient_id,
        patient_name: request.patient.patient_name,
        age: request.patient.age,
        sex: request.patient.sex,
        diagnosis: category,
        recommendations: category.recommendation().to_string(),
        severity_tier: category.severity_tier(),
        risk_label: category.risk_label().to_string(),
    }))
}

/// The fourteen secondary-symptom keys the loose variant inspects.
const SECONDARY_FLAG_KEYS: [&str; 14] = [
    "fever",
    "rash",
    "cough",
    "skinEruptions",
    "nightSweats",
    "bloodInUrine",
    "bloodInStool",
    "constipation",
    "nausea",
    "headache",
    "abdominalPain",
    "insomnia",
    "fatigue",
    "diarrhea",
];

/// The free-text symptom fields. Each non-blank one adds a single
/// secondary-symptom count point.
const FREE_TEXT_SYMPTOM_KEYS: [&str; 3] =
    ["primarySymptom", "secondarySymptom", "tertiarySymptom"];

/// `POST /api/simplified-diagnosis` — the loose variant.
///
/// Reads an open key-value map with defaulted lookups: missing flags are
/// false, missing severity levels are 1, missing text is empty. There is no
/// schema validation; only a present-but-non-numeric severity is rejected.
pub async fn simplified_diagnose(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SimplifiedDiagnosisResponse>, ApiError> {
    let map = body
        .as_object()
        .ok_or_else(|| ApiError::BadRequest("request body must be a JSON object".to_string()))?;

    let lifestyle = Lifestyle {
        smoking: flag(map, "smoking"),
        alcohol: flag(map, "alcohol"),
        drugs: flag(map, "drugs"),
    };

    let primary_severity = coerce_severity(map, "severityLevel1")?
        + coerce_severity(map, "severityLevel2")?
        + coerce_severity(map, "severityLevel3")?;

    let mut symptom_count = SECONDARY_FLAG_KEYS
        .iter()
        .filter(|key| flag(map, key))
        .count() as u32;
    for key in FREE_TEXT_SYMPTOM_KEYS {
        if !text(map, key).trim().is_empty() {
            symptom_count += 1;
        }
    }

    let score = risk_score_from_parts(primary_severity, lifestyle.risk_points(), symptom_count);
    let critical = (flag(map, "bloodInUrine") || flag(map, "bloodInStool")) && flag(map, "fever");
    let category = classify(score, critical);

    let patient_id = text(map, "patientId");
    let patient_name = text(map, "patientName");
    let age = map
        .get("age")
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0);
    let primary_names = FREE_TEXT_SYMPTOM_KEYS
        .iter()
        .map(|key| text(map, key))
        .filter(|name| !name.trim().is_empty())
        .collect();

    record_classification(
        &state,
        category,
        score,
        &patient_id,
        &patient_name,
        age,
        primary_names,
        lifestyle,
    )
    .await?;

    Ok(Json(SimplifiedDiagnosisResponse {
        diagnosis: category,
        risk_score: score,
        patient_id,
        patient_name,
    }))
}

/// The single shared statistics/audit path for both request variants.
///
/// The statistics update must succeed for the response to be produced; the
/// prediction-log append is best effort and never invalidates an
/// already-computed diagnosis.
#[allow(clippy::too_many_arguments)]
async fn record_classification(
    state: &AppState,
    category: DiagnosisCategory,
    score: u32,
    patient_id: &str,
    patient_name: &str,
    age: u32,
    primary_symptoms: Vec<String>,
    lifestyle: Lifestyle,
) -> Result<(), ApiError> {
    {
        let mut stats = state.stats.lock().await;
        stats.record(category).await?;
    }

    let entry = PredictionRecord {
        timestamp: jiff::Timestamp::now(),
        patient_id: patient_id.to_string(),
        patient_name: patient_name.to_string(),
        age,
        diagnosis: category,
        primary_symptoms,
        lifestyle,
    };
    {
        let mut log = state.log.lock().await;
        if let Err(e) = log.append(&entry).await {
            tracing::warn!(error = %e, "prediction log append failed");
        }
    }

    AuditEvent::new("classify", "diagnosis", patient_id)
        .with_details(serde_json::json!({
            "category": category.as_str(),
            "score": score,
        }))
        .emit();

    Ok(())
}

fn flag(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn text(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Defaulted severity lookup: absent or null means 1; integers and numeric
/// strings coerce; anything else — including values outside `u32` range —
/// fails at the coercion boundary.
fn coerce_severity(map: &Map<String, Value>, key: &str) -> Result<u32, ApiError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(1),
        Some(Value::String(s)) => s.trim().parse::<u32>().map_err(|_| {
            ApiError::BadRequest(format!("field {key} is not a valid severity: {s:?}"))
        }),
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ApiError::BadRequest(format!("field {key} is not a valid severity"))),
    }
}
