use sympta_core::models::symptoms::{Lifestyle, PrimarySymptom, SecondarySymptoms};

/// The secondary-symptom contribution never exceeds this, no matter how many
/// of the fourteen flags are set.
pub const SECONDARY_SYMPTOM_CAP: u32 = 10;

/// Compute the risk score from its three raw contributions:
///
/// `primary_severity_sum + lifestyle_points + min(10, secondary_count)`
///
/// The primary-severity sum and lifestyle count are uncapped; arithmetic
/// saturates at `u32::MAX` rather than wrapping.
pub fn risk_score_from_parts(
    primary_severity_sum: u32,
    lifestyle_points: u32,
    secondary_count: u32,
) -> u32 {
    primary_severity_sum
        .saturating_add(lifestyle_points)
        .saturating_add(secondary_count.min(SECONDARY_SYMPTOM_CAP))
}

/// Compute the risk score for a structured request.
///
/// Primary symptom order is irrelevant; only the sum of severities matters.
pub fn risk_score(
    lifestyle: &Lifestyle,
    primary_symptoms: &[PrimarySymptom],
    secondary_symptoms: &SecondarySymptoms,
) -> u32 {
    let severity_sum = primary_symptoms
        .iter()
        .fold(0u32, |sum, s| sum.saturating_add(s.severity));
    risk_score_from_parts(
        severity_sum,
        lifestyle.risk_points(),
        secondary_symptoms.true_count(),
    )
}
