use serde::{Deserialize, Serialize};

/// The five diagnostic categories, ordered from least to most severe.
///
/// Each category carries a fixed severity tier, risk label, and
/// recommendation text — a closed lookup, never derived per request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosisCategory {
    NotSick,
    MildIllness,
    AcuteIllness,
    ChronicIllness,
    TerminalIllness,
}

impl DiagnosisCategory {
    /// All categories, in severity order.
    pub const ALL: [DiagnosisCategory; 5] = [
        DiagnosisCategory::NotSick,
        DiagnosisCategory::MildIllness,
        DiagnosisCategory::AcuteIllness,
        DiagnosisCategory::ChronicIllness,
        DiagnosisCategory::TerminalIllness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosisCategory::NotSick => "NOT_SICK",
            DiagnosisCategory::MildIllness => "MILD_ILLNESS",
            DiagnosisCategory::AcuteIllness => "ACUTE_ILLNESS",
            DiagnosisCategory::ChronicIllness => "CHRONIC_ILLNESS",
            DiagnosisCategory::TerminalIllness => "TERMINAL_ILLNESS",
        }
    }

    /// Fixed severity tier, 0–4.
    pub fn severity_tier(&self) -> u8 {
        match self {
            DiagnosisCategory::NotSick => 0,
            DiagnosisCategory::MildIllness => 1,
            DiagnosisCategory::AcuteIllness => 2,
            DiagnosisCategory::ChronicIllness => 3,
            DiagnosisCategory::TerminalIllness => 4,
        }
    }

    pub fn risk_label(&self) -> &'static str {
        match self {
            DiagnosisCategory::NotSick => "Low",
            DiagnosisCategory::MildIllness => "Medium-Low",
            DiagnosisCategory::AcuteIllness => "Medium-High",
            DiagnosisCategory::ChronicIllness => "High",
            DiagnosisCategory::TerminalIllness => "Very High",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            DiagnosisCategory::NotSick => {
                "No treatment required at this time. Rest and a balanced diet."
            }
            DiagnosisCategory::MildIllness => {
                "Rest, hydration, and medication for specific symptoms."
            }
            DiagnosisCategory::AcuteIllness => {
                "Requires immediate medical attention. Possible antibiotic treatment."
            }
            DiagnosisCategory::ChronicIllness => {
                "Requires specialized medical care and continuous follow-up."
            }
            DiagnosisCategory::TerminalIllness => {
                "Requires palliative care and specialized supportive treatment."
            }
        }
    }
}
