use serde::{Deserialize, Serialize};

/// Lifestyle risk factors. Each true flag adds one point to the risk score.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lifestyle {
    pub smoking: bool,
    pub alcohol: bool,
    pub drugs: bool,
}

impl Lifestyle {
    /// Number of true flags.
    pub fn risk_points(&self) -> u32 {
        u32::from(self.smoking) + u32::from(self.alcohol) + u32::from(self.drugs)
    }
}

/// A named primary symptom with a severity level (nominal 1–5, not enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimarySymptom {
    pub name: String,
    #[serde(default = "default_severity")]
    pub severity: u32,
}

fn default_severity() -> u32 {
    1
}

/// The fourteen secondary symptom flags plus a free-text field.
///
/// `additional_symptoms` never affects scoring. Blood in urine or stool
/// combined with fever forms the critical escalation trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SecondarySymptoms {
    pub fever: bool,
    pub rash: bool,
    pub cough: bool,
    pub skin_eruptions: bool,
    pub night_sweats: bool,
    pub blood_in_urine: bool,
    pub blood_in_stool: bool,
    pub constipation: bool,
    pub nausea: bool,
    pub headache: bool,
    pub abdominal_pain: bool,
    pub insomnia: bool,
    pub fatigue: bool,
    pub diarrhea: bool,
    pub additional_symptoms: String,
}

impl SecondarySymptoms {
    /// Number of true flags (the free-text field does not count).
    pub fn true_count(&self) -> u32 {
        [
            self.fever,
            self.rash,
            self.cough,
            self.skin_eruptions,
            self.night_sweats,
            self.blood_in_urine,
            self.blood_in_stool,
            self.constipation,
            self.nausea,
            self.headache,
            self.abdominal_pain,
            self.insomnia,
            self.fatigue,
            self.diarrhea,
        ]
        .iter()
        .filter(|&&flag| flag)
        .count() as u32
    }

    /// Blood presence plus fever: the critical escalation trigger.
    pub fn critical_trigger(&self) -> bool {
        (self.blood_in_urine || self.blood_in_stool) && self.fever
    }
}
