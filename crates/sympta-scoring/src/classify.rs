use sympta_core::models::diagnosis::DiagnosisCategory;

/// Map a risk score to its base category. Band bounds are inclusive.
pub fn base_category(score: u32) -> DiagnosisCategory {
    match score {
        0..=6 => DiagnosisCategory::NotSick,
        7..=12 => DiagnosisCategory::MildIllness,
        13..=18 => DiagnosisCategory::AcuteIllness,
        19..=24 => DiagnosisCategory::ChronicIllness,
        _ => DiagnosisCategory::TerminalIllness,
    }
}

/// Classify a risk score, applying the critical escalation rule.
///
/// When blood in urine or stool co-occurs with fever, the two lowest bands
/// are bumped up exactly one band. Higher bands are left unescalated — the
/// rule only defines transitions for NOT_SICK and MILD_ILLNESS.
pub fn classify(score: u32, critical_trigger: bool) -> DiagnosisCategory {
    let base = base_category(score);
    if critical_trigger {
        escalate(base)
    } else {
        base
    }
}

fn escalate(category: DiagnosisCategory) -> DiagnosisCategory {
    match category {
        DiagnosisCategory::NotSick => DiagnosisCategory::MildIllness,
        DiagnosisCategory::MildIllness => DiagnosisCategory::AcuteIllness,
        other => other,
    }
}
