use crate::types::assessment::RiskLevel;
use crate::types::patient::PatientRecord;

const HIGH_RISK: [&str; 4] = [
    "Immediate hospitalization and intensive monitoring recommended",
    "Consider ICU admission if respiratory support needed",
    "Initiate antiviral therapy if within treatment window",
    "Monitor for complications: ARDS, cardiac events, thromboembolism",
];

const MODERATE_RISK: [&str; 4] = [
    "Hospital admission for observation and supportive care",
    "Frequent monitoring of vital signs and oxygen saturation",
    "Consider early intervention therapies",
    "Close outpatient follow-up if discharged",
];

const LOW_RISK: [&str; 4] = [
    "Outpatient management with close monitoring",
    "Self-isolation and symptom monitoring",
    "Seek immediate care if symptoms worsen",
    "Regular telemedicine follow-up",
];

pub fn tier_block(level: RiskLevel) -> &'static [&'static str; 4] {
    match level {
        RiskLevel::High => &HIGH_RISK,
        RiskLevel::Moderate => &MODERATE_RISK,
        RiskLevel::Low => &LOW_RISK,
    }
}

/// Tier block first, then the condition-specific add-ons.
pub fn recommendations(record: &PatientRecord, level: RiskLevel) -> Vec<String> {
    let add_ons = [
        (record.oxygen_saturation < 92, "Oxygen therapy indicated"),
        (record.diabetes, "Strict glucose control monitoring"),
        (
            record.heart_disease,
            "Cardiac monitoring and troponin surveillance",
        ),
        (
            record.age >= 65,
            "Enhanced supportive care due to advanced age",
        ),
    ];

    tier_block(level)
        .iter()
        .copied()
        .chain(
            add_ons
                .into_iter()
                .filter(|(applies, _)| *applies)
                .map(|(_, text)| text),
        )
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::baseline;

    #[test]
    fn each_tier_has_four_distinct_entries() {
        for level in [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High] {
            let recs = recommendations(&baseline(), level);
            assert_eq!(recs.len(), 4);
            assert_eq!(recs, tier_block(level));
        }
    }

    #[test]
    fn add_ons_follow_tier_block_in_order() {
        let record = PatientRecord {
            age: 70,
            oxygen_saturation: 85,
            diabetes: true,
            heart_disease: true,
            ..baseline()
        };
        let recs = recommendations(&record, RiskLevel::Moderate);
        assert_eq!(recs.len(), 8);
        assert_eq!(
            &recs[4..],
            &[
                "Oxygen therapy indicated",
                "Strict glucose control monitoring",
                "Cardiac monitoring and troponin surveillance",
                "Enhanced supportive care due to advanced age",
            ]
        );
    }

    #[test]
    fn oxygen_add_on_starts_below_ninety_two() {
        let at = |oxygen_saturation| {
            recommendations(
                &PatientRecord {
                    oxygen_saturation,
                    ..baseline()
                },
                RiskLevel::Low,
            )
        };
        assert_eq!(at(92).len(), 4);
        assert_eq!(
            at(91).last().map(String::as_str),
            Some("Oxygen therapy indicated")
        );
    }

    #[test]
    fn age_add_on_starts_at_sixty_five() {
        let count = |age| {
            recommendations(&PatientRecord { age, ..baseline() }, RiskLevel::Low).len()
        };
        assert_eq!(count(64), 4);
        assert_eq!(count(65), 5);
    }
}
