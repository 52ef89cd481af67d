use crate::scoring;
use crate::types::assessment::RiskAssessment;
use crate::types::patient::PatientRecord;

/// Two-state view model: gathering input, or showing a finished assessment.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Collecting,
    ShowingResults(RiskAssessment),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores `record` and switches to the results view, replacing any
    /// earlier assessment.
    pub fn submit(&mut self, record: &PatientRecord) -> &RiskAssessment {
        *self = Self::ShowingResults(scoring::assess(record));
        match self {
            Self::ShowingResults(assessment) => assessment,
            Self::Collecting => unreachable!("submit always stores results"),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Collecting;
    }

    pub fn assessment(&self) -> Option<&RiskAssessment> {
        match self {
            Self::ShowingResults(assessment) => Some(assessment),
            Self::Collecting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::form_defaults;
    use crate::types::assessment::RiskLevel;

    #[test]
    fn new_session_is_collecting() {
        let session = Session::new();
        assert_eq!(session, Session::Collecting);
        assert!(session.assessment().is_none());
    }

    #[test]
    fn submit_then_reset_round_trips_the_view() {
        let mut session = Session::new();
        let submitted = session.submit(&form_defaults()).clone();
        assert_eq!(submitted.risk_score, 19);
        assert_eq!(session.assessment(), Some(&submitted));
        assert_eq!(
            session.assessment().map(|a| a.risk_level),
            Some(RiskLevel::Low)
        );

        session.reset();
        assert_eq!(session, Session::Collecting);
    }

    #[test]
    fn resubmitting_replaces_previous_results() {
        let mut session = Session::new();
        session.submit(&form_defaults());
        let record = PatientRecord {
            age: 85,
            pulmonary_disease: true,
            ..form_defaults()
        };
        session.submit(&record);
        // 30 (age) + 5 (male) + 4 (fever) + 15 (pulmonary)
        assert_eq!(session.assessment().map(|a| a.risk_score), Some(54));
        assert_eq!(
            session.assessment().map(|a| a.risk_level),
            Some(RiskLevel::High)
        );
    }
}
