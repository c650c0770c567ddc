use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary outcome of a prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    LowRisk,
    HighRisk,
}

impl RiskLabel {
    /// Maps the predictor's class label: 0 = no disease, 1 = disease.
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            RiskLabel::HighRisk
        } else {
            RiskLabel::LowRisk
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLabel::LowRisk => "Low Risk",
            RiskLabel::HighRisk => "High Risk",
        })
    }
}

/// Ephemeral result of one prediction request; created per request and
/// discarded after display.
///
/// Holds the unrounded positive-class probability. Rounding happens only at
/// display time so downstream consumers keep full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub label: RiskLabel,
    pub probability: f64,
}

impl RiskAssessment {
    pub fn from_prediction(class: u8, positive_probability: f64) -> Self {
        Self {
            label: RiskLabel::from_class(class),
            probability: positive_probability,
        }
    }

    /// Probability of heart disease, rounded to two decimals for display.
    pub fn display_probability(&self) -> String {
        format!("{:.2}", self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_mapping() {
        assert_eq!(RiskLabel::from_class(1), RiskLabel::HighRisk);
        assert_eq!(RiskLabel::from_class(0), RiskLabel::LowRisk);
        assert_eq!(RiskLabel::HighRisk.to_string(), "High Risk");
        assert_eq!(RiskLabel::LowRisk.to_string(), "Low Risk");
    }

    #[test]
    fn test_display_rounds_but_keeps_raw_value() {
        let assessment = RiskAssessment::from_prediction(1, 0.8347);
        assert_eq!(assessment.display_probability(), "0.83");
        assert_eq!(assessment.probability, 0.8347);
    }
}
