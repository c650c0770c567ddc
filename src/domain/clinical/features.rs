use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Chest pain type reported at intake.
///
/// Discriminants are the integer codes the training pipeline assigned to
/// each category. Changing them invalidates every deployed model artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestPainType {
    TypicalAngina = 0,
    AtypicalAngina = 1,
    NonAnginalPain = 2,
    Asymptomatic = 3,
}

impl ChestPainType {
    pub const ALL: [ChestPainType; 4] = [
        ChestPainType::TypicalAngina,
        ChestPainType::AtypicalAngina,
        ChestPainType::NonAnginalPain,
        ChestPainType::Asymptomatic,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            ChestPainType::TypicalAngina => "Typical Angina",
            ChestPainType::AtypicalAngina => "Atypical Angina",
            ChestPainType::NonAnginalPain => "Non-anginal Pain",
            ChestPainType::Asymptomatic => "Asymptomatic",
        }
    }
}

/// Exercise-induced angina.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseAngina {
    No = 0,
    Yes = 1,
}

impl ExerciseAngina {
    pub const ALL: [ExerciseAngina; 2] = [ExerciseAngina::No, ExerciseAngina::Yes];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            ExerciseAngina::No => "No",
            ExerciseAngina::Yes => "Yes",
        }
    }
}

/// Slope of the peak exercise ST segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StSlope {
    Upsloping = 0,
    Flat = 1,
    Downsloping = 2,
}

impl StSlope {
    pub const ALL: [StSlope; 3] = [StSlope::Upsloping, StSlope::Flat, StSlope::Downsloping];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            StSlope::Upsloping => "Upsloping",
            StSlope::Flat => "Flat",
            StSlope::Downsloping => "Downsloping",
        }
    }
}

/// Thalassemia stress test result. Codes are non-contiguous; the training
/// data used the raw 3/6/7 encoding and so must we.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Thalassemia {
    Normal = 3,
    FixedDefect = 6,
    ReversibleDefect = 7,
}

impl Thalassemia {
    pub const ALL: [Thalassemia; 3] = [
        Thalassemia::Normal,
        Thalassemia::FixedDefect,
        Thalassemia::ReversibleDefect,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Thalassemia::Normal => "Normal",
            Thalassemia::FixedDefect => "Fixed Defect",
            Thalassemia::ReversibleDefect => "Reversible Defect",
        }
    }
}

/// One fully-encoded patient measurement set.
///
/// All eight fields must be inside their declared domains before the record
/// reaches the predictor; model behavior on out-of-domain values is
/// undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub age: u32,
    pub thalach: u32,
    pub oldpeak: f64,
    pub cp: ChestPainType,
    pub exang: ExerciseAngina,
    pub slope: StSlope,
    pub ca: u8,
    pub thal: Thalassemia,
}

impl FeatureRecord {
    pub const AGE_RANGE: (u32, u32) = (20, 80);
    pub const THALACH_RANGE: (u32, u32) = (60, 220);
    pub const OLDPEAK_RANGE: (f64, f64) = (0.0, 6.2);
    pub const CA_MAX: u8 = 4;

    /// Checks every field against its declared domain. The categorical enums
    /// cannot hold invalid codes, so only the numeric fields are checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (age_min, age_max) = Self::AGE_RANGE;
        if self.age < age_min || self.age > age_max {
            return Err(ValidationError::OutOfRange {
                field: "age",
                value: self.age as f64,
                min: age_min as f64,
                max: age_max as f64,
            });
        }

        let (hr_min, hr_max) = Self::THALACH_RANGE;
        if self.thalach < hr_min || self.thalach > hr_max {
            return Err(ValidationError::OutOfRange {
                field: "thalach",
                value: self.thalach as f64,
                min: hr_min as f64,
                max: hr_max as f64,
            });
        }

        let (op_min, op_max) = Self::OLDPEAK_RANGE;
        if !self.oldpeak.is_finite() || self.oldpeak < op_min || self.oldpeak > op_max {
            return Err(ValidationError::OutOfRange {
                field: "oldpeak",
                value: self.oldpeak,
                min: op_min,
                max: op_max,
            });
        }

        if self.ca > Self::CA_MAX {
            return Err(ValidationError::OutOfRange {
                field: "ca",
                value: self.ca as f64,
                min: 0.0,
                max: Self::CA_MAX as f64,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> FeatureRecord {
        FeatureRecord {
            age: 55,
            thalach: 150,
            oldpeak: 1.0,
            cp: ChestPainType::TypicalAngina,
            exang: ExerciseAngina::No,
            slope: StSlope::Upsloping,
            ca: 0,
            thal: Thalassemia::Normal,
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(valid_record().validate().is_ok());
    }

    #[test]
    fn test_thal_codes_are_non_contiguous() {
        assert_eq!(Thalassemia::Normal.code(), 3);
        assert_eq!(Thalassemia::FixedDefect.code(), 6);
        assert_eq!(Thalassemia::ReversibleDefect.code(), 7);
    }

    #[test]
    fn test_age_bounds() {
        let mut record = valid_record();
        record.age = 19;
        assert!(matches!(
            record.validate(),
            Err(ValidationError::OutOfRange { field: "age", .. })
        ));

        record.age = 81;
        assert!(record.validate().is_err());

        record.age = 20;
        assert!(record.validate().is_ok());
        record.age = 80;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_oldpeak_rejects_nan() {
        let mut record = valid_record();
        record.oldpeak = f64::NAN;
        assert!(matches!(
            record.validate(),
            Err(ValidationError::OutOfRange { field: "oldpeak", .. })
        ));
    }
}
