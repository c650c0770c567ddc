//! Encoder coverage: every categorical selection must produce the exact
//! integer code the model was trained on.

use cardiorisk::domain::clinical::features::{
    ChestPainType, ExerciseAngina, FeatureRecord, StSlope, Thalassemia,
};
use cardiorisk::domain::errors::ValidationError;
use cardiorisk::domain::ml::feature_registry::{FEATURE_NAMES, record_to_vector};

fn record_with(
    cp: ChestPainType,
    exang: ExerciseAngina,
    slope: StSlope,
    ca: u8,
    thal: Thalassemia,
) -> FeatureRecord {
    FeatureRecord {
        age: 55,
        thalach: 150,
        oldpeak: 1.0,
        cp,
        exang,
        slope,
        ca,
        thal,
    }
}

#[test]
fn test_feature_order_is_fixed() {
    assert_eq!(
        FEATURE_NAMES,
        &["age", "thalach", "oldpeak", "cp", "exang", "slope", "ca", "thal"]
    );
}

#[test]
fn test_chest_pain_codes() {
    assert_eq!(ChestPainType::TypicalAngina.code(), 0);
    assert_eq!(ChestPainType::AtypicalAngina.code(), 1);
    assert_eq!(ChestPainType::NonAnginalPain.code(), 2);
    assert_eq!(ChestPainType::Asymptomatic.code(), 3);
}

#[test]
fn test_exercise_angina_codes() {
    assert_eq!(ExerciseAngina::No.code(), 0);
    assert_eq!(ExerciseAngina::Yes.code(), 1);
}

#[test]
fn test_st_slope_codes() {
    assert_eq!(StSlope::Upsloping.code(), 0);
    assert_eq!(StSlope::Flat.code(), 1);
    assert_eq!(StSlope::Downsloping.code(), 2);
}

#[test]
fn test_thalassemia_codes() {
    assert_eq!(Thalassemia::Normal.code(), 3);
    assert_eq!(Thalassemia::FixedDefect.code(), 6);
    assert_eq!(Thalassemia::ReversibleDefect.code(), 7);
}

#[test]
fn test_ca_passthrough() {
    for n in 0..=4u8 {
        let v = record_to_vector(&record_with(
            ChestPainType::TypicalAngina,
            ExerciseAngina::No,
            StSlope::Upsloping,
            n,
            Thalassemia::Normal,
        ));
        assert_eq!(v[6], n as f64);
    }
}

#[test]
fn test_continuous_fields_pass_through_unscaled() {
    let record = FeatureRecord {
        age: 42,
        thalach: 188,
        oldpeak: 3.4,
        ..record_with(
            ChestPainType::TypicalAngina,
            ExerciseAngina::No,
            StSlope::Upsloping,
            0,
            Thalassemia::Normal,
        )
    };

    let v = record_to_vector(&record);
    assert_eq!(v[0], 42.0);
    assert_eq!(v[1], 188.0);
    assert_eq!(v[2], 3.4);
}

/// Exhaustive sweep over the categorical cross-product (4 × 2 × 3 × 5 × 3).
#[test]
fn test_all_360_categorical_combinations() {
    let mut combinations = 0;

    for cp in ChestPainType::ALL {
        for exang in ExerciseAngina::ALL {
            for slope in StSlope::ALL {
                for ca in 0..=4u8 {
                    for thal in Thalassemia::ALL {
                        let record = record_with(cp, exang, slope, ca, thal);
                        assert!(record.validate().is_ok());

                        let v = record_to_vector(&record);
                        assert_eq!(v.len(), FEATURE_NAMES.len());
                        assert_eq!(v[3], cp.code() as f64);
                        assert_eq!(v[4], exang.code() as f64);
                        assert_eq!(v[5], slope.code() as f64);
                        assert_eq!(v[6], ca as f64);
                        assert_eq!(v[7], thal.code() as f64);

                        combinations += 1;
                    }
                }
            }
        }
    }

    assert_eq!(combinations, 360);
}

#[test]
fn test_out_of_domain_values_are_rejected() {
    let mut record = record_with(
        ChestPainType::TypicalAngina,
        ExerciseAngina::No,
        StSlope::Upsloping,
        0,
        Thalassemia::Normal,
    );

    record.thalach = 59;
    assert!(matches!(
        record.validate(),
        Err(ValidationError::OutOfRange { field: "thalach", .. })
    ));
    record.thalach = 150;

    record.oldpeak = 6.3;
    assert!(matches!(
        record.validate(),
        Err(ValidationError::OutOfRange { field: "oldpeak", .. })
    ));
    record.oldpeak = 6.2;

    record.ca = 5;
    assert!(matches!(
        record.validate(),
        Err(ValidationError::OutOfRange { field: "ca", .. })
    ));
    record.ca = 4;

    assert!(record.validate().is_ok());
}
