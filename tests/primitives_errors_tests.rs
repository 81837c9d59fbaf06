#![cfg(feature = "dev")]

use lms_rs::internals::primitives::errors::LmsError;

#[test]
fn test_lms_error_display() {
    let err = LmsError::EmptyInput;
    assert_eq!(format!("{}", err), "Input dataset is empty");

    let err = LmsError::InvalidInput("test error".to_string());
    assert_eq!(format!("{}", err), "Invalid input: test error");

    let err = LmsError::TooFewPoints { got: 3, min: 5 };
    assert_eq!(format!("{}", err), "Too few points: got 3, need at least 5");

    let err = LmsError::InvalidNumericValue("y[2]=inf".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: y[2]=inf");

    let err = LmsError::InvalidSubsampleSize(0);
    assert_eq!(
        format!("{}", err),
        "Invalid subsample_size: 0 (must be at least 1)"
    );

    let err = LmsError::InvalidCutoff(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid cutoff: -1 (must be >= 0 and finite)"
    );

    let err = LmsError::DuplicateParameter { parameter: "seed" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'seed' was set multiple times. Each parameter can only be configured once."
    );

    let err = LmsError::DimensionMismatch {
        expected: 2,
        got: 3,
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch: expected 2 features, got 3"
    );

    let err = LmsError::NotBuilt;
    assert_eq!(format!("{}", err), "Model has not been built; call fit() first");
}

#[test]
fn test_lms_error_fit_variants_display() {
    let err = LmsError::SingularSubset { rows: 2, params: 2 };
    assert_eq!(
        format!("{}", err),
        "Singular subset: 2 rows cannot determine 2 parameters"
    );

    let err = LmsError::NoValidTrial { trials: 6 };
    assert_eq!(
        format!("{}", err),
        "No valid trial: all 6 subsets were singular"
    );

    let err = LmsError::DegenerateScale { rows: 2, params: 2 };
    assert!(format!("{}", err).starts_with("Degenerate scale"));

    let err = LmsError::CombinationDomain { n: 3, r: 5 };
    assert_eq!(
        format!("{}", err),
        "Invalid combination: cannot choose 5 from 3"
    );
}

#[test]
fn test_lms_error_is_comparable_and_cloneable() {
    let err = LmsError::TooFewPoints { got: 1, min: 4 };
    assert_eq!(err.clone(), err);
    assert_ne!(err, LmsError::EmptyInput);

    let boxed: Box<dyn std::error::Error> = Box::new(LmsError::EmptyInput);
    assert_eq!(boxed.to_string(), "Input dataset is empty");
}
