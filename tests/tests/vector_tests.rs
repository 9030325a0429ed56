use toycurve_tests::vectors::{check_vector, load_named, run_file, VectorError};

#[test]
fn test_exchange_vectors() {
    let file = load_named("exchange").expect("Failed to load exchange vectors");
    let checked = run_file(&file).unwrap_or_else(|e| panic!("{}", e));
    assert_eq!(checked, file.vectors.len());
    assert!(checked >= 10);
}

#[test]
fn test_runner_reports_mismatch() {
    let file = load_named("exchange").unwrap();
    let mut vector = file.vectors[0].clone();
    vector.expect.shared = Some("(1,1)".into());
    match check_vector(&vector) {
        Err(VectorError::Mismatch { field, expected, actual, .. }) => {
            assert_eq!(field, "shared");
            assert_eq!(expected, "(1,1)");
            assert_eq!(actual, "(3,16)");
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
}

#[test]
fn test_runner_reports_unexpected_success() {
    let file = load_named("exchange").unwrap();
    let mut vector = file.vectors[0].clone();
    vector.expect.error = Some("anything".into());
    assert!(matches!(
        check_vector(&vector),
        Err(VectorError::UnexpectedSuccess { .. })
    ));
}

#[test]
fn test_missing_vector_file() {
    assert!(matches!(load_named("no-such-file"), Err(VectorError::Io { .. })));
}
