//! Tests for error types

use resena::Error;

#[test]
fn test_input_error() {
    let error = Error::Input("failed to open reviews.tsv".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Input error"));
    assert!(error_str.contains("reviews.tsv"));
    assert!(error_str.contains("readable delimited file"));
}

#[test]
fn test_missing_column_error() {
    let error = Error::MissingColumn("Review".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Missing column"));
    assert!(error_str.contains("'Review'"));
}

#[test]
fn test_score_error() {
    let error = Error::Score("unsupported encoding".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Scorer error"));
    assert!(error_str.contains("unsupported encoding"));
}

#[test]
fn test_chart_error() {
    let error = Error::Chart("backend write failed".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Chart error"));
    assert!(error_str.contains("backend write failed"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_other_error() {
    let error = Error::Other("custom error message".to_string());
    let error_str = format!("{error}");
    assert_eq!(error_str, "custom error message");
}

#[test]
fn test_error_debug() {
    let error = Error::MissingColumn("Review".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("MissingColumn"));
}

#[test]
fn test_result_type_alias() {
    #[allow(clippy::unnecessary_wraps)]
    fn returns_result() -> resena::Result<i32> {
        Ok(42)
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> resena::Result<i32> {
        Err(Error::Other("test error".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
