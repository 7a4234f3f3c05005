//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tonto_foundation::{Error, ErrorContext, ErrorKind, Phase};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_empty_source() {
    let err = Error::empty_source();
    assert!(matches!(err.kind, ErrorKind::EmptySource));
    assert!(format!("{err}").contains("empty"));
}

#[test]
fn error_cancelled_names_phase() {
    let err = Error::cancelled(Phase::Syntactic);
    assert!(err.is_cancelled());
    assert_eq!(
        err.to_string(),
        "analysis cancelled before the syntactic phase"
    );
}

#[test]
fn error_io() {
    let err = Error::io("failed to read model.tonto");
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    assert!(!err.is_cancelled());
    assert!(format!("{err}").contains("model.tonto"));
}

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("--emit requires a path");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
    assert!(format!("{err}").contains("--emit"));
}

#[test]
fn error_serialization_and_internal() {
    let err = Error::new(ErrorKind::SerializationError("bad marker".to_string()));
    assert!(format!("{err}").contains("bad marker"));
    let err = Error::new(ErrorKind::Internal("oops".to_string()));
    assert!(format!("{err}").contains("oops"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::empty_source();
    assert!(err.context.is_none());
}

#[test]
fn error_with_context() {
    let ctx = ErrorContext::new()
        .with_source("clinic.tonto")
        .with_position(3, 7);
    let err = Error::io("boom").with_context(ctx);

    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("clinic.tonto"));
    assert_eq!(context.line, Some(3));
    assert_eq!(context.column, Some(7));
    assert_eq!(context.to_string(), "at clinic.tonto:3:7");
}

#[test]
fn context_without_position() {
    let ctx = ErrorContext::new().with_source("a.tonto");
    assert_eq!(ctx.to_string(), "at a.tonto");
    assert_eq!(ErrorContext::new().to_string(), "");
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::empty_source());
}
