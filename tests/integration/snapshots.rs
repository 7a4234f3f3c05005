//! Analysis snapshots
//!
//! A snapshot written with `--emit` holds the complete analysis.

use tonto::analyze;
use tonto::foundation::ErrorKind;
use tonto::runtime::{from_bytes, load_from_file, save_to_file, to_bytes};

const MODEL: &str = "package Loja
kind Pessoa
role Cliente specializes Pessoa
relator Compra { @mediation -- Cliente }
kind Produto { preco: real codigo: Codigo }";

#[test]
fn snapshot_keeps_everything() {
    let result = analyze(MODEL).unwrap();
    let restored = from_bytes(&to_bytes(&result).unwrap()).unwrap();
    assert_eq!(restored.tokens, result.tokens);
    assert_eq!(restored.document, result.document);
    assert_eq!(restored.patterns, result.patterns);
    assert_eq!(restored.diagnostics, result.diagnostics);
    assert_eq!(restored.summary(), result.summary());
}

#[test]
fn snapshot_file_roundtrip() {
    let result = analyze(MODEL).unwrap();
    let path = std::env::temp_dir().join("tonto_integration_snapshot.msgpack");
    save_to_file(&result, &path).unwrap();
    assert_eq!(load_from_file(&path).unwrap(), result);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn truncated_snapshot_is_rejected() {
    let result = analyze(MODEL).unwrap();
    let bytes = to_bytes(&result).unwrap();
    let err = from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
}
