//! Reports and exit statuses
//!
//! Batch runs fail on lexical and syntactic diagnostics only, unless strict.

use tonto::analyze;
use tonto::runtime::report::render_text;
use tonto::runtime::{ExitStatus, OutputFormat, ReportConfig, render};

const CLEAN: &str = "kind Pessoa
subkind Homem specializes Pessoa
subkind Mulher specializes Pessoa
disjoint complete genset Sexo where general Pessoa specifics Homem, Mulher";

const ADVISORY: &str = "kind Pessoa
role Aluno specializes Pessoa";

const BROKEN: &str = "kind Pessoa
kind Foo-Bar";

#[test]
fn exit_status_per_model() {
    let cases = [
        (CLEAN, false, ExitStatus::Success),
        (CLEAN, true, ExitStatus::Success),
        (ADVISORY, false, ExitStatus::Success),
        (ADVISORY, true, ExitStatus::DiagnosticsFailed),
        (BROKEN, false, ExitStatus::DiagnosticsFailed),
        (BROKEN, true, ExitStatus::DiagnosticsFailed),
    ];
    for (source, strict, expected) in cases {
        let result = analyze(source).unwrap();
        assert_eq!(
            ExitStatus::for_result(&result, strict),
            expected,
            "strict={strict}\n{source}"
        );
    }
}

#[test]
fn worst_status_wins() {
    let statuses = [
        ExitStatus::Success,
        ExitStatus::Fatal,
        ExitStatus::DiagnosticsFailed,
    ];
    assert_eq!(statuses.into_iter().max(), Some(ExitStatus::Fatal));
    assert_eq!(ExitStatus::Fatal.code(), 2);
}

#[test]
fn text_report_for_broken_model() {
    let result = analyze(BROKEN).unwrap();
    let text = render_text(&result, "broken.tonto", &ReportConfig::batch());
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("== broken.tonto"));
    let first = lines.next().unwrap();
    assert!(
        first.starts_with("broken.tonto:2:6: syntactic error[P002]: identifier 'Foo-Bar' contains a hyphen"),
        "{first}"
    );
    assert!(text.contains("suggestion: Foo_Bar"));
    assert!(text.contains("diagnostics: 0 lexical, 1 syntactic, 0 semantic"));
}

#[test]
fn json_report_lists_violations() {
    let result = analyze(ADVISORY).unwrap();
    let config = ReportConfig::batch().with_format(OutputFormat::Json);
    let json = render(&result, "advisory.tonto", &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["declarations"], 2);
    assert_eq!(value["patterns"][0]["subject"], "Pessoa");
    assert_eq!(value["diagnostics"][0]["code"], "S101");
}

#[test]
fn colors_only_when_enabled() {
    let result = analyze(ADVISORY).unwrap();
    let colored = render_text(&result, "m", &ReportConfig::default());
    let plain = render_text(&result, "m", &ReportConfig::batch());
    assert!(colored.contains('\x1b'));
    assert!(!plain.contains('\x1b'));
}
