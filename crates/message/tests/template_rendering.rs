//! Integration tests for template rendering through the public API.
//!
//! These tests exercise the templates a logger typically registers: plain
//! echo templates, positional templates, named templates and templates with
//! format specs.

use message::{FormatArgs, FormatError, FormatTemplate, MessageTemplate, Severity, Value};

// ============================================================================
// Canonical Lines
// ============================================================================

/// Verifies each severity renders its own uppercase prefix.
#[test]
fn every_severity_renders_its_prefix() {
    for severity in Severity::ALL {
        let template = MessageTemplate::simple("CODE", "", severity);
        let body = template
            .render(&FormatArgs::new().with("body"))
            .expect("render");
        assert_eq!(
            template.line(&body, None),
            format!("{}: body (CODE)", severity.as_str())
        );
    }
}

/// Verifies unicode bodies pass through unchanged.
#[test]
fn unicode_body_is_preserved() {
    let template = MessageTemplate::new("U-1", "", Severity::Info, 0, "→ {} ←").expect("template");
    let body = template
        .render(&FormatArgs::new().with("日本語"))
        .expect("render");
    assert_eq!(template.line(&body, None), "INFO: → 日本語 ← (U-1)");
}

/// Verifies width padding counts characters rather than bytes.
#[test]
fn padding_counts_characters() {
    let template = FormatTemplate::parse("[{:>4}]").expect("template");
    assert_eq!(
        template.render(&FormatArgs::new().with("é")).expect("render"),
        "[   é]"
    );
}

// ============================================================================
// Argument Errors
// ============================================================================

/// Verifies an echo template called without arguments reports the gap.
#[test]
fn echo_template_without_arguments_fails() {
    let template = MessageTemplate::simple("E", "", Severity::Error);
    assert_eq!(
        template.render(&FormatArgs::new()),
        Err(FormatError::MissingPositional { index: 0 })
    );
}

/// Verifies error messages name the offending argument.
#[test]
fn error_messages_are_descriptive() {
    let error = FormatError::MissingNamed {
        name: "value2".to_owned(),
    };
    assert_eq!(error.to_string(), "missing named argument 'value2'");

    let error = FormatError::TypeMismatch {
        conversion: 'd',
        kind: Value::from("x").kind(),
    };
    assert_eq!(
        error.to_string(),
        "format type 'd' cannot render a string argument"
    );
}

/// Verifies a literal-only template renders with or without arguments.
#[test]
fn literal_template_ignores_arguments() {
    let template = FormatTemplate::parse("static text").expect("template");
    assert_eq!(template.placeholder_count(), 0);
    assert_eq!(
        template.render(&FormatArgs::new()).expect("render"),
        "static text"
    );
    assert_eq!(
        template
            .render(&FormatArgs::new().with(1).with(2))
            .expect("render"),
        "static text"
    );
}

/// Verifies boolean arguments render capitalised inside a padded field.
#[test]
fn boolean_argument_renders_capitalised() {
    let template = FormatTemplate::parse("dry run: {:>6}").expect("template");
    assert_eq!(
        template.render(&FormatArgs::new().with(false)).expect("render"),
        "dry run:  False"
    );
}
