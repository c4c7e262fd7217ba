use super::FormatTemplate;
use crate::error::FormatError;
use crate::value::FormatArgs;

fn render(source: &str, args: &FormatArgs) -> Result<String, FormatError> {
    FormatTemplate::parse(source)?.render(args)
}

#[test]
fn automatic_placeholders_consume_arguments_in_order() {
    let args = FormatArgs::new().with("/this/is/a/test").with(42);
    assert_eq!(
        render("Syntax error on line {}:{}", &args).unwrap(),
        "Syntax error on line /this/is/a/test:42"
    );
}

#[test]
fn named_placeholders_resolve_by_name() {
    let args = FormatArgs::new().with_named("value1", 42).with_named("value2", 24);
    assert_eq!(
        render("value {value1} is larger than {value2}", &args).unwrap(),
        "value 42 is larger than 24"
    );
}

#[test]
fn manual_indices_may_repeat() {
    let args = FormatArgs::new().with("a").with("b");
    assert_eq!(render("{1}{0}{1}", &args).unwrap(), "bab");
}

#[test]
fn escaped_braces_render_literally() {
    let template = FormatTemplate::parse("{{{}}}").unwrap();
    assert_eq!(template.placeholder_count(), 1);
    assert_eq!(template.render(&FormatArgs::new().with(7)).unwrap(), "{7}");
}

#[test]
fn extra_arguments_are_ignored() {
    let args = FormatArgs::new().with("used").with("unused").with_named("spare", 1);
    assert_eq!(render("only {}", &args).unwrap(), "only used");
}

#[test]
fn missing_positional_argument_is_reported() {
    let args = FormatArgs::new().with("one");
    assert_eq!(
        render("{} and {}", &args),
        Err(FormatError::MissingPositional { index: 1 })
    );
}

#[test]
fn missing_named_argument_is_reported() {
    assert_eq!(
        render("{value}", &FormatArgs::new().with(1)),
        Err(FormatError::MissingNamed {
            name: "value".to_owned()
        })
    );
}

#[test]
fn unbalanced_braces_are_rejected() {
    assert_eq!(
        FormatTemplate::parse("open { never closed"),
        Err(FormatError::UnbalancedBrace { offset: 5 })
    );
    assert_eq!(
        FormatTemplate::parse("stray } brace"),
        Err(FormatError::UnbalancedBrace { offset: 6 })
    );
    assert_eq!(
        FormatTemplate::parse("{a{b}"),
        Err(FormatError::UnbalancedBrace { offset: 2 })
    );
}

#[test]
fn mixing_numbering_styles_is_rejected() {
    assert_eq!(
        FormatTemplate::parse("{} {0}"),
        Err(FormatError::MixedNumbering)
    );
    assert_eq!(
        FormatTemplate::parse("{0} {}"),
        Err(FormatError::MixedNumbering)
    );
    assert!(FormatTemplate::parse("{} {name} {}").is_ok());
}

#[test]
fn attribute_access_is_not_a_field() {
    assert!(matches!(
        FormatTemplate::parse("{user.name}"),
        Err(FormatError::InvalidField { .. })
    ));
}

#[test]
fn width_and_alignment_pad_the_value() {
    let args = FormatArgs::new().with("ab").with(7);
    assert_eq!(render("[{:5}][{:5}]", &args).unwrap(), "[ab   ][    7]");
    assert_eq!(render("[{0:>4}]", &args).unwrap(), "[  ab]");
    assert_eq!(render("[{0:*^6}]", &args).unwrap(), "[**ab**]");
    assert_eq!(render("[{1:0>3}]", &args).unwrap(), "[007]");
}

#[test]
fn precision_applies_per_type() {
    let args = FormatArgs::new().with(3.14159_f64).with("truncated").with(5);
    assert_eq!(render("{0:.2}", &args).unwrap(), "3.14");
    assert_eq!(render("{1:.5}", &args).unwrap(), "trunc");
    assert_eq!(render("{2:.2f}", &args).unwrap(), "5.00");
    assert_eq!(render("{2:.2}", &args), Err(FormatError::PrecisionOnInteger));
}

#[test]
fn conversions_check_argument_type() {
    let args = FormatArgs::new().with("text").with(1.5_f64);
    assert_eq!(
        render("{0:d}", &args),
        Err(FormatError::TypeMismatch {
            conversion: 'd',
            kind: "string"
        })
    );
    assert_eq!(
        render("{1:s}", &args),
        Err(FormatError::TypeMismatch {
            conversion: 's',
            kind: "float"
        })
    );
    assert_eq!(render("{1:f}", &args).unwrap(), "1.500000");
}

#[test]
fn unsupported_spec_is_rejected_at_parse_time() {
    for spec in ["{:x}", "{:.}", "{:5.2q}", "{:<<<}"] {
        assert!(
            matches!(
                FormatTemplate::parse(spec),
                Err(FormatError::InvalidSpec { .. })
            ),
            "{spec} should be rejected"
        );
    }
}

#[test]
fn reports_argument_requirements() {
    let template = FormatTemplate::parse("{} {} {name} {other} {name}").unwrap();
    assert_eq!(template.required_positional(), 2);
    assert_eq!(
        template.named_fields().collect::<Vec<_>>(),
        vec!["name", "other"]
    );
}

#[test]
fn default_template_echoes_first_argument() {
    let template = FormatTemplate::default();
    assert_eq!(template.as_str(), "{}");
    assert_eq!(template, FormatTemplate::parse("{}").unwrap());
    assert_eq!(template.render(&FormatArgs::new().with("hi")).unwrap(), "hi");
}

#[test]
fn display_returns_source_text() {
    let template: FormatTemplate = "Test message: {}".parse().unwrap();
    assert_eq!(template.to_string(), "Test message: {}");
}
