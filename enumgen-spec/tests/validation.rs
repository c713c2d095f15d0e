//! Validation behaviour of enum spec files.

use enumgen_spec::{Error, LookupStrategy, Overrides, Variant, parse_str, parse_str_with_overrides};

const COLOR: &str = r#"
name = "Color"
package = "org.robovm.foo"

[[constants]]
name = "RED"
value = 1

[[constants]]
name = "GREEN"
value = 2

[[constants]]
name = "BLUE"
value = 3
"#;

const HTTP_STATUS: &str = r#"
name = "HTTPStatus"
package = "org.robovm.foo"
variant = "error-domain"
error_domain_class_name = "HTTPErrorDomain"

[[constants]]
name = "OK"
value = 200

[[constants]]
name = "NOT_FOUND"
value = 404
"#;

#[test]
fn test_color_valid() {
    let spec = parse_str(COLOR).unwrap();
    assert_eq!(spec.name(), "Color");
    assert_eq!(spec.variant(), Variant::Plain);
    let names: Vec<&str> = spec.constants().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["RED", "GREEN", "BLUE"]);
    assert_eq!(spec.value_of(2).unwrap().name, "GREEN");
}

#[test]
fn test_color_unknown_value_fails_hard() {
    let spec = parse_str(COLOR).unwrap();
    let err = spec.value_of(5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No constant with value 5 found in org.robovm.foo.Color"
    );
}

#[test]
fn test_http_status_error_codes() {
    let spec = parse_str(HTTP_STATUS).unwrap();
    assert_eq!(spec.variant(), Variant::ErrorDomain);
    assert_eq!(spec.error_domain_class_name(), Some("HTTPErrorDomain"));

    let found = spec.wrap_error(404).and_then(|w| w.error_code());
    assert_eq!(found.map(|c| c.name.as_str()), Some("NOT_FOUND"));

    let missing = spec.wrap_error(999).and_then(|w| w.error_code());
    assert!(missing.is_none());
}

#[test]
fn test_error_domain_requires_class_name() {
    let src = HTTP_STATUS.replace("error_domain_class_name = \"HTTPErrorDomain\"\n", "");
    let err = parse_str(&src).unwrap_err();
    assert!(matches!(*err, Error::MissingErrorDomain { ref name, .. } if name == "HTTPStatus"));
}

#[test]
fn test_error_domain_blank_class_name() {
    let src = HTTP_STATUS.replace("\"HTTPErrorDomain\"", "\"  \"");
    let err = parse_str(&src).unwrap_err();
    assert!(matches!(*err, Error::MissingErrorDomain { .. }));
}

#[test]
fn test_legacy_aliases() {
    let src = r#"
        name = "CLError"
        namespace = "org.robovm.apple.corelocation"
        variant = "nserror"
        errorDomainClassName = "kCLErrorDomain"

        [[constants]]
        name = "LocationUnknown"
        value = 0
    "#;
    let spec = parse_str(src).unwrap();
    assert_eq!(spec.package(), "org.robovm.apple.corelocation");
    assert_eq!(spec.variant(), Variant::ErrorDomain);
    assert_eq!(spec.error_domain_class_name(), Some("kCLErrorDomain"));
}

#[test]
fn test_empty_constants_rejected() {
    let err = parse_str("name = \"Empty\"\n").unwrap_err();
    assert!(matches!(*err, Error::EmptyConstants { ref name, .. } if name == "Empty"));
}

#[test]
fn test_duplicate_name_rejected() {
    let src = r#"
        name = "Color"

        [[constants]]
        name = "RED"
        value = 1

        [[constants]]
        name = "RED"
        value = 2
    "#;
    let err = parse_str(src).unwrap_err();
    match &*err {
        Error::DuplicateConstant {
            name,
            first_span,
            second_span,
            ..
        } => {
            assert_eq!(name, "RED");
            assert!(first_span.offset() < second_span.offset());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_names_are_case_sensitive() {
    let src = r#"
        name = "Color"

        [[constants]]
        name = "Red"
        value = 1

        [[constants]]
        name = "RED"
        value = 2
    "#;
    assert!(parse_str(src).is_ok());
}

#[test]
fn test_duplicate_values_resolve_to_first() {
    let src = r#"
        name = "Alias"

        [[constants]]
        name = "A"
        value = 1

        [[constants]]
        name = "B"
        value = 1
    "#;
    for lookup in [LookupStrategy::Linear, LookupStrategy::Indexed] {
        let overrides = Overrides {
            lookup: Some(lookup),
            ..Default::default()
        };
        let spec = parse_str_with_overrides(src, "Alias.toml", &overrides).unwrap();
        assert_eq!(spec.lookup(), lookup);
        assert_eq!(spec.value_of(1).unwrap().name, "A");
    }
}

#[test]
fn test_value_notations() {
    let src = r#"
        name = "Flags"

        [[constants]]
        name = "HEX"
        value = "0x1F"

        [[constants]]
        name = "NEG"
        value = "-5"

        [[constants]]
        name = "SEP"
        value = "1_000"

        [[constants]]
        name = "LONG"
        value = "200L"

        [[constants]]
        name = "FLOAT"
        value = 404.0

        [[constants]]
        name = "MIN"
        value = -9223372036854775808
    "#;
    let spec = parse_str(src).unwrap();
    let values: Vec<i64> = spec.constants().iter().map(|c| c.value).collect();
    assert_eq!(values, vec![31, -5, 1000, 200, 404, i64::MIN]);
}

#[test]
fn test_non_numeric_value_rejected() {
    let src = r#"
        name = "Color"

        [[constants]]
        name = "RED"
        value = "red"
    "#;
    let err = parse_str(src).unwrap_err();
    assert!(matches!(*err, Error::NonNumericValue { ref constant, .. } if constant == "RED"));
}

#[test]
fn test_array_value_rejected() {
    let src = r#"
        name = "Color"

        [[constants]]
        name = "RED"
        value = [1]
    "#;
    let err = parse_str(src).unwrap_err();
    assert!(matches!(*err, Error::NonNumericValue { ref constant, .. } if constant == "RED"));
    assert!(err.to_string().starts_with("constant 'RED' has a non-numeric value"));
}

#[test]
fn test_out_of_range_value_rejected() {
    let src = r#"
        name = "Color"

        [[constants]]
        name = "HUGE"
        value = "18446744073709551615"
    "#;
    let err = parse_str(src).unwrap_err();
    assert!(matches!(*err, Error::ValueOutOfRange { .. }));
}

#[test]
fn test_keyword_and_reserved_names_rejected() {
    let keyword = parse_str("name = \"class\"\n[[constants]]\nname = \"A\"\nvalue = 1\n");
    assert!(matches!(*keyword.unwrap_err(), Error::ReservedKeyword { .. }));

    let reserved = parse_str("name = \"Color\"\n[[constants]]\nname = \"BY_VALUE\"\nvalue = 1\n");
    assert!(matches!(*reserved.unwrap_err(), Error::InvalidIdentifier { .. }));

    let invalid = parse_str("name = \"Color\"\n[[constants]]\nname = \"NOT-FOUND\"\nvalue = 1\n");
    assert!(matches!(*invalid.unwrap_err(), Error::InvalidIdentifier { .. }));
}

#[test]
fn test_members_only_for_error_domain() {
    let src = format!("{COLOR}\nmembers = \"int x;\"\n");
    // `members` after an array of tables belongs to the last constant
    assert!(matches!(*parse_str(&src).unwrap_err(), Error::Parse { .. }));

    let src = format!("members = \"int x;\"\n{COLOR}");
    let err = parse_str(&src).unwrap_err();
    assert!(matches!(*err, Error::UnexpectedField { field: "members", .. }));
}

#[test]
fn test_error_domain_on_plain_rejected() {
    let src = format!("error_domain_class_name = \"X\"\n{COLOR}");
    let err = parse_str(&src).unwrap_err();
    assert!(matches!(
        *err,
        Error::UnexpectedField {
            field: "error_domain_class_name",
            ..
        }
    ));
}

#[test]
fn test_invalid_package_rejected() {
    let src = COLOR.replace("org.robovm.foo", "org.robovm.2foo");
    assert!(matches!(*parse_str(&src).unwrap_err(), Error::InvalidPackage { .. }));
}

#[test]
fn test_package_override() {
    let overrides = Overrides {
        package: Some("org.robovm.bar".into()),
        ..Default::default()
    };
    let spec = parse_str_with_overrides(COLOR, "Color.toml", &overrides).unwrap();
    assert_eq!(spec.qualified_name(), "org.robovm.bar.Color");
}

#[test]
fn test_imports_and_annotations() {
    let src = format!(
        "imports = \"import java.util.*;\\nimport java.util.*;\"\nannotations = [\"@Library(\\\"Foundation\\\")\", \"@Library(\\\"Foundation\\\")\"]\nmarshaler = \"ValuedEnum.AsSIntMarshaler\"\nsince = \"9.0\"\n{COLOR}"
    );
    let spec = parse_str(&src).unwrap();
    assert_eq!(spec.imports().len(), 1);
    // de-duplication of annotations happens at render time
    assert_eq!(spec.annotations().len(), 2);
    assert_eq!(spec.marshaler(), Some("ValuedEnum.AsSIntMarshaler"));
    assert_eq!(spec.availability().since.as_deref(), Some("9.0"));
}
