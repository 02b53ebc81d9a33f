//! Tests for reference expression evaluation

use params_core::expr::{self, Node};
use params_core::{Error, ParamType, ParamValue, ParamValues};
use rstest::rstest;

fn values() -> ParamValues {
    let mut values = ParamValues::new();
    values.insert("NAME".to_string(), ParamValue::from("x"));
    values.insert("COUNT".to_string(), ParamValue::Int(5));
    values.insert("ENABLED".to_string(), ParamValue::Bool(true));
    values
}

mod string_tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expr::resolve_string("plain", &values()).unwrap(), "plain");
        assert_eq!(expr::resolve_string("", &values()).unwrap(), "");
    }

    #[test]
    fn test_identity() {
        assert_eq!(
            expr::resolve_string("{{ params.NAME }}", &values()).unwrap(),
            "x"
        );
        assert_eq!(expr::resolve_string("{{params.NAME}}", &values()).unwrap(), "x");
    }

    #[test]
    fn test_substitution_inside_text() {
        assert_eq!(
            expr::resolve_string("gs://{{ params.NAME }}-bucket", &values()).unwrap(),
            "gs://x-bucket"
        );
    }

    #[test]
    fn test_single_delimiter_is_literal() {
        assert_eq!(
            expr::resolve_string("{{ params.NAME", &values()).unwrap(),
            "{{ params.NAME"
        );
    }

    #[test]
    fn test_missing_dependency() {
        let err = expr::resolve_string("{{ params.OTHER }}", &values()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingDependency { ref dependency, .. } if dependency == "OTHER"
        ));
    }

    #[test]
    fn test_type_mismatch() {
        let err = expr::resolve_string("{{ params.COUNT }}", &values()).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref name, .. } if name == "COUNT"));
    }

    #[test]
    fn test_residual_delimiters_rejected() {
        let mut values = values();
        values.insert("NESTED".to_string(), ParamValue::from("{{ params.NAME }}"));
        let err = expr::resolve_string("{{ params.NESTED }}", &values).unwrap_err();
        assert!(matches!(err, Error::UnsupportedExpression { .. }));
    }
}

mod numeric_tests {
    use super::*;

    #[test]
    fn test_int_literal_unchanged() {
        assert_eq!(
            expr::resolve_int(&ParamValue::Int(7), &values()).unwrap(),
            ParamValue::Int(7)
        );
        // Non-expression strings are returned for the validator to reject
        assert_eq!(
            expr::resolve_int(&ParamValue::from("abc"), &values()).unwrap(),
            ParamValue::from("abc")
        );
    }

    #[test]
    fn test_int_identity() {
        assert_eq!(
            expr::resolve_int(&ParamValue::from("{{ params.COUNT }}"), &values()).unwrap(),
            ParamValue::Int(5)
        );
    }

    #[test]
    fn test_int_reference_to_string_fails() {
        let err = expr::resolve_int(&ParamValue::from("{{ params.NAME }}"), &values()).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_int_text_around_reference_rejected() {
        let err = expr::resolve_int(&ParamValue::from("1{{ params.COUNT }}"), &values()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedExpression { .. }));
    }

    #[test]
    fn test_boolean_identity() {
        assert_eq!(
            expr::resolve_boolean(&ParamValue::from(" {{ params.ENABLED }} "), &values()).unwrap(),
            ParamValue::Bool(true)
        );
        assert_eq!(
            expr::resolve_boolean(&ParamValue::Bool(false), &values()).unwrap(),
            ParamValue::Bool(false)
        );
    }

    #[test]
    fn test_boolean_reference_to_int_fails() {
        let err =
            expr::resolve_boolean(&ParamValue::from("{{ params.COUNT }}"), &values()).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_resolve_dispatches_on_param_type() {
        let field = ParamValue::from("{{ params.COUNT }}");
        assert_eq!(
            expr::resolve(&field, ParamType::Int, &values()).unwrap(),
            ParamValue::Int(5)
        );
        assert!(expr::resolve(&field, ParamType::String, &values()).is_err());
    }
}

mod unsupported_tests {
    use super::*;

    #[rstest]
    #[case("{{ params.A + 1 }}")]
    #[case("{{ params.A + params.B }}")]
    #[case("{{ A }}")]
    #[case("{{ params. }}")]
    #[case("{{ }}")]
    #[case("{{ params.A }}{{ params.B }}")]
    #[case("}} params.A {{")]
    #[case("{{ {{ params.A }} }}")]
    #[case("{{ params.A")]
    fn test_parse_rejects(#[case] src: &str) {
        let err = expr::parse(src).unwrap_err();
        assert!(
            matches!(err, Error::UnsupportedExpression { .. }),
            "expected UnsupportedExpression for {src:?}, got {err:?}"
        );
    }

    #[test]
    fn test_resolvers_reject_non_identity() {
        let field = "{{ params.COUNT * 2 }}";
        assert!(matches!(
            expr::resolve_string(field, &values()),
            Err(Error::UnsupportedExpression { .. })
        ));
        assert!(matches!(
            expr::resolve_int(&ParamValue::from(field), &values()),
            Err(Error::UnsupportedExpression { .. })
        ));
    }
}

mod dependency_tests {
    use super::*;

    #[test]
    fn test_dependencies() {
        assert_eq!(expr::dependencies("{{ params.A }}"), vec!["A"]);
        assert_eq!(expr::dependencies("pre-{{ params.B_2 }}"), vec!["B_2"]);
        assert!(expr::dependencies("literal").is_empty());
        assert!(expr::dependencies("params.A outside delimiters").is_empty());
    }

    #[test]
    fn test_dependencies_of_unsupported_expressions() {
        assert_eq!(expr::dependencies("{{ params.LATER + 1 }}"), vec!["LATER"]);
        assert_eq!(
            expr::dependencies("{{ params.A + params.B }}"),
            vec!["A", "B"]
        );
        assert_eq!(
            expr::dependencies("{{ params.A }}-{{ params.B }}"),
            vec!["A", "B"]
        );
        assert!(expr::dependencies("{{ myparams.A }}").is_empty());
    }

    #[test]
    fn test_parse_nodes() {
        assert_eq!(
            expr::parse("a{{ params.X }}").unwrap(),
            vec![
                Node::Literal("a".to_string()),
                Node::ParamReference("X".to_string())
            ]
        );
    }
}
