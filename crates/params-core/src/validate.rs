//! Type validation of candidate values against parameter declarations.

use crate::error::{Error, Result};
use crate::param::Param;
use crate::value::ParamValue;

/// Whether `value` satisfies the declared type of `param`.
///
/// A string parameter is satisfied only by a string. An int parameter is
/// satisfied by any numeric value that is a mathematical integer, so `4.0`
/// qualifies and `3.5` does not.
pub fn satisfies(param: &Param, value: &ParamValue) -> bool {
    match param {
        Param::String(_) => matches!(value, ParamValue::String(_)),
        Param::Int(_) => value.as_integer().is_some(),
    }
}

/// Validate `value` against `param` and return it in canonical form.
///
/// Integral floats accepted by an int parameter are stored as `Int`, so a
/// resolved map only ever holds values of the declared kind.
pub fn accept(param: &Param, value: ParamValue) -> Result<ParamValue> {
    if !satisfies(param, &value) {
        return Err(Error::TypeMismatch {
            name: param.name().to_string(),
            expected: param.param_type().value_kind(),
            found: value,
        });
    }

    match param {
        Param::String(_) => Ok(value),
        Param::Int(_) => Ok(value.as_integer().map_or(value, ParamValue::Int)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_accept_normalizes_integral_float() {
        let param = Param::int("N");
        assert_eq!(accept(&param, ParamValue::Float(3.0)).unwrap(), ParamValue::Int(3));
    }

    #[test]
    fn test_accept_reports_expected_kind() {
        let err = accept(&Param::int("N"), ParamValue::from("abc")).unwrap_err();
        match err {
            Error::TypeMismatch {
                name,
                expected,
                found,
            } => {
                assert_eq!(name, "N");
                assert_eq!(expected, ValueKind::Int);
                assert_eq!(found, ParamValue::from("abc"));
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }
}
