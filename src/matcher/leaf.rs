//! Matchers that inspect a single value without descending into it.

use std::any::type_name;
use std::fmt::{self, Display};
use std::marker::PhantomData;

use regex::Regex;
use serde::Serialize;

use crate::error::ValueError;
use crate::validation::ValidationContext;
use crate::value::{to_value, Value};

use super::traits::Matcher;

/// Rejects the zero value of any type.
///
/// See [`Value::is_zero`] for what counts as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotZero;

impl Matcher for NotZero {
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
        if actual.is_zero() {
            ctx.reject_fmt(format_args!("expected non-zero value but got {}", actual));
        }
    }
}

impl Display for NotZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not_zero")
    }
}

/// Rejects values that are not of type `T`, and the zero value of `T`.
///
/// The type check compares the actual value's type name with that of
/// `T::default()`, so `NotZeroOf<i64>` accepts any integer and rejects
/// strings. `NotZeroOf<Option<U>>` accepts everything but `None`, and an
/// enum's variants are all accepted except the default one.
///
/// # Example
///
/// ```rust
/// use desire::{desire, Match};
///
/// assert!(desire(&1, Match::not_zero_of::<i64>()).is_empty());
///
/// let rejections = desire(&"aa", Match::not_zero_of::<i64>());
/// assert_eq!(rejections[0].reason, "expected type int but got string");
/// ```
pub struct NotZeroOf<T> {
    zero: Result<Value, ValueError>,
    marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + Default> NotZeroOf<T> {
    pub fn new() -> Self {
        Self {
            zero: to_value(&T::default()),
            marker: PhantomData,
        }
    }
}

impl<T: Serialize + Default> Default for NotZeroOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matcher for NotZeroOf<T> {
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
        let zero = match &self.zero {
            Ok(zero) => zero,
            Err(err) => {
                ctx.reject_fmt(format_args!(
                    "cannot represent zero value of {}: {}",
                    type_name::<T>(),
                    err
                ));
                return;
            }
        };
        if !same_type(zero, actual) {
            ctx.reject_fmt(format_args!(
                "expected type {} but got {}",
                zero.type_name(),
                actual.type_name()
            ));
        } else if actual == zero {
            ctx.reject_fmt(format_args!("expected non-zero value but got {}", actual));
        }
    }
}

/// Returns true if `actual` can be a value of the type whose zero is `zero`.
///
/// A `None` zero admits every type. Enum variants serialize either as their
/// name or as a single-entry map tagged with it, so any variant form matches
/// any other.
fn same_type(zero: &Value, actual: &Value) -> bool {
    match zero {
        Value::Null => true,
        _ if is_variant(zero) => is_variant(actual),
        _ => zero.type_name() == actual.type_name(),
    }
}

// Unit variant names are never empty, which tells them apart from the
// default `String`.
fn is_variant(value: &Value) -> bool {
    match value {
        Value::String(name) => !name.is_empty(),
        Value::Map(entries) => matches!(entries.as_slice(), [(Value::String(_), _)]),
        _ => false,
    }
}

impl<T> Display for NotZeroOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not_zero::<{}>", type_name::<T>())
    }
}

/// Accepts every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyValue;

impl Matcher for AnyValue {
    fn validate(&self, _ctx: &ValidationContext<'_>, _actual: &Value) {}
}

impl Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "any")
    }
}

/// Matches strings against a regular expression.
///
/// # Example
///
/// ```rust
/// use desire::{desire, Match};
///
/// let digits = Match::pattern(r"^\d+$").unwrap();
///
/// assert!(desire(&"123", digits.clone()).is_empty());
/// assert_eq!(
///     desire(&"12a", digits)[0].reason,
///     r"expected string matching '^\d+$' but got 12a"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern`, returning an error if the regex is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Matcher for Pattern {
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
        match actual {
            Value::String(s) if self.regex.is_match(s) => {}
            Value::String(s) => ctx.reject_fmt(format_args!(
                "expected string matching '{}' but got {}",
                self.regex.as_str(),
                s
            )),
            other => ctx.reject_fmt(format_args!("expected string but got {}", other.kind())),
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.regex.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desire_value;

    fn reasons(actual: &Value, matcher: &dyn Matcher) -> Vec<String> {
        desire_value(actual, matcher)
            .into_iter()
            .map(|r| r.reason)
            .collect()
    }

    #[test]
    fn test_not_zero() {
        assert!(reasons(&Value::Int(1), &NotZero).is_empty());
        assert_eq!(
            reasons(&Value::Int(0), &NotZero),
            vec!["expected non-zero value but got 0"]
        );
        assert_eq!(
            reasons(&Value::from(""), &NotZero),
            vec!["expected non-zero value but got "]
        );
    }

    #[test]
    fn test_not_zero_of_type_mismatch() {
        assert_eq!(
            reasons(&Value::from("aa"), &NotZeroOf::<i32>::new()),
            vec!["expected type int but got string"]
        );
    }

    #[test]
    fn test_not_zero_of_zero() {
        assert_eq!(
            reasons(&Value::Int(0), &NotZeroOf::<i64>::new()),
            vec!["expected non-zero value but got 0"]
        );
        assert!(reasons(&Value::from("x"), &NotZeroOf::<String>::new()).is_empty());
    }

    #[test]
    fn test_not_zero_of_option() {
        let matcher = NotZeroOf::<Option<i64>>::new();
        assert!(reasons(&to_value(&Some(5i64)).unwrap(), &matcher).is_empty());
        assert_eq!(
            reasons(&to_value(&None::<i64>).unwrap(), &matcher),
            vec!["expected non-zero value but got None"]
        );
    }

    #[test]
    fn test_not_zero_of_enum() {
        #[derive(Serialize, Default)]
        enum Kind {
            #[default]
            Empty,
            Sized(i32),
            Named,
        }

        let matcher = NotZeroOf::<Kind>::new();
        assert!(reasons(&to_value(&Kind::Sized(1)).unwrap(), &matcher).is_empty());
        assert!(reasons(&to_value(&Kind::Named).unwrap(), &matcher).is_empty());
        assert_eq!(
            reasons(&to_value(&Kind::Empty).unwrap(), &matcher),
            vec!["expected non-zero value but got Empty"]
        );
        assert_eq!(
            reasons(&Value::Int(1), &matcher),
            vec!["expected type string but got int"]
        );
    }

    #[test]
    fn test_not_zero_of_string_rejects_tagged_map() {
        let tagged = Value::Map(vec![(Value::from("Sized"), Value::Int(1))]);
        assert_eq!(
            reasons(&tagged, &NotZeroOf::<String>::new()),
            vec!["expected type string but got map"]
        );
    }

    #[test]
    fn test_any_accepts_everything() {
        for value in [Value::Null, Value::Unit, Value::Int(0), Value::Seq(Vec::new())] {
            assert!(reasons(&value, &AnyValue).is_empty());
        }
    }

    #[test]
    fn test_pattern_rejects_non_strings() {
        let pattern = Pattern::new("^a").unwrap();
        assert_eq!(
            reasons(&Value::Int(1), &pattern),
            vec!["expected string but got int"]
        );
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Pattern::new("(").is_err());
    }
}
