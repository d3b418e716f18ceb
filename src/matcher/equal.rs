//! Deep-equality matcher for plain desired values.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::diff::compare;
use crate::error::ValueError;
use crate::validation::ValidationContext;
use crate::value::{to_value, Value};

use super::traits::Matcher;

/// Matches by deep structural equality, reporting each differing leaf.
///
/// Every plain desired value is wrapped in an `Equal`. Differences are
/// rejected at the current context extended by their relative path.
///
/// # Example
///
/// ```rust
/// use desire::{desire, Match};
/// use serde_json::json;
///
/// let rejections = desire(
///     &json!({"a": 1, "b": [1, 2, 3]}),
///     Match::eq(&json!({"a": 1, "b": [1, 2, 4]})),
/// );
///
/// assert_eq!(rejections[0].to_string(), "b.2: expected 4 but got 3");
/// ```
#[derive(Debug, Clone)]
pub struct Equal {
    expected: Result<Value, ValueError>,
}

impl Equal {
    /// Creates a matcher expecting exactly `expected`.
    pub fn new(expected: Value) -> Self {
        Self {
            expected: Ok(expected),
        }
    }

    /// Creates a matcher expecting the serialized form of `expected`.
    ///
    /// A value whose `Serialize` implementation fails produces a matcher that
    /// rejects everything with the conversion error.
    pub fn of<T: Serialize + ?Sized>(expected: &T) -> Self {
        Self {
            expected: to_value(expected),
        }
    }

    /// Returns the expected value, if it could be represented.
    pub fn expected(&self) -> Option<&Value> {
        self.expected.as_ref().ok()
    }
}

impl Matcher for Equal {
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
        let expected = match &self.expected {
            Ok(expected) => expected,
            Err(err) => {
                ctx.reject_fmt(format_args!("cannot represent expected value: {}", err));
                return;
            }
        };
        for difference in compare(expected, actual) {
            ctx.reject_at(difference.path(), difference.reason());
        }
    }
}

impl Display for Equal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expected {
            Ok(value) => write!(f, "{}", value),
            Err(_) => write!(f, "<unrepresentable>"),
        }
    }
}
