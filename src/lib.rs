//! # Desire
//!
//! Structural value matching for test assertions. An actual value is compared
//! against a desired form, and EVERY mismatch is reported with its path rather
//! than stopping at the first difference.
//!
//! ## Overview
//!
//! A desired form is either a plain value, compared by deep equality, or a
//! composable matcher: [`Partial`] checks only the keys it names, [`List`]
//! checks a sequence position by position, [`NotZero`], [`OneOf`], [`All`]
//! and [`AnyValue`] express the rest.
//!
//! ## Core Types
//!
//! - [`Path`]: where in the actual value a mismatch was found (e.g. `friends.1.id`)
//! - [`Rejection`]: a single mismatch with its path and reason
//! - [`Rejections`]: a non-empty collection of rejections
//! - [`Matcher`]: the capability every desired form has
//! - [`Match`]: entry point for creating matchers
//! - [`Value`]: the dynamic form actual values are inspected in
//!
//! ## Example
//!
//! ```rust
//! use desire::{desire, List, Match, Rejection};
//! use serde_json::json;
//!
//! let actual = json!({
//!     "id": 1,
//!     "name": "david",
//!     "age": 20,
//!     "friends": [
//!         {"id": 2, "name": "bob"},
//!         {"id": 4, "name": "charlie"},
//!     ],
//! });
//!
//! let mut rejections = desire(
//!     &actual,
//!     Match::partial()
//!         .key("id", Match::not_zero_of::<i64>())
//!         .key("name", Match::one_of(["alice", "bob"]))
//!         .key(
//!             "friends",
//!             List::new().item(Match::not_zero()).item(json!({"id": 3, "name": "charlie"})),
//!         ),
//! );
//! Rejection::sort_by_path(&mut rejections);
//!
//! let rendered: Vec<String> = rejections.iter().map(|r| r.to_string()).collect();
//! assert_eq!(
//!     rendered,
//!     vec![
//!         "friends.1.id: expected 3 but got 4",
//!         "name: expected one of [alice bob] but got david",
//!     ]
//! );
//! ```

use std::cell::RefCell;

use serde::Serialize;
use stillwater::Validation;

pub mod diff;
pub mod error;
pub mod format;
pub mod matcher;
pub mod path;
pub mod validation;
pub mod value;

pub use error::{Rejection, Rejections, ValueError};
pub use format::{format_rejections, TreeFormatter};
pub use matcher::{
    validate, All, AnyValue, Equal, FnMatcher, IntoMatcher, Key, List, Match, Matcher, NotZero,
    NotZeroOf, OneOf, Partial, Pattern,
};
pub use path::Path;
pub use validation::ValidationContext;
pub use value::{to_value, Shape, Value};

/// Type alias for comparison results using [`Rejections`].
pub type ValidationResult = Validation<(), Rejections>;

/// Compares `actual` against `desired` and returns every rejection.
///
/// An empty result means `actual` fully matches. If `actual` cannot be
/// converted into a [`Value`], the result is a single rejection at the root.
///
/// # Example
///
/// ```rust
/// use desire::desire;
///
/// assert!(desire(&vec![1, 2, 3], vec![1, 2, 3]).is_empty());
///
/// let rejections = desire(&1, 2);
/// assert_eq!(rejections[0].reason, "expected 2 but got 1");
/// ```
pub fn desire<T, D>(actual: &T, desired: D) -> Vec<Rejection>
where
    T: Serialize + ?Sized,
    D: IntoMatcher,
{
    let desired = desired.into_matcher();
    match to_value(actual) {
        Ok(actual) => desire_value(&actual, desired.as_ref()),
        Err(err) => vec![Rejection::new(
            Path::root(),
            format!("cannot inspect actual value: {}", err),
        )],
    }
}

/// Compares an already converted `actual` against `desired`.
pub fn desire_value(actual: &Value, desired: &dyn Matcher) -> Vec<Rejection> {
    let span = tracing::trace_span!("desire", matcher = %desired);
    let _enter = span.enter();

    let collector = RefCell::new(Vec::new());
    validate(&ValidationContext::root(&collector), actual, desired);
    let rejections = collector.into_inner();

    tracing::debug!(rejections = rejections.len(), "comparison finished");
    rejections
}

/// Compares `actual` against `desired`, returning a [`Validation`].
///
/// # Example
///
/// ```rust
/// use desire::{check, Match};
///
/// let result = check(&0, Match::not_zero());
/// assert!(result.is_failure());
/// ```
pub fn check<T, D>(actual: &T, desired: D) -> ValidationResult
where
    T: Serialize + ?Sized,
    D: IntoMatcher,
{
    match Rejections::from_vec(desire(actual, desired)) {
        None => Validation::Success(()),
        Some(rejections) => Validation::Failure(rejections),
    }
}

/// Asserts that a value matches a desired form.
///
/// On failure, panics with the rejections rendered as a tree.
///
/// # Example
///
/// ```rust
/// use desire::{assert_desire, Match};
///
/// assert_desire!(vec![1, 2, 3], Match::partial().key(1, 2));
/// ```
#[macro_export]
macro_rules! assert_desire {
    ($actual:expr, $desired:expr $(,)?) => {{
        let rejections = $crate::desire(&$actual, $desired);
        if !rejections.is_empty() {
            panic!(
                "value does not match desire:\n{}",
                $crate::format_rejections(&rejections)
            );
        }
    }};
}
