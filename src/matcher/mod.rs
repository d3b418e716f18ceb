//! Matchers and the dispatch rule connecting them.
//!
//! A desired value is either a plain value, compared by deep equality, or a
//! matcher with its own semantics. Both end up as a [`Matcher`]: plain values
//! are wrapped in [`Equal`] when they are converted through [`IntoMatcher`].
//! [`validate`] is the single point through which every matcher recurses into
//! nested values.
//!
//! # Example
//!
//! ```rust
//! use desire::{desire, Match};
//! use serde_json::json;
//!
//! let desired = Match::partial()
//!     .key("id", Match::not_zero_of::<i64>())
//!     .key("tags", Match::list(["a", "b"]));
//!
//! assert!(desire(&json!({"id": 7, "tags": ["a", "b"], "extra": true}), desired).is_empty());
//! ```

mod combinators;
mod equal;
mod leaf;
mod list;
mod partial;
mod traits;

pub use combinators::{All, OneOf};
pub use equal::Equal;
pub use leaf::{AnyValue, NotZero, NotZeroOf, Pattern};
pub use list::List;
pub use partial::{Key, Partial};
pub use traits::{FnMatcher, IntoMatcher, Matcher};

use serde::Serialize;

use crate::validation::ValidationContext;
use crate::value::Value;

/// Matches `actual` against `desired` at `ctx`.
///
/// Matchers call this for every nested value they hand on, so that the
/// context, and with it the recorded path, follows the recursion.
pub fn validate(ctx: &ValidationContext<'_>, actual: &Value, desired: &dyn Matcher) {
    tracing::trace!(path = %ctx.path(), matcher = %desired, "validate");
    desired.validate(ctx, actual);
}

/// Entry point for creating matchers.
///
/// # Example
///
/// ```rust
/// use desire::{desire, Match};
///
/// let rejections = desire(&0, Match::all([Match::not_zero()]).and(Match::one_of([1, 2, 3])));
///
/// assert_eq!(rejections.len(), 2);
/// ```
pub struct Match;

impl Match {
    /// Creates a [`Partial`] with no keys.
    pub fn partial() -> Partial {
        Partial::new()
    }

    /// Creates a [`List`] from homogeneous desires.
    ///
    /// Use [`List::item`] to build a list of mixed desires.
    pub fn list<I>(items: I) -> List
    where
        I: IntoIterator,
        I::Item: IntoMatcher,
    {
        List::from_items(items)
    }

    /// Creates a [`NotZero`] matcher.
    pub fn not_zero() -> NotZero {
        NotZero
    }

    /// Creates a [`NotZeroOf`] matcher for `T`.
    pub fn not_zero_of<T: Serialize + Default>() -> NotZeroOf<T> {
        NotZeroOf::new()
    }

    /// Creates a [`OneOf`] matcher over `candidates`.
    pub fn one_of<I>(candidates: I) -> OneOf
    where
        I: IntoIterator,
        I::Item: IntoMatcher,
    {
        OneOf::new(candidates)
    }

    /// Creates an [`All`] matcher over `matchers`.
    pub fn all<I>(matchers: I) -> All
    where
        I: IntoIterator,
        I::Item: IntoMatcher,
    {
        All::new(matchers)
    }

    /// Creates a matcher that accepts every value.
    pub fn any() -> AnyValue {
        AnyValue
    }

    /// Creates an [`Equal`] matcher for any serializable value.
    pub fn eq<T: Serialize + ?Sized>(expected: &T) -> Equal {
        Equal::of(expected)
    }

    /// Creates a [`Pattern`] matcher, or returns an error if the regex is
    /// invalid.
    pub fn pattern(pattern: &str) -> Result<Pattern, regex::Error> {
        Pattern::new(pattern)
    }

    /// Creates a matcher from a closure.
    ///
    /// ```rust
    /// use desire::{desire, Match, Value};
    ///
    /// let even = Match::from_fn("even", |ctx, actual| {
    ///     if !matches!(actual, Value::Int(i) if i % 2 == 0) {
    ///         ctx.reject(format!("expected even number but got {}", actual));
    ///     }
    /// });
    ///
    /// assert_eq!(desire(&3, even)[0].reason, "expected even number but got 3");
    /// ```
    pub fn from_fn<F>(description: impl Into<String>, f: F) -> FnMatcher
    where
        F: Fn(&ValidationContext<'_>, &Value) + Send + Sync + 'static,
    {
        FnMatcher::new(description, f)
    }
}
