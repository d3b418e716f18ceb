//! Traits for matcher polymorphism.
//!
//! [`Matcher`] is the capability every desired value ends up with. Plain
//! values get it through [`IntoMatcher`], which wraps them in [`Equal`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::{self, Display};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::validation::ValidationContext;
use crate::value::Value;

use super::equal::Equal;

/// A desired form that an actual value is checked against.
///
/// Implementations report mismatches through the context and never return
/// errors. They hold no per-call state, so one matcher can be applied to many
/// values, from many threads.
///
/// `Display` describes the matcher inside other matchers' reasons, e.g.
/// `expected one_of[1 2] but undefined`.
///
/// # Example
///
/// ```rust
/// use std::fmt;
/// use desire::{desire, Matcher, ValidationContext, Value};
///
/// struct Even;
///
/// impl fmt::Display for Even {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "even")
///     }
/// }
///
/// impl Matcher for Even {
///     fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
///         match actual {
///             Value::Int(i) if i % 2 == 0 => {}
///             other => ctx.reject(format!("expected even number but got {}", other)),
///         }
///     }
/// }
///
/// assert!(desire(&4, Even).is_empty());
/// assert_eq!(desire(&3, Even).len(), 1);
/// ```
pub trait Matcher: Display + Send + Sync {
    /// Checks `actual` and records rejections at `ctx`.
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value);
}

/// Conversion into a shared matcher.
///
/// Every [`Matcher`] converts into itself. Plain values (numbers, strings,
/// collections, `serde_json::Value`, [`Value`]) convert into an [`Equal`]
/// matcher comparing by deep equality.
pub trait IntoMatcher {
    fn into_matcher(self) -> Arc<dyn Matcher>;
}

impl<M: Matcher + 'static> IntoMatcher for M {
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(self)
    }
}

impl IntoMatcher for Arc<dyn Matcher> {
    fn into_matcher(self) -> Arc<dyn Matcher> {
        self
    }
}

impl IntoMatcher for Box<dyn Matcher> {
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::from(self)
    }
}

impl IntoMatcher for Value {
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::new(self))
    }
}

macro_rules! impl_into_matcher_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoMatcher for $ty {
                fn into_matcher(self) -> Arc<dyn Matcher> {
                    Arc::new(Equal::of(&self))
                }
            }
        )*
    };
}

impl_into_matcher_by_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    char,
    String,
    (),
    serde_json::Value,
);

impl IntoMatcher for &str {
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(self))
    }
}

impl<T: Serialize> IntoMatcher for &[T] {
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(self))
    }
}

impl<T: Serialize> IntoMatcher for Vec<T> {
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(&self))
    }
}

impl<T, const N: usize> IntoMatcher for [T; N]
where
    [T; N]: Serialize,
{
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(&self))
    }
}

impl<T: Serialize> IntoMatcher for Option<T> {
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(&self))
    }
}

impl<K, V> IntoMatcher for BTreeMap<K, V>
where
    BTreeMap<K, V>: Serialize,
{
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(&self))
    }
}

impl<K, V, S> IntoMatcher for HashMap<K, V, S>
where
    HashMap<K, V, S>: Serialize,
{
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(&self))
    }
}

impl<K, V, S> IntoMatcher for IndexMap<K, V, S>
where
    IndexMap<K, V, S>: Serialize,
{
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(&self))
    }
}

impl<T> IntoMatcher for BTreeSet<T>
where
    BTreeSet<T>: Serialize,
{
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(&self))
    }
}

impl<T, S> IntoMatcher for HashSet<T, S>
where
    HashSet<T, S>: Serialize,
{
    fn into_matcher(self) -> Arc<dyn Matcher> {
        Arc::new(Equal::of(&self))
    }
}

/// Type alias for the closure stored in [`FnMatcher`].
pub(crate) type ValidateFn = dyn Fn(&ValidationContext<'_>, &Value) + Send + Sync;

/// A matcher backed by a closure.
///
/// Created through [`Match::from_fn`](crate::Match::from_fn).
pub struct FnMatcher {
    description: String,
    validate: Box<ValidateFn>,
}

impl FnMatcher {
    /// Creates a matcher described as `description` that runs `f`.
    pub fn new<F>(description: impl Into<String>, f: F) -> Self
    where
        F: Fn(&ValidationContext<'_>, &Value) + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            validate: Box::new(f),
        }
    }
}

impl Matcher for FnMatcher {
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
        (self.validate)(ctx, actual)
    }
}

impl Display for FnMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}
