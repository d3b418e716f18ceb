//! Positional sequence matching.

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::validation::ValidationContext;
use crate::value::{write_list, Shape, Value};

use super::traits::{IntoMatcher, Matcher};
use super::validate;

/// Matches a sequence element by element.
///
/// Unlike [`Partial`](super::Partial), the length must match too: every
/// surplus element on either side is rejected at its own index.
///
/// # Example
///
/// ```rust
/// use desire::{desire, Match};
///
/// let rejections = desire(&vec![1, 2, 3], Match::list([1, 2]));
///
/// assert_eq!(rejections.len(), 1);
/// assert_eq!(
///     rejections[0].to_string(),
///     "2: expected undefined but exists with value 3"
/// );
/// ```
#[derive(Clone, Default)]
pub struct List {
    items: Vec<Arc<dyn Matcher>>,
}

impl List {
    /// Creates an empty list matcher; it only matches empty sequences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list matcher from homogeneous desires.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoMatcher,
    {
        Self {
            items: items.into_iter().map(IntoMatcher::into_matcher).collect(),
        }
    }

    /// Appends the desire for the next position.
    pub fn item(mut self, desired: impl IntoMatcher) -> Self {
        self.items.push(desired.into_matcher());
        self
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no positions are declared.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Matcher for List {
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
        let items = match actual.shape() {
            Shape::Sequence(items) => items,
            _ => {
                ctx.reject_fmt(format_args!(
                    "expected array or slice but got {}",
                    actual.kind()
                ));
                return;
            }
        };

        let common = self.items.len().min(items.len());
        for (i, (desired, value)) in self.items.iter().zip(items).enumerate() {
            validate(&ctx.with_field(i), value, desired.as_ref());
        }
        for (i, desired) in self.items.iter().enumerate().skip(common) {
            ctx.with_field(i)
                .reject_fmt(format_args!("expected {} but undefined", desired));
        }
        for (i, value) in items.iter().enumerate().skip(common) {
            ctx.with_field(i).reject_fmt(format_args!(
                "expected undefined but exists with value {}",
                value
            ));
        }
    }
}

impl Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list")?;
        write_list(f, &self.items)
    }
}
