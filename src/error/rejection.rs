//! Rejection types.
//!
//! This module provides [`Rejection`] for a single mismatch and
//! [`Rejections`] for accumulating several of them.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::format::format_rejections;
use crate::path::Path;

/// A single mismatch between an actual value and its desired form.
///
/// # Example
///
/// ```rust
/// use desire::{Path, Rejection};
///
/// let rejection = Rejection::new(Path::root().push("b"), "expected 3 but got 2");
///
/// assert_eq!(rejection.to_string(), "b: expected 3 but got 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rejection {
    /// Where in the actual value the mismatch was found.
    pub path: Path,
    /// Human-readable reason.
    pub reason: String,
}

impl Rejection {
    /// Creates a rejection at `path`.
    pub fn new(path: Path, reason: impl Into<String>) -> Self {
        Self {
            path,
            reason: reason.into(),
        }
    }

    /// Sorts rejections by their rendered path.
    ///
    /// Emission order among siblings is unspecified, so assertions over
    /// several rejections should sort first. The sort is stable.
    pub fn sort_by_path(rejections: &mut [Rejection]) {
        rejections.sort_by_cached_key(|r| r.path.to_string());
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Rejection>();
    assert_sync::<Rejection>();
};

/// A non-empty collection of rejections.
///
/// `Rejections` is the failure side of [`check`](crate::check). It implements
/// `Semigroup`, so results of independent comparisons can be merged:
///
/// ```rust
/// use desire::{Path, Rejection, Rejections};
/// use stillwater::prelude::*;
///
/// let name = Rejections::single(Rejection::new(Path::root().push("name"), "expected alice but got bob"));
/// let age = Rejections::single(Rejection::new(Path::root().push("age"), "expected non-zero value but got 0"));
///
/// assert_eq!(name.combine(age).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rejections(NonEmptyVec<Rejection>);

impl Rejections {
    /// Creates a collection holding one rejection.
    pub fn single(rejection: Rejection) -> Self {
        Self(NonEmptyVec::singleton(rejection))
    }

    /// Creates a collection from a vec, or `None` when the vec is empty.
    pub fn from_vec(rejections: Vec<Rejection>) -> Option<Self> {
        NonEmptyVec::from_vec(rejections).map(Self)
    }

    /// Returns the number of rejections.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the rejections.
    pub fn iter(&self) -> impl Iterator<Item = &Rejection> {
        self.0.iter()
    }

    /// Returns all rejections recorded at `path`.
    pub fn at_path(&self, path: &Path) -> Vec<&Rejection> {
        self.0.iter().filter(|r| &r.path == path).collect()
    }

    /// Returns the first rejection.
    pub fn first(&self) -> &Rejection {
        self.0.head()
    }

    /// Converts this collection into a `Vec<Rejection>`.
    pub fn into_vec(self) -> Vec<Rejection> {
        self.0.into_vec()
    }
}

impl Semigroup for Rejections {
    fn combine(self, other: Self) -> Self {
        Rejections(self.0.combine(other.0))
    }
}

impl Display for Rejections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rejections: Vec<Rejection> = self.0.iter().cloned().collect();
        write!(f, "{}", format_rejections(&rejections))
    }
}

impl std::error::Error for Rejections {}

impl IntoIterator for Rejections {
    type Item = Rejection;
    type IntoIter = std::vec::IntoIter<Rejection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(segments: &[&str], reason: &str) -> Rejection {
        Rejection::new(Path::from(segments), reason)
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(
            at(&["friends", "1", "id"], "expected 3 but got 4").to_string(),
            "friends.1.id: expected 3 but got 4"
        );
    }

    #[test]
    fn test_rejection_display_root() {
        assert_eq!(at(&[], "expected 2 but got 1").to_string(), "(root): expected 2 but got 1");
    }

    #[test]
    fn test_sort_by_path() {
        let mut rejections = vec![at(&["name"], "n"), at(&["friends", "1"], "f"), at(&[], "r")];
        Rejection::sort_by_path(&mut rejections);

        let paths: Vec<String> = rejections.iter().map(|r| r.path.to_string()).collect();
        assert_eq!(paths, vec!["", "friends.1", "name"]);
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        assert!(Rejections::from_vec(Vec::new()).is_none());
        assert_eq!(Rejections::from_vec(vec![at(&["a"], "x")]).unwrap().len(), 1);
    }

    #[test]
    fn test_combine_and_at_path() {
        let a = Path::from(&["a"][..]);
        let combined = Rejections::single(at(&["a"], "1"))
            .combine(Rejections::single(at(&["b"], "2")))
            .combine(Rejections::single(at(&["a"], "3")));

        assert_eq!(combined.len(), 3);
        assert_eq!(combined.at_path(&a).len(), 2);
        assert_eq!(combined.first().reason, "1");
    }

    #[test]
    fn test_display_renders_tree() {
        let rejections = Rejections::single(at(&["a", "b"], "test 1"));
        assert_eq!(rejections.to_string(), "{\n    a: {\n        b: test 1,\n    },\n}");
    }
}
