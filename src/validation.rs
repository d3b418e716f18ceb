//! Validation context for path-tracked rejection.
//!
//! This module provides the [`ValidationContext`] type that matchers receive.
//! It knows where in the actual value it points and where rejections go.

use std::cell::RefCell;
use std::fmt;

use crate::error::Rejection;
use crate::path::Path;

/// A cursor into the value being compared.
///
/// A context is an immutable link in a chain of path segments leading back to
/// the root, plus a borrow of the collector owned by the top-level call. Every
/// context derived from one root records into that root's collector, and the
/// recorded path is always the full chain from the root.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use desire::ValidationContext;
///
/// let collector = RefCell::new(Vec::new());
/// let root = ValidationContext::root(&collector);
///
/// root.with_field("friends").with_field("1").reject("expected 3 but got 4");
///
/// let rejections = collector.into_inner();
/// assert_eq!(rejections[0].to_string(), "friends.1: expected 3 but got 4");
/// ```
#[derive(Clone)]
pub struct ValidationContext<'a> {
    parent: Option<&'a ValidationContext<'a>>,
    segment: String,
    rejections: &'a RefCell<Vec<Rejection>>,
}

impl<'a> ValidationContext<'a> {
    /// Creates a root context recording into `rejections`.
    pub fn root(rejections: &'a RefCell<Vec<Rejection>>) -> Self {
        Self {
            parent: None,
            segment: String::new(),
            rejections,
        }
    }

    /// Returns a child context one segment below this one.
    ///
    /// Nothing is recorded and this context is left untouched.
    pub fn with_field(&self, segment: impl ToString) -> ValidationContext<'_> {
        ValidationContext {
            parent: Some(self),
            segment: segment.to_string(),
            rejections: self.rejections,
        }
    }

    /// Returns the full path from the root to this context.
    pub fn path(&self) -> Path {
        let mut segments = Vec::new();
        let mut current = Some(self);
        while let Some(ctx) = current {
            if ctx.parent.is_some() {
                segments.push(ctx.segment.clone());
            }
            current = ctx.parent;
        }
        segments.reverse();
        Path::from(segments)
    }

    /// Records a rejection at this context's path.
    pub fn reject(&self, reason: impl Into<String>) {
        let rejection = Rejection::new(self.path(), reason);
        self.rejections.borrow_mut().push(rejection);
    }

    /// Records a rejection with a formatted reason.
    pub fn reject_fmt(&self, args: fmt::Arguments<'_>) {
        self.reject(args.to_string());
    }

    /// Records a rejection at `relative` below this context.
    ///
    /// Equivalent to descending by each segment of `relative` and rejecting
    /// there.
    pub fn reject_at<S: AsRef<str>>(&self, relative: &[S], reason: impl Into<String>) {
        let mut path = self.path();
        for segment in relative {
            path = path.push(segment.as_ref());
        }
        self.rejections.borrow_mut().push(Rejection::new(path, reason));
    }
}

impl fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("path", &self.path())
            .finish()
    }
}
