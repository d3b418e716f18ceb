//! Path representation for locating values in nested structures.
//!
//! A [`Path`] is an ordered list of opaque string segments: map keys,
//! struct field names and sequence indices all render the same way.

use std::fmt::{self, Display};

/// A path to a value in a nested structure.
///
/// The root path has no segments. Rendering joins segments with `.`, so the
/// second friend's id renders as `friends.1.id`.
///
/// # Example
///
/// ```rust
/// use desire::Path;
///
/// let path = Path::root().push("friends").push(1).push("id");
///
/// assert_eq!(path.to_string(), "friends.1.id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push(&self, segment: impl ToString) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the parent path (all segments except the last), or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl<'a> From<&[&'a str]> for Path {
    fn from(segments: &[&'a str]) -> Self {
        segments.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = Path::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_single_segment() {
        let path = Path::root().push("user");
        assert_eq!(path.to_string(), "user");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_index_renders_like_field() {
        let path = Path::root().push("users").push(0).push("email");
        assert_eq!(path.to_string(), "users.0.email");
    }

    #[test]
    fn test_path_immutability() {
        let base = Path::root().push("users");
        let path_a = base.push(0);
        let path_b = base.push(1);

        assert_eq!(base.to_string(), "users");
        assert_eq!(path_a.to_string(), "users.0");
        assert_eq!(path_b.to_string(), "users.1");
    }

    #[test]
    fn test_parent_path() {
        let path = Path::root().push("a").push("b").push("c");

        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "a.b");

        let root = parent.parent().unwrap().parent().unwrap();
        assert!(root.is_root());
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_last_segment() {
        let path = Path::root().push("users").push(0);
        assert_eq!(path.last(), Some("0"));
        assert_eq!(Path::root().last(), None);
    }

    #[test]
    fn test_segment_wise_ordering() {
        let short = Path::from(&["a"][..]);
        let long = Path::from(&["a", "b"][..]);
        let other = Path::from(&["b"][..]);

        assert!(short < long);
        assert!(long < other);
    }

    #[test]
    fn test_collect_from_iterator() {
        let path: Path = vec!["x", "y"].into_iter().collect();
        assert_eq!(path, Path::root().push("x").push("y"));
    }
}
