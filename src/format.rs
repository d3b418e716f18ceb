//! Rendering of rejections as a nested tree.
//!
//! Rejections are grouped by path segment, siblings are sorted, and each
//! level of nesting is indented:
//!
//! ```text
//! {
//!     a: {
//!         b: test 1,
//!     },
//!     f: test 4,
//! }
//! ```

use std::collections::BTreeMap;

use crate::error::Rejection;

/// Renders `rejections` as a tree with the default four-space indent.
///
/// An empty slice renders as the empty string; a rejection at the root renders
/// as its bare reason.
///
/// # Example
///
/// ```rust
/// use desire::{format_rejections, Path, Rejection};
///
/// let rejections = vec![
///     Rejection::new(Path::from(&["a", "b"][..]), "test 1"),
///     Rejection::new(Path::from(&["f"][..]), "test 2"),
/// ];
///
/// assert_eq!(
///     format_rejections(&rejections),
///     "{\n    a: {\n        b: test 1,\n    },\n    f: test 2,\n}"
/// );
/// ```
pub fn format_rejections(rejections: &[Rejection]) -> String {
    TreeFormatter::new().format(rejections)
}

/// Configurable tree renderer.
#[derive(Debug, Clone)]
pub struct TreeFormatter {
    indent: usize,
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

#[derive(Default)]
struct Node<'a> {
    reasons: Vec<&'a str>,
    children: BTreeMap<&'a str, Node<'a>>,
}

impl TreeFormatter {
    /// Creates a formatter with a four-space indent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Renders `rejections`.
    ///
    /// Reasons recorded at the same path are joined with `; `.
    pub fn format(&self, rejections: &[Rejection]) -> String {
        if rejections.is_empty() {
            return String::new();
        }
        let mut root = Node::default();
        for rejection in rejections {
            let mut node = &mut root;
            for segment in rejection.path.segments() {
                node = node.children.entry(segment).or_default();
            }
            node.reasons.push(&rejection.reason);
        }
        let mut out = String::new();
        self.write_node(&mut out, &root, 0);
        out
    }

    fn write_node(&self, out: &mut String, node: &Node<'_>, depth: usize) {
        out.push_str(&node.reasons.join("; "));
        if node.children.is_empty() {
            return;
        }
        out.push_str("{\n");
        for (segment, child) in &node.children {
            out.push_str(&" ".repeat(self.indent * (depth + 1)));
            out.push_str(segment);
            out.push_str(": ");
            self.write_node(out, child, depth + 1);
            out.push_str(",\n");
        }
        out.push_str(&" ".repeat(self.indent * depth));
        out.push('}');
    }
}
