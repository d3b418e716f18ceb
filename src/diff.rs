//! Deep structural equality with leaf-level differences.
//!
//! [`compare`] walks an expected and an observed [`Value`] side by side and
//! reports every leaf where they disagree, keyed by the path relative to the
//! point where the comparison started.

use crate::value::Value;

/// One leaf-level disagreement between an expected and an observed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Difference<'a> {
    /// Both sides have a value here and they differ.
    Changed {
        path: Vec<String>,
        expected: &'a Value,
        observed: &'a Value,
    },
    /// The expected side has a value the observed side lacks.
    Missing { path: Vec<String>, expected: &'a Value },
    /// The observed side has a value the expected side does not mention.
    Unexpected { path: Vec<String>, observed: &'a Value },
}

impl Difference<'_> {
    /// Returns the path relative to the comparison root.
    pub fn path(&self) -> &[String] {
        match self {
            Difference::Changed { path, .. }
            | Difference::Missing { path, .. }
            | Difference::Unexpected { path, .. } => path,
        }
    }

    /// Returns the human-readable reason for this difference.
    pub fn reason(&self) -> String {
        match self {
            Difference::Changed {
                expected, observed, ..
            } => format!("expected {} but got {}", expected, observed),
            Difference::Missing { expected, .. } => format!("expected {} but undefined", expected),
            Difference::Unexpected { observed, .. } => {
                format!("expected undefined but exists with value {}", observed)
            }
        }
    }
}

/// Compares `expected` against `observed` and returns all differences.
///
/// Sequences are compared position by position; surplus elements on either
/// side are reported individually. Maps and structs are compared key by key.
/// Values of different shapes differ as a whole.
///
/// # Example
///
/// ```rust
/// use desire::diff::compare;
/// use desire::to_value;
///
/// let expected = to_value(&vec![1, 2, 4]).unwrap();
/// let observed = to_value(&vec![1, 2, 3]).unwrap();
///
/// let differences = compare(&expected, &observed);
/// assert_eq!(differences.len(), 1);
/// assert_eq!(differences[0].path(), &["2".to_string()]);
/// assert_eq!(differences[0].reason(), "expected 4 but got 3");
/// ```
pub fn compare<'a>(expected: &'a Value, observed: &'a Value) -> Vec<Difference<'a>> {
    let mut differences = Vec::new();
    let mut path = Vec::new();
    walk(expected, observed, &mut path, &mut differences);
    differences
}

fn walk<'a>(
    expected: &'a Value,
    observed: &'a Value,
    path: &mut Vec<String>,
    out: &mut Vec<Difference<'a>>,
) {
    match (expected, observed) {
        (Value::Seq(e) | Value::Tuple(e), Value::Seq(o) | Value::Tuple(o)) => {
            walk_sequence(e, o, path, out)
        }
        (Value::Map(e), Value::Map(o)) => walk_map(e, o, path, out),
        (
            Value::Struct {
                name: en,
                fields: ef,
            },
            Value::Struct {
                name: on,
                fields: of,
            },
        ) if en == on => {
            for (field, e) in ef {
                path.push(field.to_string());
                match of.get(field) {
                    Some(o) => walk(e, o, path, out),
                    None => out.push(Difference::Missing {
                        path: path.clone(),
                        expected: e,
                    }),
                }
                path.pop();
            }
            for (field, o) in of {
                if !ef.contains_key(field) {
                    path.push(field.to_string());
                    out.push(Difference::Unexpected {
                        path: path.clone(),
                        observed: o,
                    });
                    path.pop();
                }
            }
        }
        _ => {
            if expected != observed {
                out.push(Difference::Changed {
                    path: path.clone(),
                    expected,
                    observed,
                });
            }
        }
    }
}

fn walk_sequence<'a>(
    expected: &'a [Value],
    observed: &'a [Value],
    path: &mut Vec<String>,
    out: &mut Vec<Difference<'a>>,
) {
    let common = expected.len().min(observed.len());
    for (i, (e, o)) in expected.iter().zip(observed).enumerate() {
        path.push(i.to_string());
        walk(e, o, path, out);
        path.pop();
    }
    for (i, e) in expected.iter().enumerate().skip(common) {
        path.push(i.to_string());
        out.push(Difference::Missing {
            path: path.clone(),
            expected: e,
        });
        path.pop();
    }
    for (i, o) in observed.iter().enumerate().skip(common) {
        path.push(i.to_string());
        out.push(Difference::Unexpected {
            path: path.clone(),
            observed: o,
        });
        path.pop();
    }
}

fn walk_map<'a>(
    expected: &'a [(Value, Value)],
    observed: &'a [(Value, Value)],
    path: &mut Vec<String>,
    out: &mut Vec<Difference<'a>>,
) {
    for (key, e) in expected {
        path.push(key.to_string());
        match Value::get_entry(observed, key) {
            Some(o) => walk(e, o, path, out),
            None => out.push(Difference::Missing {
                path: path.clone(),
                expected: e,
            }),
        }
        path.pop();
    }
    for (key, o) in observed {
        if Value::get_entry(expected, key).is_none() {
            path.push(key.to_string());
            out.push(Difference::Unexpected {
                path: path.clone(),
                observed: o,
            });
            path.pop();
        }
    }
}
