//! Subset matching for maps, structs and sequences.
//!
//! This module provides [`Partial`], which checks only the keys it names and
//! ignores everything else in the actual value.

use std::fmt::{self, Display};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::validation::ValidationContext;
use crate::value::{Shape, Value};

use super::traits::{IntoMatcher, Matcher};
use super::validate;

/// A key of a [`Partial`]: a map key or field name, or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    Int(i64),
}

impl Key {
    /// Returns the type name of this key as used in rejection reasons.
    pub fn type_name(&self) -> &'static str {
        match self {
            Key::Str(_) => "string",
            Key::Int(_) => "int",
        }
    }

    /// Returns true if this key can be looked up in a map whose keys are of
    /// type `key_type`.
    fn assignable_to(&self, key_type: &str) -> bool {
        match self {
            Key::Str(_) => key_type == "string",
            Key::Int(_) => key_type == "int",
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Key::Str(s) => Value::String(s.clone()),
            Key::Int(i) => Value::Int(*i),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{}", s),
            Key::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i.into())
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<u32> for Key {
    fn from(i: u32) -> Self {
        Key::Int(i.into())
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

/// Matches a subset of the keys of a map, struct or sequence.
///
/// Each declared key is looked up in the actual value and its value is
/// matched against the declared desire. Keys that are not declared are never
/// inspected; declared keys that are missing are rejected.
///
/// - On maps, keys must be assignable to the map's key type.
/// - On structs, keys must be strings naming fields.
/// - On sequences, keys must be integer indices within bounds.
///
/// # Example
///
/// ```rust
/// use desire::{desire, Match};
/// use serde_json::json;
///
/// let actual = json!({"id": 1, "name": "alice", "age": 20});
///
/// let rejections = desire(
///     &actual,
///     Match::partial().key("id", Match::not_zero()).key("name", "alice"),
/// );
/// assert!(rejections.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct Partial {
    entries: IndexMap<Key, Arc<dyn Matcher>>,
}

impl Partial {
    /// Creates a partial matcher with no keys; it matches every map, struct
    /// and sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key and the desire for its value.
    ///
    /// Declaring the same key twice replaces the earlier desire.
    pub fn key(mut self, key: impl Into<Key>, desired: impl IntoMatcher) -> Self {
        self.entries.insert(key.into(), desired.into_matcher());
        self
    }

    /// Returns the number of declared keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keys are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate_map(&self, ctx: &ValidationContext<'_>, entries: &[(Value, Value)]) {
        let key_type = Value::map_key_type(entries);
        for (key, desired) in &self.entries {
            let field = ctx.with_field(key);
            if let Some(key_type) = key_type {
                if !key.assignable_to(key_type) {
                    field.reject_fmt(format_args!(
                        "expected key type {} but got {}",
                        key.type_name(),
                        key_type
                    ));
                    continue;
                }
            }
            match Value::get_entry(entries, &key.to_value()) {
                Some(value) => validate(&field, value, desired.as_ref()),
                None => field.reject_fmt(format_args!("expected {} but undefined", desired)),
            }
        }
    }

    fn validate_struct(
        &self,
        ctx: &ValidationContext<'_>,
        fields: &IndexMap<&'static str, Value>,
    ) {
        for (key, desired) in &self.entries {
            let Key::Str(name) = key else {
                ctx.reject("key type of Partial must be string for struct");
                continue;
            };
            let field = ctx.with_field(name);
            match fields.get(name.as_str()) {
                Some(value) => validate(&field, value, desired.as_ref()),
                None => field.reject_fmt(format_args!("expected {} but undefined", desired)),
            }
        }
    }

    fn validate_sequence(&self, ctx: &ValidationContext<'_>, items: &[Value]) {
        for (key, desired) in &self.entries {
            let Key::Int(index) = key else {
                ctx.reject("key type of Partial must be int for slice or array");
                continue;
            };
            let field = ctx.with_field(index);
            match usize::try_from(*index).ok().and_then(|i| items.get(i)) {
                Some(value) => validate(&field, value, desired.as_ref()),
                None => field.reject_fmt(format_args!(
                    "index out of range for size {}",
                    items.len()
                )),
            }
        }
    }
}

impl Matcher for Partial {
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
        match actual.shape() {
            Shape::Map(entries) => self.validate_map(ctx, entries),
            Shape::Struct { fields, .. } => self.validate_struct(ctx, fields),
            Shape::Sequence(items) => self.validate_sequence(ctx, items),
            Shape::Scalar(value) => ctx.reject_fmt(format_args!(
                "expected slice, array, map or struct but got {}",
                value.kind()
            )),
        }
    }
}

impl Display for Partial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "partial{{")?;
        for (i, (key, desired)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", key, desired)?;
        }
        write!(f, "}}")
    }
}
