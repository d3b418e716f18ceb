//! Dynamic representation of the values being compared.
//!
//! Any `serde::Serialize` type converts into a [`Value`] through
//! [`to_value`]. Matchers never inspect Rust types directly; they branch on
//! [`Value::shape`] instead.

mod ser;

use std::fmt::{self, Display};

use indexmap::IndexMap;

pub use ser::{to_value, ValueSerializer};

/// A dynamically shaped value.
///
/// `Option::Some` and newtype structs are transparent, `None` becomes
/// [`Value::Null`], fixed-size arrays, tuples and tuple structs become
/// [`Value::Tuple`]. Enum variants follow serde_json's external tagging: a
/// unit variant is its name as a string, any other variant is a single-entry
/// map from its name to its payload.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Unit,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    String(String),
    /// Variable-length sequence (`Vec`, slices, sets).
    Seq(Vec<Value>),
    /// Fixed-length sequence (arrays, tuples, tuple structs).
    Tuple(Vec<Value>),
    /// Map entries in iteration order of the source map.
    Map(Vec<(Value, Value)>),
    Struct {
        name: &'static str,
        fields: IndexMap<&'static str, Value>,
    },
}

/// The structural shape of a [`Value`].
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Map(&'a [(Value, Value)]),
    Struct {
        name: &'static str,
        fields: &'a IndexMap<&'static str, Value>,
    },
    Sequence(&'a [Value]),
    Scalar(&'a Value),
}

impl Value {
    /// Returns the structural shape used by matchers to branch.
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Value::Map(entries) => Shape::Map(entries),
            Value::Struct { name, fields } => Shape::Struct {
                name: *name,
                fields,
            },
            Value::Seq(items) | Value::Tuple(items) => Shape::Sequence(items),
            other => Shape::Scalar(other),
        }
    }

    /// Returns the kind of this value, e.g. `int`, `string` or `struct`.
    ///
    /// Signed and unsigned integers share the kind `int`: serialized integers
    /// do not reliably keep their signedness (serde_json emits non-negative
    /// numbers as unsigned).
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "none",
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::Uint(_) => "int",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::String(_) => "string",
            Value::Seq(_) => "seq",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "map",
            Value::Struct { .. } => "struct",
        }
    }

    /// Returns the type name of this value: the struct name for structs,
    /// the kind for everything else.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Struct { name, .. } => *name,
            other => other.kind(),
        }
    }

    /// Returns true if this value equals the default value of its type.
    ///
    /// Tuples and structs are zero when every member is zero; variable-length
    /// sequences and maps are zero when empty.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null | Value::Unit => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Uint(u) => *u == 0,
            Value::Float(f) => *f == 0.0,
            Value::Char(c) => *c == '\0',
            Value::String(s) => s.is_empty(),
            Value::Seq(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            Value::Tuple(items) => items.iter().all(Value::is_zero),
            Value::Struct { fields, .. } => fields.values().all(Value::is_zero),
        }
    }

    /// Looks up a map entry by key using value equality.
    pub fn get_entry<'a>(entries: &'a [(Value, Value)], key: &Value) -> Option<&'a Value> {
        entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the key type shared by all entries of a map, or `None` when the
    /// map is empty or its keys are of mixed types.
    pub fn map_key_type(entries: &[(Value, Value)]) -> Option<&'static str> {
        let mut keys = entries.iter().map(|(k, _)| k.type_name());
        let first = keys.next()?;
        keys.all(|t| t == first).then_some(first)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Int(a), Value::Uint(b)) | (Value::Uint(b), Value::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Float(f), Value::Int(i)) | (Value::Int(i), Value::Float(f)) => {
                float_eq_int(*f, *i)
            }
            (Value::Float(f), Value::Uint(u)) | (Value::Uint(u), Value::Float(f)) => {
                float_eq_uint(*f, *u)
            }
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Seq(a) | Value::Tuple(a), Value::Seq(b) | Value::Tuple(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| Value::get_entry(b, k).is_some_and(|other| other == v))
            }
            (
                Value::Struct { name: a, fields: fa },
                Value::Struct { name: b, fields: fb },
            ) => a == b && fa == fb,
            _ => false,
        }
    }
}

// The bounds are 2^63 and 2^64, both exact in f64. Within them an integral
// float converts to the integer without rounding.
fn float_eq_int(f: f64, i: i64) -> bool {
    f.fract() == 0.0
        && (-9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0).contains(&f)
        && f as i64 == i
}

fn float_eq_uint(f: f64, u: u64) -> bool {
    f.fract() == 0.0
        && (0.0..18_446_744_073_709_551_616.0).contains(&f)
        && f as u64 == u
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Char(c) => write!(f, "{}", c),
            Value::String(s) => write!(f, "{}", s),
            Value::Seq(items) | Value::Tuple(items) => write_list(f, items),
            Value::Map(entries) => {
                write!(f, "map[")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}:{}", k, v)?;
                }
                write!(f, "]")
            }
            Value::Struct { name, fields } => {
                write!(f, "{}{{", name)?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}:{}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Writes `items` as a bracketed, space separated list: `[1 2 3]`.
pub(crate) fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $cast)
                }
            }
        )*
    };
}

impl_from! {
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => Uint as u64,
    u16 => Uint as u64,
    u32 => Uint as u64,
    u64 => Uint as u64,
    f32 => Float as f64,
    f64 => Float as f64,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
