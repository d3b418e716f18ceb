use std::fmt::Display;

use thiserror::Error;

/// Failure to convert a Rust value into a [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value's `Serialize` implementation reported an error.
    #[error("{0}")]
    Custom(String),

    /// A map entry's value was serialized without a preceding key.
    #[error("map value serialized without a key")]
    MissingMapKey,

    /// A 128-bit integer does not fit into 64 bits.
    #[error("integer {0} is out of range")]
    IntegerOutOfRange(String),
}

impl serde::ser::Error for ValueError {
    fn custom<T: Display>(msg: T) -> Self {
        ValueError::Custom(msg.to_string())
    }
}
