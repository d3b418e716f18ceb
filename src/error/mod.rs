//! Error types for comparison results.
//!
//! Mismatches are values: a [`Rejection`] records one of them with its path,
//! [`Rejections`] accumulates a non-empty set. Failures to turn a Rust value
//! into a [`Value`](crate::Value) are reported as [`ValueError`].

mod rejection;
mod value_error;

pub use rejection::{Rejection, Rejections};
pub use value_error::ValueError;
