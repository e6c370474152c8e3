//! Error types for vector operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by [`Vector`](crate::Vector) operations.
///
/// Scalar division is the only fallible operation; everything else is a
/// total function over the reals (NaN and infinity propagate per IEEE
/// rules), or substitutes a documented sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum VectorError {
    /// The divisor passed to [`Vector::divide`](crate::Vector::divide) was
    /// exactly zero.
    #[error("cannot divide vector by zero scalar")]
    DivisionByZero,
}
