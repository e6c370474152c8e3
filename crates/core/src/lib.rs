//! 2D/3D Euclidean Vector Library
//!
//! A small value-type library for basic geometric and physics math:
//! componentwise arithmetic, dot and cross products, magnitude,
//! normalization, inter-vector angle, and 2D rotation.
//!
//! A [`Vector`] always carries three `f64` components; constructing one
//! with [`Vector::new_2d`] defaults `z` to 0, so 2D and 3D usage share
//! the same type. Every operation is pure and returns a new value.

// Core value type and its operations
pub mod vector;

// Error types
pub mod error;

// Re-export core types
pub use error::VectorError;
pub use vector::Vector;
