//! The [`Vector`] value type and its arithmetic and geometric operations.
//!
//! A `Vector` holds three `f64` components. 2D callers construct with
//! [`Vector::new_2d`] and get `z = 0`; all operations then behave as
//! plane geometry. Operations never mutate: each one returns a new
//! `Vector` (the type is `Copy`).
//!
//! Equality and the zero checks inside [`Vector::divide`],
//! [`Vector::normalize`] and [`Vector::angle_between`] are exact, with
//! no epsilon tolerance. Callers doing accumulating arithmetic must
//! bring their own tolerance; this is a deliberate contract, not an
//! oversight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::VectorError;

/// A 2D/3D Euclidean vector with `f64` components.
///
/// Any real values are structurally valid, including NaN and infinity,
/// which propagate through arithmetic per IEEE rules. Derived
/// `PartialEq` compares components exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component (0 for 2D vectors)
    pub z: f64,
}

impl Vector {
    /// The zero vector (0, 0, 0).
    pub const ZERO: Vector = Vector {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a 3D vector. No validation; any real values accepted.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Create a 2D vector with `z = 0`.
    #[inline]
    #[must_use]
    pub const fn new_2d(x: f64, y: f64) -> Self {
        Vector { x, y, z: 0.0 }
    }

    /// Componentwise quotient by a scalar.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] when `scalar` is exactly
    /// zero. Nonzero divisors never fail; infinities and NaN divide
    /// through per IEEE rules.
    #[inline]
    pub fn divide(self, scalar: f64) -> Result<Self, VectorError> {
        if scalar == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Vector::new(self.x / scalar, self.y / scalar, self.z / scalar))
    }

    /// Dot product: `x1·x2 + y1·y2 + z1·z2`.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, standard 3D formula.
    ///
    /// Computed for planar (`z = 0`) inputs too; the result then has
    /// zero `x` and `y` components and its `z` is the signed area of
    /// the parallelogram.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Vector magnitude (Euclidean length).
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector with the same direction.
    ///
    /// The zero vector has no direction; normalizing it returns
    /// [`Vector::ZERO`] rather than failing.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vector::ZERO;
        }
        Vector::new(self.x / mag, self.y / mag, self.z / mag)
    }

    /// Angle between two vectors, in radians.
    ///
    /// When either magnitude is zero the angle is undefined; this
    /// returns 0 instead of failing, which conflates "zero vector"
    /// with "parallel". A documented approximation, not a precision
    /// computation.
    #[inline]
    #[must_use]
    pub fn angle_between(self, other: Self) -> f64 {
        let magnitudes = self.magnitude() * other.magnitude();
        if magnitudes == 0.0 {
            return 0.0;
        }
        (self.dot(other) / magnitudes).acos()
    }

    /// Rotate in the x-y plane by an angle in degrees, counterclockwise.
    ///
    /// The `z` component of the source is ignored; the result is always
    /// a 2D vector (`z = 0`).
    #[inline]
    #[must_use]
    pub fn rotate_2d(self, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        Vector::new_2d(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

// Vector + Vector = Vector (componentwise sum)
impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vector - Vector = Vector (componentwise difference)
impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vector * f64 = Vector (scalar scaling)
impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f64 * Vector = Vector (scaling commutes)
impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {}, {})", self.x, self.y, self.z)
    }
}
