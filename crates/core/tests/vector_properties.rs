//! Algebraic Property Test Suite
//!
//! Validates the algebraic identities the vector operations are expected
//! to satisfy, over a spread of 2D and 3D sample vectors:
//! 1. Addition commutativity and associativity
//! 2. Self-subtraction yields the zero vector
//! 3. Scale/divide round-trip
//! 4. Dot product commutativity
//! 5. Cross product anti-commutativity
//!
//! Identities that hold exactly in floating point (commutativity,
//! self-subtraction, dot symmetry, cross anti-symmetry) are asserted
//! with exact equality; identities subject to accumulation error
//! (associativity, scale/divide round-trip) use a relative tolerance.
//!
//! Run tests with: `cargo test --test vector_properties`

use approx::assert_relative_eq;
use vecmath_core::{Vector, VectorError};

/// Sample vectors covering 2D, 3D, negative, fractional, and large values.
fn samples() -> Vec<Vector> {
    vec![
        Vector::ZERO,
        Vector::new_2d(1.0, 0.0),
        Vector::new_2d(-3.5, 2.25),
        Vector::new(1.0, 2.0, 3.0),
        Vector::new(-7.0, 0.125, 42.0),
        Vector::new(1e9, -2e-9, 3.14159),
    ]
}

fn assert_vectors_close(a: Vector, b: Vector, epsilon: f64) {
    assert_relative_eq!(a.x, b.x, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(a.y, b.y, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(a.z, b.z, epsilon = epsilon, max_relative = epsilon);
}

#[test]
fn test_addition_commutes() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a + b, b + a, "{a} + {b} != {b} + {a}");
        }
    }
}

#[test]
fn test_addition_associates_within_tolerance() {
    for a in samples() {
        for b in samples() {
            for c in samples() {
                assert_vectors_close((a + b) + c, a + (b + c), 1e-9);
            }
        }
    }
}

#[test]
fn test_self_subtraction_is_zero() {
    for a in samples() {
        assert_eq!(a - a, Vector::ZERO, "{a} - {a} != zero");
    }
}

#[test]
fn test_scale_divide_round_trip() {
    let scalars = [1.0, -1.0, 0.5, 3.0, 1e6, -2.5e-4];
    for a in samples() {
        for k in scalars {
            let round_tripped = (a * k).divide(k).expect("nonzero divisor");
            assert_vectors_close(round_tripped, a, 1e-9);
        }
    }
}

#[test]
fn test_divide_by_zero_always_fails() {
    for a in samples() {
        assert_eq!(a.divide(0.0), Err(VectorError::DivisionByZero), "{a} / 0");
    }
}

#[test]
fn test_dot_product_commutes() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.dot(b), b.dot(a), "{a} · {b} != {b} · {a}");
        }
    }
}

#[test]
fn test_cross_product_anti_commutes() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.cross(b), -b.cross(a), "{a} × {b} != -({b} × {a})");
        }
    }
}

#[test]
fn test_normalize_produces_unit_length() {
    for a in samples() {
        if a.magnitude() == 0.0 {
            continue;
        }
        assert_relative_eq!(a.normalize().magnitude(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_scalar_multiplication_commutes_with_f64() {
    for a in samples() {
        assert_eq!(a * 2.5, 2.5 * a);
    }
}
