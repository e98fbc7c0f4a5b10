//! # vecops Quickstart
//!
//! ```rust
//! use vecops::prelude::*;
//!
//! let a = Vector::from([3.0, -3.0, 1.0]);
//! let b = Vector::from([4.0, 9.0, 2.0]);
//!
//! assert_eq!(dot_product(&a, &b).unwrap(), -13.0);
//! assert_eq!(cross_product(&a, &b).unwrap(), Vector::from([-15.0, -2.0, 39.0]));
//!
//! // Mismatched lengths are reported, not panicked on.
//! let short = Vector::from([1.0, 2.0]);
//! assert!(matches!(add(&a, &short), Err(VectorError::LengthMismatch { .. })));
//! ```
//!
#![doc = include_str!("../README.md")]

pub mod error;
pub mod prelude;
pub mod vector;

// --- Public API exports ---

pub use error::{Result, VectorError};
pub use vector::{
    add, cross_product, dot_product, equals, mul, negate, norm, scalar_div, scalar_mul, sub,
    Rounded, Vector,
};
