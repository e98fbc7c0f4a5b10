// src/prelude.rs
//! The “everything” import for vecops.
//!
//! ```rust
//! use vecops::prelude::*;
//! ```

// core data types
pub use crate::error::{Result, VectorError};
pub use crate::vector::{Rounded, Vector};

// operations
pub use crate::vector::{
    add, cross_product, dot_product, equals, mul, negate, norm, scalar_div, scalar_mul, sub,
};
