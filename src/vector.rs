//! Fixed-length `f64` vectors and the operations over them.
//!
//! Every producing operation allocates a fresh [`Vector`]; inputs are only
//! ever borrowed. Binary operations that need equal lengths return
//! [`VectorError::LengthMismatch`] instead of panicking.

use crate::error::{Result, VectorError};
use log::debug;
use std::fmt;
use std::ops::{Div, Index, Mul, Neg};

/// An ordered, fixed-length sequence of `f64`.
#[derive(Clone, Debug, Default)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Create a `Vector` that takes ownership of `data`.
    #[inline]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// A vector of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.data.get(i).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Give back the underlying buffer.
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }

    /// Dot product with `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> Result<f64> {
        dot_product(self, other)
    }

    /// Cross product with `other`. Both must have length 3.
    #[inline]
    pub fn cross(&self, other: &Self) -> Result<Self> {
        cross_product(self, other)
    }

    /// Euclidean norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        norm(self)
    }

    /// Scale the vector by a scalar.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        scalar_mul(self, s)
    }
}

fn check_same_len(op: &str, a: &Vector, b: &Vector) -> Result<()> {
    if a.len() != b.len() {
        debug!("{}: length mismatch ({} vs {})", op, a.len(), b.len());
        return Err(VectorError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

fn map(v: &Vector, f: impl Fn(f64) -> f64) -> Vector {
    v.data.iter().map(|&x| f(x)).collect()
}

fn zip_with(
    op: &str,
    a: &Vector,
    b: &Vector,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Vector> {
    check_same_len(op, a, b)?;
    Ok(a.data
        .iter()
        .zip(b.data.iter())
        .map(|(&x, &y)| f(x, y))
        .collect())
}

/// Multiply every element of `v` by `s`.
pub fn scalar_mul(v: &Vector, s: f64) -> Vector {
    map(v, |x| x * s)
}

/// Divide every element of `v` by `s`.
///
/// Division by zero is not an error: it yields `±inf` or `NaN` as IEEE 754
/// dictates.
pub fn scalar_div(v: &Vector, s: f64) -> Vector {
    map(v, |x| x / s)
}

/// Sum of the pairwise products of `a` and `b`. Two empty vectors give `0.0`.
pub fn dot_product(a: &Vector, b: &Vector) -> Result<f64> {
    check_same_len("dot_product", a, b)?;
    Ok(a.data
        .iter()
        .zip(&b.data)
        .fold(0.0, |acc, (x, y)| acc + x * y))
}

/// Cross product of two 3-vectors.
pub fn cross_product(a: &Vector, b: &Vector) -> Result<Vector> {
    if a.len() != 3 || b.len() != 3 {
        debug!(
            "cross_product: expected two 3-vectors, got lengths {} and {}",
            a.len(),
            b.len()
        );
        return Err(VectorError::DimensionError {
            expected: 3,
            left: a.len(),
            right: b.len(),
        });
    }
    let (a, b) = (&a.data, &b.data);
    Ok(Vector::new(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]))
}

/// Element-wise product.
pub fn mul(a: &Vector, b: &Vector) -> Result<Vector> {
    zip_with("mul", a, b, |x, y| x * y)
}

/// Element-wise sum.
pub fn add(a: &Vector, b: &Vector) -> Result<Vector> {
    zip_with("add", a, b, |x, y| x + y)
}

/// Element-wise difference `a - b`.
pub fn sub(a: &Vector, b: &Vector) -> Result<Vector> {
    zip_with("sub", a, b, |x, y| x - y)
}

/// Additive inverse of every element.
pub fn negate(v: &Vector) -> Vector {
    map(v, |x| -x)
}

/// Euclidean norm of `v`.
pub fn norm(v: &Vector) -> f64 {
    v.data.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// `true` iff `a` and `b` have the same length and every pair of elements
/// compares equal with `==`.
///
/// Comparison is exact: `NaN` is never equal to anything and `0.0 == -0.0`.
pub fn equals(a: &Vector, b: &Vector) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (x, y) in a.data.iter().zip(&b.data) {
        if x != y {
            return false;
        }
    }
    true
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Vector {
        Vector::new(data)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(arr: [f64; N]) -> Vector {
        Vector::new(arr.to_vec())
    }
}

impl From<&[f64]> for Vector {
    fn from(s: &[f64]) -> Vector {
        Vector::new(s.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Vec<f64> {
        v.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

// Only the infallible operations get operator sugar.

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        negate(&self)
    }
}

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        negate(self)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        scalar_mul(&self, rhs)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        scalar_mul(self, rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        scalar_div(&self, rhs)
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        scalar_div(self, rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

/// A tiny wrapper for printing a `Vector` rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "[")?;
        for (i, x) in v.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:.dec$}", x = x, dec = dec)?;
        }
        write!(f, "]")
    }
}

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline]
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}
