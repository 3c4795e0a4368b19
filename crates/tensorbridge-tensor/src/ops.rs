//! Operations the bridge requires from a native tensor type.

use std::error::Error;

/// Contract between the bridge and the native tensor library.
///
/// The bridge treats the implementation as a black box: it constructs
/// tensors from scalars, applies unary plus, and materializes tensors to
/// dense row-major data. Every operation returns a new value; the bridge
/// never mutates a tensor after it has been stored.
pub trait TensorOps: Sized {
    type Error: Error + Send + Sync + 'static;

    /// A zero-dimensional tensor holding `value`.
    fn from_scalar(value: f64) -> Self;

    /// Unary plus.
    fn uplus(&self) -> Result<Self, Self::Error>;

    /// Dense row-major materialization, one `Vec` per row.
    fn full(&self) -> Result<Vec<Vec<f64>>, Self::Error>;

    /// `(rows, cols)` of the materialized form.
    fn shape(&self) -> (usize, usize);
}
