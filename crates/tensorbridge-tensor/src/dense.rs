//! Dense 2-D tensor backed by `ndarray`.

use ndarray::Array2;

use crate::error::TensorError;
use crate::ops::TensorOps;

/// Dense real tensor of rank at most two.
///
/// Scalars are stored as `1x1`, which is also how they materialize.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseTensor {
    data: Array2<f64>,
}

impl DenseTensor {
    /// Build from row-major rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, TensorError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut flat = Vec::with_capacity(rows.len() * n_cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n_cols {
                return Err(TensorError::RaggedRows {
                    row,
                    expected: n_cols,
                    actual: values.len(),
                });
            }
            flat.extend_from_slice(values);
        }
        Self::from_shape_vec(rows.len(), n_cols, flat)
    }

    /// Build from row-major data with an explicit shape.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, TensorError> {
        let len = data.len();
        let data = Array2::from_shape_vec((rows, cols), data)
            .map_err(|_| TensorError::ShapeMismatch { rows, cols, len })?;
        Ok(Self { data })
    }

    pub fn is_scalar(&self) -> bool {
        self.data.len() == 1
    }
}

impl TensorOps for DenseTensor {
    type Error = TensorError;

    fn from_scalar(value: f64) -> Self {
        Self {
            data: Array2::from_elem((1, 1), value),
        }
    }

    fn uplus(&self) -> Result<Self, TensorError> {
        Ok(self.clone())
    }

    fn full(&self) -> Result<Vec<Vec<f64>>, TensorError> {
        Ok(self.data.rows().into_iter().map(|row| row.to_vec()).collect())
    }

    fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }
}
