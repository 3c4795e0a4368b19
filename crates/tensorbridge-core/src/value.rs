//! Host-side value representation.

use std::fmt;

/// A value as the host runtime hands it across the bridge.
///
/// The host never shares pointers with us. Everything it passes is one of
/// these variants, and everything we return must be one of them too.
#[derive(Clone, PartialEq, Default)]
pub enum HostValue {
    /// Unassigned output slot
    #[default]
    Empty,
    /// Character array (host string)
    Char(String),
    /// Double-precision array, real or complex
    Numeric(HostArray),
    /// Reference to a host callable
    Callable(FunctionHandle),
}

impl HostValue {
    /// Get a human-readable name for this value's host type.
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Empty => "empty",
            HostValue::Char(_) => "char",
            HostValue::Numeric(array) if array.is_complex() => "complex double",
            HostValue::Numeric(_) => "double",
            HostValue::Callable(_) => "function_handle",
        }
    }

    /// Real double scalar.
    pub fn scalar(value: f64) -> Self {
        HostValue::Numeric(HostArray::scalar(value))
    }

    /// Host string.
    pub fn string(value: impl Into<String>) -> Self {
        HostValue::Char(value.into())
    }

    /// Check if this slot was never written.
    pub fn is_empty(&self) -> bool {
        matches!(self, HostValue::Empty)
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Empty => write!(f, "Empty"),
            HostValue::Char(s) => write!(f, "Char({:?})", s),
            HostValue::Numeric(a) => write!(f, "Numeric({:?})", a),
            HostValue::Callable(h) => write!(f, "Callable({})", h.name()),
        }
    }
}

/// Dense double array in the host's column-major layout.
///
/// Dimensions always carry at least two entries, so a scalar is `1x1` and a
/// row vector of length `n` is `1xn`.
#[derive(Debug, Clone, PartialEq)]
pub struct HostArray {
    dims: Vec<usize>,
    real: Vec<f64>,
    imag: Option<Vec<f64>>,
}

impl HostArray {
    /// A `1x1` real array.
    pub fn scalar(value: f64) -> Self {
        Self {
            dims: vec![1, 1],
            real: vec![value],
            imag: None,
        }
    }

    /// A `1xn` real row vector.
    pub fn row(values: Vec<f64>) -> Self {
        Self {
            dims: vec![1, values.len()],
            real: values,
            imag: None,
        }
    }

    /// A `rows x cols` real matrix from column-major data.
    ///
    /// Returns `None` if `data` does not hold exactly `rows * cols` elements.
    pub fn matrix(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if rows.checked_mul(cols)? != data.len() {
            return None;
        }
        Some(Self::column_major(rows, cols, data))
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn column_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(rows * cols, data.len());
        Self {
            dims: vec![rows, cols],
            real: data,
            imag: None,
        }
    }

    /// A `1xn` complex row vector.
    ///
    /// Returns `None` if the two parts differ in length.
    pub fn complex(real: Vec<f64>, imag: Vec<f64>) -> Option<Self> {
        if real.len() != imag.len() {
            return None;
        }
        Some(Self {
            dims: vec![1, real.len()],
            real,
            imag: Some(imag),
        })
    }

    /// Number of elements.
    pub fn numel(&self) -> usize {
        self.real.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims[0]
    }

    pub fn cols(&self) -> usize {
        self.dims[1..].iter().product()
    }

    pub fn is_complex(&self) -> bool {
        self.imag.is_some()
    }

    pub fn is_scalar(&self) -> bool {
        self.numel() == 1
    }

    /// Real part in column-major order.
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Imaginary part, if any.
    pub fn imag(&self) -> Option<&[f64]> {
        self.imag.as_deref()
    }
}

/// Opaque reference to a callable owned by the host.
///
/// Cloning a handle is how the bridge duplicates it for the duration of a
/// callback; dropping the clone releases it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionHandle {
    name: String,
}

impl FunctionHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
