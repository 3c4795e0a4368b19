//! Conversions between host values and native values.
//!
//! Two layers:
//! - [`FromHost`] / [`IntoHost`]: typed slot conversion used by
//!   [`CallContext`](crate::CallContext)
//! - free functions implementing the bridge's named conversions
//!   (`to_string`, `to_numeric_vector`, `to_scalar`, `from_handle`,
//!   `from_matrix`)
//!
//! No conversion coerces. Complex input is rejected rather than truncated to
//! its real part, and a handle must carry an exact integer.

use crate::error::{BridgeError, ConversionError};
use crate::registry::Handle;
use crate::value::{FunctionHandle, HostArray, HostValue};

/// Extract a native value from a host value.
pub trait FromHost: Sized {
    fn from_host(value: &HostValue) -> Result<Self, BridgeError>;
}

/// Convert a native value into a host value.
pub trait IntoHost {
    fn into_host(self) -> HostValue;
}

impl FromHost for String {
    fn from_host(value: &HostValue) -> Result<Self, BridgeError> {
        to_string(value)
    }
}

impl FromHost for Vec<f64> {
    fn from_host(value: &HostValue) -> Result<Self, BridgeError> {
        to_numeric_vector(value)
    }
}

impl FromHost for f64 {
    fn from_host(value: &HostValue) -> Result<Self, BridgeError> {
        to_scalar(value)
    }
}

impl FromHost for FunctionHandle {
    fn from_host(value: &HostValue) -> Result<Self, BridgeError> {
        match value {
            HostValue::Callable(handle) => Ok(handle.clone()),
            other => Err(ConversionError::TypeMismatch {
                expected: "function_handle",
                actual: other.type_name(),
            }
            .into()),
        }
    }
}

impl IntoHost for f64 {
    fn into_host(self) -> HostValue {
        HostValue::scalar(self)
    }
}

impl IntoHost for String {
    fn into_host(self) -> HostValue {
        HostValue::Char(self)
    }
}

impl IntoHost for HostArray {
    fn into_host(self) -> HostValue {
        HostValue::Numeric(self)
    }
}

impl IntoHost for HostValue {
    fn into_host(self) -> HostValue {
        self
    }
}

impl<T> IntoHost for Handle<T> {
    fn into_host(self) -> HostValue {
        from_handle(self)
    }
}

/// Read a host string.
pub fn to_string(value: &HostValue) -> Result<String, BridgeError> {
    match value {
        HostValue::Char(s) => Ok(s.clone()),
        other => Err(ConversionError::TypeMismatch {
            expected: "char",
            actual: other.type_name(),
        }
        .into()),
    }
}

/// Read a real double array as a flat vector, preserving element order.
pub fn to_numeric_vector(value: &HostValue) -> Result<Vec<f64>, BridgeError> {
    let array = real_array(value)?;
    Ok(array.real().to_vec())
}

/// Read a single real double.
pub fn to_scalar(value: &HostValue) -> Result<f64, BridgeError> {
    let array = real_array(value)?;
    if !array.is_scalar() {
        return Err(BridgeError::NotScalar { len: array.numel() });
    }
    Ok(array.real()[0])
}

/// Read a handle argument as a signed index.
///
/// The value must be a real scalar holding an exact integer. Range checking
/// (including negative values) is left to the registry that resolves it.
pub fn to_handle_index(value: &HostValue) -> Result<i64, BridgeError> {
    let raw = to_scalar(value)?;
    if !raw.is_finite() || raw.fract() != 0.0 || raw.abs() > i64::MAX as f64 {
        return Err(ConversionError::NotIntegral { value: raw }.into());
    }
    Ok(raw as i64)
}

/// Encode a handle for the host.
pub fn from_handle<T>(handle: Handle<T>) -> HostValue {
    HostValue::scalar(handle.to_host())
}

/// Host encoding of a materialized matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixOutputs {
    pub rows: HostValue,
    pub cols: HostValue,
    pub data: HostValue,
}

/// Encode row-major matrix data for the host.
///
/// The host receives the row count and column count as separate scalars,
/// plus a `rows x cols` array in its own column-major order. All rows must
/// have the same length. An empty row list encodes as a `0x0` array.
pub fn from_matrix(rows: &[Vec<f64>]) -> Result<MatrixOutputs, BridgeError> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);

    for (row, values) in rows.iter().enumerate() {
        if values.len() != n_cols {
            return Err(ConversionError::RaggedMatrix {
                row,
                expected: n_cols,
                actual: values.len(),
            }
            .into());
        }
    }

    let mut data = Vec::with_capacity(n_rows * n_cols);
    for col in 0..n_cols {
        data.extend(rows.iter().map(|values| values[col]));
    }

    let array = HostArray::column_major(n_rows, n_cols, data);

    Ok(MatrixOutputs {
        rows: HostValue::scalar(n_rows as f64),
        cols: HostValue::scalar(n_cols as f64),
        data: HostValue::Numeric(array),
    })
}

fn real_array(value: &HostValue) -> Result<&HostArray, BridgeError> {
    match value {
        HostValue::Numeric(array) if array.is_complex() => {
            Err(ConversionError::ComplexValue.into())
        }
        HostValue::Numeric(array) => Ok(array),
        other => Err(ConversionError::TypeMismatch {
            expected: "double",
            actual: other.type_name(),
        }
        .into()),
    }
}
