//! Error types for the bridge.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Errors that can occur when converting between host values and native values.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Host value has the wrong declared type
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Complex data where only real data is accepted
    #[error("complex values are not supported, expected a real double array")]
    ComplexValue,

    /// Handle value that does not carry an integer
    #[error("handle value {value} is not an integer")]
    NotIntegral { value: f64 },

    /// Materialized rows of unequal length
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Failure category of a [`BridgeError`].
///
/// Every error collapses to a single message on the host side; the kind is
/// carried in the message identifier so the host can still tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Arity,
    Type,
    OutOfRange,
    UnknownClass,
    UnknownMethod,
    NativeLibrary,
    HostCall,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Arity => "arity",
            ErrorKind::Type => "type",
            ErrorKind::OutOfRange => "outOfRange",
            ErrorKind::UnknownClass => "unknownClass",
            ErrorKind::UnknownMethod => "unknownMethod",
            ErrorKind::NativeLibrary => "nativeLibrary",
            ErrorKind::HostCall => "hostCall",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a bridge call.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Too few input arguments
    #[error("not enough input arguments: expected at least {expected}, got {actual}")]
    Arity { expected: usize, actual: usize },

    /// Too few output slots provided by the host
    #[error("not enough output arguments: expected at least {expected}, got {actual}")]
    OutputArity { expected: usize, actual: usize },

    /// Array argument where exactly one element was required
    #[error("expected a scalar value, got {len} elements")]
    NotScalar { len: usize },

    /// Error converting an argument or a result
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Handle does not index a live object
    #[error("handle {handle} out of range (registry holds {len} objects)")]
    OutOfRange { handle: i64, len: usize },

    /// Class tag not recognized
    #[error("class not recognized: {tag:?}")]
    UnknownClass { tag: String },

    /// Method name not recognized for the class
    #[error("method not recognized: {class}.{method}")]
    UnknownMethod { class: &'static str, method: String },

    /// The wrapped numeric library failed
    #[error("native library error: {0}")]
    NativeLibrary(#[source] Box<dyn StdError + Send + Sync>),

    /// The host reported a non-zero status from a callback
    #[error("error in calling function handle (host status {status})")]
    HostCall { status: i32 },

    /// The host's evaluator panicked during a callback
    #[error("host call panicked: {message}")]
    HostPanic { message: String },

    /// The host call succeeded but returned no value
    #[error("function handle returned no value")]
    MissingHostResult,
}

impl BridgeError {
    /// Wrap an error raised by the native library.
    pub fn native(err: impl StdError + Send + Sync + 'static) -> Self {
        BridgeError::NativeLibrary(Box::new(err))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::Arity { .. }
            | BridgeError::OutputArity { .. }
            | BridgeError::NotScalar { .. } => ErrorKind::Arity,
            BridgeError::Conversion(_) => ErrorKind::Type,
            BridgeError::OutOfRange { .. } => ErrorKind::OutOfRange,
            BridgeError::UnknownClass { .. } => ErrorKind::UnknownClass,
            BridgeError::UnknownMethod { .. } => ErrorKind::UnknownMethod,
            BridgeError::NativeLibrary(_) => ErrorKind::NativeLibrary,
            BridgeError::HostCall { .. }
            | BridgeError::HostPanic { .. }
            | BridgeError::MissingHostResult => ErrorKind::HostCall,
        }
    }

    /// Message identifier for the host's error channel, e.g. `tensorbridge:outOfRange`.
    pub fn identifier(&self, prefix: &str) -> String {
        format!("{}:{}", prefix, self.kind())
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
