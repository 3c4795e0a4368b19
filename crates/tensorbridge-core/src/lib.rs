//! Core types for tensorbridge.
//!
//! ## Key Types
//!
//! - [`HostValue`]: a value as the host passes it (string, double array, callable)
//! - [`Registry`] / [`Handle`]: append-only arena of native objects
//! - [`CallContext`]: argument and output access for one call
//! - [`BridgeError`]: every way a call can fail
//! - [`Host`]: services the host provides back to the bridge

mod call_context;
pub mod convert;
mod error;
mod host;
mod registry;
mod value;

pub use call_context::CallContext;
pub use convert::{FromHost, IntoHost, MatrixOutputs};
pub use error::{BridgeError, BridgeResult, ConversionError, ErrorKind};
pub use host::Host;
pub use registry::{Handle, Registry};
pub use value::{FunctionHandle, HostArray, HostValue};
