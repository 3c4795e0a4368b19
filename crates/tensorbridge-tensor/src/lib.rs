//! Native objects exposed through tensorbridge.
//!
//! - **ops** - [`TensorOps`], the contract the bridge needs from a tensor type
//! - **dense** - [`DenseTensor`], a 2-D tensor backed by `ndarray`
//! - **symbol** - [`Symbol`], named symbolic variables handed to host callbacks
//!
//! The bridge is generic over [`TensorOps`]; `DenseTensor` is the
//! implementation used by default.

pub mod dense;
pub mod error;
pub mod ops;
pub mod symbol;

pub use dense::DenseTensor;
pub use error::TensorError;
pub use ops::TensorOps;
pub use symbol::Symbol;
