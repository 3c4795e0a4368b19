//! Call bridge between a host runtime and a native tensor library.
//!
//! The host can only pass strings, double arrays and callable references.
//! This crate turns such calls into operations on native tensors kept in a
//! per-session registry, and hands back integer handles or converted data.
//!
//! ```ignore
//! use tensorbridge::{gateway, HostValue, Session};
//!
//! let mut session: Session = Session::new();
//! let mut out = vec![HostValue::Empty];
//! gateway::mex_function(
//!     &mut session,
//!     &mut host,
//!     &mut out,
//!     &[HostValue::string("construct"), HostValue::string("T"), HostValue::scalar(3.5)],
//! )?;
//! assert_eq!(out[0], HostValue::scalar(0.0));
//! ```
//!
//! ## Modules
//!
//! - **gateway** - the entry point and error reporting to the host
//! - **dispatch** - per-class method execution
//! - **method** - the tensor method table
//! - **session** - registries and configuration for one host session

mod class;
mod config;
pub mod dispatch;
pub mod gateway;
pub mod method;
mod session;

pub use class::ClassTag;
pub use config::BridgeConfig;
pub use session::Session;

pub use tensorbridge_core::{
    BridgeError, BridgeResult, CallContext, ConversionError, ErrorKind, FunctionHandle, Handle,
    Host, HostArray, HostValue, MatrixOutputs, Registry,
};
pub use tensorbridge_tensor::{DenseTensor, Symbol, TensorError, TensorOps};
