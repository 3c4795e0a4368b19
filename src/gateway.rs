//! Entry point for host calls.
//!
//! The host calls with inputs laid out as `(method, class_tag, args...)`.
//! The class tag is removed and the rest, still starting with the method
//! name, goes to the dispatcher for that class.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tensorbridge_core::convert::to_string;
use tensorbridge_core::{BridgeError, BridgeResult, CallContext, ErrorKind, Host, HostValue};
use tensorbridge_tensor::TensorOps;

use crate::class::ClassTag;
use crate::dispatch;
use crate::session::Session;

/// Route one host call.
///
/// Requires at least two inputs; input 1 is the class tag. `outputs` has
/// one entry per output slot the host requested.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn mex_function<T: TensorOps>(
    session: &mut Session<T>,
    host: &mut dyn Host,
    outputs: &mut [HostValue],
    inputs: &[HostValue],
) -> BridgeResult<()> {
    if inputs.len() < 2 {
        return Err(BridgeError::Arity {
            expected: 2,
            actual: inputs.len(),
        });
    }

    let tag = to_string(&inputs[1])?;
    let class = ClassTag::parse(&tag, session.config()).ok_or(BridgeError::UnknownClass { tag })?;

    let mut args = Vec::with_capacity(inputs.len() - 1);
    args.push(inputs[0].clone());
    args.extend_from_slice(&inputs[2..]);

    let mut ctx = CallContext::new(&args, outputs);
    match class {
        ClassTag::Tensor => dispatch::tensor(session, host, &mut ctx),
        ClassTag::Callback => dispatch::callback(session, host, &mut ctx),
    }
}

/// Route one host call and report any failure through [`Host::abort`].
///
/// This is what a host binding calls. Errors, including panics raised
/// inside the native library, never cross the boundary as anything other
/// than an abort message. On failure every output slot is cleared.
pub fn invoke<T: TensorOps>(
    session: &mut Session<T>,
    host: &mut dyn Host,
    outputs: &mut [HostValue],
    inputs: &[HostValue],
) -> Result<(), ErrorKind> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        mex_function(&mut *session, &mut *host, &mut *outputs, inputs)
    }))
    .unwrap_or_else(|payload| {
        let message = format!("native operation panicked: {}", panic_message(payload));
        Err(BridgeError::NativeLibrary(message.into()))
    });

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            log::warn!("call failed: {}", err);
            outputs.fill(HostValue::Empty);
            host.abort(&err.identifier(&session.config().error_prefix), &err.to_string());
            Err(err.kind())
        }
    }
}

pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
