//! Per-class method execution.
//!
//! Every call runs in the same order: method lookup, argument and output
//! counts, argument conversion and handle resolution, the native operation,
//! and only then the registry insert and the output writes. A call that
//! fails at any step leaves the registries and the output slots untouched.

use std::panic::{self, AssertUnwindSafe};

use tensorbridge_core::convert::{from_matrix, to_handle_index, to_scalar};
use tensorbridge_core::{
    BridgeError, BridgeResult, CallContext, ConversionError, FunctionHandle, Handle, Host,
    HostValue, MatrixOutputs, Registry,
};
use tensorbridge_tensor::{Symbol, TensorOps};

use crate::class::ClassTag;
use crate::gateway;
use crate::method::{MethodDescriptor, ParamKind, TensorOp};
use crate::session::Session;

/// A converted argument.
#[derive(Debug)]
enum Operand<T> {
    Scalar(f64),
    Tensor(Handle<T>),
}

impl<T> Operand<T> {
    fn kind_name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Tensor(_) => "handle",
        }
    }
}

/// What a native operation produced, before it is committed.
enum OpOutput<T> {
    Tensor(T),
    Matrix(MatrixOutputs),
}

/// Run a tensor class call.
///
/// `ctx` holds the method name at argument 0 followed by its arguments.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn tensor<T: TensorOps>(
    session: &mut Session<T>,
    host: &mut dyn Host,
    ctx: &mut CallContext<'_>,
) -> BridgeResult<()> {
    ctx.require_args(1)?;
    let method: String = ctx.arg_as(0)?;
    let descriptor = *session
        .methods()
        .lookup(&method)
        .ok_or_else(|| BridgeError::UnknownMethod {
            class: ClassTag::Tensor.name(),
            method: method.clone(),
        })?;

    ctx.require_args(descriptor.min_args())?;
    ctx.require_outputs(descriptor.min_outputs)?;

    log::debug!("dispatch tensor.{}", descriptor.name);
    if session.config().echo_calls {
        host.print(&format!("tensor.{}", descriptor.name));
    }

    let operands = convert_operands(&descriptor, ctx, &session.tensors)?;
    let output = execute(descriptor.op, &operands, &session.tensors)?;

    match output {
        OpOutput::Tensor(tensor) => {
            let handle = session.tensors.insert(tensor);
            log::debug!("tensor.{} allocated handle {}", descriptor.name, handle.index());
            ctx.set_output(0, handle)?;
        }
        OpOutput::Matrix(matrix) => {
            ctx.set_output(0, matrix.rows)?;
            ctx.set_output(1, matrix.cols)?;
            ctx.set_output(2, matrix.data)?;
        }
    }
    Ok(())
}

fn convert_operands<T>(
    descriptor: &MethodDescriptor,
    ctx: &CallContext<'_>,
    tensors: &Registry<T>,
) -> BridgeResult<Vec<Operand<T>>> {
    descriptor
        .params
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let value = ctx.arg(i + 1)?;
            match kind {
                ParamKind::Scalar => Ok(Operand::Scalar(to_scalar(value)?)),
                ParamKind::Handle => {
                    let index = to_handle_index(value)?;
                    Ok(Operand::Tensor(tensors.resolve(index)?))
                }
            }
        })
        .collect()
}

fn execute<T: TensorOps>(
    op: TensorOp,
    operands: &[Operand<T>],
    tensors: &Registry<T>,
) -> BridgeResult<OpOutput<T>> {
    match op {
        TensorOp::Construct => {
            let value = scalar_operand(operands, 0)?;
            Ok(OpOutput::Tensor(T::from_scalar(value)))
        }
        TensorOp::UPlus => {
            let tensor = tensors.get(tensor_operand(operands, 0)?)?;
            let result = tensor.uplus().map_err(BridgeError::native)?;
            Ok(OpOutput::Tensor(result))
        }
        TensorOp::Full => {
            let tensor = tensors.get(tensor_operand(operands, 0)?)?;
            let rows = tensor.full().map_err(BridgeError::native)?;
            Ok(OpOutput::Matrix(from_matrix(&rows)?))
        }
    }
}

fn operand<T>(operands: &[Operand<T>], index: usize) -> BridgeResult<&Operand<T>> {
    operands.get(index).ok_or(BridgeError::Arity {
        expected: index + 2,
        actual: operands.len() + 1,
    })
}

fn scalar_operand<T>(operands: &[Operand<T>], index: usize) -> BridgeResult<f64> {
    match operand(operands, index)? {
        Operand::Scalar(value) => Ok(*value),
        other => Err(ConversionError::TypeMismatch {
            expected: "scalar",
            actual: other.kind_name(),
        }
        .into()),
    }
}

fn tensor_operand<T>(operands: &[Operand<T>], index: usize) -> BridgeResult<Handle<T>> {
    match operand(operands, index)? {
        Operand::Tensor(handle) => Ok(*handle),
        other => Err(ConversionError::TypeMismatch {
            expected: "handle",
            actual: other.kind_name(),
        }
        .into()),
    }
}

/// Forward a host callable back to the host with a fresh symbolic variable.
///
/// `ctx` holds the callable at argument 0. The callable is duplicated for
/// the duration of the host call and released afterwards. The symbol is
/// committed to the session only once the host call has succeeded, and its
/// handle is the one the callable received. The host's single result is
/// written to output slot 0.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn callback<T: TensorOps>(
    session: &mut Session<T>,
    host: &mut dyn Host,
    ctx: &mut CallContext<'_>,
) -> BridgeResult<()> {
    ctx.require_args(1)?;
    ctx.require_outputs(1)?;
    let callable: FunctionHandle = ctx.arg_as(0)?;

    let config = session.config();
    let (rows, cols) = config.symbol_shape;
    let symbol = Symbol::sym(config.symbol_name.clone(), rows, cols);
    let symbol_index = session.symbols.len();

    log::debug!("forward {} to host with symbol {}", callable.name(), symbol);
    if config.echo_calls {
        host.print(&format!("callback {}", callable.name()));
    }

    // The duplicate lives only for the host call; dropping `inputs` releases it.
    let inputs = [
        HostValue::Callable(callable.clone()),
        HostValue::scalar(symbol_index as f64),
    ];
    let mut results = panic::catch_unwind(AssertUnwindSafe(|| host.feval(&inputs, 1)))
        .map_err(|payload| BridgeError::HostPanic {
            message: gateway::panic_message(payload),
        })?
        .map_err(|status| BridgeError::HostCall { status })?;
    drop(inputs);

    if results.is_empty() {
        return Err(BridgeError::MissingHostResult);
    }
    let result = results.swap_remove(0);

    let handle: Handle<Symbol> = session.symbols.insert(symbol);
    debug_assert_eq!(handle.index(), symbol_index);
    ctx.set_output(0, result)?;
    Ok(())
}
