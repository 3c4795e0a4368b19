//! Call context bridging the host's argument lists and native operations.

use std::fmt;

use crate::convert::{FromHost, IntoHost};
use crate::error::BridgeError;
use crate::value::HostValue;

/// Inputs and output slots of one bridge call.
///
/// The host supplies an ordered list of inputs and a fixed number of output
/// slots. Operations read typed arguments through [`arg_as`](Self::arg_as)
/// and write results through [`set_output`](Self::set_output).
///
/// ```ignore
/// ctx.require_args(1)?;
/// ctx.require_outputs(1)?;
/// let value: f64 = ctx.arg_as(0)?;
/// ctx.set_output(0, value);
/// ```
pub struct CallContext<'a> {
    args: &'a [HostValue],
    outputs: &'a mut [HostValue],
}

impl<'a> CallContext<'a> {
    pub fn new(args: &'a [HostValue], outputs: &'a mut [HostValue]) -> Self {
        Self { args, outputs }
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Fail unless at least `count` arguments were passed.
    pub fn require_args(&self, count: usize) -> Result<(), BridgeError> {
        if self.args.len() < count {
            return Err(BridgeError::Arity {
                expected: count,
                actual: self.args.len(),
            });
        }
        Ok(())
    }

    /// Fail unless the host provided at least `count` output slots.
    pub fn require_outputs(&self, count: usize) -> Result<(), BridgeError> {
        if self.outputs.len() < count {
            return Err(BridgeError::OutputArity {
                expected: count,
                actual: self.outputs.len(),
            });
        }
        Ok(())
    }

    /// Get a raw argument.
    pub fn arg(&self, index: usize) -> Result<&HostValue, BridgeError> {
        self.args.get(index).ok_or(BridgeError::Arity {
            expected: index + 1,
            actual: self.args.len(),
        })
    }

    /// Get a typed argument.
    pub fn arg_as<T: FromHost>(&self, index: usize) -> Result<T, BridgeError> {
        T::from_host(self.arg(index)?)
    }

    /// Write an output slot.
    pub fn set_output(&mut self, index: usize, value: impl IntoHost) -> Result<(), BridgeError> {
        let available = self.outputs.len();
        let slot = self.outputs.get_mut(index).ok_or(BridgeError::OutputArity {
            expected: index + 1,
            actual: available,
        })?;
        *slot = value.into_host();
        Ok(())
    }
}

impl fmt::Debug for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallContext")
            .field("arg_count", &self.arg_count())
            .field("output_count", &self.output_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let args = vec![HostValue::scalar(1.0), HostValue::string("x")];
        let mut outputs = vec![HostValue::Empty; 3];

        let ctx = CallContext::new(&args, &mut outputs);
        assert_eq!(ctx.arg_count(), 2);
        assert_eq!(ctx.output_count(), 3);
    }

    #[test]
    fn require_args_reports_counts() {
        let args = vec![HostValue::scalar(1.0)];
        let mut outputs: Vec<HostValue> = vec![];

        let ctx = CallContext::new(&args, &mut outputs);
        assert!(ctx.require_args(1).is_ok());
        assert!(matches!(
            ctx.require_args(2),
            Err(BridgeError::Arity {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn require_outputs_reports_counts() {
        let args: Vec<HostValue> = vec![];
        let mut outputs = vec![HostValue::Empty];

        let ctx = CallContext::new(&args, &mut outputs);
        assert!(matches!(
            ctx.require_outputs(3),
            Err(BridgeError::OutputArity {
                expected: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn typed_arg() {
        let args = vec![HostValue::string("uplus"), HostValue::scalar(2.5)];
        let mut outputs: Vec<HostValue> = vec![];

        let ctx = CallContext::new(&args, &mut outputs);
        let name: String = ctx.arg_as(0).unwrap();
        let value: f64 = ctx.arg_as(1).unwrap();
        assert_eq!(name, "uplus");
        assert_eq!(value, 2.5);
        assert!(ctx.arg_as::<f64>(0).is_err());
        assert!(ctx.arg(2).is_err());
    }

    #[test]
    fn set_output_writes_slot() {
        let args: Vec<HostValue> = vec![];
        let mut outputs = vec![HostValue::Empty; 2];

        {
            let mut ctx = CallContext::new(&args, &mut outputs);
            ctx.set_output(1, 7.0).unwrap();
            assert!(ctx.set_output(2, 1.0).is_err());
        }

        assert!(outputs[0].is_empty());
        assert_eq!(outputs[1], HostValue::scalar(7.0));
    }
}
