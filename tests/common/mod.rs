//! Shared host double for integration tests.

#![allow(dead_code)]

use tensorbridge::{
    BridgeResult, ErrorKind, FunctionHandle, Host, HostArray, HostValue, Session, TensorOps,
    gateway,
};

/// Host that records everything the bridge asks of it.
///
/// `feval` answers from a closure so tests can script the callback result
/// or a failing status.
pub struct RecordingHost {
    pub feval_calls: Vec<(Vec<HostValue>, usize)>,
    pub printed: Vec<String>,
    pub aborts: Vec<(String, String)>,
    responder: Box<dyn FnMut(&[HostValue]) -> Result<Vec<HostValue>, i32>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::with_responder(|_| Ok(vec![HostValue::scalar(0.0)]))
    }

    pub fn with_responder(
        responder: impl FnMut(&[HostValue]) -> Result<Vec<HostValue>, i32> + 'static,
    ) -> Self {
        Self {
            feval_calls: Vec::new(),
            printed: Vec::new(),
            aborts: Vec::new(),
            responder: Box::new(responder),
        }
    }
}

impl Host for RecordingHost {
    fn feval(&mut self, args: &[HostValue], nargout: usize) -> Result<Vec<HostValue>, i32> {
        self.feval_calls.push((args.to_vec(), nargout));
        (self.responder)(args)
    }

    fn print(&mut self, message: &str) {
        self.printed.push(message.to_string());
    }

    fn abort(&mut self, identifier: &str, message: &str) {
        self.aborts.push((identifier.to_string(), message.to_string()));
    }
}

/// Inputs for a tensor class call: `(method, "T", args...)`.
pub fn tensor_call(method: &str, args: &[HostValue]) -> Vec<HostValue> {
    let mut inputs = vec![HostValue::string(method), HostValue::string("T")];
    inputs.extend_from_slice(args);
    inputs
}

pub fn construct<T: TensorOps>(
    session: &mut Session<T>,
    host: &mut RecordingHost,
    value: f64,
) -> BridgeResult<f64> {
    let mut out = vec![HostValue::Empty];
    gateway::mex_function(
        session,
        host,
        &mut out,
        &tensor_call("construct", &[HostValue::scalar(value)]),
    )?;
    Ok(scalar(&out[0]))
}

pub fn uplus<T: TensorOps>(
    session: &mut Session<T>,
    host: &mut RecordingHost,
    handle: f64,
) -> BridgeResult<f64> {
    let mut out = vec![HostValue::Empty];
    gateway::mex_function(
        session,
        host,
        &mut out,
        &tensor_call("uplus", &[HostValue::scalar(handle)]),
    )?;
    Ok(scalar(&out[0]))
}

/// `full` returning `(rows, cols, data)` with data in host column-major order.
pub fn full<T: TensorOps>(
    session: &mut Session<T>,
    host: &mut RecordingHost,
    handle: f64,
) -> BridgeResult<(f64, f64, Vec<f64>)> {
    let mut out = vec![HostValue::Empty; 3];
    gateway::mex_function(
        session,
        host,
        &mut out,
        &tensor_call("full", &[HostValue::scalar(handle)]),
    )?;
    Ok((scalar(&out[0]), scalar(&out[1]), array(&out[2]).real().to_vec()))
}

pub fn scalar(value: &HostValue) -> f64 {
    let values = array(value).real();
    assert_eq!(values.len(), 1, "expected a scalar, got {:?}", value);
    values[0]
}

pub fn array(value: &HostValue) -> &HostArray {
    match value {
        HostValue::Numeric(array) => array,
        other => panic!("expected numeric output, got {:?}", other),
    }
}

pub fn callable(name: &str) -> HostValue {
    HostValue::Callable(FunctionHandle::new(name))
}

pub fn kind_of<T>(result: BridgeResult<T>) -> ErrorKind {
    match result {
        Ok(_) => panic!("expected the call to fail"),
        Err(err) => err.kind(),
    }
}
