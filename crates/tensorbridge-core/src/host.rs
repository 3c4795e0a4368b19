//! Capabilities the host runtime provides to the bridge.

use crate::value::HostValue;

/// Services the host exposes to native code.
///
/// The bridge never calls host APIs directly; the gateway receives an
/// implementation of this trait with every call. Tests substitute a
/// recording implementation.
pub trait Host {
    /// Call back into the host's own function evaluator.
    ///
    /// `args[0]` is the callable, the rest are its arguments. On success the
    /// host returns `nargout` values. A non-zero host status is returned as
    /// `Err(status)`. Blocks until the host call returns.
    fn feval(&mut self, args: &[HostValue], nargout: usize) -> Result<Vec<HostValue>, i32>;

    /// Write a line to the host console.
    fn print(&mut self, message: &str);

    /// Abort the current call with an identifier and a message.
    fn abort(&mut self, identifier: &str, message: &str);
}
