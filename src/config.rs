/// Per-session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Class tag selecting tensor methods.
    pub tensor_tag: String,
    /// Class tag selecting callback forwarding.
    pub callback_tag: String,
    /// Prefix of the message identifiers reported to the host.
    pub error_prefix: String,
    /// Name given to the symbolic variable passed to callbacks.
    pub symbol_name: String,
    /// `(rows, cols)` of that variable.
    pub symbol_shape: (usize, usize),
    /// Echo every dispatched call to the host console.
    pub echo_calls: bool,
}

impl BridgeConfig {
    pub fn with_tensor_tag(mut self, tag: impl Into<String>) -> Self {
        self.tensor_tag = tag.into();
        self
    }

    pub fn with_callback_tag(mut self, tag: impl Into<String>) -> Self {
        self.callback_tag = tag.into();
        self
    }

    pub fn with_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    pub fn with_symbol(mut self, name: impl Into<String>, rows: usize, cols: usize) -> Self {
        self.symbol_name = name.into();
        self.symbol_shape = (rows, cols);
        self
    }

    pub fn with_echo_calls(mut self, echo: bool) -> Self {
        self.echo_calls = echo;
        self
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            tensor_tag: "T".to_string(),
            callback_tag: "F".to_string(),
            error_prefix: "tensorbridge".to_string(),
            symbol_name: "vv".to_string(),
            symbol_shape: (5, 5),
            echo_calls: false,
        }
    }
}
