use tensorbridge_core::{BridgeResult, Handle, Registry};
use tensorbridge_tensor::{DenseTensor, Symbol, TensorOps};

use crate::config::BridgeConfig;
use crate::method::MethodTable;

/// State of one host session.
///
/// Holds the tensor registry, the separate registry of symbols handed to
/// host callbacks, the method table and the configuration. Every dispatch
/// takes the session explicitly, so independent sessions never share
/// handles.
#[derive(Debug)]
pub struct Session<T = DenseTensor> {
    pub(crate) tensors: Registry<T>,
    pub(crate) symbols: Registry<Symbol>,
    methods: MethodTable,
    config: BridgeConfig,
}

impl<T: TensorOps> Session<T> {
    /// Create an empty session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default())
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        Self {
            tensors: Registry::new(),
            symbols: Registry::new(),
            methods: MethodTable::tensor(),
            config,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    pub fn symbols(&self) -> &Registry<Symbol> {
        &self.symbols
    }

    pub fn tensor_count(&self) -> usize {
        self.tensors.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Store a tensor built on the native side and return its handle.
    pub fn insert_tensor(&mut self, tensor: T) -> Handle<T> {
        self.tensors.insert(tensor)
    }

    /// Look up a tensor by raw host index.
    pub fn tensor(&self, index: i64) -> BridgeResult<&T> {
        let handle: Handle<T> = self.tensors.resolve(index)?;
        self.tensors.get(handle)
    }
}

impl<T: TensorOps> Default for Session<T> {
    fn default() -> Self {
        Self::new()
    }
}
