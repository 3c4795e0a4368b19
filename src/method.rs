//! Tensor method table.
//!
//! Each method is described by data: its name, the kind of each argument,
//! the number of output slots it fills, and the native operation it runs.
//! Adding a method means adding a [`MethodDescriptor`] to
//! [`TENSOR_METHODS`] and an arm to the executor in
//! [`dispatch`](crate::dispatch).

use rustc_hash::FxHashMap;

/// How an argument is converted before the operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Real double scalar
    Scalar,
    /// Tensor handle, range checked against the session registry
    Handle,
}

/// Native operation behind a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TensorOp {
    /// New scalar tensor
    Construct,
    /// Unary plus of an existing tensor
    UPlus,
    /// Dense materialization of an existing tensor
    Full,
}

/// Static description of one method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: &'static str,
    /// Arguments following the method name
    pub params: &'static [ParamKind],
    /// Output slots the host must provide
    pub min_outputs: usize,
    pub op: TensorOp,
}

impl MethodDescriptor {
    /// Arguments required including the method name itself.
    pub fn min_args(&self) -> usize {
        1 + self.params.len()
    }
}

/// Methods of the tensor class.
pub const TENSOR_METHODS: &[MethodDescriptor] = &[
    MethodDescriptor {
        name: "construct",
        params: &[ParamKind::Scalar],
        min_outputs: 1,
        op: TensorOp::Construct,
    },
    MethodDescriptor {
        name: "uplus",
        params: &[ParamKind::Handle],
        min_outputs: 1,
        op: TensorOp::UPlus,
    },
    MethodDescriptor {
        name: "full",
        params: &[ParamKind::Handle],
        min_outputs: 3,
        op: TensorOp::Full,
    },
];

/// Name-keyed lookup over a descriptor list.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct MethodTable {
    by_name: FxHashMap<&'static str, MethodDescriptor>,
}

impl MethodTable {
    pub fn from_descriptors(descriptors: &[MethodDescriptor]) -> Self {
        let by_name = descriptors.iter().map(|d| (d.name, *d)).collect();
        Self { by_name }
    }

    /// The tensor class table.
    pub fn tensor() -> Self {
        Self::from_descriptors(TENSOR_METHODS)
    }

    pub fn lookup(&self, name: &str) -> Option<&MethodDescriptor> {
        self.by_name.get(name)
    }

    /// Method names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::tensor()
    }
}
