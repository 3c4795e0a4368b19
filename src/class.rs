use std::fmt;

use crate::config::BridgeConfig;

/// Family of operations a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassTag {
    /// Tensor construction and operations
    Tensor,
    /// Forwarding a host callable back to the host
    Callback,
}

impl ClassTag {
    /// Match a tag string exactly (case-sensitive) against the configured tags.
    pub fn parse(tag: &str, config: &BridgeConfig) -> Option<Self> {
        if tag == config.tensor_tag {
            Some(ClassTag::Tensor)
        } else if tag == config.callback_tag {
            Some(ClassTag::Callback)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClassTag::Tensor => "tensor",
            ClassTag::Callback => "callback",
        }
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
