//! Symbolic variables.

use std::fmt;

/// A named symbolic matrix variable.
///
/// Symbols carry no numeric data. They are allocated for host callbacks,
/// which receive the symbol's handle and build expressions over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    rows: usize,
    cols: usize,
}

impl Symbol {
    /// Create a `rows x cols` symbolic variable.
    pub fn sym(name: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self {
            name: name.into(),
            rows,
            cols,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of scalar entries.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}x{}]", self.name, self.rows, self.cols)
    }
}
