//! A single chemical element.

use serde::{Deserialize, Serialize};

/// A chemical element as shown on the two cards of its pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    /// Chemical symbol, shown on the symbol face (e.g. `"He"`).
    pub symbol: String,

    /// Full name, shown on the name face (e.g. `"Helium"`).
    pub name: String,
}

impl Element {
    /// Create an element.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.name)
    }
}
