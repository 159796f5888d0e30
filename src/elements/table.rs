//! Validated element table.
//!
//! The table is immutable once built. Construction rejects empty tables,
//! blank symbols or names, and duplicate symbols.
//!
//! ```
//! use element_match::elements::{Element, ElementTable};
//!
//! let table = ElementTable::new(vec![
//!     Element::new("H", "Hydrogen"),
//!     Element::new("He", "Helium"),
//! ]).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get(1).unwrap().name, "Helium");
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::element::Element;
use crate::core::ConfigError;

/// The first twenty elements, in atomic-number order: symbol, English name,
/// Chinese name.
const STANDARD: [(&str, &str, &str); 20] = [
    ("H", "Hydrogen", "氢"),
    ("He", "Helium", "氦"),
    ("Li", "Lithium", "锂"),
    ("Be", "Beryllium", "铍"),
    ("B", "Boron", "硼"),
    ("C", "Carbon", "碳"),
    ("N", "Nitrogen", "氮"),
    ("O", "Oxygen", "氧"),
    ("F", "Fluorine", "氟"),
    ("Ne", "Neon", "氖"),
    ("Na", "Sodium", "钠"),
    ("Mg", "Magnesium", "镁"),
    ("Al", "Aluminium", "铝"),
    ("Si", "Silicon", "硅"),
    ("P", "Phosphorus", "磷"),
    ("S", "Sulfur", "硫"),
    ("Cl", "Chlorine", "氯"),
    ("Ar", "Argon", "氩"),
    ("K", "Potassium", "钾"),
    ("Ca", "Calcium", "钙"),
];

/// Ordered, non-empty list of elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Element>", into = "Vec<Element>")]
pub struct ElementTable {
    elements: Vec<Element>,
}

impl ElementTable {
    /// Build a table, validating its contents.
    pub fn new(elements: Vec<Element>) -> Result<Self, ConfigError> {
        if elements.is_empty() {
            return Err(ConfigError::EmptyElementTable);
        }

        let mut symbols = FxHashSet::default();
        for (index, element) in elements.iter().enumerate() {
            if element.symbol.trim().is_empty() {
                return Err(ConfigError::BlankField { index, field: "symbol" });
            }
            if element.name.trim().is_empty() {
                return Err(ConfigError::BlankField { index, field: "name" });
            }
            if !symbols.insert(element.symbol.as_str()) {
                return Err(ConfigError::DuplicateSymbol(element.symbol.clone()));
            }
        }

        Ok(Self { elements })
    }

    /// Hydrogen through Calcium, with English names.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_standard(|&(symbol, name, _)| Element::new(symbol, name))
    }

    /// Hydrogen through Calcium, with Chinese names (氢, 氦, ...).
    #[must_use]
    pub fn standard_zh() -> Self {
        Self::from_standard(|&(symbol, _, name)| Element::new(symbol, name))
    }

    fn from_standard(entry: fn(&(&str, &str, &str)) -> Element) -> Self {
        Self {
            elements: STANDARD.iter().map(entry).collect(),
        }
    }

    /// Number of elements (N). Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the element at a match-sequence position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Iterate in match order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Borrow the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }
}

impl Default for ElementTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Element>> for ElementTable {
    type Error = ConfigError;

    fn try_from(elements: Vec<Element>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}

impl From<ElementTable> for Vec<Element> {
    fn from(table: ElementTable) -> Self {
        table.elements
    }
}
