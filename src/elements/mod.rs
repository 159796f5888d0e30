//! Element reference data.
//!
//! ## Key Types
//!
//! - `Element`: A symbol/name pair
//! - `ElementTable`: The validated, order-significant list of elements
//!
//! Table order defines the match sequence: element 0 must be paired first,
//! then element 1, and so on.

pub mod element;
pub mod table;

pub use element::Element;
pub use table::ElementTable;
