//! The ordered-match rule.
//!
//! Two cards form a match only if they are the two faces of one element
//! *and* that element is the current target. A correct-looking pair for any
//! other element is rejected as out of order.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// How a pair of selected cards is judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Both faces of the target element.
    Match,
    /// Both faces of some element, but not the target.
    WrongOrder,
    /// Different elements, or the same face twice.
    Mismatch,
}

/// Judge two selected cards against the target element.
#[must_use]
pub fn judge(first: &Card, second: &Card, target_index: usize) -> Verdict {
    if !first.pairs_with(second) {
        Verdict::Mismatch
    } else if first.element_index != target_index {
        Verdict::WrongOrder
    } else {
        Verdict::Match
    }
}
