//! Custom actions for the Order actor.
//!
//! Orders are never edited after submission; the admin only moves them along the
//! kitchen lifecycle. See [`OrderStatus::can_advance_to`] for the allowed moves.

use crate::model::OrderStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Moves the order to the given status. Returns the status it left.
    SetStatus(OrderStatus),
}
