//! Supporting utilities used by models.
//!
//! - [`constraint`]: numeric invariants enforced at construction.
//! - [`units`]: oilfield composition measures and quantity aliases on top of [`uom`].

pub mod constraint;
pub mod units;
