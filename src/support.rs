//! Supporting utilities used by the heatsink models.
//!
//! - [`constraint`]: Numeric invariants checked once at construction.
//! - [`heat_transfer`]: Empirical convection and radiation correlations for air.
//! - [`units`]: Extensions to [`uom`] for quantities the models need.

pub mod constraint;
pub mod heat_transfer;
pub mod units;
