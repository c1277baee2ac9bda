//! Thermal models.
//!
//! - [`heatsink`]: Finned heatsinks cooling mounted electronic components.

pub mod heatsink;
