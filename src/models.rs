//! Public models.
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation in an
//! internal `core` submodule. The public surface is a selection of re-exports
//! from that core plus a thin [`twine_core::Model`] adapter, so the same core
//! can drive a search loop, a solver, or a one-off evaluation.

pub mod thermal;
