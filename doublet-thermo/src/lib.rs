//! Fluid enthalpy modeling for geothermal doublet components.
//!
//! The injected-fluid property seam: a [`State`] captures the pressure and
//! temperature at a sample point, and an [`EnthalpyModel`](model::EnthalpyModel)
//! turns that state into a specific enthalpy and its partial derivatives.

mod error;
mod state;

pub mod fluid;
pub mod model;
pub mod units;

pub use error::PropertyError;
pub use state::State;
