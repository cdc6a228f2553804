//! Fluid property models.
//!
//! An [`EnthalpyModel`] computes the specific enthalpy of a fluid (and its
//! partial derivatives) from a [`State`](crate::State). The
//! [`Incompressible`] model covers liquids whose density and specific heat
//! are effectively constant over the conditions of interest, which is the
//! usual assumption for injected water in doublet modeling.

mod incompressible;
mod traits;

pub use incompressible::{Incompressible, IncompressibleFluid};
pub use traits::{EnthalpyGradients, EnthalpyModel};
