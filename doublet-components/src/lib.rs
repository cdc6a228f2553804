//! Source and diagnostic components for geothermal doublet simulations.
//!
//! Two cooperating kinds of objects, both driven once per discrete step by an
//! external time-stepping driver:
//!
//! - [`source`] — a point enthalpy sink whose magnitude is scaled by the
//!   fraction of each time step that overlaps a configured pulse window. The
//!   host's assembly loop queries its residual and Jacobian contributions
//!   once per quadrature point.
//! - [`diagnostics`] — stateful scalar diagnostics (breakthrough-time latch,
//!   cumulative energy balance, steady-state detector), each updated once per
//!   step from upstream scalar readings and exposing a single read-only value.
//!
//! Nothing here implements a solver, mesh, or stepping loop; those belong to
//! the host framework. All coupling is through values the driver passes in.

pub mod diagnostics;
pub mod source;
