//! Point source terms injected into the host's residual assembly.

mod point_enthalpy_sink;

pub use point_enthalpy_sink::{Point, PointEnthalpySink, PointEnthalpySinkConfig};
