//! Fluids usable with the property models in [`model`](crate::model).

mod water;

pub use water::Water;
