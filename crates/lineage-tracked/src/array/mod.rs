//! Shaped collections of tracked values and array-origin provenance.

mod binder;
mod reduce;
mod shaped;

pub use binder::{bind, rebind};
pub use reduce::sum;
pub use shaped::{Coordinates, Shaped};
