//! Provenance-tracked values.
//!
//! A [`TrackedValue`] pairs a raw value with an [`Identity`]. Every
//! operation on it goes through [`intercept()`], which unwraps the operands,
//! runs the raw operation, wraps each output with a fresh identity and logs
//! one derivation record per tracked input to the value's [`Lineage`].
//!
//! ```
//! use lineage_core::Lineage;
//! use lineage_tracked::TrackedValue;
//!
//! let (lineage, log) = Lineage::in_memory();
//! let a = TrackedValue::new(2.0, lineage.clone());
//! let b = TrackedValue::new(3.0, lineage);
//! let c = (&a + &b).unwrap();
//! assert_eq!(*c.value(), 5.0);
//! assert_eq!(
//!     log.records(),
//!     vec![
//!         format!("({}, {})", a.identity(), c.identity()),
//!         format!("({}, {})", b.identity(), c.identity()),
//!     ]
//! );
//! ```
//!
//! [`Identity`]: lineage_core::Identity
//! [`Lineage`]: lineage_core::Lineage

pub mod array;
pub mod intercept;
pub mod number;
pub mod operand;
pub mod ops;
pub mod outcome;
pub mod tracked;

pub use array::{bind, rebind, sum, Coordinates, Shaped};
pub use intercept::intercept;
pub use number::Number;
pub use operand::{Operand, Trackable};
pub use outcome::{Outcome, Scalar};
pub use tracked::TrackedValue;
