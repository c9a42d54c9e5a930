//! Turning raw operation results into tracked results.
//!
//! Every raw output of an intercepted operation becomes a fresh
//! [`TrackedValue`] and receives one derivation record per provenance
//! identity. Single scalars, pairs (`div_mod`, `as_integer_ratio`) and
//! sequences are supported.

use std::fmt::{Debug, Display};

use lineage_core::{Identity, Lineage, LineageResult};

use crate::tracked::TrackedValue;

/// A raw payload type that can be wrapped in a [`TrackedValue`].
pub trait Scalar:
    Outcome<Tracked = TrackedValue<Self>> + Clone + Debug + Display + Send + Sync + 'static
{
}

/// The raw result of an operation, before tracking.
pub trait Outcome: Sized {
    /// Tracked counterpart returned to the caller.
    type Tracked;

    /// Number of outputs this result fans out to.
    fn arity(&self) -> usize;

    /// Wrap every output with a fresh identity under `lineage` and record
    /// one `(source, output)` edge per provenance identity, in order.
    fn into_tracked(
        self,
        lineage: &Lineage,
        provenance: &[Identity],
    ) -> LineageResult<Self::Tracked>;
}

fn track_one<S>(
    value: S,
    lineage: &Lineage,
    provenance: &[Identity],
) -> LineageResult<TrackedValue<S>> {
    let output = TrackedValue::new(value, lineage.clone());
    for source in provenance {
        output.record_derivation(*source, None)?;
    }
    Ok(output)
}

macro_rules! scalar {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {}

        impl Outcome for $t {
            type Tracked = TrackedValue<$t>;

            fn arity(&self) -> usize {
                1
            }

            fn into_tracked(
                self,
                lineage: &Lineage,
                provenance: &[Identity],
            ) -> LineageResult<Self::Tracked> {
                track_one(self, lineage, provenance)
            }
        }
    )*};
}

scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl<A: Scalar, B: Scalar> Outcome for (A, B) {
    type Tracked = (TrackedValue<A>, TrackedValue<B>);

    fn arity(&self) -> usize {
        2
    }

    fn into_tracked(
        self,
        lineage: &Lineage,
        provenance: &[Identity],
    ) -> LineageResult<Self::Tracked> {
        let first = track_one(self.0, lineage, provenance)?;
        let second = track_one(self.1, lineage, provenance)?;
        Ok((first, second))
    }
}

impl<S: Scalar> Outcome for Vec<S> {
    type Tracked = Vec<TrackedValue<S>>;

    fn arity(&self) -> usize {
        self.len()
    }

    fn into_tracked(
        self,
        lineage: &Lineage,
        provenance: &[Identity],
    ) -> LineageResult<Self::Tracked> {
        self.into_iter()
            .map(|value| track_one(value, lineage, provenance))
            .collect()
    }
}
