//! The single interception path every tracked operation goes through.

use smallvec::SmallVec;
use tracing::debug;

use lineage_core::errors::ArithmeticError;
use lineage_core::{Identity, LineageResult};

use crate::operand::{Operand, Trackable};
use crate::outcome::{Outcome, Scalar};
use crate::tracked::TrackedValue;

/// Unwrap the operands, run `op` on raw values, and track its result.
///
/// Provenance is the receiver's identity followed by the identity of every
/// tracked operand, in argument order. Plain operands contribute nothing.
/// Each output gets a fresh identity under the receiver's lineage and one
/// record per provenance entry. A raw failure is returned before anything is
/// minted or logged; a log failure discards the outputs.
pub fn intercept<T, R, F>(
    operation: &'static str,
    receiver: &TrackedValue<T>,
    operands: &[Operand<'_, T>],
    op: F,
) -> LineageResult<R::Tracked>
where
    T: Scalar,
    R: Outcome,
    F: FnOnce(T, &[T]) -> Result<R, ArithmeticError>,
{
    let mut provenance: SmallVec<[Identity; 4]> = SmallVec::new();
    provenance.push(receiver.identity());
    let mut raw: SmallVec<[T; 4]> = SmallVec::with_capacity(operands.len());
    for operand in operands {
        match operand {
            Operand::Tracked(tracked) => {
                provenance.push(Trackable::identity(*tracked));
                raw.push(tracked.raw_value().clone());
            }
            Operand::Plain(value) => raw.push(value.clone()),
        }
    }

    let result = op(receiver.value().clone(), &raw)?;
    debug!(
        operation,
        inputs = provenance.len(),
        outputs = result.arity(),
        "intercepted operation"
    );
    result.into_tracked(receiver.lineage(), &provenance)
}
