//! Array-origin provenance for shaped collections.
//!
//! Binding gives a whole collection a container identity and records, for
//! every element, that it originated at `(container, shape, coordinate)`.

use tracing::debug;

use lineage_core::errors::LogError;
use lineage_core::{Identity, Lineage, LineageResult, RecordSource};

use super::shaped::Shaped;
use crate::outcome::Scalar;
use crate::tracked::TrackedValue;

/// Wrap every element of a plain collection with a fresh identity and record
/// its array origin.
///
/// `container` defaults to a freshly minted identity. Returns the tracked
/// collection and the container identity. Elements are visited row-major, so
/// records appear in row-major order.
pub fn bind<T: Scalar>(
    lineage: &Lineage,
    array: &Shaped<T>,
    container: Option<Identity>,
) -> LineageResult<(Shaped<TrackedValue<T>>, Identity)> {
    let container = container.unwrap_or_else(|| lineage.mint());
    let shape = array.shape().to_vec();
    let bound = array.try_map(|coordinate, value| -> LineageResult<_> {
        let element = TrackedValue::new(value.clone(), lineage.clone());
        let origin = RecordSource::array_origin(container, &shape, coordinate);
        element.record_derivation(origin, None)?;
        Ok(element)
    })?;
    debug!(%container, shape = ?shape, elements = bound.len(), "bound shaped collection");
    Ok((bound, container))
}

/// Re-identify every element of an already-tracked collection in place.
///
/// Each element receives a fresh identity minted from `lineage`; values are
/// untouched. Every element must belong to the same provenance context as
/// `lineage` (same log, same identity source), otherwise
/// [`LogError::ForeignContext`] is returned before anything changes.
///
/// An element takes its new identity only after its array-origin record is
/// accepted. On a log failure the failing element and every later one keep
/// their old identities; earlier elements stay re-identified.
pub fn rebind<T>(
    lineage: &Lineage,
    array: &mut Shaped<TrackedValue<T>>,
    container: Option<Identity>,
) -> LineageResult<Identity> {
    if array.iter().any(|element| !element.lineage().same_context(lineage)) {
        return Err(LogError::ForeignContext {
            sink: lineage.log().name().to_string(),
        }
        .into());
    }
    let container = container.unwrap_or_else(|| lineage.mint());
    let shape = array.shape().to_vec();
    for (coordinate, element) in array.indexed_iter_mut() {
        let fresh = lineage.mint();
        let origin = RecordSource::array_origin(container, &shape, &coordinate);
        element.record_derivation(origin, Some(fresh))?;
        element.set_identity(fresh);
    }
    debug!(%container, shape = ?shape, elements = array.len(), "rebound shaped collection");
    Ok(container)
}
