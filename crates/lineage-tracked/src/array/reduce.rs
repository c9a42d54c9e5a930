//! Reductions over tracked collections.

use lineage_core::LineageResult;

use super::shaped::Shaped;
use crate::number::Number;
use crate::tracked::TrackedValue;

/// Left fold with tracked addition, row-major. Every intermediate sum is a
/// tracked value, so the log holds the full chain. `None` for an empty
/// collection; a single element is returned as-is.
pub fn sum<T: Number>(array: &Shaped<TrackedValue<T>>) -> LineageResult<Option<TrackedValue<T>>> {
    let mut elements = array.iter();
    let Some(first) = elements.next() else {
        return Ok(None);
    };
    let mut total = first.clone();
    for element in elements {
        total = (&total + element)?;
    }
    Ok(Some(total))
}
