//! `TrackedValue`: a raw value paired with a provenance identity.

use std::fmt;

use lineage_core::errors::ArithmeticError;
use lineage_core::{DerivationRecord, Identity, Lineage, LineageResult, RecordSource};

use crate::intercept::intercept;
use crate::operand::Operand;
use crate::outcome::{Outcome, Scalar};

/// A value that remembers where it came from.
///
/// Operations on a tracked value produce new tracked values with fresh
/// identities and log one derivation record per tracked input. Cloning keeps
/// the identity: a clone is the same logical value, not a derived one.
///
/// There is no `PartialEq` impl. Comparisons are tracked
/// operations (see [`TrackedValue::equals`]) returning `TrackedValue<bool>`.
#[derive(Debug, Clone)]
pub struct TrackedValue<T> {
    value: T,
    identity: Identity,
    lineage: Lineage,
}

impl<T> TrackedValue<T> {
    /// Wrap `value` with a freshly minted identity. Nothing is logged.
    pub fn new(value: T, lineage: Lineage) -> Self {
        let identity = lineage.mint();
        Self::with_identity(value, lineage, identity)
    }

    /// Wrap `value` with a caller-supplied identity. Nothing is logged.
    pub fn with_identity(value: T, lineage: Lineage, identity: Identity) -> Self {
        Self {
            value,
            identity,
            lineage,
        }
    }

    /// Wrap `value`, minting an identity only when none is supplied.
    pub fn create(value: T, lineage: Lineage, identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Self::with_identity(value, lineage, identity),
            None => Self::new(value, lineage),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    /// Replace the identity. Does not log.
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = identity;
    }

    /// Replace the raw payload in place, keeping the identity.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Append `(source, target)` to this value's log; `target` defaults to
    /// this value's identity.
    pub fn record_derivation(
        &self,
        source: impl Into<RecordSource>,
        target: Option<Identity>,
    ) -> LineageResult<()> {
        let record = DerivationRecord::new(source, target.unwrap_or(self.identity));
        self.lineage.record(&record)?;
        Ok(())
    }
}

impl<T: Scalar> TrackedValue<T> {
    /// Run an arbitrary raw operation on this value under tracking.
    ///
    /// ```
    /// use lineage_core::Lineage;
    /// use lineage_tracked::TrackedValue;
    ///
    /// let (lineage, log) = Lineage::in_memory();
    /// let word = TrackedValue::new("abc".to_string(), lineage);
    /// let length = word.apply("len", |s| Ok(s.len())).unwrap();
    /// assert_eq!(*length.value(), 3);
    /// assert_eq!(log.len(), 1);
    /// ```
    pub fn apply<R, F>(&self, operation: &'static str, op: F) -> LineageResult<R::Tracked>
    where
        R: Outcome,
        F: FnOnce(T) -> Result<R, ArithmeticError>,
    {
        intercept(operation, self, &[], |this, _| op(this))
    }

    /// Run a raw operation over this value and further operands, tracked or
    /// plain. Provenance lists this value first, then each tracked operand
    /// in order.
    pub fn apply_with<'a, R, F>(
        &self,
        operation: &'static str,
        operands: &[Operand<'a, T>],
        op: F,
    ) -> LineageResult<R::Tracked>
    where
        R: Outcome,
        F: FnOnce(T, &[T]) -> Result<R, ArithmeticError>,
    {
        intercept(operation, self, operands, op)
    }
}

/// Renders as `(value, identity)`. Display is not a tracked operation and
/// writes nothing to the log; use `render()` for the tracked form.
impl<T: fmt::Display> fmt::Display for TrackedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.value, self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_does_not_log() {
        let (lineage, log) = Lineage::in_memory();
        let supplied = lineage.mint();
        let a = TrackedValue::create(1.5, lineage.clone(), Some(supplied));
        let b = TrackedValue::create(1.5, lineage, None);
        assert_eq!(a.identity(), supplied);
        assert_ne!(b.identity(), supplied);
        assert!(log.is_empty());
    }

    #[test]
    fn clone_keeps_identity() {
        let (lineage, _log) = Lineage::in_memory();
        let a = TrackedValue::new(7i64, lineage);
        assert_eq!(a.clone().identity(), a.identity());
    }

    #[test]
    fn record_derivation_defaults_target_to_self() {
        let (lineage, log) = Lineage::in_memory();
        let source = lineage.mint();
        let value = TrackedValue::new(2u8, lineage);
        value.record_derivation(source, None).unwrap();
        assert_eq!(log.records(), vec![format!("({source}, {})", value.identity())]);
    }

    #[test]
    fn display_is_value_and_identity() {
        let (lineage, log) = Lineage::in_memory();
        let value = TrackedValue::new(3i32, lineage);
        assert_eq!(value.to_string(), format!("(3, {})", value.identity()));
        assert!(log.is_empty());
    }

    #[test]
    fn mutation_keeps_or_replaces_identity_as_asked() {
        let (lineage, _log) = Lineage::in_memory();
        let mut value = TrackedValue::new(1u32, lineage.clone());
        let before = value.identity();
        value.set_value(9);
        assert_eq!(value.identity(), before);
        let replacement = lineage.mint();
        value.set_identity(replacement);
        assert_eq!(value.identity(), replacement);
        assert_eq!(value.into_value(), 9);
    }
}
