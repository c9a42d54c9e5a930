//! Reflected arithmetic: `lhs <op> self` with a plain left-hand side.

use lineage_core::LineageResult;

use crate::number::Number;
use crate::tracked::TrackedValue;

impl<T: Number> TrackedValue<T> {
    pub fn radd(&self, lhs: T) -> LineageResult<TrackedValue<T>> {
        self.reflected("radd", lhs, T::try_add)
    }

    pub fn rsub(&self, lhs: T) -> LineageResult<TrackedValue<T>> {
        self.reflected("rsub", lhs, T::try_sub)
    }

    pub fn rmul(&self, lhs: T) -> LineageResult<TrackedValue<T>> {
        self.reflected("rmul", lhs, T::try_mul)
    }

    pub fn rdiv(&self, lhs: T) -> LineageResult<TrackedValue<T>> {
        self.reflected("rdiv", lhs, T::try_div)
    }

    pub fn rrem(&self, lhs: T) -> LineageResult<TrackedValue<T>> {
        self.reflected("rrem", lhs, T::try_rem)
    }

    pub fn rfloor_div(&self, lhs: T) -> LineageResult<TrackedValue<T>> {
        self.reflected("rfloor_div", lhs, T::try_floor_div)
    }

    pub fn rmodulo(&self, lhs: T) -> LineageResult<TrackedValue<T>> {
        self.reflected("rmodulo", lhs, T::try_modulo)
    }

    /// `lhs ** self`.
    pub fn rpow(&self, lhs: T) -> LineageResult<TrackedValue<T>> {
        self.reflected("rpow", lhs, T::try_pow)
    }

    pub fn rdiv_mod(&self, lhs: T) -> LineageResult<(TrackedValue<T>, TrackedValue<T>)> {
        self.reflected("rdiv_mod", lhs, T::try_div_mod)
    }
}

#[cfg(test)]
mod tests {
    use lineage_core::Lineage;

    use super::*;

    #[test]
    fn reflected_operand_order_is_lhs_first() {
        let (lineage, log) = Lineage::in_memory();
        let b = TrackedValue::new(3i32, lineage);
        assert_eq!(*b.rsub(10).unwrap().value(), 7);
        assert_eq!(*b.rpow(2).unwrap().value(), 8);
        let (q, r) = b.rdiv_mod(-7).unwrap();
        assert_eq!((*q.value(), *r.value()), (-3, 2));
        // One record per output, each naming only the receiver.
        assert_eq!(log.len(), 4);
        assert!(log.records().iter().all(|r| r.starts_with(&format!("({}, ", b.identity()))));
    }

    #[test]
    fn reflected_failure_logs_nothing() {
        let (lineage, log) = Lineage::in_memory();
        let zero = TrackedValue::new(0.0f64, lineage);
        assert!(zero.rdiv(1.0).is_err());
        assert!(zero.rmodulo(1.0).is_err());
        assert!(log.is_empty());
    }
}
