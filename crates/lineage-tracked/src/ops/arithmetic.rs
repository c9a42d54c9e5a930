//! Forward binary arithmetic: `self <op> rhs`.
//!
//! `add`, `sub`, `mul`, `div` and `rem` are also reachable through the
//! `std::ops` operators.

use lineage_core::LineageResult;

use crate::number::Number;
use crate::operand::Operand;
use crate::tracked::TrackedValue;

impl<T: Number> TrackedValue<T> {
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> LineageResult<TrackedValue<T>>
    where
        T: 'a,
    {
        self.binary("add", rhs.into(), T::try_add)
    }

    pub fn sub<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> LineageResult<TrackedValue<T>>
    where
        T: 'a,
    {
        self.binary("sub", rhs.into(), T::try_sub)
    }

    pub fn mul<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> LineageResult<TrackedValue<T>>
    where
        T: 'a,
    {
        self.binary("mul", rhs.into(), T::try_mul)
    }

    /// True division for floats, truncating division for integers.
    pub fn div<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> LineageResult<TrackedValue<T>>
    where
        T: 'a,
    {
        self.binary("div", rhs.into(), T::try_div)
    }

    /// Truncated remainder, as `%` on the raw type.
    pub fn rem<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> LineageResult<TrackedValue<T>>
    where
        T: 'a,
    {
        self.binary("rem", rhs.into(), T::try_rem)
    }

    /// Floored quotient.
    pub fn floor_div<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> LineageResult<TrackedValue<T>>
    where
        T: 'a,
    {
        self.binary("floor_div", rhs.into(), T::try_floor_div)
    }

    /// Floored remainder; takes the sign of `rhs`.
    pub fn modulo<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> LineageResult<TrackedValue<T>>
    where
        T: 'a,
    {
        self.binary("modulo", rhs.into(), T::try_modulo)
    }

    pub fn pow<'a>(&self, exp: impl Into<Operand<'a, T>>) -> LineageResult<TrackedValue<T>>
    where
        T: 'a,
    {
        self.binary("pow", exp.into(), T::try_pow)
    }

    /// Floored quotient and remainder. Both outputs share the same
    /// provenance and each gets its own records.
    pub fn div_mod<'a>(
        &self,
        rhs: impl Into<Operand<'a, T>>,
    ) -> LineageResult<(TrackedValue<T>, TrackedValue<T>)>
    where
        T: 'a,
    {
        self.binary("div_mod", rhs.into(), T::try_div_mod)
    }
}
