//! Tracked operations on numeric values.
//!
//! Every operation here funnels through [`intercept`] via one of three
//! shapes: unary, binary (receiver on the left) and reflected (plain value on
//! the left, receiver on the right).

mod arithmetic;
mod compare;
mod convert;
mod operators;
mod reflected;
mod unary;

use lineage_core::errors::ArithmeticError;
use lineage_core::LineageResult;

use crate::intercept::intercept;
use crate::number::Number;
use crate::operand::Operand;
use crate::outcome::Outcome;
use crate::tracked::TrackedValue;

impl<T: Number> TrackedValue<T> {
    pub(crate) fn unary<R, F>(&self, operation: &'static str, op: F) -> LineageResult<R::Tracked>
    where
        R: Outcome,
        F: FnOnce(T) -> Result<R, ArithmeticError>,
    {
        intercept(operation, self, &[], |this, _| op(this))
    }

    pub(crate) fn binary<R, F>(
        &self,
        operation: &'static str,
        rhs: Operand<'_, T>,
        op: F,
    ) -> LineageResult<R::Tracked>
    where
        R: Outcome,
        F: FnOnce(T, T) -> Result<R, ArithmeticError>,
    {
        intercept(operation, self, std::slice::from_ref(&rhs), |this, rest| {
            op(this, rest[0])
        })
    }

    /// `lhs <op> self` where `lhs` is plain. Provenance is the receiver only.
    pub(crate) fn reflected<R, F>(
        &self,
        operation: &'static str,
        lhs: T,
        op: F,
    ) -> LineageResult<R::Tracked>
    where
        R: Outcome,
        F: FnOnce(T, T) -> Result<R, ArithmeticError>,
    {
        intercept(operation, self, &[Operand::Plain(lhs)], |this, rest| {
            op(rest[0], this)
        })
    }
}
