//! Unary operations. Negation is the `Neg` operator.

use lineage_core::LineageResult;

use crate::number::Number;
use crate::tracked::TrackedValue;

impl<T: Number> TrackedValue<T> {
    /// Unary plus: a derived copy with a fresh identity.
    pub fn pos(&self) -> LineageResult<TrackedValue<T>> {
        self.unary("pos", Ok)
    }

    pub fn abs(&self) -> LineageResult<TrackedValue<T>> {
        self.unary("abs", T::try_abs)
    }

    /// Round half to even.
    pub fn round(&self) -> LineageResult<TrackedValue<T>> {
        self.unary("round", |x: T| Ok(x.round_even()))
    }

    /// Round toward zero.
    pub fn trunc(&self) -> LineageResult<TrackedValue<T>> {
        self.unary("trunc", |x: T| Ok(x.truncate()))
    }

    /// Complex conjugate; the identity function on real numbers.
    pub fn conjugate(&self) -> LineageResult<TrackedValue<T>> {
        self.unary("conjugate", Ok)
    }

    pub fn real(&self) -> LineageResult<TrackedValue<T>> {
        self.unary("real", Ok)
    }

    /// Imaginary part; always zero.
    pub fn imag(&self) -> LineageResult<TrackedValue<T>> {
        self.unary("imag", |_: T| Ok(T::ZERO))
    }
}
