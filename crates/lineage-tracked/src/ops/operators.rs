//! `std::ops` operators on tracked values.
//!
//! Every operator returns `LineageResult<TrackedValue<T>>`, so expressions
//! are written `(&a + &b)?`. Plain values work on either side: `&a * 2.0`
//! and `2.0 * &a` are both tracked, the latter through the reflected path.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use lineage_core::LineageResult;

use crate::number::Number;
use crate::operand::Operand;
use crate::tracked::TrackedValue;

macro_rules! binary_operator {
    ($($trait:ident :: $method:ident => $name:literal, $raw:ident;)*) => {$(
        impl<'b, T: Number> $trait<&'b TrackedValue<T>> for &TrackedValue<T> {
            type Output = LineageResult<TrackedValue<T>>;

            fn $method(self, rhs: &'b TrackedValue<T>) -> Self::Output {
                self.binary($name, Operand::Tracked(rhs), T::$raw)
            }
        }

        impl<T: Number> $trait<T> for &TrackedValue<T> {
            type Output = LineageResult<TrackedValue<T>>;

            fn $method(self, rhs: T) -> Self::Output {
                self.binary($name, Operand::Plain(rhs), T::$raw)
            }
        }

        impl<'b, T: Number> $trait<&'b TrackedValue<T>> for TrackedValue<T> {
            type Output = LineageResult<TrackedValue<T>>;

            fn $method(self, rhs: &'b TrackedValue<T>) -> Self::Output {
                self.binary($name, Operand::Tracked(rhs), T::$raw)
            }
        }

        impl<T: Number> $trait<TrackedValue<T>> for TrackedValue<T> {
            type Output = LineageResult<TrackedValue<T>>;

            fn $method(self, rhs: TrackedValue<T>) -> Self::Output {
                self.binary($name, Operand::Tracked(&rhs), T::$raw)
            }
        }

        impl<T: Number> $trait<T> for TrackedValue<T> {
            type Output = LineageResult<TrackedValue<T>>;

            fn $method(self, rhs: T) -> Self::Output {
                self.binary($name, Operand::Plain(rhs), T::$raw)
            }
        }
    )*};
}

binary_operator! {
    Add::add => "add", try_add;
    Sub::sub => "sub", try_sub;
    Mul::mul => "mul", try_mul;
    Div::div => "div", try_div;
    Rem::rem => "rem", try_rem;
}

impl<T: Number> Neg for &TrackedValue<T> {
    type Output = LineageResult<TrackedValue<T>>;

    fn neg(self) -> Self::Output {
        self.unary("neg", T::try_neg)
    }
}

impl<T: Number> Neg for TrackedValue<T> {
    type Output = LineageResult<TrackedValue<T>>;

    fn neg(self) -> Self::Output {
        self.unary("neg", T::try_neg)
    }
}

// A plain left-hand side cannot be generic over `T` (orphan rules), so the
// reflected operators are stamped out per primitive.
macro_rules! reflected_operators {
    (@impl $t:ty, $($trait:ident :: $method:ident => $reflected:ident),*) => {$(
        impl $trait<&TrackedValue<$t>> for $t {
            type Output = LineageResult<TrackedValue<$t>>;

            fn $method(self, rhs: &TrackedValue<$t>) -> Self::Output {
                rhs.$reflected(self)
            }
        }

        impl $trait<TrackedValue<$t>> for $t {
            type Output = LineageResult<TrackedValue<$t>>;

            fn $method(self, rhs: TrackedValue<$t>) -> Self::Output {
                rhs.$reflected(self)
            }
        }
    )*};
    ($($t:ty),*) => {$(
        reflected_operators!(
            @impl $t,
            Add::add => radd,
            Sub::sub => rsub,
            Mul::mul => rmul,
            Div::div => rdiv,
            Rem::rem => rrem
        );
    )*};
}

reflected_operators!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
