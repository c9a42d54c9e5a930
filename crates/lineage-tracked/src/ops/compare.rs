//! Tracked comparisons. Each returns a `TrackedValue<bool>` derived from both
//! sides.

use lineage_core::LineageResult;

use crate::number::Number;
use crate::operand::Operand;
use crate::tracked::TrackedValue;

macro_rules! comparison {
    ($($(#[$meta:meta])* $name:ident => $op:tt;)*) => {
        impl<T: Number> TrackedValue<T> {
            $(
                $(#[$meta])*
                pub fn $name<'a>(
                    &self,
                    rhs: impl Into<Operand<'a, T>>,
                ) -> LineageResult<TrackedValue<bool>>
                where
                    T: 'a,
                {
                    self.binary(stringify!($name), rhs.into(), |a: T, b: T| Ok(a $op b))
                }
            )*
        }
    };
}

comparison! {
    /// Tracked `==`. NaN is unequal to everything, itself included.
    equals => ==;
    not_equals => !=;
    less_than => <;
    less_equal => <=;
    greater_than => >;
    greater_equal => >=;
}
