//! Raw numeric operations behind every tracked operation.
//!
//! Integer operations are checked: overflow and division by zero come back
//! as [`ArithmeticError`]s instead of panicking. Float division, floor
//! division, modulo and `div_mod` by zero are errors too. `floor_div`,
//! `modulo` and `div_mod` are floored (the remainder takes the sign of the
//! divisor); `try_rem` is the truncated remainder of `%`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use lineage_core::errors::ArithmeticError;

use crate::outcome::Scalar;

/// A raw numeric payload that tracked arithmetic can operate on.
pub trait Number: Scalar + Copy + PartialEq + PartialOrd {
    const ZERO: Self;
    const ONE: Self;

    fn try_add(self, rhs: Self) -> Result<Self, ArithmeticError>;
    fn try_sub(self, rhs: Self) -> Result<Self, ArithmeticError>;
    fn try_mul(self, rhs: Self) -> Result<Self, ArithmeticError>;
    /// Truncating division for integers, true division for floats.
    fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError>;
    /// Truncated remainder; sign follows the dividend.
    fn try_rem(self, rhs: Self) -> Result<Self, ArithmeticError>;
    /// Floored quotient and remainder; remainder sign follows the divisor.
    fn try_div_mod(self, rhs: Self) -> Result<(Self, Self), ArithmeticError>;
    fn try_pow(self, exp: Self) -> Result<Self, ArithmeticError>;
    fn try_neg(self) -> Result<Self, ArithmeticError>;
    fn try_abs(self) -> Result<Self, ArithmeticError>;

    /// Round half to even.
    fn round_even(self) -> Self;
    /// Round toward zero.
    fn truncate(self) -> Self;
    fn to_f64(self) -> f64;
    fn is_integral(self) -> bool;
    fn hash_u64(self) -> u64;
    /// Exact `(numerator, denominator)` with a positive denominator.
    fn integer_ratio(self) -> Result<(i128, i128), ArithmeticError>;
    fn to_hex(self) -> String;

    fn try_floor_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
        self.try_div_mod(rhs)
            .map(|(quotient, _)| quotient)
            .map_err(|e| e.with_op("floor_div"))
    }

    fn try_modulo(self, rhs: Self) -> Result<Self, ArithmeticError> {
        self.try_div_mod(rhs)
            .map(|(_, remainder)| remainder)
            .map_err(|e| e.with_op("modulo"))
    }

    fn is_nonzero(self) -> bool {
        self != Self::ZERO
    }
}

fn hash_of(value: impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

macro_rules! checked_pow_fn {
    ($($t:ty),*) => {$(
        impl CheckedPow for $t {
            fn checked_pow_u32(self, exp: u32) -> Option<Self> {
                self.checked_pow(exp)
            }
        }
    )*};
}

trait CheckedPow: Sized {
    fn checked_pow_u32(self, exp: u32) -> Option<Self>;
}

checked_pow_fn!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn checked_pow<T, E>(base: T, exp: E) -> Result<T, ArithmeticError>
where
    T: CheckedPow,
    u32: TryFrom<E>,
{
    let exp = u32::try_from(exp).map_err(|_| ArithmeticError::Overflow { op: "pow" })?;
    base.checked_pow_u32(exp)
        .ok_or(ArithmeticError::Overflow { op: "pow" })
}

macro_rules! checked_common {
    () => {
        const ZERO: Self = 0;
        const ONE: Self = 1;

        fn try_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
            self.checked_add(rhs)
                .ok_or(ArithmeticError::Overflow { op: "add" })
        }

        fn try_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
            self.checked_sub(rhs)
                .ok_or(ArithmeticError::Overflow { op: "sub" })
        }

        fn try_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
            self.checked_mul(rhs)
                .ok_or(ArithmeticError::Overflow { op: "mul" })
        }

        fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
            if rhs == 0 {
                return Err(ArithmeticError::DivisionByZero { op: "div" });
            }
            self.checked_div(rhs)
                .ok_or(ArithmeticError::Overflow { op: "div" })
        }

        fn try_rem(self, rhs: Self) -> Result<Self, ArithmeticError> {
            if rhs == 0 {
                return Err(ArithmeticError::DivisionByZero { op: "rem" });
            }
            self.checked_rem(rhs)
                .ok_or(ArithmeticError::Overflow { op: "rem" })
        }

        fn try_neg(self) -> Result<Self, ArithmeticError> {
            self.checked_neg()
                .ok_or(ArithmeticError::Overflow { op: "neg" })
        }

        fn round_even(self) -> Self {
            self
        }

        fn truncate(self) -> Self {
            self
        }

        fn to_f64(self) -> f64 {
            self as f64
        }

        fn is_integral(self) -> bool {
            true
        }

        fn hash_u64(self) -> u64 {
            hash_of(self)
        }
    };
}

macro_rules! signed_number {
    ($($t:ty),*) => {$(
        impl Number for $t {
            checked_common!();

            fn try_div_mod(self, rhs: Self) -> Result<(Self, Self), ArithmeticError> {
                if rhs == 0 {
                    return Err(ArithmeticError::DivisionByZero { op: "div_mod" });
                }
                let overflow = ArithmeticError::Overflow { op: "div_mod" };
                let quotient = self.checked_div(rhs).ok_or(overflow.clone())?;
                let remainder = self.checked_rem(rhs).ok_or(overflow)?;
                if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
                    Ok((quotient - 1, remainder + rhs))
                } else {
                    Ok((quotient, remainder))
                }
            }

            fn try_pow(self, exp: Self) -> Result<Self, ArithmeticError> {
                if exp < 0 {
                    return Err(ArithmeticError::Domain {
                        op: "pow",
                        reason: "negative exponent for integer power".to_string(),
                    });
                }
                checked_pow(self, exp)
            }

            fn try_abs(self) -> Result<Self, ArithmeticError> {
                self.checked_abs()
                    .ok_or(ArithmeticError::Overflow { op: "abs" })
            }

            fn integer_ratio(self) -> Result<(i128, i128), ArithmeticError> {
                Ok((self as i128, 1))
            }

            fn to_hex(self) -> String {
                if self < 0 {
                    format!("-{:#x}", self.unsigned_abs())
                } else {
                    format!("{:#x}", self)
                }
            }
        }
    )*};
}

macro_rules! unsigned_number {
    ($($t:ty),*) => {$(
        impl Number for $t {
            checked_common!();

            fn try_div_mod(self, rhs: Self) -> Result<(Self, Self), ArithmeticError> {
                if rhs == 0 {
                    return Err(ArithmeticError::DivisionByZero { op: "div_mod" });
                }
                Ok((self / rhs, self % rhs))
            }

            fn try_pow(self, exp: Self) -> Result<Self, ArithmeticError> {
                checked_pow(self, exp)
            }

            fn try_abs(self) -> Result<Self, ArithmeticError> {
                Ok(self)
            }

            fn integer_ratio(self) -> Result<(i128, i128), ArithmeticError> {
                i128::try_from(self)
                    .map(|numerator| (numerator, 1))
                    .map_err(|_| ArithmeticError::Overflow { op: "as_integer_ratio" })
            }

            fn to_hex(self) -> String {
                format!("{:#x}", self)
            }
        }
    )*};
}

signed_number!(i8, i16, i32, i64, i128, isize);
unsigned_number!(u8, u16, u32, u64, u128, usize);

macro_rules! float_number {
    ($($t:ty),*) => {$(
        impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn try_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
                Ok(self + rhs)
            }

            fn try_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
                Ok(self - rhs)
            }

            fn try_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
                Ok(self * rhs)
            }

            fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero { op: "div" });
                }
                Ok(self / rhs)
            }

            fn try_rem(self, rhs: Self) -> Result<Self, ArithmeticError> {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero { op: "rem" });
                }
                Ok(self % rhs)
            }

            fn try_div_mod(self, rhs: Self) -> Result<(Self, Self), ArithmeticError> {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero { op: "div_mod" });
                }
                let mut remainder = self % rhs;
                let mut quotient = (self - remainder) / rhs;
                if remainder != 0.0 {
                    if (rhs < 0.0) != (remainder < 0.0) {
                        remainder += rhs;
                        quotient -= 1.0;
                    }
                } else {
                    remainder = (0.0 as $t).copysign(rhs);
                }
                let quotient = if quotient != 0.0 {
                    let floored = quotient.floor();
                    if quotient - floored > 0.5 {
                        floored + 1.0
                    } else {
                        floored
                    }
                } else {
                    (0.0 as $t).copysign(self / rhs)
                };
                Ok((quotient, remainder))
            }

            fn try_pow(self, exp: Self) -> Result<Self, ArithmeticError> {
                if self == 0.0 && exp < 0.0 {
                    return Err(ArithmeticError::DivisionByZero { op: "pow" });
                }
                if self < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
                    return Err(ArithmeticError::Domain {
                        op: "pow",
                        reason: "negative base with fractional exponent".to_string(),
                    });
                }
                Ok(self.powf(exp))
            }

            fn try_neg(self) -> Result<Self, ArithmeticError> {
                Ok(-self)
            }

            fn try_abs(self) -> Result<Self, ArithmeticError> {
                Ok(self.abs())
            }

            fn round_even(self) -> Self {
                self.round_ties_even()
            }

            fn truncate(self) -> Self {
                self.trunc()
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn is_integral(self) -> bool {
                self.is_finite() && self.fract() == 0.0
            }

            fn hash_u64(self) -> u64 {
                // -0.0 == 0.0, so both must hash alike.
                if self == 0.0 {
                    hash_of(0u64)
                } else {
                    hash_of(self.to_bits())
                }
            }

            fn integer_ratio(self) -> Result<(i128, i128), ArithmeticError> {
                float_integer_ratio(f64::from(self))
            }

            fn to_hex(self) -> String {
                float_hex(f64::from(self))
            }
        }
    )*};
}

float_number!(f32, f64);

const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_BIAS: i32 = 1023;

fn float_integer_ratio(value: f64) -> Result<(i128, i128), ArithmeticError> {
    const OP: &str = "as_integer_ratio";
    if value.is_nan() {
        return Err(ArithmeticError::Domain {
            op: OP,
            reason: "cannot convert NaN to integer ratio".to_string(),
        });
    }
    if value.is_infinite() {
        return Err(ArithmeticError::Overflow { op: OP });
    }
    if value == 0.0 {
        return Ok((0, 1));
    }

    let bits = value.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    let fraction = bits & MANTISSA_MASK;
    let (mut mantissa, mut exponent) = if biased == 0 {
        (fraction, 1 - EXPONENT_BIAS - MANTISSA_BITS as i32)
    } else {
        (
            fraction | (1 << MANTISSA_BITS),
            biased - EXPONENT_BIAS - MANTISSA_BITS as i32,
        )
    };
    let shift = mantissa.trailing_zeros();
    mantissa >>= shift;
    exponent += shift as i32;

    let mantissa = i128::from(mantissa);
    let significant_bits = (128 - mantissa.leading_zeros()) as i32;
    let (numerator, denominator) = if exponent >= 0 {
        if significant_bits + exponent > 127 {
            return Err(ArithmeticError::Overflow { op: OP });
        }
        (mantissa << exponent, 1)
    } else {
        if -exponent > 126 {
            return Err(ArithmeticError::Overflow { op: OP });
        }
        (mantissa, 1i128 << -exponent)
    };

    if value.is_sign_negative() {
        Ok((-numerator, denominator))
    } else {
        Ok((numerator, denominator))
    }
}

fn float_hex(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{sign}0x0.0p+0");
    }
    let bits = value.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    let fraction = bits & MANTISSA_MASK;
    if biased == 0 {
        format!("{sign}0x0.{fraction:013x}p-1022")
    } else {
        format!("{sign}0x1.{fraction:013x}p{:+}", biased - EXPONENT_BIAS)
    }
}
