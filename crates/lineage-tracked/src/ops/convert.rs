//! Tracked conversions and inspections. Every one of these is an operation
//! like any other: fresh identity, one record per input.

use lineage_core::LineageResult;

use crate::number::Number;
use crate::tracked::TrackedValue;

impl<T: Number> TrackedValue<T> {
    /// Whether the value is nonzero.
    pub fn truthy(&self) -> LineageResult<TrackedValue<bool>> {
        self.unary("truthy", |x: T| Ok(x.is_nonzero()))
    }

    pub fn to_f64(&self) -> LineageResult<TrackedValue<f64>> {
        self.unary("to_f64", |x: T| Ok(x.to_f64()))
    }

    /// Hash of the raw value. Equal values hash equally, `0.0` and `-0.0`
    /// included.
    pub fn hash_value(&self) -> LineageResult<TrackedValue<u64>> {
        self.unary("hash", |x: T| Ok(x.hash_u64()))
    }

    pub fn is_integer(&self) -> LineageResult<TrackedValue<bool>> {
        self.unary("is_integer", |x: T| Ok(x.is_integral()))
    }

    /// Exact `(numerator, denominator)`; both outputs are tracked.
    pub fn as_integer_ratio(&self) -> LineageResult<(TrackedValue<i128>, TrackedValue<i128>)> {
        self.unary("as_integer_ratio", T::integer_ratio)
    }

    /// Hexadecimal text: `0x1.8000000000000p+1` for floats, `-0xff` for
    /// integers.
    pub fn hex(&self) -> LineageResult<TrackedValue<String>> {
        self.unary("hex", |x: T| Ok(x.to_hex()))
    }

    /// Tracked text rendering of the raw value. Unlike `Display`, this is
    /// logged.
    pub fn render(&self) -> LineageResult<TrackedValue<String>> {
        self.unary("render", |x: T| Ok(x.to_string()))
    }
}
