//! Operands of an intercepted operation: tracked or plain.

use lineage_core::Identity;

use crate::tracked::TrackedValue;

/// Anything that exposes an identity and a raw payload.
pub trait Trackable {
    type Raw;

    fn identity(&self) -> Identity;
    fn raw_value(&self) -> &Self::Raw;
}

impl<T> Trackable for TrackedValue<T> {
    type Raw = T;

    fn identity(&self) -> Identity {
        TrackedValue::identity(self)
    }

    fn raw_value(&self) -> &T {
        self.value()
    }
}

/// One operand. Tracked operands contribute provenance; plain ones only
/// contribute their value.
#[derive(Debug, Clone)]
pub enum Operand<'a, T> {
    Tracked(&'a TrackedValue<T>),
    Plain(T),
}

impl<T: Clone> Operand<'_, T> {
    /// Identity of a tracked operand, `None` for plain ones.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Self::Tracked(tracked) => Some(Trackable::identity(*tracked)),
            Self::Plain(_) => None,
        }
    }

    /// The raw payload, unwrapped.
    pub fn raw(&self) -> T {
        match self {
            Self::Tracked(tracked) => tracked.raw_value().clone(),
            Self::Plain(value) => value.clone(),
        }
    }
}

impl<'a, T> From<&'a TrackedValue<T>> for Operand<'a, T> {
    fn from(tracked: &'a TrackedValue<T>) -> Self {
        Self::Tracked(tracked)
    }
}

macro_rules! plain_operand {
    ($($t:ty),*) => {$(
        impl From<$t> for Operand<'_, $t> {
            fn from(value: $t) -> Self {
                Self::Plain(value)
            }
        }
    )*};
}

plain_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String
);
