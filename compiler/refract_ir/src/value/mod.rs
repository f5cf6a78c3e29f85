//! Opaque property values.
//!
//! A [`Value`] borrows from the object it was read from. Analyzers only ever
//! need two things from it: whether it is null, and its string form.

use std::fmt::{self, Write};

/// A property value read through an accessor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value<'a> {
    /// Absent value (`Option::None` fields).
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    I128(i128),
    U128(u128),
    /// Kept apart from [`Value::Float`] so `0.1f32` prints as `0.1`.
    F32(f32),
    Float(f64),
    Char(char),
    Str(&'a str),
}

/// Error returned when stringifying [`Value::Null`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NullValue;

impl fmt::Display for NullValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "null value has no string form")
    }
}

impl std::error::Error for NullValue {}

impl Value<'_> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the value kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::I128(_) => "i128",
            Value::U128(_) => "u128",
            Value::F32(_) | Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
        }
    }

    /// Append the string form of this value to `out`.
    ///
    /// This is the single stringification rule shared by every analyzer
    /// strategy, so all of them agree on the output byte-for-byte.
    #[inline]
    pub fn write_to(&self, out: &mut String) -> Result<(), NullValue> {
        match *self {
            Value::Null => return Err(NullValue),
            Value::Str(s) => out.push_str(s),
            Value::Char(c) => out.push(c),
            Value::Bool(b) => out.push_str(if b { "true" } else { "false" }),
            // Writing into a String cannot fail.
            Value::Int(n) => {
                let _ = write!(out, "{n}");
            }
            Value::UInt(n) => {
                let _ = write!(out, "{n}");
            }
            Value::I128(n) => {
                let _ = write!(out, "{n}");
            }
            Value::U128(n) => {
                let _ = write!(out, "{n}");
            }
            Value::F32(x) => {
                let _ = write!(out, "{x}");
            }
            Value::Float(x) => {
                let _ = write!(out, "{x}");
            }
        }
        Ok(())
    }

    /// The string form of this value as a fresh `String`.
    pub fn to_display_string(&self) -> Result<String, NullValue> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }
}

/// Field types that can be exposed as a [`Value`].
///
/// Implemented for strings, primitives, `Option<T>` (`None` reads as
/// [`Value::Null`]) and `Box<T>`. `#[derive(Reflect)]` requires every
/// reflected field to implement it.
pub trait PropertyValue {
    fn to_value(&self) -> Value<'_>;
}

impl PropertyValue for String {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl PropertyValue for str {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl PropertyValue for &str {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Str(*self)
    }
}

impl PropertyValue for bool {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl PropertyValue for char {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Char(*self)
    }
}

macro_rules! impl_property_value {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl PropertyValue for $ty {
                #[inline]
                fn to_value(&self) -> Value<'_> {
                    Value::$variant((*self).into())
                }
            }
        )+
    };
}

impl_property_value!(Int => i8, i16, i32, i64);
impl_property_value!(UInt => u8, u16, u32, u64);
impl_property_value!(I128 => i128);
impl_property_value!(U128 => u128);
impl_property_value!(F32 => f32);
impl_property_value!(Float => f64);

// Pointer-sized integers fall back to the 128-bit variants only on targets
// wider than 64 bits.
#[allow(clippy::cast_lossless, reason = "no From<usize> for u128")]
impl PropertyValue for usize {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        u64::try_from(*self).map_or(Value::U128(*self as u128), Value::UInt)
    }
}

#[allow(clippy::cast_lossless, reason = "no From<isize> for i128")]
impl PropertyValue for isize {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        i64::try_from(*self).map_or(Value::I128(*self as i128), Value::Int)
    }
}

impl<T: PropertyValue> PropertyValue for Option<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: PropertyValue + ?Sized> PropertyValue for Box<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}
