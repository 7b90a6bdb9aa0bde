//! Dynamic value representation for HRON data.
//!
//! [`HronValue`] is the native result of decoding and the input to
//! encoding: a tagged variant over the six HRON kinds (null, boolean,
//! number, string, list, object) with exhaustive matching at every
//! consumer. It is the only artifact whose lifetime extends past a codec
//! call; token streams and intermediate trees are ephemeral.
//!
//! ## Creating values
//!
//! ```rust
//! use hron::{hron, HronValue, Number};
//!
//! let null = HronValue::Null;
//! let number = HronValue::from(42);
//! let text = HronValue::from("hello");
//!
//! let user = hron!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(user.is_object());
//! ```
//!
//! ## Extracting values
//!
//! ```rust
//! use hron::HronValue;
//!
//! let value = HronValue::from(42);
//! assert_eq!(value.as_i64(), Some(42));
//! assert_eq!(i64::try_from(value).unwrap(), 42);
//! ```

use crate::HronMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any HRON value.
///
/// # Examples
///
/// ```rust
/// use hron::{HronValue, Number};
///
/// let num = HronValue::Number(Number::Integer(42));
/// let text = HronValue::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum HronValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<HronValue>),
    Object(HronMap),
}

/// A numeric value, either an `i64` integer or an `f64` float.
///
/// The distinction is preserved through a round trip: integers render
/// without a decimal point, floats always with one.
///
/// # Examples
///
/// ```rust
/// use hron::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(2.0).to_string(), "2.0");
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it is an integer or a float
    /// with no fractional part in `i64` range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // An integral float keeps its ".0" so it re-lexes as a float.
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl HronValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, HronValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, HronValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, HronValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, HronValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, HronValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, HronValue::Object(_))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HronValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HronValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or an integral float, returns it as `i64`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            HronValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HronValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<HronValue>> {
        match self {
            HronValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&HronMap> {
        match self {
            HronValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Convenience lookup: `value.get("field")` on an object.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&HronValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}

impl fmt::Display for HronValue {
    /// Renders the value block alone (no schema header) in compact form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = crate::encode::render_value(self, 0, 0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Serialize for HronValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            HronValue::Null => serializer.serialize_unit(),
            HronValue::Bool(b) => serializer.serialize_bool(*b),
            HronValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            HronValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            HronValue::String(s) => serializer.serialize_str(s),
            HronValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            HronValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for HronValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct HronValueVisitor;

        impl<'de> Visitor<'de> for HronValueVisitor {
            type Value = HronValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid HRON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(HronValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(HronValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(HronValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(HronValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(HronValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(HronValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(HronValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(HronValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(HronValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(HronValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = HronMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(HronValue::Object(values))
            }
        }

        deserializer.deserialize_any(HronValueVisitor)
    }
}

impl TryFrom<HronValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: HronValue) -> crate::Result<Self> {
        match value {
            HronValue::Number(Number::Integer(i)) => Ok(i),
            HronValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::message(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::message(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<HronValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: HronValue) -> crate::Result<Self> {
        match value {
            HronValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::message(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<HronValue> for bool {
    type Error = crate::Error;

    fn try_from(value: HronValue) -> crate::Result<Self> {
        match value {
            HronValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::message(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<HronValue> for String {
    type Error = crate::Error;

    fn try_from(value: HronValue) -> crate::Result<Self> {
        match value {
            HronValue::String(s) => Ok(s),
            _ => Err(crate::Error::message(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for HronValue {
    fn from(value: bool) -> Self {
        HronValue::Bool(value)
    }
}

impl From<i8> for HronValue {
    fn from(value: i8) -> Self {
        HronValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for HronValue {
    fn from(value: i16) -> Self {
        HronValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for HronValue {
    fn from(value: i32) -> Self {
        HronValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for HronValue {
    fn from(value: i64) -> Self {
        HronValue::Number(Number::Integer(value))
    }
}

impl From<u8> for HronValue {
    fn from(value: u8) -> Self {
        HronValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for HronValue {
    fn from(value: u16) -> Self {
        HronValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for HronValue {
    fn from(value: u32) -> Self {
        HronValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for HronValue {
    fn from(value: f32) -> Self {
        HronValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for HronValue {
    fn from(value: f64) -> Self {
        HronValue::Number(Number::Float(value))
    }
}

impl From<String> for HronValue {
    fn from(value: String) -> Self {
        HronValue::String(value)
    }
}

impl From<&str> for HronValue {
    fn from(value: &str) -> Self {
        HronValue::String(value.to_string())
    }
}

impl From<Vec<HronValue>> for HronValue {
    fn from(value: Vec<HronValue>) -> Self {
        HronValue::Array(value)
    }
}

impl From<HronMap> for HronValue {
    fn from(value: HronMap) -> Self {
        HronValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryfrom_i64() {
        let value = HronValue::Number(Number::Integer(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = HronValue::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = HronValue::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        let value = HronValue::Number(Number::Float(3.5));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 3.5);

        let value = HronValue::Number(Number::Integer(42));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42.0);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Integer(7).to_string(), "7");
        assert_eq!(Number::Integer(-7).to_string(), "-7");
        assert_eq!(Number::Float(7.0).to_string(), "7.0");
        assert_eq!(Number::Float(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(HronValue::from(true), HronValue::Bool(true));
        assert_eq!(
            HronValue::from(42i64),
            HronValue::Number(Number::Integer(42))
        );
        assert_eq!(
            HronValue::from(3.5f64),
            HronValue::Number(Number::Float(3.5))
        );
        assert_eq!(
            HronValue::from("test"),
            HronValue::String("test".to_string())
        );
    }

    #[test]
    fn test_from_collections() {
        let vec = vec![HronValue::from(1i64), HronValue::from(2i64)];
        let value = HronValue::from(vec.clone());
        assert_eq!(value, HronValue::Array(vec));

        let mut map = HronMap::new();
        map.insert("key".to_string(), HronValue::from(42i64));
        let value = HronValue::from(map.clone());
        assert_eq!(value, HronValue::Object(map));
    }

    #[test]
    fn test_get_lookup() {
        let mut map = HronMap::new();
        map.insert("a".to_string(), HronValue::from(1i64));
        let value = HronValue::Object(map);
        assert_eq!(value.get("a").and_then(HronValue::as_i64), Some(1));
        assert_eq!(value.get("b"), None);
        assert_eq!(HronValue::Null.get("a"), None);
    }
}
