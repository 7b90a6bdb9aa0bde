//! Serde bridge: turn any `Serialize` type into an [`HronValue`].
//!
//! [`to_value`] runs a type's `Serialize` impl against a serializer
//! whose output is the dynamic value tree, which can then be encoded
//! with [`crate::to_string`] and friends.
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let user = User { id: 1, name: "a".to_string() };
//! let value = hron::to_value(&user).unwrap();
//! assert_eq!(hron::to_string_compact(&value).unwrap(), "id,name: 1,'a'");
//! ```

use serde::{ser, Serialize};

use crate::error::{Error, Result};
use crate::value::Number;
use crate::{HronMap, HronValue};

/// Converts any serializable type into an [`HronValue`].
///
/// # Errors
///
/// Enum newtype, tuple, and struct variants have no HRON shape and are
/// rejected; unit variants become their name as a string.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<HronValue> {
    value.serialize(HronValueSerializer)
}

pub struct HronValueSerializer;

pub struct SerializeVec {
    vec: Vec<HronValue>,
}

pub struct SerializeMap {
    map: HronMap,
    current_key: Option<String>,
}

impl ser::Serializer for HronValueSerializer {
    type Ok = HronValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<HronValue> {
        Ok(HronValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<HronValue> {
        Ok(HronValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<HronValue> {
        Ok(HronValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<HronValue> {
        Ok(HronValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<HronValue> {
        Ok(HronValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<HronValue> {
        Ok(HronValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<HronValue> {
        Ok(HronValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<HronValue> {
        Ok(HronValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<HronValue> {
        if v <= i64::MAX as u64 {
            Ok(HronValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(HronValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<HronValue> {
        Ok(HronValue::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<HronValue> {
        Ok(HronValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<HronValue> {
        Ok(HronValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<HronValue> {
        Ok(HronValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<HronValue> {
        let vec = v
            .iter()
            .map(|&b| HronValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(HronValue::Array(vec))
    }

    fn serialize_none(self) -> Result<HronValue> {
        Ok(HronValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<HronValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<HronValue> {
        Ok(HronValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<HronValue> {
        Ok(HronValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<HronValue> {
        Ok(HronValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<HronValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<HronValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::message("newtype variants are not supported"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::message("tuple variants are not supported"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::message("struct variants are not supported"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: HronMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = HronValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<HronValue> {
        Ok(HronValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = HronValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<HronValue> {
        Ok(HronValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = HronValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<HronValue> {
        Ok(HronValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = HronValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<HronValue> {
        Ok(HronValue::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = HronValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            HronValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::message("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::message("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<HronValue> {
        Ok(HronValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = HronValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<HronValue> {
        Ok(HronValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = HronValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<HronValue> {
        Ok(HronValue::Object(self.map))
    }
}
