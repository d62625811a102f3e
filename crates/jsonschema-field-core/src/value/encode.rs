use crate::{Error, Result};

use serde::ser::{self, Serialize};
use serde_json::Value;

/// Encodes `value` as a JSON document.
///
/// `serde_json` writes NaN and infinite floats as `null`. They have no JSON
/// representation, so they are rejected here instead.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(FiniteFloats).map_err(Error::serialization)?;
    serde_json::to_value(value).map_err(Error::serialization)
}

/// Walks a value and fails on the first non-finite float.
#[derive(Clone, Copy)]
struct FiniteFloats;

type Check = std::result::Result<(), serde_json::Error>;

fn finite(value: f64) -> Check {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ser::Error::custom(format!(
            "{value} cannot be represented in JSON"
        )))
    }
}

impl ser::Serializer for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _: bool) -> Check {
        Ok(())
    }

    fn serialize_i8(self, _: i8) -> Check {
        Ok(())
    }

    fn serialize_i16(self, _: i16) -> Check {
        Ok(())
    }

    fn serialize_i32(self, _: i32) -> Check {
        Ok(())
    }

    fn serialize_i64(self, _: i64) -> Check {
        Ok(())
    }

    fn serialize_i128(self, _: i128) -> Check {
        Ok(())
    }

    fn serialize_u8(self, _: u8) -> Check {
        Ok(())
    }

    fn serialize_u16(self, _: u16) -> Check {
        Ok(())
    }

    fn serialize_u32(self, _: u32) -> Check {
        Ok(())
    }

    fn serialize_u64(self, _: u64) -> Check {
        Ok(())
    }

    fn serialize_u128(self, _: u128) -> Check {
        Ok(())
    }

    fn serialize_f32(self, value: f32) -> Check {
        finite(f64::from(value))
    }

    fn serialize_f64(self, value: f64) -> Check {
        finite(value)
    }

    fn serialize_char(self, _: char) -> Check {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Check {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Check {
        Ok(())
    }

    fn serialize_none(self) -> Check {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Check {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Check {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Check {
        Ok(())
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Check {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Check {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Check {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Check {
        key.serialize(*self)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _: &'static str, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _: &'static str, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}
