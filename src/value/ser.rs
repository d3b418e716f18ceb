//! Conversion of `Serialize` types into [`Value`].

use indexmap::IndexMap;
use serde::ser::{self, Serialize};

use super::Value;
use crate::error::ValueError;

/// Converts any serializable value into a [`Value`].
///
/// # Example
///
/// ```rust
/// use desire::{to_value, Value};
///
/// let value = to_value(&vec![1, 2, 3]).unwrap();
/// assert_eq!(value, Value::Seq(vec![1.into(), 2.into(), 3.into()]));
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, ValueError> {
    value.serialize(ValueSerializer)
}

/// A serde `Serializer` producing [`Value`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSerializer;

type Result<T, E = ValueError> = std::result::Result<T, E>;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = ValueError;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVariant<SerializeVec>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeStruct;
    type SerializeStructVariant = SerializeVariant<SerializeStruct>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| ValueError::IntegerOutOfRange(v.to_string()))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Uint(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Uint(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        u64::try_from(v)
            .map(Value::Uint)
            .map_err(|_| ValueError::IntegerOutOfRange(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v.into()))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Seq(v.iter().map(|b| Value::Uint((*b).into())).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Unit)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Unit)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value> {
        Ok(tagged(variant, value.serialize(self)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), false))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, true))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, true))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<SerializeVec>> {
        Ok(SerializeVariant {
            variant,
            inner: SerializeVec::new(len, true),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeStruct> {
        Ok(SerializeStruct {
            name,
            fields: IndexMap::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<SerializeStruct>> {
        Ok(SerializeVariant {
            variant,
            inner: SerializeStruct {
                name: variant,
                fields: IndexMap::with_capacity(len),
            },
        })
    }
}

fn tagged(variant: &'static str, payload: Value) -> Value {
    Value::Map(vec![(Value::String(variant.to_string()), payload)])
}

#[doc(hidden)]
pub struct SerializeVec {
    items: Vec<Value>,
    fixed: bool,
}

impl SerializeVec {
    fn new(len: usize, fixed: bool) -> Self {
        Self {
            items: Vec::with_capacity(len),
            fixed,
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        if self.fixed {
            Value::Tuple(self.items)
        } else {
            Value::Seq(self.items)
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

#[doc(hidden)]
pub struct SerializeMap {
    entries: Vec<(Value, Value)>,
    next_key: Option<Value>,
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        self.next_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self.next_key.take().ok_or(ValueError::MissingMapKey)?;
        self.entries.push((key, to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.entries))
    }
}

#[doc(hidden)]
pub struct SerializeStruct {
    name: &'static str,
    fields: IndexMap<&'static str, Value>,
}

impl ser::SerializeStruct for SerializeStruct {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.fields.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Struct {
            name: self.name,
            fields: self.fields,
        })
    }
}

/// Wraps the payload of a tuple or struct variant under its variant name.
#[doc(hidden)]
pub struct SerializeVariant<S> {
    variant: &'static str,
    inner: S,
}

impl ser::SerializeTupleVariant for SerializeVariant<SerializeVec> {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.inner.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, self.inner.finish()))
    }
}

impl ser::SerializeStructVariant for SerializeVariant<SerializeStruct> {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Value> {
        let payload = ser::SerializeStruct::end(self.inner)?;
        Ok(tagged(self.variant, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: &'static str,
        nickname: Option<String>,
    }

    #[derive(Serialize)]
    struct UserId(u64);

    #[derive(Serialize)]
    enum Event {
        Started,
        Moved { x: i32 },
        Renamed(String),
    }

    #[test]
    fn test_struct_keeps_name_and_field_order() {
        let value = to_value(&User {
            id: 1,
            name: "alice",
            nickname: None,
        })
        .unwrap();

        match value {
            Value::Struct { name, fields } => {
                assert_eq!(name, "User");
                let keys: Vec<_> = fields.keys().copied().collect();
                assert_eq!(keys, vec!["id", "name", "nickname"]);
                assert_eq!(fields["nickname"], Value::Null);
            }
            other => panic!("expected struct, got {:?}", other),
        }
    }

    #[test]
    fn test_newtype_and_option_are_transparent() {
        assert_eq!(to_value(&UserId(7)).unwrap(), Value::Uint(7));
        assert_eq!(to_value(&Some("x")).unwrap(), Value::from("x"));
    }

    #[test]
    fn test_array_is_tuple_and_vec_is_seq() {
        assert!(matches!(to_value(&[1, 2]).unwrap(), Value::Tuple(_)));
        assert!(matches!(to_value(&vec![1, 2]).unwrap(), Value::Seq(_)));
    }

    #[test]
    fn test_enum_external_tagging() {
        assert_eq!(to_value(&Event::Started).unwrap(), Value::from("Started"));

        let renamed = to_value(&Event::Renamed("bob".into())).unwrap();
        assert_eq!(
            renamed,
            Value::Map(vec![("Renamed".into(), "bob".into())])
        );

        match to_value(&Event::Moved { x: 3 }).unwrap() {
            Value::Map(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].0, Value::from("Moved"));
                assert!(matches!(entries[0].1, Value::Struct { name: "Moved", .. }));
            }
            other => panic!("expected tagged map, got {:?}", other),
        }
    }

    #[test]
    fn test_map_keys_keep_their_type() {
        let mut map = BTreeMap::new();
        map.insert(1, "a");
        map.insert(2, "b");

        let value = to_value(&map).unwrap();
        match value {
            Value::Map(entries) => assert_eq!(Value::map_key_type(&entries), Some("int")),
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_i128() {
        let err = to_value(&i128::MAX).unwrap_err();
        assert!(matches!(err, ValueError::IntegerOutOfRange(_)));
    }
}
