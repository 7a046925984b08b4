//! Serde bridge: encode any `serde::Serialize` value through the XMI containers.
//!
//! serde's data model maps onto the three container kinds:
//!
//! | serde | container |
//! |-------|-----------|
//! | `bool`, integers, floats, `char`, `str` | single value |
//! | `None`, `()`, unit struct | single value `nil` |
//! | `Some(v)`, newtype struct | transparent |
//! | unit variant | single value, the variant name as a `String` |
//! | seq, tuple, tuple struct, bytes | unkeyed |
//! | map, struct | keyed |
//! | newtype, tuple and struct variants | keyed, one entry under the variant name |
//!
//! Type names come from serde where it supplies one (struct and enum names);
//! anonymous sequences, tuples and maps are `Array`, `Tuple` and `Dictionary`.
//! `usize` and `isize` reach serde as 64-bit integers and are typed as such.

use std::borrow::Cow;
use std::io::Write;

use serde::ser::{self, Serialize};

use crate::config::XmiConfig;
use crate::container::{
    KeyedContainer, NestedKeyedContainer, NestedUnkeyedContainer, UnkeyedContainer,
};
use crate::encode::XmiEncode;
use crate::encoder::{self, Encoder};
use crate::error::{Result, XmiError};
use crate::scalar::{bool_to_string, names, short_type_name};

/// Serialize a value into XMI document bytes.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Greeting {
///     name: String,
/// }
///
/// let bytes = helios_xmi::ser::to_vec(&Greeting { name: "hi".into() }).unwrap();
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.contains("<name type=\"String\">\nhi\n</name>"));
/// ```
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    encoder::to_xmi_vec(&Serde(value))
}

/// Serialize a value into XMI document bytes under `config`.
pub fn to_vec_with_config<T>(value: &T, config: &XmiConfig) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    encoder::to_xmi_vec_with_config(&Serde(value), config)
}

/// Serialize a value into XMI document text.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    encoder::to_xmi_string(&Serde(value))
}

/// Serialize a value into XMI document text under `config`.
pub fn to_string_with_config<T>(value: &T, config: &XmiConfig) -> Result<String>
where
    T: Serialize + ?Sized,
{
    encoder::to_xmi_string_with_config(&Serde(value), config)
}

/// Serialize a value into XMI document bytes written to `writer`.
pub fn to_writer<T, W>(value: &T, writer: W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    encoder::to_xmi_writer(&Serde(value), writer)
}

/// Serialize a value under `config` and write the document bytes to `writer`.
pub fn to_writer_with_config<T, W>(value: &T, writer: W, config: &XmiConfig) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    encoder::to_xmi_writer_with_config(&Serde(value), writer, config)
}

/// Serialize a value into its bare fragment.
pub fn to_fragment<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    encoder::to_xmi_fragment(&Serde(value))
}

/// Adapts a `Serialize` value to [`XmiEncode`].
///
/// Useful for embedding serde-described values inside hand-written
/// `XmiEncode` implementations.
pub struct Serde<'a, T: ?Sized>(pub &'a T);

impl<T> XmiEncode for Serde<'_, T>
where
    T: Serialize + ?Sized,
{
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.0.serialize(XmiSerializer::new(encoder))
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        match shape_of(self.0) {
            Ok(shape) => Cow::Borrowed(shape.type_name),
            Err(_) => Cow::Borrowed(short_type_name(std::any::type_name::<T>())),
        }
    }
}

/// A `serde::Serializer` writing into the container of one [`Encoder`].
pub struct XmiSerializer<'a, 'c> {
    encoder: &'a mut Encoder<'c>,
}

impl<'a, 'c> XmiSerializer<'a, 'c> {
    pub fn new(encoder: &'a mut Encoder<'c>) -> Self {
        Self { encoder }
    }
}

impl<'a, 'c> ser::Serializer for XmiSerializer<'a, 'c> {
    type Ok = ();
    type Error = XmiError;

    type SerializeSeq = SeqSerializer<'a, 'c>;
    type SerializeTuple = SeqSerializer<'a, 'c>;
    type SerializeTupleStruct = SeqSerializer<'a, 'c>;
    type SerializeTupleVariant = TupleVariantSerializer<'a, 'c>;
    type SerializeMap = MapSerializer<'a, 'c>;
    type SerializeStruct = StructSerializer<'a, 'c>;
    type SerializeStructVariant = StructVariantSerializer<'a, 'c>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.encoder.single_value_container().encode_bool(v);
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.encoder.single_value_container().encode_i8(v);
        Ok(())
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.encoder.single_value_container().encode_i16(v);
        Ok(())
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.encoder.single_value_container().encode_i32(v);
        Ok(())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.encoder.single_value_container().encode_i64(v);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.encoder.single_value_container().encode_u8(v);
        Ok(())
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.encoder.single_value_container().encode_u16(v);
        Ok(())
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.encoder.single_value_container().encode_u32(v);
        Ok(())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.encoder.single_value_container().encode_u64(v);
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.encoder.single_value_container().encode_f32(v);
        Ok(())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.encoder.single_value_container().encode_f64(v);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.encoder.single_value_container().encode_str(v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        let container = self.encoder.unkeyed_container();
        for byte in v {
            container.encode_u8(*byte);
        }
        Ok(())
    }

    fn serialize_none(self) -> Result<()> {
        self.encoder.single_value_container().encode_nil();
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.serialize_none()
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_none()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.encoder
            .keyed_container()
            .encode(variant, &Serde(value))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqSerializer {
            container: self.encoder.unkeyed_container(),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(TupleVariantSerializer {
            container: self
                .encoder
                .keyed_container()
                .nested_unkeyed_container(variant),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            container: self.encoder.keyed_container(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        let skip_none_fields = self.encoder.config().skip_none_fields;
        Ok(StructSerializer {
            container: self.encoder.keyed_container(),
            skip_none_fields,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        let skip_none_fields = self.encoder.config().skip_none_fields;
        Ok(StructVariantSerializer {
            container: self.encoder.keyed_container().nested_keyed_container(variant),
            skip_none_fields,
        })
    }
}

/// Serializer for sequences, tuples and tuple structs.
pub struct SeqSerializer<'a, 'c> {
    container: &'a mut UnkeyedContainer<'c>,
}

impl ser::SerializeSeq for SeqSerializer<'_, '_> {
    type Ok = ();
    type Error = XmiError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.container.encode(&Serde(value))
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTuple for SeqSerializer<'_, '_> {
    type Ok = ();
    type Error = XmiError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for SeqSerializer<'_, '_> {
    type Ok = ();
    type Error = XmiError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Serializer for tuple variants: a sequence stored under the variant name.
pub struct TupleVariantSerializer<'a, 'c> {
    container: NestedUnkeyedContainer<'a, 'c>,
}

impl ser::SerializeTupleVariant for TupleVariantSerializer<'_, '_> {
    type Ok = ();
    type Error = XmiError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.container.encode(&Serde(value))
    }

    // The nested container commits to the record when dropped here.
    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Serializer for maps with scalar keys.
pub struct MapSerializer<'a, 'c> {
    container: &'a mut KeyedContainer<'c>,
    current_key: Option<String>,
}

impl ser::SerializeMap for MapSerializer<'_, '_> {
    type Ok = ();
    type Error = XmiError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| XmiError::Custom("map value serialized before its key".to_string()))?;
        self.container.encode(&key, &Serde(value))
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

fn serialize_struct_field<T>(
    container: &mut KeyedContainer<'_>,
    skip_none_fields: bool,
    key: &'static str,
    value: &T,
) -> Result<()>
where
    T: ?Sized + Serialize,
{
    if skip_none_fields && shape_of(value)?.is_none {
        return Ok(());
    }
    container.encode(key, &Serde(value))
}

/// Serializer for structs.
pub struct StructSerializer<'a, 'c> {
    container: &'a mut KeyedContainer<'c>,
    skip_none_fields: bool,
}

impl ser::SerializeStruct for StructSerializer<'_, '_> {
    type Ok = ();
    type Error = XmiError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serialize_struct_field(self.container, self.skip_none_fields, key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Serializer for struct variants: a record stored under the variant name.
pub struct StructVariantSerializer<'a, 'c> {
    container: NestedKeyedContainer<'a, 'c>,
    skip_none_fields: bool,
}

impl ser::SerializeStructVariant for StructVariantSerializer<'_, '_> {
    type Ok = ();
    type Error = XmiError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serialize_struct_field(&mut self.container, self.skip_none_fields, key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

fn map_key_must_be_scalar() -> XmiError {
    XmiError::Custom("XMI map keys must be scalars".to_string())
}

/// Renders a map key to the text used as the field name.
struct MapKeySerializer;

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = XmiError;
    type SerializeSeq = ser::Impossible<String, XmiError>;
    type SerializeTuple = ser::Impossible<String, XmiError>;
    type SerializeTupleStruct = ser::Impossible<String, XmiError>;
    type SerializeTupleVariant = ser::Impossible<String, XmiError>;
    type SerializeMap = ser::Impossible<String, XmiError>;
    type SerializeStruct = ser::Impossible<String, XmiError>;
    type SerializeStructVariant = ser::Impossible<String, XmiError>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(bool_to_string(v).to_string())
    }
    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_f32(self, v: f32) -> Result<String> {
        Ok(format!("{v:?}"))
    }
    fn serialize_f64(self, v: f64) -> Result<String> {
        Ok(format!("{v:?}"))
    }
    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_none(self) -> Result<String> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<String> {
        value.serialize(self)
    }
    fn serialize_unit(self) -> Result<String> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }
    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String> {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(map_key_must_be_scalar())
    }
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(map_key_must_be_scalar())
    }
}

/// What a shallow look at a value reveals: its type name and whether it is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shape {
    type_name: &'static str,
    is_none: bool,
}

impl Shape {
    fn named(type_name: &'static str) -> Self {
        Self {
            type_name,
            is_none: false,
        }
    }
}

fn shape_of<T: ?Sized + Serialize>(value: &T) -> Result<Shape> {
    value.serialize(ShapeReader)
}

/// Reports a value's shape without descending into its fields or elements.
struct ShapeReader;

/// Ignores the contents of a compound value and returns its shape.
struct ShapeCompound(Shape);

impl ser::Serializer for ShapeReader {
    type Ok = Shape;
    type Error = XmiError;
    type SerializeSeq = ShapeCompound;
    type SerializeTuple = ShapeCompound;
    type SerializeTupleStruct = ShapeCompound;
    type SerializeTupleVariant = ShapeCompound;
    type SerializeMap = ShapeCompound;
    type SerializeStruct = ShapeCompound;
    type SerializeStructVariant = ShapeCompound;

    fn serialize_bool(self, _v: bool) -> Result<Shape> {
        Ok(Shape::named(names::BOOL))
    }
    fn serialize_i8(self, _v: i8) -> Result<Shape> {
        Ok(Shape::named(names::INT8))
    }
    fn serialize_i16(self, _v: i16) -> Result<Shape> {
        Ok(Shape::named(names::INT16))
    }
    fn serialize_i32(self, _v: i32) -> Result<Shape> {
        Ok(Shape::named(names::INT32))
    }
    fn serialize_i64(self, _v: i64) -> Result<Shape> {
        Ok(Shape::named(names::INT64))
    }
    fn serialize_u8(self, _v: u8) -> Result<Shape> {
        Ok(Shape::named(names::UINT8))
    }
    fn serialize_u16(self, _v: u16) -> Result<Shape> {
        Ok(Shape::named(names::UINT16))
    }
    fn serialize_u32(self, _v: u32) -> Result<Shape> {
        Ok(Shape::named(names::UINT32))
    }
    fn serialize_u64(self, _v: u64) -> Result<Shape> {
        Ok(Shape::named(names::UINT64))
    }
    fn serialize_f32(self, _v: f32) -> Result<Shape> {
        Ok(Shape::named(names::FLOAT))
    }
    fn serialize_f64(self, _v: f64) -> Result<Shape> {
        Ok(Shape::named(names::DOUBLE))
    }
    fn serialize_char(self, _v: char) -> Result<Shape> {
        Ok(Shape::named(names::STRING))
    }
    fn serialize_str(self, _v: &str) -> Result<Shape> {
        Ok(Shape::named(names::STRING))
    }
    fn serialize_bytes(self, _v: &[u8]) -> Result<Shape> {
        Ok(Shape::named(names::ARRAY))
    }
    fn serialize_none(self) -> Result<Shape> {
        Ok(Shape {
            type_name: names::NIL,
            is_none: true,
        })
    }
    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Shape> {
        // Only the outermost option decides `is_none`; `Some(None)` is present.
        let inner = value.serialize(self)?;
        Ok(Shape {
            is_none: false,
            ..inner
        })
    }
    fn serialize_unit(self) -> Result<Shape> {
        Ok(Shape::named(names::NIL))
    }
    fn serialize_unit_struct(self, name: &'static str) -> Result<Shape> {
        Ok(Shape::named(name))
    }
    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Shape> {
        Ok(Shape::named(name))
    }
    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _value: &T,
    ) -> Result<Shape> {
        Ok(Shape::named(name))
    }
    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Shape> {
        Ok(Shape::named(name))
    }
    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(ShapeCompound(Shape::named(names::ARRAY)))
    }
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(ShapeCompound(Shape::named(names::TUPLE)))
    }
    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(ShapeCompound(Shape::named(name)))
    }
    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(ShapeCompound(Shape::named(name)))
    }
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(ShapeCompound(Shape::named(names::DICTIONARY)))
    }
    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(ShapeCompound(Shape::named(name)))
    }
    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(ShapeCompound(Shape::named(name)))
    }
}

impl ser::SerializeSeq for ShapeCompound {
    type Ok = Shape;
    type Error = XmiError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }
    fn end(self) -> Result<Shape> {
        Ok(self.0)
    }
}

impl ser::SerializeTuple for ShapeCompound {
    type Ok = Shape;
    type Error = XmiError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }
    fn end(self) -> Result<Shape> {
        Ok(self.0)
    }
}

impl ser::SerializeTupleStruct for ShapeCompound {
    type Ok = Shape;
    type Error = XmiError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }
    fn end(self) -> Result<Shape> {
        Ok(self.0)
    }
}

impl ser::SerializeTupleVariant for ShapeCompound {
    type Ok = Shape;
    type Error = XmiError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }
    fn end(self) -> Result<Shape> {
        Ok(self.0)
    }
}

impl ser::SerializeMap for ShapeCompound {
    type Ok = Shape;
    type Error = XmiError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, _key: &T) -> Result<()> {
        Ok(())
    }
    fn serialize_value<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }
    fn end(self) -> Result<Shape> {
        Ok(self.0)
    }
}

impl ser::SerializeStruct for ShapeCompound {
    type Ok = Shape;
    type Error = XmiError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<()> {
        Ok(())
    }
    fn end(self) -> Result<Shape> {
        Ok(self.0)
    }
}

impl ser::SerializeStructVariant for ShapeCompound {
    type Ok = Shape;
    type Error = XmiError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<()> {
        Ok(())
    }
    fn end(self) -> Result<Shape> {
        Ok(self.0)
    }
}
