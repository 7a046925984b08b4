//! The self-description trait and its implementations for std types.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

use crate::encoder::Encoder;
use crate::error::{Result, XmiError};
use crate::scalar::{names, short_type_name};

/// A value that can describe itself to an [`Encoder`].
///
/// `encode` must request exactly one container from the encoder (record,
/// sequence, or single value) and populate it. Composite fields and elements
/// are handed back to the containers, which encode them through fresh
/// encoders.
///
/// `xmi_type_name` is the name written in `type` attributes wherever this value
/// is embedded. The default is the Rust type name without module path or
/// generic arguments; override it to choose a different XMI name.
///
/// The trait can be derived with `#[derive(XmiEncode)]`.
///
/// ```
/// use helios_xmi::{Encoder, Result, XmiEncode, to_xmi_fragment};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl XmiEncode for Point {
///     fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
///         let record = encoder.keyed_container();
///         record.encode_i32("y", self.y);
///         record.encode_i32("x", self.x);
///         Ok(())
///     }
/// }
///
/// assert_eq!(
///     to_xmi_fragment(&Point { x: 1, y: 2 }).unwrap(),
///     "<x type=\"Int32\">\n1\n</x>\n<y type=\"Int32\">\n2\n</y>"
/// );
/// ```
pub trait XmiEncode {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()>;

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(short_type_name(std::any::type_name::<Self>()))
    }
}

macro_rules! scalar_impls {
    ($($ty:ty => $method:ident, $name:ident;)*) => {
        $(
            impl XmiEncode for $ty {
                fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
                    encoder.single_value_container().$method(*self);
                    Ok(())
                }

                fn xmi_type_name(&self) -> Cow<'_, str> {
                    Cow::Borrowed(names::$name)
                }
            }
        )*
    };
}

scalar_impls! {
    bool => encode_bool, BOOL;
    f32 => encode_f32, FLOAT;
    f64 => encode_f64, DOUBLE;
    isize => encode_isize, INT;
    i8 => encode_i8, INT8;
    i16 => encode_i16, INT16;
    i32 => encode_i32, INT32;
    i64 => encode_i64, INT64;
    usize => encode_usize, UINT;
    u8 => encode_u8, UINT8;
    u16 => encode_u16, UINT16;
    u32 => encode_u32, UINT32;
    u64 => encode_u64, UINT64;
}

impl XmiEncode for str {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.single_value_container().encode_str(self);
        Ok(())
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(names::STRING)
    }
}

impl XmiEncode for String {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.as_str().encode(encoder)
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(names::STRING)
    }
}

impl XmiEncode for char {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut buf = [0u8; 4];
        encoder
            .single_value_container()
            .encode_str(self.encode_utf8(&mut buf));
        Ok(())
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(names::STRING)
    }
}

impl<T: XmiEncode> XmiEncode for Option<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        match self {
            Some(value) => value.encode(encoder),
            None => {
                encoder.single_value_container().encode_nil();
                Ok(())
            }
        }
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.xmi_type_name(),
            None => Cow::Borrowed(names::NIL),
        }
    }
}

fn encode_elements<'v, T, I>(encoder: &mut Encoder<'_>, values: I) -> Result<()>
where
    T: XmiEncode + 'v,
    I: IntoIterator<Item = &'v T>,
{
    encoder.unkeyed_container().encode_all(values)
}

impl<T: XmiEncode> XmiEncode for [T] {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encode_elements(encoder, self)
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(names::ARRAY)
    }
}

impl<T: XmiEncode, const N: usize> XmiEncode for [T; N] {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encode_elements(encoder, self)
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(names::ARRAY)
    }
}

impl<T: XmiEncode> XmiEncode for Vec<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encode_elements(encoder, self)
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(names::ARRAY)
    }
}

impl<T: XmiEncode> XmiEncode for VecDeque<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encode_elements(encoder, self)
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(names::ARRAY)
    }
}

fn encode_entries<'v, K, V, I>(encoder: &mut Encoder<'_>, entries: I) -> Result<()>
where
    K: Display + 'v,
    V: XmiEncode + 'v,
    I: IntoIterator<Item = (&'v K, &'v V)>,
{
    // Distinct keys may share a rendering; reject that instead of letting
    // iteration order pick the surviving value.
    let mut rendered = BTreeMap::new();
    for (key, value) in entries {
        let text = key.to_string();
        if rendered.contains_key(&text) {
            return Err(XmiError::Custom(format!(
                "map keys render to duplicate text `{text}`"
            )));
        }
        rendered.insert(text, value);
    }

    let record = encoder.keyed_container();
    for (key, value) in rendered {
        record.encode(&key, value)?;
    }
    Ok(())
}

impl<K: Display, V: XmiEncode> XmiEncode for BTreeMap<K, V> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encode_entries(encoder, self)
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(names::DICTIONARY)
    }
}

impl<K: Display, V: XmiEncode, S> XmiEncode for HashMap<K, V, S> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encode_entries(encoder, self)
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(names::DICTIONARY)
    }
}

macro_rules! forwarding_impls {
    ($($wrapper:ident),*) => {
        $(
            impl<T: XmiEncode + ?Sized> XmiEncode for $wrapper<T> {
                fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
                    (**self).encode(encoder)
                }

                fn xmi_type_name(&self) -> Cow<'_, str> {
                    (**self).xmi_type_name()
                }
            }
        )*
    };
}

forwarding_impls!(Box, Rc, Arc);

impl<T: XmiEncode + ?Sized> XmiEncode for &T {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        (**self).encode(encoder)
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        (**self).xmi_type_name()
    }
}
