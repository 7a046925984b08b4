//! Keyed container: record fields stored by name, emitted in key order.

use std::collections::BTreeMap;

use tracing::trace;

use super::{
    CommitTarget, NestedKeyedContainer, NestedUnkeyedContainer, SuperEncoder, UnkeyedContainer,
};
use crate::config::XmiConfig;
use crate::encode::XmiEncode;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::path::Path;
use crate::scalar::Scalar;
use crate::tag::{self, SUPER_KEY};

/// Accumulates one tagged fragment per field name.
///
/// Writing a key a second time replaces the earlier fragment. Finalization
/// orders fragments by the byte order of their keys, so output never depends
/// on the order fields were written in.
#[derive(Debug)]
pub struct KeyedContainer<'c> {
    config: &'c XmiConfig,
    path: Path,
    entries: BTreeMap<String, String>,
}

macro_rules! keyed_scalar_methods {
    ($($method:ident($ty:ty) => $ctor:ident),* $(,)?) => {
        $(
            pub fn $method(&mut self, key: &str, value: $ty) {
                self.store_scalar(key, Scalar::$ctor(value));
            }
        )*
    };
}

impl<'c> KeyedContainer<'c> {
    pub(crate) fn new(config: &'c XmiConfig, path: Path) -> Self {
        Self {
            config,
            path,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn store(&mut self, key: &str, type_name: &str, inner: &str) {
        let fragment = tag::field_tag(key, type_name, inner);
        if self.entries.insert(key.to_string(), fragment).is_some() {
            trace!(path = %self.path, key, "replaced earlier XMI field");
        }
    }

    fn store_scalar(&mut self, key: &str, scalar: Scalar) {
        self.store(key, scalar.type_name, &scalar.text);
    }

    pub fn encode_nil(&mut self, key: &str) {
        self.store_scalar(key, Scalar::nil());
    }

    pub fn encode_bool(&mut self, key: &str, value: bool) {
        self.store_scalar(key, Scalar::bool(value));
    }

    pub fn encode_str(&mut self, key: &str, value: &str) {
        self.store_scalar(key, Scalar::string(value));
    }

    keyed_scalar_methods! {
        encode_f32(f32) => f32,
        encode_f64(f64) => f64,
        encode_isize(isize) => isize,
        encode_i8(i8) => i8,
        encode_i16(i16) => i16,
        encode_i32(i32) => i32,
        encode_i64(i64) => i64,
        encode_usize(usize) => usize,
        encode_u8(u8) => u8,
        encode_u16(u16) => u16,
        encode_u32(u32) => u32,
        encode_u64(u64) => u64,
    }

    /// Encodes any value under `key` through a fresh encoder scoped to `path + key`.
    ///
    /// The field is typed with the value's own [`XmiEncode::xmi_type_name`], not the
    /// declared type of the field.
    pub fn encode<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: XmiEncode + ?Sized,
    {
        let type_name = value.xmi_type_name();
        let inner = Encoder::scoped(self.config, self.path.join_key(key)).encode(value)?;
        self.store(key, &type_name, &inner);
        Ok(())
    }

    /// Encodes `value` under `key` when present; absent values leave no field.
    pub fn encode_if_present<T>(&mut self, key: &str, value: Option<&T>) -> Result<()>
    where
        T: XmiEncode + ?Sized,
    {
        match value {
            Some(value) => self.encode(key, value),
            None => Ok(()),
        }
    }

    /// Opens a keyed container stored under `key` once the guard is dropped.
    pub fn nested_keyed_container(&mut self, key: &str) -> NestedKeyedContainer<'_, 'c> {
        let container = KeyedContainer::new(self.config, self.path.join_key(key));
        NestedKeyedContainer::new(self.field_target(key), container)
    }

    /// Opens an unkeyed container stored under `key` once the guard is dropped.
    pub fn nested_unkeyed_container(&mut self, key: &str) -> NestedUnkeyedContainer<'_, 'c> {
        let container = UnkeyedContainer::new(self.config, self.path.join_key(key));
        NestedUnkeyedContainer::new(self.field_target(key), container)
    }

    /// A fresh encoder whose output is stored under the `super` key.
    pub fn super_encoder(&mut self) -> SuperEncoder<'_, 'c> {
        self.super_encoder_for_key(SUPER_KEY)
    }

    /// A fresh encoder whose output is stored under `key`.
    pub fn super_encoder_for_key(&mut self, key: &str) -> SuperEncoder<'_, 'c> {
        let encoder = Encoder::scoped(self.config, self.path.join_key(key));
        SuperEncoder::new(self.field_target(key), encoder)
    }

    fn field_target(&mut self, key: &str) -> CommitTarget<'_, 'c> {
        CommitTarget::Field {
            parent: self,
            key: key.to_string(),
        }
    }

    /// Joins the stored fragments in key order, separated by newlines.
    pub(crate) fn take_fragment(&mut self) -> String {
        std::mem::take(&mut self.entries)
            .into_values()
            .collect::<Vec<_>>()
            .join("\n")
    }
}
