//! Unkeyed container: ordered elements tagged with their position.

use super::{
    CommitTarget, KeyedContainer, NestedKeyedContainer, NestedUnkeyedContainer, SuperEncoder,
};
use crate::config::XmiConfig;
use crate::encode::XmiEncode;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::path::Path;
use crate::scalar::Scalar;
use crate::tag;

/// Accumulates tagged elements in append order.
///
/// Each element carries the index the container held before the append, so
/// indices start at zero, never repeat, and always equal the element count
/// at the time of the append.
#[derive(Debug)]
pub struct UnkeyedContainer<'c> {
    config: &'c XmiConfig,
    path: Path,
    elements: Vec<String>,
}

macro_rules! unkeyed_scalar_methods {
    ($($method:ident($ty:ty) => $ctor:ident),* $(,)?) => {
        $(
            pub fn $method(&mut self, value: $ty) {
                self.push_scalar(Scalar::$ctor(value));
            }
        )*
    };
}

impl<'c> UnkeyedContainer<'c> {
    pub(crate) fn new(config: &'c XmiConfig, path: Path) -> Self {
        Self {
            config,
            path,
            elements: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of elements appended so far, which is also the next index.
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn push(&mut self, type_name: &str, inner: &str) {
        let index = self.count();
        self.elements.push(tag::element_tag(index, type_name, inner));
    }

    fn push_scalar(&mut self, scalar: Scalar) {
        self.push(scalar.type_name, &scalar.text);
    }

    pub fn encode_nil(&mut self) {
        self.push_scalar(Scalar::nil());
    }

    pub fn encode_bool(&mut self, value: bool) {
        self.push_scalar(Scalar::bool(value));
    }

    pub fn encode_str(&mut self, value: &str) {
        self.push_scalar(Scalar::string(value));
    }

    unkeyed_scalar_methods! {
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

    /// Appends any value through a fresh encoder scoped to `path + index`.
    pub fn encode<T>(&mut self, value: &T) -> Result<()>
    where
        T: XmiEncode + ?Sized,
    {
        let index = self.count();
        let type_name = value.xmi_type_name();
        let inner = Encoder::scoped(self.config, self.path.join_index(index)).encode(value)?;
        self.push(&type_name, &inner);
        Ok(())
    }

    /// Appends every item of an iterator in order.
    pub fn encode_all<'v, T, I>(&mut self, values: I) -> Result<()>
    where
        T: XmiEncode + ?Sized + 'v,
        I: IntoIterator<Item = &'v T>,
    {
        values.into_iter().try_for_each(|value| self.encode(value))
    }

    /// Opens a keyed container appended as the next element once the guard is dropped.
    pub fn nested_keyed_container(&mut self) -> NestedKeyedContainer<'_, 'c> {
        let container = KeyedContainer::new(self.config, self.path.clone());
        NestedKeyedContainer::new(CommitTarget::Element { parent: self }, container)
    }

    /// Opens an unkeyed container appended as the next element once the guard is dropped.
    pub fn nested_unkeyed_container(&mut self) -> NestedUnkeyedContainer<'_, 'c> {
        let container = UnkeyedContainer::new(self.config, self.path.clone());
        NestedUnkeyedContainer::new(CommitTarget::Element { parent: self }, container)
    }

    /// A fresh encoder positioned at the current index, appended once dropped.
    pub fn super_encoder(&mut self) -> SuperEncoder<'_, 'c> {
        let encoder = Encoder::scoped(self.config, self.path.join_index(self.count()));
        SuperEncoder::new(CommitTarget::Element { parent: self }, encoder)
    }

    /// Concatenates the elements in append order without a separator.
    pub(crate) fn take_fragment(&mut self) -> String {
        std::mem::take(&mut self.elements).concat()
    }
}
