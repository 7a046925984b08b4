//! Single-value container: the terminal node of recursion.

use crate::path::Path;
use crate::scalar::{Scalar, names};

/// Holds the rendered text of exactly one scalar.
///
/// A later `encode_*` call replaces the earlier value. The text is produced
/// without any wrapping tag; the parent container decides how to wrap it.
#[derive(Debug)]
pub struct SingleValueContainer {
    path: Path,
    value: Option<Scalar>,
}

macro_rules! single_scalar_methods {
    ($($method:ident($ty:ty) => $ctor:ident),* $(,)?) => {
        $(
            pub fn $method(&mut self, value: $ty) {
                self.store(Scalar::$ctor(value));
            }
        )*
    };
}

impl SingleValueContainer {
    pub(crate) fn new(path: Path) -> Self {
        Self { path, value: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// XMI type name of the held scalar, `nil` while nothing has been encoded.
    pub fn type_name(&self) -> &'static str {
        self.value
            .as_ref()
            .map_or(names::NIL, |scalar| scalar.type_name)
    }

    fn store(&mut self, scalar: Scalar) {
        self.value = Some(scalar);
    }

    pub fn encode_nil(&mut self) {
        self.store(Scalar::nil());
    }

    pub fn encode_bool(&mut self, value: bool) {
        self.store(Scalar::bool(value));
    }

    pub fn encode_str(&mut self, value: &str) {
        self.store(Scalar::string(value));
    }

    single_scalar_methods! {
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

    /// Takes the rendered text, leaving the container empty.
    ///
    /// An untouched container yields empty text.
    pub(crate) fn take_fragment(&mut self) -> String {
        self.value
            .take()
            .map(|scalar| scalar.text)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_raw_text() {
        let mut container = SingleValueContainer::new(Path::root());
        container.encode_i32(42);
        assert_eq!(container.type_name(), "Int32");
        assert_eq!(container.take_fragment(), "42");
    }

    #[test]
    fn test_second_encode_overwrites() {
        let mut container = SingleValueContainer::new(Path::root());
        container.encode_str("first");
        container.encode_bool(true);
        assert_eq!(container.type_name(), "Bool");
        assert_eq!(container.take_fragment(), "true");
    }

    #[test]
    fn test_empty_container() {
        let mut container = SingleValueContainer::new(Path::root());
        assert_eq!(container.type_name(), "nil");
        assert_eq!(container.take_fragment(), "");
    }

    #[test]
    fn test_nil() {
        let mut container = SingleValueContainer::new(Path::root().join_key("x"));
        container.encode_nil();
        assert_eq!(container.path().to_string(), "$.x");
        assert_eq!(container.take_fragment(), "nil");
    }
}
