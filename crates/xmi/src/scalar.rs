//! Scalar rendering and the XMI type-name vocabulary.

/// XMI type names written in `type` attributes.
pub mod names {
    pub const NIL: &str = "nil";
    pub const BOOL: &str = "Bool";
    pub const STRING: &str = "String";
    pub const FLOAT: &str = "Float";
    pub const DOUBLE: &str = "Double";
    pub const INT: &str = "Int";
    pub const INT8: &str = "Int8";
    pub const INT16: &str = "Int16";
    pub const INT32: &str = "Int32";
    pub const INT64: &str = "Int64";
    pub const UINT: &str = "UInt";
    pub const UINT8: &str = "UInt8";
    pub const UINT16: &str = "UInt16";
    pub const UINT32: &str = "UInt32";
    pub const UINT64: &str = "UInt64";

    /// Sequences without a more specific name.
    pub const ARRAY: &str = "Array";
    /// Keyed containers without a more specific name.
    pub const DICTIONARY: &str = "Dictionary";
    /// Fixed-length heterogeneous sequences.
    pub const TUPLE: &str = "Tuple";
}

/// Rendered text of the nil value.
pub const NIL_TEXT: &str = "nil";

/// A rendered scalar together with its XMI type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scalar {
    pub(crate) type_name: &'static str,
    pub(crate) text: String,
}

macro_rules! integer_constructors {
    ($($ctor:ident: $ty:ty => $name:ident),* $(,)?) => {
        $(
            pub(crate) fn $ctor(value: $ty) -> Self {
                Self::new(names::$name, value.to_string())
            }
        )*
    };
}

impl Scalar {
    fn new(type_name: &'static str, text: String) -> Self {
        Self { type_name, text }
    }

    pub(crate) fn nil() -> Self {
        Self::new(names::NIL, NIL_TEXT.to_string())
    }

    pub(crate) fn bool(value: bool) -> Self {
        Self::new(names::BOOL, bool_to_string(value).to_string())
    }

    pub(crate) fn string(value: &str) -> Self {
        Self::new(names::STRING, value.to_string())
    }

    // Debug keeps the shortest round-trip digits at the value's own precision
    // and always shows a fractional part.
    pub(crate) fn f32(value: f32) -> Self {
        Self::new(names::FLOAT, format!("{value:?}"))
    }

    pub(crate) fn f64(value: f64) -> Self {
        Self::new(names::DOUBLE, format!("{value:?}"))
    }

    integer_constructors! {
        isize: isize => INT,
        i8: i8 => INT8,
        i16: i16 => INT16,
        i32: i32 => INT32,
        i64: i64 => INT64,
        usize: usize => UINT,
        u8: u8 => UINT8,
        u16: u16 => UINT16,
        u32: u32 => UINT32,
        u64: u64 => UINT64,
    }
}

/// Converts a boolean to its rendered text.
pub fn bool_to_string(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Reduces a Rust type path to a bare XMI type name.
///
/// Generic arguments and module paths are dropped:
/// `my_app::model::Wrapper<alloc::string::String>` becomes `Wrapper`.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
