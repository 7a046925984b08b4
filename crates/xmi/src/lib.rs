//! # Helios XMI Encoding
//!
//! This crate turns arbitrary in-memory value graphs into XMI-style tagged text
//! documents.
//!
//! ## Features
//!
//! - **Self-describing values**: a value implements [`XmiEncode`] (by hand or with
//!   `#[derive(XmiEncode)]`) and tells an [`Encoder`] whether it is a record, a
//!   sequence or a single scalar.
//! - **Serde bridge**: anything implementing `serde::Serialize` can be encoded
//!   through [`ser::to_vec`] and friends without a dedicated implementation.
//! - **Deterministic output**: record fields are emitted in key order, sequence
//!   elements in append order, independent of the order values were written.
//!
//! ## Architecture
//!
//! Every composite value is encoded by a fresh [`Encoder`] that hands out exactly
//! one container:
//!
//! - [`KeyedContainer`]: fields tagged `<key type="T">…</key>`
//! - [`UnkeyedContainer`]: elements tagged `<T index="N" type="T">…<T/>`
//! - [`SingleValueContainer`]: raw scalar text
//!
//! Nested containers and super encoders are guards that commit their text to the
//! parent container when dropped. The finished body is wrapped in an XML
//! declaration and an `xmi:XMI` root element, then converted to bytes with the
//! configured [`TextEncoding`].
//!
//! ## Output shape
//!
//! | Value | Fragment |
//! |-------|----------|
//! | record field `name: "hi"` | `<name type="String">\nhi\n</name>` |
//! | element 0 of `[7isize]` | `<Int index="0" type="Int">7<Int/>` |
//! | `None` | `nil` |
//!
//! Text is not escaped. Element closing tags keep the historical `<T/>` form,
//! so only documents made of records and scalars are well-formed XML.
//!
//! ## Examples
//!
//! ```
//! use helios_xmi::{XmiEncode, to_xmi_string};
//!
//! #[derive(XmiEncode)]
//! struct Person {
//!     name: String,
//!     age: u8,
//! }
//!
//! let text = to_xmi_string(&Person { name: "Ada".into(), age: 36 }).unwrap();
//! assert_eq!(
//!     text,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
//!      <xmi:XMI xmi:version=\"2.0\">\n\
//!      <age type=\"UInt8\">\n36\n</age>\n\
//!      <name type=\"String\">\nAda\n</name>\n\
//!      </xmi:XMI>"
//! );
//! ```

pub mod config;
pub mod container;
pub mod encode;
pub mod encoder;
pub mod error;
pub mod path;
pub mod scalar;
pub mod ser;
pub mod tag;

pub use config::{TextEncoding, XmiConfig};
pub use container::{
    ContainerKind, KeyedContainer, NestedKeyedContainer, NestedUnkeyedContainer,
    SingleValueContainer, SuperEncoder, UnkeyedContainer,
};
pub use encode::XmiEncode;
pub use encoder::{
    Encoder, to_xmi_fragment, to_xmi_string, to_xmi_string_with_config, to_xmi_vec,
    to_xmi_vec_with_config, to_xmi_writer, to_xmi_writer_with_config,
};
pub use error::{Result, XmiError};
pub use path::{Path, PathSegment};
pub use scalar::names;

// Derive macro, sharing its name with the trait as serde does.
pub use helios_xmi_macro::XmiEncode;
