//! Tag synthesis and document assembly.
//!
//! Everything here is plain string concatenation. Text is embedded verbatim:
//! `<`, `&` and `"` inside values or names are not escaped, and element tags
//! close with `<Type/>` rather than `</Type>`. Existing consumers read that
//! exact shape, so both are kept as-is; documents containing sequences are
//! therefore not well-formed XML.

use crate::config::XmiConfig;

/// Key used by `super_encoder()` when the caller does not pick one.
pub const SUPER_KEY: &str = "super";

/// Closing root element of every document.
pub const ROOT_CLOSE: &str = "</xmi:XMI>";

/// Wraps the rendered text of a record field.
///
/// Produces `<key type="TypeName">\ninner\n</key>`.
pub fn field_tag(key: &str, type_name: &str, inner: &str) -> String {
    let mut tag =
        String::with_capacity(2 * key.len() + type_name.len() + inner.len() + 16);
    tag.push('<');
    tag.push_str(key);
    tag.push_str(" type=\"");
    tag.push_str(type_name);
    tag.push_str("\">\n");
    tag.push_str(inner);
    tag.push_str("\n</");
    tag.push_str(key);
    tag.push('>');
    tag
}

/// Wraps the rendered text of a sequence element.
///
/// Produces `<TypeName index="N" type="TypeName">inner<TypeName/>`.
pub fn element_tag(index: usize, type_name: &str, inner: &str) -> String {
    format!("<{type_name} index=\"{index}\" type=\"{type_name}\">{inner}<{type_name}/>")
}

/// The XML declaration line, naming the configured byte encoding.
pub fn xml_declaration(config: &XmiConfig) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"{}\"?>",
        config.encoding.label()
    )
}

/// The opening root element line.
pub fn root_open(config: &XmiConfig) -> String {
    format!("<xmi:XMI xmi:version=\"{}\">", config.xmi_version)
}

/// Joins declaration, root element and body into the document text.
pub fn document(config: &XmiConfig, body: &str) -> String {
    [
        xml_declaration(config).as_str(),
        root_open(config).as_str(),
        body,
        ROOT_CLOSE,
    ]
    .join("\n")
}
