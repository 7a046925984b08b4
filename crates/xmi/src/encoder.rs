//! The driver of one encoding pass.
//!
//! An [`Encoder`] lets exactly one value describe itself into exactly one
//! container, then reads that container's finalized text. Nested composite
//! values are encoded by brand-new encoders created by the containers, so no
//! state is shared between the levels of the tree or between top-level calls.

use std::io::Write;

use tracing::{debug, trace_span};

use crate::config::XmiConfig;
use crate::container::{ContainerKind, KeyedContainer, SingleValueContainer, UnkeyedContainer};
use crate::encode::XmiEncode;
use crate::error::Result;
use crate::path::Path;
use crate::scalar::names;
use crate::tag;

/// Encode a value into XMI document bytes using the default configuration.
///
/// # Examples
///
/// ```
/// use helios_xmi::to_xmi_vec;
///
/// let bytes = to_xmi_vec(&vec![7isize]).unwrap();
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.contains("<Int index=\"0\" type=\"Int\">7<Int/>"));
/// ```
pub fn to_xmi_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: XmiEncode + ?Sized,
{
    to_xmi_vec_with_config(value, &XmiConfig::default())
}

/// Encode a value into XMI document bytes under `config`.
pub fn to_xmi_vec_with_config<T>(value: &T, config: &XmiConfig) -> Result<Vec<u8>>
where
    T: XmiEncode + ?Sized,
{
    Encoder::new(config).encode_document(value)
}

/// Encode a value into XMI document text using the default configuration.
pub fn to_xmi_string<T>(value: &T) -> Result<String>
where
    T: XmiEncode + ?Sized,
{
    to_xmi_string_with_config(value, &XmiConfig::default())
}

/// Encode a value into XMI document text under `config`.
///
/// The declaration names the configured encoding, but the text itself is not
/// converted. Use [`to_xmi_vec_with_config`] for the converted bytes.
pub fn to_xmi_string_with_config<T>(value: &T, config: &XmiConfig) -> Result<String>
where
    T: XmiEncode + ?Sized,
{
    Encoder::new(config).encode_document_text(value)
}

/// Encode a value into XMI document bytes and write them to `writer`.
pub fn to_xmi_writer<T, W>(value: &T, writer: W) -> Result<()>
where
    T: XmiEncode + ?Sized,
    W: Write,
{
    to_xmi_writer_with_config(value, writer, &XmiConfig::default())
}

/// Encode a value under `config` and write the document bytes to `writer`.
pub fn to_xmi_writer_with_config<T, W>(value: &T, mut writer: W, config: &XmiConfig) -> Result<()>
where
    T: XmiEncode + ?Sized,
    W: Write,
{
    let bytes = to_xmi_vec_with_config(value, config)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Encode a value into its bare fragment, without declaration or root element.
pub fn to_xmi_fragment<T>(value: &T) -> Result<String>
where
    T: XmiEncode + ?Sized,
{
    Encoder::new(&XmiConfig::default()).encode(value)
}

/// The container an encoder handed out.
#[derive(Debug)]
enum Selected<'c> {
    Keyed(KeyedContainer<'c>),
    Unkeyed(UnkeyedContainer<'c>),
    Single(SingleValueContainer),
}

impl Selected<'_> {
    fn kind(&self) -> ContainerKind {
        match self {
            Selected::Keyed(_) => ContainerKind::Keyed,
            Selected::Unkeyed(_) => ContainerKind::Unkeyed,
            Selected::Single(_) => ContainerKind::SingleValue,
        }
    }

    /// Finalized text together with the type name describing it.
    fn finish(self) -> (&'static str, String) {
        match self {
            Selected::Keyed(mut container) => (names::DICTIONARY, container.take_fragment()),
            Selected::Unkeyed(mut container) => (names::ARRAY, container.take_fragment()),
            Selected::Single(mut container) => {
                let type_name = container.type_name();
                (type_name, container.take_fragment())
            }
        }
    }
}

/// Drives one value's self-description into a single container.
///
/// The container methods may be called at most once, and only one of them,
/// per encoder.
#[derive(Debug)]
pub struct Encoder<'c> {
    config: &'c XmiConfig,
    path: Path,
    selected: Option<Selected<'c>>,
}

impl<'c> Encoder<'c> {
    /// Creates an encoder for a top-level value.
    pub fn new(config: &'c XmiConfig) -> Self {
        Self::scoped(config, Path::root())
    }

    pub(crate) fn scoped(config: &'c XmiConfig, path: Path) -> Self {
        Self {
            config,
            path,
            selected: None,
        }
    }

    pub fn config(&self) -> &'c XmiConfig {
        self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The kind of container handed out so far, if any.
    pub fn selected_kind(&self) -> Option<ContainerKind> {
        self.selected.as_ref().map(Selected::kind)
    }

    /// Turns this encoder into a record.
    ///
    /// # Panics
    ///
    /// Panics if a container was already requested from this encoder.
    pub fn keyed_container(&mut self) -> &mut KeyedContainer<'c> {
        self.ensure_unselected(ContainerKind::Keyed);
        let container = KeyedContainer::new(self.config, self.path.clone());
        match self.selected.insert(Selected::Keyed(container)) {
            Selected::Keyed(container) => container,
            _ => unreachable!("slot was just filled with a keyed container"),
        }
    }

    /// Turns this encoder into a sequence.
    ///
    /// # Panics
    ///
    /// Panics if a container was already requested from this encoder.
    pub fn unkeyed_container(&mut self) -> &mut UnkeyedContainer<'c> {
        self.ensure_unselected(ContainerKind::Unkeyed);
        let container = UnkeyedContainer::new(self.config, self.path.clone());
        match self.selected.insert(Selected::Unkeyed(container)) {
            Selected::Unkeyed(container) => container,
            _ => unreachable!("slot was just filled with an unkeyed container"),
        }
    }

    /// Turns this encoder into a single scalar.
    ///
    /// # Panics
    ///
    /// Panics if a container was already requested from this encoder.
    pub fn single_value_container(&mut self) -> &mut SingleValueContainer {
        self.ensure_unselected(ContainerKind::SingleValue);
        let container = SingleValueContainer::new(self.path.clone());
        match self.selected.insert(Selected::Single(container)) {
            Selected::Single(container) => container,
            _ => unreachable!("slot was just filled with a single-value container"),
        }
    }

    fn ensure_unselected(&self, requested: ContainerKind) {
        if let Some(selected) = &self.selected {
            panic!(
                "XMI encoder at {} already produced a {} container; \
                 a {} container cannot be requested as well",
                self.path,
                selected.kind(),
                requested
            );
        }
    }

    pub(crate) fn take_selected(&mut self) -> Option<(&'static str, String)> {
        self.selected.take().map(Selected::finish)
    }

    /// Finalizes the selected container into its fragment text.
    ///
    /// # Panics
    ///
    /// Panics if no container was requested from this encoder.
    pub fn finish(mut self) -> String {
        match self.take_selected() {
            Some((_, text)) => text,
            None => panic!(
                "XMI encoder at {} finished without a container being requested",
                self.path
            ),
        }
    }

    /// Drives `value` through this encoder and returns its fragment.
    pub fn encode<T>(mut self, value: &T) -> Result<String>
    where
        T: XmiEncode + ?Sized,
    {
        let span = trace_span!(
            "xmi_encode",
            path = %self.path,
            type_name = %value.xmi_type_name()
        );
        let _entered = span.enter();

        value.encode(&mut self)?;
        Ok(self.finish())
    }

    /// Encodes `value` and wraps it in the XML declaration and root element.
    pub fn encode_document_text<T>(self, value: &T) -> Result<String>
    where
        T: XmiEncode + ?Sized,
    {
        let config = self.config;
        let type_name = value.xmi_type_name();
        let body = self.encode(value)?;
        let text = tag::document(config, &body);
        debug!(
            type_name = %type_name,
            length = text.len(),
            "assembled XMI document"
        );
        Ok(text)
    }

    /// Encodes `value` as a document and converts it with the configured encoding.
    pub fn encode_document<T>(self, value: &T) -> Result<Vec<u8>>
    where
        T: XmiEncode + ?Sized,
    {
        let encoding = self.config.encoding;
        let text = self.encode_document_text(value)?;
        let bytes = encoding.encode(text)?;
        debug!(%encoding, bytes = bytes.len(), "converted XMI document");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextEncoding;
    use crate::error::XmiError;

    #[test]
    fn test_manual_record() {
        let config = XmiConfig::default();
        let mut encoder = Encoder::new(&config);
        let record = encoder.keyed_container();
        record.encode_str("name", "hi");
        assert_eq!(encoder.selected_kind(), Some(ContainerKind::Keyed));
        assert_eq!(encoder.finish(), "<name type=\"String\">\nhi\n</name>");
    }

    #[test]
    fn test_single_value_fragment_is_raw() -> Result<()> {
        assert_eq!(to_xmi_fragment(&5i32)?, "5");
        assert_eq!(to_xmi_fragment("text")?, "text");
        Ok(())
    }

    #[test]
    #[should_panic(expected = "already produced a keyed container")]
    fn test_second_container_panics() {
        let config = XmiConfig::default();
        let mut encoder = Encoder::new(&config);
        encoder.keyed_container();
        encoder.unkeyed_container();
    }

    #[test]
    #[should_panic(expected = "finished without a container being requested")]
    fn test_finish_without_container_panics() {
        let config = XmiConfig::default();
        Encoder::new(&config).finish();
    }

    #[test]
    fn test_document_wrapping() -> Result<()> {
        let text = to_xmi_string(&vec![7isize])?;
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <xmi:XMI xmi:version=\"2.0\">\n\
             <Int index=\"0\" type=\"Int\">7<Int/>\n\
             </xmi:XMI>"
        );
        Ok(())
    }

    #[test]
    fn test_document_bytes_are_utf8_text() -> Result<()> {
        let bytes = to_xmi_vec("caf\u{e9}")?;
        assert_eq!(bytes, to_xmi_string("caf\u{e9}")?.into_bytes());
        Ok(())
    }

    #[test]
    fn test_conversion_failure_aborts_document() {
        let config = XmiConfig::default().with_encoding(TextEncoding::Ascii);
        let err = to_xmi_vec_with_config("caf\u{e9}", &config).unwrap_err();
        match err {
            XmiError::EncodingConversion { encoding, text } => {
                assert_eq!(encoding, TextEncoding::Ascii);
                assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"US-ASCII\"?>"));
                assert!(text.contains("caf\u{e9}"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_writer() -> Result<()> {
        let mut buffer = Vec::new();
        to_xmi_writer(&true, &mut buffer)?;
        assert_eq!(buffer, to_xmi_vec(&true)?);
        Ok(())
    }

    #[test]
    fn test_configured_string_and_writer() -> Result<()> {
        let config = XmiConfig::default()
            .with_xmi_version("2.1")
            .with_encoding(TextEncoding::Latin1);

        let text = to_xmi_string_with_config(&1u8, &config)?;
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
             <xmi:XMI xmi:version=\"2.1\">\n1\n</xmi:XMI>"
        );

        let mut buffer = Vec::new();
        to_xmi_writer_with_config("caf\u{e9}", &mut buffer, &config)?;
        assert_eq!(buffer, to_xmi_vec_with_config("caf\u{e9}", &config)?);
        assert!(buffer.ends_with(b"caf\xe9\n</xmi:XMI>"));
        Ok(())
    }

    #[test]
    fn test_configured_writer_propagates_conversion_failure() {
        let config = XmiConfig::default().with_encoding(TextEncoding::Ascii);
        let mut buffer = Vec::new();
        let err = to_xmi_writer_with_config("caf\u{e9}", &mut buffer, &config).unwrap_err();
        assert!(matches!(err, XmiError::EncodingConversion { .. }));
        assert!(buffer.is_empty());
    }
}
