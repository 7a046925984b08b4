//! Encoder configuration.
//!
//! The defaults reproduce the canonical document shape: an `UTF-8` declaration,
//! an `xmi:version="2.0"` root element and struct fields holding `None` left out.
//! `XmiConfig` derives serde's traits so callers can load it from whatever
//! configuration format they already use.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XmiError};

/// The XMI version written on the root element by default.
pub const DEFAULT_XMI_VERSION: &str = "2.0";

/// Options shared by every encoder in one encoding pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XmiConfig {
    /// Value of the `xmi:version` attribute on the root element.
    pub xmi_version: String,

    /// Byte encoding of the finished document, also named in the XML declaration.
    pub encoding: TextEncoding,

    /// Omit serde struct fields holding `None` instead of rendering them as `nil`.
    pub skip_none_fields: bool,
}

impl Default for XmiConfig {
    fn default() -> Self {
        Self {
            xmi_version: DEFAULT_XMI_VERSION.to_string(),
            encoding: TextEncoding::default(),
            skip_none_fields: true,
        }
    }
}

impl XmiConfig {
    pub fn with_xmi_version(mut self, version: impl Into<String>) -> Self {
        self.xmi_version = version.into();
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_skip_none_fields(mut self, skip: bool) -> Self {
        self.skip_none_fields = skip;
        self
    }
}

/// Byte encodings a finished document can be converted to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

impl TextEncoding {
    /// The name written in the `encoding` attribute of the XML declaration.
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Ascii => "US-ASCII",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Converts document text into bytes.
    ///
    /// Fails with [`XmiError::EncodingConversion`], carrying the whole text, when a
    /// character has no representation in this encoding. UTF-8 never fails.
    pub fn encode(self, text: String) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Ok(text.into_bytes()),
            TextEncoding::Ascii if text.is_ascii() => Ok(text.into_bytes()),
            TextEncoding::Latin1 => {
                let bytes: Option<Vec<u8>> =
                    text.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect();
                bytes.ok_or(XmiError::EncodingConversion {
                    encoding: self,
                    text,
                })
            }
            TextEncoding::Ascii => Err(XmiError::EncodingConversion {
                encoding: self,
                text,
            }),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = XmiConfig::default();
        assert_eq!(config.xmi_version, "2.0");
        assert_eq!(config.encoding, TextEncoding::Utf8);
        assert!(config.skip_none_fields);
    }

    #[test]
    fn test_builder_methods() {
        let config = XmiConfig::default()
            .with_xmi_version("2.1")
            .with_encoding(TextEncoding::Latin1)
            .with_skip_none_fields(false);
        assert_eq!(config.xmi_version, "2.1");
        assert_eq!(config.encoding, TextEncoding::Latin1);
        assert!(!config.skip_none_fields);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TextEncoding::Utf8.label(), "UTF-8");
        assert_eq!(TextEncoding::Ascii.to_string(), "US-ASCII");
        assert_eq!(TextEncoding::Latin1.label(), "ISO-8859-1");
    }

    #[test]
    fn test_utf8_never_fails() -> Result<()> {
        let bytes = TextEncoding::Utf8.encode("snow \u{2603}".to_string())?;
        assert_eq!(bytes, "snow \u{2603}".as_bytes());
        Ok(())
    }

    #[test]
    fn test_ascii_rejects_non_ascii() {
        let err = TextEncoding::Ascii
            .encode("caf\u{e9}".to_string())
            .unwrap_err();
        assert_eq!(err.offending_text(), Some("caf\u{e9}"));
    }

    #[test]
    fn test_latin1_maps_low_code_points() -> Result<()> {
        assert_eq!(
            TextEncoding::Latin1.encode("caf\u{e9}".to_string())?,
            vec![b'c', b'a', b'f', 0xE9]
        );
        let err = TextEncoding::Latin1
            .encode("\u{20ac}".to_string())
            .unwrap_err();
        assert!(matches!(
            err,
            XmiError::EncodingConversion {
                encoding: TextEncoding::Latin1,
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn test_config_deserializes_with_defaults() -> std::result::Result<(), serde_json::Error> {
        let config: XmiConfig = serde_json::from_str(r#"{"encoding": "latin1"}"#)?;
        assert_eq!(config.encoding, TextEncoding::Latin1);
        assert_eq!(config.xmi_version, "2.0");
        assert!(config.skip_none_fields);

        let config: XmiConfig =
            serde_json::from_str(r#"{"xmiVersion": "2.4.1", "skipNoneFields": false}"#)?;
        assert_eq!(config.xmi_version, "2.4.1");
        assert!(!config.skip_none_fields);
        Ok(())
    }
}
