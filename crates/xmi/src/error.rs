//! Error types for XMI encoding.

use thiserror::Error;

use crate::config::TextEncoding;

/// Error types for encoding values into XMI documents.
#[derive(Error, Debug)]
pub enum XmiError {
    /// The finished document contains text the configured encoding cannot represent.
    ///
    /// The offending document text is attached for diagnostics.
    #[error("unable to convert XMI document to {encoding} bytes")]
    EncodingConversion {
        encoding: TextEncoding,
        text: String,
    },

    /// IO error while writing an encoded document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by a value while describing itself
    #[error("{0}")]
    Custom(String),
}

impl XmiError {
    /// Returns the document text attached to an encoding conversion failure.
    pub fn offending_text(&self) -> Option<&str> {
        match self {
            XmiError::EncodingConversion { text, .. } => Some(text),
            _ => None,
        }
    }
}

impl From<String> for XmiError {
    fn from(msg: String) -> Self {
        XmiError::Custom(msg)
    }
}

impl From<&str> for XmiError {
    fn from(msg: &str) -> Self {
        XmiError::Custom(msg.to_string())
    }
}

// Lets `Serialize` implementations report failures through the serde bridge
impl serde::ser::Error for XmiError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        XmiError::Custom(msg.to_string())
    }
}

/// Result type alias for XMI encoding operations
pub type Result<T> = std::result::Result<T, XmiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offending_text_only_for_conversion_failures() {
        let err = XmiError::EncodingConversion {
            encoding: TextEncoding::Ascii,
            text: "caf\u{e9}".to_string(),
        };
        assert_eq!(err.offending_text(), Some("caf\u{e9}"));
        assert_eq!(
            err.to_string(),
            "unable to convert XMI document to US-ASCII bytes"
        );

        let err = XmiError::from("bad key");
        assert_eq!(err.offending_text(), None);
        assert_eq!(err.to_string(), "bad key");
    }

    #[test]
    fn test_serde_custom_error() {
        let err = <XmiError as serde::ser::Error>::custom("i128 is not supported");
        assert!(matches!(err, XmiError::Custom(ref msg) if msg == "i128 is not supported"));
    }
}
