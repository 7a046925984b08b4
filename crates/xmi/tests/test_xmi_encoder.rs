use std::borrow::Cow;

use helios_xmi::{
    ContainerKind, Encoder, Result, TextEncoding, XmiConfig, XmiEncode, XmiError, to_xmi_fragment,
    to_xmi_string, to_xmi_vec_with_config,
};

struct Point {
    x: isize,
}

impl XmiEncode for Point {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.keyed_container().encode_isize("x", self.x);
        Ok(())
    }
}

struct Shape {
    name: String,
    origin: Point,
    vertices: Vec<Point>,
}

impl XmiEncode for Shape {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let record = encoder.keyed_container();
        record.encode("origin", &self.origin)?;
        record.encode("vertices", &self.vertices)?;
        record.encode("name", &self.name)?;
        Ok(())
    }
}

struct Foo;

impl XmiEncode for Foo {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let record = encoder.keyed_container();
        record.encode_str("a", "first");
        record.encode_str("b", "second");
        Ok(())
    }

    fn xmi_type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Foo")
    }
}

/// Writes its fields in reverse key order and one of them twice.
struct Unordered;

impl XmiEncode for Unordered {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let record = encoder.keyed_container();
        record.encode_isize("b", 1);
        record.encode_isize("a", 2);
        record.encode_str("a", "replaced");
        Ok(())
    }
}

#[test]
fn test_record_keys_are_sorted() -> Result<()> {
    let text = to_xmi_fragment(&Unordered)?;
    let a = text.find("<a ").expect("a field");
    let b = text.find("<b ").expect("b field");
    assert!(a < b);
    Ok(())
}

#[test]
fn test_last_write_wins() -> Result<()> {
    assert_eq!(
        to_xmi_fragment(&Unordered)?,
        "<a type=\"String\">\nreplaced\n</a>\n<b type=\"Int\">\n1\n</b>"
    );
    Ok(())
}

#[test]
fn test_sequence_indices() -> Result<()> {
    assert_eq!(
        to_xmi_fragment(&vec![3isize, 2, 1])?,
        "<Int index=\"0\" type=\"Int\">3<Int/>\
         <Int index=\"1\" type=\"Int\">2<Int/>\
         <Int index=\"2\" type=\"Int\">1<Int/>"
    );
    Ok(())
}

#[test]
fn test_single_element_keeps_malformed_close() -> Result<()> {
    assert_eq!(
        to_xmi_fragment(&[7isize])?,
        "<Int index=\"0\" type=\"Int\">7<Int/>"
    );
    Ok(())
}

#[test]
fn test_nested_composite_tagging() -> Result<()> {
    let shape = Shape {
        name: "tri".to_string(),
        origin: Point { x: 5 },
        vertices: vec![Point { x: 1 }, Point { x: 2 }],
    };
    let text = to_xmi_fragment(&shape)?;
    assert_eq!(
        text,
        "<name type=\"String\">\ntri\n</name>\n\
         <origin type=\"Point\">\n<x type=\"Int\">\n5\n</x>\n</origin>\n\
         <vertices type=\"Array\">\n\
         <Point index=\"0\" type=\"Point\"><x type=\"Int\">\n1\n</x><Point/>\
         <Point index=\"1\" type=\"Point\"><x type=\"Int\">\n2\n</x><Point/>\n\
         </vertices>"
    );
    Ok(())
}

#[test]
fn test_document_wrapping() -> Result<()> {
    let text = to_xmi_string(&Foo)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert_eq!(lines.get(1), Some(&"<xmi:XMI xmi:version=\"2.0\">"));
    assert_eq!(lines.last(), Some(&"</xmi:XMI>"));
    // The root type name is not part of the document.
    assert!(!text.contains("Foo"));
    Ok(())
}

#[test]
fn test_document_uses_configured_version_and_encoding() -> Result<()> {
    let config = XmiConfig::default()
        .with_xmi_version("2.1")
        .with_encoding(TextEncoding::Latin1);
    let bytes = to_xmi_vec_with_config("caf\u{e9}", &config)?;
    assert!(bytes.starts_with(b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n"));
    assert!(bytes.windows(5).any(|window| window == b"caf\xe9\n"));
    let root = b"<xmi:XMI xmi:version=\"2.1\">";
    assert!(bytes.windows(root.len()).any(|window| window == root));
    Ok(())
}

#[test]
fn test_unrepresentable_text_fails_conversion() {
    let config = XmiConfig::default().with_encoding(TextEncoding::Ascii);
    let err = to_xmi_vec_with_config(&vec!["\u{2603}"], &config).unwrap_err();
    assert!(matches!(err, XmiError::EncodingConversion { .. }));
    assert!(err.offending_text().unwrap().contains('\u{2603}'));
}

#[test]
fn test_top_level_calls_are_independent() -> Result<()> {
    let first = to_xmi_fragment(&Unordered)?;
    let second = to_xmi_fragment(&Unordered)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_paths_track_nesting() {
    let config = XmiConfig::default();
    let mut encoder = Encoder::new(&config);
    assert!(encoder.path().is_root());
    let record = encoder.keyed_container();
    {
        let mut items = record.nested_unkeyed_container("items");
        items.encode_u8(0);
        let mut item = items.super_encoder();
        assert_eq!(item.path().to_string(), "$.items[1]");
        item.keyed_container().encode_str("name", "n");
    }
    assert_eq!(encoder.selected_kind(), Some(ContainerKind::Keyed));
    assert_eq!(
        encoder.finish(),
        "<items type=\"Array\">\n\
         <UInt8 index=\"0\" type=\"UInt8\">0<UInt8/>\
         <Dictionary index=\"1\" type=\"Dictionary\"><name type=\"String\">\nn\n</name><Dictionary/>\n\
         </items>"
    );
}

#[test]
fn test_errors_from_values_propagate() {
    struct Failing;

    impl XmiEncode for Failing {
        fn encode(&self, _encoder: &mut Encoder<'_>) -> Result<()> {
            Err("cannot describe".into())
        }
    }

    let err = to_xmi_fragment(&vec![Failing]).unwrap_err();
    assert_eq!(err.to_string(), "cannot describe");
}
