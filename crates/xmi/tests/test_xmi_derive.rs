use helios_xmi::{Result, XmiEncode, to_xmi_fragment};

#[derive(XmiEncode)]
struct Animal {
    legs: u8,
}

#[derive(XmiEncode)]
struct Dog {
    #[xmi(base)]
    animal: Animal,
    name: String,
    nickname: Option<String>,
}

#[derive(XmiEncode)]
#[xmi(name = "Human", rename_all = "camelCase")]
struct Person {
    given_name: String,
    #[xmi(rename = "years")]
    age: u32,
    r#type: &'static str,
    #[xmi(skip)]
    #[allow(dead_code)]
    scratch: Vec<u8>,
}

#[derive(XmiEncode)]
struct Meters(f64);

#[derive(XmiEncode)]
struct Pair(i32, i32);

#[derive(XmiEncode)]
struct Marker;

#[derive(XmiEncode)]
struct Labeled<T> {
    label: String,
    value: T,
}

#[derive(XmiEncode)]
enum Shape {
    Empty,
    Circle(f64),
    Segment(i32, i32),
    Rect { w: f64, h: f64 },
}

#[derive(XmiEncode)]
#[xmi(rename_all = "snake_case")]
enum Status {
    OnHold,
    #[xmi(rename = "done")]
    Finished,
}

#[derive(XmiEncode)]
struct Drawing {
    shape: Shape,
    status: Status,
}

#[test]
fn test_named_struct_with_base_and_optional_field() -> Result<()> {
    let dog = Dog {
        animal: Animal { legs: 4 },
        name: "Rex".to_string(),
        nickname: None,
    };
    assert_eq!(
        to_xmi_fragment(&dog)?,
        "<name type=\"String\">\nRex\n</name>\n\
         <super type=\"Dictionary\">\n<legs type=\"UInt8\">\n4\n</legs>\n</super>"
    );

    let dog = Dog {
        nickname: Some("R".to_string()),
        ..dog
    };
    assert!(to_xmi_fragment(&dog)?.contains("<nickname type=\"String\">\nR\n</nickname>"));
    Ok(())
}

#[test]
fn test_renames_and_skip() -> Result<()> {
    let person = Person {
        given_name: "Ada".to_string(),
        age: 36,
        r#type: "admin",
        scratch: vec![1, 2, 3],
    };
    assert_eq!(person.xmi_type_name(), "Human");
    assert_eq!(
        to_xmi_fragment(&person)?,
        "<givenName type=\"String\">\nAda\n</givenName>\n\
         <type type=\"String\">\nadmin\n</type>\n\
         <years type=\"UInt32\">\n36\n</years>"
    );
    Ok(())
}

#[test]
fn test_tuple_and_unit_structs() -> Result<()> {
    assert_eq!(to_xmi_fragment(&Meters(2.5))?, "2.5");
    assert_eq!(Meters(2.5).xmi_type_name(), "Meters");
    assert_eq!(
        to_xmi_fragment(&Pair(1, 2))?,
        "<Int32 index=\"0\" type=\"Int32\">1<Int32/><Int32 index=\"1\" type=\"Int32\">2<Int32/>"
    );
    assert_eq!(to_xmi_fragment(&Marker)?, "nil");
    assert_eq!(Marker.xmi_type_name(), "Marker");
    Ok(())
}

#[test]
fn test_generic_struct() -> Result<()> {
    let labeled = Labeled {
        label: "distance".to_string(),
        value: Meters(1.0),
    };
    assert_eq!(labeled.xmi_type_name(), "Labeled");
    assert_eq!(
        to_xmi_fragment(&labeled)?,
        "<label type=\"String\">\ndistance\n</label>\n<value type=\"Meters\">\n1.0\n</value>"
    );
    Ok(())
}

#[test]
fn test_enum_variants() -> Result<()> {
    assert_eq!(to_xmi_fragment(&Shape::Empty)?, "Empty");
    assert_eq!(
        to_xmi_fragment(&Shape::Circle(1.5))?,
        "<Circle type=\"Double\">\n1.5\n</Circle>"
    );
    assert_eq!(
        to_xmi_fragment(&Shape::Segment(1, 2))?,
        "<Segment type=\"Array\">\n\
         <Int32 index=\"0\" type=\"Int32\">1<Int32/><Int32 index=\"1\" type=\"Int32\">2<Int32/>\n\
         </Segment>"
    );
    assert_eq!(
        to_xmi_fragment(&Shape::Rect { w: 2.0, h: 1.0 })?,
        "<Rect type=\"Dictionary\">\n\
         <h type=\"Double\">\n1.0\n</h>\n<w type=\"Double\">\n2.0\n</w>\n\
         </Rect>"
    );
    Ok(())
}

#[test]
fn test_enum_as_field() -> Result<()> {
    let drawing = Drawing {
        shape: Shape::Empty,
        status: Status::OnHold,
    };
    assert_eq!(
        to_xmi_fragment(&drawing)?,
        "<shape type=\"Shape\">\nEmpty\n</shape>\n<status type=\"Status\">\non_hold\n</status>"
    );
    assert_eq!(to_xmi_fragment(&Status::Finished)?, "done");
    Ok(())
}
