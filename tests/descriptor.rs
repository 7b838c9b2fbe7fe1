use replay_header::sans::{
    descriptor::{DescriptorError, FieldDescriptor, Kind, TagError},
    value::{Text, Value},
};

#[test]
fn from_tag_fixed() {
    let d = FieldDescriptor::from_tag("count", Kind::I16, "size=2").unwrap();
    assert_eq!(d, FieldDescriptor::new("count", Kind::I16, 2));
    assert_eq!(d.validate(), Ok(()));
}

#[test]
fn from_tag_delimited() {
    let tag = "size=2,nullterm,smallchar";
    let d = FieldDescriptor::from_tag("file_name", Kind::Text, tag).unwrap();
    assert_eq!(
        d,
        FieldDescriptor::new("file_name", Kind::Text, 2)
            .delimited()
            .narrow()
    );

    let d = FieldDescriptor::from_tag(String::from("map"), Kind::Text, "nullterm, size=2").unwrap();
    assert!(d.delimited && !d.narrow);
    assert_eq!(d.name, "map");
}

#[test]
fn from_tag_ignores_unknown_keys() {
    let d = FieldDescriptor::from_tag("junk", Kind::Raw, "size=16,padding").unwrap();
    assert_eq!(d, FieldDescriptor::new("junk", Kind::Raw, 16));
}

#[test]
fn from_tag_errors() {
    let parse = |tag| FieldDescriptor::from_tag("f", Kind::Raw, tag).unwrap_err();

    assert_eq!(parse("nullterm"), TagError::MissingSize);
    assert_eq!(parse(""), TagError::MissingSize);
    assert_eq!(parse("size=two"), TagError::InvalidSize("two".into()));
    assert_eq!(parse("size=-1"), TagError::InvalidSize("-1".into()));
    assert_eq!(parse("size"), TagError::InvalidSize("".into()));
    assert_eq!(parse("size=2=3"), TagError::MalformedPair("size=2=3".into()));
}

#[test]
fn validate() {
    use DescriptorError::*;

    let check = |d: FieldDescriptor| d.validate();

    assert_eq!(check(FieldDescriptor::new("a", Kind::Raw, 1)), Ok(()));
    assert_eq!(check(FieldDescriptor::new("a", Kind::Text, 2).delimited()), Ok(()));
    assert_eq!(check(FieldDescriptor::new("a", Kind::Raw, 0)), Err(MissingSize));
    assert_eq!(
        check(FieldDescriptor::new("a", Kind::Raw, 1).delimited()),
        Err(UnitTooNarrow(1))
    );
    assert_eq!(
        check(FieldDescriptor::new("a", Kind::Text, 2).narrow()),
        Err(NarrowWithoutDelimiter)
    );
    assert_eq!(
        check(FieldDescriptor::new("a", Kind::I32, 4).delimited()),
        Err(WidthMismatch {
            kind: Kind::I32,
            width: 4,
            unit_size: 4
        })
    );
    assert_eq!(
        check(FieldDescriptor::new("a", Kind::I16, 4)),
        Err(WidthMismatch {
            kind: Kind::I16,
            width: 2,
            unit_size: 4
        })
    );
}

#[test]
fn only_unsized_descriptors_skip() {
    use DescriptorError::*;

    assert!(MissingSize.skips_field());
    assert!(UnitTooNarrow(1).skips_field());
    assert!(!NarrowWithoutDelimiter.skips_field());
    assert!(
        !WidthMismatch {
            kind: Kind::I32,
            width: 4,
            unit_size: 2
        }
        .skips_field()
    );
}

#[test]
fn absorb() {
    assert_eq!(Value::absorb(Kind::I32, vec![1, 0, 0, 0]), Value::I32(1));
    assert_eq!(Value::absorb(Kind::I32, vec![0xFF; 4]), Value::I32(-1));
    assert_eq!(Value::absorb(Kind::I16, vec![0x34, 0x12]), Value::I16(0x1234));
    assert_eq!(
        Value::absorb(Kind::Text, vec![b'a', 0, 0xFF]),
        Value::Text(Text(vec![b'a', 0, 0xFF]))
    );
    assert_eq!(Value::absorb(Kind::Raw, vec![]), Value::Raw(vec![]));
}

#[test]
fn absorb_short_integer() {
    assert_eq!(Value::absorb(Kind::I32, vec![0x01, 0x02]), Value::I32(0x0201));
    assert_eq!(Value::absorb(Kind::I16, vec![]), Value::I16(0));
}

#[test]
fn text_conversions() {
    let text = Text(vec![b'o', b'k', 0xFF]);
    assert_eq!(text.to_string_lossy(), "ok\u{FFFD}");
    assert_eq!(text.to_string(), "ok\u{FFFD}");
    assert_eq!(format!("{text:?}"), "\"ok\u{FFFD}\"");

    let wide = Text(vec![b'h', 0, b'i', 0, 0x00, 0xD8, b'!']);
    assert_eq!(wide.to_string_utf16_lossy(), "hi\u{FFFD}");
}

#[test]
fn value_display() {
    assert_eq!(Value::Raw(vec![0x0A, 0xFF]).to_string(), "0aff");
    assert_eq!(Value::Text("GENREP".into()).to_string(), "\"GENREP\"");
    assert_eq!(Value::I16(-3).to_string(), "-3");
}
