#![cfg(feature = "derive")]

use replay_header::{
    avec::FromRecord,
    sans::{
        descriptor::{FieldDescriptor, Kind},
        report::Ignore,
        value::Text,
    },
};

#[derive(Debug, Default, PartialEq, FromRecord)]
struct Lobby {
    #[field(size = 4)]
    seed: Option<i32>,
    #[field(size = 2, delimited, narrow)]
    host: Option<Text>,
    // Not part of the record.
    note: &'static str,
    #[field(size = 2)]
    r#type: Option<i16>,
    #[field(size = 3)]
    reserved: Option<Vec<u8>>,
}

#[test]
fn schema_follows_declaration_order() {
    assert_eq!(
        Lobby::SCHEMA,
        [
            FieldDescriptor::new("seed", Kind::I32, 4),
            FieldDescriptor::new("host", Kind::Text, 2)
                .delimited()
                .narrow(),
            FieldDescriptor::new("type", Kind::I16, 2),
            FieldDescriptor::new("reserved", Kind::Raw, 3),
        ]
    );
}

#[test]
fn decode_slice_lobby() {
    let data = [
        0x2A, 0x00, 0x00, 0x00, // seed
        b'J', 0x00, b'o', 0x00, 0x00, 0x00, // host
        0x03, 0x00, // type
        0xAB, 0xCD, 0xEF, // reserved
        0x99, // trailing
    ];

    let (lobby, consumed): (Lobby, _) = replay_header::avec::decode_slice(&data, &mut Ignore);

    assert_eq!(consumed, 15);
    assert_eq!(
        lobby,
        Lobby {
            seed: Some(42),
            host: Some("Jo".into()),
            note: "",
            r#type: Some(3),
            reserved: Some(vec![0xAB, 0xCD, 0xEF]),
        }
    );
}

#[test]
fn decode_reader_truncated_lobby() {
    let data = [0x2A, 0x00, 0x00, 0x00, b'J', 0x00];
    let mut warnings = Vec::new();

    let lobby: Lobby = replay_header::avec::decode_reader(&mut &data[..], &mut warnings);

    assert_eq!(lobby.seed, Some(42));
    assert_eq!(lobby.host, Some("J".into()));
    assert_eq!(lobby.r#type, Some(0));
    assert_eq!(lobby.reserved, Some(vec![]));
    assert_eq!(warnings.len(), 3);
}

#[derive(Debug, Default, FromRecord)]
struct Empty {}

#[test]
fn empty_record() {
    assert!(Empty::SCHEMA.is_empty());
    let (_, consumed): (Empty, _) = replay_header::avec::decode_slice(&[1, 2, 3], &mut Ignore);
    assert_eq!(consumed, 0);
}
