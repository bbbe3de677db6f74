use std::thread;

use serde::{Deserialize, Serialize};

use contactstore::{
    convert::{ConvertError, frequency},
    error::CodecError,
    mapper::{Mapper, MapperBuilder},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct Spot {
    call: String,
    freq: String,
    snr: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spotter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct SpotRow {
    call: String,
    freq_hz: Option<i64>,
    snr: i32,
    seen: u32,
    extra: String,
}

fn upper(call: &String) -> Result<String, ConvertError> {
    Ok(call.to_ascii_uppercase())
}

fn spot_mapper() -> Mapper<Spot, SpotRow> {
    MapperBuilder::<Spot, SpotRow>::new("spot to row")
        .copy("Call", |s| &s.call, |r| &mut r.call)
        .convert("Freq", |s| &s.freq, |r| &mut r.freq_hz, frequency::encode_hz)
        .copy("Snr", |s| &s.snr, |r| &mut r.snr)
        .extension_into("Extra", |r| &mut r.extra)
        .build()
        .unwrap()
}

fn spot(call: &str, freq: &str, snr: i32) -> Spot {
    Spot {
        call: call.to_string(),
        freq: freq.to_string(),
        snr,
        ..Spot::default()
    }
}

#[test]
fn copies_and_converts_named_fields() {
    let row = spot_mapper().make(&spot("G4ABC", "7.074", -12)).unwrap();
    assert_eq!(row.call, "G4ABC");
    assert_eq!(row.freq_hz, Some(7_074_000));
    assert_eq!(row.snr, -12);
}

#[test]
fn unmapped_destination_fields_are_left_alone() {
    let mut row = SpotRow {
        seen: 9,
        ..SpotRow::default()
    };
    spot_mapper().adapt(&spot("G4ABC", "7.074", 0), &mut row).unwrap();
    assert_eq!(row.seen, 9);
}

#[test]
fn unmapped_source_attributes_go_to_the_extension() {
    let mut src = spot("G4ABC", "7.074", 3);
    src.comment = Some("loud".to_string());
    src.spotter = Some("EA8XYZ".to_string());

    let row = spot_mapper().make(&src).unwrap();
    assert_eq!(row.extra, r#"{"Comment":"loud","Spotter":"EA8XYZ"}"#);
}

#[test]
fn empty_extension_is_an_empty_object() {
    let row = spot_mapper().make(&spot("G4ABC", "", 0)).unwrap();
    assert_eq!(row.extra, "{}");
    assert_eq!(row.freq_hz, None);
}

#[test]
fn converter_failure_is_tagged_with_field_and_op() {
    let err = spot_mapper().make(&spot("G4ABC", "abc", 0)).unwrap_err();
    match &err {
        CodecError::Validation { op, field, source } => {
            assert_eq!(*op, "spot to row");
            assert_eq!(*field, "Freq");
            assert_eq!(*source, ConvertError::Frequency("abc".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.field(), Some("Freq"));
    assert!(err.to_string().contains("Freq"));
}

#[test]
fn failed_adapt_leaves_destination_unchanged() {
    let mapper = spot_mapper();
    let mut row = mapper.make(&spot("G4ABC", "7.074", 1)).unwrap();
    let before = row.clone();

    assert!(mapper.adapt(&spot("W1AW", "nope", 5), &mut row).is_err());
    assert_eq!(row, before);
}

#[test]
fn registered_converter_overrides_direct_copy() {
    let mut builder = MapperBuilder::<Spot, SpotRow>::new("spot upper")
        .copy("Call", |s| &s.call, |r| &mut r.call);
    builder
        .register_converter("Call", |s| &s.call, |r| &mut r.call, upper)
        .unwrap();
    let mapper = builder.build().unwrap();

    assert!(mapper.is_converted("Call"));
    assert_eq!(mapper.make(&spot("g4abc", "", 0)).unwrap().call, "G4ABC");
}

#[test]
fn registering_on_an_unknown_field_is_a_mapping_error() {
    let mut builder = MapperBuilder::<Spot, SpotRow>::new("spot")
        .copy("Call", |s| &s.call, |r| &mut r.call);
    let err = builder
        .register_converter("Callsign", |s| &s.call, |r| &mut r.call, upper)
        .err()
        .expect("unknown field must fail");
    assert!(matches!(err, CodecError::Mapping { op: "spot", .. }));
}

#[test]
fn duplicate_fields_fail_the_build() {
    let err = MapperBuilder::<Spot, SpotRow>::new("spot")
        .copy("Call", |s| &s.call, |r| &mut r.call)
        .copy("Call", |s| &s.call, |r| &mut r.call)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("mapped twice"));
}

#[test]
fn field_names_follow_declaration_order() {
    let mapper = spot_mapper();
    assert_eq!(mapper.field_names(), vec!["Call", "Freq", "Snr"]);
    assert!(mapper.maps("Snr"));
    assert!(!mapper.maps("Comment"));
    assert!(!mapper.is_converted("Call"));
    assert_eq!(mapper.extension_field(), Some("Extra"));
}

#[test]
fn extension_source_seeds_then_columns_win() {
    let mapper = MapperBuilder::<SpotRow, Spot>::new("row to spot")
        .extension_from("Extra", |r| &r.extra)
        .copy("Call", |r| &r.call, |s| &mut s.call)
        .build()
        .unwrap();

    let row = SpotRow {
        call: "NEW1".to_string(),
        extra: r#"{"Call":"OLD1","Comment":"kept","FutureField":42}"#.to_string(),
        ..SpotRow::default()
    };
    let out = mapper.make(&row).unwrap();
    assert_eq!(out.call, "NEW1");
    assert_eq!(out.comment.as_deref(), Some("kept"));
}

#[test]
fn extension_source_skips_keys_owned_by_rules() {
    let mapper = MapperBuilder::<SpotRow, Spot>::new("row to spot")
        .extension_from("Extra", |r| &r.extra)
        .copy("Snr", |r| &r.snr, |s| &mut s.snr)
        .build()
        .unwrap();

    let row = SpotRow {
        snr: -7,
        extra: r#"{"Snr":"loud","Spotter":"EA8XYZ"}"#.to_string(),
        ..SpotRow::default()
    };
    let out = mapper.make(&row).unwrap();
    assert_eq!(out.snr, -7);
    assert_eq!(out.spotter.as_deref(), Some("EA8XYZ"));
}

#[test]
fn concurrent_adapt_calls_do_not_interfere() {
    let mapper = spot_mapper();

    thread::scope(|scope| {
        for t in 0..8i32 {
            let mapper = &mapper;
            scope.spawn(move || {
                for i in 0..500i32 {
                    let call = format!("T{t}C{i}");
                    let khz = 7_000 + t * 100 + i % 100;
                    let src = spot(&call, &format!("{}.{:03}", khz / 1000, khz % 1000), t * 1000 + i);
                    let mut row = SpotRow::default();
                    mapper.adapt(&src, &mut row).unwrap();
                    assert_eq!(row.call, call);
                    assert_eq!(row.freq_hz, Some(i64::from(khz) * 1000));
                    assert_eq!(row.snr, t * 1000 + i);
                }
            });
        }
    });
}
