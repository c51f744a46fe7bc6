use crate::error::ErrorKind;
use crate::test::builder::Builder;
use crate::{from_bytes, to_bytes, Tag, Value};

#[test]
fn simple_byte() {
    let v = Value::Compound(
        Some("".to_string()),
        vec![Value::Byte(Some("a".to_string()), 5)],
    );

    let expected = Builder::new()
        .start_compound("")
        .byte("a", 5)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&v).unwrap(), expected);
}

#[test]
fn unnamed_root_gets_the_empty_name() {
    let v = Value::Int(None, 7);
    let expected = Builder::new().int("", 7).build();
    assert_eq!(to_bytes(&v).unwrap(), expected);
}

#[test]
fn scalars_are_big_endian_fixed_width() {
    let v = Value::Compound(
        Some("".to_string()),
        vec![
            Value::Short(Some("s".to_string()), -2),
            Value::Long(Some("l".to_string()), 1),
            Value::Double(Some("d".to_string()), 0.5),
        ],
    );

    let expected = Builder::new()
        .start_compound("")
        .short("s", -2)
        .long("l", 1)
        .double("d", 0.5)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&v).unwrap(), expected);
}

#[test]
fn arrays_write_count_then_elements() {
    let v = Value::IntArray(Some("ia".to_string()), vec![1, -1]);
    let expected = Builder::new().int_array("ia", &[1, -1]).build();
    assert_eq!(to_bytes(&v).unwrap(), expected);

    let v = Value::LongArray(Some("la".to_string()), vec![i64::MAX]);
    let expected = Builder::new().long_array("la", &[i64::MAX]).build();
    assert_eq!(to_bytes(&v).unwrap(), expected);

    let v = Value::ByteArray(Some("ba".to_string()), vec![-128, 127]);
    let expected = Builder::new().byte_array("ba", &[-128, 127]).build();
    assert_eq!(to_bytes(&v).unwrap(), expected);
}

#[test]
fn compound_is_terminated_with_end() {
    let v = Value::Compound(Some("".to_string()), vec![]);
    assert_eq!(to_bytes(&v).unwrap(), &[0x0a, 0x00, 0x00, 0x00]);
}

#[test]
fn empty_list_encodes_as_end_with_zero_length() {
    let v = Value::List(Some("".to_string()), vec![]);

    // Payload must be exactly: element id End, then length 0.
    let expected = Builder::new()
        .tag(Tag::List)
        .name("")
        .raw_bytes(&[0x00, 0x00, 0x00, 0x00, 0x00])
        .build();

    assert_eq!(to_bytes(&v).unwrap(), expected);
}

#[test]
fn list_elements_are_payload_only() {
    let v = Value::List(
        Some("strs".to_string()),
        vec![
            Value::String(None, "a".to_string()),
            // Element names are dropped on the wire: this one cannot
            // survive a round trip.
            Value::String(Some("ignored".to_string()), "b".to_string()),
        ],
    );

    let expected = Builder::new()
        .start_list("strs", Tag::String, 2)
        .string_payload("a")
        .string_payload("b")
        .build();

    assert_eq!(to_bytes(&v).unwrap(), expected);
}

#[test]
fn heterogeneous_list_is_rejected() {
    let v = Value::List(
        Some("bad".to_string()),
        vec![Value::Byte(None, 1), Value::Short(None, 2)],
    );

    let err = to_bytes(&v).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::HeterogeneousList));
}

#[test]
fn heterogeneous_list_nested_in_compound_is_rejected() {
    let v = Value::Compound(
        Some("".to_string()),
        vec![Value::List(
            Some("bad".to_string()),
            vec![Value::Int(None, 1), Value::Long(None, 2)],
        )],
    );

    let err = to_bytes(&v).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::HeterogeneousList));
}

#[test]
fn oversized_string_is_rejected() {
    // The signed short length prefix tops out at 32767 bytes.
    let v = Value::String(None, "x".repeat(40_000));
    assert!(to_bytes(&v).is_err());
}

#[test]
fn float_nan_bit_patterns_survive_a_round_trip() {
    let f_bits = 0x7fc0_0001u32;
    let d_bits = 0x7ff8_0000_0000_0005u64;

    let v = Value::Compound(
        Some("".to_string()),
        vec![
            Value::Float(Some("f".to_string()), f32::from_bits(f_bits)),
            Value::Double(Some("d".to_string()), f64::from_bits(d_bits)),
        ],
    );

    let decoded = from_bytes(&to_bytes(&v).unwrap()).unwrap();
    let children = match decoded {
        Value::Compound(_, children) => children,
        other => panic!("expected compound, got {:?}", other),
    };

    match &children[0] {
        Value::Float(_, f) => assert_eq!(f.to_bits(), f_bits),
        other => panic!("expected float, got {:?}", other),
    }
    match &children[1] {
        Value::Double(_, d) => assert_eq!(d.to_bits(), d_bits),
        other => panic!("expected double, got {:?}", other),
    }
}

#[test]
fn negative_zero_survives_a_round_trip() {
    let v = Value::Float(Some("z".to_string()), -0.0f32);
    let decoded = from_bytes(&to_bytes(&v).unwrap()).unwrap();
    match decoded {
        Value::Float(_, f) => assert_eq!(f.to_bits(), (-0.0f32).to_bits()),
        other => panic!("expected float, got {:?}", other),
    }
}

#[test]
fn cesu8_string_round_trips() {
    // Supplementary-plane characters are where CESU-8 and UTF-8 differ.
    let s = "g\u{10437}d";
    let v = Value::String(Some("s".to_string()), s.to_string());
    let decoded = from_bytes(&to_bytes(&v).unwrap()).unwrap();
    assert_eq!(decoded.as_str(), Some(s));
}
