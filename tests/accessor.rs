use exactcast::{
    accessor::{
        core::{Accessor, Nullability},
        defaults::Defaults,
        element::{
            Bool, Element, Int8, NullBool, NullComplex128, NullComplex64, NullFloat32,
            NullFloat64, NullInt32, NullInt8, NullString, NullUint64, NullUint8, Str, Uint32, Uint64,
        },
        sql::{DriverValue, Scanner, Valuer},
    },
    error::ErrorKind,
    value::{
        complex::{Complex64, Complex128},
        core::Value,
    },
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

fn kind<T: Element, N: Nullability>(accessor: &Accessor<T, N>) -> Option<ErrorKind> {
    accessor.err().map(|e| e.kind())
}

#[test]
fn lifecycle() {
    let mut accessor = NullInt8::absent();
    assert!(!accessor.present());
    assert!(accessor.valid());
    assert_eq!(accessor.v(), 0);
    assert_eq!(accessor.get(), None);

    accessor = NullInt8::from_value(&Value::Int64(200));
    assert!(accessor.present());
    assert!(!accessor.valid());
    assert_eq!(accessor.v(), -56);
    assert_eq!(kind(&accessor), Some(ErrorKind::Convert));

    accessor.set(12);
    assert!(accessor.present());
    assert!(accessor.valid());
    assert_eq!(accessor.get(), Some(&12));

    let copy = accessor.clone();
    assert_eq!(copy, accessor);
    assert_eq!(copy.into_option(), Some(12));
}

#[test]
fn one_default_replaces_a_failed_conversion() {
    let fallback = NullUint8::from_value_or(&Value::from("not a number"), 7);
    assert_eq!(fallback.v(), 7);
    assert!(fallback.present());
    assert_eq!(kind(&fallback), Some(ErrorKind::Convert));

    let lossy = NullInt8::from_value_or(&Value::Int64(200), 1);
    assert_eq!(lossy.v(), 1);
    assert_eq!(kind(&lossy), Some(ErrorKind::Convert));

    let untouched = NullUint8::from_value_or(&Value::Int16(9), 7);
    assert_eq!(untouched.v(), 9);
    assert!(untouched.valid());
}

#[test]
fn defaults_from_slices() {
    let none = NullInt32::from_value_with_defaults(&Value::Int8(-5), &[]);
    assert_eq!(none.v(), -5);
    assert!(none.valid());

    let one = NullInt32::from_value_with_defaults(&Value::from("x"), &[42]);
    assert_eq!(one.v(), 42);
    assert!(!one.valid());

    let two = NullInt32::from_value_with_defaults(&Value::Int8(-5), &[1, 2]);
    assert!(!two.present());
    assert_eq!(kind(&two), Some(ErrorKind::DefaultValue));
    assert_eq!(two.err().unwrap().to_string(),
               "ambiguous default: 2 default values supplied, at most one is allowed");

    let out_of_range = NullInt8::from_value_with_defaults(&Value::Int64(200), &[1, 2]);
    assert!(!out_of_range.present());
    assert!(!out_of_range.valid());
    assert_eq!(kind(&out_of_range), Some(ErrorKind::DefaultValue));

    let explicit = NullInt32::from_value_with(&Value::from("x"), Defaults::from(Some(3)));
    assert_eq!(explicit.v(), 3);
}

#[test]
fn into_outcome_keeps_both_halves() {
    let outcome = NullInt8::from_value(&Value::Int64(200)).into_outcome();
    assert_eq!(outcome.value(), Some(&-56));
    assert_eq!(outcome.error().map(|e| e.kind()), Some(ErrorKind::Convert));

    assert_eq!(NullInt8::from_value(&Value::Int64(200)).into_option(), None);
}

#[test]
fn element_conversions() {
    assert_eq!(NullBool::from_value(&Value::from("TRUE")).into_option(), Some(true));
    assert_eq!(kind(&NullBool::from_value(&Value::from("yes"))),
               Some(ErrorKind::UnexpectedValue));
    assert_eq!(NullString::from_value(&Value::Float64(1e6)).into_option(),
               Some("1e+06".to_string()));
    assert_eq!(NullFloat32::from_value(&Value::from("0.5")).into_option(), Some(0.5));
    assert_eq!(NullComplex64::from_value(&Value::from("(1+2i)")).into_option(),
               Some(Complex64::new(1.0, 2.0)));
    assert_eq!(Uint64::from_value(&Value::Int64(-1)).v(), u64::MAX);
}

#[test]
fn display() {
    assert_eq!(NullInt8::absent().to_string(), "null");
    assert_eq!(NullInt8::new(-3).to_string(), "-3");
    assert_eq!(NullFloat64::new(1e6).to_string(), "1e+06");
    assert_eq!(NullFloat32::new(0.1).to_string(), "0.1");
    assert_eq!(NullComplex128::new(Complex128::new(1.0, -2.0)).to_string(), "(1-2i)");
    assert_eq!(Str::new("hi".to_string()).to_string(), "hi");
}

#[test]
fn json_null_policy() {
    let invalid = Value::Int64(200);

    assert_eq!(NullInt8::from_value(&invalid).to_json().unwrap(), "null");
    assert_eq!(NullInt8::absent().to_json().unwrap(), "null");
    assert_eq!(NullInt8::new(5).to_json().unwrap(), "5");

    assert_eq!(Int8::from_value(&invalid).to_json().unwrap(), "-56");
    assert_eq!(Int8::absent().to_json().unwrap(), "0");
    assert_eq!(Bool::absent().to_json().unwrap(), "false");
    assert_eq!(Str::absent().to_json().unwrap(), "\"\"");
    assert_eq!(NullComplex128::new(Complex128::new(3.0, 4.0)).to_json().unwrap(),
               "\"(3+4i)\"");
}

#[test]
fn json_decoding() {
    assert_eq!(serde_json::from_str::<NullInt8>("null").unwrap(), NullInt8::absent());
    assert_eq!(serde_json::from_str::<NullInt8>("-7").unwrap(), NullInt8::new(-7));
    assert_eq!(serde_json::from_str::<NullInt8>("127.0").unwrap(), NullInt8::new(127));
    assert_eq!(serde_json::from_str::<NullBool>("true").unwrap(), NullBool::new(true));
    assert_eq!(serde_json::from_str::<NullString>("\"12\"").unwrap(),
               NullString::new("12".into()));
    assert_eq!(serde_json::from_str::<NullComplex128>("\"(1+2i)\"").unwrap(),
               NullComplex128::new(Complex128::new(1.0, 2.0)));

    let err = serde_json::from_str::<NullInt8>("300").unwrap_err();
    assert!(err.to_string().contains("cannot convert int64 to int8"), "{err}");
    assert!(serde_json::from_str::<NullInt8>("1.5").is_err());
    assert!(serde_json::from_str::<NullBool>("\"yes\"").is_err());
}

#[test]
fn json_of_the_wrong_type_is_rejected() {
    let err = serde_json::from_str::<NullInt8>("true").unwrap_err();
    assert!(err.to_string().contains("cannot convert bool to int8"), "{err}");
    assert!(serde_json::from_str::<NullInt8>("\"12\"").is_err());
    assert!(serde_json::from_str::<NullString>("12").is_err());
    assert!(serde_json::from_str::<NullBool>("1").is_err());
    assert!(serde_json::from_str::<NullFloat64>("[1.5]").is_err());
    assert!(serde_json::from_str::<NullComplex128>("3").is_err());

    let mut accessor = NullInt8::new(1);
    let err = accessor.unmarshal_json("\"12\"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Convert);
    assert!(!accessor.present());
    assert!(!accessor.valid());
}

#[test]
fn float32_reads_back_its_own_json() {
    for x in [0.1_f32, 1.0 / 3.0, -2.5e-7, f32::MAX, f32::MIN_POSITIVE] {
        let text = NullFloat32::new(x).to_json().unwrap();
        assert_eq!(serde_json::from_str::<NullFloat32>(&text).unwrap(), NullFloat32::new(x));

        let mut accessor = NullFloat32::default();
        accessor.unmarshal_json(&text).unwrap();
        assert_eq!(accessor.into_option(), Some(x), "{text}");
    }

    assert!(serde_json::from_str::<NullFloat64>("0.1").unwrap().valid());
    assert!(serde_json::from_str::<NullFloat32>("1e300").is_err());
}

#[test]
fn unmarshal_keeps_failed_state() {
    let mut accessor = NullUint8::default();

    let err = accessor.unmarshal_json("300").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Convert);
    assert_eq!(accessor.v(), 44);
    assert!(accessor.present());

    let err = accessor.unmarshal_json("{").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedValue);
    assert!(!accessor.present());

    accessor.unmarshal_json("3").unwrap();
    assert_eq!(accessor.into_option(), Some(3));
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Row {
    id:    Uint32,
    score: NullFloat64,
    name:  NullString,
}

#[test]
fn accessors_inside_structs() {
    let row: Row = serde_json::from_str(r#"{"id": 7, "score": null, "name": "12"}"#).unwrap();

    assert_eq!(row.id.v(), 7);
    assert!(!row.score.present());
    assert_eq!(row.name.v(), "12");
    assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"id":7,"score":null,"name":"12"}"#);

    assert!(serde_json::from_str::<Row>(r#"{"id": "7", "score": 1, "name": "a"}"#).is_err());
}

#[test]
fn driver_values() {
    assert_eq!(NullInt8::new(-3).driver_value().unwrap(), DriverValue::Int64(-3));
    assert_eq!(NullFloat32::new(0.5).driver_value().unwrap(), DriverValue::Float64(0.5));
    assert_eq!(NullBool::new(true).driver_value().unwrap(), DriverValue::Bool(true));
    assert_eq!(NullString::new("a".into()).driver_value().unwrap(), DriverValue::Text("a".into()));
    assert_eq!(NullComplex64::new(Complex64::new(1.0, -1.0)).driver_value().unwrap(),
               DriverValue::Text("(1-1i)".into()));

    assert_eq!(NullInt8::from_value(&Value::Int64(200)).driver_value().unwrap(),
               DriverValue::Null);
    assert_eq!(Int8::from_value(&Value::Int64(200)).driver_value().unwrap(),
               DriverValue::Int64(-56));
    assert_eq!(Uint64::absent().driver_value().unwrap(), DriverValue::Int64(0));

    let err = NullUint64::new(u64::MAX).driver_value().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Convert);
    assert_eq!(NullUint64::new(i64::MAX as u64).driver_value().unwrap(),
               DriverValue::Int64(i64::MAX));
}

#[test]
fn scanning() {
    let mut accessor = NullInt32::new(1);

    accessor.scan(DriverValue::Null).unwrap();
    assert!(!accessor.present());
    assert!(accessor.valid());

    accessor.scan(DriverValue::Text("0x10".into())).unwrap();
    assert_eq!(accessor.v(), 16);

    accessor.scan(DriverValue::Bytes(b"-42".to_vec())).unwrap();
    assert_eq!(accessor.v(), -42);

    let err = accessor.scan(DriverValue::Float64(3.5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Convert);
    assert_eq!(accessor.v(), 3);
    assert!(accessor.present());

    assert!(accessor.scan(DriverValue::Text("abc".into())).is_err());
    assert!(!accessor.present());

    assert!(accessor.scan(DriverValue::Bytes(vec![0xff, 0xfe])).is_err());

    let mut flag = NullBool::default();
    flag.scan(DriverValue::Int64(0)).unwrap();
    assert_eq!(flag.into_option(), Some(false));
}
