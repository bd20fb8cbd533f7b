use jsonnorm::{Error, normalize_from_reader, normalize_json_value};
use serde_json::json;

#[test]
fn null_is_treated_as_absent() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(normalize_json_value(&json!(null))?, "");
    Ok(())
}

#[test]
fn string_is_parsed_as_json_text() -> Result<(), Box<dyn std::error::Error>> {
    let out = normalize_json_value(&json!("{ \"a\": [true] }"))?;
    assert_eq!(out, r#"{"a":true}"#);
    Ok(())
}

#[test]
fn other_types_are_rejected() {
    for (v, name) in [
        (json!(true), "boolean"),
        (json!([1]), "array"),
        (json!({"a": 1}), "object"),
    ] {
        let err = normalize_json_value(&v).unwrap_err();
        assert!(matches!(err, Error::InputType { found } if found == name));
        assert!(err.input().is_none());
    }
}

#[test]
fn reader_input_is_normalized() -> Result<(), Box<dyn std::error::Error>> {
    let out = normalize_from_reader("{\"k\": [\"v\"]}\n".as_bytes())?;
    assert_eq!(out, r#"{"k":"v"}"#);
    Ok(())
}

#[test]
fn reader_rejects_invalid_utf8() {
    let err = normalize_from_reader(&[0xff, 0xfe][..]).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
