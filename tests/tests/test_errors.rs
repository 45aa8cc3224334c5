// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use schemata::buffer::JsonKind;
use schemata::{Codec, Config, Error};

#[test]
fn test_empty_enum_is_rejected() {
    let err = schemata::decode(br#"{"enum": []}"#).unwrap_err();
    match &err {
        Error::Vocabulary { keyword, value, .. } => {
            assert_eq!(keyword, "enum");
            assert_eq!(value, "[]");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_empty_enum_allowed_when_not_strict() {
    let codec = Codec::default().strict_enum(false);
    assert!(!codec.config().is_strict_enum());
    let schema = codec.decode(br#"{"enum": []}"#).unwrap();
    assert!(schema.enumeration.as_ref().unwrap().is_empty());
    let bytes = codec.encode(&schema).unwrap();
    assert!(bytes.ends_with(br#""enum":[]}"#));
}

#[test]
fn test_malformed_scalar() {
    let err = schemata::decode(br#"{"maxLength": "abc"}"#).unwrap_err();
    match err {
        Error::TypeMismatch {
            keyword,
            found,
            line,
            column,
            ..
        } => {
            assert_eq!(keyword, "maxLength");
            assert_eq!(found, JsonKind::String);
            assert_eq!(line, 1);
            assert!(column > 0);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_integer_keywords() {
    let schema = schemata::decode(br#"{"maxLength": 3.0, "minItems": 2}"#).unwrap();
    assert_eq!(schema.max_length.value, 3);
    assert_eq!(schema.min_items.value, 2);
    let err = schemata::decode(br#"{"maxLength": 1.5}"#).unwrap_err();
    assert_eq!(err.keyword(), Some("maxLength"));
    assert!(matches!(err, Error::TypeMismatch { found: JsonKind::Number, .. }));
}

#[test]
fn test_wrong_kinds() {
    for (input, keyword) in [
        (&br#"{"title": 1}"#[..], "title"),
        (br#"{"readOnly": "yes"}"#, "readOnly"),
        (br#"{"minimum": "0"}"#, "minimum"),
        (br#"{"properties": []}"#, "properties"),
        (br#"{"definitions": {"a": 1}}"#, "definitions"),
        (br#"{"items": 3}"#, "items"),
        (br#"{"enum": {}}"#, "enum"),
        (br#"{"type": 1}"#, "type"),
        (br#"{"format": false}"#, "format"),
        (br#"{"allOf": {}}"#, "allOf"),
        (br#"{"dependencies": {"a": 1}}"#, "dependencies"),
        (br#"{"pattern": 1}"#, "pattern"),
    ] {
        let err = schemata::decode(input).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }), "{keyword}: {err}");
        assert_eq!(err.keyword(), Some(keyword), "{err}");
    }
}

#[test]
fn test_mismatch_after_nested_schema_keeps_outer_keyword() {
    let err = schemata::decode(br#"{"properties": {"a": {"type": "string"}, "b": 5}}"#)
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }), "{err}");
    assert_eq!(err.keyword(), Some("properties"));

    let err = schemata::decode(br#"{"allOf": [{"title": "x"}, 5]}"#).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }), "{err}");
    assert_eq!(err.keyword(), Some("allOf"));

    let err = schemata::decode(br#"{"items": [{"not": {"minimum": 1}}, "x"]}"#).unwrap_err();
    assert_eq!(err.keyword(), Some("items"));

    let err = schemata::decode(
        br#"{"dependencies": {"a": {"required": ["b"]}, "c": [1]}}"#,
    )
    .unwrap_err();
    assert_eq!(err.keyword(), Some("dependencies"));
}

#[test]
fn test_invalid_pattern_properties() {
    let err = schemata::decode(br#"{"patternProperties": {"^ok$": {}, "([a-z": {}}}"#).unwrap_err();
    match err {
        Error::Vocabulary { keyword, value, .. } => {
            assert_eq!(keyword, "patternProperties");
            assert_eq!(value, "([a-z");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_invalid_pattern_after_nested_schema() {
    let err = schemata::decode(
        br#"{"patternProperties": {"^a": {"type": "string"}, "(": {}}}"#,
    )
    .unwrap_err();
    assert_eq!(err.keyword(), Some("patternProperties"));
}

#[test]
fn test_invalid_pattern() {
    let err = schemata::decode(br#"{"pattern": "a{2,1}"}"#).unwrap_err();
    assert!(matches!(err, Error::Vocabulary { .. }));
    assert_eq!(err.keyword(), Some("pattern"));
}

#[test]
fn test_syntax_errors() {
    for input in [
        &b"{"[..],
        b"{\"title\" \"x\"}",
        b"{\"title\": \"x\",}",
        b"{title: 1}",
        b"{\"readOnly\": tru}",
        b"{\"title\": \"unterminated}",
        b"{\"maxLength\": 01}",
        b"",
        b"   ",
    ] {
        let err = schemata::decode(input).unwrap_err();
        assert!(
            matches!(err, Error::Syntax { .. } | Error::UnexpectedEof { .. }),
            "{}: {err}",
            String::from_utf8_lossy(input)
        );
    }
}

#[test]
fn test_trailing_data() {
    let err = schemata::decode(br#"{"title": "a"} {}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
    assert!(schemata::decode(b"{}  \n\t").is_ok());
}

#[test]
fn test_invalid_utf8() {
    let err = schemata::decode(b"{\"title\": \"\xff\"}").unwrap_err();
    assert!(matches!(err, Error::Syntax { .. }));
}

#[test]
fn test_out_of_range_numbers() {
    for input in [
        &br#"{"maximum": 1e400}"#[..],
        br#"{"minimum": -1e400}"#,
        br#"{"default": [1, 2e999]}"#,
    ] {
        let err = schemata::decode(input).unwrap_err();
        assert!(
            matches!(err, Error::Syntax { .. }),
            "{}: {err}",
            String::from_utf8_lossy(input)
        );
    }
    let schema = schemata::decode(br#"{"maximum": 1.7976931348623157e308, "minimum": 1e-400}"#)
        .unwrap();
    assert_eq!(schema.maximum.value, f64::MAX);
    assert_eq!(schema.minimum.value, 0.0);
    assert!(schemata::encode(&schema).is_ok());
}

#[test]
fn test_depth_limit() {
    let codec = Codec::default().max_depth(4);
    assert_eq!(codec.config().max_depth(), 4);
    assert!(codec.decode(br#"{"not": {"not": {"not": {}}}}"#).is_ok());
    let err = codec.decode(br#"{"not": {"not": {"not": {"not": {}}}}}"#).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)));
}

#[test]
fn test_nested_not_at_default_depth_limit() {
    let max_depth = Config::default().max_depth();
    let nested = |levels: u32| {
        let levels = levels as usize;
        r#"{"not": "#.repeat(levels) + "{}" + &"}".repeat(levels)
    };

    let schema = schemata::decode(nested(max_depth - 1).as_bytes()).unwrap();
    let mut chain = 0;
    let mut node = &*schema;
    while let Some(next) = node.not.as_deref() {
        chain += 1;
        node = next;
    }
    assert_eq!(chain, max_depth - 1);
    let bytes = schemata::encode(&schema).unwrap();
    assert_eq!(*schemata::decode(&bytes).unwrap(), *schema);

    let err = schemata::decode(nested(max_depth).as_bytes()).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)), "{err}");
}

#[test]
fn test_depth_beyond_tokenizer_limit() {
    let codec = Codec::default().max_depth(1_000);
    let input = "[".repeat(200) + &"]".repeat(200);
    let document = format!(r#"{{"default": {input}}}"#);
    let err = codec.decode(document.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)), "{err}");
}

#[test]
fn test_default_depth_limit_stops_deep_input() {
    let depth = 10_000;
    let input = "[".repeat(depth) + &"]".repeat(depth);
    let document = format!(r#"{{"default": {input}}}"#);
    let err = schemata::decode(document.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)));
}

#[test]
fn test_deep_unknown_keyword_is_skipped_iteratively() {
    let depth = 100_000;
    let input = "[".repeat(depth) + &"]".repeat(depth);
    let document = format!(r#"{{"x-deep": {input}, "title": "t"}}"#);
    let schema = schemata::decode(document.as_bytes()).unwrap();
    assert_eq!(schema.title.as_str(), "t");
}

#[test]
fn test_error_messages() {
    let err = schemata::decode(br#"{"type": "strnig"}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"keyword `type`: invalid value "strnig": unknown type name"#
    );
    let err = schemata::decode(b"{").unwrap_err();
    assert!(
        err.to_string().starts_with("unexpected end of input at line 1"),
        "{err}"
    );
    let err = schemata::decode(b"{\n  \"title\": 1\n}").unwrap_err();
    assert_eq!(err.position().map(|(line, _)| line), Some(2));
}
