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



use schemata::{
    Additional, Codec, Const, Dependency, Enum, Format, Items, Pooled, Regexp, Schema, StringArray,
    Type, Types, Value,
};
use test_helpers::{assert_encodes_to, roundtrip};

const PREFIX: &str = r#"{"$schema":"http://json-schema.org/draft-07/schema#","#;

fn encoded(codec: &Codec, input: &str) -> String {
    let schema = codec.decode(input.as_bytes()).unwrap();
    let text = String::from_utf8(codec.encode(&schema).unwrap()).unwrap();
    text.strip_prefix(PREFIX).unwrap().to_string()
}

#[test]
fn test_items_object_is_single() {
    let codec = Codec::default();
    let schema = roundtrip(&codec, br#"{"items": {"type": "string"}}"#);
    let items = schema.items.as_ref().unwrap();
    assert!(!items.multiple);
    assert_eq!(items.schemas.len(), 1);
    assert_eq!(items.schemas[0].types, Types::single(Type::String));
    assert_eq!(encoded(&codec, r#"{"items": {"type": "string"}}"#), r#""items":{"type":"string"}}"#);
}

#[test]
fn test_items_array_is_multiple() {
    let codec = Codec::default();
    let schema = roundtrip(&codec, br#"{"items": [{"type": "string"}, {"type": "number"}]}"#);
    let items = schema.items.as_ref().unwrap();
    assert!(items.multiple);
    assert_eq!(items.schemas.len(), 2);
    assert_eq!(items.schema_for(1).unwrap().types, Types::single(Type::Number));
    assert!(items.schema_for(2).is_none());
}

#[test]
fn test_items_one_element_list_stays_a_list() {
    let codec = Codec::default();
    assert_eq!(encoded(&codec, r#"{"items": [{}]}"#), r#""items":[{}]}"#);
    assert_eq!(encoded(&codec, r#"{"items": []}"#), r#""items":[]}"#);
}

#[test]
fn test_items_boolean_is_single_boolean_schema() {
    let codec = Codec::default();
    let schema = roundtrip(&codec, br#"{"items": false}"#);
    let items = schema.items.as_ref().unwrap();
    assert!(!items.multiple);
    assert_eq!(items.schemas[0].boolean, Some(false));
    assert_eq!(encoded(&codec, r#"{"items": false}"#), r#""items":false}"#);
}

#[test]
fn test_items_built_in_code() {
    let codec = Codec::default();
    let mut schema = Pooled::<Schema>::acquire();
    schema.items = Some(Items::list([Schema::from_bool(true)]));
    let text = String::from_utf8(codec.encode(&schema).unwrap()).unwrap();
    assert!(text.ends_with(r#""items":[true]}"#), "{text}");

    schema.items = Some(Pooled::<Items>::acquire());
    assert!(codec.encode(&schema).is_err());
}

#[test]
fn test_additional_false_is_forbidden() {
    let codec = Codec::default();
    let schema = roundtrip(
        &codec,
        br#"{"additionalItems": false, "additionalProperties": false, "contains": false}"#,
    );
    assert_eq!(schema.additional_items, Some(Additional::Forbidden));
    assert!(schema.additional_properties.as_ref().unwrap().is_forbidden());
    assert!(schema.contains.as_ref().unwrap().is_forbidden());
}

#[test]
fn test_additional_true_normalizes_to_empty_schema() {
    let codec = Codec::default();
    let schema = codec.decode(br#"{"additionalProperties": true}"#).unwrap();
    let additional = schema.additional_properties.as_ref().unwrap();
    assert_eq!(additional.schema(), Some(&Schema::default()));
    assert_eq!(
        encoded(&codec, r#"{"additionalProperties": true}"#),
        r#""additionalProperties":{}}"#
    );
    assert_eq!(
        encoded(&codec, r#"{"additionalProperties": {}}"#),
        r#""additionalProperties":{}}"#
    );
}

#[test]
fn test_additional_schema() {
    let codec = Codec::default();
    let schema = roundtrip(&codec, br#"{"additionalProperties": {"type": "integer"}}"#);
    match schema.additional_properties.as_ref().unwrap() {
        Additional::Schema(inner) => assert!(inner.types.contains(Type::Integer)),
        Additional::Forbidden => panic!("expected a schema"),
    }
}

#[test]
fn test_additional_rejects_other_kinds() {
    let err = schemata::decode(br#"{"contains": [1]}"#).unwrap_err();
    assert_eq!(err.keyword(), Some("contains"));
}

#[test]
fn test_pattern_properties_keep_order() {
    let codec = Codec::default();
    let schema = roundtrip(
        &codec,
        br#"{"patternProperties": {"^z": {}, "^a": {"type": "string"}, "[0-9]$": false}}"#,
    );
    let sources: Vec<&str> = schema
        .pattern_properties
        .entries
        .iter()
        .map(|(pattern, _)| pattern.as_str())
        .collect();
    assert_eq!(sources, ["^z", "^a", "[0-9]$"]);
    assert_eq!(schema.pattern_properties.matching("abc1").count(), 2);
    assert_eq!(schema.pattern_properties.matching("zzz").count(), 1);
    assert_eq!(
        encoded(&codec, r#"{"patternProperties": {"^z": {}, "^a": true}}"#),
        r#""patternProperties":{"^z":{},"^a":true}}"#
    );
}

#[test]
fn test_properties_and_definitions() {
    let codec = Codec::default();
    let schema = roundtrip(
        &codec,
        br##"{"definitions": {"b": {}, "a": {"type": "null"}}, "properties": {"x": {"$ref": "#/definitions/a"}}}"##,
    );
    let names: Vec<&str> = schema.definitions.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["b", "a"]);
    assert_eq!(schema.properties.get("x").unwrap().reference.as_str(), "#/definitions/a");
    assert!(schema.properties.get("y").is_none());
}

#[test]
fn test_dependencies_both_forms() {
    let codec = Codec::default();
    let schema = roundtrip(
        &codec,
        br#"{"dependencies": {"card": ["billing", "zip"], "name": {"required": ["age"]}, "flag": true}}"#,
    );
    let dependencies = schema.dependencies.as_ref().unwrap();
    match dependencies.get("card").unwrap() {
        Dependency::Names(names) => assert_eq!(names, &["billing", "zip"]),
        Dependency::Schema(_) => panic!("expected names"),
    }
    match dependencies.get("name").unwrap() {
        Dependency::Schema(schema) => {
            assert!(schema.required.as_ref().unwrap().contains("age"));
        }
        Dependency::Names(_) => panic!("expected a schema"),
    }
    assert!(matches!(
        dependencies.get("flag"),
        Some(Dependency::Schema(s)) if s.boolean == Some(true)
    ));
    assert_eq!(
        encoded(&codec, r#"{"dependencies": {"card": ["billing"], "name": {}}}"#),
        r#""dependencies":{"card":["billing"],"name":{}}}"#
    );
}

#[test]
fn test_required() {
    let codec = Codec::default();
    let schema = roundtrip(&codec, br#"{"required": ["a", "b"]}"#);
    let required = schema.required.as_ref().unwrap();
    assert_eq!(required.iter().collect::<Vec<_>>(), ["a", "b"]);
    assert!(schemata::decode(br#"{"required": ["a", 1]}"#).is_err());
    assert!(schemata::decode(br#"{"required": "a"}"#).is_err());

    let mut built = Pooled::<Schema>::acquire();
    built.required = Some(Pooled::new(["id"].into_iter().collect::<StringArray>()));
    let text = String::from_utf8(codec.encode(&built).unwrap()).unwrap();
    assert!(text.ends_with(r#""required":["id"]}"#));
}

#[test]
fn test_const_keeps_detected_type() {
    let codec = Codec::default();
    for (input, ty) in [
        ("null", Type::Null),
        ("true", Type::Boolean),
        ("3", Type::Integer),
        ("3.5", Type::Number),
        (r#""s""#, Type::String),
        ("[1]", Type::Array),
        (r#"{"a": 1}"#, Type::Object),
    ] {
        let document = format!(r#"{{"const": {input}}}"#);
        let schema = roundtrip(&codec, document.as_bytes());
        assert_eq!(schema.constant.as_ref().unwrap().ty, ty, "{input}");
    }
}

#[test]
fn test_const_null_differs_from_absent() {
    let codec = Codec::default();
    let with_null = codec.decode(br#"{"const": null}"#).unwrap();
    let without = codec.decode(b"{}").unwrap();
    assert_ne!(*with_null, *without);
    assert_eq!(encoded(&codec, r#"{"const": null}"#), r#""const":null}"#);
}

#[test]
fn test_enum_values() {
    let codec = Codec::default();
    let schema = roundtrip(&codec, br#"{"enum": ["red", 1, null, [true], {"k": "v"}]}"#);
    let enumeration = schema.enumeration.as_ref().unwrap();
    assert_eq!(enumeration.len(), 5);
    assert!(enumeration.contains(&Value::from("red")));
    assert!(enumeration.contains(&Value::Null));
    assert!(!enumeration.contains(&Value::from("blue")));
    assert_eq!(enumeration.values[4].ty, Type::Object);

    let mut built = Pooled::<Schema>::acquire();
    built.enumeration = Some(Enum::of(["a", "b"]));
    built.constant = Some(Const::of(1i64));
    let text = String::from_utf8(codec.encode(&built).unwrap()).unwrap();
    assert!(text.ends_with(r#""const":1,"enum":["a","b"]}"#), "{text}");
}

#[test]
fn test_type_forms() {
    let codec = Codec::default();
    let single = roundtrip(&codec, br#"{"type": "integer"}"#);
    assert!(!single.types.multiple);
    assert!(single.types.contains(Type::Integer));

    let list = roundtrip(&codec, br#"{"type": ["string"]}"#);
    assert!(list.types.multiple);
    assert_eq!(encoded(&codec, r#"{"type": ["string"]}"#), r#""type":["string"]}"#);
    assert_eq!(
        encoded(&codec, r#"{"type": ["null", "array"]}"#),
        r#""type":["null","array"]}"#
    );
}

#[test]
fn test_unknown_type_name_is_rejected() {
    let err = schemata::decode(br#"{"type": "strnig"}"#).unwrap_err();
    assert!(matches!(err, schemata::Error::Vocabulary { ref value, .. } if value == "strnig"));
    assert_eq!(err.keyword(), Some("type"));
    assert!(schemata::decode(br#"{"type": ["string", "float"]}"#).is_err());
}

#[test]
fn test_unspecified_type_cannot_be_encoded() {
    let mut schema = Pooled::<Schema>::acquire();
    schema.types = Types::single(Type::Unspecified);
    let err = schemata::encode(&schema).unwrap_err();
    assert!(matches!(err, schemata::Error::EncodeError(_)));
}

#[test]
fn test_formats() {
    let codec = Codec::default();
    let schema = roundtrip(&codec, br#"{"format": "date-time"}"#);
    assert_eq!(schema.format, Some(Format::DateTime));
    let custom = roundtrip(&codec, br#"{"format": "semver"}"#);
    assert_eq!(custom.format, Some(Format::Custom("semver".to_string())));
    assert_eq!(encoded(&codec, r#"{"format": "semver"}"#), r#""format":"semver"}"#);
}

#[test]
fn test_pattern_keyword() {
    let codec = Codec::default();
    let schema = roundtrip(&codec, br#"{"pattern": "^\\d{3}$"}"#);
    let pattern = schema.pattern.as_ref().unwrap();
    assert_eq!(pattern.as_str(), r"^\d{3}$");
    assert!(pattern.is_match("123"));
    assert!(!pattern.is_match("1234"));
}

#[test]
fn test_default_and_examples() {
    let codec = Codec::default();
    let schema = roundtrip(
        &codec,
        br#"{"default": {"a": [1, "x", {"b": null}]}, "examples": [{"type": "string"}, false]}"#,
    );
    match schema.default.as_ref().unwrap() {
        Value::Object(members) => assert_eq!(members.len(), 1),
        other => panic!("unexpected default {other:?}"),
    }
    assert_eq!(schema.examples.len(), 2);
    assert_eq!(schema.examples[1].boolean, Some(false));
}

#[test]
fn test_composition() {
    let codec = Codec::default();
    assert_encodes_to(
        &codec,
        r#"{"oneOf": [{}, false], "anyOf": [true], "allOf": [{"type": "null"}], "else": {}, "then": false, "if": true}"#,
        r#"{"$schema":"http://json-schema.org/draft-07/schema#","if":true,"then":false,"else":{},"allOf":[{"type":"null"}],"anyOf":[true],"oneOf":[{},false]}"#,
    );
}
