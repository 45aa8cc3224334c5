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


use schemata::primitive::{Integer, Str};
use schemata::{Codec, Config, Error, Schema, StreamDecoder, StreamEncoder};

#[test]
fn test_decode_schema_stream() {
    let input = br#"{"title": "a"}
        true
        {"type": "integer"} {}"#;
    let schemas: Vec<_> = StreamDecoder::<Schema>::new(input)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(schemas.len(), 4);
    assert_eq!(schemas[0].title.as_str(), "a");
    assert_eq!(schemas[1].boolean, Some(true));
    assert!(schemas[2].types.contains(schemata::Type::Integer));
    assert_eq!(*schemas[3], Schema::default());
}

#[test]
fn test_stream_values_are_not_normalized() {
    let mut decoder = StreamDecoder::<Schema>::new(b"{}");
    let schema = decoder.next().unwrap().unwrap();
    assert!(!schema.schema.initialized);
    assert!(decoder.next().is_none());
}

#[test]
fn test_decode_primitive_stream() {
    let values: Vec<i64> = StreamDecoder::<Integer>::new(b"1 2\n3\t-4 5.0")
        .map(|r| r.map(|i| i.value))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(values, [1, 2, 3, -4, 5]);
}

#[test]
fn test_stream_stops_after_error() {
    let mut decoder = StreamDecoder::<Str>::new(br#""a" 1 "b""#);
    assert_eq!(decoder.next().unwrap().unwrap().as_str(), "a");
    assert!(matches!(decoder.next(), Some(Err(Error::TypeMismatch { .. }))));
    assert!(decoder.next().is_none());
}

#[test]
fn test_stream_respects_config() {
    let config = Config {
        max_depth: 2,
        ..Config::default()
    };
    let input = br#"{"not": {}} {"not": {"not": {}}}"#;
    let mut decoder = StreamDecoder::<Schema>::with_config(input, &config);
    assert!(decoder.next().unwrap().is_ok());
    let offset = decoder.offset();
    assert!(offset > 0);
    assert!(matches!(decoder.next(), Some(Err(Error::DepthExceed(_)))));
}

#[test]
fn test_codec_decode_stream() {
    let codec = Codec::default().strict_enum(false);
    let mut decoder = codec.decode_stream::<Schema>(br#"{"enum": []} {"enum": [1]}"#);
    assert!(decoder.next().unwrap().unwrap().enumeration.as_ref().unwrap().is_empty());
    assert_eq!(decoder.next().unwrap().unwrap().enumeration.as_ref().unwrap().len(), 1);
    assert!(decoder.next().is_none());
}

#[test]
fn test_empty_stream() {
    assert!(StreamDecoder::<Schema>::new(b"  \n ").next().is_none());
}

#[test]
fn test_encode_stream() {
    let mut encoder = StreamEncoder::new();
    let schemas: Vec<_> = StreamDecoder::<Schema>::new(br#"{"title": "a"} false"#)
        .collect::<Result<_, _>>()
        .unwrap();
    for schema in &schemas {
        encoder.encode(&**schema).unwrap();
    }
    encoder.encode(&Integer::new(7)).unwrap();
    encoder.encode(&Str::new("x")).unwrap();
    assert_eq!(encoder.as_bytes(), b"{\"title\":\"a\"}\nfalse\n7\n\"x\"\n");
}

#[test]
fn test_encode_stream_discards_failed_value() {
    let mut encoder = StreamEncoder::new();
    encoder.encode(&Integer::new(1)).unwrap();
    let mut bad = Schema::default();
    bad.title.set("partial");
    bad.types = schemata::Types::single(schemata::Type::Unspecified);
    assert!(encoder.encode(&bad).is_err());
    encoder.encode(&Integer::new(2)).unwrap();
    assert_eq!(encoder.finish(), b"1\n2\n");
}

#[test]
fn test_stream_separators() {
    let schemas: Vec<_> = StreamDecoder::<Schema>::new(b"{}{}")
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(schemas.len(), 2);

    let values: Vec<_> = StreamDecoder::<Str>::new(br#""a""b"  "c""#)
        .map(|r| r.map(|s| s.as_str().to_owned()))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(values, ["a", "b", "c"]);

    let mut decoder = StreamDecoder::<Schema>::new(b"truefalse");
    assert!(decoder.next().unwrap().is_err());
    assert!(decoder.next().is_none());

    let mut decoder = StreamDecoder::<Integer>::new(b"12 3");
    assert_eq!(decoder.next().unwrap().unwrap().value, 12);
    assert_eq!(decoder.offset(), 2);
    assert_eq!(decoder.next().unwrap().unwrap().value, 3);
    assert!(decoder.next().is_none());
}

#[test]
fn test_stream_rejects_invalid_utf8() {
    let mut decoder = StreamDecoder::<Schema>::new(b"{} {\"title\": \"\xff\"}");
    assert!(decoder.next().unwrap().is_ok());
    assert!(decoder.next().unwrap().is_err());
    assert!(decoder.next().is_none());
}
