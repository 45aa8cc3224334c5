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


use indexmap::IndexMap;
use schemata::primitive::{Array, Boolean, Integer, Null, Number, Object, Str};
use schemata::{Codec, Error, Value};

#[test]
fn test_str() {
    let codec = Codec::default();
    let s = codec.decode_value::<Str>(br#""aA\n""#).unwrap();
    assert!(s.initialized);
    assert_eq!(s.as_str(), "aA\n");
    assert_eq!(codec.encode_value(&*s).unwrap(), br#""aA\n""#);
    assert!(codec.decode_value::<Str>(b"1").is_err());
}

#[test]
fn test_boolean_and_null() {
    let codec = Codec::default();
    let b = codec.decode_value::<Boolean>(b" false ").unwrap();
    assert_eq!(*b, Boolean::new(false));
    assert_eq!(codec.encode_value(&*b).unwrap(), b"false");
    let n = codec.decode_value::<Null>(b"null").unwrap();
    assert!(n.initialized);
    assert_eq!(codec.encode_value(&*n).unwrap(), b"null");
    assert!(codec.decode_value::<Null>(b"0").is_err());
}

#[test]
fn test_integer() {
    let codec = Codec::default();
    assert_eq!(codec.decode_value::<Integer>(b"-42").unwrap().value, -42);
    assert_eq!(codec.decode_value::<Integer>(b"1e2").unwrap().value, 100);
    assert!(matches!(
        codec.decode_value::<Integer>(b"0.5"),
        Err(Error::TypeMismatch { .. })
    ));
    assert_eq!(codec.encode_value(&Integer::new(i64::MAX)).unwrap(), b"9223372036854775807");
}

#[test]
fn test_number() {
    let codec = Codec::default();
    assert_eq!(codec.decode_value::<Number>(b"2.5").unwrap().value, 2.5);
    assert_eq!(codec.decode_value::<Number>(b"7").unwrap().value, 7.0);
    assert_eq!(codec.encode_value(&Number::new(7.0)).unwrap(), b"7");
    assert_eq!(codec.encode_value(&Number::new(-0.125)).unwrap(), b"-0.125");
    assert!(codec.encode_value(&Number::new(f64::INFINITY)).is_err());
}

#[test]
fn test_array_and_object() {
    let codec = Codec::default();
    let array = codec.decode_value::<Array>(br#"[1, "two", [3.0], {"four": null}]"#).unwrap();
    assert_eq!(array.value.len(), 4);
    assert_eq!(array.value[1], Value::from("two"));
    assert_eq!(
        codec.encode_value(&*array).unwrap(),
        br#"[1,"two",[3.0],{"four":null}]"#
    );

    let object = codec.decode_value::<Object>(br#"{"b": 1, "a": [true]}"#).unwrap();
    let keys: Vec<&str> = object.value.keys().map(String::as_str).collect();
    assert_eq!(keys, ["b", "a"]);
    assert_eq!(codec.encode_value(&*object).unwrap(), br#"{"b":1,"a":[true]}"#);

    let mut members = IndexMap::new();
    members.insert("k".to_string(), Value::from(1.5));
    assert_eq!(codec.encode_value(&Object::new(members)).unwrap(), br#"{"k":1.5}"#);
    assert_eq!(codec.encode_value(&Array::new(vec![])).unwrap(), b"[]");
}

#[test]
fn test_wrappers_distinguish_absent_from_zero() {
    assert!(!Integer::default().initialized);
    assert!(Integer::new(0).initialized);
    let mut s = Str::default();
    s.set("");
    assert!(s.initialized);
    s.clear();
    assert_eq!(s, Str::default());
}
