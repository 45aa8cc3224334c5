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



use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use schemata::Codec;
use test_helpers::{json, KITCHEN_SINK};

#[test]
fn test_shared_codec_multi_thread() {
    let codec = Arc::new(Codec::default());
    let src: HashSet<String> = (0..16).map(|i| format!("title {i}")).collect();
    // encode
    let mut handles = vec![];
    for title in &src {
        let codec = Arc::clone(&codec);
        let document = format!(r#"{{"title": {title:?}, "type": "string"}}"#);
        handles.push(thread::spawn(move || {
            let schema = codec.decode(document.as_bytes()).unwrap();
            codec.encode(&schema).unwrap()
        }));
    }
    let encoded: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // decode
    let mut handles = vec![];
    for bytes in encoded {
        let codec = Arc::clone(&codec);
        handles.push(thread::spawn(move || {
            codec.decode(&bytes).unwrap().title.value.clone()
        }));
    }
    let dest: HashSet<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(dest, src);
}

#[test]
fn test_kitchen_sink_multi_thread() {
    let codec = Arc::new(Codec::default());
    let expected = json(KITCHEN_SINK.as_bytes());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                (0..50)
                    .map(|_| {
                        let schema = codec.decode(KITCHEN_SINK.as_bytes()).unwrap();
                        codec.encode(&schema).unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        for bytes in handle.join().unwrap() {
            assert_eq!(json(&bytes), expected);
        }
    }
}
