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


//! # Schemata Core
//!
//! The engine behind `schemata`: an in-memory model of draft-07 JSON Schema
//! documents and a streaming codec between that model and JSON text.
//!
//! ## Architecture
//!
//! - **`schema`**: the recursive [`Schema`] node, one field per keyword
//! - **`keyword`**: keyword values whose shape depends on the wire form
//!   (`items`, `additionalProperties`, `dependencies`, `enum`, ...)
//! - **`primitive`**: scalar wrappers that record whether a keyword was present
//! - **`value`**: literal JSON values for `default`, `const` and `enum`
//! - **`types`**: `type` and `format` vocabularies, keyword names, constants
//! - **`regexp`**: compile-once regular expressions for `pattern` and
//!   `patternProperties`
//! - **`buffer`**: the output buffer and input text checks
//! - **`codec`**: read/write contexts, the key-dispatch engine and the
//!   [`Codec`] entry point
//! - **`stream`**: sequences of values
//! - **`pool`**: segmented object pools and the [`Pooled`] owner handle
//! - **`error`**: the [`Error`] type
//!
//! ## Decoding
//!
//! Decode never builds an intermediate document tree. `serde_json` walks
//! the input once and drives the model through `DeserializeSeed` visitors;
//! each object member is dispatched by a `match` on the keyword name
//! straight into the field that stores it. Unknown keywords are skipped
//! and dropped.
//!
//! ## Pooling
//!
//! Nodes and keyword values come from per-type pools. A [`Pooled`] handle
//! is the only owner of its instance: dropping it resets the instance,
//! releases its children and parks it for reuse. Decode failures release
//! everything acquired so far.
//!
//! ```rust
//! use schemata_core::{Codec, Type};
//!
//! let codec = Codec::default();
//! let schema = codec
//!     .decode(br#"{"type": ["string", "null"], "x-internal": true}"#)
//!     .unwrap();
//! assert!(schema.types.contains(Type::Null));
//! let json = codec.encode(&schema).unwrap();
//! assert_eq!(
//!     json,
//!     br#"{"$schema":"http://json-schema.org/draft-07/schema#","type":["string","null"]}"#
//! );
//! codec.release(schema);
//! ```

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod keyword;
pub mod pool;
pub mod primitive;
pub mod regexp;
pub mod schema;
pub mod stream;
pub mod types;
pub mod util;
pub mod value;

pub use codec::{Codec, ObjectSerializer, Serializer};
pub use config::Config;
pub use error::Error;
pub use keyword::{
    Additional, Const, Dependency, DependencyMap, Enum, Items, PatternProperties, SchemaMap,
    StringArray,
};
pub use pool::{release, Pool, PoolStats, Poolable, Pooled};
pub use regexp::{Pattern, Regexp};
pub use schema::Schema;
pub use stream::{StreamDecoder, StreamEncoder};
pub use types::{key, DraftVersion, Format, Type, Types, DRAFT7_SCHEMA_URL, MEDIA_TYPE};
pub use value::Value;
