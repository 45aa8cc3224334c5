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


//! # Schemata
//!
//! Decode, inspect and encode draft-07 JSON Schema documents.
//!
//! Decoding is streaming and allocation-conscious: the input is tokenized
//! once, every keyword lands directly in its typed field, and schema nodes
//! are recycled through object pools.
//!
//! ```rust
//! use schemata::{Additional, Type};
//!
//! let schema = schemata::decode(
//!     br#"{
//!         "type": "object",
//!         "properties": {"id": {"type": "integer", "minimum": 1}},
//!         "required": ["id"],
//!         "additionalProperties": false
//!     }"#,
//! )
//! .unwrap();
//!
//! let id = schema.properties.get("id").unwrap();
//! assert!(id.types.contains(Type::Integer));
//! assert_eq!(schema.additional_properties, Some(Additional::Forbidden));
//!
//! let bytes = schemata::encode(&schema).unwrap();
//! assert_eq!(*schemata::decode(&bytes).unwrap(), *schema);
//! schemata::release(schema);
//! ```
//!
//! Use [`Codec`] directly to change limits:
//!
//! ```rust
//! let codec = schemata::Codec::default().max_depth(8);
//! let deep = "[".repeat(16) + &"]".repeat(16);
//! let input = format!(r#"{{"default": {deep}}}"#);
//! assert!(codec.decode(input.as_bytes()).is_err());
//! ```

use once_cell::sync::Lazy;

pub use schemata_core::*;

static DEFAULT_CODEC: Lazy<Codec> = Lazy::new(Codec::default);

/// Decodes a schema document with the default configuration.
pub fn decode(bf: &[u8]) -> Result<Pooled<Schema>, Error> {
    DEFAULT_CODEC.decode(bf)
}

/// Encodes a schema document with the default configuration.
pub fn encode(schema: &Schema) -> Result<Vec<u8>, Error> {
    DEFAULT_CODEC.encode(schema)
}

/// Returns a decoded schema tree to the pools.
pub fn release(schema: Pooled<Schema>) {
    DEFAULT_CODEC.release(schema)
}
