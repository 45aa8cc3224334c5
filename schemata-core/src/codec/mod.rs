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


//! Decoding and encoding between JSON text and schema trees.
//!
//! Decoding rides on `serde_json`: [`visit`] drives the deserializer with a
//! visitor that forwards each value to a [`Serializer`] hook, and
//! [`read_object`] feeds each member name to an [`ObjectSerializer`], which
//! decodes the value in place through a `DeserializeSeed`. Nothing is
//! buffered besides the output of the [`WriteContext`].

mod context;
mod core;
mod engine;

pub use self::context::{ReadContext, WriteContext};
pub use self::core::{Decode, ObjectSerializer, Serializer};
pub use self::engine::{
    decode_field, next_element, next_value, read_members, read_object, skip_unknown, visit,
};

use tracing::debug;

use crate::buffer::as_json_text;
use crate::config::Config;
use crate::error::Error;
use crate::pool::{Pool, Poolable, Pooled};
use crate::schema::Schema;
use crate::stream::StreamDecoder;

/// Entry point for decoding and encoding schemas.
///
/// A `Codec` is `Send + Sync` and may be shared across threads. Output
/// buffers are recycled through an internal pool.
///
/// ```rust
/// use schemata_core::codec::Codec;
///
/// let codec = Codec::default().max_depth(32).strict_enum(false);
/// let schema = codec.decode(br#"{"type": "string", "maxLength": 8}"#).unwrap();
/// assert_eq!(schema.max_length.value, 8);
/// let bytes = codec.encode(&schema).unwrap();
/// assert!(bytes.starts_with(br#"{"$schema":"#));
/// ```
pub struct Codec {
    config: Config,
    write_context_pool: Pool<WriteContext>,
}

impl Default for Codec {
    fn default() -> Self {
        Codec::with_config(Config::default())
    }
}

impl Codec {
    pub fn with_config(config: Config) -> Self {
        debug!(?config, "creating codec");
        Codec {
            config,
            write_context_pool: Pool::new(WriteContext::default),
        }
    }

    /// Sets the maximum nesting depth accepted by decode.
    ///
    /// Input nested deeper than this fails with
    /// [`Error::DepthExceed`] instead of consuming more stack. The default
    /// is 64. The tokenizer separately refuses nesting beyond 128 levels.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Sets whether `"enum": []` is rejected. When disabled, an empty enum
    /// decodes as a present, empty list and is encoded back as `[]`.
    pub fn strict_enum(mut self, strict_enum: bool) -> Self {
        self.config.strict_enum = strict_enum;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decodes a root schema document.
    ///
    /// A root object without `$schema` is tagged with the draft-07
    /// meta-schema URL. Trailing non-whitespace input is an error. On error
    /// every node acquired so far has already been returned to its pool.
    pub fn decode(&self, bf: &[u8]) -> Result<Pooled<Schema>, Error> {
        let result = self.decode_value::<Schema>(bf).map(|mut schema| {
            schema.normalize_root();
            schema
        });
        if let Err(e) = &result {
            debug!(error = %e, "failed to decode schema");
        }
        result
    }

    /// Decodes a single value of any pooled type from `bf`.
    pub fn decode_value<T: Poolable + Serializer>(&self, bf: &[u8]) -> Result<Pooled<T>, Error> {
        let text = as_json_text(bf)?;
        let mut context = ReadContext::new(&self.config);
        decode_text(&mut context, text)
    }

    /// Iterates the JSON values in `bf` with this codec's
    /// configuration.
    pub fn decode_stream<'bf, T: Poolable + Serializer>(
        &self,
        bf: &'bf [u8],
    ) -> StreamDecoder<'bf, T> {
        StreamDecoder::with_config(bf, &self.config)
    }

    /// Encodes a root schema document. `$schema` is always written for an
    /// object root.
    pub fn encode(&self, schema: &Schema) -> Result<Vec<u8>, Error> {
        self.write_context_pool.borrow_mut(|context| {
            context.reset();
            schema.encode_root(context)?;
            Ok(context.writer.dump())
        })
    }

    /// Encodes any value with a wire form.
    pub fn encode_value<T: Serializer + ?Sized>(&self, value: &T) -> Result<Vec<u8>, Error> {
        self.write_context_pool.borrow_mut(|context| {
            context.reset();
            value.encode(context)?;
            Ok(context.writer.dump())
        })
    }

    /// Returns a decoded tree to the pools. Equivalent to dropping it.
    pub fn release(&self, schema: Pooled<Schema>) {
        crate::pool::release(schema)
    }
}

/// Decodes exactly one value from `text`; trailing non-whitespace input is
/// an error.
pub(crate) fn decode_text<T: Poolable + Serializer>(
    context: &mut ReadContext,
    text: &str,
) -> Result<Pooled<T>, Error> {
    context.reset();
    let mut de = serde_json::Deserializer::from_str(text);
    let mut value = Pooled::<T>::acquire();
    if let Err(err) = value.decode(context, &mut de) {
        return Err(context.take_error(err));
    }
    de.end().map_err(|err| {
        Error::invalid_data(format!(
            "trailing characters at line {} column {}",
            err.line(),
            err.column()
        ))
    })?;
    Ok(value)
}
