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


//! Sequences of JSON values: decode them one at a time from a byte slice,
//! encode them newline-delimited.

use std::marker::PhantomData;

use serde_json::de::SliceRead;
use serde_json::value::RawValue;

use crate::codec::{decode_text, ReadContext, Serializer, WriteContext};
use crate::config::Config;
use crate::error::Error;
use crate::pool::{Poolable, Pooled};

/// Iterates the values in a byte slice.
///
/// Values are separated by whitespace. Objects, arrays and strings delimit
/// themselves and may directly follow one another (`{}{}`), but two scalars
/// must not touch: `truefalse` is an error.
///
/// Each item is decoded into a fresh pooled instance. Iteration stops after
/// the first error.
pub struct StreamDecoder<'bf, T> {
    values: serde_json::StreamDeserializer<'bf, SliceRead<'bf>, &'bf RawValue>,
    context: ReadContext,
    failed: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'bf, T: Poolable + Serializer> StreamDecoder<'bf, T> {
    pub fn new(bf: &'bf [u8]) -> Self {
        Self::with_config(bf, &Config::default())
    }

    pub fn with_config(bf: &'bf [u8], config: &Config) -> Self {
        StreamDecoder {
            values: serde_json::Deserializer::from_slice(bf).into_iter(),
            context: ReadContext::new(config),
            failed: false,
            _marker: PhantomData,
        }
    }

    /// Byte offset just past the last value read.
    pub fn offset(&self) -> usize {
        self.values.byte_offset()
    }
}

impl<'bf, T: Poolable + Serializer> Iterator for StreamDecoder<'bf, T> {
    type Item = Result<Pooled<T>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = match self.values.next()? {
            Ok(raw) => decode_text(&mut self.context, raw.get()),
            Err(e) => Err(Error::from(e)),
        };
        self.failed = result.is_err();
        Some(result)
    }
}

/// Writes values one per line.
#[derive(Default)]
pub struct StreamEncoder {
    context: WriteContext,
}

impl StreamEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode<T: Serializer + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        let mark = self.context.writer.len();
        if let Err(e) = value.encode(&mut self.context) {
            self.context.reset_to(mark);
            return Err(e);
        }
        self.context.writer.write_u8(b'\n');
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.context.writer.as_slice()
    }

    pub fn finish(self) -> Vec<u8> {
        self.context.writer.bf
    }
}
