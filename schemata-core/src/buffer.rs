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


//! Output buffer ([`Writer`]) and input checks shared by the decode paths.
//!
//! Tokenizing is done by `serde_json`; the writer drives its compact
//! [`Formatter`] directly so that encode never builds a document tree.

use std::fmt;

use serde::Serializer as _;
use serde_json::ser::{CompactFormatter, Formatter};

use crate::error::Error;
use crate::value::Number;

/// The kind of a JSON value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks that `bf` is UTF-8 before it reaches the tokenizer.
///
/// `serde_json` does not validate the contents of values it skips, so this
/// is the one place invalid bytes under unknown keywords are caught.
pub fn as_json_text(bf: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(bf).map_err(|err| {
        let valid = &bf[..err.valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = match valid.iter().rposition(|&b| b == b'\n') {
            Some(nl) => valid.len() - nl,
            None => valid.len() + 1,
        };
        Error::syntax(line, column, "invalid UTF-8")
    })
}

#[cold]
fn sink_error<E: fmt::Display>(err: E) -> Error {
    Error::encode_error(format!("write failed: {err}"))
}

fn write_escaped(bf: &mut Vec<u8>, s: &str) -> Result<(), Error> {
    let mut ser = serde_json::Serializer::new(bf);
    (&mut ser).serialize_str(s).map_err(sink_error)
}

#[derive(Default)]
pub struct Writer {
    pub(crate) bf: Vec<u8>,
}

impl Writer {
    pub fn reset(&mut self) {
        // keep capacity and reset len to 0
        self.bf.clear();
    }

    pub fn dump(&self) -> Vec<u8> {
        self.bf.clone()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn truncate(&mut self, len: usize) {
        self.bf.truncate(len);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.bf.reserve(additional);
    }

    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) {
        self.bf.push(value);
    }

    pub fn write_null(&mut self) -> Result<(), Error> {
        CompactFormatter.write_null(&mut self.bf).map_err(sink_error)
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), Error> {
        CompactFormatter
            .write_bool(&mut self.bf, value)
            .map_err(sink_error)
    }

    pub fn write_i64(&mut self, value: i64) -> Result<(), Error> {
        CompactFormatter
            .write_i64(&mut self.bf, value)
            .map_err(sink_error)
    }

    /// Writes a float. Integral values keep a trailing `.0` so that they read
    /// back as floats rather than integers.
    pub fn write_f64(&mut self, value: f64) -> Result<(), Error> {
        if !value.is_finite() {
            return Err(Error::encode_error(format!(
                "{value} has no JSON representation"
            )));
        }
        CompactFormatter
            .write_f64(&mut self.bf, value)
            .map_err(sink_error)
    }

    pub fn write_number(&mut self, value: &Number) -> Result<(), Error> {
        match *value {
            Number::Int(v) => self.write_i64(v),
            Number::Float(v) => self.write_f64(v),
        }
    }

    /// Writes `s` as a quoted JSON string.
    pub fn write_str(&mut self, s: &str) -> Result<(), Error> {
        write_escaped(&mut self.bf, s)
    }

    pub fn begin_object(&mut self) -> Result<(), Error> {
        CompactFormatter
            .begin_object(&mut self.bf)
            .map_err(sink_error)
    }

    pub fn end_object(&mut self) -> Result<(), Error> {
        CompactFormatter.end_object(&mut self.bf).map_err(sink_error)
    }

    pub fn begin_array(&mut self) -> Result<(), Error> {
        CompactFormatter.begin_array(&mut self.bf).map_err(sink_error)
    }

    pub fn end_array(&mut self) -> Result<(), Error> {
        CompactFormatter.end_array(&mut self.bf).map_err(sink_error)
    }

    /// Writes the separator, the quoted `name` and the colon of an object
    /// member. The value is written next by the caller.
    pub fn write_key(&mut self, first: bool, name: &str) -> Result<(), Error> {
        let mut f = CompactFormatter;
        f.begin_object_key(&mut self.bf, first).map_err(sink_error)?;
        write_escaped(&mut self.bf, name)?;
        f.end_object_key(&mut self.bf).map_err(sink_error)?;
        f.begin_object_value(&mut self.bf).map_err(sink_error)
    }

    pub fn begin_element(&mut self, first: bool) -> Result<(), Error> {
        CompactFormatter
            .begin_array_value(&mut self.bf, first)
            .map_err(sink_error)
    }
}
