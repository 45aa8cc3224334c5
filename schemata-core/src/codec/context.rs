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


use serde::de;

use crate::buffer::{JsonKind, Writer};
use crate::config::Config;
use crate::error::Error;

const ROOT_KEYWORD: &str = "<root>";

/// Decode state carried alongside the `serde_json` deserializer.
///
/// Visitors can only report errors through the deserializer's own error
/// type, so the first [`Error`] raised by a keyword type is parked here and
/// recovered by [`take_error`](ReadContext::take_error) once the
/// deserializer unwinds.
pub struct ReadContext {
    max_depth: u32,
    current_depth: u32,
    strict_enum: bool,
    keyword: &'static str,
    error: Option<Error>,
}

impl ReadContext {
    pub fn new(config: &Config) -> ReadContext {
        ReadContext {
            max_depth: config.max_depth(),
            current_depth: 0,
            strict_enum: config.is_strict_enum(),
            keyword: ROOT_KEYWORD,
            error: None,
        }
    }

    /// Prepares the context for the next top-level value.
    pub fn reset(&mut self) {
        self.current_depth = 0;
        self.keyword = ROOT_KEYWORD;
        self.error = None;
    }

    /// Keyword whose value is being decoded, used to label errors.
    #[inline(always)]
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    #[inline(always)]
    pub fn set_keyword(&mut self, keyword: &'static str) {
        self.keyword = keyword;
    }

    #[inline(always)]
    pub fn is_strict_enum(&self) -> bool {
        self.strict_enum
    }

    pub fn depth(&self) -> u32 {
        self.current_depth
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.max_depth {
            return Err(Error::depth_exceed(format!(
                "nesting depth exceeds the limit of {} under keyword `{}`",
                self.max_depth, self.keyword
            )));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Builds a type mismatch for the current keyword.
    pub fn mismatch(&self, expected: &'static str, found: JsonKind) -> Error {
        Error::type_mismatch(self.keyword, expected, found)
    }

    /// Parks `err` and returns a deserializer error standing in for it.
    #[cold]
    pub fn fail<E: de::Error>(&mut self, err: Error) -> E {
        let custom = E::custom(&err);
        if self.error.is_none() {
            self.error = Some(err);
        }
        custom
    }

    /// Converts a keyword-level result into the deserializer's error type.
    #[inline(always)]
    pub fn lift<T, E: de::Error>(&mut self, result: Result<T, Error>) -> Result<T, E> {
        match result {
            Ok(value) => Ok(value),
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Recovers the error that ended a decode, positioned where the
    /// deserializer stopped.
    pub fn take_error(&mut self, err: serde_json::Error) -> Error {
        match self.error.take() {
            Some(parked) => parked.at(err.line(), err.column()),
            None => Error::from(err),
        }
    }
}

/// Output state: the writer plus one "no member written yet" flag per open
/// container, used to place commas.
#[derive(Default)]
pub struct WriteContext {
    pub writer: Writer,
    first: Vec<bool>,
}

impl WriteContext {
    pub fn reset(&mut self) {
        self.writer.reset();
        self.first.clear();
    }

    /// Drops output written after `len`, e.g. a value that failed halfway.
    pub fn reset_to(&mut self, len: usize) {
        self.writer.truncate(len);
        self.first.clear();
    }

    #[inline(always)]
    fn take_first(&mut self) -> bool {
        match self.first.last_mut() {
            Some(first) => std::mem::replace(first, false),
            None => true,
        }
    }

    pub fn begin_object(&mut self) -> Result<(), Error> {
        self.writer.begin_object()?;
        self.first.push(true);
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<(), Error> {
        self.first.pop();
        self.writer.end_object()
    }

    pub fn begin_array(&mut self) -> Result<(), Error> {
        self.writer.begin_array()?;
        self.first.push(true);
        Ok(())
    }

    pub fn end_array(&mut self) -> Result<(), Error> {
        self.first.pop();
        self.writer.end_array()
    }

    /// Starts an object member: separator, quoted name, colon.
    pub fn key(&mut self, name: &str) -> Result<(), Error> {
        let first = self.take_first();
        self.writer.write_key(first, name)
    }

    /// Starts an array element.
    pub fn element(&mut self) -> Result<(), Error> {
        let first = self.take_first();
        self.writer.begin_element(first)
    }
}
