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


use std::borrow::Cow;
use std::fmt;

use once_cell::sync::OnceCell;
use regex::Regex;
use serde::de::Deserializer;

use crate::codec::{Decode, ReadContext, Serializer, WriteContext};
use crate::error::Error;

/// The regular-expression operations a schema consumer needs.
pub trait Regexp {
    /// The source text of the expression.
    fn as_str(&self) -> &str;

    fn is_match(&self, haystack: &str) -> bool;

    fn find<'h>(&self, haystack: &'h str) -> Option<&'h str>;

    fn find_iter<'h>(&self, haystack: &'h str) -> Vec<&'h str>;

    /// Capture groups of the first match; group 0 is the whole match.
    fn captures<'h>(&self, haystack: &'h str) -> Option<Vec<Option<&'h str>>>;

    fn replace_all<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str>;
}

impl Regexp for Regex {
    fn as_str(&self) -> &str {
        Regex::as_str(self)
    }

    fn is_match(&self, haystack: &str) -> bool {
        Regex::is_match(self, haystack)
    }

    fn find<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        Regex::find(self, haystack).map(|m| m.as_str())
    }

    fn find_iter<'h>(&self, haystack: &'h str) -> Vec<&'h str> {
        Regex::find_iter(self, haystack).map(|m| m.as_str()).collect()
    }

    fn captures<'h>(&self, haystack: &'h str) -> Option<Vec<Option<&'h str>>> {
        Regex::captures(self, haystack)
            .map(|caps| caps.iter().map(|m| m.map(|m| m.as_str())).collect())
    }

    fn replace_all<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str> {
        Regex::replace_all(self, haystack, replacement)
    }
}

/// A regular expression kept together with its source text and compiled
/// at most once.
///
/// Patterns compare equal when their source text is equal.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    compiled: OnceCell<Regex>,
}

impl Pattern {
    /// Compiles `source` immediately.
    pub fn compile(source: &str) -> Result<Pattern, regex::Error> {
        let regex = Regex::new(source)?;
        Ok(Pattern {
            source: source.to_owned(),
            compiled: OnceCell::with_value(regex),
        })
    }

    /// Defers compilation to the first match.
    pub fn lazy(source: impl Into<String>) -> Pattern {
        Pattern {
            source: source.into(),
            compiled: OnceCell::new(),
        }
    }

    /// Returns the compiled expression, compiling it on first use.
    pub fn try_regex(&self) -> Result<&Regex, regex::Error> {
        self.compiled.get_or_try_init(|| Regex::new(&self.source))
    }

    /// # Panics
    ///
    /// Panics if the pattern was built with [`Pattern::lazy`] from source
    /// that does not compile.
    pub fn regex(&self) -> &Regex {
        match self.try_regex() {
            Ok(regex) => regex,
            Err(e) => panic!("invalid pattern {:?}: {e}", self.source),
        }
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }
}

impl Regexp for Pattern {
    fn as_str(&self) -> &str {
        &self.source
    }

    fn is_match(&self, haystack: &str) -> bool {
        self.regex().is_match(haystack)
    }

    fn find<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        Regexp::find(self.regex(), haystack)
    }

    fn find_iter<'h>(&self, haystack: &'h str) -> Vec<&'h str> {
        Regexp::find_iter(self.regex(), haystack)
    }

    fn captures<'h>(&self, haystack: &'h str) -> Option<Vec<Option<&'h str>>> {
        Regexp::captures(self.regex(), haystack)
    }

    fn replace_all<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str> {
        Regexp::replace_all(self.regex(), haystack, replacement)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compiles a pattern read from the wire, labelling failures with the
/// current keyword.
pub(crate) fn compile_in(context: &ReadContext, source: &str) -> Result<Pattern, Error> {
    Pattern::compile(source)
        .map_err(|e| Error::vocabulary(context.keyword(), source.to_owned(), e.to_string()))
}

impl Decode for Pattern {
    fn decode_new<'de, D: Deserializer<'de>>(
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let mut pattern = Pattern::lazy(String::new());
        pattern.decode(context, deserializer)?;
        Ok(pattern)
    }
}

impl Serializer for Pattern {
    const EXPECTED: &'static str = "string";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.write_str(&self.source)
    }

    fn visit_str(&mut self, context: &mut ReadContext, value: &str) -> Result<(), Error> {
        *self = compile_in(context, value)?;
        Ok(())
    }
}
