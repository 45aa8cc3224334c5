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


//! Error type shared by the tokenizer, the codec engine and the keyword types.
//!
//! Error constructors sit on the error path of every scalar read, so they are
//! `#[cold]` to keep the successful decode path tight. Construct errors only
//! through the static functions below.

use std::borrow::Cow;

use serde_json::error::Category;
use thiserror::Error;

use crate::buffer::JsonKind;

/// Set SCHEMATA_PANIC_ON_ERROR=1 at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("SCHEMATA_PANIC_ON_ERROR").is_some();

/// Check if SCHEMATA_PANIC_ON_ERROR environment variable is set.
#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for schema decoding and encoding.
///
/// Decoding stops at the first error; the variants map onto the failure
/// classes of the codec:
///
/// - [`Error::Syntax`] and [`Error::UnexpectedEof`]: the input is not JSON.
/// - [`Error::TypeMismatch`]: a keyword holds the wrong kind of JSON value,
///   e.g. `"maxLength": "abc"`.
/// - [`Error::Vocabulary`]: the value has the right kind but is not part of
///   the draft-07 vocabulary (unknown `type` name, invalid regular
///   expression, empty `enum`).
///
/// Unknown keywords never produce an error.
///
/// ## Debug Mode: SCHEMATA_PANIC_ON_ERROR
///
/// ```bash
/// RUST_BACKTRACE=1 SCHEMATA_PANIC_ON_ERROR=1 cargo test
/// ```
///
/// When enabled, every constructor panics with the error message so the
/// backtrace points at the exact creation site.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Malformed JSON.
    ///
    /// Do not construct this variant directly; use [`Error::syntax`] instead.
    #[error("syntax error at line {line} column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: Cow<'static, str>,
    },

    /// Input ended in the middle of a value.
    ///
    /// Do not construct this variant directly; use [`Error::unexpected_eof`] instead.
    #[error("unexpected end of input at line {line} column {column}")]
    UnexpectedEof { line: usize, column: usize },

    /// A keyword value has the wrong JSON kind.
    ///
    /// The position is that of the end of the offending value; it is 0 until
    /// the codec has located it.
    ///
    /// Do not construct this variant directly; use [`Error::type_mismatch`] instead.
    #[error("keyword `{keyword}` at line {line} column {column}: expected {expected}, found {found}")]
    TypeMismatch {
        keyword: Cow<'static, str>,
        expected: Cow<'static, str>,
        found: JsonKind,
        line: usize,
        column: usize,
    },

    /// A keyword value is outside the draft-07 vocabulary.
    ///
    /// Do not construct this variant directly; use [`Error::vocabulary`] instead.
    #[error("keyword `{keyword}`: invalid value {value:?}: {reason}")]
    Vocabulary {
        keyword: Cow<'static, str>,
        value: String,
        reason: Cow<'static, str>,
    },

    /// Maximum nesting depth exceeded.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`] instead.
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// A value in memory cannot be represented on the wire.
    ///
    /// Do not construct this variant directly; use [`Error::encode_error`] instead.
    #[error("{0}")]
    EncodeError(Cow<'static, str>),

    /// Invalid input that is neither a syntax nor a keyword error.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_data`] instead.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::Syntax`] at the given 1-based line and column.
    ///
    /// # Example
    /// ```
    /// use schemata_core::error::Error;
    ///
    /// let err = Error::syntax(1, 3, "expected `:`");
    /// assert_eq!(err.to_string(), "syntax error at line 1 column 3: expected `:`");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn syntax<S: Into<Cow<'static, str>>>(line: usize, column: usize, message: S) -> Self {
        let err = Error::Syntax {
            line,
            column,
            message: message.into(),
        };
        if PANIC_ON_ERROR {
            panic!("SCHEMATA_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnexpectedEof`] at the given line and column.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unexpected_eof(line: usize, column: usize) -> Self {
        let err = Error::UnexpectedEof { line, column };
        if PANIC_ON_ERROR {
            panic!("SCHEMATA_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TypeMismatch`] for `keyword`.
    ///
    /// # Example
    /// ```
    /// use schemata_core::buffer::JsonKind;
    /// use schemata_core::error::Error;
    ///
    /// let err = Error::type_mismatch("maxLength", "integer", JsonKind::String);
    /// assert_eq!(err.keyword(), Some("maxLength"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_mismatch<K, E>(keyword: K, expected: E, found: JsonKind) -> Self
    where
        K: Into<Cow<'static, str>>,
        E: Into<Cow<'static, str>>,
    {
        let err = Error::TypeMismatch {
            keyword: keyword.into(),
            expected: expected.into(),
            found,
            line: 0,
            column: 0,
        };
        if PANIC_ON_ERROR {
            panic!("SCHEMATA_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Vocabulary`] carrying the offending raw value.
    ///
    /// # Example
    /// ```
    /// use schemata_core::error::Error;
    ///
    /// let err = Error::vocabulary("type", "strnig", "unknown type name");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn vocabulary<K, V, R>(keyword: K, value: V, reason: R) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<String>,
        R: Into<Cow<'static, str>>,
    {
        let err = Error::Vocabulary {
            keyword: keyword.into(),
            value: value.into(),
            reason: reason.into(),
        };
        if PANIC_ON_ERROR {
            panic!("SCHEMATA_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("SCHEMATA_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::EncodeError`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encode_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::EncodeError(s.into());
        if PANIC_ON_ERROR {
            panic!("SCHEMATA_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidData`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidData(s.into());
        if PANIC_ON_ERROR {
            panic!("SCHEMATA_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Returns the keyword an error is attached to, if any.
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Error::TypeMismatch { keyword, .. } | Error::Vocabulary { keyword, .. } => {
                Some(keyword.as_ref())
            }
            _ => None,
        }
    }

    /// Returns the 1-based line and column the error points at, if known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match *self {
            Error::Syntax { line, column, .. }
            | Error::UnexpectedEof { line, column }
            | Error::TypeMismatch { line, column, .. }
                if line > 0 =>
            {
                Some((line, column))
            }
            _ => None,
        }
    }

    /// Fills in the position of a type mismatch that was raised before the
    /// tokenizer could report where it stood.
    pub(crate) fn at(mut self, at_line: usize, at_column: usize) -> Self {
        if let Error::TypeMismatch { line, column, .. } = &mut self {
            if *line == 0 {
                *line = at_line;
                *column = at_column;
            }
        }
        self
    }
}

impl From<serde_json::Error> for Error {
    #[cold]
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        let text = err.to_string();
        let message = match text.rfind(" at line ") {
            Some(end) => text[..end].to_owned(),
            None => text,
        };
        if message == "recursion limit exceeded" {
            return Error::depth_exceed(format!(
                "nesting exceeds the tokenizer limit at line {line} column {column}"
            ));
        }
        match err.classify() {
            Category::Eof => Error::unexpected_eof(line, column),
            Category::Syntax => Error::syntax(line, column, message),
            Category::Data | Category::Io => {
                Error::invalid_data(format!("{message} at line {line} column {column}"))
            }
        }
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use schemata_core::ensure;
/// use schemata_core::error::Error;
///
/// fn check_depth(depth: u32) -> Result<(), Error> {
///     ensure!(depth < 8, "depth {} too large", depth);
///     ensure!(depth > 0, Error::invalid_data("depth must be positive"));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`Error::InvalidData`].
///
/// # Examples
/// ```
/// use schemata_core::bail;
/// use schemata_core::error::Error;
///
/// fn fail_fast() -> Result<(), Error> {
///     bail!("something went wrong");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::invalid_data($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::invalid_data(format!($fmt, $($arg)*)))
    };
}
