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


//! Keyword values that remember whether they were present.
//!
//! Each wrapper pairs a decoded value with an `initialized` flag so that
//! `"minLength": 0` is distinguishable from a missing `minLength`.

use indexmap::IndexMap;
use serde::de::{MapAccess, SeqAccess};

use crate::buffer::JsonKind;
use crate::codec::{next_element, next_value, read_members, ReadContext, Serializer, WriteContext};
use crate::error::Error;
use crate::pool::impl_poolable;
use crate::value::{self, Value};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array {
    pub value: Vec<Value>,
    pub initialized: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boolean {
    pub value: bool,
    pub initialized: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Integer {
    pub value: i64,
    pub initialized: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Null {
    pub initialized: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Number {
    pub value: f64,
    pub initialized: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    pub value: IndexMap<String, Value>,
    pub initialized: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Str {
    pub value: String,
    pub initialized: bool,
}

impl Array {
    pub fn new(value: Vec<Value>) -> Self {
        Array {
            value,
            initialized: true,
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.initialized = false;
    }
}

impl Boolean {
    pub fn new(value: bool) -> Self {
        Boolean {
            value,
            initialized: true,
        }
    }

    pub fn set(&mut self, value: bool) {
        self.value = value;
        self.initialized = true;
    }

    pub fn clear(&mut self) {
        *self = Boolean::default();
    }
}

impl Integer {
    pub fn new(value: i64) -> Self {
        Integer {
            value,
            initialized: true,
        }
    }

    pub fn set(&mut self, value: i64) {
        self.value = value;
        self.initialized = true;
    }

    pub fn clear(&mut self) {
        *self = Integer::default();
    }
}

impl Null {
    pub fn new() -> Self {
        Null { initialized: true }
    }

    pub fn clear(&mut self) {
        self.initialized = false;
    }
}

impl Number {
    pub fn new(value: f64) -> Self {
        Number {
            value,
            initialized: true,
        }
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
        self.initialized = true;
    }

    pub fn clear(&mut self) {
        *self = Number::default();
    }
}

impl Object {
    pub fn new(value: IndexMap<String, Value>) -> Self {
        Object {
            value,
            initialized: true,
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.initialized = false;
    }
}

impl Str {
    pub fn new(value: impl Into<String>) -> Self {
        Str {
            value: value.into(),
            initialized: true,
        }
    }

    /// Replaces the text, reusing the existing allocation.
    pub fn set(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
        self.initialized = true;
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.initialized = false;
    }
}

impl_poolable!(Array, Boolean, Integer, Null, Number, Object, Str);

impl Serializer for Array {
    const EXPECTED: &'static str = "array";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.begin_array()?;
        for item in &self.value {
            context.element()?;
            item.encode(context)?;
        }
        context.end_array()
    }

    fn is_absent(&self) -> bool {
        !self.initialized
    }

    fn visit_seq<'de, A: SeqAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        mut seq: A,
    ) -> Result<(), A::Error> {
        self.value.clear();
        while let Some(item) = next_element(context, &mut seq)? {
            self.value.push(item);
        }
        self.initialized = true;
        Ok(())
    }
}

impl Serializer for Boolean {
    const EXPECTED: &'static str = "boolean";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.write_bool(self.value)
    }

    fn is_absent(&self) -> bool {
        !self.initialized
    }

    fn visit_bool(&mut self, _context: &mut ReadContext, value: bool) -> Result<(), Error> {
        self.set(value);
        Ok(())
    }
}

impl Serializer for Integer {
    const EXPECTED: &'static str = "integer";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.write_i64(self.value)
    }

    fn is_absent(&self) -> bool {
        !self.initialized
    }

    /// Accepts integral floats such as `4.0`.
    fn visit_number(&mut self, context: &mut ReadContext, value: value::Number) -> Result<(), Error> {
        match value.as_i64() {
            Some(value) => {
                self.set(value);
                Ok(())
            }
            None => Err(context.mismatch(Self::EXPECTED, JsonKind::Number)),
        }
    }
}

impl Serializer for Null {
    const EXPECTED: &'static str = "null";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.write_null()
    }

    fn is_absent(&self) -> bool {
        !self.initialized
    }

    fn visit_null(&mut self, _context: &mut ReadContext) -> Result<(), Error> {
        self.initialized = true;
        Ok(())
    }
}

impl Serializer for Number {
    const EXPECTED: &'static str = "number";

    /// Integral values are written without a fraction.
    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        let v = self.value;
        if v.fract() == 0.0 && v.abs() < 9.0e15 {
            context.writer.write_i64(v as i64)
        } else {
            context.writer.write_f64(v)
        }
    }

    fn is_absent(&self) -> bool {
        !self.initialized
    }

    fn visit_number(&mut self, _context: &mut ReadContext, value: value::Number) -> Result<(), Error> {
        self.set(value.as_f64());
        Ok(())
    }
}

impl Serializer for Object {
    const EXPECTED: &'static str = "object";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.begin_object()?;
        for (key, value) in &self.value {
            context.key(key)?;
            value.encode(context)?;
        }
        context.end_object()
    }

    fn is_absent(&self) -> bool {
        !self.initialized
    }

    fn visit_map<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        map: A,
    ) -> Result<(), A::Error> {
        self.value.clear();
        let members = &mut self.value;
        read_members(context, map, |context, key, map| {
            let value: Value = next_value(context, map)?;
            members.insert(key.to_owned(), value);
            Ok(())
        })?;
        self.initialized = true;
        Ok(())
    }
}

impl Serializer for Str {
    const EXPECTED: &'static str = "string";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.write_str(&self.value)
    }

    fn is_absent(&self) -> bool {
        !self.initialized
    }

    fn visit_str(&mut self, _context: &mut ReadContext, value: &str) -> Result<(), Error> {
        self.set(value);
        Ok(())
    }
}
