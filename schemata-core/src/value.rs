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


//! Literal JSON values carried by `default`, `const` and `enum`.

use indexmap::IndexMap;
use serde::de::{Deserializer, MapAccess, SeqAccess};

use crate::buffer::JsonKind;
use crate::codec::{
    next_element, next_value, read_members, Decode, ReadContext, Serializer, WriteContext,
};
use crate::error::Error;
use crate::types::Type;

/// A JSON number that remembers whether it was written as an integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Returns the value as an integer when it has no fractional part.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(v) => Some(v),
            Number::Float(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => {
                Some(v as i64)
            }
            Number::Float(_) => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn kind(&self) -> JsonKind {
        match self {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// The schema type a literal belongs to. Integers written without a
    /// fraction map to [`Type::Integer`].
    pub fn schema_type(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Bool(_) => Type::Boolean,
            Value::Number(Number::Int(_)) => Type::Integer,
            Value::Number(Number::Float(_)) => Type::Number,
            Value::String(_) => Type::String,
            Value::Array(_) => Type::Array,
            Value::Object(_) => Type::Object,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(Number::Int(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(Number::Float(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl Decode for Value {
    fn decode_new<'de, D: Deserializer<'de>>(
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let mut value = Value::Null;
        value.decode(context, deserializer)?;
        Ok(value)
    }
}

impl Serializer for Value {
    const EXPECTED: &'static str = "JSON value";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        match self {
            Value::Null => context.writer.write_null(),
            Value::Bool(v) => context.writer.write_bool(*v),
            Value::Number(n) => context.writer.write_number(n),
            Value::String(s) => context.writer.write_str(s),
            Value::Array(items) => {
                context.begin_array()?;
                for item in items {
                    context.element()?;
                    item.encode(context)?;
                }
                context.end_array()
            }
            Value::Object(members) => {
                context.begin_object()?;
                for (key, value) in members {
                    context.key(key)?;
                    value.encode(context)?;
                }
                context.end_object()
            }
        }
    }

    fn visit_null(&mut self, _context: &mut ReadContext) -> Result<(), Error> {
        *self = Value::Null;
        Ok(())
    }

    fn visit_bool(&mut self, _context: &mut ReadContext, value: bool) -> Result<(), Error> {
        *self = Value::Bool(value);
        Ok(())
    }

    fn visit_number(&mut self, _context: &mut ReadContext, value: Number) -> Result<(), Error> {
        *self = Value::Number(value);
        Ok(())
    }

    fn visit_str(&mut self, _context: &mut ReadContext, value: &str) -> Result<(), Error> {
        *self = Value::String(value.to_owned());
        Ok(())
    }

    fn visit_seq<'de, A: SeqAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        mut seq: A,
    ) -> Result<(), A::Error> {
        let mut items: Vec<Value> = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = next_element(context, &mut seq)? {
            items.push(item);
        }
        *self = Value::Array(items);
        Ok(())
    }

    fn visit_map<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        map: A,
    ) -> Result<(), A::Error> {
        let mut members = IndexMap::new();
        read_members(context, map, |context, key, map| {
            let value: Value = next_value(context, map)?;
            members.insert(key.to_owned(), value);
            Ok(())
        })?;
        *self = Value::Object(members);
        Ok(())
    }
}
