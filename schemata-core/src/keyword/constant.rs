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


use serde::de::{Deserializer, SeqAccess};

use crate::codec::{ReadContext, Serializer, WriteContext};
use crate::error::Error;
use crate::pool::{impl_poolable, Pooled};
use crate::types::Type;
use crate::value::Value;

/// A literal value together with the schema type it was detected as.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Const {
    pub ty: Type,
    pub value: Value,
}

impl Const {
    pub fn of(value: impl Into<Value>) -> Pooled<Const> {
        let value = value.into();
        Pooled::new(Const {
            ty: value.schema_type(),
            value,
        })
    }

    pub fn clear(&mut self) {
        self.ty = Type::Unspecified;
        self.value = Value::Null;
    }
}

impl Serializer for Const {
    const EXPECTED: &'static str = "JSON value";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        self.value.encode(context)
    }

    fn decode<'de, D: Deserializer<'de>>(
        &mut self,
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<(), D::Error> {
        self.value.decode(context, deserializer)?;
        self.ty = self.value.schema_type();
        Ok(())
    }
}

/// The `enum` keyword: the allowed literals, in document order.
#[derive(Debug, Default, PartialEq)]
pub struct Enum {
    pub values: Vec<Pooled<Const>>,
}

impl Enum {
    pub fn of<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Pooled<Enum> {
        let mut e = Pooled::<Enum>::acquire();
        e.values.extend(values.into_iter().map(Const::of));
        e
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|c| c.value == *value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl_poolable!(Const, Enum);

impl Serializer for Enum {
    const EXPECTED: &'static str = "array";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        self.values.encode(context)
    }

    fn visit_seq<'de, A: SeqAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        seq: A,
    ) -> Result<(), A::Error> {
        self.values.visit_seq(context, seq)?;
        if self.values.is_empty() && context.is_strict_enum() {
            let err = Error::vocabulary(
                context.keyword(),
                "[]",
                "enum must contain at least one value",
            );
            return Err(context.fail(err));
        }
        Ok(())
    }
}
