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


use serde::de::{Deserializer, MapAccess};

use crate::codec::{Decode, ReadContext, Serializer, WriteContext};
use crate::error::Error;
use crate::pool::Pooled;
use crate::schema::Schema;

/// Value of `additionalItems`, `additionalProperties` and `contains`.
///
/// `false` forbids extra elements outright. Every other value is a schema;
/// `true` is read as the empty schema `{}`, which accepts everything.
#[derive(Debug, PartialEq)]
pub enum Additional {
    Forbidden,
    Schema(Pooled<Schema>),
}

impl Additional {
    /// The empty schema.
    pub fn any() -> Additional {
        Additional::Schema(Pooled::acquire())
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Additional::Forbidden)
    }

    pub fn schema(&self) -> Option<&Schema> {
        match self {
            Additional::Forbidden => None,
            Additional::Schema(schema) => Some(schema),
        }
    }
}

impl Decode for Additional {
    fn decode_new<'de, D: Deserializer<'de>>(
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let mut additional = Additional::Forbidden;
        additional.decode(context, deserializer)?;
        Ok(additional)
    }
}

impl Serializer for Additional {
    const EXPECTED: &'static str = "schema or boolean";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        match self {
            Additional::Forbidden => context.writer.write_bool(false),
            Additional::Schema(schema) => match schema.boolean {
                Some(false) => context.writer.write_bool(false),
                Some(true) => {
                    context.begin_object()?;
                    context.end_object()
                }
                None => schema.encode(context),
            },
        }
    }

    fn visit_bool(&mut self, _context: &mut ReadContext, value: bool) -> Result<(), Error> {
        *self = if value {
            Additional::any()
        } else {
            Additional::Forbidden
        };
        Ok(())
    }

    fn visit_map<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        map: A,
    ) -> Result<(), A::Error> {
        let mut schema = Pooled::<Schema>::acquire();
        Schema::visit_map(&mut schema, context, map)?;
        *self = Additional::Schema(schema);
        Ok(())
    }
}
