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


use serde::de::{MapAccess, SeqAccess};

use crate::codec::{ReadContext, Serializer, WriteContext};
use crate::ensure;
use crate::error::Error;
use crate::pool::{impl_poolable, Pooled};
use crate::schema::Schema;

/// The `items` keyword.
///
/// A single schema applies to every element; a list applies position by
/// position. `multiple` records which form was written, so a one-element
/// list stays a list.
#[derive(Debug, Default, PartialEq)]
pub struct Items {
    pub schemas: Vec<Pooled<Schema>>,
    pub multiple: bool,
}

impl Items {
    pub fn single(schema: Pooled<Schema>) -> Pooled<Items> {
        let mut items = Pooled::<Items>::acquire();
        items.schemas.push(schema);
        items
    }

    pub fn list(schemas: impl IntoIterator<Item = Pooled<Schema>>) -> Pooled<Items> {
        let mut items = Pooled::<Items>::acquire();
        items.schemas.extend(schemas);
        items.multiple = true;
        items
    }

    /// The schema governing the element at `index`, if any.
    pub fn schema_for(&self, index: usize) -> Option<&Schema> {
        if self.multiple {
            self.schemas.get(index).map(|s| &**s)
        } else {
            self.schemas.first().map(|s| &**s)
        }
    }

    pub fn clear(&mut self) {
        self.schemas.clear();
        self.multiple = false;
    }
}

impl_poolable!(Items);

impl Serializer for Items {
    const EXPECTED: &'static str = "schema or array of schemas";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        if self.multiple {
            return self.schemas.encode(context);
        }
        ensure!(
            self.schemas.len() == 1,
            Error::encode_error(format!(
                "single-form items holds {} schemas",
                self.schemas.len()
            ))
        );
        self.schemas[0].encode(context)
    }

    fn visit_bool(&mut self, _context: &mut ReadContext, value: bool) -> Result<(), Error> {
        self.schemas.clear();
        self.schemas.push(Schema::from_bool(value));
        self.multiple = false;
        Ok(())
    }

    fn visit_seq<'de, A: SeqAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        seq: A,
    ) -> Result<(), A::Error> {
        self.multiple = true;
        self.schemas.visit_seq(context, seq)
    }

    fn visit_map<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        map: A,
    ) -> Result<(), A::Error> {
        self.schemas.clear();
        self.multiple = false;
        let mut schema = Pooled::<Schema>::acquire();
        Schema::visit_map(&mut schema, context, map)?;
        self.schemas.push(schema);
        Ok(())
    }
}
