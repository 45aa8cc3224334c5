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


use indexmap::IndexMap;
use serde::de::MapAccess;

use crate::codec::{
    next_value, read_object, ObjectSerializer, ReadContext, Serializer, WriteContext,
};
use crate::error::Error;
use crate::pool::Pooled;
use crate::schema::Schema;

/// Name to schema map used by `definitions` and `properties`, in document
/// order.
#[derive(Debug, Default, PartialEq)]
pub struct SchemaMap {
    pub entries: IndexMap<String, Pooled<Schema>>,
}

impl SchemaMap {
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.entries.get(name).map(|s| &**s)
    }

    pub fn insert(&mut self, name: impl Into<String>, schema: Pooled<Schema>) {
        self.entries.insert(name.into(), schema);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), &**v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Serializer for SchemaMap {
    const EXPECTED: &'static str = "object of schemas";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.begin_object()?;
        for (name, schema) in &self.entries {
            context.key(name)?;
            schema.encode(context)?;
        }
        context.end_object()
    }

    fn is_absent(&self) -> bool {
        self.entries.is_empty()
    }

    fn visit_map<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        map: A,
    ) -> Result<(), A::Error> {
        self.entries.clear();
        read_object(context, map, self)
    }
}

impl ObjectSerializer for SchemaMap {
    fn decode_key<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        key: &str,
        map: &mut A,
    ) -> Result<bool, A::Error> {
        let schema: Pooled<Schema> = next_value(context, map)?;
        self.entries.insert(key.to_owned(), schema);
        Ok(true)
    }
}
