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


use serde::de::MapAccess;

use crate::codec::{
    next_value, read_object, ObjectSerializer, ReadContext, Serializer, WriteContext,
};
use crate::error::Error;
use crate::pool::Pooled;
use crate::regexp::{compile_in, Pattern, Regexp};
use crate::schema::Schema;

/// The `patternProperties` keyword: regular expressions paired with the
/// schema that applies to matching property names.
///
/// Pairs stay in document order and patterns are never rewritten.
#[derive(Debug, Default, PartialEq)]
pub struct PatternProperties {
    pub entries: Vec<(Pattern, Pooled<Schema>)>,
}

impl PatternProperties {
    pub fn push(&mut self, pattern: Pattern, schema: Pooled<Schema>) {
        self.entries.push((pattern, schema));
    }

    /// Schemas whose pattern matches `name`, in document order.
    pub fn matching<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Schema> + 's {
        self.entries
            .iter()
            .filter(move |(pattern, _)| pattern.is_match(name))
            .map(|(_, schema)| &**schema)
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

impl Serializer for PatternProperties {
    const EXPECTED: &'static str = "object of schemas";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.begin_object()?;
        for (pattern, schema) in &self.entries {
            context.key(pattern.as_str())?;
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

impl ObjectSerializer for PatternProperties {
    /// A repeated pattern replaces the schema of its first occurrence.
    fn decode_key<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        name: &str,
        map: &mut A,
    ) -> Result<bool, A::Error> {
        let compiled = compile_in(context, name);
        let pattern = context.lift(compiled)?;
        let schema: Pooled<Schema> = next_value(context, map)?;
        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some(entry) => entry.1 = schema,
            None => self.entries.push((pattern, schema)),
        }
        Ok(true)
    }
}
