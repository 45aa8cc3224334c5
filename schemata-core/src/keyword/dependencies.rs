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
use serde::de::{Deserializer, MapAccess, SeqAccess};

use crate::codec::{
    next_value, read_object, Decode, ObjectSerializer, ReadContext, Serializer, WriteContext,
};
use crate::error::Error;
use crate::keyword::string_array::{read_names, write_names};
use crate::pool::{impl_poolable, Pooled};
use crate::schema::Schema;

/// What the presence of a property implies.
#[derive(Debug, PartialEq)]
pub enum Dependency {
    /// Other properties that must also be present.
    Names(Vec<String>),
    /// A schema the whole instance must satisfy.
    Schema(Pooled<Schema>),
}

impl Decode for Dependency {
    fn decode_new<'de, D: Deserializer<'de>>(
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let mut dependency = Dependency::Names(Vec::new());
        dependency.decode(context, deserializer)?;
        Ok(dependency)
    }
}

impl Serializer for Dependency {
    const EXPECTED: &'static str = "schema or array of names";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        match self {
            Dependency::Names(names) => write_names(context, names),
            Dependency::Schema(schema) => schema.encode(context),
        }
    }

    fn visit_bool(&mut self, _context: &mut ReadContext, value: bool) -> Result<(), Error> {
        *self = Dependency::Schema(Schema::from_bool(value));
        Ok(())
    }

    fn visit_seq<'de, A: SeqAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        mut seq: A,
    ) -> Result<(), A::Error> {
        let mut names = Vec::new();
        read_names(context, &mut seq, &mut names)?;
        *self = Dependency::Names(names);
        Ok(())
    }

    fn visit_map<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        map: A,
    ) -> Result<(), A::Error> {
        let mut schema = Pooled::<Schema>::acquire();
        Schema::visit_map(&mut schema, context, map)?;
        *self = Dependency::Schema(schema);
        Ok(())
    }
}

/// The `dependencies` keyword, in document order.
#[derive(Debug, Default, PartialEq)]
pub struct DependencyMap {
    pub entries: IndexMap<String, Dependency>,
}

impl DependencyMap {
    pub fn get(&self, name: &str) -> Option<&Dependency> {
        self.entries.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, dependency: Dependency) {
        self.entries.insert(name.into(), dependency);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl_poolable!(DependencyMap);

impl Serializer for DependencyMap {
    const EXPECTED: &'static str = "object";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.begin_object()?;
        for (name, dependency) in &self.entries {
            context.key(name)?;
            dependency.encode(context)?;
        }
        context.end_object()
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

impl ObjectSerializer for DependencyMap {
    fn decode_key<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        name: &str,
        map: &mut A,
    ) -> Result<bool, A::Error> {
        let dependency: Dependency = next_value(context, map)?;
        self.entries.insert(name.to_owned(), dependency);
        Ok(true)
    }
}
