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

use crate::codec::{next_element, Decode, ReadContext, Serializer, WriteContext};
use crate::error::Error;
use crate::pool::impl_poolable;

/// An ordered list of names, as used by `required`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringArray {
    pub items: Vec<String>,
}

impl StringArray {
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for StringArray {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StringArray {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl_poolable!(StringArray);

/// A single name.
impl Serializer for String {
    const EXPECTED: &'static str = "string";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.write_str(self)
    }

    fn visit_str(&mut self, _context: &mut ReadContext, value: &str) -> Result<(), Error> {
        self.clear();
        self.push_str(value);
        Ok(())
    }
}

impl Decode for String {
    fn decode_new<'de, D: Deserializer<'de>>(
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let mut name = String::new();
        name.decode(context, deserializer)?;
        Ok(name)
    }
}

pub(crate) fn read_names<'de, A: SeqAccess<'de>>(
    context: &mut ReadContext,
    seq: &mut A,
    out: &mut Vec<String>,
) -> Result<(), A::Error> {
    out.clear();
    while let Some(name) = next_element(context, seq)? {
        out.push(name);
    }
    Ok(())
}

pub(crate) fn write_names(context: &mut WriteContext, names: &[String]) -> Result<(), Error> {
    context.begin_array()?;
    for name in names {
        context.element()?;
        name.encode(context)?;
    }
    context.end_array()
}

impl Serializer for StringArray {
    const EXPECTED: &'static str = "array of strings";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_names(context, &self.items)
    }

    fn visit_seq<'de, A: SeqAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        mut seq: A,
    ) -> Result<(), A::Error> {
        read_names(context, &mut seq, &mut self.items)
    }
}
