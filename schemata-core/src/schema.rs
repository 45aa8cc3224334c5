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


//! The recursive schema node.

use serde::de::MapAccess;

use crate::codec::{
    decode_field, read_object, skip_unknown, ObjectSerializer, ReadContext, Serializer,
    WriteContext,
};
use crate::error::Error;
use crate::keyword::{
    Additional, Const, DependencyMap, Enum, Items, PatternProperties, SchemaMap, StringArray,
};
use crate::pool::{impl_poolable, Pooled};
use crate::primitive::{Boolean, Integer, Number, Str};
use crate::regexp::Pattern;
use crate::types::{key, DraftVersion, Format, Types, DRAFT7_SCHEMA_URL};
use crate::value::Value;

/// A draft-07 JSON Schema.
///
/// Every keyword is a field; a missing keyword is an uninitialized
/// primitive, `None`, or an empty collection. Sub-schemas are owned through
/// [`Pooled`] handles, so a tree is released by dropping its root.
///
/// A bare `true` or `false` in schema position decodes to a node with only
/// [`Schema::boolean`] set.
#[derive(Debug, Default, PartialEq)]
pub struct Schema {
    pub schema: Str,
    pub id: Str,
    pub title: Str,
    pub reference: Str,
    pub comment: Str,
    pub description: Str,
    pub default: Option<Value>,
    pub read_only: Boolean,
    pub write_only: Boolean,
    pub examples: Vec<Pooled<Schema>>,
    pub multiple_of: Number,
    pub maximum: Number,
    pub exclusive_maximum: Boolean,
    pub minimum: Number,
    pub exclusive_minimum: Boolean,
    pub max_length: Integer,
    pub min_length: Integer,
    pub pattern: Option<Pattern>,
    pub additional_items: Option<Additional>,
    pub items: Option<Pooled<Items>>,
    pub max_items: Integer,
    pub min_items: Integer,
    pub unique_items: Boolean,
    pub contains: Option<Additional>,
    pub max_properties: Integer,
    pub min_properties: Integer,
    pub required: Option<Pooled<StringArray>>,
    pub additional_properties: Option<Additional>,
    pub definitions: SchemaMap,
    pub properties: SchemaMap,
    pub pattern_properties: PatternProperties,
    pub dependencies: Option<Pooled<DependencyMap>>,
    pub property_names: Option<Pooled<Schema>>,
    pub constant: Option<Pooled<Const>>,
    pub enumeration: Option<Pooled<Enum>>,
    pub types: Types,
    pub format: Option<Format>,
    pub content_media_type: Str,
    pub content_encoding: Str,
    pub if_: Option<Pooled<Schema>>,
    pub then: Option<Pooled<Schema>>,
    pub else_: Option<Pooled<Schema>>,
    pub all_of: Vec<Pooled<Schema>>,
    pub any_of: Vec<Pooled<Schema>>,
    pub one_of: Vec<Pooled<Schema>>,
    pub not: Option<Pooled<Schema>>,
    pub boolean: Option<bool>,
}

impl Schema {
    /// A boolean schema: `true` accepts every instance, `false` none.
    pub fn from_bool(value: bool) -> Pooled<Schema> {
        let mut schema = Pooled::<Schema>::acquire();
        schema.boolean = Some(value);
        schema
    }

    pub fn version(&self) -> DraftVersion {
        DraftVersion::Draft07
    }

    pub fn is_boolean(&self) -> bool {
        self.boolean.is_some()
    }

    /// Tags a root object schema with the draft-07 meta-schema URL when it
    /// carries no `$schema`.
    pub(crate) fn normalize_root(&mut self) {
        if self.boolean.is_none() && !self.schema.initialized {
            self.schema.set(DRAFT7_SCHEMA_URL);
        }
    }

    /// Encodes this node as a document root, always writing `$schema` for
    /// object schemas.
    pub fn encode_root(&self, context: &mut WriteContext) -> Result<(), Error> {
        self.encode_node(context, true)
    }

    /// Resets every keyword, releasing sub-schemas and keeping allocations.
    pub fn clear(&mut self) {
        self.schema.clear();
        self.id.clear();
        self.title.clear();
        self.reference.clear();
        self.comment.clear();
        self.description.clear();
        self.default = None;
        self.read_only.clear();
        self.write_only.clear();
        self.examples.clear();
        self.multiple_of.clear();
        self.maximum.clear();
        self.exclusive_maximum.clear();
        self.minimum.clear();
        self.exclusive_minimum.clear();
        self.max_length.clear();
        self.min_length.clear();
        self.pattern = None;
        self.additional_items = None;
        self.items = None;
        self.max_items.clear();
        self.min_items.clear();
        self.unique_items.clear();
        self.contains = None;
        self.max_properties.clear();
        self.min_properties.clear();
        self.required = None;
        self.additional_properties = None;
        self.definitions.clear();
        self.properties.clear();
        self.pattern_properties.clear();
        self.dependencies = None;
        self.property_names = None;
        self.constant = None;
        self.enumeration = None;
        self.types.clear();
        self.format = None;
        self.content_media_type.clear();
        self.content_encoding.clear();
        self.if_ = None;
        self.then = None;
        self.else_ = None;
        self.all_of.clear();
        self.any_of.clear();
        self.one_of.clear();
        self.not = None;
        self.boolean = None;
    }

    fn encode_node(&self, context: &mut WriteContext, root: bool) -> Result<(), Error> {
        if let Some(value) = self.boolean {
            return context.writer.write_bool(value);
        }
        context.begin_object()?;
        if root && self.schema.is_absent() {
            context.key(key::SCHEMA)?;
            context.writer.write_str(DRAFT7_SCHEMA_URL)?;
        } else {
            field(context, key::SCHEMA, &self.schema)?;
        }
        field(context, key::ID, &self.id)?;
        field(context, key::TITLE, &self.title)?;
        field(context, key::REF, &self.reference)?;
        field(context, key::COMMENT, &self.comment)?;
        field(context, key::DESCRIPTION, &self.description)?;
        field(context, key::DEFAULT, &self.default)?;
        field(context, key::READ_ONLY, &self.read_only)?;
        field(context, key::WRITE_ONLY, &self.write_only)?;
        field(context, key::EXAMPLES, &self.examples)?;
        field(context, key::MULTIPLE_OF, &self.multiple_of)?;
        field(context, key::MAXIMUM, &self.maximum)?;
        field(context, key::EXCLUSIVE_MAXIMUM, &self.exclusive_maximum)?;
        field(context, key::MINIMUM, &self.minimum)?;
        field(context, key::EXCLUSIVE_MINIMUM, &self.exclusive_minimum)?;
        field(context, key::MAX_LENGTH, &self.max_length)?;
        field(context, key::MIN_LENGTH, &self.min_length)?;
        field(context, key::PATTERN, &self.pattern)?;
        field(context, key::ADDITIONAL_ITEMS, &self.additional_items)?;
        field(context, key::ITEMS, &self.items)?;
        field(context, key::MAX_ITEMS, &self.max_items)?;
        field(context, key::MIN_ITEMS, &self.min_items)?;
        field(context, key::UNIQUE_ITEMS, &self.unique_items)?;
        field(context, key::CONTAINS, &self.contains)?;
        field(context, key::MAX_PROPERTIES, &self.max_properties)?;
        field(context, key::MIN_PROPERTIES, &self.min_properties)?;
        field(context, key::REQUIRED, &self.required)?;
        field(context, key::ADDITIONAL_PROPERTIES, &self.additional_properties)?;
        field(context, key::DEFINITIONS, &self.definitions)?;
        field(context, key::PROPERTIES, &self.properties)?;
        field(context, key::PATTERN_PROPERTIES, &self.pattern_properties)?;
        field(context, key::DEPENDENCIES, &self.dependencies)?;
        field(context, key::PROPERTY_NAMES, &self.property_names)?;
        field(context, key::CONST, &self.constant)?;
        field(context, key::ENUM, &self.enumeration)?;
        field(context, key::TYPE, &self.types)?;
        field(context, key::FORMAT, &self.format)?;
        field(context, key::CONTENT_MEDIA_TYPE, &self.content_media_type)?;
        field(context, key::CONTENT_ENCODING, &self.content_encoding)?;
        field(context, key::IF, &self.if_)?;
        field(context, key::THEN, &self.then)?;
        field(context, key::ELSE, &self.else_)?;
        field(context, key::ALL_OF, &self.all_of)?;
        field(context, key::ANY_OF, &self.any_of)?;
        field(context, key::ONE_OF, &self.one_of)?;
        field(context, key::NOT, &self.not)?;
        context.end_object()
    }
}

/// Writes one member unless the value is absent.
#[inline(always)]
fn field<T: Serializer + ?Sized>(
    context: &mut WriteContext,
    name: &'static str,
    value: &T,
) -> Result<(), Error> {
    if value.is_absent() {
        return Ok(());
    }
    context.key(name)?;
    value.encode(context)
}

impl_poolable!(Schema);

impl Serializer for Schema {
    const EXPECTED: &'static str = "schema (object or boolean)";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        self.encode_node(context, false)
    }

    fn visit_bool(&mut self, _context: &mut ReadContext, value: bool) -> Result<(), Error> {
        self.boolean = Some(value);
        Ok(())
    }

    fn visit_map<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        map: A,
    ) -> Result<(), A::Error> {
        read_object(context, map, self)
    }
}

impl ObjectSerializer for Schema {
    fn decode_key<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        name: &str,
        map: &mut A,
    ) -> Result<bool, A::Error> {
        macro_rules! dispatch {
            ($($keyword:ident => $field:ident),+ $(,)?) => {
                match name {
                    $(key::$keyword => decode_field(context, map, key::$keyword, &mut self.$field),)+
                    _ => skip_unknown(map, name),
                }
            };
        }

        dispatch! {
            SCHEMA => schema,
            ID => id,
            TITLE => title,
            REF => reference,
            COMMENT => comment,
            DESCRIPTION => description,
            DEFAULT => default,
            READ_ONLY => read_only,
            WRITE_ONLY => write_only,
            EXAMPLES => examples,
            MULTIPLE_OF => multiple_of,
            MAXIMUM => maximum,
            EXCLUSIVE_MAXIMUM => exclusive_maximum,
            MINIMUM => minimum,
            EXCLUSIVE_MINIMUM => exclusive_minimum,
            MAX_LENGTH => max_length,
            MIN_LENGTH => min_length,
            PATTERN => pattern,
            ADDITIONAL_ITEMS => additional_items,
            ITEMS => items,
            MAX_ITEMS => max_items,
            MIN_ITEMS => min_items,
            UNIQUE_ITEMS => unique_items,
            CONTAINS => contains,
            MAX_PROPERTIES => max_properties,
            MIN_PROPERTIES => min_properties,
            REQUIRED => required,
            ADDITIONAL_PROPERTIES => additional_properties,
            DEFINITIONS => definitions,
            PROPERTIES => properties,
            PATTERN_PROPERTIES => pattern_properties,
            DEPENDENCIES => dependencies,
            PROPERTY_NAMES => property_names,
            CONST => constant,
            ENUM => enumeration,
            TYPE => types,
            FORMAT => format,
            CONTENT_MEDIA_TYPE => content_media_type,
            CONTENT_ENCODING => content_encoding,
            IF => if_,
            THEN => then,
            ELSE => else_,
            ALL_OF => all_of,
            ANY_OF => any_of,
            ONE_OF => one_of,
            NOT => not,
        }
    }

    fn expected_key_count(&self) -> usize {
        key::COUNT
    }
}
