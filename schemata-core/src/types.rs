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


use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::de::{Deserializer, SeqAccess};

use crate::codec::{next_element, Decode, ReadContext, Serializer, WriteContext};
use crate::error::Error;

/// Media type of a JSON Schema document.
pub const MEDIA_TYPE: &str = "application/schema+json";

/// Meta-schema URL of the only dialect spoken by this crate.
pub const DRAFT7_SCHEMA_URL: &str = "http://json-schema.org/draft-07/schema#";

/// Wire names of the recognized keywords, in canonical encode order.
pub mod key {
    pub const SCHEMA: &str = "$schema";
    pub const ID: &str = "$id";
    pub const TITLE: &str = "title";
    pub const REF: &str = "$ref";
    pub const COMMENT: &str = "$comment";
    pub const DESCRIPTION: &str = "description";
    pub const DEFAULT: &str = "default";
    pub const READ_ONLY: &str = "readOnly";
    pub const WRITE_ONLY: &str = "writeOnly";
    pub const EXAMPLES: &str = "examples";
    pub const MULTIPLE_OF: &str = "multipleOf";
    pub const MAXIMUM: &str = "maximum";
    pub const EXCLUSIVE_MAXIMUM: &str = "exclusiveMaximum";
    pub const MINIMUM: &str = "minimum";
    pub const EXCLUSIVE_MINIMUM: &str = "exclusiveMinimum";
    pub const MAX_LENGTH: &str = "maxLength";
    pub const MIN_LENGTH: &str = "minLength";
    pub const PATTERN: &str = "pattern";
    pub const ADDITIONAL_ITEMS: &str = "additionalItems";
    pub const ITEMS: &str = "items";
    pub const MAX_ITEMS: &str = "maxItems";
    pub const MIN_ITEMS: &str = "minItems";
    pub const UNIQUE_ITEMS: &str = "uniqueItems";
    pub const CONTAINS: &str = "contains";
    pub const MAX_PROPERTIES: &str = "maxProperties";
    pub const MIN_PROPERTIES: &str = "minProperties";
    pub const REQUIRED: &str = "required";
    pub const ADDITIONAL_PROPERTIES: &str = "additionalProperties";
    pub const DEFINITIONS: &str = "definitions";
    pub const PROPERTIES: &str = "properties";
    pub const PATTERN_PROPERTIES: &str = "patternProperties";
    pub const DEPENDENCIES: &str = "dependencies";
    pub const PROPERTY_NAMES: &str = "propertyNames";
    pub const CONST: &str = "const";
    pub const ENUM: &str = "enum";
    pub const TYPE: &str = "type";
    pub const FORMAT: &str = "format";
    pub const CONTENT_MEDIA_TYPE: &str = "contentMediaType";
    pub const CONTENT_ENCODING: &str = "contentEncoding";
    pub const IF: &str = "if";
    pub const THEN: &str = "then";
    pub const ELSE: &str = "else";
    pub const ALL_OF: &str = "allOf";
    pub const ANY_OF: &str = "anyOf";
    pub const ONE_OF: &str = "oneOf";
    pub const NOT: &str = "not";

    /// Number of keywords a schema object recognizes.
    pub const COUNT: usize = 46;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Type {
    Unspecified = 0,
    Array = 1,
    Boolean = 2,
    Integer = 3,
    Null = 4,
    Number = 5,
    Object = 6,
    String = 7,
}

impl Default for Type {
    fn default() -> Self {
        Type::Unspecified
    }
}

impl Type {
    /// Looks up a type by its wire name. Unknown names map to
    /// [`Type::Unspecified`].
    pub fn from_name(name: &str) -> Type {
        match name {
            "array" => Type::Array,
            "boolean" => Type::Boolean,
            "integer" => Type::Integer,
            "null" => Type::Null,
            "number" => Type::Number,
            "object" => Type::Object,
            "string" => Type::String,
            _ => Type::Unspecified,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::Unspecified => "",
            Type::Array => "array",
            Type::Boolean => "boolean",
            Type::Integer => "integer",
            Type::Null => "null",
            Type::Number => "number",
            Type::Object => "object",
            Type::String => "string",
        }
    }

    pub fn is_specified(self) -> bool {
        self != Type::Unspecified
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unspecified => f.write_str("<unspecified>"),
            other => f.write_str(other.name()),
        }
    }
}

impl Decode for Type {
    fn decode_new<'de, D: Deserializer<'de>>(
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let mut ty = Type::Unspecified;
        ty.decode(context, deserializer)?;
        Ok(ty)
    }
}

/// A single type name.
impl Serializer for Type {
    const EXPECTED: &'static str = "type name";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        if !self.is_specified() {
            return Err(Error::encode_error("type Unspecified has no wire name"));
        }
        context.writer.write_str(self.name())
    }

    fn visit_str(&mut self, context: &mut ReadContext, value: &str) -> Result<(), Error> {
        match Type::from_name(value) {
            Type::Unspecified => Err(Error::vocabulary(
                context.keyword(),
                value,
                "unknown type name",
            )),
            ty => {
                *self = ty;
                Ok(())
            }
        }
    }
}

/// The `type` keyword: either one name or a list of names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Types {
    pub list: Vec<Type>,
    /// Set when the keyword was written as an array.
    pub multiple: bool,
}

impl Types {
    pub fn single(ty: Type) -> Self {
        Types {
            list: vec![ty],
            multiple: false,
        }
    }

    pub fn of(types: impl IntoIterator<Item = Type>) -> Self {
        Types {
            list: types.into_iter().collect(),
            multiple: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, ty: Type) -> bool {
        self.list.contains(&ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = Type> + '_ {
        self.list.iter().copied()
    }

    pub fn clear(&mut self) {
        self.list.clear();
        self.multiple = false;
    }
}

impl Serializer for Types {
    const EXPECTED: &'static str = "type name or array of type names";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        if !self.multiple && self.list.len() != 1 {
            return Err(Error::encode_error(format!(
                "single-form type holds {} names",
                self.list.len()
            )));
        }
        if !self.multiple {
            return self.list[0].encode(context);
        }
        context.begin_array()?;
        for ty in &self.list {
            context.element()?;
            ty.encode(context)?;
        }
        context.end_array()
    }

    fn is_absent(&self) -> bool {
        self.list.is_empty() && !self.multiple
    }

    fn visit_str(&mut self, context: &mut ReadContext, value: &str) -> Result<(), Error> {
        let mut ty = Type::Unspecified;
        ty.visit_str(context, value)?;
        self.list.clear();
        self.list.push(ty);
        self.multiple = false;
        Ok(())
    }

    fn visit_seq<'de, A: SeqAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        mut seq: A,
    ) -> Result<(), A::Error> {
        self.list.clear();
        self.multiple = true;
        while let Some(ty) = next_element(context, &mut seq)? {
            self.list.push(ty);
        }
        Ok(())
    }
}

/// Values of the `format` keyword.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    DateTime,
    Date,
    Time,
    Email,
    IdnEmail,
    Hostname,
    IdnHostname,
    Ipv4,
    Ipv6,
    Uri,
    UriReference,
    Iri,
    IriReference,
    UriTemplate,
    JsonPointer,
    RelativeJsonPointer,
    Regex,
    /// A format name outside the built-in vocabulary, kept verbatim.
    Custom(String),
}

impl Format {
    pub fn from_name(name: &str) -> Format {
        match name {
            "date-time" => Format::DateTime,
            "date" => Format::Date,
            "time" => Format::Time,
            "email" => Format::Email,
            "idn-email" => Format::IdnEmail,
            "hostname" => Format::Hostname,
            "idn-hostname" => Format::IdnHostname,
            "ipv4" => Format::Ipv4,
            "ipv6" => Format::Ipv6,
            "uri" => Format::Uri,
            "uri-reference" => Format::UriReference,
            "iri" => Format::Iri,
            "iri-reference" => Format::IriReference,
            "uri-template" => Format::UriTemplate,
            "json-pointer" => Format::JsonPointer,
            "relative-json-pointer" => Format::RelativeJsonPointer,
            "regex" => Format::Regex,
            other => Format::Custom(other.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Format::DateTime => "date-time",
            Format::Date => "date",
            Format::Time => "time",
            Format::Email => "email",
            Format::IdnEmail => "idn-email",
            Format::Hostname => "hostname",
            Format::IdnHostname => "idn-hostname",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
            Format::Uri => "uri",
            Format::UriReference => "uri-reference",
            Format::Iri => "iri",
            Format::IriReference => "iri-reference",
            Format::UriTemplate => "uri-template",
            Format::JsonPointer => "json-pointer",
            Format::RelativeJsonPointer => "relative-json-pointer",
            Format::Regex => "regex",
            Format::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Format::Custom(_))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Decode for Format {
    fn decode_new<'de, D: Deserializer<'de>>(
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let mut format = Format::Custom(String::new());
        format.decode(context, deserializer)?;
        Ok(format)
    }
}

impl Serializer for Format {
    const EXPECTED: &'static str = "string";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.write_str(self.name())
    }

    fn visit_str(&mut self, _context: &mut ReadContext, value: &str) -> Result<(), Error> {
        *self = Format::from_name(value);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftVersion {
    Draft04,
    Draft06,
    Draft07,
    Draft201909,
}

impl DraftVersion {
    pub const fn as_str(self) -> &'static str {
        match self {
            DraftVersion::Draft04 => "draft04",
            DraftVersion::Draft06 => "draft06",
            DraftVersion::Draft07 => "draft07",
            DraftVersion::Draft201909 => "2019-09",
        }
    }
}

impl fmt::Display for DraftVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
