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


use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use tracing::trace;

use crate::codec::context::ReadContext;
use crate::codec::core::{Decode, ObjectSerializer, Serializer};
use crate::value::Number;

/// Decodes into an existing instance.
struct Fill<'a, T: ?Sized> {
    context: &'a mut ReadContext,
    target: &'a mut T,
}

impl<'de, T: Serializer + ?Sized> DeserializeSeed<'de> for Fill<'_, T> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        self.target.decode(self.context, deserializer)
    }
}

/// Decodes into a new instance.
struct Build<'a, T> {
    context: &'a mut ReadContext,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> Build<'a, T> {
    fn new(context: &'a mut ReadContext) -> Self {
        Build {
            context,
            _marker: PhantomData,
        }
    }
}

impl<'de, T: Decode> DeserializeSeed<'de> for Build<'_, T> {
    type Value = T;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        T::decode_new(self.context, deserializer)
    }
}

/// Object member names, borrowed from the input when they hold no escapes.
struct KeySeed;

impl<'de> DeserializeSeed<'de> for KeySeed {
    type Value = Cow<'de, str>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_str(KeySeed)
    }
}

impl<'de> Visitor<'de> for KeySeed {
    type Value = Cow<'de, str>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object member name")
    }

    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Self::Value, E> {
        Ok(Cow::Borrowed(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Cow::Owned(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Cow::Owned(v))
    }
}

/// Routes each kind of JSON value to the matching [`Serializer`] hook.
struct ValueVisitor<'a, T: ?Sized> {
    context: &'a mut ReadContext,
    target: &'a mut T,
}

impl<'de, T: Serializer + ?Sized> Visitor<'de> for ValueVisitor<'_, T> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(T::EXPECTED)
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        let result = self.target.visit_null(self.context);
        self.context.lift(result)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<(), E> {
        let result = self.target.visit_bool(self.context, v);
        self.context.lift(result)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<(), E> {
        let result = self.target.visit_number(self.context, Number::Int(v));
        self.context.lift(result)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<(), E> {
        let number = match i64::try_from(v) {
            Ok(v) => Number::Int(v),
            Err(_) => Number::Float(v as f64),
        };
        let result = self.target.visit_number(self.context, number);
        self.context.lift(result)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<(), E> {
        let result = self.target.visit_number(self.context, Number::Float(v));
        self.context.lift(result)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<(), E> {
        let result = self.target.visit_str(self.context, v);
        self.context.lift(result)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<(), A::Error> {
        let entered = self.context.inc_depth();
        self.context.lift(entered)?;
        let result = self.target.visit_seq(self.context, seq);
        self.context.dec_depth();
        result
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<(), A::Error> {
        let entered = self.context.inc_depth();
        self.context.lift(entered)?;
        let result = self.target.visit_map(self.context, map);
        self.context.dec_depth();
        result
    }
}

/// Decodes the next value of `deserializer` into `target`.
///
/// The keyword label is restored afterwards, so that a sibling which fails
/// after a nested schema decoded cleanly is reported under its own keyword.
pub fn visit<'de, D, T>(
    context: &mut ReadContext,
    deserializer: D,
    target: &mut T,
) -> Result<(), D::Error>
where
    D: Deserializer<'de>,
    T: Serializer + ?Sized,
{
    let keyword = context.keyword();
    deserializer.deserialize_any(ValueVisitor {
        context: &mut *context,
        target,
    })?;
    context.set_keyword(keyword);
    Ok(())
}

/// Decodes the next array element into a new `T`.
pub fn next_element<'de, A, T>(context: &mut ReadContext, seq: &mut A) -> Result<Option<T>, A::Error>
where
    A: SeqAccess<'de>,
    T: Decode,
{
    seq.next_element_seed(Build::new(context))
}

/// Decodes the value of the current object member into a new `T`.
pub fn next_value<'de, A, T>(context: &mut ReadContext, map: &mut A) -> Result<T, A::Error>
where
    A: MapAccess<'de>,
    T: Decode,
{
    map.next_value_seed(Build::new(context))
}

/// Decodes the value of the current object member into `field`, labelling
/// errors with `keyword`.
///
/// Out of line so that the keyword dispatch keeps a small stack frame per
/// nesting level.
#[inline(never)]
pub fn decode_field<'de, A, T>(
    context: &mut ReadContext,
    map: &mut A,
    keyword: &'static str,
    field: &mut T,
) -> Result<bool, A::Error>
where
    A: MapAccess<'de>,
    T: Serializer,
{
    context.set_keyword(keyword);
    map.next_value_seed(Fill {
        context,
        target: field,
    })?;
    Ok(true)
}

/// Walks the members of an object, handing each name to `on_member`, which
/// must consume the value from `map`.
///
/// Every member is dispatched. A repeated name is decoded again and the last
/// occurrence wins.
pub fn read_members<'de, A, F>(
    context: &mut ReadContext,
    mut map: A,
    mut on_member: F,
) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    F: FnMut(&mut ReadContext, &str, &mut A) -> Result<(), A::Error>,
{
    let mut members = 0usize;
    while let Some(key) = map.next_key_seed(KeySeed)? {
        on_member(context, &key, &mut map)?;
        members += 1;
    }
    if members == 0 {
        trace!(keyword = context.keyword(), "empty object");
    }
    Ok(())
}

/// Decodes an object into `target` by key dispatch.
pub fn read_object<'de, A, T>(
    context: &mut ReadContext,
    map: A,
    target: &mut T,
) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    T: ObjectSerializer + ?Sized,
{
    let expected = target.expected_key_count();
    let mut recognized = 0usize;
    read_members(context, map, |context, key, map| {
        if target.decode_key(context, key, map)? {
            recognized += 1;
        }
        Ok(())
    })?;
    if expected > 0 {
        trace!(recognized, expected, "decoded object");
    }
    Ok(())
}

/// Consumes an unrecognized member value.
pub fn skip_unknown<'de, A: MapAccess<'de>>(map: &mut A, key: &str) -> Result<bool, A::Error> {
    trace!(key, "skipping unknown keyword");
    map.next_value::<IgnoredAny>()?;
    Ok(false)
}
