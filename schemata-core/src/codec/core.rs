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


use serde::de::{Deserializer, MapAccess, SeqAccess};

use crate::buffer::JsonKind;
use crate::codec::context::{ReadContext, WriteContext};
use crate::codec::engine::{next_element, visit};
use crate::error::Error;
use crate::pool::{Poolable, Pooled};
use crate::value::Number;

/// A value with a JSON wire form.
///
/// Decoding is driven by the deserializer: [`decode`](Serializer::decode)
/// hands `self` to [`visit`], which calls back the `visit_*` hook matching
/// the kind of the next value. Every hook rejects its kind by default, so an
/// implementation only overrides the kinds it accepts. `decode` may run on
/// an instance that already holds a value (a duplicate key), and must
/// replace it.
pub trait Serializer {
    /// What the value looks like on the wire, for type mismatch errors.
    const EXPECTED: &'static str;

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error>;

    fn decode<'de, D: Deserializer<'de>>(
        &mut self,
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<(), D::Error> {
        visit(context, deserializer, self)
    }

    /// Whether the value is left out when it appears as an object member.
    fn is_absent(&self) -> bool {
        false
    }

    fn visit_null(&mut self, context: &mut ReadContext) -> Result<(), Error> {
        Err(context.mismatch(Self::EXPECTED, JsonKind::Null))
    }

    fn visit_bool(&mut self, context: &mut ReadContext, _value: bool) -> Result<(), Error> {
        Err(context.mismatch(Self::EXPECTED, JsonKind::Bool))
    }

    fn visit_number(&mut self, context: &mut ReadContext, _value: Number) -> Result<(), Error> {
        Err(context.mismatch(Self::EXPECTED, JsonKind::Number))
    }

    fn visit_str(&mut self, context: &mut ReadContext, _value: &str) -> Result<(), Error> {
        Err(context.mismatch(Self::EXPECTED, JsonKind::String))
    }

    fn visit_seq<'de, A: SeqAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        _seq: A,
    ) -> Result<(), A::Error> {
        let err = context.mismatch(Self::EXPECTED, JsonKind::Array);
        Err(context.fail(err))
    }

    fn visit_map<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        _map: A,
    ) -> Result<(), A::Error> {
        let err = context.mismatch(Self::EXPECTED, JsonKind::Object);
        Err(context.fail(err))
    }
}

/// A JSON object decoded one member at a time by
/// [`read_object`](crate::codec::read_object).
pub trait ObjectSerializer: Serializer {
    /// Consumes the value of `key` from `map` and stores it. Returns
    /// `Ok(false)` when the key is not recognized; its value has then been
    /// skipped.
    fn decode_key<'de, A: MapAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        key: &str,
        map: &mut A,
    ) -> Result<bool, A::Error>;

    /// Number of distinct keys the type recognizes, or 0 for open maps.
    fn expected_key_count(&self) -> usize {
        0
    }
}

/// A value built from its wire form rather than decoded in place.
pub trait Decode: Sized {
    fn decode_new<'de, D: Deserializer<'de>>(
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<Self, D::Error>;
}

impl<T: Poolable + Serializer> Decode for Pooled<T> {
    fn decode_new<'de, D: Deserializer<'de>>(
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let mut instance = Pooled::<T>::acquire();
        instance.decode(context, deserializer)?;
        Ok(instance)
    }
}

impl<T: Poolable + Serializer> Serializer for Pooled<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    #[inline(always)]
    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        (**self).encode(context)
    }

    #[inline(always)]
    fn decode<'de, D: Deserializer<'de>>(
        &mut self,
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<(), D::Error> {
        (**self).decode(context, deserializer)
    }

    #[inline(always)]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Serializer + Decode> Serializer for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        match self {
            Some(value) => value.encode(context),
            None => Ok(()),
        }
    }

    fn decode<'de, D: Deserializer<'de>>(
        &mut self,
        context: &mut ReadContext,
        deserializer: D,
    ) -> Result<(), D::Error> {
        *self = Some(T::decode_new(context, deserializer)?);
        Ok(())
    }

    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, Serializer::is_absent)
    }
}

/// Ordered lists of pooled values, written as JSON arrays.
impl<T: Poolable + Serializer> Serializer for Vec<Pooled<T>> {
    const EXPECTED: &'static str = "array";

    fn encode(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.begin_array()?;
        for item in self {
            context.element()?;
            item.encode(context)?;
        }
        context.end_array()
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }

    fn visit_seq<'de, A: SeqAccess<'de>>(
        &mut self,
        context: &mut ReadContext,
        mut seq: A,
    ) -> Result<(), A::Error> {
        self.clear();
        while let Some(item) = next_element(context, &mut seq)? {
            self.push(item);
        }
        Ok(())
    }
}
