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


/// Configuration for schema decoding and encoding.
///
/// Held by the [`Codec`](crate::codec::Codec) and copied into every
/// `ReadContext` so that one decode observes a consistent setting.
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum nesting depth of objects and arrays accepted by decode.
    pub max_depth: u32,
    /// Whether an empty `enum` array is rejected.
    pub strict_enum: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: 64,
            strict_enum: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline(always)]
    pub fn is_strict_enum(&self) -> bool {
        self.strict_enum
    }
}
