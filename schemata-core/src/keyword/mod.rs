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


//! Keyword values whose wire form varies by JSON kind or holds sub-schemas.

mod additional;
mod constant;
mod dependencies;
mod items;
mod pattern_properties;
mod schema_map;
mod string_array;

pub use additional::Additional;
pub use constant::{Const, Enum};
pub use dependencies::{Dependency, DependencyMap};
pub use items::Items;
pub use pattern_properties::PatternProperties;
pub use schema_map::SchemaMap;
pub use string_array::StringArray;
