// Copyright 2026 Tessera Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Tessera Core
//!
//! Foundational crate with the grid and lattice math primitives shared by the
//! rest of the engine: integer coordinate vectors for voxel/tile addressing,
//! their real-valued companions, and the scalar helpers both rely on.

#![warn(missing_docs)]

pub mod math;

pub use math::{Axis3, IVec2, IVec3, IVec4, Vec2, Vec3};
