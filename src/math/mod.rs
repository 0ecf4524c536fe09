// Copyright 2025 eraflo
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

//! Mathematics primitives for the camera-rig geometry.
//!
//! A deliberately small linear-algebra layer: 3D vectors, quaternions, and
//! the integer extent/origin types used for pixel coordinates. All angular
//! functions operate in **radians** unless explicitly specified otherwise.

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

pub mod dimension;
pub mod quaternion;
pub mod vector;

pub use self::dimension::{Extent2D, Origin2D};
pub use self::quaternion::Quaternion;
pub use self::vector::Vec3;

/// Converts an angle from degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}
