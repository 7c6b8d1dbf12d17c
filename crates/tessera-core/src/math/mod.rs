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

//! Provides the mathematical primitives for discrete (integer) and continuous
//! (floating-point) coordinates.
//!
//! The integer vectors ([`IVec2`], [`IVec3`], [`IVec4`]) address voxels, tiles,
//! and index triples on a lattice; the real-valued companions ([`Vec2`],
//! [`Vec3`]) are their widening-conversion targets for the few operations that
//! leave the integer domain (lengths, distances, snapping). Narrowing back is
//! always explicit and truncates toward zero.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

// --- Declare Sub-Modules ---

pub mod ivector;
pub mod swizzle;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::ivector::{Axis3, IVec2, IVec3, IVec4};
pub use self::vector::{Vec2, Vec3};

// --- Utility Functions ---

/// Clamps a value to a specified minimum and maximum range.
///
/// Unlike [`Ord::clamp`], inverted bounds do not panic; `min_val` wins when
/// the bounds cross.
///
/// # Examples
///
/// ```
/// use tessera_core::math::clamp;
/// assert_eq!(clamp(15, 0, 10), 10);
/// assert_eq!(clamp(-3, 0, 10), 0);
/// assert_eq!(clamp(7, 0, 10), 7);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Snaps a value to the nearest multiple of `step`.
///
/// A zero `step` leaves the value unchanged.
///
/// # Examples
///
/// ```
/// use tessera_core::math::snapped;
/// assert_eq!(snapped(13.0, 5.0), 15.0);
/// assert_eq!(snapped(-7.0, 4.0), -8.0);
/// assert_eq!(snapped(3.0, 0.0), 3.0);
/// ```
#[inline]
pub fn snapped(value: f64, step: f64) -> f64 {
    if step != 0.0 {
        (value / step + 0.5).floor() * step
    } else {
        value
    }
}

/// Computes the positive (Euclidean-style) remainder of `value / modulus`.
///
/// The built-in `%` operator follows the sign of the dividend; this helper
/// returns a result whose sign follows `modulus`, so it is non-negative for a
/// positive modulus.
///
/// # Examples
///
/// ```
/// use tessera_core::math::posmod;
/// assert_eq!(-20 % 7, -6);
/// assert_eq!(posmod(-20, 7), 1);
/// assert_eq!(posmod(20, 7), 6);
/// ```
#[inline]
pub fn posmod(value: i32, modulus: i32) -> i32 {
    let res = value % modulus;
    if (res < 0 && modulus > 0) || (res > 0 && modulus < 0) {
        res + modulus
    } else {
        res
    }
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use tessera_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use tessera_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
