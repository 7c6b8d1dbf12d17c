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

//! Provides integer lattice vector types and their associated operations.
//!
//! [`IVec3`] is the workhorse: a triple of `i32` used for voxel coordinates,
//! discrete sizes, and index triples. [`IVec2`] is its two-component
//! companion, and [`IVec4`] exists as the result type of four-component
//! swizzles (see the [`swizzle`](super::swizzle) module).
//!
//! All arithmetic is component-wise and keeps native `i32` semantics: `/` and
//! `%` truncate toward zero (the remainder's sign follows the dividend), and
//! dividing by a zero scalar or component panics just like `i32` division
//! does. Callers wanting a strictly non-negative remainder apply
//! [`posmod`](super::posmod) per component.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::{clamp, snapped, Vec2, Vec3};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Rem, Sub};

/// Snaps one component to the nearest multiple of `step`, truncating the
/// intermediate real value back toward zero. A zero step is a no-op.
#[inline]
fn snap_component(value: i32, step: i32) -> i32 {
    snapped(value as f64, step as f64) as i32
}

// --- Axis3 ---

/// Identifies one of the three component positions of an [`IVec3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum Axis3 {
    /// The x axis (component 0).
    X,
    /// The y axis (component 1).
    Y,
    /// The z axis (component 2).
    Z,
}

impl Axis3 {
    /// Returns the component index (0, 1, or 2) of this axis.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis3::X => 0,
            Axis3::Y => 1,
            Axis3::Z => 2,
        }
    }
}

// --- IVec2 ---

/// A 2-dimensional vector with `i32` components.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct IVec2 {
    /// The x component of the vector.
    pub x: i32,
    /// The y component of the vector.
    pub y: i32,
}

impl IVec2 {
    /// A vector with all components set to `0`.
    pub const ZERO: Self = Self { x: 0, y: 0 };
    /// A vector with all components set to `1`.
    pub const ONE: Self = Self { x: 1, y: 1 };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self { x: 1, y: 0 };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self { x: 0, y: 1 };
    /// A vector with all components set to `i32::MIN`.
    pub const MIN: Self = Self {
        x: i32::MIN,
        y: i32::MIN,
    };
    /// A vector with all components set to `i32::MAX`.
    pub const MAX: Self = Self {
        x: i32::MAX,
        y: i32::MAX,
    };

    /// Creates a new `IVec2` with the specified components.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a new `IVec2` with both components set to `value`.
    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self { x: value, y: value }
    }

    /// Appends a z component, producing an [`IVec3`].
    #[inline]
    pub const fn extend(self, z: i32) -> IVec3 {
        IVec3::new(self.x, self.y, z)
    }

    /// Returns a new vector with the absolute value of each component.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            x: if self.x < 0 { -self.x } else { self.x },
            y: if self.y < 0 { -self.y } else { self.y },
        }
    }

    /// Returns a new vector with each component replaced by its sign (`-1`, `0`, or `1`).
    #[inline]
    pub const fn sign(self) -> Self {
        Self {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }

    /// Returns the component-wise minimum of this vector and another.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self {
            x: self.x.min(rhs.x),
            y: self.y.min(rhs.y),
        }
    }

    /// Returns the component-wise maximum of this vector and another.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self {
            x: self.x.max(rhs.x),
            y: self.y.max(rhs.y),
        }
    }

    /// Returns the component-wise minimum of this vector and a scalar.
    #[inline]
    pub fn min_scalar(self, rhs: i32) -> Self {
        self.min(Self::splat(rhs))
    }

    /// Returns the component-wise maximum of this vector and a scalar.
    #[inline]
    pub fn max_scalar(self, rhs: i32) -> Self {
        self.max(Self::splat(rhs))
    }

    /// Clamps each component between the matching components of `min_val` and `max_val`.
    #[inline]
    pub fn clamp(self, min_val: Self, max_val: Self) -> Self {
        Self {
            x: clamp(self.x, min_val.x, max_val.x),
            y: clamp(self.y, min_val.y, max_val.y),
        }
    }

    /// Clamps each component between the scalars `min_val` and `max_val`.
    #[inline]
    pub fn clamp_scalar(self, min_val: i32, max_val: i32) -> Self {
        self.clamp(Self::splat(min_val), Self::splat(max_val))
    }

    /// Calculates the squared length (magnitude) of the vector.
    ///
    /// The accumulation is done in `i64`, so it cannot overflow.
    #[inline]
    pub fn length_squared(&self) -> i64 {
        let x = self.x as i64;
        let y = self.y as i64;
        x * x + y * y
    }

    /// Calculates the length (magnitude) of the vector.
    ///
    /// This is the only operation that leaves the integer domain.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.length_squared() as f64).sqrt() as f32
    }

    /// Calculates the squared distance between this vector and another.
    #[inline]
    pub fn distance_squared_to(&self, other: Self) -> i64 {
        (other - *self).length_squared()
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance_to(&self, other: Self) -> f32 {
        (other - *self).length()
    }

    /// Snaps each component to the nearest multiple of the matching `step` component.
    ///
    /// A zero step component leaves that component unchanged.
    #[inline]
    pub fn snapped(self, step: Self) -> Self {
        Self {
            x: snap_component(self.x, step.x),
            y: snap_component(self.y, step.y),
        }
    }

    /// Snaps each component to the nearest multiple of a scalar `step`.
    #[inline]
    pub fn snapped_scalar(self, step: i32) -> Self {
        self.snapped(Self::splat(step))
    }
}

impl fmt::Display for IVec2 {
    /// Formats the vector as `(x, y)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Ord for IVec2 {
    /// Lexicographic order: `x` decides first, `y` breaks the tie.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl PartialOrd for IVec2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// --- Operator Overloads ---

impl Add for IVec2 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for IVec2 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for IVec2 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<i32> for IVec2 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<IVec2> for i32 {
    type Output = IVec2;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: IVec2) -> Self::Output {
        rhs * self
    }
}

impl Mul<IVec2> for IVec2 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}

impl Div<i32> for IVec2 {
    type Output = Self;
    /// Divides the vector by a scalar, truncating toward zero.
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(self, rhs: i32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Div<IVec2> for IVec2 {
    type Output = Self;
    /// Divides two vectors component-wise, truncating toward zero.
    /// # Panics
    /// Panics if any component of `rhs` is zero.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }
}

impl Rem<i32> for IVec2 {
    type Output = Self;
    /// Computes the truncated remainder by a scalar; the sign follows the dividend.
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    fn rem(self, rhs: i32) -> Self::Output {
        Self {
            x: self.x % rhs,
            y: self.y % rhs,
        }
    }
}

impl Rem<IVec2> for IVec2 {
    type Output = Self;
    /// Computes the component-wise truncated remainder; signs follow the dividend.
    /// # Panics
    /// Panics if any component of `rhs` is zero.
    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x % rhs.x,
            y: self.y % rhs.y,
        }
    }
}

impl Index<usize> for IVec2 {
    type Output = i32;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds for IVec2"),
        }
    }
}

impl IndexMut<usize> for IVec2 {
    /// Allows mutably accessing a vector component by index (`v[0] = ...`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds for IVec2"),
        }
    }
}

// --- IVec3 ---

/// A 3-dimensional vector with `i32` components.
///
/// This is the engine's grid coordinate type. It is a plain `Copy` value:
/// every operation returns a new vector, and no instance is ever shared by
/// reference in this type's own contract.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct IVec3 {
    /// The x component of the vector.
    pub x: i32,
    /// The y component of the vector.
    pub y: i32,
    /// The z component of the vector.
    pub z: i32,
}

impl IVec3 {
    /// A vector with all components set to `0`.
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };
    /// A vector with all components set to `1`.
    pub const ONE: Self = Self { x: 1, y: 1, z: 1 };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self { x: 1, y: 0, z: 0 };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self { x: 0, y: 1, z: 0 };
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self { x: 0, y: 0, z: 1 };
    /// A vector with all components set to `i32::MIN`.
    pub const MIN: Self = Self {
        x: i32::MIN,
        y: i32::MIN,
        z: i32::MIN,
    };
    /// A vector with all components set to `i32::MAX`.
    pub const MAX: Self = Self {
        x: i32::MAX,
        y: i32::MAX,
        z: i32::MAX,
    };

    /// Creates a new `IVec3` with the specified components.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new `IVec3` with all components set to `value`.
    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }

    /// Creates an `IVec3` from an [`IVec2`] filling `x` and `y`, plus a `z` component.
    #[inline]
    pub const fn from_xy_z(xy: IVec2, z: i32) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// Creates an `IVec3` from an `x` component plus an [`IVec2`] filling `y` and `z`.
    #[inline]
    pub const fn from_x_yz(x: i32, yz: IVec2) -> Self {
        Self::new(x, yz.x, yz.y)
    }

    /// Returns a new vector with the absolute value of each component.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            x: if self.x < 0 { -self.x } else { self.x },
            y: if self.y < 0 { -self.y } else { self.y },
            z: if self.z < 0 { -self.z } else { self.z },
        }
    }

    /// Returns a new vector with each component replaced by its sign (`-1`, `0`, or `1`).
    #[inline]
    pub const fn sign(self) -> Self {
        Self {
            x: self.x.signum(),
            y: self.y.signum(),
            z: self.z.signum(),
        }
    }

    /// Returns the component-wise minimum of this vector and another.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self {
            x: self.x.min(rhs.x),
            y: self.y.min(rhs.y),
            z: self.z.min(rhs.z),
        }
    }

    /// Returns the component-wise maximum of this vector and another.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self {
            x: self.x.max(rhs.x),
            y: self.y.max(rhs.y),
            z: self.z.max(rhs.z),
        }
    }

    /// Returns the component-wise minimum of this vector and a scalar.
    #[inline]
    pub fn min_scalar(self, rhs: i32) -> Self {
        self.min(Self::splat(rhs))
    }

    /// Returns the component-wise maximum of this vector and a scalar.
    #[inline]
    pub fn max_scalar(self, rhs: i32) -> Self {
        self.max(Self::splat(rhs))
    }

    /// Clamps each component between the matching components of `min_val` and `max_val`.
    #[inline]
    pub fn clamp(self, min_val: Self, max_val: Self) -> Self {
        Self {
            x: clamp(self.x, min_val.x, max_val.x),
            y: clamp(self.y, min_val.y, max_val.y),
            z: clamp(self.z, min_val.z, max_val.z),
        }
    }

    /// Clamps each component between the scalars `min_val` and `max_val`.
    #[inline]
    pub fn clamp_scalar(self, min_val: i32, max_val: i32) -> Self {
        self.clamp(Self::splat(min_val), Self::splat(max_val))
    }

    /// Calculates the squared length (magnitude) of the vector.
    ///
    /// The accumulation is done in `i64`, so it cannot overflow.
    #[inline]
    pub fn length_squared(&self) -> i64 {
        let x = self.x as i64;
        let y = self.y as i64;
        let z = self.z as i64;
        x * x + y * y + z * z
    }

    /// Calculates the length (magnitude) of the vector.
    ///
    /// This is the only operation that leaves the integer domain.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.length_squared() as f64).sqrt() as f32
    }

    /// Calculates the squared distance between this vector and another.
    #[inline]
    pub fn distance_squared_to(&self, other: Self) -> i64 {
        (other - *self).length_squared()
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance_to(&self, other: Self) -> f32 {
        (other - *self).length()
    }

    /// Snaps each component to the nearest multiple of the matching `step` component.
    ///
    /// A zero step component leaves that component unchanged.
    #[inline]
    pub fn snapped(self, step: Self) -> Self {
        Self {
            x: snap_component(self.x, step.x),
            y: snap_component(self.y, step.y),
            z: snap_component(self.z, step.z),
        }
    }

    /// Snaps each component to the nearest multiple of a scalar `step`.
    #[inline]
    pub fn snapped_scalar(self, step: i32) -> Self {
        self.snapped(Self::splat(step))
    }

    /// Returns the axis holding the largest component.
    ///
    /// Ties resolve toward the earlier axis: an all-equal vector reports
    /// [`Axis3::X`], and a `y`/`z` tie reports [`Axis3::Y`].
    #[inline]
    pub fn max_axis(&self) -> Axis3 {
        if self.x < self.y {
            if self.y < self.z {
                Axis3::Z
            } else {
                Axis3::Y
            }
        } else if self.x < self.z {
            Axis3::Z
        } else {
            Axis3::X
        }
    }

    /// Returns the axis holding the smallest component.
    ///
    /// Ties resolve toward the later axis: an all-equal vector reports
    /// [`Axis3::Z`].
    #[inline]
    pub fn min_axis(&self) -> Axis3 {
        if self.x < self.y {
            if self.x < self.z {
                Axis3::X
            } else {
                Axis3::Z
            }
        } else if self.y < self.z {
            Axis3::Y
        } else {
            Axis3::Z
        }
    }
}

impl Default for IVec3 {
    /// Returns `IVec3::ZERO`.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for IVec3 {
    /// Formats the vector as `(x, y, z)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Ord for IVec3 {
    /// Lexicographic order: `x` decides first, then `y`, and only the final
    /// `z` comparison breaks a full prefix tie. Sorting call sites rely on
    /// this exact tie-break chain.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .cmp(&other.x)
            .then(self.y.cmp(&other.y))
            .then(self.z.cmp(&other.z))
    }
}

impl PartialOrd for IVec3 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// --- Operator Overloads ---

impl Add for IVec3 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for IVec3 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for IVec3 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<i32> for IVec3 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<IVec3> for i32 {
    type Output = IVec3;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: IVec3) -> Self::Output {
        rhs * self
    }
}

impl Mul<IVec3> for IVec3 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Div<i32> for IVec3 {
    type Output = Self;
    /// Divides the vector by a scalar, truncating toward zero.
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(self, rhs: i32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Div<IVec3> for IVec3 {
    type Output = Self;
    /// Divides two vectors component-wise, truncating toward zero.
    /// # Panics
    /// Panics if any component of `rhs` is zero.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}

impl Rem<i32> for IVec3 {
    type Output = Self;
    /// Computes the truncated remainder by a scalar; the sign follows the dividend.
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    fn rem(self, rhs: i32) -> Self::Output {
        Self {
            x: self.x % rhs,
            y: self.y % rhs,
            z: self.z % rhs,
        }
    }
}

impl Rem<IVec3> for IVec3 {
    type Output = Self;
    /// Computes the component-wise truncated remainder; signs follow the dividend.
    /// # Panics
    /// Panics if any component of `rhs` is zero.
    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x % rhs.x,
            y: self.y % rhs.y,
            z: self.z % rhs.z,
        }
    }
}

impl Index<usize> for IVec3 {
    type Output = i32;
    /// Allows accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for IVec3"),
        }
    }
}

impl IndexMut<usize> for IVec3 {
    /// Allows mutably accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for IVec3"),
        }
    }
}

impl Index<Axis3> for IVec3 {
    type Output = i32;
    /// Accesses a vector component by typed axis; never panics.
    #[inline]
    fn index(&self, axis: Axis3) -> &Self::Output {
        match axis {
            Axis3::X => &self.x,
            Axis3::Y => &self.y,
            Axis3::Z => &self.z,
        }
    }
}

impl IndexMut<Axis3> for IVec3 {
    /// Mutably accesses a vector component by typed axis; never panics.
    #[inline]
    fn index_mut(&mut self, axis: Axis3) -> &mut Self::Output {
        match axis {
            Axis3::X => &mut self.x,
            Axis3::Y => &mut self.y,
            Axis3::Z => &mut self.z,
        }
    }
}

// --- IVec4 ---

/// A 4-dimensional vector with `i32` components.
///
/// This type only arises as the result of four-component swizzles of an
/// [`IVec3`]; it is a read-only projection with no write-back into its
/// source, so its surface is deliberately small.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct IVec4 {
    /// The x component of the vector.
    pub x: i32,
    /// The y component of the vector.
    pub y: i32,
    /// The z component of the vector.
    pub z: i32,
    /// The w component of the vector.
    pub w: i32,
}

impl IVec4 {
    /// A vector with all components set to `0`.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        z: 0,
        w: 0,
    };
    /// A vector with all components set to `1`.
    pub const ONE: Self = Self {
        x: 1,
        y: 1,
        z: 1,
        w: 1,
    };

    /// Creates a new `IVec4` with the specified components.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the `[x, y, z]` components as an [`IVec3`], discarding `w`.
    #[inline]
    pub const fn truncate(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl fmt::Display for IVec4 {
    /// Formats the vector as `(x, y, z, w)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl Index<usize> for IVec4 {
    type Output = i32;
    /// Allows accessing a vector component by index (read-only projection).
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Index out of bounds for IVec4"),
        }
    }
}

// --- Conversions ---

impl From<IVec2> for Vec2 {
    /// Widens each component to `f32`; exact for magnitudes below 2^24.
    #[inline]
    fn from(v: IVec2) -> Self {
        Vec2::new(v.x as f32, v.y as f32)
    }
}

impl From<Vec2> for IVec2 {
    /// Narrows each component by truncating toward zero. Callers wanting
    /// round/floor/ceil semantics apply the matching [`Vec2`] method first.
    #[inline]
    fn from(v: Vec2) -> Self {
        IVec2::new(v.x as i32, v.y as i32)
    }
}

impl From<IVec3> for Vec3 {
    /// Widens each component to `f32`; exact for magnitudes below 2^24.
    #[inline]
    fn from(v: IVec3) -> Self {
        Vec3::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

impl From<Vec3> for IVec3 {
    /// Narrows each component by truncating toward zero. Callers wanting
    /// round/floor/ceil semantics apply the matching [`Vec3`] method first.
    #[inline]
    fn from(v: Vec3) -> Self {
        IVec3::new(v.x as i32, v.y as i32, v.z as i32)
    }
}

/// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // IVec3

    #[test]
    fn test_construction() {
        let v = IVec3::new(1, 2, 3);
        assert_eq!(v.x, 1);
        assert_eq!(v.y, 2);
        assert_eq!(v.z, 3);
        assert_eq!(IVec3::splat(7), IVec3::new(7, 7, 7));
        assert_eq!(IVec3::default(), IVec3::ZERO);
        assert_eq!(IVec3::from_xy_z(IVec2::new(1, 2), 3), IVec3::new(1, 2, 3));
        assert_eq!(IVec3::from_x_yz(1, IVec2::new(2, 3)), IVec3::new(1, 2, 3));
        assert_eq!(IVec2::new(4, 5).extend(6), IVec3::new(4, 5, 6));
    }

    #[test]
    fn test_constants() {
        assert_eq!(IVec3::ZERO, IVec3::new(0, 0, 0));
        assert_eq!(IVec3::ONE, IVec3::new(1, 1, 1));
        assert_eq!(IVec3::X + IVec3::Y + IVec3::Z, IVec3::ONE);
        assert_eq!(IVec3::MAX.x, i32::MAX);
        assert_eq!(IVec3::MIN.z, i32::MIN);
    }

    #[test]
    fn test_index_roundtrip() {
        let mut v = IVec3::new(5, 6, 7);
        for i in 0..3 {
            v[i] = 10 + i as i32;
            assert_eq!(v[i], 10 + i as i32);
        }
        assert_eq!(v, IVec3::new(10, 11, 12));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let v = IVec3::new(1, 2, 3);
        let _ = v[3]; // Should panic
    }

    #[test]
    #[should_panic]
    fn test_index_mut_out_of_bounds() {
        let mut v = IVec3::new(1, 2, 3);
        v[4] = 0; // Should panic
    }

    #[test]
    fn test_axis_index() {
        let mut v = IVec3::new(1, 2, 3);
        assert_eq!(v[Axis3::X], 1);
        assert_eq!(v[Axis3::Z], 3);
        v[Axis3::Y] = 9;
        assert_eq!(v.y, 9);
        assert_eq!(Axis3::Z.index(), 2);
    }

    #[test]
    fn test_arithmetic_identities() {
        let v = IVec3::new(3, -4, 5);
        let w = IVec3::new(-1, 6, 2);
        assert_eq!(v + w, w + v);
        assert_eq!(v + (-v), IVec3::ZERO);
        assert_eq!(v * 1, v);
        assert_eq!(v * 0, IVec3::ZERO);
        assert_eq!(v * 2, 2 * v);
        assert_eq!(v - w, IVec3::new(4, -10, 3));
        assert_eq!(v * w, IVec3::new(-3, -24, 10));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(IVec3::new(7, -7, 8) / 2, IVec3::new(3, -3, 4));
        assert_eq!(
            IVec3::new(7, -7, 8) / IVec3::new(2, 2, -3),
            IVec3::new(3, -3, -2)
        );
    }

    #[test]
    #[should_panic]
    fn test_division_by_zero_panics() {
        let _ = IVec3::new(1, 2, 3) / 0; // Should panic, native i32 semantics
    }

    #[test]
    fn test_remainder_sign_follows_dividend() {
        assert_eq!(IVec3::new(10, -20, 30) % 7, IVec3::new(3, -6, 2));
        assert_eq!(
            IVec3::new(10, -20, 30) % IVec3::new(7, 8, 9),
            IVec3::new(3, -4, 3)
        );
    }

    #[test]
    fn test_abs_and_sign() {
        let v = IVec3::new(-3, 0, 7);
        assert_eq!(v.abs(), IVec3::new(3, 0, 7));
        assert_eq!((-v).abs(), v.abs());
        assert_eq!(IVec3::new(0, -7, 7).sign(), IVec3::new(0, -1, 1));
    }

    #[test]
    fn test_min_max_clamp() {
        let v = IVec3::new(5, -2, 9);
        let w = IVec3::new(3, 0, 12);
        assert_eq!(v.min(w), IVec3::new(3, -2, 9));
        assert_eq!(v.max(w), IVec3::new(5, 0, 12));
        assert_eq!(v.min_scalar(4), IVec3::new(4, -2, 4));
        assert_eq!(v.max_scalar(0), IVec3::new(5, 0, 9));

        let lo = IVec3::new(0, 0, 0);
        let hi = IVec3::new(4, 4, 4);
        let clamped = v.clamp(lo, hi);
        for i in 0..3 {
            assert!(clamped[i] >= lo[i] && clamped[i] <= hi[i]);
        }
        assert_eq!(v.clamp_scalar(-1, 6), IVec3::new(5, -1, 6));
    }

    #[test]
    #[allow(arithmetic_overflow)]
    fn test_length_and_distance() {
        let v = IVec3::new(2, 3, 6);
        assert_eq!(v.length_squared(), 49);
        assert_relative_eq!(v.length(), 7.0);

        let w = IVec3::new(1, 1, 1);
        assert_eq!(v.distance_squared_to(w), (w - v).length_squared());
        assert_relative_eq!(v.distance_to(w), (w - v).length());
        // length_squared accumulates in i64
        assert_eq!(IVec3::splat(i32::MAX).length_squared(), 3 * (i32::MAX as i64) * (i32::MAX as i64));
    }

    #[test]
    fn test_snapped() {
        assert_eq!(IVec3::new(13, -7, 3).snapped_scalar(5), IVec3::new(15, -5, 5));
        assert_eq!(
            IVec3::new(13, -7, 3).snapped(IVec3::new(5, 4, 0)),
            IVec3::new(15, -8, 3)
        );
    }

    #[test]
    fn test_lexicographic_order() {
        assert!(IVec3::new(1, 2, 3) < IVec3::new(1, 2, 4));
        assert!(IVec3::new(1, 5, 0) < IVec3::new(2, 0, 0)); // x decides first
        assert!(IVec3::new(1, 2, 3) <= IVec3::new(1, 2, 3)); // final tie-break is inclusive
        assert!(IVec3::new(1, 2, 3) >= IVec3::new(1, 2, 3));

        let mut values = vec![
            IVec3::new(2, 0, 0),
            IVec3::new(1, 2, 4),
            IVec3::new(1, 5, 0),
            IVec3::new(1, 2, 3),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                IVec3::new(1, 2, 3),
                IVec3::new(1, 2, 4),
                IVec3::new(1, 5, 0),
                IVec3::new(2, 0, 0),
            ]
        );
    }

    #[test]
    fn test_max_axis_tie_breaks() {
        assert_eq!(IVec3::new(5, 5, 5).max_axis(), Axis3::X);
        assert_eq!(IVec3::new(1, 5, 5).max_axis(), Axis3::Y);
        assert_eq!(IVec3::new(1, 2, 5).max_axis(), Axis3::Z);
        assert_eq!(IVec3::new(9, 2, 5).max_axis(), Axis3::X);
        assert_eq!(IVec3::new(5, 2, 5).max_axis(), Axis3::X);
    }

    #[test]
    fn test_min_axis_tie_breaks() {
        assert_eq!(IVec3::new(5, 5, 5).min_axis(), Axis3::Z);
        assert_eq!(IVec3::new(1, 5, 5).min_axis(), Axis3::X);
        assert_eq!(IVec3::new(5, 1, 5).min_axis(), Axis3::Y);
        assert_eq!(IVec3::new(5, 1, 1).min_axis(), Axis3::Z);
        assert_eq!(IVec3::new(1, 5, 1).min_axis(), Axis3::Z);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(IVec3::new(1, 2, 3));
        set.insert(IVec3::new(1, 2, 3));
        set.insert(IVec3::new(3, 2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(IVec3::new(1, -2, 3).to_string(), "(1, -2, 3)");
        assert_eq!(IVec2::new(-4, 5).to_string(), "(-4, 5)");
        assert_eq!(IVec4::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
    }

    #[test]
    fn test_widen_narrow_roundtrip() {
        let v = IVec3::new(7, -13, 42);
        let f = Vec3::from(v);
        assert_eq!(f, Vec3::new(7.0, -13.0, 42.0));
        assert_eq!(IVec3::from(f), v);
    }

    #[test]
    fn test_narrowing_truncates_toward_zero() {
        assert_eq!(IVec3::from(Vec3::new(1.9, -1.9, 0.5)), IVec3::new(1, -1, 0));
        // rounding first gives round-to-nearest narrowing
        assert_eq!(
            IVec3::from(Vec3::new(1.9, -1.9, 0.5).round()),
            IVec3::new(2, -2, 1)
        );
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let v = IVec3::new(1, -2, 3);
        let json = serde_json::to_string(&v).unwrap();
        let back: IVec3 = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let v = IVec3::new(i32::MIN, 0, i32::MAX);
        let config = bincode::config::standard();
        let bytes = bincode::encode_to_vec(v, config).unwrap();
        let (back, _): (IVec3, usize) = bincode::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(v, back);
    }

    // IVec2

    #[test]
    fn test_ivec2_ops() {
        let v = IVec2::new(3, -4);
        let w = IVec2::new(1, 2);
        assert_eq!(v + w, IVec2::new(4, -2));
        assert_eq!(v - w, IVec2::new(2, -6));
        assert_eq!(-v, IVec2::new(-3, 4));
        assert_eq!(v * 2, 2 * v);
        assert_eq!(v * w, IVec2::new(3, -8));
        assert_eq!(v / 2, IVec2::new(1, -2));
        assert_eq!(v % 3, IVec2::new(0, -1));
        assert_eq!(v % w, IVec2::new(0, 0));
    }

    #[test]
    fn test_ivec2_queries() {
        let v = IVec2::new(-3, 4);
        assert_eq!(v.abs(), IVec2::new(3, 4));
        assert_eq!(v.sign(), IVec2::new(-1, 1));
        assert_eq!(v.length_squared(), 25);
        assert_relative_eq!(v.length(), 5.0);
        assert_eq!(v.clamp_scalar(-1, 1), IVec2::new(-1, 1));
        assert_eq!(IVec2::new(13, -7).snapped_scalar(5), IVec2::new(15, -5));
        assert!(IVec2::new(1, 9) < IVec2::new(2, 0));
    }

    #[test]
    #[should_panic]
    fn test_ivec2_index_out_of_bounds() {
        let v = IVec2::new(1, 2);
        let _ = v[2]; // Should panic
    }

    // IVec4

    #[test]
    fn test_ivec4_basics() {
        let v = IVec4::new(1, 2, 3, 4);
        assert_eq!(v[0] + v[3], 5);
        assert_eq!(v.truncate(), IVec3::new(1, 2, 3));
        assert!(IVec4::new(1, 2, 3, 4) < IVec4::new(1, 2, 3, 5));
    }

    #[test]
    #[should_panic]
    fn test_ivec4_index_out_of_bounds() {
        let v = IVec4::new(1, 2, 3, 4);
        let _ = v[4]; // Should panic
    }
}
