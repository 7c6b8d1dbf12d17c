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

//! Swizzle accessors for [`IVec3`].
//!
//! A swizzle reads a reordered (and possibly repeated) selection of the
//! vector's components as a two-, three-, or four-component value. The full
//! set is enumerated here once, through macros, as plain inherent methods:
//! no dynamic dispatch, no abstraction beyond field selection.
//!
//! Write-back is only defined for selections without repeated components, so
//! only those get a `set_*` mutator; repeated selections (and every
//! four-component swizzle, since [`IVec4`] has no backing storage in the
//! source vector) are queries only.

use super::ivector::{IVec2, IVec3, IVec4};

macro_rules! swizzle2 {
    ($(($name:ident, $a:ident, $b:ident)),* $(,)?) => {
        $(
            #[doc = concat!("Returns the `", stringify!($name), "` swizzle as an [`IVec2`].")]
            #[inline]
            pub const fn $name(self) -> IVec2 {
                IVec2::new(self.$a, self.$b)
            }
        )*
    };
}

macro_rules! swizzle3 {
    ($(($name:ident, $a:ident, $b:ident, $c:ident)),* $(,)?) => {
        $(
            #[doc = concat!("Returns the `", stringify!($name), "` swizzle as an [`IVec3`].")]
            #[inline]
            pub const fn $name(self) -> IVec3 {
                IVec3::new(self.$a, self.$b, self.$c)
            }
        )*
    };
}

macro_rules! swizzle4 {
    ($(($name:ident, $a:ident, $b:ident, $c:ident, $d:ident)),* $(,)?) => {
        $(
            #[doc = concat!("Returns the `", stringify!($name), "` swizzle as an [`IVec4`].")]
            #[inline]
            pub const fn $name(self) -> IVec4 {
                IVec4::new(self.$a, self.$b, self.$c, self.$d)
            }
        )*
    };
}

macro_rules! swizzle2_set {
    ($(($name:ident, $a:ident, $b:ident)),* $(,)?) => {
        $(
            #[doc = concat!("Stores `rhs` into the `", stringify!($a), "` and `", stringify!($b), "` components, in that order.")]
            #[inline]
            pub fn $name(&mut self, rhs: IVec2) {
                self.$a = rhs.x;
                self.$b = rhs.y;
            }
        )*
    };
}

macro_rules! swizzle3_set {
    ($(($name:ident, $a:ident, $b:ident, $c:ident)),* $(,)?) => {
        $(
            #[doc = concat!("Stores `rhs` into the `", stringify!($a), "`, `", stringify!($b), "`, and `", stringify!($c), "` components, in that order.")]
            #[inline]
            pub fn $name(&mut self, rhs: IVec3) {
                self.$a = rhs.x;
                self.$b = rhs.y;
                self.$c = rhs.z;
            }
        )*
    };
}

impl IVec3 {
    swizzle2! {
        (xx, x, x), (xy, x, y), (xz, x, z),
        (yx, y, x), (yy, y, y), (yz, y, z),
        (zx, z, x), (zy, z, y), (zz, z, z),
    }

    swizzle3! {
        (xxx, x, x, x), (xxy, x, x, y), (xxz, x, x, z),
        (xyx, x, y, x), (xyy, x, y, y), (xyz, x, y, z),
        (xzx, x, z, x), (xzy, x, z, y), (xzz, x, z, z),
        (yxx, y, x, x), (yxy, y, x, y), (yxz, y, x, z),
        (yyx, y, y, x), (yyy, y, y, y), (yyz, y, y, z),
        (yzx, y, z, x), (yzy, y, z, y), (yzz, y, z, z),
        (zxx, z, x, x), (zxy, z, x, y), (zxz, z, x, z),
        (zyx, z, y, x), (zyy, z, y, y), (zyz, z, y, z),
        (zzx, z, z, x), (zzy, z, z, y), (zzz, z, z, z),
    }

    swizzle4! {
        (xxxx, x, x, x, x), (xxxy, x, x, x, y), (xxxz, x, x, x, z),
        (xxyx, x, x, y, x), (xxyy, x, x, y, y), (xxyz, x, x, y, z),
        (xxzx, x, x, z, x), (xxzy, x, x, z, y), (xxzz, x, x, z, z),
        (xyxx, x, y, x, x), (xyxy, x, y, x, y), (xyxz, x, y, x, z),
        (xyyx, x, y, y, x), (xyyy, x, y, y, y), (xyyz, x, y, y, z),
        (xyzx, x, y, z, x), (xyzy, x, y, z, y), (xyzz, x, y, z, z),
        (xzxx, x, z, x, x), (xzxy, x, z, x, y), (xzxz, x, z, x, z),
        (xzyx, x, z, y, x), (xzyy, x, z, y, y), (xzyz, x, z, y, z),
        (xzzx, x, z, z, x), (xzzy, x, z, z, y), (xzzz, x, z, z, z),
        (yxxx, y, x, x, x), (yxxy, y, x, x, y), (yxxz, y, x, x, z),
        (yxyx, y, x, y, x), (yxyy, y, x, y, y), (yxyz, y, x, y, z),
        (yxzx, y, x, z, x), (yxzy, y, x, z, y), (yxzz, y, x, z, z),
        (yyxx, y, y, x, x), (yyxy, y, y, x, y), (yyxz, y, y, x, z),
        (yyyx, y, y, y, x), (yyyy, y, y, y, y), (yyyz, y, y, y, z),
        (yyzx, y, y, z, x), (yyzy, y, y, z, y), (yyzz, y, y, z, z),
        (yzxx, y, z, x, x), (yzxy, y, z, x, y), (yzxz, y, z, x, z),
        (yzyx, y, z, y, x), (yzyy, y, z, y, y), (yzyz, y, z, y, z),
        (yzzx, y, z, z, x), (yzzy, y, z, z, y), (yzzz, y, z, z, z),
        (zxxx, z, x, x, x), (zxxy, z, x, x, y), (zxxz, z, x, x, z),
        (zxyx, z, x, y, x), (zxyy, z, x, y, y), (zxyz, z, x, y, z),
        (zxzx, z, x, z, x), (zxzy, z, x, z, y), (zxzz, z, x, z, z),
        (zyxx, z, y, x, x), (zyxy, z, y, x, y), (zyxz, z, y, x, z),
        (zyyx, z, y, y, x), (zyyy, z, y, y, y), (zyyz, z, y, y, z),
        (zyzx, z, y, z, x), (zyzy, z, y, z, y), (zyzz, z, y, z, z),
        (zzxx, z, z, x, x), (zzxy, z, z, x, y), (zzxz, z, z, x, z),
        (zzyx, z, z, y, x), (zzyy, z, z, y, y), (zzyz, z, z, y, z),
        (zzzx, z, z, z, x), (zzzy, z, z, z, y), (zzzz, z, z, z, z),
    }

    swizzle2_set! {
        (set_xy, x, y), (set_xz, x, z), (set_yx, y, x),
        (set_yz, y, z), (set_zx, z, x), (set_zy, z, y),
    }

    swizzle3_set! {
        (set_xyz, x, y, z), (set_xzy, x, z, y),
        (set_yxz, y, x, z), (set_yzx, y, z, x),
        (set_zxy, z, x, y), (set_zyx, z, y, x),
    }
}

/// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swizzle2_reads() {
        let v = IVec3::new(1, 2, 3);
        assert_eq!(v.xy(), IVec2::new(1, 2));
        assert_eq!(v.yx(), IVec2::new(2, 1));
        assert_eq!(v.zz(), IVec2::new(3, 3));
        assert_eq!(v.zx(), IVec2::new(3, 1));
    }

    #[test]
    fn test_swizzle3_reads() {
        let v = IVec3::new(1, 2, 3);
        assert_eq!(v.xyz(), v);
        assert_eq!(v.zyx(), IVec3::new(3, 2, 1));
        assert_eq!(v.yzx(), IVec3::new(2, 3, 1));
        assert_eq!(v.xxy(), IVec3::new(1, 1, 2));
        assert_eq!(v.zzz(), IVec3::splat(3));
    }

    #[test]
    fn test_swizzle4_reads() {
        let v = IVec3::new(1, 2, 3);
        assert_eq!(v.xyzx(), IVec4::new(1, 2, 3, 1));
        assert_eq!(v.zzyx(), IVec4::new(3, 3, 2, 1));
        assert_eq!(v.xxxx(), IVec4::new(1, 1, 1, 1));
        assert_eq!(v.yzxy(), IVec4::new(2, 3, 1, 2));
    }

    #[test]
    fn test_swizzle2_writes() {
        let mut v = IVec3::new(1, 2, 3);
        v.set_yx(IVec2::new(10, 20));
        assert_eq!(v, IVec3::new(20, 10, 3));
        v.set_xz(IVec2::new(7, 8));
        assert_eq!(v, IVec3::new(7, 10, 8));
    }

    #[test]
    fn test_swizzle3_writes() {
        let mut v = IVec3::new(1, 2, 3);
        v.set_zyx(IVec3::new(10, 20, 30));
        assert_eq!(v, IVec3::new(30, 20, 10));
        v.set_xyz(IVec3::new(1, 2, 3));
        assert_eq!(v, IVec3::new(1, 2, 3));
    }

    #[test]
    fn test_swizzle_read_matches_indexing() {
        let v = IVec3::new(4, 5, 6);
        let s = v.zxy();
        assert_eq!(s[0], v[2]);
        assert_eq!(s[1], v[0]);
        assert_eq!(s[2], v[1]);
    }
}
