use core::{
    fmt::Display,
    ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg, Index, IndexMut},
};
use static_assertions::{const_assert_eq, assert_eq_size};

use crate::*;

/// 4 lane `f32` register, aligned to 16 bytes
#[repr(C, align(16))]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct f32x4([f32; 4]);

assert_eq_size!(f32x4, [f32; 4]);
const_assert_eq!(core::mem::align_of::<f32x4>(), 16);

impl f32x4 {
    /// Number of lanes
    pub const LANES : usize = 4;

    /// Create a register from an array
    #[inline]
    #[must_use]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self(arr)
    }

    /// Create a register from its lanes
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// Get the lanes as an array
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Get a reference to the lanes
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.0
    }

    #[inline] #[must_use] pub const fn x(self) -> f32 { self.0[0] }
    #[inline] #[must_use] pub const fn y(self) -> f32 { self.0[1] }
    #[inline] #[must_use] pub const fn z(self) -> f32 { self.0[2] }
    #[inline] #[must_use] pub const fn w(self) -> f32 { self.0[3] }

    /// Set all lanes to `val`
    #[inline]
    #[must_use]
    pub fn splat(val: f32) -> Self {
        Self::simd_splat::<DefBackend>(val)
    }

    /// Rearrange the lanes using a mask created with [`shuffle_mask`]
    #[inline]
    #[must_use]
    pub fn shuffle<const MASK: i32>(self) -> Self {
        self.simd_shuffle::<DefBackend, MASK>()
    }

    /// Select the lower 2 lanes from `self` and the upper 2 lanes from `other`, using a mask created with [`shuffle_mask`]
    #[inline]
    #[must_use]
    pub fn shuffle2<const MASK: i32>(self, other: Self) -> Self {
        self.simd_shuffle2::<DefBackend, MASK>(other)
    }

    /// Replace the last lane
    #[inline]
    #[must_use]
    pub fn with_w(self, w: f32) -> Self {
        self.simd_replace_w::<DefBackend>(w)
    }

    /// Sum of all lanes
    #[inline]
    #[must_use]
    pub fn hsum(self) -> f32 {
        self.simd_hsum::<DefBackend>()
    }

    /// 4 component dot product
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.simd_dot::<DefBackend>(other)
    }

    /// Transpose 4 registers
    #[inline]
    #[must_use]
    pub fn transpose(rows: [Self; 4]) -> [Self; 4] {
        Self::simd_transpose::<DefBackend>(rows)
    }

    //--------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn simd_splat<B: Backend>(val: f32) -> Self where Self : SimdSetImpl<B> {
        <Self as SimdSetImpl<B>>::simd_splat_impl(val)
    }

    #[inline]
    #[must_use]
    pub fn simd_add<B: Backend>(self, other: Self) -> Self where Self : SimdAddImpl<B> {
        <Self as SimdAddImpl<B>>::simd_add_impl(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_sub<B: Backend>(self, other: Self) -> Self where Self : SimdSubImpl<B> {
        <Self as SimdSubImpl<B>>::simd_sub_impl(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_mul<B: Backend>(self, other: Self) -> Self where Self : SimdMulImpl<B> {
        <Self as SimdMulImpl<B>>::simd_mul_impl(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_neg<B: Backend>(self) -> Self where Self : SimdNegImpl<B> {
        <Self as SimdNegImpl<B>>::simd_neg_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_shuffle<B: Backend, const MASK: i32>(self) -> Self where Self : SimdShuffleImpl<B> {
        <Self as SimdShuffleImpl<B>>::simd_shuffle_impl::<MASK>(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_shuffle2<B: Backend, const MASK: i32>(self, other: Self) -> Self where Self : SimdShuffleImpl<B> {
        <Self as SimdShuffleImpl<B>>::simd_shuffle2_impl::<MASK>(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_replace_w<B: Backend>(self, w: f32) -> Self where Self : SimdShuffleImpl<B> {
        <Self as SimdShuffleImpl<B>>::simd_replace_w_impl(self, w)
    }

    #[inline]
    #[must_use]
    pub fn simd_hsum<B: Backend>(self) -> f32 where Self : SimdHorizontalImpl<B> {
        <Self as SimdHorizontalImpl<B>>::simd_hsum_impl(self)
    }

    #[inline]
    #[must_use]
    pub fn simd_dot<B: Backend>(self, other: Self) -> f32 where Self : SimdHorizontalImpl<B> {
        <Self as SimdHorizontalImpl<B>>::simd_dot_impl(self, other)
    }

    #[inline]
    #[must_use]
    pub fn simd_transpose<B: Backend>(rows: [Self; 4]) -> [Self; 4] where Self : SimdTransposeImpl<B> {
        <Self as SimdTransposeImpl<B>>::simd_transpose_impl(rows)
    }
}

impl From<[f32; 4]> for f32x4 {
    fn from(arr: [f32; 4]) -> Self {
        Self(arr)
    }
}

impl From<f32x4> for [f32; 4] {
    fn from(val: f32x4) -> Self {
        val.0
    }
}

impl Index<usize> for f32x4 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for f32x4 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

macro_rules! impl_op {
    {$($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $simd_fn:ident;)*} => {
        $(
            impl $op for f32x4 {
                type Output = Self;

                #[inline]
                fn $op_fn(self, rhs: Self) -> Self {
                    self.$simd_fn::<DefBackend>(rhs)
                }
            }

            impl $op<f32> for f32x4 {
                type Output = Self;

                #[inline]
                fn $op_fn(self, rhs: f32) -> Self {
                    self.$simd_fn::<DefBackend>(Self::splat(rhs))
                }
            }

            impl $assign for f32x4 {
                #[inline]
                fn $assign_fn(&mut self, rhs: Self) {
                    *self = self.$simd_fn::<DefBackend>(rhs);
                }
            }

            impl $assign<f32> for f32x4 {
                #[inline]
                fn $assign_fn(&mut self, rhs: f32) {
                    *self = self.$simd_fn::<DefBackend>(Self::splat(rhs));
                }
            }
        )*
    };
}
impl_op!{
    Add, add, AddAssign, add_assign, simd_add;
    Sub, sub, SubAssign, sub_assign, simd_sub;
    Mul, mul, MulAssign, mul_assign, simd_mul;
}

impl Neg for f32x4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.simd_neg::<DefBackend>()
    }
}

impl Display for f32x4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("[{}, {}, {}, {}]", self.0[0], self.0[1], self.0[2], self.0[3]))
    }
}
