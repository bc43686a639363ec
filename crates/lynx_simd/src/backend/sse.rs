use core::arch::x86_64::*;

use crate::{
    f32x4,
    shuffle_mask,
    backend::*,
};

from_transmute!{ unsafe f32x4 => __m128 }

macro_rules! impl_binary {
    {$($trait:ident, $func:ident, $intrin:ident;)*} => {
        $(
            impl $trait<Sse> for f32x4 {
                #[inline]
                fn $func(self, other: Self) -> Self {
                    unsafe { $intrin(self.into(), other.into()).into() }
                }
            }
        )*
    };
}
impl_binary!{
    SimdAddImpl, simd_add_impl, _mm_add_ps;
    SimdSubImpl, simd_sub_impl, _mm_sub_ps;
    SimdMulImpl, simd_mul_impl, _mm_mul_ps;
}

impl SimdSetImpl<Sse> for f32x4 {
    #[inline]
    fn simd_splat_impl(val: f32) -> Self {
        unsafe { _mm_set1_ps(val).into() }
    }
}

impl SimdNegImpl<Sse> for f32x4 {
    #[inline]
    fn simd_neg_impl(self) -> Self {
        unsafe { _mm_sub_ps(_mm_setzero_ps(), self.into()).into() }
    }
}

impl SimdShuffleImpl<Sse> for f32x4 {
    #[inline]
    fn simd_shuffle_impl<const MASK: i32>(self) -> Self {
        unsafe {
            let val : __m128 = self.into();
            _mm_shuffle_ps::<MASK>(val, val).into()
        }
    }

    #[inline]
    fn simd_shuffle2_impl<const MASK: i32>(self, other: Self) -> Self {
        unsafe { _mm_shuffle_ps::<MASK>(self.into(), other.into()).into() }
    }

    #[inline]
    fn simd_replace_w_impl(self, w: f32) -> Self {
        unsafe {
            let val : __m128 = self.into();
            // (z, w', w, w')
            let hi = _mm_unpackhi_ps(val, _mm_set1_ps(w));
            _mm_shuffle_ps::<{ shuffle_mask(0, 1, 0, 1) }>(val, hi).into()
        }
    }
}

impl SimdHorizontalImpl<Sse> for f32x4 {
    #[inline]
    fn simd_hsum_impl(self) -> f32 {
        unsafe {
            let val : __m128 = self.into();
            // (x + z, y + w, ..)
            let sums = _mm_add_ps(val, _mm_movehl_ps(val, val));
            let shuf = _mm_shuffle_ps::<{ shuffle_mask(1, 0, 0, 0) }>(sums, sums);
            _mm_cvtss_f32(_mm_add_ss(sums, shuf))
        }
    }

    #[inline]
    fn simd_dot_impl(self, other: Self) -> f32 {
        <Self as SimdMulImpl<Sse>>::simd_mul_impl(self, other).simd_hsum::<Sse>()
    }
}

impl SimdTransposeImpl<Sse> for f32x4 {
    #[inline]
    fn simd_transpose_impl(rows: [Self; 4]) -> [Self; 4] {
        unsafe {
            let [r0, r1, r2, r3] = rows.map(|row| -> __m128 { row.into() });

            let tmp0 = _mm_unpacklo_ps(r0, r1);
            let tmp1 = _mm_unpackhi_ps(r0, r1);
            let tmp2 = _mm_unpacklo_ps(r2, r3);
            let tmp3 = _mm_unpackhi_ps(r2, r3);

            [
                _mm_movelh_ps(tmp0, tmp2).into(),
                _mm_movehl_ps(tmp2, tmp0).into(),
                _mm_movelh_ps(tmp1, tmp3).into(),
                _mm_movehl_ps(tmp3, tmp1).into(),
            ]
        }
    }
}
