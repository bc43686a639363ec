use crate::{
    f32x4,
    backend::*,
};

macro_rules! impl_lanewise {
    {$($trait:ident, $func:ident, |$a:ident, $b:ident| $expr:expr;)*} => {
        $(
            impl $trait<Scalar> for f32x4 {
                #[inline]
                fn $func(self, other: Self) -> Self {
                    let (lhs, rhs) = (self.to_array(), other.to_array());
                    let mut res = [0f32; 4];
                    for i in 0..4 {
                        let ($a, $b) = (lhs[i], rhs[i]);
                        res[i] = $expr;
                    }
                    f32x4::from_array(res)
                }
            }
        )*
    };
}
impl_lanewise!{
    SimdAddImpl, simd_add_impl, |a, b| a + b;
    SimdSubImpl, simd_sub_impl, |a, b| a - b;
    SimdMulImpl, simd_mul_impl, |a, b| a * b;
}

impl SimdSetImpl<Scalar> for f32x4 {
    #[inline]
    fn simd_splat_impl(val: f32) -> Self {
        f32x4::from_array([val; 4])
    }
}

impl SimdNegImpl<Scalar> for f32x4 {
    #[inline]
    fn simd_neg_impl(self) -> Self {
        let arr = self.to_array();
        f32x4::from_array([0.0 - arr[0], 0.0 - arr[1], 0.0 - arr[2], 0.0 - arr[3]])
    }
}

#[inline]
const fn mask_lane(mask: i32, lane: usize) -> usize {
    ((mask >> (lane * 2)) & 0b11) as usize
}

impl SimdShuffleImpl<Scalar> for f32x4 {
    #[inline]
    fn simd_shuffle_impl<const MASK: i32>(self) -> Self {
        let arr = self.to_array();
        f32x4::from_array([
            arr[mask_lane(MASK, 0)],
            arr[mask_lane(MASK, 1)],
            arr[mask_lane(MASK, 2)],
            arr[mask_lane(MASK, 3)],
        ])
    }

    #[inline]
    fn simd_shuffle2_impl<const MASK: i32>(self, other: Self) -> Self {
        let (lo, hi) = (self.to_array(), other.to_array());
        f32x4::from_array([
            lo[mask_lane(MASK, 0)],
            lo[mask_lane(MASK, 1)],
            hi[mask_lane(MASK, 2)],
            hi[mask_lane(MASK, 3)],
        ])
    }

    #[inline]
    fn simd_replace_w_impl(self, w: f32) -> Self {
        let mut arr = self.to_array();
        arr[3] = w;
        f32x4::from_array(arr)
    }
}

impl SimdHorizontalImpl<Scalar> for f32x4 {
    #[inline]
    fn simd_hsum_impl(self) -> f32 {
        let arr = self.to_array();
        (arr[0] + arr[2]) + (arr[1] + arr[3])
    }

    #[inline]
    fn simd_dot_impl(self, other: Self) -> f32 {
        <Self as SimdMulImpl<Scalar>>::simd_mul_impl(self, other).simd_hsum::<Scalar>()
    }
}

impl SimdTransposeImpl<Scalar> for f32x4 {
    #[inline]
    fn simd_transpose_impl(rows: [Self; 4]) -> [Self; 4] {
        let mut res = [[0f32; 4]; 4];
        for (i, row) in rows.iter().enumerate() {
            for j in 0..4 {
                res[j][i] = row[j];
            }
        }
        res.map(f32x4::from_array)
    }
}
