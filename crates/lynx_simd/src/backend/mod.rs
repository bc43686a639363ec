use core::fmt::Display;

/// Instruction set a backend is implemented with
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BackendType {
    Scalar,

    // x86-64
    SSE,
}

impl Display for BackendType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BackendType::Scalar => f.write_str("scalar"),
            BackendType::SSE    => f.write_str("sse"),
        }
    }
}

/// Marker type selecting the implementation of an operation
pub trait Backend : 'static {
    const TYPE : BackendType;
}

/// Plain `f32` implementation, available on every target
pub struct Scalar;

impl Backend for Scalar {
    const TYPE : BackendType = BackendType::Scalar;
}

/// SSE implementation
#[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
pub struct Sse;

#[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
impl Backend for Sse {
    const TYPE : BackendType = BackendType::SSE;
}

pub trait SimdSetImpl<B: Backend> {
    /// Set all elements of the register to `val`
    fn simd_splat_impl(val: f32) -> Self;
}

pub trait SimdAddImpl<B: Backend> {
    /// Per element add
    fn simd_add_impl(self, other: Self) -> Self;
}

pub trait SimdSubImpl<B: Backend> {
    /// Per element subtract
    fn simd_sub_impl(self, other: Self) -> Self;
}

pub trait SimdMulImpl<B: Backend> {
    /// Per element multiplication
    fn simd_mul_impl(self, other: Self) -> Self;
}

pub trait SimdNegImpl<B: Backend> {
    /// Per element negate, calculated as `0 - x`
    fn simd_neg_impl(self) -> Self;
}

pub trait SimdShuffleImpl<B: Backend> : Sized {
    /// Rearrange the lanes using a mask created with [`shuffle_mask`](crate::shuffle_mask)
    fn simd_shuffle_impl<const MASK: i32>(self) -> Self;

    /// The lower 2 lanes are selected from `self`, the upper 2 lanes from `other`
    fn simd_shuffle2_impl<const MASK: i32>(self, other: Self) -> Self;

    /// Replace the last lane
    fn simd_replace_w_impl(self, w: f32) -> Self;
}

pub trait SimdHorizontalImpl<B: Backend> : Sized {
    /// Sum all lanes, summed as `(x + z) + (y + w)`
    fn simd_hsum_impl(self) -> f32;

    /// 4 component dot product
    fn simd_dot_impl(self, other: Self) -> f32;
}

pub trait SimdTransposeImpl<B: Backend> : Sized {
    /// Transpose 4 registers, so lane `j` of register `i` ends up in lane `i` of register `j`
    fn simd_transpose_impl(rows: [Self; 4]) -> [Self; 4];
}

#[allow(unused_macros)]
macro_rules! from_transmute {
    { unsafe $a:ty => $b:ty } => {
        from_transmute!{ @impl $a => $b }
        from_transmute!{ @impl $b => $a }
    };
    { @impl $from:ty => $to:ty } => {
        impl core::convert::From<$from> for $to {
            #[inline]
            fn from(value: $from) -> $to {
                unsafe { core::mem::transmute(value) }
            }
        }
    }
}

mod scalar;

#[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
mod sse;
