//! 128-bit SIMD lane type used by the lynx math kernel
//!
//! Currently no runtime dynamic dispatch is supported, so the instruction set is decided at compile time.
//!
//! This is not a generic SIMD library, it only carries what the math kernel needs:
//! - a single 4-lane `f32` register type, [`f32x4`]
//! - a scalar backend that is always available
//! - an SSE backend on x86_64
//!
//! Every operation can be called with an explicit backend (e.g. `a.simd_add::<Scalar>(b)`), which is what the tests use to check that
//! both backends agree. The operator impls always go through [`DefBackend`].

#![allow(non_camel_case_types)]

mod backend;
pub use backend::*;

mod float;
pub use float::*;

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "x86_64", target_feature = "sse"))] {
        /// Backend used by the operator impls
        pub type DefBackend = Sse;
    } else {
        /// Backend used by the operator impls
        pub type DefBackend = Scalar;
    }
}

/// Create a shuffle mask, selecting lane `x`, `y`, `z` and `w` for the respective output lanes
///
/// The layout matches the immediate of `shufps`, so the same mask can be passed to both backends.
pub const fn shuffle_mask(x: u32, y: u32, z: u32, w: u32) -> i32 {
    (x | (y << 2) | (z << 4) | (w << 6)) as i32
}
