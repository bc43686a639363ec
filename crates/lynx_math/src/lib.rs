//! 3D math kernel of the lynx engine: vectors, quaternions and 4x4 matrices
//!
//! Every type exists twice, once on plain `f32` arithmetic ([`scalar`]) and once on 4 lane registers ([`simd`]).
//! Both implementations are interchangeable: they implement the same traits ([`Vector3Ops`], [`QuaternionOps`] and [`Matrix4Ops`]),
//! grouped per family by [`MathBackend`], and are expected to agree up to floating point rounding.
//!
//! The [`Vector3`], [`Quaternion`] and [`Matrix4`] aliases bind to one of the families at compile time:
//! - with the `simd` feature (default): [`simd::SimdBackend`]
//! - without it: [`scalar::ScalarBackend`]
//!
//! Conventions:
//! - matrices are row-major and transform column vectors, so the translation lives in the last column
//! - `a.multiply(&b)` (or `a * b`) applies `b` first when transforming a point
//! - `q.multiply(&r)` on quaternions rotates by `q` first and by `r` second

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod backend;
pub use backend::*;

pub mod scalar;
pub mod simd;

cfg_if::cfg_if! {
    if #[cfg(feature = "simd")] {
        /// Math backend selected at compile time
        pub type DefaultBackend = simd::SimdBackend;
    } else {
        /// Math backend selected at compile time
        pub type DefaultBackend = scalar::ScalarBackend;
    }
}

/// 3D vector of the default backend
pub type Vector3 = <DefaultBackend as MathBackend>::Vector3;
/// Quaternion of the default backend
pub type Quaternion = <DefaultBackend as MathBackend>::Quaternion;
/// 4x4 matrix of the default backend
pub type Matrix4 = <DefaultBackend as MathBackend>::Matrix4;

/// Everything needed to use the default math types, including the traits carrying their methods
pub mod prelude {
    pub use crate::{
        ApproxEq,
        MathConsts,
        MathBackend,
        Vector3Ops,
        QuaternionOps,
        Matrix4Ops,
        DefaultBackend,
        Vector3,
        Quaternion,
        Matrix4,
    };
}
