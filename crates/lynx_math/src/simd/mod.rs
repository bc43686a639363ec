//! Implementation of the math types on top of [`f32x4`] registers

mod vec3;
pub use vec3::*;

mod quat;
pub use quat::*;

mod mat4;
pub use mat4::*;

use lynx_simd::{f32x4, shuffle_mask};

use crate::MathBackend;

/// Backend storing every type in 16 byte aligned 4 lane registers
#[derive(Clone, Copy, Debug)]
pub struct SimdBackend;

impl MathBackend for SimdBackend {
    const NAME : &'static str = "simd";

    type Vector3    = SimdVector3;
    type Quaternion = SimdQuaternion;
    type Matrix4    = SimdMatrix4;
}

/// Dot product of the first 3 lanes
#[inline]
fn dot3(a: f32x4, b: f32x4) -> f32 {
    (a * b).with_w(0.0).hsum()
}

/// Cross product of the first 3 lanes, the last lane is 0
#[inline]
fn cross3(a: f32x4, b: f32x4) -> f32x4 {
    let a_yzx = a.shuffle::<{ shuffle_mask(1, 2, 0, 3) }>();
    let a_zxy = a.shuffle::<{ shuffle_mask(2, 0, 1, 3) }>();
    let b_yzx = b.shuffle::<{ shuffle_mask(1, 2, 0, 3) }>();
    let b_zxy = b.shuffle::<{ shuffle_mask(2, 0, 1, 3) }>();
    a_yzx * b_zxy - a_zxy * b_yzx
}
