use core::fmt::Display;
use lynx_simd::f32x4;

use crate::{*, numeric::slice_close_to};
use super::*;

/// Quaternion stored in a 4 lane register as `(x, y, z, s)`
#[repr(C, align(16))]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SimdQuaternion {
    pub(crate) v : f32x4,
}

impl SimdQuaternion {
    #[inline]
    const fn from_register(v: f32x4) -> Self {
        Self { v }
    }
}

impl QuaternionOps<SimdBackend> for SimdQuaternion {
    const IDENTITY : Self = Self::from_register(f32x4::new(0.0, 0.0, 0.0, 1.0));

    #[inline]
    fn new(x: f32, y: f32, z: f32, s: f32) -> Self {
        Self::from_register(f32x4::new(x, y, z, s))
    }

    fn from_axis_angle(axis: &SimdVector3, angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::from_register((axis.v * sin).with_w(cos))
    }

    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32, s: f32) {
        self.v = f32x4::new(x, y, z, s);
    }

    #[inline] fn vector_x(&self) -> f32 { self.v.x() }
    #[inline] fn vector_y(&self) -> f32 { self.v.y() }
    #[inline] fn vector_z(&self) -> f32 { self.v.z() }
    #[inline] fn scalar(&self) -> f32 { self.v.w() }

    fn multiply(&mut self, rhs: &Self) {
        let q = self.v;
        let p = rhs.v;

        let v = q * p.w() + p * q.w() + cross3(p, q);
        let s = p.w() * q.w() - dot3(p, q);
        self.v = v.with_w(s);
    }

    fn conjugate(&mut self) {
        self.v = (-self.v).with_w(self.v.w());
    }

    #[inline]
    fn length_squared(&self) -> f32 {
        self.v.dot(self.v)
    }

    fn normalize(&mut self) {
        let inv_len = 1.0 / self.length();
        self.v *= inv_len;
    }

    fn lerp(a: &Self, b: &Self, f: f32) -> Self {
        Self::from_register(b.v * f + a.v * (1.0 - f)).normalized()
    }

    fn slerp(a: &Self, b: &Self, f: f32) -> Self {
        let mut cos = a.v.dot(b.v);
        let mut b = *b;
        if cos < 0.0 {
            b.v = -b.v;
            cos = -cos;
        }

        // Nearly parallel, fall back to a normalized lerp to avoid dividing by sin(~0)
        if cos > 0.9995 {
            return Self::lerp(a, &b, f);
        }

        let theta = cos.acos();
        let inv_sin = 1.0 / theta.sin();
        let fa = ((1.0 - f) * theta).sin() * inv_sin;
        let fb = (f * theta).sin() * inv_sin;
        Self::from_register(a.v * fa + b.v * fb)
    }

    fn blend(a: &Self, b: &Self, c: &Self, d: &Self, fa: f32, fb: f32, fc: f32) -> Self {
        let fd = 1.0 - fa - fb - fc;
        Self::from_register(a.v * fa + b.v * fb + c.v * fc + d.v * fd).normalized()
    }
}

impl Default for SimdQuaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ApproxEq for SimdQuaternion {
    type Epsilon = f32;

    const DEFAULT_EPSILON : f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        slice_close_to(self.v.as_array(), rhs.v.as_array(), epsilon)
    }
}

impl Display for SimdQuaternion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {}; {})", self.v.x(), self.v.y(), self.v.z(), self.v.w()))
    }
}
