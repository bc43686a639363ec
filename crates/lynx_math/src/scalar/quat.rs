use core::fmt::Display;

use crate::{*, numeric::slice_close_to};
use super::*;

/// Quaternion using plain `f32` arithmetic
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScalarQuaternion {
    pub(crate) x : f32,
    pub(crate) y : f32,
    pub(crate) z : f32,
    pub(crate) s : f32,
}

impl ScalarQuaternion {
    fn scaled(&self, scale: f32) -> Self {
        Self { x: self.x * scale, y: self.y * scale, z: self.z * scale, s: self.s * scale }
    }

    fn added(&self, rhs: &Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z, s: self.s + rhs.s }
    }

    fn dot(&self, rhs: &Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.s * rhs.s
    }
}

impl QuaternionOps<ScalarBackend> for ScalarQuaternion {
    const IDENTITY : Self = Self { x: 0.0, y: 0.0, z: 0.0, s: 1.0 };

    #[inline]
    fn new(x: f32, y: f32, z: f32, s: f32) -> Self {
        Self { x, y, z, s }
    }

    fn from_axis_angle(axis: &ScalarVector3, angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self { x: axis.x() * sin, y: axis.y() * sin, z: axis.z() * sin, s: cos }
    }

    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32, s: f32) {
        *self = Self { x, y, z, s };
    }

    #[inline] fn vector_x(&self) -> f32 { self.x }
    #[inline] fn vector_y(&self) -> f32 { self.y }
    #[inline] fn vector_z(&self) -> f32 { self.z }
    #[inline] fn scalar(&self) -> f32 { self.s }

    fn multiply(&mut self, rhs: &Self) {
        let q = ScalarVector3::new(self.x, self.y, self.z);
        let p = ScalarVector3::new(rhs.x, rhs.y, rhs.z);

        let v = q * rhs.s + p * self.s + ScalarVector3::cross(&p, &q);
        let s = rhs.s * self.s - p.dot(&q);
        *self = Self { x: v.x(), y: v.y(), z: v.z(), s };
    }

    fn conjugate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    #[inline]
    fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    fn normalize(&mut self) {
        let inv_len = 1.0 / self.length();
        *self = self.scaled(inv_len);
    }

    fn lerp(a: &Self, b: &Self, f: f32) -> Self {
        b.scaled(f).added(&a.scaled(1.0 - f)).normalized()
    }

    fn slerp(a: &Self, b: &Self, f: f32) -> Self {
        let mut cos = a.dot(b);
        let mut b = *b;
        if cos < 0.0 {
            b = b.scaled(-1.0);
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
        a.scaled(fa).added(&b.scaled(fb))
    }

    fn blend(a: &Self, b: &Self, c: &Self, d: &Self, fa: f32, fb: f32, fc: f32) -> Self {
        let fd = 1.0 - fa - fb - fc;
        a.scaled(fa)
            .added(&b.scaled(fb))
            .added(&c.scaled(fc))
            .added(&d.scaled(fd))
            .normalized()
    }
}

impl Default for ScalarQuaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ApproxEq for ScalarQuaternion {
    type Epsilon = f32;

    const DEFAULT_EPSILON : f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        slice_close_to(&self.to_array(), &rhs.to_array(), epsilon)
    }
}

impl Display for ScalarQuaternion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {}; {})", self.x, self.y, self.z, self.s))
    }
}
