use core::{
    fmt::Display,
    ops::*,
};
use lynx_simd::f32x4;

use crate::{*, numeric::slice_close_to};
use super::*;

/// 3D vector stored in a 4 lane register, the last lane is the homogeneous `w`
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug)]
pub struct SimdVector3 {
    pub(crate) v : f32x4,
}

impl SimdVector3 {
    const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self { v: f32x4::new(x, y, z, 0.0) }
    }

    #[inline]
    pub(crate) const fn from_register(v: f32x4) -> Self {
        Self { v }
    }

    fn transform_with_w(&mut self, mat: &SimdMatrix4, w: f32) {
        let v = self.v.with_w(w);
        let [c0, c1, c2, c3] = f32x4::transpose(mat.rows);
        self.v = c0 * v.x() + c1 * v.y() + c2 * v.z() + c3 * v.w();
    }
}

impl Vector3Ops<SimdBackend> for SimdVector3 {
    const ZERO            : Self = Self::from_xyz( 0.0,  0.0,  0.0);
    const UNIT_X          : Self = Self::from_xyz( 1.0,  0.0,  0.0);
    const UNIT_Y          : Self = Self::from_xyz( 0.0,  1.0,  0.0);
    const UNIT_Z          : Self = Self::from_xyz( 0.0,  0.0,  1.0);
    const NEGATIVE_UNIT_X : Self = Self::from_xyz(-1.0,  0.0,  0.0);
    const NEGATIVE_UNIT_Y : Self = Self::from_xyz( 0.0, -1.0,  0.0);
    const NEGATIVE_UNIT_Z : Self = Self::from_xyz( 0.0,  0.0, -1.0);

    #[inline]
    fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_xyz(x, y, z)
    }

    #[inline] fn x(&self) -> f32 { self.v.x() }
    #[inline] fn y(&self) -> f32 { self.v.y() }
    #[inline] fn z(&self) -> f32 { self.v.z() }

    #[inline] fn set_x(&mut self, x: f32) { self.v[0] = x; }
    #[inline] fn set_y(&mut self, y: f32) { self.v[1] = y; }
    #[inline] fn set_z(&mut self, z: f32) { self.v[2] = z; }

    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32) {
        self.v = f32x4::new(x, y, z, self.v.w());
    }

    #[inline]
    fn dot(&self, rhs: &Self) -> f32 {
        dot3(self.v, rhs.v)
    }

    #[inline]
    fn multiply(&mut self, scale: f32) {
        self.v *= scale;
    }

    #[inline]
    fn length_squared(&self) -> f32 {
        dot3(self.v, self.v)
    }

    fn normalize(&mut self) {
        let inv_len = 1.0 / self.length_squared().sqrt();
        self.v *= inv_len;
    }

    #[inline]
    fn cross(lhs: &Self, rhs: &Self) -> Self {
        Self::from_register(cross3(lhs.v, rhs.v))
    }

    fn lerp(a: &Self, b: &Self, f: f32) -> Self {
        Self::from_register(b.v * f + a.v * (1.0 - f))
    }

    fn blend(a: &Self, b: &Self, c: &Self, d: &Self, fa: f32, fb: f32, fc: f32) -> Self {
        let fd = 1.0 - fa - fb - fc;
        Self::from_register(a.v * fa + b.v * fb + c.v * fc + d.v * fd)
    }

    fn transform(&mut self, mat: &SimdMatrix4) {
        self.transform_with_w(mat, 1.0);
    }

    fn transform_as_vector(&mut self, mat: &SimdMatrix4) {
        self.transform_with_w(mat, 0.0);
    }

    fn rotate(&mut self, quat: &SimdQuaternion) {
        let qv = quat.v.with_w(0.0);
        let inner = cross3(qv, self.v) + self.v * quat.v.w();
        self.v += cross3(qv, inner) * 2.0;
    }
}

impl Default for SimdVector3 {
    fn default() -> Self {
        Self::ZERO
    }
}

// `w` is internal state and does not take part in comparisons
impl PartialEq for SimdVector3 {
    fn eq(&self, other: &Self) -> bool {
        self.v.with_w(0.0) == other.v.with_w(0.0)
    }
}

impl ApproxEq for SimdVector3 {
    type Epsilon = f32;

    const DEFAULT_EPSILON : f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        slice_close_to(&self.to_array(), &rhs.to_array(), epsilon)
    }
}

impl Add for SimdVector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_register(self.v + rhs.v)
    }
}

impl Sub for SimdVector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_register(self.v - rhs.v)
    }
}

impl Mul<f32> for SimdVector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::from_register(self.v * rhs)
    }
}

impl Neg for SimdVector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_register(-self.v)
    }
}

impl AddAssign for SimdVector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.v += rhs.v;
    }
}

impl SubAssign for SimdVector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.v -= rhs.v;
    }
}

impl MulAssign<f32> for SimdVector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.v *= rhs;
    }
}

impl Display for SimdVector3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x(), self.y(), self.z()))
    }
}
