use core::{
    fmt::Display,
    ops::*,
};

use crate::{*, numeric::slice_close_to};
use super::*;

/// 3D vector using plain `f32` arithmetic
///
/// `w` is only used while transforming, it is set to 1 (point) or 0 (direction) right before the matrix multiply.
#[derive(Clone, Copy, Debug)]
pub struct ScalarVector3 {
    x : f32,
    y : f32,
    z : f32,
    w : f32,
}

impl ScalarVector3 {
    const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    fn transform_with_w(&mut self, mat: &ScalarMatrix4, w: f32) {
        self.w = w;
        let [x, y, z, w] = [self.x, self.y, self.z, self.w];
        let m = &mat.m;
        self.x = m[0][0] * x + m[0][1] * y + m[0][2] * z + m[0][3] * w;
        self.y = m[1][0] * x + m[1][1] * y + m[1][2] * z + m[1][3] * w;
        self.z = m[2][0] * x + m[2][1] * y + m[2][2] * z + m[2][3] * w;
        self.w = m[3][0] * x + m[3][1] * y + m[3][2] * z + m[3][3] * w;
    }
}

impl Vector3Ops<ScalarBackend> for ScalarVector3 {
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

    #[inline] fn x(&self) -> f32 { self.x }
    #[inline] fn y(&self) -> f32 { self.y }
    #[inline] fn z(&self) -> f32 { self.z }

    #[inline] fn set_x(&mut self, x: f32) { self.x = x; }
    #[inline] fn set_y(&mut self, y: f32) { self.y = y; }
    #[inline] fn set_z(&mut self, z: f32) { self.z = z; }

    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    #[inline]
    fn dot(&self, rhs: &Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    fn multiply(&mut self, scale: f32) {
        self.x *= scale;
        self.y *= scale;
        self.z *= scale;
    }

    #[inline]
    fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    fn normalize(&mut self) {
        let inv_len = 1.0 / self.length_squared().sqrt();
        self.multiply(inv_len);
    }

    fn cross(lhs: &Self, rhs: &Self) -> Self {
        Self::from_xyz(
            lhs.y * rhs.z - lhs.z * rhs.y,
            lhs.z * rhs.x - lhs.x * rhs.z,
            lhs.x * rhs.y - lhs.y * rhs.x,
        )
    }

    fn lerp(a: &Self, b: &Self, f: f32) -> Self {
        *b * f + *a * (1.0 - f)
    }

    fn blend(a: &Self, b: &Self, c: &Self, d: &Self, fa: f32, fb: f32, fc: f32) -> Self {
        let fd = 1.0 - fa - fb - fc;
        *a * fa + *b * fb + *c * fc + *d * fd
    }

    fn transform(&mut self, mat: &ScalarMatrix4) {
        self.transform_with_w(mat, 1.0);
    }

    fn transform_as_vector(&mut self, mat: &ScalarMatrix4) {
        self.transform_with_w(mat, 0.0);
    }

    fn rotate(&mut self, quat: &ScalarQuaternion) {
        let qv = Self::from_xyz(quat.x, quat.y, quat.z);
        let inner = Self::cross(&qv, self) + *self * quat.s;
        *self += Self::cross(&qv, &inner) * 2.0;
    }
}

impl Default for ScalarVector3 {
    fn default() -> Self {
        Self::ZERO
    }
}

// `w` is internal state and does not take part in comparisons
impl PartialEq for ScalarVector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl ApproxEq for ScalarVector3 {
    type Epsilon = f32;

    const DEFAULT_EPSILON : f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        slice_close_to(&self.to_array(), &rhs.to_array(), epsilon)
    }
}

impl Add for ScalarVector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_xyz(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for ScalarVector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_xyz(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for ScalarVector3 {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self {
        self.multiply(rhs);
        self
    }
}

impl Neg for ScalarVector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_xyz(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for ScalarVector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ScalarVector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for ScalarVector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.multiply(rhs);
    }
}

impl Display for ScalarVector3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_keeps_internal_w() {
        let mut point = ScalarVector3::new(1.0, 2.0, 3.0);
        point.transform(&ScalarMatrix4::create_perspective_fov(f32::QUARTER_PI, 1.0, 1.0, 100.0));

        // projection moves z into w
        assert_eq!(point.w, 3.0);
        assert_eq!(point, ScalarVector3::new(point.x, point.y, point.z));
    }
}
