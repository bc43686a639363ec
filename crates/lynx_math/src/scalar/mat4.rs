use core::{
    fmt::Display,
    ops::*,
};

use crate::{*, numeric::slice_close_to};
use super::*;

/// Row-major 4x4 matrix using plain `f32` arithmetic
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScalarMatrix4 {
    pub(crate) m : [[f32; 4]; 4],
}

impl ScalarMatrix4 {
    /// Build the 16 cofactors of the transposed matrix, used by the inverse
    ///
    /// Cofactors are computed in pairs of 2x2 determinants, first for the upper 8 elements, then for the lower 8 elements.
    fn cofactors(src: &[f32; 16]) -> [f32; 16] {
        let mut dst = [0f32; 16];

        let tmp = [
            src[10] * src[15],
            src[11] * src[14],
            src[9]  * src[15],
            src[11] * src[13],
            src[9]  * src[14],
            src[10] * src[13],
            src[8]  * src[15],
            src[11] * src[12],
            src[8]  * src[14],
            src[10] * src[12],
            src[8]  * src[13],
            src[9]  * src[12],
        ];

        dst[0]  = tmp[0] * src[5] + tmp[3] * src[6] + tmp[4]  * src[7];
        dst[0] -= tmp[1] * src[5] + tmp[2] * src[6] + tmp[5]  * src[7];
        dst[1]  = tmp[1] * src[4] + tmp[6] * src[6] + tmp[9]  * src[7];
        dst[1] -= tmp[0] * src[4] + tmp[7] * src[6] + tmp[8]  * src[7];
        dst[2]  = tmp[2] * src[4] + tmp[7] * src[5] + tmp[10] * src[7];
        dst[2] -= tmp[3] * src[4] + tmp[6] * src[5] + tmp[11] * src[7];
        dst[3]  = tmp[5] * src[4] + tmp[8] * src[5] + tmp[11] * src[6];
        dst[3] -= tmp[4] * src[4] + tmp[9] * src[5] + tmp[10] * src[6];
        dst[4]  = tmp[1] * src[1] + tmp[2] * src[2] + tmp[5]  * src[3];
        dst[4] -= tmp[0] * src[1] + tmp[3] * src[2] + tmp[4]  * src[3];
        dst[5]  = tmp[0] * src[0] + tmp[7] * src[2] + tmp[8]  * src[3];
        dst[5] -= tmp[1] * src[0] + tmp[6] * src[2] + tmp[9]  * src[3];
        dst[6]  = tmp[3] * src[0] + tmp[6] * src[1] + tmp[11] * src[3];
        dst[6] -= tmp[2] * src[0] + tmp[7] * src[1] + tmp[10] * src[3];
        dst[7]  = tmp[4] * src[0] + tmp[9] * src[1] + tmp[10] * src[2];
        dst[7] -= tmp[5] * src[0] + tmp[8] * src[1] + tmp[11] * src[2];

        let tmp = [
            src[2] * src[7],
            src[3] * src[6],
            src[1] * src[7],
            src[3] * src[5],
            src[1] * src[6],
            src[2] * src[5],
            src[0] * src[7],
            src[3] * src[4],
            src[0] * src[6],
            src[2] * src[4],
            src[0] * src[5],
            src[1] * src[4],
        ];

        dst[8]   = tmp[0]  * src[13] + tmp[3]  * src[14] + tmp[4]  * src[15];
        dst[8]  -= tmp[1]  * src[13] + tmp[2]  * src[14] + tmp[5]  * src[15];
        dst[9]   = tmp[1]  * src[12] + tmp[6]  * src[14] + tmp[9]  * src[15];
        dst[9]  -= tmp[0]  * src[12] + tmp[7]  * src[14] + tmp[8]  * src[15];
        dst[10]  = tmp[2]  * src[12] + tmp[7]  * src[13] + tmp[10] * src[15];
        dst[10] -= tmp[3]  * src[12] + tmp[6]  * src[13] + tmp[11] * src[15];
        dst[11]  = tmp[5]  * src[12] + tmp[8]  * src[13] + tmp[11] * src[14];
        dst[11] -= tmp[4]  * src[12] + tmp[9]  * src[13] + tmp[10] * src[14];
        dst[12]  = tmp[2]  * src[10] + tmp[5]  * src[11] + tmp[1]  * src[9];
        dst[12] -= tmp[4]  * src[11] + tmp[0]  * src[9]  + tmp[3]  * src[10];
        dst[13]  = tmp[8]  * src[11] + tmp[0]  * src[8]  + tmp[7]  * src[10];
        dst[13] -= tmp[6]  * src[10] + tmp[9]  * src[11] + tmp[1]  * src[8];
        dst[14]  = tmp[6]  * src[9]  + tmp[11] * src[11] + tmp[3]  * src[8];
        dst[14] -= tmp[10] * src[11] + tmp[2]  * src[8]  + tmp[7]  * src[9];
        dst[15]  = tmp[10] * src[10] + tmp[4]  * src[8]  + tmp[9]  * src[9];
        dst[15] -= tmp[8]  * src[9]  + tmp[11] * src[10] + tmp[5]  * src[8];

        dst
    }

    fn zip_with(&mut self, rhs: &Self, f: impl Fn(f32, f32) -> f32) {
        for (row, rhs_row) in self.m.iter_mut().zip(&rhs.m) {
            for (elem, rhs_elem) in row.iter_mut().zip(rhs_row) {
                *elem = f(*elem, *rhs_elem);
            }
        }
    }
}

impl Matrix4Ops<ScalarBackend> for ScalarMatrix4 {
    const IDENTITY : Self = Self { m: [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ] };

    #[inline]
    fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    fn create_translation(translation: &ScalarVector3) -> Self {
        let mut mat = Self::IDENTITY;
        mat.m[0][3] = translation.x();
        mat.m[1][3] = translation.y();
        mat.m[2][3] = translation.z();
        mat
    }

    fn create_scale(scale: f32) -> Self {
        let mut mat = Self::IDENTITY;
        mat.m[0][0] = scale;
        mat.m[1][1] = scale;
        mat.m[2][2] = scale;
        mat
    }

    fn create_rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { m: [
            [1.0, 0.0,  0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin,  cos, 0.0],
            [0.0, 0.0,  0.0, 1.0],
        ] }
    }

    fn create_rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { m: [
            [ cos, 0.0, sin, 0.0],
            [ 0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [ 0.0, 0.0, 0.0, 1.0],
        ] }
    }

    fn create_rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { m: [
            [cos, -sin, 0.0, 0.0],
            [sin,  cos, 0.0, 0.0],
            [0.0,  0.0, 1.0, 0.0],
            [0.0,  0.0, 0.0, 1.0],
        ] }
    }

    fn from_quaternion(quat: &ScalarQuaternion) -> Self {
        let ScalarQuaternion { x, y, z, s: w } = *quat;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let xw = x * w;
        let yw = y * w;
        let zw = z * w;

        Self { m: [
            [1.0 - 2.0 * yy - 2.0 * zz,       2.0 * xy - 2.0 * zw,       2.0 * xz + 2.0 * yw, 0.0],
            [      2.0 * xy + 2.0 * zw, 1.0 - 2.0 * xx - 2.0 * zz,       2.0 * yz - 2.0 * xw, 0.0],
            [      2.0 * xz - 2.0 * yw,       2.0 * yz + 2.0 * xw, 1.0 - 2.0 * xx - 2.0 * yy, 0.0],
            [                      0.0,                       0.0,                       0.0, 1.0],
        ] }
    }

    fn create_look_at(eye: &ScalarVector3, at: &ScalarVector3, up: &ScalarVector3) -> Self {
        let front = (*at - *eye).normalized();
        let left = ScalarVector3::cross(up, &front).normalized();
        let new_up = ScalarVector3::cross(&front, &left).normalized();

        Self { m: [
            [left.x(),   left.y(),   left.z(),   -left.dot(eye)],
            [new_up.x(), new_up.y(), new_up.z(), -new_up.dot(eye)],
            [front.x(),  front.y(),  front.z(),  -front.dot(eye)],
            [0.0,        0.0,        0.0,        1.0],
        ] }
    }

    fn create_perspective_fov(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        // cot(x) == tan(pi/2 - x)
        let y_scale = (f32::HALF_PI - fov_y * 0.5).tan();
        let x_scale = y_scale / aspect_ratio;
        let depth = far / (far - near);

        Self { m: [
            [x_scale, 0.0,     0.0,    0.0],
            [0.0,     y_scale, 0.0,    0.0],
            [0.0,     0.0,     depth, -near * depth],
            [0.0,     0.0,     1.0,    0.0],
        ] }
    }

    fn multiply(&mut self, rhs: &Self) {
        let a = self.m;
        let b = &rhs.m;
        for (row, a_row) in self.m.iter_mut().zip(&a) {
            for (col, elem) in row.iter_mut().enumerate() {
                *elem = a_row[0] * b[0][col] + a_row[1] * b[1][col] + a_row[2] * b[2][col] + a_row[3] * b[3][col];
            }
        }
    }

    fn transpose(&mut self) {
        for row in 0..4 {
            for col in (row + 1)..4 {
                let tmp = self.m[row][col];
                self.m[row][col] = self.m[col][row];
                self.m[col][row] = tmp;
            }
        }
    }

    fn invert(&mut self) {
        let mut src = [0f32; 16];
        for (row, elems) in self.m.iter().enumerate() {
            for (col, elem) in elems.iter().enumerate() {
                src[col * 4 + row] = *elem;
            }
        }

        let dst = Self::cofactors(&src);
        let det = src[0] * dst[0] + src[1] * dst[1] + src[2] * dst[2] + src[3] * dst[3];
        let inv_det = 1.0 / det;

        for (row, elems) in self.m.iter_mut().enumerate() {
            for (col, elem) in elems.iter_mut().enumerate() {
                *elem = dst[row * 4 + col] * inv_det;
            }
        }
    }

    fn lerp(a: &Self, b: &Self, f: f32) -> Self {
        let mut res = *b;
        res.zip_with(a, |b, a| b * f + (1.0 - f) * a);
        res
    }

    #[inline]
    fn to_native(&self) -> &[[f32; 4]; 4] {
        &self.m
    }

    #[inline]
    fn to_native_mut(&mut self) -> &mut [[f32; 4]; 4] {
        &mut self.m
    }
}

impl Default for ScalarMatrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ApproxEq for ScalarMatrix4 {
    type Epsilon = f32;

    const DEFAULT_EPSILON : f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.m.iter().zip(&rhs.m).all(|(lhs, rhs)| slice_close_to(lhs, rhs, epsilon))
    }
}

impl Mul for ScalarMatrix4 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self.multiply(&rhs);
        self
    }
}

impl MulAssign for ScalarMatrix4 {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl AddAssign for ScalarMatrix4 {
    fn add_assign(&mut self, rhs: Self) {
        self.zip_with(&rhs, |a, b| a + b);
    }
}

impl SubAssign for ScalarMatrix4 {
    fn sub_assign(&mut self, rhs: Self) {
        self.zip_with(&rhs, |a, b| a - b);
    }
}

impl Display for ScalarMatrix4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let m = &self.m;
        f.write_fmt(format_args!("[[{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}]]",
            m[0][0], m[0][1], m[0][2], m[0][3],
            m[1][0], m[1][1], m[1][2], m[1][3],
            m[2][0], m[2][1], m[2][2], m[2][3],
            m[3][0], m[3][1], m[3][2], m[3][3],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cofactor_inverse_of_scale_translation() {
        let mut mat = ScalarMatrix4::create_scale(2.0);
        mat.multiply(&ScalarMatrix4::create_translation(&ScalarVector3::new(1.0, -2.0, 4.0)));
        mat.invert();

        let expected = ScalarMatrix4::from_rows([
            [0.5, 0.0, 0.0, -1.0],
            [0.0, 0.5, 0.0,  2.0],
            [0.0, 0.0, 0.5, -4.0],
            [0.0, 0.0, 0.0,  1.0],
        ]);
        assert!(mat.is_close_to(expected, 1e-6));
    }
}
