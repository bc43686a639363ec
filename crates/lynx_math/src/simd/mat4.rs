use core::{
    fmt::Display,
    ops::*,
};
use lynx_simd::{f32x4, shuffle_mask};
use static_assertions::{assert_eq_size, const_assert_eq};

use crate::{*, numeric::slice_close_to};
use super::*;

/// Row-major 4x4 matrix stored as 4 row registers
#[repr(C, align(16))]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SimdMatrix4 {
    pub(crate) rows : [f32x4; 4],
}

// `to_native` reinterprets the rows as `[[f32; 4]; 4]`
assert_eq_size!(SimdMatrix4, [[f32; 4]; 4]);
const_assert_eq!(core::mem::align_of::<SimdMatrix4>(), 16);

const SIGN_PNPN : f32x4 = f32x4::new( 1.0, -1.0,  1.0, -1.0);
const SIGN_NPNP : f32x4 = f32x4::new(-1.0,  1.0, -1.0,  1.0);

impl SimdMatrix4 {
    #[inline]
    const fn from_registers(rows: [f32x4; 4]) -> Self {
        Self { rows }
    }

    /// Pairs of 2x2 determinants: lanes 0 and 1 are for rows 2 and 3, lanes 2 and 3 are for rows 0 and 1
    #[inline]
    fn minor_pair<const I: usize, const J: usize>(lower: &[f32x4; 4], upper: &[f32x4; 4]) -> f32x4 {
        lower[I] * upper[J] - upper[I] * lower[J]
    }
}

impl Matrix4Ops<SimdBackend> for SimdMatrix4 {
    const IDENTITY : Self = Self::from_registers([
        f32x4::new(1.0, 0.0, 0.0, 0.0),
        f32x4::new(0.0, 1.0, 0.0, 0.0),
        f32x4::new(0.0, 0.0, 1.0, 0.0),
        f32x4::new(0.0, 0.0, 0.0, 1.0),
    ]);

    #[inline]
    fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self::from_registers(rows.map(f32x4::from_array))
    }

    fn create_translation(translation: &SimdVector3) -> Self {
        Self::from_registers([
            f32x4::new(1.0, 0.0, 0.0, translation.x()),
            f32x4::new(0.0, 1.0, 0.0, translation.y()),
            f32x4::new(0.0, 0.0, 1.0, translation.z()),
            f32x4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    fn create_scale(scale: f32) -> Self {
        Self::from_registers([
            f32x4::new(scale, 0.0,   0.0,   0.0),
            f32x4::new(0.0,   scale, 0.0,   0.0),
            f32x4::new(0.0,   0.0,   scale, 0.0),
            f32x4::new(0.0,   0.0,   0.0,   1.0),
        ])
    }

    fn create_rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_registers([
            f32x4::new(1.0, 0.0,  0.0, 0.0),
            f32x4::new(0.0, cos, -sin, 0.0),
            f32x4::new(0.0, sin,  cos, 0.0),
            f32x4::new(0.0, 0.0,  0.0, 1.0),
        ])
    }

    fn create_rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_registers([
            f32x4::new( cos, 0.0, sin, 0.0),
            f32x4::new( 0.0, 1.0, 0.0, 0.0),
            f32x4::new(-sin, 0.0, cos, 0.0),
            f32x4::new( 0.0, 0.0, 0.0, 1.0),
        ])
    }

    fn create_rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_registers([
            f32x4::new(cos, -sin, 0.0, 0.0),
            f32x4::new(sin,  cos, 0.0, 0.0),
            f32x4::new(0.0,  0.0, 1.0, 0.0),
            f32x4::new(0.0,  0.0, 0.0, 1.0),
        ])
    }

    fn from_quaternion(quat: &SimdQuaternion) -> Self {
        let [x, y, z, w] = quat.v.to_array();

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let xw = x * w;
        let yw = y * w;
        let zw = z * w;

        Self::from_registers([
            f32x4::new(1.0 - 2.0 * yy - 2.0 * zz,       2.0 * xy - 2.0 * zw,       2.0 * xz + 2.0 * yw, 0.0),
            f32x4::new(      2.0 * xy + 2.0 * zw, 1.0 - 2.0 * xx - 2.0 * zz,       2.0 * yz - 2.0 * xw, 0.0),
            f32x4::new(      2.0 * xz - 2.0 * yw,       2.0 * yz + 2.0 * xw, 1.0 - 2.0 * xx - 2.0 * yy, 0.0),
            f32x4::new(                      0.0,                       0.0,                       0.0, 1.0),
        ])
    }

    fn create_look_at(eye: &SimdVector3, at: &SimdVector3, up: &SimdVector3) -> Self {
        let front = (*at - *eye).normalized();
        let left = SimdVector3::cross(up, &front).normalized();
        let new_up = SimdVector3::cross(&front, &left).normalized();

        Self::from_registers([
            left.v.with_w(-left.dot(eye)),
            new_up.v.with_w(-new_up.dot(eye)),
            front.v.with_w(-front.dot(eye)),
            f32x4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    fn create_perspective_fov(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        // cot(x) == tan(pi/2 - x)
        let y_scale = (f32::HALF_PI - fov_y * 0.5).tan();
        let x_scale = y_scale / aspect_ratio;
        let depth = far / (far - near);

        Self::from_registers([
            f32x4::new(x_scale, 0.0,     0.0,    0.0),
            f32x4::new(0.0,     y_scale, 0.0,    0.0),
            f32x4::new(0.0,     0.0,     depth, -near * depth),
            f32x4::new(0.0,     0.0,     1.0,    0.0),
        ])
    }

    fn multiply(&mut self, rhs: &Self) {
        let [b0, b1, b2, b3] = rhs.rows;
        for row in &mut self.rows {
            let a = *row;
            *row = b0 * a.x() + b1 * a.y() + b2 * a.z() + b3 * a.w();
        }
    }

    #[inline]
    fn transpose(&mut self) {
        self.rows = f32x4::transpose(self.rows);
    }

    fn invert(&mut self) {
        let [r0, r1, r2, r3] = self.rows;

        // lower[k] = (r2[k], r2[k], r0[k], r0[k]), upper[k] = (r3[k], r3[k], r1[k], r1[k])
        let lower = [
            r2.shuffle2::<{ shuffle_mask(0, 0, 0, 0) }>(r0),
            r2.shuffle2::<{ shuffle_mask(1, 1, 1, 1) }>(r0),
            r2.shuffle2::<{ shuffle_mask(2, 2, 2, 2) }>(r0),
            r2.shuffle2::<{ shuffle_mask(3, 3, 3, 3) }>(r0),
        ];
        let upper = [
            r3.shuffle2::<{ shuffle_mask(0, 0, 0, 0) }>(r1),
            r3.shuffle2::<{ shuffle_mask(1, 1, 1, 1) }>(r1),
            r3.shuffle2::<{ shuffle_mask(2, 2, 2, 2) }>(r1),
            r3.shuffle2::<{ shuffle_mask(3, 3, 3, 3) }>(r1),
        ];

        let f01 = Self::minor_pair::<0, 1>(&lower, &upper);
        let f02 = Self::minor_pair::<0, 2>(&lower, &upper);
        let f03 = Self::minor_pair::<0, 3>(&lower, &upper);
        let f12 = Self::minor_pair::<1, 2>(&lower, &upper);
        let f13 = Self::minor_pair::<1, 3>(&lower, &upper);
        let f23 = Self::minor_pair::<2, 3>(&lower, &upper);

        // Columns with the lanes ordered as (row 1, row 0, row 3, row 2)
        let [v0, v1, v2, v3] = f32x4::transpose(self.rows).map(|col| col.shuffle::<{ shuffle_mask(1, 0, 3, 2) }>());

        let adj = [
            (v1 * f23 - v2 * f13 + v3 * f12) * SIGN_PNPN,
            (v0 * f23 - v2 * f03 + v3 * f02) * SIGN_NPNP,
            (v0 * f13 - v1 * f03 + v3 * f01) * SIGN_PNPN,
            (v0 * f12 - v1 * f02 + v2 * f01) * SIGN_NPNP,
        ];

        // First column of the adjugate, dotted with the first row gives the determinant
        let col0 = adj[0].shuffle2::<{ shuffle_mask(0, 0, 0, 0) }>(adj[1])
            .shuffle2::<{ shuffle_mask(0, 2, 0, 2) }>(adj[2].shuffle2::<{ shuffle_mask(0, 0, 0, 0) }>(adj[3]));
        let det = r0.dot(col0);
        let inv_det = f32x4::splat(1.0 / det);

        self.rows = adj.map(|row| row * inv_det);
    }

    fn lerp(a: &Self, b: &Self, f: f32) -> Self {
        let fa = 1.0 - f;
        let mut rows = b.rows;
        for (row, a_row) in rows.iter_mut().zip(&a.rows) {
            *row = *row * f + *a_row * fa;
        }
        Self::from_registers(rows)
    }

    #[inline]
    fn to_native(&self) -> &[[f32; 4]; 4] {
        // SAFETY: `f32x4` is `repr(C)` over `[f32; 4]`, so the rows have the layout of `[[f32; 4]; 4]` with a stricter alignment
        unsafe { &*(&self.rows as *const [f32x4; 4] as *const [[f32; 4]; 4]) }
    }

    #[inline]
    fn to_native_mut(&mut self) -> &mut [[f32; 4]; 4] {
        // SAFETY: see `to_native`
        unsafe { &mut *(&mut self.rows as *mut [f32x4; 4] as *mut [[f32; 4]; 4]) }
    }
}

impl Default for SimdMatrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ApproxEq for SimdMatrix4 {
    type Epsilon = f32;

    const DEFAULT_EPSILON : f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.rows.iter().zip(&rhs.rows).all(|(lhs, rhs)| slice_close_to(lhs.as_array(), rhs.as_array(), epsilon))
    }
}

impl Mul for SimdMatrix4 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self.multiply(&rhs);
        self
    }
}

impl MulAssign for SimdMatrix4 {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl AddAssign for SimdMatrix4 {
    fn add_assign(&mut self, rhs: Self) {
        for (row, rhs_row) in self.rows.iter_mut().zip(rhs.rows) {
            *row += rhs_row;
        }
    }
}

impl SubAssign for SimdMatrix4 {
    fn sub_assign(&mut self, rhs: Self) {
        for (row, rhs_row) in self.rows.iter_mut().zip(rhs.rows) {
            *row -= rhs_row;
        }
    }
}

impl Display for SimdMatrix4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r0, r1, r2, r3] = &self.rows;
        f.write_fmt(format_args!("[{r0}, {r1}, {r2}, {r3}]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_view_shares_storage() {
        let mut mat = SimdMatrix4::create_translation(&SimdVector3::new(1.0, 2.0, 3.0));
        assert_eq!(mat.to_native()[1][3], 2.0);

        mat.to_native_mut()[3][0] = 5.0;
        assert_eq!(mat.rows[3].x(), 5.0);
        assert_eq!(mat.get(3, 0), 5.0);
    }

    #[test]
    fn adjugate_inverse_of_rotation_translation() {
        let mut mat = SimdMatrix4::create_rotation_z(0.5);
        mat.multiply(&SimdMatrix4::create_translation(&SimdVector3::new(3.0, -1.0, 2.0)));

        let mut product = mat;
        product.multiply(&mat.inverted());
        assert!(product.is_close_to(SimdMatrix4::IDENTITY, 1e-5));
    }
}
