use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg},
};

use crate::ApproxEq;

/// A family of math types sharing one implementation strategy
///
/// Both families implement the same operations and produce the same results up to floating point rounding, so code written against
/// `B: MathBackend` can run on either of them.
pub trait MathBackend : 'static + Sized {
    /// Name of the backend, used for logging
    const NAME : &'static str;

    type Vector3    : Vector3Ops<Self>;
    type Quaternion : QuaternionOps<Self>;
    type Matrix4    : Matrix4Ops<Self>;
}

/// 3 component vector with a hidden homogeneous `w`
///
/// In-place addition, subtraction and scaling are provided by the `+=`, `-=` and `*=` operators.
pub trait Vector3Ops<B: MathBackend> :
    Copy + Debug + Display + Default + PartialEq +
    Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> + Neg<Output = Self> +
    AddAssign + SubAssign + MulAssign<f32> +
    ApproxEq<Epsilon = f32>
{
    const ZERO            : Self;
    const UNIT_X          : Self;
    const UNIT_Y          : Self;
    const UNIT_Z          : Self;
    const NEGATIVE_UNIT_X : Self;
    const NEGATIVE_UNIT_Y : Self;
    const NEGATIVE_UNIT_Z : Self;

    /// Create a new vector
    fn new(x: f32, y: f32, z: f32) -> Self;

    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn z(&self) -> f32;

    fn set_x(&mut self, x: f32);
    fn set_y(&mut self, y: f32);
    fn set_z(&mut self, z: f32);

    /// Set all components
    fn set(&mut self, x: f32, y: f32, z: f32);

    /// Get the components as an array
    fn to_array(&self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Dot product
    fn dot(&self, rhs: &Self) -> f32;

    /// Scale the vector in place
    fn multiply(&mut self, scale: f32);

    /// Squared length of the vector
    fn length_squared(&self) -> f32;

    /// Length of the vector
    fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize the vector in place
    ///
    /// The vector must not have a length of 0, otherwise the components become NaN or infinite.
    fn normalize(&mut self);

    /// Get a normalized copy of the vector
    #[must_use]
    fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Right handed cross product
    fn cross(lhs: &Self, rhs: &Self) -> Self;

    /// Linearly interpolate between 2 vectors: `a * (1 - f) + b * f`
    ///
    /// `f` is not clamped, so values outside of `[0, 1]` extrapolate.
    fn lerp(a: &Self, b: &Self, f: f32) -> Self;

    /// Weighted blend of 4 vectors, `d` is weighted by `1 - fa - fb - fc`
    fn blend(a: &Self, b: &Self, c: &Self, d: &Self, fa: f32, fb: f32, fc: f32) -> Self;

    /// Transform the vector as a point (`w = 1`)
    fn transform(&mut self, mat: &B::Matrix4);

    /// Transform the vector as a direction (`w = 0`), ignoring the translation of the matrix
    fn transform_as_vector(&mut self, mat: &B::Matrix4);

    /// Rotate the vector by a quaternion
    fn rotate(&mut self, quat: &B::Quaternion);
}

/// Rotation quaternion, stored as an imaginary vector part and a scalar part
pub trait QuaternionOps<B: MathBackend> :
    Copy + Debug + Display + Default + PartialEq +
    ApproxEq<Epsilon = f32>
{
    const IDENTITY : Self;

    /// Create a quaternion from its raw components, the result is not normalized
    fn new(x: f32, y: f32, z: f32, s: f32) -> Self;

    /// Create a rotation of `angle` radians around `axis`
    ///
    /// `axis` is expected to be normalized, the result is not normalized.
    fn from_axis_angle(axis: &B::Vector3, angle: f32) -> Self;

    /// Set the raw components
    fn set(&mut self, x: f32, y: f32, z: f32, s: f32);

    fn vector_x(&self) -> f32;
    fn vector_y(&self) -> f32;
    fn vector_z(&self) -> f32;
    fn scalar(&self) -> f32;

    /// Get the components as an array, in the order `[x, y, z, s]`
    fn to_array(&self) -> [f32; 4] {
        [self.vector_x(), self.vector_y(), self.vector_z(), self.scalar()]
    }

    /// Concatenate a rotation, the result rotates by `self` first and by `rhs` second
    fn multiply(&mut self, rhs: &Self);

    /// Negate the imaginary part
    fn conjugate(&mut self);

    /// Get a conjugated copy of the quaternion
    #[must_use]
    fn conjugated(mut self) -> Self {
        self.conjugate();
        self
    }

    /// Squared length of all 4 components
    fn length_squared(&self) -> f32;

    /// Length of all 4 components
    fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize the quaternion in place
    fn normalize(&mut self);

    /// Get a normalized copy of the quaternion
    #[must_use]
    fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Normalized linear interpolation
    fn lerp(a: &Self, b: &Self, f: f32) -> Self;

    /// Spherical linear interpolation along the shortest arc
    fn slerp(a: &Self, b: &Self, f: f32) -> Self;

    /// Weighted blend of 4 quaternions followed by a normalize, `d` is weighted by `1 - fa - fb - fc`
    fn blend(a: &Self, b: &Self, c: &Self, d: &Self, fa: f32, fb: f32, fc: f32) -> Self;
}

/// Row-major 4x4 matrix, transforming column vectors
///
/// The translation lives in the last column. In-place addition and subtraction are provided by the `+=` and `-=` operators,
/// `a * b` is the same as `a.multiply(&b)`.
pub trait Matrix4Ops<B: MathBackend> :
    Copy + Debug + Display + Default + PartialEq +
    Mul<Output = Self> + MulAssign + AddAssign + SubAssign +
    ApproxEq<Epsilon = f32>
{
    const IDENTITY : Self;

    /// Create a matrix from its rows
    fn from_rows(rows: [[f32; 4]; 4]) -> Self;

    /// Create a matrix from 16 elements in row-major order
    fn from_array(arr: [f32; 16]) -> Self {
        let mut rows = [[0f32; 4]; 4];
        for (row, chunk) in rows.iter_mut().zip(arr.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Self::from_rows(rows)
    }

    /// Overwrite all rows
    fn set(&mut self, rows: [[f32; 4]; 4]) {
        *self = Self::from_rows(rows);
    }

    /// Get the element at `row` and `column`
    fn get(&self, row: usize, column: usize) -> f32 {
        self.to_native()[row][column]
    }

    /// Set the element at `row` and `column`
    fn set_element(&mut self, row: usize, column: usize, val: f32) {
        self.to_native_mut()[row][column] = val;
    }

    /// Create a translation matrix
    fn create_translation(translation: &B::Vector3) -> Self;

    /// Create a uniform scale matrix
    fn create_scale(scale: f32) -> Self;

    /// Create a rotation of `angle` radians around the x-axis
    fn create_rotation_x(angle: f32) -> Self;

    /// Create a rotation of `angle` radians around the y-axis
    fn create_rotation_y(angle: f32) -> Self;

    /// Create a rotation of `angle` radians around the z-axis
    fn create_rotation_z(angle: f32) -> Self;

    /// Create a rotation matrix from a unit quaternion
    fn from_quaternion(quat: &B::Quaternion) -> Self;

    /// Create a view matrix looking from `eye` to `at`
    fn create_look_at(eye: &B::Vector3, at: &B::Vector3, up: &B::Vector3) -> Self;

    /// Create a perspective projection, with a vertical field of view in radians
    fn create_perspective_fov(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self;

    /// Multiply in place: `self = self * rhs`
    fn multiply(&mut self, rhs: &Self);

    /// Transpose in place
    fn transpose(&mut self);

    /// Invert in place
    ///
    /// The matrix is expected to be invertible, a singular matrix results in NaN or infinite elements.
    fn invert(&mut self);

    /// Get an inverted copy of the matrix
    #[must_use]
    fn inverted(mut self) -> Self {
        self.invert();
        self
    }

    /// Per element linear interpolation: `b * f + (1 - f) * a`
    fn lerp(a: &Self, b: &Self, f: f32) -> Self;

    /// Borrow the storage as rows of floats, e.g. to hand to a renderer
    fn to_native(&self) -> &[[f32; 4]; 4];

    /// Mutably borrow the storage as rows of floats
    fn to_native_mut(&mut self) -> &mut [[f32; 4]; 4];
}
