use lynx_math::*;
use lynx_math::scalar::ScalarBackend;
use lynx_math::simd::SimdBackend;

const EPSILON : f32 = 1e-5;

#[track_caller]
fn assert_vec_close<B: MathBackend>(actual: B::Vector3, expected: [f32; 3]) {
    let expected_vec = B::Vector3::new(expected[0], expected[1], expected[2]);
    assert!(actual.is_close_to(expected_vec, EPSILON), "{} backend: expected {expected_vec}, got {actual}", B::NAME);
}

#[track_caller]
fn assert_mat_close<B: MathBackend>(actual: B::Matrix4, expected: B::Matrix4) {
    assert!(actual.is_close_to(expected, EPSILON), "{} backend: expected {expected}, got {actual}", B::NAME);
}

fn vector_products<B: MathBackend>() {
    let a = B::Vector3::new(3.0, 2.0, 5.0);
    let b = B::Vector3::new(4.0, 6.0, 1.0);
    assert_eq!(B::Vector3::cross(&a, &b).to_array(), [-28.0, 17.0, 10.0]);

    let c = B::Vector3::new(2.0, 4.0, 6.0);
    assert_eq!(c.dot(&c), 56.0);
    assert_eq!(c.length_squared(), 56.0);

    assert_vec_close::<B>(B::Vector3::cross(&B::Vector3::UNIT_X, &B::Vector3::UNIT_Y), [0.0, 0.0, 1.0]);
}

fn vector_normalize<B: MathBackend>() {
    let mut v = B::Vector3::new(0.0, 3.0, 4.0);
    assert_eq!(v.length(), 5.0);

    v.normalize();
    assert_vec_close::<B>(v, [0.0, 0.6, 0.8]);
    assert!(v.length().is_close_to(1.0, EPSILON));
}

fn vector_in_place_ops<B: MathBackend>() {
    let mut v = B::Vector3::new(1.0, 2.0, 3.0);
    v += B::Vector3::new(1.0, 1.0, 1.0);
    assert_eq!(v.to_array(), [2.0, 3.0, 4.0]);

    v -= B::Vector3::UNIT_Z;
    assert_eq!(v.to_array(), [2.0, 3.0, 3.0]);

    v.multiply(2.0);
    assert_eq!(v.to_array(), [4.0, 6.0, 6.0]);

    v.set_y(-1.0);
    assert_eq!((-v).to_array(), [-4.0, 1.0, -6.0]);

    v.set(7.0, 8.0, 9.0);
    assert_eq!([v.x(), v.y(), v.z()], [7.0, 8.0, 9.0]);
}

fn vector_lerp_blend<B: MathBackend>() {
    let a = B::Vector3::ZERO;
    let b = B::Vector3::new(10.0, 20.0, 30.0);

    assert_vec_close::<B>(B::Vector3::lerp(&a, &b, 0.25), [2.5, 5.0, 7.5]);
    assert_vec_close::<B>(B::Vector3::lerp(&a, &b, 1.0), [10.0, 20.0, 30.0]);
    // no clamping, so values past 1 extrapolate
    assert_vec_close::<B>(B::Vector3::lerp(&a, &b, 2.0), [20.0, 40.0, 60.0]);

    let c = B::Vector3::UNIT_Z;
    let d = B::Vector3::new(1.0, 1.0, 1.0);
    assert_vec_close::<B>(B::Vector3::blend(&B::Vector3::UNIT_X, &B::Vector3::UNIT_Y, &c, &d, 0.25, 0.25, 0.25), [0.5, 0.5, 0.5]);
    // `d` takes the remaining weight
    assert_vec_close::<B>(B::Vector3::blend(&a, &a, &a, &b, 0.5, 0.25, 0.0), [2.5, 5.0, 7.5]);
}

fn transform_point_and_direction<B: MathBackend>() {
    let translation = B::Matrix4::create_translation(&B::Vector3::new(5.0, -2.0, 1.0));

    let mut point = B::Vector3::new(1.0, 1.0, 1.0);
    point.transform(&translation);
    assert_vec_close::<B>(point, [6.0, -1.0, 2.0]);

    let mut dir = B::Vector3::new(1.0, 1.0, 1.0);
    dir.transform_as_vector(&translation);
    assert_vec_close::<B>(dir, [1.0, 1.0, 1.0]);

    // w has to be reset before every transform
    point.transform(&translation);
    assert_vec_close::<B>(point, [11.0, -3.0, 3.0]);
}

fn multiply_applies_rhs_first<B: MathBackend>() {
    let mut mat = B::Matrix4::create_scale(3.0);
    mat.multiply(&B::Matrix4::create_translation(&B::Vector3::new(5.0, 10.0, -4.0)));

    let mut point = B::Vector3::new(1.0, 1.0, 1.0);
    point.transform(&mat);
    assert_vec_close::<B>(point, [18.0, 33.0, -9.0]);

    let operator = B::Matrix4::create_scale(3.0) * B::Matrix4::create_translation(&B::Vector3::new(5.0, 10.0, -4.0));
    assert_eq!(operator, mat);
}

fn identity_laws<B: MathBackend>() {
    let mat = B::Matrix4::from_rows([
        [ 1.0,  2.0,  3.0,  4.0],
        [ 5.0,  6.0,  7.0,  8.0],
        [ 9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ]);

    assert_eq!(mat * B::Matrix4::IDENTITY, mat);
    assert_eq!(B::Matrix4::IDENTITY * mat, mat);
    assert_eq!(B::Matrix4::IDENTITY.inverted(), B::Matrix4::IDENTITY);

    let mut v = B::Vector3::new(1.0, -2.0, 3.0);
    v.transform(&B::Matrix4::IDENTITY);
    assert_eq!(v.to_array(), [1.0, -2.0, 3.0]);

    let mut q = B::Quaternion::from_axis_angle(&B::Vector3::UNIT_Y, 0.3);
    let expected = q;
    q.multiply(&B::Quaternion::IDENTITY);
    assert!(q.is_close_to(expected, EPSILON));
}

fn inverse_laws<B: MathBackend>() {
    let mut mat = B::Matrix4::create_translation(&B::Vector3::new(1.0, 2.0, 3.0));
    mat.multiply(&B::Matrix4::create_rotation_y(0.7));
    mat.multiply(&B::Matrix4::create_scale(2.0));

    let inv = mat.inverted();
    assert_mat_close::<B>(mat * inv, B::Matrix4::IDENTITY);
    assert_mat_close::<B>(inv * mat, B::Matrix4::IDENTITY);
    assert_mat_close::<B>(inv.inverted(), mat);

    let mut point = B::Vector3::new(-4.0, 0.5, 9.0);
    point.transform(&mat);
    point.transform(&inv);
    assert_vec_close::<B>(point, [-4.0, 0.5, 9.0]);

    let general = B::Matrix4::from_rows([
        [2.0, 0.0, 1.0, 3.0],
        [1.0, 3.0, 0.0, 1.0],
        [0.0, 1.0, 4.0, 2.0],
        [1.0, 0.0, 2.0, 5.0],
    ]);
    assert_mat_close::<B>(general * general.inverted(), B::Matrix4::IDENTITY);
}

fn rotation_round_trip<B: MathBackend>() {
    let angle = f32::SIXTH_PI;
    let expected = [0.0, f32::HALF_ROOT_THREE, 0.5];

    let mut by_matrix = B::Vector3::UNIT_Y;
    by_matrix.transform(&B::Matrix4::create_rotation_x(angle));
    assert_vec_close::<B>(by_matrix, expected);

    let quat = B::Quaternion::from_axis_angle(&B::Vector3::UNIT_X, angle);
    let mut by_quat = B::Vector3::UNIT_Y;
    by_quat.rotate(&quat);
    assert_vec_close::<B>(by_quat, expected);

    let mut by_quat_matrix = B::Vector3::UNIT_Y;
    by_quat_matrix.transform(&B::Matrix4::from_quaternion(&quat));
    assert_vec_close::<B>(by_quat_matrix, expected);

    for angle in [0.3, -1.2, 2.5] {
        assert_mat_close::<B>(B::Matrix4::from_quaternion(&B::Quaternion::from_axis_angle(&B::Vector3::UNIT_X, angle)), B::Matrix4::create_rotation_x(angle));
        assert_mat_close::<B>(B::Matrix4::from_quaternion(&B::Quaternion::from_axis_angle(&B::Vector3::UNIT_Y, angle)), B::Matrix4::create_rotation_y(angle));
        assert_mat_close::<B>(B::Matrix4::from_quaternion(&B::Quaternion::from_axis_angle(&B::Vector3::UNIT_Z, angle)), B::Matrix4::create_rotation_z(angle));
    }
}

fn rotation_composition<B: MathBackend>() {
    let half = B::Matrix4::create_rotation_x(f32::QUARTER_PI);
    assert_mat_close::<B>(half * half, B::Matrix4::create_rotation_x(f32::HALF_PI));

    let mut quat = B::Quaternion::from_axis_angle(&B::Vector3::UNIT_X, f32::QUARTER_PI);
    let copy = quat;
    quat.multiply(&copy);
    assert!(quat.is_close_to(B::Quaternion::from_axis_angle(&B::Vector3::UNIT_X, f32::HALF_PI), EPSILON));

    // rotate around x first, then around y
    let mut quat = B::Quaternion::from_axis_angle(&B::Vector3::UNIT_X, f32::HALF_PI);
    quat.multiply(&B::Quaternion::from_axis_angle(&B::Vector3::UNIT_Y, f32::HALF_PI));
    let mut v = B::Vector3::UNIT_Y;
    v.rotate(&quat);
    assert_vec_close::<B>(v, [1.0, 0.0, 0.0]);
}

fn quaternion_helpers<B: MathBackend>() {
    let quat = B::Quaternion::from_axis_angle(&B::Vector3::new(1.0, 1.0, 0.0).normalized(), 1.1);
    assert!(quat.length().is_close_to(1.0, EPSILON));

    let mut product = quat;
    product.multiply(&quat.conjugated());
    assert!(product.is_close_to(B::Quaternion::IDENTITY, EPSILON));

    let raw = B::Quaternion::new(1.0, 2.0, 2.0, 4.0);
    assert_eq!(raw.length_squared(), 25.0);
    assert!(raw.normalized().is_close_to(B::Quaternion::new(0.2, 0.4, 0.4, 0.8), EPSILON));
    assert_eq!(raw.to_array(), [1.0, 2.0, 2.0, 4.0]);
    assert_eq!(B::Quaternion::default(), B::Quaternion::IDENTITY);
}

fn quaternion_interpolation<B: MathBackend>() {
    let a = B::Quaternion::IDENTITY;
    let b = B::Quaternion::from_axis_angle(&B::Vector3::UNIT_Z, f32::HALF_PI);
    let mid = B::Quaternion::from_axis_angle(&B::Vector3::UNIT_Z, f32::QUARTER_PI);

    // both have equal weights, so the normalized lerp lands on the same midpoint as slerp
    assert!(B::Quaternion::lerp(&a, &b, 0.5).is_close_to(mid, EPSILON));
    assert!(B::Quaternion::slerp(&a, &b, 0.5).is_close_to(mid, EPSILON));

    let third = B::Quaternion::from_axis_angle(&B::Vector3::UNIT_Z, f32::HALF_PI / 3.0);
    assert!(B::Quaternion::slerp(&a, &b, 1.0 / 3.0).is_close_to(third, EPSILON));
    assert!(B::Quaternion::lerp(&a, &b, 0.3).length().is_close_to(1.0, EPSILON));

    let blended = B::Quaternion::blend(&b, &b, &b, &b, 0.1, 0.2, 0.3);
    assert!(blended.is_close_to(b, EPSILON));
}

fn look_at_and_projection<B: MathBackend>() {
    let view = B::Matrix4::create_look_at(&B::Vector3::new(0.0, 0.0, -10.0), &B::Vector3::ZERO, &B::Vector3::UNIT_Y);
    let mut origin = B::Vector3::ZERO;
    origin.transform(&view);
    assert_vec_close::<B>(origin, [0.0, 0.0, 10.0]);

    let proj = B::Matrix4::create_perspective_fov(f32::HALF_PI, 2.0, 1.0, 101.0);
    assert_mat_close::<B>(proj, B::Matrix4::from_rows([
        [0.5, 0.0, 0.0,   0.0],
        [0.0, 1.0, 0.0,   0.0],
        [0.0, 0.0, 1.01, -1.01],
        [0.0, 0.0, 1.0,   0.0],
    ]));
}

fn matrix_elementwise<B: MathBackend>() {
    let a = B::Matrix4::IDENTITY;
    let b = B::Matrix4::create_scale(3.0);
    assert_mat_close::<B>(B::Matrix4::lerp(&a, &b, 0.5), B::Matrix4::create_scale(2.0));
    assert_eq!(B::Matrix4::lerp(&a, &b, 0.0), a);

    let mut sum = a;
    sum += b;
    assert_eq!(sum.get(0, 0), 4.0);
    assert_eq!(sum.get(3, 3), 2.0);
    sum -= b;
    assert_eq!(sum, a);

    let mut translation = B::Matrix4::create_translation(&B::Vector3::new(1.0, 2.0, 3.0));
    translation.transpose();
    assert_eq!(translation.to_native()[3], [1.0, 2.0, 3.0, 1.0]);

    let mut flat = B::Matrix4::from_array(core::array::from_fn(|i| i as f32));
    assert_eq!(flat.get(2, 1), 9.0);
    flat.set_element(2, 1, -1.0);
    assert_eq!(flat.to_native()[2], [8.0, -1.0, 10.0, 11.0]);

    flat.set(*B::Matrix4::IDENTITY.to_native());
    assert_eq!(flat, B::Matrix4::IDENTITY);
}

macro_rules! backend_tests {
    ($name:ident, $backend:ty; $($test:ident),* $(,)?) => {
        mod $name {
            use super::*;

            $(
                #[test]
                fn $test() {
                    super::$test::<$backend>();
                }
            )*
        }
    };
}

macro_rules! all_backend_tests {
    ($($test:ident),* $(,)?) => {
        backend_tests!(scalar, ScalarBackend; $($test),*);
        backend_tests!(simd, SimdBackend; $($test),*);
    };
}

all_backend_tests!(
    vector_products,
    vector_normalize,
    vector_in_place_ops,
    vector_lerp_blend,
    transform_point_and_direction,
    multiply_applies_rhs_first,
    identity_laws,
    inverse_laws,
    rotation_round_trip,
    rotation_composition,
    quaternion_helpers,
    quaternion_interpolation,
    look_at_and_projection,
    matrix_elementwise,
);

#[test]
fn default_aliases_follow_feature() {
    let expected = if cfg!(feature = "simd") { "simd" } else { "scalar" };
    assert_eq!(<DefaultBackend as MathBackend>::NAME, expected);

    let v = Vector3::new(1.0, 2.0, 3.0);
    let mut m = Matrix4::create_translation(&v);
    m.multiply(&Matrix4::from_quaternion(&Quaternion::IDENTITY));
    assert_eq!(m.get(2, 3), 3.0);
}
