//! Plain `f32` implementation of the math types

mod vec3;
pub use vec3::*;

mod quat;
pub use quat::*;

mod mat4;
pub use mat4::*;

use crate::MathBackend;

/// Backend built from plain `f32` arithmetic, available on every target
#[derive(Clone, Copy, Debug)]
pub struct ScalarBackend;

impl MathBackend for ScalarBackend {
    const NAME : &'static str = "scalar";

    type Vector3    = ScalarVector3;
    type Quaternion = ScalarQuaternion;
    type Matrix4    = ScalarMatrix4;
}
