use lynx_math::prelude::*;

/// Placement of an object in the world
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    pub translation : Vector3,
    pub rotation    : Quaternion,
    /// Uniform scale
    pub scale       : f32,
}

impl Transform {
    pub const IDENTITY : Self = Self { translation: Vector3::ZERO, rotation: Quaternion::IDENTITY, scale: 1.0 };

    pub fn new(translation: Vector3, rotation: Quaternion, scale: f32) -> Self {
        Self { translation, rotation, scale }
    }

    pub fn from_translation(translation: Vector3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    /// Matrix moving the object from model space into world space
    ///
    /// Scales first, then rotates, then translates: `T * R * S`.
    pub fn world_matrix(&self) -> Matrix4 {
        let mut world = Matrix4::create_translation(&self.translation);
        world.multiply(&Matrix4::from_quaternion(&self.rotation));
        world.multiply(&Matrix4::create_scale(self.scale));
        world
    }

    /// Apply an additional rotation after the current one
    pub fn rotate(&mut self, rotation: &Quaternion) {
        self.rotation.multiply(rotation);
        self.rotation.normalize();
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
