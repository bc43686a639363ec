use serde::{Deserialize, Serialize};
use lynx_math::prelude::*;

/// Camera settings, as stored in the application settings
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraSettings {
    pub eye          : [f32; 3],
    pub at           : [f32; 3],
    pub up           : [f32; 3],
    /// Vertical field of view, in radians
    pub fov_y        : f32,
    pub aspect_ratio : f32,
    pub near         : f32,
    pub far          : f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye: [0.0, 3.0, -5.0],
            at: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_y: f32::QUARTER_PI,
            aspect_ratio: 4.0 / 3.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// Look-at camera with a perspective projection
///
/// The camera is described by its position (`eye`), the point it looks at (`at`) and its up direction. Turning the camera moves
/// `at` around `eye`, moving the camera moves both of them.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera {
    eye          : Vector3,
    at           : Vector3,
    up           : Vector3,
    fov_y        : f32,
    aspect_ratio : f32,
    near         : f32,
    far          : f32,
}

impl Camera {
    pub fn new(settings: &CameraSettings) -> Self {
        let vec = |[x, y, z]: [f32; 3]| Vector3::new(x, y, z);
        Self {
            eye: vec(settings.eye),
            at: vec(settings.at),
            up: vec(settings.up),
            fov_y: settings.fov_y,
            aspect_ratio: settings.aspect_ratio,
            near: settings.near,
            far: settings.far,
        }
    }

    pub fn eye(&self) -> Vector3 {
        self.eye
    }

    pub fn at(&self) -> Vector3 {
        self.at
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    /// Set the position and orientation of the camera
    pub fn look_at(&mut self, eye: Vector3, at: Vector3, up: Vector3) {
        self.eye = eye;
        self.at = at;
        self.up = up;
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Normalized direction the camera looks in
    pub fn forward(&self) -> Vector3 {
        (self.at - self.eye).normalized()
    }

    /// Normalized direction to the left of the camera
    pub fn left(&self) -> Vector3 {
        Vector3::cross(&self.up, &(self.at - self.eye)).normalized()
    }

    /// Matrix moving world space into camera space
    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::create_look_at(&self.eye, &self.at, &self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4 {
        Matrix4::create_perspective_fov(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Combined `projection * view` matrix
    pub fn view_projection_matrix(&self) -> Matrix4 {
        let mut view_proj = self.projection_matrix();
        view_proj.multiply(&self.view_matrix());
        view_proj
    }

    /// Turn the camera around its up direction
    pub fn yaw(&mut self, angle: f32) {
        let rotation = Quaternion::from_axis_angle(&self.up.normalized(), angle).normalized();
        self.turn(&rotation);
    }

    /// Tilt the camera around its left direction, positive angles look down
    pub fn pitch(&mut self, angle: f32) {
        let rotation = Quaternion::from_axis_angle(&self.left(), angle).normalized();
        self.turn(&rotation);
        self.up.rotate(&rotation);
    }

    fn turn(&mut self, rotation: &Quaternion) {
        let mut dir = self.at - self.eye;
        dir.rotate(rotation);
        self.at = self.eye + dir;
    }

    /// Move the camera along the direction it looks in, negative distances move it backwards
    pub fn move_forward(&mut self, distance: f32) {
        self.translate(self.forward() * distance);
    }

    /// Move the camera sideways, positive distances move it to the left
    pub fn strafe(&mut self, distance: f32) {
        self.translate(self.left() * distance);
    }

    fn translate(&mut self, offset: Vector3) {
        self.eye += offset;
        self.at += offset;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraSettings::default())
    }
}
