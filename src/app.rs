use lynx_math::prelude::*;
use lynx_anim::{AnimComponent, Animation, Joint, KeyFrame, Skeleton, Track};
use lynx_logging::{log_debug, log_info};
use lynx_scene::{Camera, GameObject, ObjectHandle, Transform, World};

use crate::{error::Result, AppSettings, LOG_CAT};

/// Application context, owning everything the demo needs
pub struct App {
    settings : AppSettings,
    world    : World,
    camera   : Camera,
    arm      : ObjectHandle,
    frame    : u32,
}

impl App {
    pub fn new(settings: AppSettings) -> Result<Self> {
        let camera = Camera::new(&settings.camera);

        let mut world = World::new();
        world.spawn(GameObject::new("crate")
            .with_transform(Transform::new(Vector3::new(-2.0, 0.0, 0.0), Quaternion::IDENTITY, 0.5))
            .with_spin(true));

        let anim = AnimComponent::new(arm_skeleton()?, wave_animation()?, settings.anim.clone())?;
        let arm = world.spawn(GameObject::new("arm")
            .with_transform(Transform::from_translation(Vector3::new(2.0, 0.0, 0.0)))
            .with_anim(anim));

        log_info!(LOG_CAT, "'{}' running on the {} math backend", settings.window_title, DefaultBackend::NAME);
        Ok(Self { settings, world, camera, arm, frame: 0 })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Number of frames simulated so far
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Simulate all frames requested by the settings
    pub fn run(&mut self) {
        for _ in 0..self.settings.frame_count {
            self.tick();
        }
    }

    /// Simulate a single frame
    pub fn tick(&mut self) {
        self.world.update(self.settings.delta_time);
        self.frame += 1;

        if self.frame % 30 == 0 {
            self.report();
        }
    }

    /// World position of the hand of the animated arm
    pub fn hand_position(&self) -> Option<Vector3> {
        let arm = self.world.get(self.arm)?;
        let anim = arm.anim()?;
        let hand = anim.skeleton().find_joint("hand")?;

        let mut pos = Vector3::ZERO;
        pos.transform(&anim.global_poses()[hand]);
        pos.transform(&arm.transform.world_matrix());
        Some(pos)
    }

    fn report(&self) {
        let Some(hand) = self.hand_position() else { return };
        let view_proj = self.camera.view_projection_matrix();

        match project(&view_proj, hand) {
            Some((x, y)) => log_debug!(LOG_CAT, Self::report, "Frame {}: hand at {hand}, on screen at ({x:.3}, {y:.3})", self.frame),
            None => log_debug!(LOG_CAT, Self::report, "Frame {}: hand at {hand}, behind the camera", self.frame),
        }
    }
}

/// Project a world space point to normalized device coordinates, `None` if the point is behind the camera
pub fn project(view_proj: &Matrix4, point: Vector3) -> Option<(f32, f32)> {
    let w = view_proj.get(3, 0) * point.x() + view_proj.get(3, 1) * point.y() + view_proj.get(3, 2) * point.z() + view_proj.get(3, 3);
    if w <= 0.0 {
        return None;
    }

    let mut clip = point;
    clip.transform(view_proj);
    Some((clip.x() / w, clip.y() / w))
}

/// Hips, spine and a 3 bone arm pointing up
fn arm_skeleton() -> lynx_anim::Result<Skeleton> {
    let bone = Matrix4::create_translation(&Vector3::UNIT_Y);
    Skeleton::new(vec![
        Joint::new("hips", -1, Matrix4::IDENTITY),
        Joint::new("spine", 0, bone),
        Joint::new("shoulder", 1, bone),
        Joint::new("elbow", 2, bone),
        Joint::new("hand", 3, bone),
    ])
}

/// Bends the elbow back and forth over a second
fn wave_animation() -> lynx_anim::Result<Animation> {
    let bone = Matrix4::create_translation(&Vector3::UNIT_Y);
    let bent = bone * Matrix4::create_rotation_z(f32::HALF_PI);

    let elbow = Track::new(vec![
        KeyFrame::new(0, bone),
        KeyFrame::new(15, bent),
        KeyFrame::new(30, bone),
    ]);
    Animation::new("wave", 30, vec![Track::default(), Track::default(), Track::default(), elbow, Track::default()])
}
