use lynx_math::prelude::*;
use lynx_logging::{log_error, log_info};

use crate::*;

/// Plays an animation on a skeleton and keeps the matrix palette used for skinning up to date
pub struct AnimComponent {
    skeleton     : Skeleton,
    animation    : Animation,
    settings     : AnimSettings,
    /// Playback time, in frames
    time         : f32,
    global_poses : Vec<Matrix4>,
    palette      : MatrixPalette,
}

impl AnimComponent {
    /// Create a component playing `animation` on `skeleton`, the palette is built for the first frame
    pub fn new(skeleton: Skeleton, animation: Animation, settings: AnimSettings) -> Result<Self> {
        settings.validate()?;

        let num_joints = skeleton.num_joints();
        if animation.tracks().len() != num_joints {
            log_error!(LOG_CAT, Self::new, "Animation '{}' has {} tracks, but the skeleton has {num_joints} joints", animation.name(), animation.tracks().len());
            return Err(Error::InvalidAnimation(format!("animation '{}' has {} tracks, expected {num_joints}", animation.name(), animation.tracks().len())));
        }

        let palette = MatrixPalette::new(num_joints)?;
        let mut component = Self {
            skeleton,
            animation,
            settings,
            time: 0.0,
            global_poses: vec![Matrix4::IDENTITY; num_joints],
            palette,
        };
        component.build_palette();

        log_info!(LOG_CAT, "Playing animation '{}' ({} frames) on {num_joints} joints", component.animation.name(), component.animation.num_frames());
        Ok(component)
    }

    /// Advance the playback clock by `delta` seconds and rebuild the palette
    pub fn update(&mut self, delta: f32) {
        self.set_time(self.time + delta * self.settings.frames_per_second);
    }

    /// Jump to `time`, in frames, and rebuild the palette
    ///
    /// The time is wrapped or clamped to the length of the animation, depending on the playback mode.
    /// A NaN time restarts the animation, as does an infinite time when looping.
    pub fn set_time(&mut self, time: f32) {
        let length = self.animation.num_frames() as f32;
        self.time = match self.settings.playback {
            _ if time.is_nan() => 0.0,
            PlaybackMode::Loop if time.is_infinite() => 0.0,
            PlaybackMode::Loop  => time.rem_euclid(length),
            PlaybackMode::Clamp => time.clamp(0.0, length),
        };
        self.build_palette();
    }

    /// Current playback time, in frames
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Index of the frame currently being played
    pub fn current_frame(&self) -> u32 {
        self.time as u32
    }

    /// Recalculate the skinning matrix of every joint for the current time
    pub fn build_palette(&mut self) {
        for (idx, joint) in self.skeleton.joints().iter().enumerate() {
            // Joints without keyframes stay in their bind pose
            let local = self.animation.tracks()[idx]
                .sample(self.time)
                .unwrap_or(*joint.local_bind_pose());

            let global = match self.skeleton.parent_of(idx) {
                Some(parent) => self.global_poses[parent] * local,
                None => local,
            };
            self.global_poses[idx] = global;

            let mut skinning = global;
            skinning.multiply(joint.inv_bind_pose());
            self.palette[idx] = skinning;
        }
    }

    /// Skinning matrices, one per joint, as calculated by the last palette rebuild
    pub fn matrix_palette(&self) -> &[Matrix4] {
        &self.palette
    }

    /// Model space pose of every joint, as calculated by the last palette rebuild
    pub fn global_poses(&self) -> &[Matrix4] {
        &self.global_poses
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn settings(&self) -> &AnimSettings {
        &self.settings
    }
}
