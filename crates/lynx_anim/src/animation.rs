use lynx_math::prelude::*;
use lynx_logging::log_error;

use crate::{Error, Result, LOG_CAT};

/// Local pose of a joint at a given frame
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct KeyFrame {
    pub frame      : u32,
    pub local_pose : Matrix4,
}

impl KeyFrame {
    pub fn new(frame: u32, local_pose: Matrix4) -> Self {
        Self { frame, local_pose }
    }
}

/// Keyframes of a single joint, sorted by frame
#[derive(Clone, Debug, Default)]
pub struct Track {
    keys : Vec<KeyFrame>,
}

impl Track {
    /// Create a track, keyframes are sorted by frame and keep their relative order when they share a frame
    pub fn new(mut keys: Vec<KeyFrame>) -> Self {
        keys.sort_by_key(|key| key.frame);
        Self { keys }
    }

    pub fn keys(&self) -> &[KeyFrame] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sample the local pose at `time`, in (fractional) frames
    ///
    /// Times before the first keyframe return the first keyframe's pose and times after the last keyframe return the last keyframe's pose.
    /// In between, the 2 bracketing keyframes are interpolated with [`Matrix4Ops::lerp`].
    ///
    /// Returns `None` if the track has no keyframes. A NaN time samples the first keyframe.
    pub fn sample(&self, time: f32) -> Option<Matrix4> {
        let first = self.keys.first()?;
        let last = self.keys.last()?;

        if time.is_nan() || time <= first.frame as f32 {
            return Some(first.local_pose);
        }
        if time >= last.frame as f32 {
            return Some(last.local_pose);
        }

        // `first.frame < time < last.frame`, so both sides of the split are non-empty
        let next_idx = self.keys.partition_point(|key| key.frame as f32 <= time);
        let prev = &self.keys[next_idx - 1];
        let next = &self.keys[next_idx];

        let f = (time - prev.frame as f32) / (next.frame - prev.frame) as f32;
        Some(Matrix4::lerp(&prev.local_pose, &next.local_pose, f))
    }
}

/// Keyframe animation, with one track per joint of the skeleton it is made for
#[derive(Clone, Debug)]
pub struct Animation {
    name       : String,
    num_frames : u32,
    tracks     : Vec<Track>,
}

impl Animation {
    pub fn new(name: impl Into<String>, num_frames: u32, tracks: Vec<Track>) -> Result<Self> {
        Self::with_name(name.into(), num_frames, tracks)
    }

    fn with_name(name: String, num_frames: u32, tracks: Vec<Track>) -> Result<Self> {
        if num_frames == 0 {
            log_error!(LOG_CAT, Self::with_name, "Animation '{name}' has no frames");
            return Err(Error::InvalidAnimation(format!("animation '{name}' has no frames")));
        }
        Ok(Self { name, num_frames, tracks })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the animation, in frames
    pub fn num_frames(&self) -> u32 {
        self.num_frames
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get the track of a joint
    pub fn track(&self, joint: usize) -> Option<&Track> {
        self.tracks.get(joint)
    }
}
