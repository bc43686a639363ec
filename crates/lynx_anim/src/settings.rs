use core::fmt;
use serde::{Deserialize, Serialize};
use lynx_logging::{log_error, log_verbose};

use crate::{Error, Result, LOG_CAT};

/// What happens when the playback time moves past the end of an animation
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// Wrap around to the start, modulo the animation length
    #[default]
    Loop,
    /// Hold the last frame
    Clamp,
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackMode::Loop  => f.write_str("loop"),
            PlaybackMode::Clamp => f.write_str("clamp"),
        }
    }
}

/// Animation playback settings
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimSettings {
    /// Number of animation frames advanced per second of game time
    pub frames_per_second : f32,
    /// End of timeline policy
    pub playback          : PlaybackMode,
}

impl AnimSettings {
    pub const DEFAULT_FRAMES_PER_SECOND : f32 = 30.0;

    /// Load the settings from a toml document, missing keys keep their default value
    pub fn load(toml: &str) -> Result<Self> {
        let settings: AnimSettings = match toml::from_str(toml) {
            Ok(settings) => settings,
            Err(err) => {
                log_error!(LOG_CAT, Self::load, "Failed to parse animation settings, err: {err}");
                return Err(Error::InvalidSettings(err.to_string()));
            }
        };
        settings.validate()?;

        log_verbose!(LOG_CAT, "Loaded animation settings: {} fps, {} playback", settings.frames_per_second, settings.playback);
        Ok(settings)
    }

    /// Check that the settings can drive a playback clock
    pub fn validate(&self) -> Result<()> {
        if !self.frames_per_second.is_finite() || self.frames_per_second <= 0.0 {
            log_error!(LOG_CAT, Self::validate, "Frame rate needs to be positive, found {}", self.frames_per_second);
            return Err(Error::InvalidSettings(format!("frames_per_second needs to be positive, found {}", self.frames_per_second)));
        }
        Ok(())
    }
}

impl Default for AnimSettings {
    fn default() -> Self {
        Self {
            frames_per_second: Self::DEFAULT_FRAMES_PER_SECOND,
            playback: PlaybackMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_missing_keys() {
        assert_eq!(AnimSettings::load(""), Ok(AnimSettings::default()));

        let settings = AnimSettings::load("playback = \"clamp\"").unwrap();
        assert_eq!(settings.playback, PlaybackMode::Clamp);
        assert_eq!(settings.frames_per_second, 30.0);
    }

    #[test]
    fn full_document() {
        let settings = AnimSettings::load("frames_per_second = 24.0\nplayback = \"loop\"\n").unwrap();
        assert_eq!(settings, AnimSettings { frames_per_second: 24.0, playback: PlaybackMode::Loop });
    }

    #[test]
    fn rejects_bad_values() {
        crate::capture_logs();
        assert!(matches!(AnimSettings::load("frames_per_second = 0.0"), Err(Error::InvalidSettings(_))));
        assert!(matches!(AnimSettings::load("frames_per_second = -5.0"), Err(Error::InvalidSettings(_))));
        assert!(matches!(AnimSettings::load("playback = \"bounce\""), Err(Error::InvalidSettings(_))));
        assert!(matches!(AnimSettings::load("frames_per_second = "), Err(Error::InvalidSettings(_))));
    }
}
