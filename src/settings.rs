use std::{fs, io, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use lynx_anim::AnimSettings;
use lynx_logging::{log_error, log_warning, LogLevel};
use lynx_scene::CameraSettings;

use crate::{error::{Error, Result}, LOG_CAT};

/// Settings of the demo application, loaded from `lynx.toml`
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AppSettings {
    pub window_title : String,
    /// Number of frames to simulate before exiting
    pub frame_count  : u32,
    /// Fixed time step of a frame, in seconds
    pub delta_time   : f32,
    /// Maximum level of messages written to the log
    pub log_level    : String,
    pub camera       : CameraSettings,
    pub anim         : AnimSettings,
}

impl AppSettings {
    /// Load the settings from a file, a missing file results in the default settings
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(toml) => Self::parse(&toml),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log_warning!(LOG_CAT, "'{}' does not exist, using default settings", path.display());
                Ok(Self::default())
            },
            Err(err) => {
                log_error!(LOG_CAT, Self::load, "Failed to read '{}', err: {err}", path.display());
                Err(Error::Read { path: path.display().to_string(), message: err.to_string() })
            },
        }
    }

    /// Parse the settings from a toml document, missing keys keep their default value
    pub fn parse(toml: &str) -> Result<Self> {
        let settings: AppSettings = toml::from_str(toml).map_err(|err| {
            log_error!(LOG_CAT, Self::parse, "Failed to parse application settings, err: {err}");
            Error::Parse(err.to_string())
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.delta_time.is_finite() || self.delta_time <= 0.0 {
            log_error!(LOG_CAT, Self::validate, "Time step needs to be positive, found {}", self.delta_time);
            return Err(Error::InvalidSettings(format!("delta_time needs to be positive, found {}", self.delta_time)));
        }
        self.max_log_level()?;
        Ok(self.anim.validate()?)
    }

    pub fn max_log_level(&self) -> Result<LogLevel> {
        LogLevel::from_str(&self.log_level).map_err(Error::InvalidSettings)
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_title: "Lynx".to_string(),
            frame_count: 120,
            delta_time: 1.0 / 60.0,
            log_level: "info".to_string(),
            camera: CameraSettings::default(),
            anim: AnimSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use lynx_anim::PlaybackMode;
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(AppSettings::parse(""), Ok(AppSettings::default()));
    }

    #[test]
    fn nested_tables() {
        let toml = r#"
            frame_count = 10
            log_level = "Debug"

            [camera]
            eye = [1.0, 2.0, 3.0]

            [anim]
            playback = "clamp"
        "#;
        let settings = AppSettings::parse(toml).unwrap();
        assert_eq!(settings.frame_count, 10);
        assert_eq!(settings.max_log_level(), Ok(LogLevel::Debug));
        assert_eq!(settings.camera.eye, [1.0, 2.0, 3.0]);
        assert_eq!(settings.camera.far, 100.0);
        assert_eq!(settings.anim.playback, PlaybackMode::Clamp);
        assert_eq!(settings.anim.frames_per_second, AnimSettings::DEFAULT_FRAMES_PER_SECOND);
    }

    #[test]
    fn rejects_bad_values() {
        crate::quiet_logs();
        assert!(matches!(AppSettings::parse("delta_time = 0.0"), Err(Error::InvalidSettings(_))));
        assert!(matches!(AppSettings::parse("log_level = \"loud\""), Err(Error::InvalidSettings(_))));
        assert!(matches!(AppSettings::parse("[anim]\nframes_per_second = -1.0"), Err(Error::Anim(lynx_anim::Error::InvalidSettings(_)))));
        assert!(matches!(AppSettings::parse("frame_count = \"many\""), Err(Error::Parse(_))));
    }

    #[test]
    fn unreadable_file() {
        crate::quiet_logs();
        let dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        match AppSettings::load(dir) {
            Err(Error::Read { path, .. }) => assert_eq!(path, dir.display().to_string()),
            other => panic!("expected a read error, found {other:?}"),
        }
    }

    #[test]
    fn shipped_settings_are_valid() {
        let settings = AppSettings::load(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/lynx.toml"))).unwrap();
        assert_eq!(settings.frame_count, 120);
        assert_eq!(settings.anim, AnimSettings::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        crate::quiet_logs();
        assert_eq!(AppSettings::load(Path::new("does/not/exist.toml")), Ok(AppSettings::default()));
    }
}
