//! Skeletal animation for the lynx engine
//!
//! A [`Skeleton`] stores the bind pose of its joints and calculates their inverse bind poses once, when it is created.
//! An [`AnimComponent`] plays an [`Animation`] on a skeleton: every update it samples the keyframes of each joint,
//! composes the local poses down the hierarchy and multiplies them with the inverse bind poses, which results in the
//! [`MatrixPalette`] handed to the renderer for skinning.

use lynx_logging::LogCategory;

mod error;
pub use error::*;

mod settings;
pub use settings::*;

mod palette;
pub use palette::*;

mod skeleton;
pub use skeleton::*;

mod animation;
pub use animation::*;

mod component;
pub use component::*;

const LOG_CAT : LogCategory = LogCategory::new("Anim");

/// Maximum number of joints a skeleton can have
pub const MAX_JOINTS : usize = 64;

#[cfg(test)]
mod test_log {
    use std::io::{self, Write};
    use std::sync::Arc;
    use once_cell::sync::Lazy;
    use parking_lot::Mutex;

    /// Log output of the test process, kept off the console
    #[derive(Clone, Default)]
    pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl LogCapture {
        pub fn contains(&self, text: &str) -> bool {
            String::from_utf8_lossy(&self.0.lock()).contains(text)
        }
    }

    impl Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    static CAPTURE : Lazy<LogCapture> = Lazy::new(|| {
        let capture = LogCapture::default();
        let logger = lynx_logging::get_logger();
        logger.set_log_to_console(false);
        logger.set_always_flush(true);
        _ = logger.add_writer(Box::new(capture.clone()));
        capture
    });

    /// Redirect the global logger into a buffer, for tests that expect errors to be logged
    pub fn capture_logs() -> &'static LogCapture {
        &CAPTURE
    }
}

#[cfg(test)]
pub(crate) use test_log::capture_logs;
