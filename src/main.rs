use std::{fs::File, path::Path, process::ExitCode};

use lynx_logging::{log_info, log_severe, log_warning, LogCategory, Logger, set_logger, get_logger};

mod error;

mod settings;
use settings::AppSettings;

mod app;
use app::App;

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

fn setup_logger() {
    // Lives until the process exits, messages are flushed manually before that
    let logger: &'static Logger = Box::leak(Box::new(Logger::new()));
    set_logger(logger);

    match File::create("lynx.log") {
        Ok(file) => { _ = logger.add_writer(Box::new(file)); },
        Err(err) => log_warning!(LOG_CAT, "Failed to create log file, err: {err}"),
    }
}

/// Keeps expected failures in tests off the console
#[cfg(test)]
pub(crate) fn quiet_logs() {
    get_logger().set_log_to_console(false);
}

fn main() -> ExitCode {
    setup_logger();

    let result = AppSettings::load(Path::new("lynx.toml")).and_then(|settings| {
        // `load` already validated the level
        if let Ok(level) = settings.max_log_level() {
            get_logger().set_max_level(level);
        }
        App::new(settings)
    });

    let code = match result {
        Ok(mut app) => {
            app.run();
            log_info!(LOG_CAT, "Shutting down after {} frames, {} objects, camera at {}", app.frame(), app.world().len(), app.camera().eye());
            ExitCode::SUCCESS
        },
        Err(err) => {
            log_severe!(LOG_CAT, main, "Failed to start the application: {err}");
            ExitCode::FAILURE
        },
    };

    get_logger().flush();
    code
}
