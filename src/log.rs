//! Logger setup for the command-line tool.

use log::LevelFilter;

/// Initializes `env_logger` at `Debug` level when `debug_enabled`, `Info` otherwise.
///
/// `RUST_LOG`, when set, overrides the level.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A logger may already be installed when embedded in another program; keep that one.
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
