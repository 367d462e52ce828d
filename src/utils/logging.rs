//! Logging setup using env_logger

use log::LevelFilter;

/// Initialize timestamped leveled logging to stderr.
///
/// The level is fixed here from the parsed --debug flag and never
/// changed afterwards.
pub fn setup_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();
}
