//! Logger setup.

use log::LevelFilter;

/// Maps the number of `-v` flags to a log level.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes `env_logger` on stderr. `RUST_LOG` overrides the level
/// derived from `verbose`.
pub fn init(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbose))
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
