//! Logger setup for the binary.

use std::io::Write;

use log::LevelFilter;

/// Map `-q` / `-v` flags to a base level.
///
/// `-q` wins over any number of `-v`.
pub const fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` overrides `base_level`.
pub fn configure_logger(base_level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                buf.timestamp_seconds(),
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .filter_level(base_level)
        .parse_default_env()
        .init();
}
