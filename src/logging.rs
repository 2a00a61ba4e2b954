use std::io::Write;

fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

fn default_filter(quiet: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    }
}

/// Initialize env_logger. `RUST_LOG` still wins over the flags.
pub fn init_logging(quiet: bool, debug: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(quiet, debug)),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}", level_label(record.level()), record.args()))
    .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_overrides_quiet() {
        assert_eq!(default_filter(true, true), "debug");
        assert_eq!(default_filter(true, false), "warn");
        assert_eq!(default_filter(false, false), "info");
    }

    #[test]
    fn labels_are_padded() {
        assert_eq!(level_label(log::Level::Info).len(), 5);
        assert_eq!(level_label(log::Level::Warn).len(), 5);
    }
}
