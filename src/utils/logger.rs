use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

/// Initializes the logger at the `Info` level.
///
/// See [`init_logger_with_level`] for more information.
pub fn init_logger() {
    init_logger_with_level(log::LevelFilter::Info)
}

/// Initializes the logger, writing to the standard output.
///
/// Messages are prefixed by their (colored) level and a timestamp.
/// Only the first call has an effect; later calls, including the ones made by other threads, are ignored.
/// If another logger has already been installed by the application, it is kept.
pub fn init_logger_with_level(level: log::LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new().info(fern::colors::Color::Cyan);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "![{:5}] {} {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stdout())
            .apply()
            .unwrap_or(());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_logger_with_level(log::LevelFilter::Debug);
        init_logger();
        log::debug!("logger initialized twice");
        assert!(LOGGER_INIT.is_completed());
    }
}
