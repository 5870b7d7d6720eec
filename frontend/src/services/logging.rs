use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Routes the `log` facade to the browser console.
///
/// The record target (module path) is kept as the component tag so messages
/// can be filtered in devtools.
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filtering() {
        let logger = ConsoleLogger { level: LevelFilter::Warn };
        let warn = Metadata::builder().level(Level::Warn).target("inventory").build();
        let info = Metadata::builder().level(Level::Info).target("inventory").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }

    #[test]
    fn test_format_record_includes_target() {
        let line = format_record(
            &Record::builder()
                .level(Level::Info)
                .target("inventory_frontend::services::api")
                .args(format_args!("GET /products"))
                .build(),
        );
        assert_eq!(line, "[INFO] inventory_frontend::services::api: GET /products");
    }
}
