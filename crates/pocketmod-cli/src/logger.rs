use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;

/// Writes log records to stderr, timestamped when debugging
#[derive(Clone)]
pub struct ConsoleLogger {
    max_level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let max_level = self.max_level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        if self.max_level >= LevelFilter::Debug {
            format!(
                "{} [{}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        } else if record.level() == Level::Info {
            format!("{}", record.args())
        } else {
            format!("[{}] {}", record.level(), record.args())
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = self.format(record);
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
