// qualgate-core/src/ports/reporter.rs

// The core decides the level and the content of a message.
// Where it goes and how it looks is the adapter's business.

use crate::domain::environment::LogLevel;

pub trait Reporter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
