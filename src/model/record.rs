//! A single log record as shown in one cell.

use super::level::LogLevel;

/// One log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    level: LogLevel,
    message: String,
    structured: bool,
}

impl LogRecord {
    /// Plain-text record.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            structured: false,
        }
    }

    /// Record whose body is structured output (tracebacks, dumps, tables),
    /// rendered in an inset box.
    pub fn structured(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            structured: true,
            ..Self::new(level, message)
        }
    }

    /// Severity of the record.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Full message text, line breaks included.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True for machine-formatted payloads shown in an inset box.
    pub fn is_structured(&self) -> bool {
        self.structured
    }
}

/// Records shown when none are given on the command line.
pub fn sample_records() -> Vec<LogRecord> {
    vec![
        LogRecord::new(LogLevel::Info, "Starting pipeline run 7f3a2c"),
        LogRecord::new(LogLevel::Debug, "Resolved 14 solids in 3 stages"),
        LogRecord::new(LogLevel::Warning, "Retrying upload (attempt 2 of 5)"),
        LogRecord::structured(
            LogLevel::Error,
            "Error: disk full at /var/log\n\
             Traceback (most recent call last):\n  \
             File \"/opt/app/storage.py\", line 212, in write_chunk\n    \
             handle.write(chunk)\n  \
             File \"/opt/app/storage.py\", line 97, in write\n    \
             raise OSError(28, \"No space left on device\")\n\
             OSError: [Errno 28] No space left on device\n\
             \n\
             During handling of the above exception, another exception occurred:\n\
             \n\
             RuntimeError: failed to persist step output 'load_events'",
        ),
        LogRecord::new(
            LogLevel::Info,
            "Materialized 12 partitions for asset daily_events in 48.2s",
        ),
        LogRecord::new(LogLevel::Critical, "Run 7f3a2c failed after 3 retries"),
    ]
}
