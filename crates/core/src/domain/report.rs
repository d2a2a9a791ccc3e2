// Probe Report Domain Model

use std::fmt;

use chrono::NaiveDateTime;

/// Banner separator: 50 `=` characters
pub const SEPARATOR: &str = "==================================================";

/// Fixed title line the alarm application looks for
pub const TITLE: &str = "闹钟触发 - Python脚本执行测试";

/// Fixed success confirmation line
pub const SUCCESS_LINE: &str = "脚本执行成功！";

pub const TIMESTAMP_LABEL: &str = "当前时间: ";
pub const VERSION_LABEL: &str = "Rust版本: ";

/// `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of lines in a rendered report
pub const LINE_COUNT: usize = 7;

/// Everything the probe prints, captured at a single instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub timestamp: NaiveDateTime,
    pub runtime_version: String,
}

impl ProbeReport {
    pub fn new(timestamp: NaiveDateTime, runtime_version: impl Into<String>) -> Self {
        Self {
            timestamp,
            runtime_version: runtime_version.into(),
        }
    }

    /// Timestamp formatted with [`TIMESTAMP_FORMAT`]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The report lines in output order, without terminators
    pub fn lines(&self) -> [String; LINE_COUNT] {
        [
            SEPARATOR.to_string(),
            TITLE.to_string(),
            SEPARATOR.to_string(),
            format!("{}{}", TIMESTAMP_LABEL, self.formatted_timestamp()),
            format!("{}{}", VERSION_LABEL, self.runtime_version),
            SUCCESS_LINE.to_string(),
            SEPARATOR.to_string(),
        ]
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
