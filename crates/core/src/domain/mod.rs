// Domain Layer - The banner report and its fixed text

pub mod report;

// Re-exports
pub use report::{
    ProbeReport, LINE_COUNT, SEPARATOR, SUCCESS_LINE, TIMESTAMP_FORMAT, TIMESTAMP_LABEL, TITLE,
    VERSION_LABEL,
};
