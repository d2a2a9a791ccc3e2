// Probe Service - reads the clock and runtime once, renders and writes the report

use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use crate::domain::ProbeReport;
use crate::error::{ProbeError, Result};
use crate::port::{local_from_millis, RuntimeInfo, TimeProvider};

pub struct ProbeService {
    time_provider: Arc<dyn TimeProvider>,
    runtime_info: Arc<dyn RuntimeInfo>,
}

impl ProbeService {
    pub fn new(time_provider: Arc<dyn TimeProvider>, runtime_info: Arc<dyn RuntimeInfo>) -> Self {
        Self {
            time_provider,
            runtime_info,
        }
    }

    /// Capture the report values.
    ///
    /// The clock is read exactly once so the timestamp reflects a single instant.
    pub fn collect(&self) -> Result<ProbeReport> {
        let millis = self.time_provider.now_millis();
        let timestamp = local_from_millis(millis).ok_or(ProbeError::ClockOutOfRange(millis))?;

        let runtime_version = self.runtime_info.version();
        if runtime_version.trim().is_empty() {
            return Err(ProbeError::EmptyVersion);
        }

        debug!(
            timestamp = %timestamp,
            runtime_version = %runtime_version,
            "Probe report collected"
        );

        Ok(ProbeReport::new(timestamp, runtime_version))
    }

    /// Collect and write the full report to `out` in a single write, then flush.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<ProbeReport> {
        let report = self.collect()?;
        let rendered = report.to_string();

        out.write_all(rendered.as_bytes())?;
        out.flush()?;

        debug!(bytes = rendered.len(), "Probe report written");

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LINE_COUNT, SEPARATOR, SUCCESS_LINE, TITLE};
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockTimeProvider {
        current_time: i64,
        calls: AtomicUsize,
    }

    impl MockTimeProvider {
        fn new(current_time: i64) -> Self {
            Self {
                current_time,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TimeProvider for MockTimeProvider {
        fn now_millis(&self) -> i64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.current_time
        }
    }

    struct MockRuntimeInfo(&'static str);

    impl RuntimeInfo for MockRuntimeInfo {
        fn version(&self) -> String {
            self.0.to_string()
        }
    }

    /// Writer that rejects every write with the given error kind
    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "mock write failure"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn service(millis: i64, version: &'static str) -> (ProbeService, Arc<MockTimeProvider>) {
        let clock = Arc::new(MockTimeProvider::new(millis));
        let service = ProbeService::new(clock.clone(), Arc::new(MockRuntimeInfo(version)));
        (service, clock)
    }

    #[test]
    fn test_collect_reads_clock_once() {
        let (service, clock) = service(1_700_000_000_000, "rustc 1.80.0");

        let report = service.collect().unwrap();

        assert_eq!(clock.calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.runtime_version, "rustc 1.80.0");
        assert_eq!(report.timestamp, local_from_millis(1_700_000_000_000).unwrap());
    }

    #[test]
    fn test_emit_writes_full_report() {
        let (service, _) = service(1_700_000_000_000, "rustc 1.80.0");
        let mut out = Vec::new();

        let report = service.emit(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), LINE_COUNT);
        assert_eq!(lines[0], SEPARATOR);
        assert_eq!(lines[1], TITLE);
        assert_eq!(lines[3], format!("当前时间: {}", report.formatted_timestamp()));
        assert_eq!(lines[4], "Rust版本: rustc 1.80.0");
        assert_eq!(lines[5], SUCCESS_LINE);
        assert_eq!(lines[6], SEPARATOR);
    }

    #[test]
    fn test_fixed_clock_gives_identical_output() {
        let (service, _) = service(1_700_000_000_000, "rustc 1.80.0");
        let mut first = Vec::new();
        let mut second = Vec::new();

        service.emit(&mut first).unwrap();
        service.emit(&mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_clock_out_of_range() {
        let (service, _) = service(i64::MAX, "rustc 1.80.0");

        let result = service.collect();

        assert!(matches!(result, Err(ProbeError::ClockOutOfRange(ms)) if ms == i64::MAX));
    }

    #[test]
    fn test_empty_version_rejected() {
        let (service, _) = service(1_700_000_000_000, "   ");
        let mut out = Vec::new();

        let result = service.emit(&mut out);

        assert!(matches!(result, Err(ProbeError::EmptyVersion)));
        assert!(out.is_empty(), "Nothing should be written on collect failure");
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let (service, _) = service(1_700_000_000_000, "rustc 1.80.0");

        let err = service
            .emit(&mut FailingWriter(io::ErrorKind::BrokenPipe))
            .unwrap_err();

        assert!(matches!(err, ProbeError::Io(_)));
        assert!(err.is_broken_pipe());
    }
}
