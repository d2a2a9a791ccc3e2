// RuntimeInfo implementation backed by build-time toolchain facts

use alarm_probe_core::port::RuntimeInfo;
use tracing::warn;

/// Placeholder when the compiler version could not be captured at build time
pub const UNKNOWN_RUSTC: &str = "rustc (unknown)";

/// Reports the toolchain that compiled this binary, e.g.
/// `rustc 1.80.0 (051478957 2024-07-21) [x86_64-unknown-linux-gnu]`
pub struct BuildRuntimeInfo {
    rustc_version: &'static str,
    target: &'static str,
}

impl BuildRuntimeInfo {
    pub fn new() -> Self {
        Self {
            rustc_version: env!("ALARM_PROBE_RUSTC_VERSION"),
            target: env!("ALARM_PROBE_TARGET"),
        }
    }

    /// Format a version identifier from raw parts
    fn format_version(rustc_version: &str, target: &str) -> String {
        let rustc_version = match rustc_version.trim() {
            "" => {
                warn!("Compiler version was not captured at build time");
                UNKNOWN_RUSTC
            }
            v => v,
        };

        match target.trim() {
            "" => rustc_version.to_string(),
            t => format!("{} [{}]", rustc_version, t),
        }
    }
}

impl Default for BuildRuntimeInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeInfo for BuildRuntimeInfo {
    fn version(&self) -> String {
        Self::format_version(self.rustc_version, self.target)
    }
}
