// Runtime Info Port

/// Source of the runtime version identifier printed by the probe
pub trait RuntimeInfo: Send + Sync {
    /// Version string of the runtime/toolchain that produced this binary
    fn version(&self) -> String;
}
