// Alarm Probe Infrastructure - System Adapters
// reason: process-level facts the core must not reach for itself

pub mod runtime_info_impl;

pub use runtime_info_impl::BuildRuntimeInfo;
