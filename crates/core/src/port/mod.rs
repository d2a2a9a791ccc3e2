// Port Layer - Interfaces for external dependencies

pub mod runtime_info;
pub mod time_provider;

// Re-exports
pub use runtime_info::RuntimeInfo;
pub use time_provider::{local_from_millis, SystemTimeProvider, TimeProvider};
