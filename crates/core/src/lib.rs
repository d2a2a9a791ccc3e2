// Alarm Probe Core - Report model, ports and probe service
// NO process spawning or stdout access (hexagonal layout)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{ProbeError, Result};
