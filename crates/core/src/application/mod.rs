// Application Layer - Use cases

pub mod probe;

pub use probe::ProbeService;
