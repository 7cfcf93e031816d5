pub mod app_config;
pub mod probe_config;

pub use app_config::{Invocation, usage};
pub use probe_config::ProbeSchedule;
