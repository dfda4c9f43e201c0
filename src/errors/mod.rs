pub mod bridge;
pub mod schedule;

pub use bridge::BridgeError;
pub use schedule::ScheduleError;
