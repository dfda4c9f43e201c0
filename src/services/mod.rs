mod bridge_service;
mod converter;
mod override_tracker;
mod pipeline;

pub use bridge_service::BridgeService;
pub use converter::convert;
pub use override_tracker::{ChangeDecision, OverrideTracker};
pub use pipeline::{PipelineOutput, SchedulePipeline};
