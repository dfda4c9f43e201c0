use crate::errors::ScheduleError;
use crate::models::LegacySchedule;
use crate::services::converter::convert;
use crate::services::override_tracker::{ChangeDecision, OverrideTracker};

/// What one inbound message produces: the encoded normalized schedule
/// (published retained) and, when the expected temperature changed, an
/// override command string (published non-retained).
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub schedule_json: Vec<u8>,
    pub override_command: Option<String>,
}

/// Per-message orchestration, kept free of any transport concern so the
/// end-to-end behavior is testable without a broker. Owns the
/// [`OverrideTracker`]; the single owner is what makes its state
/// transitions follow message arrival order.
#[derive(Debug, Default)]
pub struct SchedulePipeline {
    tracker: OverrideTracker,
}

impl SchedulePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode, convert, encode, then feed the override temperature to
    /// the tracker. A payload that fails to decode returns before any
    /// tracker mutation, so a poison message cannot corrupt the
    /// expected-temperature state.
    pub fn handle(&mut self, payload: &[u8]) -> Result<PipelineOutput, ScheduleError> {
        let legacy = LegacySchedule::from_payload(payload)?;

        let schedule = convert(&legacy);
        let schedule_json = serde_json::to_vec(&schedule).map_err(ScheduleError::Encode)?;

        let override_command = match self.tracker.observe(legacy.override_.temp) {
            ChangeDecision::Initialized => {
                tracing::info!(
                    "initializing expected temperature to {:.2}, no action",
                    legacy.override_.temp
                );
                None
            }
            ChangeDecision::Unchanged => None,
            ChangeDecision::Changed(value) => {
                tracing::info!("setting expected temperature to {:.2}", value);
                Some(format!("{value:.2}"))
            }
        };

        Ok(PipelineOutput {
            schedule_json,
            override_command,
        })
    }
}
