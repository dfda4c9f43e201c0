/// Per-message failures of the conversion pipeline. A malformed schedule
/// entry (wrong time-pair arity) is rejected by the deserializer and
/// therefore surfaces as `Decode`. Neither variant is fatal to the
/// process; the offending message is dropped and the bridge keeps
/// listening.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("invalid legacy schedule payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("cannot serialize normalized schedule: {0}")]
    Encode(#[source] serde_json::Error),
}
