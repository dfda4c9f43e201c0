/// Outcome of feeding one observed override temperature to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeDecision {
    /// First observation ever; remembered, no downstream action.
    Initialized,
    /// Same value as last time; no downstream action.
    Unchanged,
    /// Value differs from the last one; the caller must publish it.
    Changed(f64),
}

/// Holds the last known expected temperature for the lifetime of the
/// process and decides whether a new observation warrants an override
/// command. "Never observed" is an explicit `None` rather than a zero
/// sentinel, so a legitimate first reading of `0.0` initializes the
/// tracker like any other value.
///
/// Not synchronized: the single message-processing task owns the
/// tracker, and arrival order is observation order.
#[derive(Debug, Default)]
pub struct OverrideTracker {
    expected: Option<f64>,
}

impl OverrideTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, value: f64) -> ChangeDecision {
        match self.expected {
            None => {
                self.expected = Some(value);
                ChangeDecision::Initialized
            }
            Some(expected) if expected == value => ChangeDecision::Unchanged,
            Some(_) => {
                self.expected = Some(value);
                ChangeDecision::Changed(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_initializes() {
        let mut tracker = OverrideTracker::new();
        assert_eq!(tracker.observe(20.0), ChangeDecision::Initialized);
    }

    #[test]
    fn test_zero_is_a_valid_first_observation() {
        let mut tracker = OverrideTracker::new();
        assert_eq!(tracker.observe(0.0), ChangeDecision::Initialized);
        assert_eq!(tracker.observe(0.0), ChangeDecision::Unchanged);
        assert_eq!(tracker.observe(19.0), ChangeDecision::Changed(19.0));
    }

    #[test]
    fn test_repeated_value_is_unchanged() {
        let mut tracker = OverrideTracker::new();
        tracker.observe(20.0);
        assert_eq!(tracker.observe(20.0), ChangeDecision::Unchanged);
        assert_eq!(tracker.observe(20.0), ChangeDecision::Unchanged);
    }

    #[test]
    fn test_change_is_detected_once() {
        let mut tracker = OverrideTracker::new();
        assert_eq!(tracker.observe(5.0), ChangeDecision::Initialized);
        assert_eq!(tracker.observe(6.5), ChangeDecision::Changed(6.5));
        assert_eq!(tracker.observe(6.5), ChangeDecision::Unchanged);
        assert_eq!(tracker.observe(5.0), ChangeDecision::Changed(5.0));
    }
}
