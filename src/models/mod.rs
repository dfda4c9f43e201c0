mod schedule;

pub use schedule::{DayEntry, LegacyEntry, LegacyOverride, LegacySchedule, Schedule, TimePair};
