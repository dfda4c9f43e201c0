use crate::models::{DayEntry, LegacyEntry, LegacySchedule, Schedule};

/// Maps a legacy schedule document onto the normalized shape the
/// downstream controller consumes. Pure and total: every `free` and
/// `work` entry maps one-to-one, in source order, and `other` passes
/// through as the default temperature. Structural problems are rejected
/// during decoding, before this function runs.
pub fn convert(legacy: &LegacySchedule) -> Schedule {
    let schedule = Schedule {
        freeday: legacy.free.iter().map(to_day_entry).collect(),
        workday: legacy.work.iter().map(to_day_entry).collect(),
        default_temperature: legacy.other,
    };

    tracing::debug!("parsed schedule: {:?}", schedule);

    schedule
}

fn to_day_entry(entry: &LegacyEntry) -> DayEntry {
    DayEntry {
        from: entry.from.to_string(),
        to: entry.to.to_string(),
        temperature: entry.temp,
    }
}
