//! Plausibility screening for incoming records.
//!
//! Screening is row-local and silent: a record whose total time does not
//! parse or falls outside plausible bounds is dropped entirely, and the
//! surrounding load carries on with whatever survives. Only the pipeline
//! reports drop counts, and only to the log.

use crate::model::{Discipline, RaceResult, Split, SplitTime};
use crate::time::RaceTime;
use crate::wire::RawResult;

/// Exclusive upper bound on the hour component of a plausible finish.
///
/// Finishes at or beyond 23 hours are treated as data errors, as is any
/// minute or second component outside its usual range.
const MAX_PLAUSIBLE_HOURS: u32 = 23;

/// Check a parsed total time against plausible bounds.
pub fn plausible_total(time: &RaceTime) -> bool {
    time.hours() < MAX_PLAUSIBLE_HOURS && time.minutes() < 60 && time.seconds() < 60
}

/// Screen one raw record, converting it into the core model.
///
/// Returns `None` when the total time does not parse or is implausible.
/// Splits with unrecognized names are discarded; split times that do not
/// parse survive as [`SplitTime::NotRecorded`].
pub fn admit(raw: RawResult) -> Option<RaceResult> {
    let total_time = RaceTime::parse(&raw.total_time).ok()?;
    if !plausible_total(&total_time) {
        return None;
    }

    let splits = raw
        .splits
        .into_iter()
        .filter_map(|split| {
            Discipline::from_wire(&split.name)
                .map(|discipline| Split { discipline, time: SplitTime::from_wire(&split.time) })
        })
        .collect();

    Some(RaceResult {
        first_name: raw.first_name,
        last_name: raw.last_name,
        gender: raw.gender,
        division: raw.division,
        nationality: raw.nationality,
        total_time,
        splits,
    })
}
