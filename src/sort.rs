//! Stable ordering of validated results.

use crate::model::RaceResult;

/// Sort results ascending by total finish time.
///
/// The sort is stable: competitors with equal totals keep their relative
/// input order, which downstream tie-breaking depends on.
pub fn by_total_time(results: &mut [RaceResult]) {
    results.sort_by(|a, b| a.total_time.cmp(&b.total_time));
}
