//! Fastest-split aggregation across the field.
//!
//! After validation and sorting, the engine scans every competitor's splits
//! once and keeps, per discipline, the fastest recorded time and its holder.
//! The table is computed once over the frozen sorted list and never changes
//! afterwards; the live search term has no effect on it.
//!
//! The policy is concentrated here:
//! - only [`SplitTime::Recorded`](crate::model::SplitTime) times qualify, so
//!   the feed's `00:00:00` / `23:59:59` placeholders can never win,
//! - an entry updates on a strictly better time only, so the first holder of
//!   the minimum in scan order keeps the record on ties,
//! - scan order is the sorted result order, making tie-breaks deterministic.

use serde::{Deserialize, Serialize};

use crate::model::{Discipline, RaceResult};
use crate::time::RaceTime;

/// The best recorded time for one discipline and who set it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastestSplit {
    pub time: RaceTime,
    pub athlete: String,
}

/// Per-discipline table of fastest splits.
///
/// A discipline with no qualifying time stays `None`; absence is explicit
/// rather than encoded as a placeholder time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastestSplits {
    swim: Option<FastestSplit>,
    bike: Option<FastestSplit>,
    run: Option<FastestSplit>,
}

impl FastestSplits {
    /// Scan results in order and build the fastest-split table.
    ///
    /// Callers pass the sorted result list; the scan itself only requires
    /// some deterministic order to make tie-breaking reproducible.
    pub fn aggregate(results: &[RaceResult]) -> Self {
        let mut table = Self::default();

        for result in results {
            for split in &result.splits {
                let Some(time) = split.time.recorded() else { continue };

                let entry = table.entry_mut(split.discipline);
                let strictly_better = entry.as_ref().is_none_or(|best| time < best.time);
                if strictly_better {
                    *entry = Some(FastestSplit { time, athlete: result.full_name() });
                }
            }
        }

        table
    }

    /// Fastest split for one discipline, if any qualifying time was seen.
    pub fn get(&self, discipline: Discipline) -> Option<&FastestSplit> {
        match discipline {
            Discipline::Swim => self.swim.as_ref(),
            Discipline::Bike => self.bike.as_ref(),
            Discipline::Run => self.run.as_ref(),
        }
    }

    /// Whether the given athlete holds the record for a discipline.
    ///
    /// Matching is exact on the full name, the same key the table stores.
    pub fn holds(&self, discipline: Discipline, full_name: &str) -> bool {
        self.get(discipline).is_some_and(|fastest| fastest.athlete == full_name)
    }

    /// Disciplines whose record holder exactly matches the given full name,
    /// in presentation order.
    pub fn badges_for(&self, full_name: &str) -> Vec<Discipline> {
        Discipline::ALL
            .iter()
            .copied()
            .filter(|&discipline| self.holds(discipline, full_name))
            .collect()
    }

    fn entry_mut(&mut self, discipline: Discipline) -> &mut Option<FastestSplit> {
        match discipline {
            Discipline::Swim => &mut self.swim,
            Discipline::Bike => &mut self.bike,
            Discipline::Run => &mut self.run,
        }
    }
}
