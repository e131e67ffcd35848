//! Core data model for race results.
//!
//! These are the validated, render-agnostic types the engine works on. Raw
//! endpoint records ([`crate::wire`]) are converted into this model by
//! [`crate::validate`]; everything downstream (sorting, aggregation, search,
//! the view projection) reads these types only.

use serde::{Deserialize, Serialize};

use crate::time::RaceTime;

/// Wire value marking a split that was never recorded.
const NOT_RECORDED: RaceTime = RaceTime::from_hms(0, 0, 0);

/// Wire placeholder for missing data, the worst representable time under 24h.
const WORST_PLACEHOLDER: RaceTime = RaceTime::from_hms(23, 59, 59);

/// The three timed legs of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Swim,
    Bike,
    Run,
}

impl Discipline {
    /// All disciplines in presentation order.
    pub const ALL: [Discipline; 3] = [Discipline::Swim, Discipline::Bike, Discipline::Run];

    /// Map a feed split name onto a discipline.
    ///
    /// Returns `None` for any name outside the recognized set; such splits
    /// are ignored by the engine.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "swim_time" => Some(Discipline::Swim),
            "bike_time" => Some(Discipline::Bike),
            "run_time" => Some(Discipline::Run),
            _ => None,
        }
    }

    /// Short lowercase label used for badges.
    pub fn label(self) -> &'static str {
        match self {
            Discipline::Swim => "swim",
            Discipline::Bike => "bike",
            Discipline::Run => "run",
        }
    }
}

/// A discipline checkpoint time, or its explicit absence.
///
/// The feed marks unrecorded splits with `00:00:00` and fills missing data
/// with the `23:59:59` placeholder; both decode to `NotRecorded`, as does a
/// time string that fails to parse. A bad split never disqualifies the record
/// it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitTime {
    Recorded(RaceTime),
    NotRecorded,
}

impl SplitTime {
    /// Decode a feed time string into a recorded time or its absence.
    pub fn from_wire(raw: &str) -> Self {
        match RaceTime::parse(raw) {
            Ok(time) if time == NOT_RECORDED || time == WORST_PLACEHOLDER => {
                SplitTime::NotRecorded
            }
            Ok(time) => SplitTime::Recorded(time),
            Err(_) => SplitTime::NotRecorded,
        }
    }

    /// The recorded time, if there is one.
    pub fn recorded(self) -> Option<RaceTime> {
        match self {
            SplitTime::Recorded(time) => Some(time),
            SplitTime::NotRecorded => None,
        }
    }
}

/// One recognized checkpoint within a competitor's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub discipline: Discipline,
    pub time: SplitTime,
}

/// One competitor's validated entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub division: String,
    pub nationality: String,
    pub total_time: RaceTime,
    pub splits: Vec<Split>,
}

impl RaceResult {
    /// Full athlete name, also the exact-match key for fastest-split badges.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
