//! Duration values for race timing.
//!
//! Race feeds carry every duration as an `HH:MM:SS` string. [`RaceTime`] gives
//! those strings an explicit parse step and a canonical zero-padded rendering,
//! so ordering never depends on how the upstream feed happened to pad its
//! digits: comparison is component-wise and agrees with lexicographic
//! comparison of the canonical text for any value under 24 hours.

use std::fmt;

use crate::{Result, ResultsError};

/// A parsed `HH:MM:SS` duration.
///
/// Ordering is chronological. Parsing accepts any non-negative integer
/// components and re-pads them on display; range limits (hour/minute/second
/// bounds) are a plausibility concern and live in [`crate::validate`], not
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RaceTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl RaceTime {
    /// Construct a time directly from its components.
    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Parse a `:`-separated duration string.
    ///
    /// Fails unless the input splits into exactly three components, each a
    /// non-negative integer. Unpadded components (`"9:5:3"`) are accepted and
    /// re-padded on display.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() != 3 {
            return Err(ResultsError::time_parse(
                input,
                format!("expected 3 components, found {}", parts.len()),
            ));
        }

        let component = |part: &str| {
            part.parse::<u32>().map_err(|_| {
                ResultsError::time_parse(
                    input,
                    format!("component '{part}' is not a non-negative integer"),
                )
            })
        };

        Ok(Self {
            hours: component(parts[0])?,
            minutes: component(parts[1])?,
            seconds: component(parts[2])?,
        })
    }

    /// Hour component.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Minute component.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Second component.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl serde::Serialize for RaceTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for RaceTime {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw: String = serde::Deserialize::deserialize(deserializer)?;
        RaceTime::parse(&raw).map_err(serde::de::Error::custom)
    }
}
