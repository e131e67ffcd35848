//! Fixture source for canned results.

use tracing::debug;

use crate::Result;
use crate::source::ResultsSource;
use crate::wire::RawResult;

enum Payload {
    Records(Vec<RawResult>),
    Json(String),
}

/// In-memory source that replays a canned set of raw records.
///
/// Behaves exactly like the live endpoint downstream of the fetch, which
/// makes it the natural harness for tests and demos: same decode rules, same
/// validation, same sorting and aggregation, no network.
pub struct FixtureSource {
    payload: Option<Payload>,
}

impl FixtureSource {
    /// Create a source over already-decoded raw records.
    pub fn from_records(records: Vec<RawResult>) -> Self {
        Self { payload: Some(Payload::Records(records)) }
    }

    /// Create a source over a raw JSON body.
    ///
    /// The body is decoded at fetch time; anything that is not a JSON array
    /// of records fails the fetch with a decode error, exactly as a bad body
    /// from the live endpoint would.
    pub fn from_json(body: impl Into<String>) -> Self {
        Self { payload: Some(Payload::Json(body.into())) }
    }
}

#[async_trait::async_trait]
impl ResultsSource for FixtureSource {
    async fn fetch(&mut self) -> Result<Vec<RawResult>> {
        // One-shot by contract; a second fetch never happens in practice.
        let records = match self.payload.take() {
            Some(Payload::Records(records)) => records,
            Some(Payload::Json(body)) => serde_json::from_str(&body)?,
            None => Vec::new(),
        };
        debug!("Replaying {} fixture records", records.len());
        Ok(records)
    }

    fn describe(&self) -> String {
        "fixture records".to_string()
    }
}
