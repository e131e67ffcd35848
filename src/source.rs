//! Source trait for results data.

use crate::Result;
use crate::wire::RawResult;

/// Trait for results data sources.
///
/// Sources abstract over where the raw competitor records come from (a live
/// HTTP endpoint, canned fixtures) and own their transport details. The
/// contract is one-shot: the pipeline calls [`fetch`](ResultsSource::fetch)
/// exactly once per lifetime, with no retries and no timeout layered on top.
#[async_trait::async_trait]
pub trait ResultsSource: Send + 'static {
    /// Fetch the complete set of raw records.
    ///
    /// Returns:
    /// - `Ok(records)` - The full feed, possibly empty
    /// - `Err(e)` - Transport, status, or decode failure; fatal to the load
    async fn fetch(&mut self) -> Result<Vec<RawResult>>;

    /// Human-readable description of where the records come from.
    ///
    /// Used for lifecycle logging only.
    fn describe(&self) -> String;
}
