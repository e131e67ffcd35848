//! Type-safe Rust library for endurance race results.
//!
//! Finishline turns a raw multi-discipline results feed into displayable
//! standings: it validates competitor records, orders them deterministically
//! by finishing time, finds the fastest split per discipline, and supports
//! live substring search over the field.
//!
//! # Features
//!
//! - **One-shot loading**: a single fetch per pipeline, no hidden retries
//! - **Deterministic ordering**: stable sort with an explicit tie-break policy
//! - **Fastest splits**: per-discipline records with placeholder exclusion
//! - **Pluggable sources**: live HTTP endpoint or canned fixtures
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use finishline::Finishline;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut pipeline = Finishline::fetch("https://example.com/api/results").await;
//!     pipeline.set_search_term("frodeno");
//!
//!     for row in pipeline.snapshot().displayed {
//!         println!("{} {}", row.result.full_name(), row.result.total_time);
//!     }
//! }
//! ```

// Core types and error handling
mod error;
pub mod model;
pub mod time;
pub mod wire;

// Processing stages
pub mod search;
pub mod sort;
pub mod splits;
pub mod validate;

// Sources and orchestration
pub mod pipeline;
pub mod source;
pub mod sources;

// Core exports
pub use error::{Result, ResultsError};
pub use model::{Discipline, RaceResult, Split, SplitTime};
pub use pipeline::{DisplayedResult, PipelineState, ResultsPipeline, Snapshot};
pub use splits::{FastestSplit, FastestSplits};
pub use time::RaceTime;

// Source exports
pub use source::ResultsSource;
pub use sources::{FixtureSource, HttpSource};

/// Unified entry point for loading race results.
///
/// This factory provides a consistent API for the two built-in sources:
/// the live HTTP endpoint and canned fixture data. Both return a pipeline
/// that has already run its single fetch cycle, so it is either `Ready` or
/// `Error`; failures live in the pipeline state, not in a `Result`.
///
/// # Examples
///
/// ## Live endpoint
/// ```rust,no_run
/// use finishline::Finishline;
///
/// #[tokio::main]
/// async fn main() {
///     let pipeline = Finishline::fetch("https://example.com/api/results").await;
///     println!("{:?}", pipeline.state());
/// }
/// ```
///
/// ## Canned records
/// ```rust
/// use finishline::{Finishline, PipelineState};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let pipeline = Finishline::from_json("[]").await;
///     assert_eq!(pipeline.state(), PipelineState::Ready);
/// }
/// ```
pub struct Finishline;

impl Finishline {
    /// Load results from a live HTTP endpoint.
    ///
    /// One `GET`, one attempt. Network failure, a non-2xx status, or an
    /// undecodable body all land the returned pipeline in its `Error` state
    /// with a single human-readable message.
    pub async fn fetch(url: impl Into<String>) -> ResultsPipeline {
        ResultsPipeline::load(HttpSource::new(url)).await
    }

    /// Load results from a raw JSON array body.
    pub async fn from_json(body: impl Into<String>) -> ResultsPipeline {
        ResultsPipeline::load(FixtureSource::from_json(body)).await
    }

    /// Load results from already-decoded raw records.
    pub async fn from_records(records: Vec<wire::RawResult>) -> ResultsPipeline {
        ResultsPipeline::load(FixtureSource::from_records(records)).await
    }
}
