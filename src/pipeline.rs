//! Results pipeline state machine.
//!
//! The pipeline owns one fetch cycle: `Loading` until the source answers,
//! then `Error` (with a single collapsed message) or `Ready` (with the frozen
//! sorted results and fastest-split table). After that, the only thing that
//! ever changes is the live search term, which re-derives the displayed
//! subset without touching the frozen data or the state.

use tracing::{debug, info, warn};

use crate::model::{Discipline, RaceResult};
use crate::search;
use crate::sort;
use crate::source::ResultsSource;
use crate::splits::FastestSplits;
use crate::validate;

/// Observable pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Initial state, before the single fetch resolves.
    Loading,
    /// The fetch failed; terminal.
    Error,
    /// Results are frozen and displayable; terminal for this fetch cycle.
    Ready,
}

enum Phase {
    Loading,
    Error { message: String },
    Ready { results: Vec<RaceResult>, fastest: FastestSplits },
}

/// State machine orchestrating validation, sorting, aggregation and search.
pub struct ResultsPipeline {
    phase: Phase,
    search_term: String,
}

impl Default for ResultsPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsPipeline {
    /// Create a pipeline in its initial `Loading` state.
    pub fn new() -> Self {
        Self { phase: Phase::Loading, search_term: String::new() }
    }

    /// Build a pipeline and run its fetch cycle against the source.
    pub async fn load(source: impl ResultsSource) -> Self {
        let mut pipeline = Self::new();
        pipeline.run(source).await;
        pipeline
    }

    /// Run the single fetch cycle.
    ///
    /// Exactly one attempt, no retries, no timeout: on success the sorted
    /// results and fastest-split table freeze and the pipeline becomes
    /// `Ready`; on failure it becomes `Error` carrying the failure's display
    /// text verbatim. Calling this again after the cycle completed is a
    /// no-op.
    pub async fn run(&mut self, mut source: impl ResultsSource) {
        if !matches!(self.phase, Phase::Loading) {
            debug!("Fetch cycle already completed; ignoring");
            return;
        }

        info!("Loading results from {}", source.describe());
        let raw = match source.fetch().await {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Results load failed: {err}");
                self.phase = Phase::Error { message: err.to_string() };
                return;
            }
        };

        let received = raw.len();
        let mut results: Vec<RaceResult> = raw.into_iter().filter_map(validate::admit).collect();
        let dropped = received - results.len();
        if dropped > 0 {
            debug!("Dropped {dropped} of {received} records as implausible");
        }

        sort::by_total_time(&mut results);
        let fastest = FastestSplits::aggregate(&results);

        info!("Results ready: {} competitors", results.len());
        self.phase = Phase::Ready { results, fastest };
    }

    /// Current state.
    pub fn state(&self) -> PipelineState {
        match self.phase {
            Phase::Loading => PipelineState::Loading,
            Phase::Error { .. } => PipelineState::Error,
            Phase::Ready { .. } => PipelineState::Ready,
        }
    }

    /// Failure message, present only in the `Error` state.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error { message } => Some(message),
            _ => None,
        }
    }

    /// The live search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Update the live search term.
    ///
    /// Never transitions state; only the displayed subset derived from the
    /// frozen results changes.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The frozen, sorted result list. Empty unless `Ready`.
    pub fn sorted_results(&self) -> &[RaceResult] {
        match &self.phase {
            Phase::Ready { results, .. } => results,
            _ => &[],
        }
    }

    /// The frozen fastest-split table, once `Ready`.
    pub fn fastest_splits(&self) -> Option<&FastestSplits> {
        match &self.phase {
            Phase::Ready { fastest, .. } => Some(fastest),
            _ => None,
        }
    }

    /// Results passing the live search term, in sorted order.
    pub fn displayed_results(&self) -> Vec<&RaceResult> {
        search::filter(self.sorted_results(), &self.search_term)
    }

    /// Read-only projection for a view layer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let displayed = self
            .displayed_results()
            .into_iter()
            .map(|result| {
                let badges = match &self.phase {
                    Phase::Ready { fastest, .. } => fastest.badges_for(&result.full_name()),
                    _ => Vec::new(),
                };
                DisplayedResult { result, badges }
            })
            .collect();

        Snapshot { state: self.state(), error_message: self.error_message(), displayed }
    }
}

/// Read-only projection consumed by a view layer.
///
/// Everything in here borrows from the pipeline; nothing in it can mutate
/// the frozen results or the fastest-split table.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub state: PipelineState,
    pub error_message: Option<&'a str>,
    pub displayed: Vec<DisplayedResult<'a>>,
}

/// One displayed row plus the fastest-split badges its athlete earned.
#[derive(Debug)]
pub struct DisplayedResult<'a> {
    pub result: &'a RaceResult,
    pub badges: Vec<Discipline>,
}
