//! Turning search results into display records
//!
//! The renderer computes the local clock of every result and hands the
//! records to a [`PresentationSink`]. An empty result list is reported as a
//! distinct [`RenderOutcome::NoRecommendations`] state.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::Result;
use crate::models::{DestinationRecord, DisplayRecord};
use crate::time;

pub const NO_RECOMMENDATIONS_MESSAGE: &str =
    "No recommendations found. Try searching for \"beach\", \"temple\", or \"country\".";

/// Result of rendering one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderOutcome {
    Recommendations { results: Vec<DisplayRecord> },
    NoRecommendations { message: String },
}

impl RenderOutcome {
    /// Display records, empty for the no-recommendations state
    #[must_use]
    pub fn records(&self) -> &[DisplayRecord] {
        match self {
            RenderOutcome::Recommendations { results } => results,
            RenderOutcome::NoRecommendations { .. } => &[],
        }
    }
}

/// Presentation layer receiving rendered results
pub trait PresentationSink {
    fn show_recommendations(&mut self, records: &[DisplayRecord]) -> Result<()>;

    fn show_no_recommendations(&mut self, message: &str) -> Result<()>;

    /// Bring the rendered results into view
    fn bring_into_view(&mut self) -> Result<()>;
}

/// Renders results with clocks taken at a single instant
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultRenderer {
    fixed_instant: Option<DateTime<Utc>>,
}

impl ResultRenderer {
    /// Renderer using the current time at each render
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer pinned to a fixed instant
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            fixed_instant: Some(instant),
        }
    }

    #[must_use]
    pub fn render(&self, results: Vec<DestinationRecord>) -> RenderOutcome {
        if results.is_empty() {
            return RenderOutcome::NoRecommendations {
                message: NO_RECOMMENDATIONS_MESSAGE.to_string(),
            };
        }

        let instant = self.fixed_instant.unwrap_or_else(Utc::now);
        let records = results
            .into_iter()
            .map(|destination| {
                let current_time = if destination.has_time_zone() {
                    time::local_time_at(&destination.time_zone, instant)
                } else {
                    String::new()
                };
                DisplayRecord {
                    destination,
                    current_time,
                }
            })
            .collect();

        RenderOutcome::Recommendations { results: records }
    }

    /// Render and push the outcome to `sink`
    pub fn present<S: PresentationSink>(
        &self,
        sink: &mut S,
        results: Vec<DestinationRecord>,
    ) -> Result<RenderOutcome> {
        let outcome = self.render(results);
        match &outcome {
            RenderOutcome::Recommendations { results } => {
                debug!("Presenting {} recommendations", results.len());
                sink.show_recommendations(results)?;
            }
            RenderOutcome::NoRecommendations { message } => {
                debug!("Presenting empty result state");
                sink.show_no_recommendations(message)?;
            }
        }
        sink.bring_into_view()?;
        Ok(outcome)
    }
}
