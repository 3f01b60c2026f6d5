use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::CoreError;
use crate::models::change_point::ChangePoint;
use crate::models::event::Event;
use crate::models::price::PricePoint;
use crate::models::snapshot::DatasetSnapshot;
use crate::models::view::DateRange;
use crate::providers::traits::DashboardSource;

/// Identifies one fetch cycle.
///
/// Issued by the dashboard when a refresh starts. Results are only applied
/// if the ticket is still the latest one and its range is still the
/// selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    sequence: u64,
    range: DateRange,
}

impl FetchTicket {
    pub(crate) fn new(sequence: u64, range: DateRange) -> Self {
        Self { sequence, range }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }
}

/// Results of one fetch cycle. Each dataset succeeds or fails on its own.
#[derive(Debug)]
pub struct FetchOutcome {
    pub prices: Result<Vec<PricePoint>, CoreError>,
    pub events: Result<Vec<Event>, CoreError>,
    pub change_points: Result<Vec<ChangePoint>, CoreError>,
}

impl FetchOutcome {
    /// Number of datasets that failed to load.
    pub fn failures(&self) -> usize {
        [self.prices.is_err(), self.events.is_err(), self.change_points.is_err()]
            .into_iter()
            .filter(|failed| *failed)
            .count()
    }
}

/// Runs fetch cycles against a [`DashboardSource`].
pub struct FetchService;

impl FetchService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch all three datasets concurrently and wait for every one to settle.
    pub async fn fetch_all(&self, source: &dyn DashboardSource, range: &DateRange) -> FetchOutcome {
        let (prices, events, change_points) = futures::join!(
            source.fetch_prices(range),
            source.fetch_events(),
            source.fetch_change_points()
        );
        FetchOutcome {
            prices,
            events,
            change_points,
        }
    }

    /// Build the next snapshot from `previous` and a settled fetch.
    ///
    /// Successful datasets replace their previous value; a failed dataset
    /// keeps whatever `previous` held.
    pub fn apply(&self, previous: &DatasetSnapshot, range: DateRange, outcome: FetchOutcome) -> DatasetSnapshot {
        let mut next = previous.clone();

        match outcome.prices {
            Ok(prices) => {
                next.prices = Arc::new(prices);
                next.price_range = Some(range);
            }
            Err(e) => warn!(dataset = "prices", error = %e, "Fetch failed; keeping previous data"),
        }
        match outcome.events {
            Ok(events) => next.events = Arc::new(events),
            Err(e) => warn!(dataset = "events", error = %e, "Fetch failed; keeping previous data"),
        }
        match outcome.change_points {
            Ok(change_points) => next.change_points = Arc::new(change_points),
            Err(e) => warn!(dataset = "change_points", error = %e, "Fetch failed; keeping previous data"),
        }

        info!(
            start = %range.start,
            end = %range.end,
            prices = next.prices.len(),
            events = next.events.len(),
            change_points = next.change_points.len(),
            "Datasets refreshed"
        );

        next
    }
}

impl Default for FetchService {
    fn default() -> Self {
        Self::new()
    }
}
