use std::sync::Arc;

use super::change_point::ChangePoint;
use super::event::Event;
use super::price::PricePoint;
use super::view::DateRange;

/// The last successfully loaded value of each dataset.
///
/// Snapshots are immutable; a completed fetch produces a new snapshot
/// sharing whichever datasets did not change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSnapshot {
    pub prices: Arc<Vec<PricePoint>>,
    pub events: Arc<Vec<Event>>,
    pub change_points: Arc<Vec<ChangePoint>>,
    /// Range the current price series was fetched for
    pub price_range: Option<DateRange>,
}

impl DatasetSnapshot {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.events.is_empty() && self.change_points.is_empty()
    }
}
