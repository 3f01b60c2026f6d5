use crate::models::event::{CategoryFilter, Event};
use crate::models::view::DateRange;

/// Read-only queries over the fetched event list.
///
/// Nothing here mutates its input; results borrow from it.
pub struct EventService;

impl EventService {
    pub fn new() -> Self {
        Self
    }

    /// Events passing `filter`. `CategoryFilter::All` passes everything.
    pub fn filter_by_category<'a>(&self, events: &'a [Event], filter: CategoryFilter) -> Vec<&'a Event> {
        events
            .iter()
            .filter(|e| filter.matches(e.category))
            .collect()
    }

    /// Does `event` pass `filter` and fall inside `range` (inclusive)?
    pub fn is_visible(&self, event: &Event, filter: CategoryFilter, range: &DateRange) -> bool {
        filter.matches(event.category) && range.contains(event.date)
    }

    /// Events passing `filter` and dated inside `range`, oldest first.
    /// Events on the same day keep their input order.
    pub fn visible_events<'a>(
        &self,
        events: &'a [Event],
        filter: CategoryFilter,
        range: &DateRange,
    ) -> Vec<&'a Event> {
        let mut visible: Vec<&Event> = events
            .iter()
            .filter(|e| self.is_visible(e, filter, range))
            .collect();
        visible.sort_by_key(|e| e.date);
        visible
    }
}

impl Default for EventService {
    fn default() -> Self {
        Self::new()
    }
}
