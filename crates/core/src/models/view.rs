use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::date::CalendarDate;
use super::event::{CategoryFilter, Event};

/// Inclusive date range selected in the filters.
///
/// Deserialization goes through [`DateRange::new`], so an inverted range
/// never gets in from JSON either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

/// Unchecked wire form of [`DateRange`].
#[derive(Deserialize)]
struct RawDateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = CoreError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Fails when `start` is after `end`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::ValidationError(format!(
                "start date ({start}) must not be after end date ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Coarse state of the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    NoSelection,
    EventSelected,
}

/// Everything the user controls in the view.
///
/// Only the dashboard coordinator mutates this, and only through explicit
/// user actions (date edit, category change, event click, panel close).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub range: DateRange,
    pub category_filter: CategoryFilter,
    /// The event opened in the detail panel, if any
    pub selected_event: Option<Event>,
}

impl ViewState {
    pub fn new(range: DateRange, category_filter: CategoryFilter) -> Self {
        Self {
            range,
            category_filter,
            selected_event: None,
        }
    }

    pub fn selection_state(&self) -> SelectionState {
        match self.selected_event {
            Some(_) => SelectionState::EventSelected,
            None => SelectionState::NoSelection,
        }
    }
}
