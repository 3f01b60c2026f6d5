use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::date::CalendarDate;
use super::event::CategoryFilter;
use super::view::DateRange;

/// Base URL of the dashboard API.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// What happens to an open detail panel when a filter edit hides its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Filter edits never touch the selection.
    #[default]
    Retain,
    /// Close the panel once the selected event is no longer on a rendered point.
    ClearWhenHidden,
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Base URL the three datasets are fetched from
    pub api_base_url: String,

    /// Per-request timeout (native targets only)
    pub request_timeout_secs: u64,

    pub default_start: CalendarDate,

    pub default_end: CalendarDate,

    pub default_category: CategoryFilter,

    pub selection_policy: SelectionPolicy,
}

impl DashboardSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.default_range()?;
        Ok(settings)
    }

    /// The date range a fresh dashboard opens with.
    pub fn default_range(&self) -> Result<DateRange, CoreError> {
        DateRange::new(self.default_start, self.default_end)
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            default_start: CalendarDate::new(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default()),
            default_end: CalendarDate::new(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default()),
            default_category: CategoryFilter::All,
            selection_policy: SelectionPolicy::Retain,
        }
    }
}
