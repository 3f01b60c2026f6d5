use serde::{Deserialize, Serialize};

use super::date::{CalendarDate, Dated};

/// A date flagged as a detected structural break in the price series.
///
/// Change points are computed offline; the core only needs the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangePoint {
    pub date: CalendarDate,
}

impl ChangePoint {
    pub fn new(date: CalendarDate) -> Self {
        Self { date }
    }
}

impl Dated for ChangePoint {
    fn date(&self) -> CalendarDate {
        self.date
    }
}
