use serde::{Deserialize, Serialize};

use super::date::{CalendarDate, Dated};

/// A single price data point (date → price), one per trading date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: CalendarDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: CalendarDate, price: f64) -> Self {
        Self { date, price }
    }
}

impl Dated for PricePoint {
    fn date(&self) -> CalendarDate {
        self.date
    }
}
