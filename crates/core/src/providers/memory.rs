use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::change_point::ChangePoint;
use crate::models::event::Event;
use crate::models::price::PricePoint;
use crate::models::view::DateRange;
use super::traits::DashboardSource;

/// Fixed in-memory datasets, for offline use and demos.
///
/// Prices are restricted to the requested range on every fetch, like the
/// HTTP service does.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    prices: Vec<PricePoint>,
    events: Vec<Event>,
    change_points: Vec<ChangePoint>,
}

impl StaticSource {
    pub fn new(mut prices: Vec<PricePoint>, events: Vec<Event>, change_points: Vec<ChangePoint>) -> Self {
        prices.sort_by_key(|p| p.date);
        Self {
            prices,
            events,
            change_points,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DashboardSource for StaticSource {
    fn name(&self) -> &str {
        "Static"
    }

    async fn fetch_prices(&self, range: &DateRange) -> Result<Vec<PricePoint>, CoreError> {
        Ok(self
            .prices
            .iter()
            .filter(|p| range.contains(p.date))
            .cloned()
            .collect())
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, CoreError> {
        Ok(self.events.clone())
    }

    async fn fetch_change_points(&self) -> Result<Vec<ChangePoint>, CoreError> {
        Ok(self.change_points.clone())
    }
}
