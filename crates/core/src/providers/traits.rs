use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::change_point::ChangePoint;
use crate::models::event::Event;
use crate::models::price::PricePoint;
use crate::models::view::DateRange;

/// Where the three chart datasets come from.
///
/// Each dataset is fetched independently; a failure in one must not stop
/// the others from loading.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DashboardSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Price series restricted to `range`, ordered by date.
    async fn fetch_prices(&self, range: &DateRange) -> Result<Vec<PricePoint>, CoreError>;

    /// Every known event. Not restricted to any date range.
    async fn fetch_events(&self) -> Result<Vec<Event>, CoreError>;

    /// Every detected change point.
    async fn fetch_change_points(&self) -> Result<Vec<ChangePoint>, CoreError>;
}
