use crate::models::change_point::ChangePoint;
use crate::models::chart::AnnotatedPoint;
use crate::models::event::{CategoryFilter, Event};
use crate::models::price::PricePoint;
use crate::services::date_index::DateKeyIndex;
use crate::services::event_service::EventService;

/// Builds the annotated point set the chart renders.
///
/// The core lines the three datasets up; the frontend only draws them.
/// Every function here is pure: identical inputs give identical output.
pub struct ChartService {
    event_service: EventService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            event_service: EventService::new(),
        }
    }

    /// Annotate every price point with its event and change-point flag.
    ///
    /// One output point per input price, in input order. Events and change
    /// points dated on a day with no price are not rendered.
    pub fn merge<C>(
        &self,
        prices: &[PricePoint],
        events: &DateKeyIndex<&Event>,
        change_points: &DateKeyIndex<C>,
    ) -> Vec<AnnotatedPoint> {
        prices
            .iter()
            .map(|p| AnnotatedPoint {
                date: p.date,
                price: p.price,
                event: events.get(p.date).map(|e| (*e).clone()),
                is_change_point: change_points.contains(p.date),
            })
            .collect()
    }

    /// Full pipeline: category filter → date index → merge.
    pub fn annotate(
        &self,
        prices: &[PricePoint],
        events: &[Event],
        change_points: &[ChangePoint],
        filter: CategoryFilter,
    ) -> Vec<AnnotatedPoint> {
        let filtered = self.event_service.filter_by_category(events, filter);
        let event_index = DateKeyIndex::build(filtered);
        let change_point_index = DateKeyIndex::build(change_points);
        self.merge(prices, &event_index, &change_point_index)
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
