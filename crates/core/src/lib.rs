pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    chart::AnnotatedPoint,
    date::CalendarDate,
    event::{CategoryFilter, Event},
    settings::{DashboardSettings, SelectionPolicy},
    snapshot::DatasetSnapshot,
    view::{DateRange, SelectionState, ViewState},
};
use providers::traits::DashboardSource;
use services::{
    chart_service::ChartService,
    event_service::EventService,
    fetch_service::{FetchOutcome, FetchService, FetchTicket},
};
use tracing::debug;

use errors::CoreError;

/// Main entry point for the event chart core library.
///
/// Owns the view state, the last loaded datasets and the annotated points
/// derived from them. All mutation goes through the methods below, one user
/// action or fetch completion at a time.
#[must_use]
pub struct Dashboard {
    settings: DashboardSettings,
    view: ViewState,
    snapshot: DatasetSnapshot,
    points: Vec<AnnotatedPoint>,
    chart_service: ChartService,
    event_service: EventService,
    fetch_service: FetchService,
    /// Sequence number of the most recently issued fetch ticket.
    last_sequence: u64,
    /// The only ticket whose results may still be applied.
    pending: Option<FetchTicket>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("view", &self.view)
            .field("prices", &self.snapshot.prices.len())
            .field("events", &self.snapshot.events.len())
            .field("change_points", &self.snapshot.change_points.len())
            .field("pending", &self.pending)
            .finish()
    }
}

impl Dashboard {
    /// Create a dashboard with no data loaded yet.
    /// Fails if the configured default range is inverted.
    pub fn new(settings: DashboardSettings) -> Result<Self, CoreError> {
        let range = settings.default_range()?;
        let view = ViewState::new(range, settings.default_category);
        Ok(Self {
            settings,
            view,
            snapshot: DatasetSnapshot::default(),
            points: Vec::new(),
            chart_service: ChartService::new(),
            event_service: EventService::new(),
            fetch_service: FetchService::new(),
            last_sequence: 0,
            pending: None,
        })
    }

    /// Get the configuration this dashboard was created with.
    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Get the current view: date range, category filter and open event.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The datasets the current points were built from.
    /// A failed dataset keeps its last successfully loaded value here.
    #[must_use]
    pub fn snapshot(&self) -> &DatasetSnapshot {
        &self.snapshot
    }

    /// Annotated points for the chart, one per loaded price, in price order.
    /// Rebuilt after every applied fetch and every category change.
    #[must_use]
    pub fn points(&self) -> &[AnnotatedPoint] {
        &self.points
    }

    // ── Filters ─────────────────────────────────────────────────────

    /// Change the start of the date range. The new range must not be inverted.
    /// Existing data stays on screen until the next refresh completes.
    pub fn set_start_date(&mut self, start: CalendarDate) -> Result<(), CoreError> {
        self.set_date_range(start, self.view.range.end)
    }

    /// Change the end of the date range. The new range must not be inverted.
    pub fn set_end_date(&mut self, end: CalendarDate) -> Result<(), CoreError> {
        self.set_date_range(self.view.range.start, end)
    }

    /// Replace the whole date range at once.
    /// Setting the range it already has is a no-op.
    pub fn set_date_range(&mut self, start: CalendarDate, end: CalendarDate) -> Result<(), CoreError> {
        let range = DateRange::new(start, end)?;
        if range != self.view.range {
            debug!(start = %range.start, end = %range.end, "Date range changed");
            self.view.range = range;
        }
        Ok(())
    }

    /// Change the category filter. Re-annotates the loaded data; no fetch needed.
    pub fn set_category(&mut self, filter: CategoryFilter) {
        if filter != self.view.category_filter {
            debug!(category = %filter, "Category filter changed");
            self.view.category_filter = filter;
            self.recompute();
        }
    }

    /// Whether the loaded price series does not match the selected range.
    /// True before the first load and after any effective date edit.
    #[must_use]
    pub fn needs_refresh(&self) -> bool {
        self.snapshot.price_range != Some(self.view.range)
    }

    // ── Fetch Cycle ─────────────────────────────────────────────────

    /// Start a fetch cycle for the current range.
    /// Any earlier ticket that has not completed becomes stale.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.last_sequence += 1;
        let ticket = FetchTicket::new(self.last_sequence, self.view.range);
        self.pending = Some(ticket);
        ticket
    }

    /// Apply the settled results of a fetch cycle.
    ///
    /// Returns `false` and changes nothing when the ticket has been
    /// superseded by a newer one, or when the range changed since it was
    /// issued.
    pub fn complete_refresh(&mut self, ticket: FetchTicket, outcome: FetchOutcome) -> bool {
        if self.pending != Some(ticket) || *ticket.range() != self.view.range {
            debug!(
                sequence = ticket.sequence(),
                latest = self.last_sequence,
                "Discarding stale fetch results"
            );
            return false;
        }

        self.pending = None;
        self.snapshot = self.fetch_service.apply(&self.snapshot, *ticket.range(), outcome);
        self.recompute();
        true
    }

    /// Fetch all datasets for the current range from `source` and apply them.
    ///
    /// The three requests run concurrently; the merge runs once, after all of
    /// them have settled. Returns whether the results were applied.
    pub async fn refresh(&mut self, source: &dyn DashboardSource) -> bool {
        let ticket = self.begin_refresh();
        let outcome = self.fetch_service.fetch_all(source, ticket.range()).await;
        self.complete_refresh(ticket, outcome)
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Handle a click on the point at `index`.
    ///
    /// Opens the point's event in the detail panel, replacing any event that
    /// was open. Clicking a point without an event changes nothing and
    /// returns `false`.
    pub fn click_point(&mut self, index: usize) -> Result<bool, CoreError> {
        let point = self.points.get(index).ok_or(CoreError::PointNotFound(index))?;
        match &point.event {
            Some(event) => {
                self.view.selected_event = Some(event.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Open `event` in the detail panel (e.g. picked from the event list).
    /// Replaces any event that was open.
    pub fn select_event(&mut self, event: Event) {
        self.view.selected_event = Some(event);
    }

    /// Close the detail panel. A closed selection is never restored.
    pub fn close_panel(&mut self) {
        self.view.selected_event = None;
    }

    /// Get the event open in the detail panel, if any.
    #[must_use]
    pub fn selected_event(&self) -> Option<&Event> {
        self.view.selected_event.as_ref()
    }

    /// Whether the detail panel is open.
    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.view.selection_state()
    }

    // ── Event List ──────────────────────────────────────────────────

    /// Loaded events passing the category filter and inside the date range,
    /// oldest first. Unlike chart markers, this includes events on days
    /// without a price.
    #[must_use]
    pub fn visible_events(&self) -> Vec<&Event> {
        self.event_service
            .visible_events(&self.snapshot.events, self.view.category_filter, &self.view.range)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Re-run filter → index → merge over the current snapshot, then apply
    /// the selection policy.
    fn recompute(&mut self) {
        self.points = self.chart_service.annotate(
            &self.snapshot.prices,
            &self.snapshot.events,
            &self.snapshot.change_points,
            self.view.category_filter,
        );

        if self.settings.selection_policy == SelectionPolicy::ClearWhenHidden {
            if let Some(selected) = &self.view.selected_event {
                // Visible means listed, not necessarily drawn on a price point.
                let listed = self.snapshot.events.contains(selected)
                    && self.event_service.is_visible(
                        selected,
                        self.view.category_filter,
                        &self.view.range,
                    );
                if !listed {
                    debug!(title = %selected.title, "Selected event filtered out; closing panel");
                    self.view.selected_event = None;
                }
            }
        }
    }
}
