pub mod chart_service;
pub mod date_index;
pub mod event_service;
pub mod fetch_service;
