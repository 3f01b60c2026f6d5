pub mod change_point;
pub mod chart;
pub mod date;
pub mod event;
pub mod price;
pub mod settings;
pub mod snapshot;
pub mod view;
