use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::CalendarDate;
use super::event::Event;

/// Radius of an event marker.
pub const EVENT_MARKER_RADIUS: u32 = 6;

/// Radius of a change-point marker.
pub const CHANGE_POINT_MARKER_RADIUS: u32 = 4;

/// A single data point for chart rendering.
///
/// The core generates these; the frontend only renders them. A fresh set
/// is built on every merge and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoint {
    pub date: CalendarDate,

    pub price: f64,

    /// The event on this date that passed the active category filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,

    /// Whether this date is a detected structural break
    pub is_change_point: bool,
}

impl AnnotatedPoint {
    /// The marker to draw on this point, if any.
    ///
    /// An event marker wins over a change-point marker on the same date.
    pub fn marker(&self) -> Option<Marker> {
        if let Some(event) = &self.event {
            return Some(Marker {
                kind: MarkerKind::Event,
                color: event.category.color(),
                radius: EVENT_MARKER_RADIUS,
            });
        }
        if self.is_change_point {
            return Some(Marker {
                kind: MarkerKind::ChangePoint,
                color: MarkerColor::Purple,
                radius: CHANGE_POINT_MARKER_RADIUS,
            });
        }
        None
    }
}

/// What a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    Event,
    ChangePoint,
}

/// A dot drawn over the price line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub color: MarkerColor,
    pub radius: u32,
}

impl Marker {
    /// Only event markers open the detail panel.
    pub fn is_clickable(&self) -> bool {
        self.kind == MarkerKind::Event
    }
}

/// Marker palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Green,
    Orange,
    Blue,
    Purple,
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerColor::Red => write!(f, "red"),
            MarkerColor::Green => write!(f, "green"),
            MarkerColor::Orange => write!(f, "orange"),
            MarkerColor::Blue => write!(f, "blue"),
            MarkerColor::Purple => write!(f, "purple"),
        }
    }
}
