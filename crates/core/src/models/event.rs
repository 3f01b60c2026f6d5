use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

use super::chart::MarkerColor;
use super::date::{CalendarDate, Dated};

/// Category of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    /// Wars, invasions, armed attacks
    Conflict,
    /// OPEC decisions, production quotas, regulation
    Policy,
    /// Embargoes and trade sanctions
    Sanction,
    /// Recessions, financial crises, demand shocks
    Economic,
    /// Hurricanes, pandemics, industrial accidents
    Disaster,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Category; 5] = [
        Category::Conflict,
        Category::Policy,
        Category::Sanction,
        Category::Economic,
        Category::Disaster,
    ];

    /// Marker colour for events of this category.
    pub fn color(&self) -> MarkerColor {
        match self {
            Category::Conflict => MarkerColor::Red,
            Category::Policy => MarkerColor::Green,
            Category::Sanction => MarkerColor::Orange,
            Category::Economic => MarkerColor::Blue,
            Category::Disaster => MarkerColor::Blue,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Conflict => write!(f, "Conflict"),
            Category::Policy => write!(f, "Policy"),
            Category::Sanction => write!(f, "Sanction"),
            Category::Economic => write!(f, "Economic"),
            Category::Disaster => write!(f, "Disaster"),
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Category selector: the `All` sentinel or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Does an event of `category` pass this filter?
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    /// All selector options: `All` followed by every category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

/// A discrete calendar event shown as a marker on the price chart.
///
/// Events carry no identifier; two events are the same event when every
/// field matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Date the event happened (daily granularity)
    pub date: CalendarDate,

    /// Short headline shown in the detail panel
    pub title: String,

    pub category: Category,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Event {
    pub fn new(
        date: CalendarDate,
        title: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            title: title.into(),
            category,
            description: description.into(),
        }
    }
}

impl Dated for Event {
    fn date(&self) -> CalendarDate {
        self.date
    }
}
