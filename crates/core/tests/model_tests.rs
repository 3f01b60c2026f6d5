use event_chart_core::errors::CoreError;
use event_chart_core::models::chart::{AnnotatedPoint, MarkerColor, MarkerKind};
use event_chart_core::models::date::CalendarDate;
use event_chart_core::models::event::{Category, CategoryFilter, Event};
use event_chart_core::models::settings::{DashboardSettings, SelectionPolicy, DEFAULT_API_BASE_URL};
use event_chart_core::models::view::{DateRange, SelectionState, ViewState};

fn d(y: i32, m: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, day).unwrap()
}

fn conflict(date: CalendarDate, title: &str) -> Event {
    Event::new(date, title, Category::Conflict, "")
}

// ═══════════════════════════════════════════════════════════════════
//  CalendarDate
// ═══════════════════════════════════════════════════════════════════

mod calendar_date {
    use super::*;

    #[test]
    fn parse_iso() {
        assert_eq!(CalendarDate::parse("2020-03-01").unwrap(), d(2020, 3, 1));
    }

    #[test]
    fn parse_iso_timestamp_drops_time() {
        assert_eq!(CalendarDate::parse("2020-03-01T00:00:00.000Z").unwrap(), d(2020, 3, 1));
        assert_eq!(CalendarDate::parse("2020-03-01T23:59:59").unwrap(), d(2020, 3, 1));
    }

    #[test]
    fn parse_space_separated_timestamp() {
        assert_eq!(CalendarDate::parse("2020-03-01 00:00:00").unwrap(), d(2020, 3, 1));
    }

    #[test]
    fn parse_day_first_slash() {
        assert_eq!(CalendarDate::parse("01/03/2020").unwrap(), d(2020, 3, 1));
    }

    #[test]
    fn parse_day_first_dash() {
        assert_eq!(CalendarDate::parse("01-03-2020").unwrap(), d(2020, 3, 1));
    }

    #[test]
    fn parse_month_abbreviation_four_digit_year() {
        assert_eq!(CalendarDate::parse("01-Mar-2020").unwrap(), d(2020, 3, 1));
    }

    #[test]
    fn parse_month_abbreviation_two_digit_year() {
        assert_eq!(CalendarDate::parse("20-May-87").unwrap(), d(1987, 5, 20));
        assert_eq!(CalendarDate::parse("14-Nov-22").unwrap(), d(2022, 11, 14));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(CalendarDate::parse("  2020-03-01\n").unwrap(), d(2020, 3, 1));
    }

    #[test]
    fn different_layouts_normalize_to_same_date() {
        let iso = CalendarDate::parse("2020-01-02").unwrap();
        let day_first = CalendarDate::parse("02/01/2020").unwrap();
        let stamp = CalendarDate::parse("2020-01-02T00:00:00").unwrap();
        assert_eq!(iso, day_first);
        assert_eq!(iso, stamp);
    }

    #[test]
    fn two_digit_numeric_year_rejected() {
        assert!(CalendarDate::parse("01-03-20").is_err());
    }

    #[test]
    fn invalid_strings_rejected() {
        for raw in ["", "not a date", "2020-13-01", "2020-02-30", "32/01/2020"] {
            let err = CalendarDate::parse(raw).unwrap_err();
            assert!(matches!(err, CoreError::InvalidDate(ref s) if s == raw), "{raw}");
        }
    }

    #[test]
    fn from_ymd_rejects_impossible_date() {
        assert!(CalendarDate::from_ymd(2021, 2, 29).is_none());
        assert!(CalendarDate::from_ymd(2020, 2, 29).is_some());
    }

    #[test]
    fn from_str() {
        let date: CalendarDate = "2020-03-01".parse().unwrap();
        assert_eq!(date, d(2020, 3, 1));
    }

    #[test]
    fn display_is_iso() {
        assert_eq!(d(2020, 3, 1).to_string(), "2020-03-01");
        assert_eq!(CalendarDate::parse("05/07/1999").unwrap().to_string(), "1999-07-05");
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(d(2019, 12, 31) < d(2020, 1, 1));
        assert!(d(2020, 1, 2) > d(2020, 1, 1));
    }

    #[test]
    fn serializes_as_iso_string() {
        assert_eq!(serde_json::to_string(&d(2020, 3, 1)).unwrap(), "\"2020-03-01\"");
    }

    #[test]
    fn deserializes_any_accepted_layout() {
        let date: CalendarDate = serde_json::from_str("\"01/03/2020\"").unwrap();
        assert_eq!(date, d(2020, 3, 1));
    }

    #[test]
    fn deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<CalendarDate>("\"yesterday\"").is_err());
        assert!(serde_json::from_str::<CalendarDate>("20200301").is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Category
// ═══════════════════════════════════════════════════════════════════

mod category {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Category::Conflict.to_string(), "Conflict");
        assert_eq!(Category::Policy.to_string(), "Policy");
        assert_eq!(Category::Sanction.to_string(), "Sanction");
        assert_eq!(Category::Economic.to_string(), "Economic");
        assert_eq!(Category::Disaster.to_string(), "Disaster");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("conflict".parse::<Category>().unwrap(), Category::Conflict);
        assert_eq!("SANCTION".parse::<Category>().unwrap(), Category::Sanction);
        assert_eq!(" Policy ".parse::<Category>().unwrap(), Category::Policy);
    }

    #[test]
    fn parse_unknown() {
        let err = "War".parse::<Category>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory(ref s) if s == "War"));
    }

    #[test]
    fn all_lists_every_category_once() {
        assert_eq!(Category::ALL.len(), 5);
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn colors() {
        assert_eq!(Category::Conflict.color(), MarkerColor::Red);
        assert_eq!(Category::Policy.color(), MarkerColor::Green);
        assert_eq!(Category::Sanction.color(), MarkerColor::Orange);
        assert_eq!(Category::Economic.color(), MarkerColor::Blue);
        assert_eq!(Category::Disaster.color(), MarkerColor::Blue);
    }

    #[test]
    fn serde_json() {
        assert_eq!(serde_json::to_string(&Category::Economic).unwrap(), "\"Economic\"");
        let back: Category = serde_json::from_str("\"disaster\"").unwrap();
        assert_eq!(back, Category::Disaster);
        assert!(serde_json::from_str::<Category>("\"Weather\"").is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CategoryFilter
// ═══════════════════════════════════════════════════════════════════

mod category_filter {
    use super::*;

    #[test]
    fn default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn all_matches_everything() {
        for c in Category::ALL {
            assert!(CategoryFilter::All.matches(c));
        }
    }

    #[test]
    fn only_matches_single_category() {
        let filter = CategoryFilter::Only(Category::Policy);
        assert!(filter.matches(Category::Policy));
        assert!(!filter.matches(Category::Conflict));
        assert!(!filter.matches(Category::Disaster));
    }

    #[test]
    fn parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Sanction".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Sanction)
        );
        assert!("Everything".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(CategoryFilter::Only(Category::Economic).to_string(), "Economic");
    }

    #[test]
    fn from_category() {
        assert_eq!(CategoryFilter::from(Category::Conflict), CategoryFilter::Only(Category::Conflict));
    }

    #[test]
    fn options_start_with_all() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[1], CategoryFilter::Only(Category::Conflict));
        assert_eq!(options[5], CategoryFilter::Only(Category::Disaster));
    }

    #[test]
    fn serde_json_uses_selector_strings() {
        assert_eq!(serde_json::to_string(&CategoryFilter::All).unwrap(), "\"All\"");
        assert_eq!(
            serde_json::to_string(&CategoryFilter::Only(Category::Policy)).unwrap(),
            "\"Policy\""
        );
        let back: CategoryFilter = serde_json::from_str("\"Conflict\"").unwrap();
        assert_eq!(back, CategoryFilter::Only(Category::Conflict));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Event
// ═══════════════════════════════════════════════════════════════════

mod event {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let e = Event::new(d(1990, 8, 2), "Iraq invades Kuwait", Category::Conflict, "Gulf War begins");
        assert_eq!(e.date, d(1990, 8, 2));
        assert_eq!(e.title, "Iraq invades Kuwait");
        assert_eq!(e.category, Category::Conflict);
        assert_eq!(e.description, "Gulf War begins");
    }

    #[test]
    fn deserialize_service_shape() {
        let json = r#"{"date":"2020-01-02","title":"X","category":"Conflict","description":"desc"}"#;
        let e: Event = serde_json::from_str(json).unwrap();
        assert_eq!(e, Event::new(d(2020, 1, 2), "X", Category::Conflict, "desc"));
    }

    #[test]
    fn description_defaults_to_empty() {
        let json = r#"{"date":"2020-01-02","title":"X","category":"Policy"}"#;
        let e: Event = serde_json::from_str(json).unwrap();
        assert_eq!(e.description, "");
    }

    #[test]
    fn missing_category_is_an_error() {
        let json = r#"{"date":"2020-01-02","title":"X"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(conflict(d(2020, 1, 2), "X"), conflict(d(2020, 1, 2), "X"));
        assert_ne!(conflict(d(2020, 1, 2), "X"), conflict(d(2020, 1, 2), "Y"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AnnotatedPoint markers
// ═══════════════════════════════════════════════════════════════════

mod annotated_point {
    use super::*;

    fn point(event: Option<Event>, is_change_point: bool) -> AnnotatedPoint {
        AnnotatedPoint {
            date: d(2020, 1, 1),
            price: 50.0,
            event,
            is_change_point,
        }
    }

    #[test]
    fn plain_point_has_no_marker() {
        assert!(point(None, false).marker().is_none());
    }

    #[test]
    fn event_marker_uses_category_color() {
        let e = Event::new(d(2020, 1, 1), "OPEC cut", Category::Policy, "");
        let marker = point(Some(e), false).marker().unwrap();
        assert_eq!(marker.kind, MarkerKind::Event);
        assert_eq!(marker.color, MarkerColor::Green);
        assert_eq!(marker.radius, 6);
        assert!(marker.is_clickable());
    }

    #[test]
    fn change_point_marker() {
        let marker = point(None, true).marker().unwrap();
        assert_eq!(marker.kind, MarkerKind::ChangePoint);
        assert_eq!(marker.color, MarkerColor::Purple);
        assert_eq!(marker.radius, 4);
        assert!(!marker.is_clickable());
    }

    #[test]
    fn event_wins_over_change_point() {
        let marker = point(Some(conflict(d(2020, 1, 1), "X")), true).marker().unwrap();
        assert_eq!(marker.kind, MarkerKind::Event);
        assert_eq!(marker.color, MarkerColor::Red);
    }

    #[test]
    fn serialize_omits_absent_event() {
        let json = serde_json::to_value(point(None, true)).unwrap();
        assert!(json.get("event").is_none());
        assert_eq!(json["date"], "2020-01-01");
        assert_eq!(json["is_change_point"], true);
    }

    #[test]
    fn marker_color_display() {
        assert_eq!(MarkerColor::Purple.to_string(), "purple");
        assert_eq!(MarkerColor::Orange.to_string(), "orange");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DateRange / ViewState
// ═══════════════════════════════════════════════════════════════════

mod view {
    use super::*;

    #[test]
    fn range_rejects_inverted() {
        let err = DateRange::new(d(2020, 2, 1), d(2020, 1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn single_day_range_is_valid() {
        let r = DateRange::new(d(2020, 1, 1), d(2020, 1, 1)).unwrap();
        assert!(r.contains(d(2020, 1, 1)));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = DateRange::new(d(2020, 1, 1), d(2020, 1, 31)).unwrap();
        assert!(r.contains(d(2020, 1, 1)));
        assert!(r.contains(d(2020, 1, 15)));
        assert!(r.contains(d(2020, 1, 31)));
        assert!(!r.contains(d(2019, 12, 31)));
        assert!(!r.contains(d(2020, 2, 1)));
    }

    #[test]
    fn range_deserializes_when_ordered() {
        let r: DateRange = serde_json::from_str(r#"{"start":"2020-01-01","end":"31/01/2020"}"#).unwrap();
        assert_eq!(r, DateRange::new(d(2020, 1, 1), d(2020, 1, 31)).unwrap());
    }

    #[test]
    fn range_deserialize_rejects_inverted() {
        let result = serde_json::from_str::<DateRange>(r#"{"start":"2020-02-01","end":"2020-01-01"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("must not be after"));
    }

    #[test]
    fn view_state_deserialize_rejects_inverted_range() {
        let json = r#"{
            "range": {"start":"2021-01-01","end":"2020-01-01"},
            "category_filter": "All",
            "selected_event": null
        }"#;
        assert!(serde_json::from_str::<ViewState>(json).is_err());
    }

    #[test]
    fn view_state_serde_roundtrip_json() {
        let r = DateRange::new(d(2020, 1, 1), d(2020, 12, 31)).unwrap();
        let mut view = ViewState::new(r, CategoryFilter::Only(Category::Conflict));
        view.selected_event = Some(conflict(d(2020, 3, 1), "X"));
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(serde_json::from_str::<ViewState>(&json).unwrap(), view);
    }

    #[test]
    fn new_view_has_no_selection() {
        let r = DateRange::new(d(2020, 1, 1), d(2020, 12, 31)).unwrap();
        let view = ViewState::new(r, CategoryFilter::All);
        assert_eq!(view.selected_event, None);
        assert_eq!(view.selection_state(), SelectionState::NoSelection);
    }

    #[test]
    fn selection_state_follows_selected_event() {
        let r = DateRange::new(d(2020, 1, 1), d(2020, 12, 31)).unwrap();
        let mut view = ViewState::new(r, CategoryFilter::All);
        view.selected_event = Some(conflict(d(2020, 3, 1), "X"));
        assert_eq!(view.selection_state(), SelectionState::EventSelected);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DashboardSettings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = DashboardSettings::default();
        assert_eq!(s.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(s.request_timeout_secs, 30);
        assert_eq!(s.default_start, d(2010, 1, 1));
        assert_eq!(s.default_end, d(2025, 12, 31));
        assert_eq!(s.default_category, CategoryFilter::All);
        assert_eq!(s.selection_policy, SelectionPolicy::Retain);
    }

    #[test]
    fn default_range_is_valid() {
        let r = DashboardSettings::default().default_range().unwrap();
        assert_eq!(r.start, d(2010, 1, 1));
        assert_eq!(r.end, d(2025, 12, 31));
    }

    #[test]
    fn from_empty_json_gives_defaults() {
        assert_eq!(DashboardSettings::from_json("{}").unwrap(), DashboardSettings::default());
    }

    #[test]
    fn from_partial_json() {
        let s = DashboardSettings::from_json(
            r#"{"default_category":"Policy","selection_policy":"ClearWhenHidden","default_start":"2015-06-01"}"#,
        )
        .unwrap();
        assert_eq!(s.default_category, CategoryFilter::Only(Category::Policy));
        assert_eq!(s.selection_policy, SelectionPolicy::ClearWhenHidden);
        assert_eq!(s.default_start, d(2015, 6, 1));
        assert_eq!(s.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn from_json_rejects_inverted_range() {
        let err = DashboardSettings::from_json(r#"{"default_start":"2021-01-01","default_end":"2020-01-01"}"#)
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn from_json_rejects_bad_date() {
        let err = DashboardSettings::from_json(r#"{"default_start":"soon"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn serde_roundtrip_json() {
        let s = DashboardSettings {
            api_base_url: "http://dashboard.local/api".into(),
            request_timeout_secs: 5,
            default_category: CategoryFilter::Only(Category::Sanction),
            ..DashboardSettings::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(DashboardSettings::from_json(&json).unwrap(), s);
    }
}
