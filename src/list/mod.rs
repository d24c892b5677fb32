//! Expense list search criteria and paging.
//!
//! A `SearchCriteria` value is the single input to every page fetch: filters,
//! sort order and pagination cursor. Changing any filter or the sort resets
//! the page index to zero, so a stale cursor can never leak into a new search.

pub mod aggregator;

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Field an expense query can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Date,
    Name,
    Amount,
    CreatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Name => "name",
            Self::Amount => "amount",
            Self::CreatedAt => "createdAt",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "date" => Some(Self::Date),
            "name" => Some(Self::Name),
            "amount" => Some(Self::Amount),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort specification in the API's `field,direction` query format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Query value for the API, e.g. `date,desc`
    pub fn as_query(&self) -> String {
        format!("{},{}", self.field.as_str(), self.direction.as_str())
    }

    /// Parse a `field,direction` query value
    pub fn from_query(s: &str) -> Option<Self> {
        let (field, direction) = s.split_once(',')?;
        let field = SortField::from_str(field)?;
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };
        Some(Self { field, direction })
    }

    /// Date-based sorts group the result list by calendar day; any other
    /// sort renders each expense on its own row.
    pub fn groups_by_date(&self) -> bool {
        self.field == SortField::Date
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortField::Date, SortDirection::Desc)
    }
}

/// Period filter for the expense query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodFilter {
    CurrentMonth,
    LastMonth,
    CurrentYear,
    AllTime,
}

impl PeriodFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentMonth => "CURRENT_MONTH",
            Self::LastMonth => "LAST_MONTH",
            Self::CurrentYear => "CURRENT_YEAR",
            Self::AllTime => "ALL_TIME",
        }
    }
}

/// Filters, sort order and pagination cursor for one expense query.
///
/// Every filter/sort mutator resets `page` to 0 — a new search always starts
/// at the first page. Only `next_page` advances the cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub page: u32,
    pub size: u32,
    pub sort: SortSpec,
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub period: Option<PeriodFilter>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: SortSpec::default(),
            name: None,
            category_id: None,
            period: None,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.page = 0;
    }

    /// Set or clear the name filter; empty strings clear it.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name.filter(|n| !n.trim().is_empty());
        self.page = 0;
    }

    pub fn set_category(&mut self, category_id: Option<String>) {
        self.category_id = category_id;
        self.page = 0;
    }

    pub fn set_period(&mut self, period: Option<PeriodFilter>) {
        self.period = period;
        self.page = 0;
    }

    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::new()
    }
}

/// How long the UI should wait before firing a search after the criteria
/// change. Typing into the name filter produces a burst of changes, so those
/// get a longer settle window; everything else fires immediately. The exact
/// delay is a UX tuning knob, not a contract.
pub fn debounce_delay(criteria: &SearchCriteria) -> Duration {
    if criteria.name.is_some() {
        Duration::from_millis(400)
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_query_round_trip() {
        let sort = SortSpec::new(SortField::Date, SortDirection::Desc);
        assert_eq!(sort.as_query(), "date,desc");
        assert_eq!(SortSpec::from_query("date,desc"), Some(sort));

        let sort = SortSpec::new(SortField::Name, SortDirection::Asc);
        assert_eq!(sort.as_query(), "name,asc");
        assert_eq!(SortSpec::from_query("name,asc"), Some(sort));

        assert_eq!(SortSpec::from_query("garbage"), None);
        assert_eq!(SortSpec::from_query("date,sideways"), None);
    }

    #[test]
    fn test_groups_by_date_only_for_date_sorts() {
        assert!(SortSpec::new(SortField::Date, SortDirection::Asc).groups_by_date());
        assert!(SortSpec::new(SortField::Date, SortDirection::Desc).groups_by_date());
        assert!(!SortSpec::new(SortField::Name, SortDirection::Asc).groups_by_date());
        assert!(!SortSpec::new(SortField::Amount, SortDirection::Desc).groups_by_date());
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut criteria = SearchCriteria::new();
        criteria.page = 4;

        criteria.set_name(Some("coffee".to_string()));
        assert_eq!(criteria.page, 0);

        criteria.page = 4;
        criteria.set_category(Some("c1".to_string()));
        assert_eq!(criteria.page, 0);

        criteria.page = 4;
        criteria.set_period(Some(PeriodFilter::CurrentMonth));
        assert_eq!(criteria.page, 0);

        criteria.page = 4;
        criteria.set_sort(SortSpec::new(SortField::Amount, SortDirection::Desc));
        assert_eq!(criteria.page, 0);
    }

    #[test]
    fn test_blank_name_filter_is_cleared() {
        let mut criteria = SearchCriteria::new();
        criteria.set_name(Some("   ".to_string()));
        assert_eq!(criteria.name, None);

        criteria.set_name(Some("milk".to_string()));
        assert_eq!(criteria.name.as_deref(), Some("milk"));
    }

    #[test]
    fn test_next_page_advances_cursor() {
        let mut criteria = SearchCriteria::new();
        criteria.next_page();
        criteria.next_page();
        assert_eq!(criteria.page, 2);

        criteria.reset_page();
        assert_eq!(criteria.page, 0);
    }

    #[test]
    fn test_debounce_longer_while_typing_a_name() {
        let mut criteria = SearchCriteria::new();
        assert_eq!(debounce_delay(&criteria), Duration::ZERO);

        criteria.set_name(Some("mil".to_string()));
        assert!(debounce_delay(&criteria) > Duration::ZERO);
    }
}
