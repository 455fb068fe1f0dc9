use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::Deserialize;
use serde::Serialize;

use crate::model::category::AddressCategory;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Most recent first.
    #[default]
    Time,
    /// Largest parsed amount first.
    Amount,
    /// Incoming to the target first, original order otherwise.
    Direction,
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "amount" => Ok(Self::Amount),
            "direction" => Ok(Self::Direction),
            other => Err(format!("unknown sort option: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRangeOption {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "24h")]
    Last24Hours,
    #[serde(rename = "7d")]
    Last7Days,
    /// Selectable, but carries no bounds yet; behaves like `All`.
    #[serde(rename = "custom")]
    Custom,
}

impl TimeRangeOption {
    /// Trailing window relative to "now", `None` when nothing is excluded.
    pub fn window(self) -> Option<TimeDelta> {
        match self {
            Self::All | Self::Custom => None,
            Self::Last24Hours => Some(TimeDelta::hours(24)),
            Self::Last7Days => Some(TimeDelta::days(7)),
        }
    }
}

impl FromStr for TimeRangeOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "24h" => Ok(Self::Last24Hours),
            "7d" => Ok(Self::Last7Days),
            "custom" => Ok(Self::Custom),
            other => Err(format!("unknown time range: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowDirection {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "self")]
    SelfTransfer,
}

impl fmt::Display for FlowDirection {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            Self::In => "in",
            Self::Out => "out",
            Self::All => "all",
            Self::SelfTransfer => "self",
        };
        f.write_str(name)
    }
}

impl FromStr for FlowDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "all" => Ok(Self::All),
            "self" => Ok(Self::SelfTransfer),
            other => Err(format!("unknown flow direction: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub enabled: bool,
    pub flow:    FlowDirection,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            enabled: true,
            flow:    FlowDirection::All,
        }
    }
}

impl CategoryFilter {
    pub fn new(
        enabled: bool,
        flow: FlowDirection,
    ) -> Self {
        Self { enabled, flow }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            flow:    FlowDirection::All,
        }
    }

    pub fn wants_self_only(&self) -> bool { self.enabled && self.flow == FlowDirection::SelfTransfer }
}

/// One filter per category. Every category is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFilters {
    pub exchange:      CategoryFilter,
    pub deposit:       CategoryFilter,
    pub individual:    CategoryFilter,
    pub dex:           CategoryFilter,
    pub lending:       CategoryFilter,
    pub uncategorized: CategoryFilter,
}

impl CategoryFilters {
    pub fn get(
        &self,
        category: AddressCategory,
    ) -> &CategoryFilter {
        match category {
            AddressCategory::Exchange => &self.exchange,
            AddressCategory::Deposit => &self.deposit,
            AddressCategory::Individual => &self.individual,
            AddressCategory::Dex => &self.dex,
            AddressCategory::Lending => &self.lending,
            AddressCategory::Uncategorized => &self.uncategorized,
        }
    }

    pub fn get_mut(
        &mut self,
        category: AddressCategory,
    ) -> &mut CategoryFilter {
        match category {
            AddressCategory::Exchange => &mut self.exchange,
            AddressCategory::Deposit => &mut self.deposit,
            AddressCategory::Individual => &mut self.individual,
            AddressCategory::Dex => &mut self.dex,
            AddressCategory::Lending => &mut self.lending,
            AddressCategory::Uncategorized => &mut self.uncategorized,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AddressCategory, &CategoryFilter)> {
        AddressCategory::ALL.into_iter().map(move |category| (category, self.get(category)))
    }

    /// True when any enabled category asks for self-transfers. Self-transfer
    /// edges stay hidden unless this holds; other edges are unaffected.
    pub fn any_self_only(&self) -> bool { self.iter().any(|(_, filter)| filter.wants_self_only()) }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub sort_by:          SortOption,
    pub time_range:       TimeRangeOption,
    pub category_filters: CategoryFilters,
}

impl FilterState {
    pub fn with_sort(
        mut self,
        sort_by: SortOption,
    ) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_time_range(
        mut self,
        time_range: TimeRangeOption,
    ) -> Self {
        self.time_range = time_range;
        self
    }

    pub fn with_category(
        mut self,
        category: AddressCategory,
        filter: CategoryFilter,
    ) -> Self {
        *self.category_filters.get_mut(category) = filter;
        self
    }

    pub fn without_category(
        self,
        category: AddressCategory,
    ) -> Self {
        self.with_category(category, CategoryFilter::disabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let state = FilterState::default();
        assert_eq!(state.sort_by, SortOption::Time);
        assert_eq!(state.time_range, TimeRangeOption::All);
        for (_, filter) in state.category_filters.iter() {
            assert!(filter.enabled);
            assert_eq!(filter.flow, FlowDirection::All);
        }
        assert!(!state.category_filters.any_self_only());
    }

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{
            "sortBy": "amount",
            "timeRange": "24h",
            "categoryFilters": { "dex": { "enabled": true, "flow": "self" } }
        }"#;
        let state: FilterState = serde_json::from_str(json).unwrap();
        assert_eq!(state.sort_by, SortOption::Amount);
        assert_eq!(state.time_range, TimeRangeOption::Last24Hours);
        assert!(state.category_filters.dex.wants_self_only());
        assert!(state.category_filters.exchange.enabled);
        assert!(state.category_filters.any_self_only());
    }

    #[test]
    fn disabled_self_filter_does_not_count() {
        let state = FilterState::default()
            .with_category(AddressCategory::Lending, CategoryFilter::new(false, FlowDirection::SelfTransfer));
        assert!(!state.category_filters.any_self_only());
    }

    #[test]
    fn custom_range_has_no_window() {
        assert_eq!(TimeRangeOption::Custom.window(), None);
        assert_eq!(TimeRangeOption::Last7Days.window(), Some(TimeDelta::days(7)));
    }
}
