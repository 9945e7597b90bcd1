//! Enzan request and response types.

use std::collections::BTreeMap;

use serde::Serialize;

/// Aggregation window for cost summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TimeWindow {
    #[serde(rename = "1h")]
    OneHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHours,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::TwentyFourHours => "24h",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
        }
    }
}

/// Attribute by which summary rows are bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupByDimension {
    Project,
    Model,
    Team,
    Provider,
    Endpoint,
}

impl GroupByDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Model => "model",
            Self::Team => "team",
            Self::Provider => "provider",
            Self::Endpoint => "endpoint",
        }
    }
}

/// Kind of alert rule.
///
/// Tags the SDK does not know yet are kept verbatim in [`AlertType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlertType {
    CostThreshold,
    UsageSpike,
    IdleResource,
    BudgetExceeded,
    Other(String),
}

impl AlertType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::CostThreshold => "cost_threshold",
            Self::UsageSpike => "usage_spike",
            Self::IdleResource => "idle_resource",
            Self::BudgetExceeded => "budget_exceeded",
            Self::Other(tag) => tag.as_str(),
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "cost_threshold" => Self::CostThreshold,
            "usage_spike" => Self::UsageSpike,
            "idle_resource" => Self::IdleResource,
            "budget_exceeded" => Self::BudgetExceeded,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for AlertType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Body of `POST /v1/enzan/summary`. Empty grouping and filters are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub window: TimeWindow,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<GroupByDimension>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, Vec<String>>,
}

impl SummaryRequest {
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn group_by(mut self, dimension: GroupByDimension) -> Self {
        self.group_by.push(dimension);
        self
    }

    /// Restrict the summary to rows whose `dimension` is one of `values`.
    pub fn filter<I, S>(mut self, dimension: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters
            .entry(dimension.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// Cost and usage for one grouping bucket.
///
/// Grouping fields are only populated for the dimensions that were requested.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnzanSummaryRow {
    pub cost_usd: f64,
    pub gpu_hours: f64,
    pub requests: u64,
    pub tokens_in: u64,
    pub tokens_out: u64,
    pub project: Option<String>,
    pub model: Option<String>,
    pub team: Option<String>,
    pub provider: Option<String>,
    pub endpoint: Option<String>,
}

/// Spend on the Kaizen API itself, reported alongside GPU costs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiCostSummary {
    pub total_cost_usd: f64,
    pub prompt_tokens: u64,
    pub output_tokens: u64,
    pub queries: u64,
}

/// Cost summary for a window.
///
/// Totals are computed by the server and passed through unchanged; they are
/// not guaranteed to equal the sum of `rows`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnzanSummaryResponse {
    pub window: String,
    pub start_time: String,
    pub end_time: String,
    pub rows: Vec<EnzanSummaryRow>,
    pub total_cost_usd: f64,
    pub total_gpu_hours: f64,
    pub total_requests: u64,
    pub api_costs: Option<ApiCostSummary>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnzanBurnResponse {
    pub burn_rate_usd_per_hour: f64,
    pub timestamp: String,
}

/// A tracked GPU resource.
#[derive(Debug, Clone, PartialEq)]
pub struct EnzanResource {
    pub id: String,
    pub provider: String,
    pub gpu_type: String,
    pub gpu_count: u64,
    pub hourly_rate: f64,
    pub region: Option<String>,
    pub labels: Option<BTreeMap<String, String>>,
}

impl EnzanResource {
    pub fn new(
        id: impl Into<String>,
        provider: impl Into<String>,
        gpu_type: impl Into<String>,
        gpu_count: u64,
        hourly_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
            gpu_type: gpu_type.into(),
            gpu_count,
            hourly_rate,
            region: None,
            labels: None,
        }
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// A named threshold rule.
#[derive(Debug, Clone, PartialEq)]
pub struct EnzanAlert {
    pub id: String,
    pub name: String,
    pub alert_type: AlertType,
    pub threshold: f64,
    pub window: String,
    pub enabled: bool,
}

impl EnzanAlert {
    /// New alert, enabled by default.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        alert_type: AlertType,
        threshold: f64,
        window: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            alert_type,
            threshold,
            window: window.into(),
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
