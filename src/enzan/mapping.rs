//! Enzan response mappers.
//!
//! The wire protocol mixes casing conventions between endpoints; the keys
//! below are reproduced exactly.
//!
//! Summary (`POST /v1/enzan/summary`): `window`, `startTime`, `endTime`,
//! `rows[]`, `total.{cost_usd,gpu_hours,requests}`, `apiCosts`.
//! Rows: `cost_usd`, `gpu_hours`, `requests`, `tokens_in`, `tokens_out`,
//! `project`, `model`, `team`, `provider`, `endpoint`.
//! API costs: `totalCostUsd`, `promptTokens`, `outputTokens`, `queries`.
//! Resources: `id`, `provider`, `gpuType`, `gpuCount`, `hourlyRate`
//! (required), `region`, `labels`.
//! Alerts: `id`, `name`, `type`, `threshold`, `window` (required), `enabled`
//! (default true). Unknown `type` tags are kept as [`AlertType::Other`].

use super::types::{
    AlertType, ApiCostSummary, EnzanAlert, EnzanBurnResponse, EnzanResource, EnzanSummaryResponse,
    EnzanSummaryRow, TimeWindow,
};
use crate::utils::json;
use crate::{JsonObject, Result};

pub fn summary_row(raw: &JsonObject) -> EnzanSummaryRow {
    EnzanSummaryRow {
        cost_usd: json::f64_or(raw, "cost_usd", 0.0),
        gpu_hours: json::f64_or(raw, "gpu_hours", 0.0),
        requests: json::u64_or(raw, "requests", 0),
        tokens_in: json::u64_or(raw, "tokens_in", 0),
        tokens_out: json::u64_or(raw, "tokens_out", 0),
        project: json::opt_string(raw, "project"),
        model: json::opt_string(raw, "model"),
        team: json::opt_string(raw, "team"),
        provider: json::opt_string(raw, "provider"),
        endpoint: json::opt_string(raw, "endpoint"),
    }
}

pub fn api_cost_summary(raw: &JsonObject) -> ApiCostSummary {
    ApiCostSummary {
        total_cost_usd: json::f64_or(raw, "totalCostUsd", 0.0),
        prompt_tokens: json::u64_or(raw, "promptTokens", 0),
        output_tokens: json::u64_or(raw, "outputTokens", 0),
        queries: json::u64_or(raw, "queries", 0),
    }
}

/// Map a summary; `requested` fills in `window` when the server omits it.
pub fn summary_response(raw: &JsonObject, requested: TimeWindow) -> EnzanSummaryResponse {
    let empty = JsonObject::new();
    let total = json::object(raw, "total").unwrap_or(&empty);

    EnzanSummaryResponse {
        window: json::string_or(raw, "window", requested.as_str()),
        start_time: json::string_or(raw, "startTime", ""),
        end_time: json::string_or(raw, "endTime", ""),
        rows: json::object_list(raw, "rows")
            .into_iter()
            .map(summary_row)
            .collect(),
        total_cost_usd: json::f64_or(total, "cost_usd", 0.0),
        total_gpu_hours: json::f64_or(total, "gpu_hours", 0.0),
        total_requests: json::u64_or(total, "requests", 0),
        api_costs: json::object(raw, "apiCosts").map(api_cost_summary),
    }
}

pub fn burn_response(raw: &JsonObject) -> EnzanBurnResponse {
    EnzanBurnResponse {
        burn_rate_usd_per_hour: json::f64_or(raw, "burn_rate_usd_per_hour", 0.0),
        timestamp: json::string_or(raw, "timestamp", ""),
    }
}

/// Map one resource. Identity and sizing fields are required.
pub fn resource(raw: &JsonObject) -> Result<EnzanResource> {
    Ok(EnzanResource {
        id: json::required_str(raw, "id", "resource")?,
        provider: json::required_str(raw, "provider", "resource")?,
        gpu_type: json::required_str(raw, "gpuType", "resource")?,
        gpu_count: json::required_u64(raw, "gpuCount", "resource")?,
        hourly_rate: json::required_f64(raw, "hourlyRate", "resource")?,
        region: json::opt_string(raw, "region"),
        labels: json::opt_string_map(raw, "labels"),
    })
}

/// Map `{resources: [...]}`; a missing list is empty.
pub fn resource_list(raw: &JsonObject) -> Result<Vec<EnzanResource>> {
    json::object_list(raw, "resources")
        .into_iter()
        .map(resource)
        .collect()
}

/// Map one alert. Everything but `enabled` is required.
pub fn alert(raw: &JsonObject) -> Result<EnzanAlert> {
    Ok(EnzanAlert {
        id: json::required_str(raw, "id", "alert")?,
        name: json::required_str(raw, "name", "alert")?,
        alert_type: AlertType::from_tag(&json::required_str(raw, "type", "alert")?),
        threshold: json::required_f64(raw, "threshold", "alert")?,
        window: json::required_str(raw, "window", "alert")?,
        enabled: json::bool_or(raw, "enabled", true),
    })
}

/// Map `{alerts: [...]}`; a missing list is empty.
pub fn alert_list(raw: &JsonObject) -> Result<Vec<EnzanAlert>> {
    json::object_list(raw, "alerts")
        .into_iter()
        .map(alert)
        .collect()
}
