//! Sōzō response mappers.
//!
//! Generate: `columns[]`, `rows[]`, `stats.{column}.{type, min, max, mean,
//! uniqueCount, values}`; everything defaults. Schemas: `schemas[].{name,
//! columns}`, both required.

use std::collections::BTreeMap;

use super::types::{SozoColumnStats, SozoGenerateResponse, SozoSchemaInfo};
use crate::utils::json;
use crate::{Error, JsonObject, Result};

pub fn column_stats(raw: &JsonObject) -> SozoColumnStats {
    SozoColumnStats {
        column_type: json::string_or(raw, "type", "unknown"),
        min: json::opt_f64(raw, "min"),
        max: json::opt_f64(raw, "max"),
        mean: json::opt_f64(raw, "mean"),
        unique_count: json::opt_u64(raw, "uniqueCount"),
        values: json::opt_count_map(raw, "values"),
    }
}

pub fn generate_response(raw: &JsonObject) -> SozoGenerateResponse {
    let stats = json::object(raw, "stats")
        .map(|stats| {
            stats
                .iter()
                .filter_map(|(column, value)| {
                    value.as_object().map(|s| (column.clone(), column_stats(s)))
                })
                .collect()
        })
        .unwrap_or_default();

    SozoGenerateResponse {
        columns: json::string_list(raw, "columns"),
        rows: json::opt_object_list(raw, "rows").unwrap_or_default(),
        stats,
    }
}

pub fn schema_info(raw: &JsonObject) -> Result<SozoSchemaInfo> {
    let name = json::required_str(raw, "name", "schema")?;
    let columns: BTreeMap<String, String> = json::opt_string_map(raw, "columns").ok_or_else(|| {
        Error::invalid_response("Invalid schema in response: missing or invalid field `columns`")
    })?;
    Ok(SozoSchemaInfo { name, columns })
}

/// Map `{schemas: [...]}`; a missing list is empty.
pub fn schema_list(raw: &JsonObject) -> Result<Vec<SozoSchemaInfo>> {
    json::object_list(raw, "schemas")
        .into_iter()
        .map(schema_info)
        .collect()
}
