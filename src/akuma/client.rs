//! Akuma client: natural language to SQL.

use serde_json::{json, Value};
use tracing::debug;

use super::mapping;
use super::types::{AkumaExplainResponse, AkumaQueryResponse, AkumaSchemaResponse, AkumaTable, QueryRequest};
use crate::transport::HttpClient;
use crate::{Error, Result};

pub const QUERY_PATH: &str = "/v1/akuma/query";
pub const EXPLAIN_PATH: &str = "/v1/akuma/explain";
pub const SCHEMA_PATH: &str = "/v1/akuma/schema";

/// View over the shared adapter exposing the Akuma endpoints.
#[derive(Clone, Copy)]
pub struct AkumaClient<'a> {
    http: &'a HttpClient,
}

impl<'a> AkumaClient<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Translate a natural-language prompt into SQL.
    ///
    /// A translation the server could not complete comes back as `Ok` with
    /// [`AkumaQueryResponse::error`] set; check it before using `sql`.
    pub async fn query(&self, request: &QueryRequest) -> Result<AkumaQueryResponse> {
        let payload = serde_json::to_value(request).map_err(Error::serialization)?;
        debug!(dialect = request.dialect.as_str(), mode = request.mode.as_str(), "akuma query");
        let raw = self.http.post(QUERY_PATH, &payload).await?;
        Ok(mapping::query_response(&raw))
    }

    /// Explain a SQL statement in plain English.
    pub async fn explain(&self, sql: &str) -> Result<AkumaExplainResponse> {
        let raw = self.http.post(EXPLAIN_PATH, &json!({ "sql": sql })).await?;
        Ok(mapping::explain_response(&raw, sql))
    }

    /// Upload table descriptions used as context for later translations.
    pub async fn set_schema(
        &self,
        tables: &[AkumaTable],
        version: Option<&str>,
    ) -> Result<AkumaSchemaResponse> {
        let mut payload = json!({
            "tables": serde_json::to_value(tables).map_err(Error::serialization)?,
        });
        if let Some(version) = version.filter(|v| !v.is_empty()) {
            payload["version"] = Value::String(version.to_string());
        }
        debug!(tables = tables.len(), "akuma set_schema");
        let raw = self.http.post(SCHEMA_PATH, &payload).await?;
        Ok(mapping::schema_response(&raw))
    }
}
