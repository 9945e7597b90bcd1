//! Sōzō client: synthetic data generation.

use serde_json::{json, Value};
use tracing::debug;

use super::mapping;
use super::types::{GenerateRequest, SozoGenerateResponse, SozoSchemaInfo};
use crate::transport::HttpClient;
use crate::{Error, JsonObject, Result};

pub const GENERATE_PATH: &str = "/v1/sozo/generate";
pub const SCHEMAS_PATH: &str = "/v1/sozo/schemas";

/// View over the shared adapter exposing the Sōzō endpoints.
#[derive(Clone, Copy)]
pub struct SozoClient<'a> {
    http: &'a HttpClient,
}

impl<'a> SozoClient<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Generate synthetic records.
    ///
    /// Fails with a validation error, without contacting the server, when the
    /// request names neither an inline schema nor a predefined one.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<SozoGenerateResponse> {
        if !request.has_schema_source() {
            return Err(Error::validation(
                "Either schema or schema_name is required",
                Some("schema"),
            ));
        }

        let mut payload = json!({ "records": request.records });
        if !request.schema.is_empty() {
            let schema: JsonObject = request
                .schema
                .iter()
                .map(|(column, spec)| (column.clone(), Value::String(spec.clone())))
                .collect();
            payload["schema"] = Value::Object(schema);
        }
        if let Some(name) = request.schema_name.as_deref().filter(|n| !n.is_empty()) {
            payload["schemaName"] = Value::String(name.to_string());
        }
        if !request.correlations.is_empty() {
            let correlations: JsonObject = request
                .correlations
                .iter()
                .map(|(pair, kind)| (pair.clone(), Value::String(kind.as_str().to_string())))
                .collect();
            payload["correlations"] = Value::Object(correlations);
        }
        if let Some(seed) = request.seed {
            payload["seed"] = json!(seed);
        }

        debug!(
            records = request.records,
            schema_name = request.schema_name.as_deref(),
            columns = request.schema.len(),
            "sozo generate"
        );
        let raw = self.http.post(GENERATE_PATH, &payload).await?;
        Ok(mapping::generate_response(&raw))
    }

    /// Predefined schemas available on the server.
    pub async fn list_schemas(&self) -> Result<Vec<SozoSchemaInfo>> {
        let raw = self.http.get(SCHEMAS_PATH).await?;
        mapping::schema_list(&raw)
    }
}
