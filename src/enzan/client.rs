//! Enzan client: GPU cost analytics.

use serde_json::{json, Value};
use tracing::debug;

use super::mapping;
use super::types::{
    EnzanAlert, EnzanBurnResponse, EnzanResource, EnzanSummaryResponse, SummaryRequest,
};
use crate::transport::HttpClient;
use crate::{Error, JsonObject, Result};

pub const SUMMARY_PATH: &str = "/v1/enzan/summary";
pub const BURN_PATH: &str = "/v1/enzan/burn";
pub const RESOURCES_PATH: &str = "/v1/enzan/resources";
pub const ALERTS_PATH: &str = "/v1/enzan/alerts";

/// View over the shared adapter exposing the Enzan endpoints.
#[derive(Clone, Copy)]
pub struct EnzanClient<'a> {
    http: &'a HttpClient,
}

impl<'a> EnzanClient<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Cost and usage for a window, optionally grouped and filtered.
    pub async fn summary(&self, request: &SummaryRequest) -> Result<EnzanSummaryResponse> {
        let payload = serde_json::to_value(request).map_err(Error::serialization)?;
        debug!(
            window = request.window.as_str(),
            group_by = request.group_by.len(),
            "enzan summary"
        );
        let raw = self.http.post(SUMMARY_PATH, &payload).await?;
        Ok(mapping::summary_response(&raw, request.window))
    }

    /// Current spend rate in USD per hour.
    pub async fn burn(&self) -> Result<EnzanBurnResponse> {
        let raw = self.http.get(BURN_PATH).await?;
        Ok(mapping::burn_response(&raw))
    }

    pub async fn list_resources(&self) -> Result<Vec<EnzanResource>> {
        let raw = self.http.get(RESOURCES_PATH).await?;
        mapping::resource_list(&raw)
    }

    /// Register a GPU resource for tracking. Returns the server's
    /// acknowledgement object unchanged.
    pub async fn register_resource(&self, resource: &EnzanResource) -> Result<JsonObject> {
        let mut payload = json!({
            "id": resource.id,
            "provider": resource.provider,
            "gpuType": resource.gpu_type,
            "gpuCount": resource.gpu_count,
            "hourlyRate": resource.hourly_rate,
        });
        if let Some(region) = resource.region.as_deref().filter(|r| !r.is_empty()) {
            payload["region"] = Value::String(region.to_string());
        }
        if let Some(labels) = resource.labels.as_ref().filter(|l| !l.is_empty()) {
            payload["labels"] = json!(labels);
        }
        debug!(id = %resource.id, provider = %resource.provider, "enzan register_resource");
        self.http.post(RESOURCES_PATH, &payload).await
    }

    pub async fn list_alerts(&self) -> Result<Vec<EnzanAlert>> {
        let raw = self.http.get(ALERTS_PATH).await?;
        mapping::alert_list(&raw)
    }

    /// Create an alert rule. `enabled` is always sent.
    pub async fn create_alert(&self, alert: &EnzanAlert) -> Result<JsonObject> {
        let payload = json!({
            "id": alert.id,
            "name": alert.name,
            "type": alert.alert_type.as_str(),
            "threshold": alert.threshold,
            "window": alert.window,
            "enabled": alert.enabled,
        });
        debug!(id = %alert.id, kind = alert.alert_type.as_str(), "enzan create_alert");
        self.http.post(ALERTS_PATH, &payload).await
    }
}
