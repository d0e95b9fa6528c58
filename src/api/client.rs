//! HTTPS client for the array management API
//!
//! Every fetch is a single authenticated GET against a fixed endpoint
//! template with a bounded timeout and no retries; the first failure aborts
//! the report. Arrays almost never carry CA-signed certificates, so
//! certificate validation can be relaxed, but only through the explicit
//! [`ArrayClientConfig::accept_invalid_certs`] opt-in.

use crate::api::types::{
    BuftreeMapping, RecordsEnvelope, RelationshipDetail, RelationshipSummary, TargetDetail,
    TargetSummary, VolumeRecord,
};
use crate::api::ArrayMetadata;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

// =============================================================================
// Endpoints
// =============================================================================

pub(crate) const RELATIONSHIPS_ENDPOINT: &str = "/api/snapmirror/relationships/";
pub(crate) const CLOUD_TARGETS_ENDPOINT: &str = "/api/cloud/targets/";
pub(crate) const VOLUMES_ENDPOINT: &str = "/api/private/cli/volume/?fields=uuid,volume";
pub(crate) const BTUUIDS_ENDPOINT: &str =
    "/api/private/cli/storage/aggregate/object-store/vol-btuuids?fields=buftree_uuid,vol_uuid";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the array client
#[derive(Debug, Clone)]
pub struct ArrayClientConfig {
    /// Cluster management hostname or IP
    pub cluster: String,
    /// Pre-encoded Basic credential value, obtained externally
    pub credentials: String,
    /// Per-call timeout; a timeout surfaces as a transport failure
    pub timeout: Duration,
    /// Accept self-signed array certificates. Off unless the caller asks.
    pub accept_invalid_certs: bool,
}

impl ArrayClientConfig {
    pub fn new(cluster: impl Into<String>, credentials: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            credentials: credentials.into(),
            timeout: Duration::from_secs(10),
            accept_invalid_certs: false,
        }
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

// =============================================================================
// Array Client
// =============================================================================

/// Authenticated read client for the array's relationship, target, volume,
/// and object-store mapping endpoints
pub struct ArrayClient {
    config: ArrayClientConfig,
    http: reqwest::Client,
}

impl ArrayClient {
    /// Build a client with the configured timeout and TLS posture
    pub fn new(config: ArrayClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self { config, http })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("https://{}{}", self.config.cluster, endpoint)
    }

    /// One GET, one decode. Non-success status is an auth failure per the
    /// API contract; a body that is not the expected JSON is a decode error.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        debug!(%url, "array GET");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Basic {}", self.config.credentials))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Auth { status });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ArrayMetadata for ArrayClient {
    async fn fetch_relationships(&self) -> Result<Vec<RelationshipSummary>> {
        let env: RecordsEnvelope<RelationshipSummary> =
            self.get_json(RELATIONSHIPS_ENDPOINT).await?;
        Ok(env.records)
    }

    async fn fetch_relationship_detail(&self, id: &str) -> Result<RelationshipDetail> {
        self.get_json(&format!("{}{}", RELATIONSHIPS_ENDPOINT, id))
            .await
    }

    async fn fetch_tiering_targets(&self) -> Result<Vec<TargetSummary>> {
        let env: RecordsEnvelope<TargetSummary> = self.get_json(CLOUD_TARGETS_ENDPOINT).await?;
        Ok(env.records)
    }

    async fn fetch_tiering_target_detail(&self, id: &str) -> Result<TargetDetail> {
        self.get_json(&format!("{}{}", CLOUD_TARGETS_ENDPOINT, id))
            .await
    }

    async fn fetch_volumes(&self) -> Result<Vec<VolumeRecord>> {
        let env: RecordsEnvelope<VolumeRecord> = self.get_json(VOLUMES_ENDPOINT).await?;
        Ok(env.records)
    }

    async fn fetch_object_store_mappings(&self) -> Result<Vec<BuftreeMapping>> {
        let env: RecordsEnvelope<BuftreeMapping> = self.get_json(BTUUIDS_ENDPOINT).await?;
        Ok(env.records)
    }
}
