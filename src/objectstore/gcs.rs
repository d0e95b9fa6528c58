//! Cloud object-store listing over the GCS JSON API
//!
//! One GET per page against `storage/v1/b/{bucket}/o` with a bearer token.
//! Object sizes arrive as decimal strings and are parsed during decode.

use crate::error::{Error, Result};
use crate::objectstore::{ObjectLister, ObjectMeta, ObjectPage};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::debug;

const STORAGE_API_BASE: &str = "https://storage.googleapis.com/storage/v1/b";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the GCS lister
#[derive(Debug, Clone)]
pub struct GcsListerConfig {
    /// Opaque bearer token, obtained externally
    pub token: String,
    /// Per-call timeout; a timeout surfaces as a transport failure
    pub timeout: Duration,
}

impl GcsListerConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<ListItem>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListItem {
    name: String,
    #[serde(deserialize_with = "size_from_string")]
    size: u64,
}

/// The JSON API reports `size` as a decimal string; some emulators send a
/// bare number. Accept both.
fn size_from_string<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

// =============================================================================
// GCS Lister
// =============================================================================

/// Object lister backed by the GCS JSON API
pub struct GcsLister {
    config: GcsListerConfig,
    http: reqwest::Client,
}

impl GcsLister {
    pub fn new(config: GcsListerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    fn list_url(container: &str, prefix: &str, page_token: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}/o?prefix={}&fields=items(name,size),nextPageToken",
            STORAGE_API_BASE,
            urlencoding::encode(container),
            urlencoding::encode(prefix),
        );
        if let Some(token) = page_token {
            url.push_str("&pageToken=");
            url.push_str(&urlencoding::encode(token));
        }
        url
    }
}

#[async_trait]
impl ObjectLister for GcsLister {
    async fn list_page(
        &self,
        container: &str,
        prefix: &str,
        page_token: Option<&str>,
    ) -> Result<ObjectPage> {
        let url = Self::list_url(container, prefix, page_token);
        debug!(%url, "object-store list");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Auth { status });
        }

        let body = response.text().await?;
        let decoded: ListResponse = serde_json::from_str(&body)?;

        Ok(ObjectPage {
            objects: decoded
                .items
                .into_iter()
                .map(|item| ObjectMeta {
                    name: item.name,
                    size: item.size,
                })
                .collect(),
            next_page_token: decoded.next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_encodes_prefix_and_token() {
        let url = GcsLister::list_url("netapp-backup-east", "bt-1/", None);
        assert_eq!(
            url,
            "https://storage.googleapis.com/storage/v1/b/netapp-backup-east/o\
             ?prefix=bt-1%2F&fields=items(name,size),nextPageToken"
        );

        let url = GcsLister::list_url("c", "p/", Some("tok=="));
        assert!(url.ends_with("&pageToken=tok%3D%3D"));
    }

    #[test]
    fn test_decodes_string_sizes() {
        let body = r#"{
            "items": [
                {"name": "bt-1/chunk0", "size": "1024"},
                {"name": "bt-1/chunk1", "size": 512}
            ],
            "nextPageToken": "abc"
        }"#;
        let decoded: ListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.items[0].size, 1024);
        assert_eq!(decoded.items[1].size, 512);
        assert_eq!(decoded.next_page_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_rejects_non_numeric_size() {
        let body = r#"{"items": [{"name": "x", "size": "not-a-number"}]}"#;
        assert!(serde_json::from_str::<ListResponse>(body).is_err());
    }

    #[test]
    fn test_empty_listing_decodes() {
        let decoded: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(decoded.items.is_empty());
        assert!(decoded.next_page_token.is_none());
    }
}
