//! TimeZoneDB provider
//! Fetches the full zone list from the list-time-zone endpoint

use super::ZoneProvider;
use crate::types::ZoneRecord;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_API_URL: &str = "https://api.timezonedb.com/v2.1/list-time-zone";

#[derive(Debug, Deserialize)]
struct ListTimeZoneResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    zones: Vec<ZoneRecord>,
}

pub struct TimeZoneDbProvider;

impl TimeZoneDbProvider {
    pub fn new() -> Self {
        Self
    }

    fn api_key() -> Option<String> {
        // MEETSLOT_API_KEY first, so a machine-wide TIMEZONEDB_API_KEY
        // can be overridden per tool
        for var in ["MEETSLOT_API_KEY", "TIMEZONEDB_API_KEY"] {
            if let Ok(key) = std::env::var(var) {
                if !key.is_empty() {
                    return Some(key);
                }
            }
        }
        None
    }

    fn api_url() -> String {
        std::env::var("TIMEZONEDB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
    }
}

#[async_trait]
impl ZoneProvider for TimeZoneDbProvider {
    fn name(&self) -> &'static str {
        "timezonedb"
    }

    fn display_name(&self) -> &'static str {
        "TimeZoneDB API"
    }

    async fn is_available(&self) -> bool {
        Self::api_key().is_some()
    }

    fn paths_to_check(&self) -> Vec<String> {
        vec![
            Self::api_url(),
            "TIMEZONEDB_API_KEY environment variable".to_string(),
        ]
    }

    async fn fetch_zones(&self) -> Result<Vec<ZoneRecord>> {
        let key = Self::api_key().ok_or_else(|| anyhow!("TIMEZONEDB_API_KEY is not set"))?;

        let client = reqwest::Client::new();
        let response = client
            .get(Self::api_url())
            .query(&[("key", key.as_str()), ("format", "json")])
            .header("User-Agent", "meetslot/0.1")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "zone list request failed with HTTP {}",
                response.status()
            ));
        }

        let body: ListTimeZoneResponse = response.json().await?;
        if body.status != "OK" {
            return Err(anyhow!("zone list request rejected: {}", body.message));
        }

        Ok(body.zones)
    }
}
