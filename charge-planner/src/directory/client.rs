//! Station provider HTTP client.
//!
//! Queries the alternative-fuel-stations API for public EV charging
//! stations near a point. Handles authentication, bounded concurrency,
//! and error mapping; degradation to fallback data happens a layer up in
//! [`StationDirectory`](super::StationDirectory).

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::domain::GeoPoint;

use super::error::DirectoryError;
use super::source::StationSource;
use super::types::{RawStationRecord, StationFilter, StationsNearResponse};

/// Default base URL for the nearest-stations endpoint.
const DEFAULT_BASE_URL: &str = "https://developer.nrel.gov/api/alt_fuel_stations/v1/nearest.json";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the station provider client.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// API key, sent as the `api_key` query parameter.
    pub api_key: String,
    /// Base URL for the nearest-stations endpoint.
    pub base_url: String,
    /// Maximum concurrent requests.
    pub max_concurrent: usize,
    /// Request timeout in seconds. A timed-out lookup is treated the same
    /// as any other failed lookup.
    pub timeout_secs: u64,
}

impl DirectoryConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Station provider API client.
///
/// Uses a semaphore to limit concurrent requests. Requests are never
/// retried here.
#[derive(Debug, Clone)]
pub struct FuelStationClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl FuelStationClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Query public EV charging stations near a point.
    ///
    /// Asks the provider for open (`status=E`), public stations within
    /// `radius_miles` of `point`, optionally restricted to a connector
    /// type, capped at the filter's result limit.
    pub async fn query_near(
        &self,
        point: &GeoPoint,
        radius_miles: f64,
        filter: &StationFilter,
    ) -> Result<Vec<RawStationRecord>, DirectoryError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectoryError::Api {
                status: 0,
                message: "semaphore closed".to_string(),
            })?;

        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("latitude", point.latitude().to_string()),
            ("longitude", point.longitude().to_string()),
            ("radius", radius_miles.to_string()),
            ("fuel_type", "ELEC".to_string()),
            ("status", "E".to_string()),
            ("access", "public".to_string()),
            ("limit", filter.limit.to_string()),
        ];

        if let Some(connector) = &filter.connector {
            params.push(("ev_connector_type", connector.clone()));
        }

        let response = self.http.get(&self.base_url).query(&params).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectoryError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectoryError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: StationsNearResponse =
            serde_json::from_str(&body).map_err(|e| DirectoryError::Json {
                message: e.to_string(),
            })?;

        Ok(parsed.fuel_stations.unwrap_or_default())
    }
}

#[async_trait]
impl StationSource for FuelStationClient {
    async fn query_near(
        &self,
        point: &GeoPoint,
        radius_miles: f64,
        filter: &StationFilter,
    ) -> Result<Vec<RawStationRecord>, DirectoryError> {
        FuelStationClient::query_near(self, point, radius_miles, filter).await
    }
}
