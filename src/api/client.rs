// ABOUTME: HTTP client for the zPodFactory inventory API
// ABOUTME: Fetches deployment, DNS, and settings records with an access token header

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use super::error::{ApiError, Result};
use crate::model::{DnsRecord, Setting, Zpod};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the zPodFactory inventory service.
///
/// DNS-record and settings fetches degrade to empty results with a warning;
/// everything else is fatal to the run.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(host: &str, token: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: host.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        self.client
            .get(&url)
            .header("access_token", &self.token)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ApiError::ConnectError(self.base_url.clone())
                } else {
                    ApiError::RequestError(e)
                }
            })
    }

    /// Fetch one zPod by name.
    pub async fn get_zpod(&self, name: &str) -> Result<Zpod> {
        let response = self.get(&format!("/zpods/name={}", name)).await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => Err(ApiError::AuthenticationFailed),
            StatusCode::NOT_FOUND => Err(ApiError::ZpodNotFound(name.to_string())),
            status => Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    /// Fetch all zPods.
    pub async fn list_zpods(&self) -> Result<Vec<Zpod>> {
        let response = self.get("/zpods").await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => Err(ApiError::AuthenticationFailed),
            status => Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    /// Fetch DNS entries for a zPod. Failures are soft: the run continues
    /// without DNS records.
    pub async fn get_dns_records(&self, zpod_id: i64) -> Vec<DnsRecord> {
        let response = match self.get(&format!("/zpods/{}/dns", zpod_id)).await {
            Ok(response) => response,
            Err(err) => {
                warn!("Failed to fetch DNS entries: {}", err);
                return Vec::new();
            }
        };

        if response.status() != StatusCode::OK {
            warn!(
                "Could not fetch DNS entries (status {})",
                response.status().as_u16()
            );
            return Vec::new();
        }

        match response.json().await {
            Ok(records) => records,
            Err(err) => {
                warn!("Failed to decode DNS entries: {}", err);
                Vec::new()
            }
        }
    }

    /// Fetch all zPodFactory settings. Failures are soft: the run continues
    /// with an empty settings list.
    pub async fn get_settings(&self) -> Vec<Setting> {
        let response = match self.get("/settings").await {
            Ok(response) => response,
            Err(err) => {
                warn!("Failed to fetch settings: {}", err);
                return Vec::new();
            }
        };

        if response.status() != StatusCode::OK {
            warn!(
                "Could not fetch settings (status {})",
                response.status().as_u16()
            );
            return Vec::new();
        }

        match response.json().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!("Failed to decode settings: {}", err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = ApiClient::new("http://zpodfactory.example.com:8000/", "token").unwrap();
        assert_eq!(client.base_url(), "http://zpodfactory.example.com:8000");
    }

    #[test]
    fn test_client_keeps_host_without_trailing_slash() {
        let client = ApiClient::new("http://zpodfactory.example.com:8000", "token").unwrap();
        assert_eq!(client.base_url(), "http://zpodfactory.example.com:8000");
    }
}
