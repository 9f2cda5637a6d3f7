//! Mastodon status publisher

use super::{PublishReceipt, Publisher};
use crate::config::PublisherConfig;
use crate::constants::{MAX_STATUS_CHARS, STATUSES_ENDPOINT};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct StatusRequest<'a> {
    status: &'a str,
    visibility: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    id: Option<String>,
    url: Option<String>,
}

/// Posts the report as a status on a Mastodon instance
#[derive(Debug, Clone)]
pub struct MastodonPublisher {
    client: reqwest::Client,
    instance_url: String,
    access_token: String,
    visibility: String,
}

impl MastodonPublisher {
    /// Create a publisher from configuration; an access token is required
    pub fn new(config: &PublisherConfig, timeout: Duration) -> Result<Self> {
        let access_token = config
            .access_token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::configuration("No publisher access token configured"))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("daily-records/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::http("Failed to build publisher HTTP client", e))?;

        Ok(Self {
            client,
            instance_url: config.instance_url.trim_end_matches('/').to_string(),
            access_token,
            visibility: config.visibility.clone(),
        })
    }

    /// Full URL of the statuses endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.instance_url, STATUSES_ENDPOINT)
    }
}

/// Reject text a stock instance would refuse
pub fn check_status_length(text: &str) -> Result<()> {
    let length = text.chars().count();
    if length > MAX_STATUS_CHARS {
        return Err(Error::publishing(format!(
            "Status is {} characters, the limit is {}",
            length, MAX_STATUS_CHARS
        )));
    }
    Ok(())
}

impl Publisher for MastodonPublisher {
    fn name(&self) -> &'static str {
        "mastodon"
    }

    async fn publish(&self, text: &str) -> Result<PublishReceipt> {
        check_status_length(text)?;

        let url = self.endpoint();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&StatusRequest {
                status: text,
                visibility: &self.visibility,
            })
            .send()
            .await
            .map_err(|e| Error::http(format!("Status request to {} failed", url), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::publishing(format!(
                "Instance answered {}: {}",
                status,
                body.trim()
            )));
        }

        let posted: StatusResponse = response
            .json()
            .await
            .map_err(|e| Error::http("Failed to read status response", e))?;

        info!(
            "Status posted{}",
            posted
                .url
                .as_deref()
                .map(|url| format!(" at {}", url))
                .unwrap_or_default()
        );

        Ok(PublishReceipt {
            id: posted.id,
            url: posted.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_token(token: Option<&str>) -> PublisherConfig {
        PublisherConfig {
            access_token: token.map(str::to_string),
            ..PublisherConfig::default()
        }
    }

    #[test]
    fn test_new_requires_token() {
        let timeout = Duration::from_secs(5);
        assert!(MastodonPublisher::new(&config_with_token(None), timeout).is_err());
        assert!(MastodonPublisher::new(&config_with_token(Some("  ")), timeout).is_err());
        assert!(MastodonPublisher::new(&config_with_token(Some("token")), timeout).is_ok());
    }

    #[test]
    fn test_endpoint() {
        let mut config = config_with_token(Some("token"));
        config.instance_url = "https://mastodon.example/".to_string();

        let publisher = MastodonPublisher::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(publisher.endpoint(), "https://mastodon.example/api/v1/statuses");
    }

    #[test]
    fn test_check_status_length() {
        assert!(check_status_length(&"x".repeat(MAX_STATUS_CHARS)).is_ok());
        let error = check_status_length(&"x".repeat(MAX_STATUS_CHARS + 1)).unwrap_err();
        assert!(matches!(error, Error::Publishing { .. }));
    }

    #[test]
    fn test_status_request_body() {
        let body = serde_json::to_value(StatusRequest {
            status: "Daily Records",
            visibility: "unlisted",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "Daily Records", "visibility": "unlisted"})
        );
    }
}
