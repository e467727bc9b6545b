use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{error::WeatherError, model::WeatherEnvelope};

use super::{Icao, MetarProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.checkwx.com";

/// Client for the CheckWX decoded METAR endpoint.
#[derive(Debug, Clone)]
pub struct CheckWxProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl CheckWxProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn decoded_url(&self, icao: &Icao) -> String {
        format!("{}/metar/{}/decoded", self.base_url, icao)
    }
}

#[async_trait]
impl MetarProvider for CheckWxProvider {
    async fn decoded(&self, icao: &Icao) -> Result<WeatherEnvelope, WeatherError> {
        tracing::info!(%icao, "Requesting decoded METAR");

        let res = self
            .http
            .get(self.decoded_url(icao))
            .query(&[("x-api-key", self.api_key.as_str())])
            .send()
            .await
            .map_err(WeatherError::Fetch)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Fetch)?;

        if is_error_status(status) {
            tracing::warn!(%icao, status = status.as_u16(), "Provider returned an error");
            return Err(WeatherError::ProviderHttp {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        tracing::debug!(%icao, %body, "Provider response");

        Ok(serde_json::from_str(&body)?)
    }
}

/// Only 4xx and 5xx count as provider errors.
fn is_error_status(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
