use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::error;
use url::Url;

use crate::domain::value_objects::{
    enums::couriers::Courier, shipping_costs::ShippingCostOption,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Minimal client for the third-party shipping rate API, built on reqwest.
pub struct ShippingRateClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct RateEnvelope {
    rajaongkir: RatePayload,
}

#[derive(Debug, Deserialize)]
struct RatePayload {
    status: RateStatus,
    #[serde(default)]
    results: Vec<RateResult>,
}

#[derive(Debug, Deserialize)]
struct RateStatus {
    code: u16,
    description: String,
}

#[derive(Debug, Deserialize)]
struct RateResult {
    #[serde(default)]
    costs: Vec<RateService>,
}

#[derive(Debug, Deserialize)]
struct RateService {
    service: String,
    description: String,
    #[serde(default)]
    cost: Vec<RateCost>,
}

#[derive(Debug, Deserialize)]
struct RateCost {
    value: i64,
    etd: String,
}

impl ShippingRateClient {
    pub fn new(base_url: Url, api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build shipping rate http client")?;

        Ok(Self {
            http,
            base_url: with_trailing_slash(base_url),
            api_key,
        })
    }

    pub async fn fetch_costs(
        &self,
        origin: &str,
        destination: &str,
        weight: i32,
        courier: Courier,
    ) -> Result<Vec<ShippingCostOption>> {
        let endpoint = self.base_url.join("cost")?;
        let body = [
            ("origin", origin.to_string()),
            ("destination", destination.to_string()),
            ("weight", weight.to_string()),
            ("courier", courier.to_string()),
        ];

        let resp = self
            .http
            .post(endpoint)
            .header("key", &self.api_key)
            .form(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            error!(
                status = %status,
                response_body = %text,
                courier = %courier,
                "shipping rate api request failed"
            );
            return Err(anyhow!(
                "shipping rate api request failed with status {}",
                status
            ));
        }

        parse_rate_response(&text, courier)
    }
}

/// Flattens the provider envelope into one option per (service, cost) pair.
pub fn parse_rate_response(body: &str, courier: Courier) -> Result<Vec<ShippingCostOption>> {
    let envelope: RateEnvelope =
        serde_json::from_str(body).context("failed to decode shipping rate response")?;
    let payload = envelope.rajaongkir;

    if payload.status.code != 200 {
        return Err(anyhow!(
            "shipping rate api rejected the request: {} ({})",
            payload.status.description,
            payload.status.code
        ));
    }

    let options = payload
        .results
        .into_iter()
        .flat_map(|result| result.costs)
        .flat_map(|service| {
            let name = service.service;
            let description = service.description;
            service.cost.into_iter().map(move |cost| ShippingCostOption {
                courier,
                service: name.clone(),
                description: description.clone(),
                cost: cost.value,
                etd: cost.etd,
            })
        })
        .collect();

    Ok(options)
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
