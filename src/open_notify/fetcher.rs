//! Open Notify HTTP client.

use crate::config::ApiConfig;
use crate::open_notify::types::{Astronauts, PassReport, PositionReport};
use anyhow::{Context, Result};
use reqwest::Url;
use serde::de::DeserializeOwned;

pub struct OpenNotifyClient {
    client: reqwest::Client,
    api: ApiConfig,
}

impl OpenNotifyClient {
    pub fn new(api: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), api)
    }

    pub fn with_client(client: reqwest::Client, api: ApiConfig) -> Self {
        Self { client, api }
    }

    pub async fn astronauts(&self) -> Result<Astronauts> {
        let url = endpoint_url(&self.api, &self.api.astronauts_path)?;
        let body = fetch_body(&self.client, &url).await?;
        parse_astronauts(&body)
    }

    pub async fn position(&self) -> Result<PositionReport> {
        let url = endpoint_url(&self.api, &self.api.position_path)?;
        let body = fetch_body(&self.client, &url).await?;
        parse_position(&body)
    }

    pub async fn next_pass(&self, latitude: f64, longitude: f64) -> Result<PassReport> {
        let url = pass_url(&self.api, latitude, longitude)?;
        let body = fetch_body(&self.client, &url).await?;
        parse_pass(&body)
    }
}

async fn fetch_body(client: &reqwest::Client, url: &Url) -> Result<String> {
    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;
    let status = resp.status();
    let body = resp.text().await?;
    eprintln!("[ISS FETCH] status={} url={} bytes={}", status, url, body.len());
    if !status.is_success() {
        anyhow::bail!("HTTP {} for {}", status, url);
    }
    Ok(body)
}

fn endpoint_url(api: &ApiConfig, path: &str) -> Result<Url> {
    let base = format!("{}/", api.base_url.trim_end_matches('/'));
    Url::parse(&base)
        .and_then(|root| root.join(path))
        .with_context(|| format!("invalid endpoint {}{}", base, path))
}

fn pass_url(api: &ApiConfig, latitude: f64, longitude: f64) -> Result<Url> {
    let mut url = endpoint_url(api, &api.passover_path)?;
    url.query_pairs_mut()
        .append_pair("lat", &latitude.to_string())
        .append_pair("lon", &longitude.to_string());
    Ok(url)
}

fn parse_json<T: DeserializeOwned>(body: &str, what: &str) -> Result<T> {
    serde_json::from_str(body).with_context(|| format!("malformed {} response", what))
}

pub fn parse_astronauts(body: &str) -> Result<Astronauts> {
    parse_json(body, "astronauts")
}

pub fn parse_position(body: &str) -> Result<PositionReport> {
    parse_json(body, "position")
}

pub fn parse_pass(body: &str) -> Result<PassReport> {
    parse_json(body, "passover")
}
