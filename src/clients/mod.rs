/// External API clients module
use crate::errors::ApiResult;
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("night-sky-site/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Naval almanac client: solar/lunar rise-set times and moon phase
/// for one day at a fixed location.
pub struct AlmanacClient {
    http_client: HttpClient,
    base_url: String,
    coords: String,
    tz: String,
    id: String,
}

impl AlmanacClient {
    pub fn new(base_url: String, coords: String, tz: String, id: String) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url,
            coords,
            tz,
            id,
        })
    }

    /// Fetch the rise/set/phase record for `date`
    pub async fn fetch_oneday(&self, date: NaiveDate) -> ApiResult<Value> {
        let resp = self
            .http_client
            .get_client()
            .get(&self.base_url)
            .query(&[
                ("date", date.format("%Y-%m-%d").to_string()),
                ("coords", self.coords.clone()),
                ("tz", self.tz.clone()),
                ("id", self.id.clone()),
            ])
            .send()
            .await?;

        let json = resp.json().await?;
        Ok(json)
    }
}

/// Astronomy-picture-of-the-day client
pub struct ApodClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(base_url: String, api_key: String) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url,
            api_key,
        })
    }

    /// Fetch today's picture metadata
    pub async fn fetch_apod(&self) -> ApiResult<Value> {
        let mut req = self.http_client.get_client().get(&self.base_url);

        if !self.api_key.is_empty() {
            req = req.query(&[("api_key", &self.api_key)]);
        }

        let json = req.send().await?.json().await?;
        Ok(json)
    }
}
