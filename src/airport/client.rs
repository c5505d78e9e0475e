use crate::airport::error::LookupError;
use log::debug;
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct AirportClient {
    client: reqwest::Client,
}

impl AirportClient {
    pub fn new(
        builder: reqwest::ClientBuilder,
        timeout: Duration,
        headers: HeaderMap,
    ) -> Result<Self, LookupError> {
        let client = builder
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(AirportClient { client })
    }

    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, LookupError> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        Ok(response.json().await?)
    }
}

pub fn rapid_api_headers(api_key: &str, host: &str) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    let mut key = HeaderValue::from_str(api_key)?;
    key.set_sensitive(true);
    headers.insert("X-RapidAPI-Key", key);
    headers.insert("X-RapidAPI-Host", HeaderValue::from_str(host)?);
    Ok(headers)
}
