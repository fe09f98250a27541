// HTTP ContestApi Implementation

use crate::client::{build_client, HttpApiConfig};
use async_trait::async_trait;
use eurovisor_core::domain::{Contest, ContestSummary, ContestantDetails, ContestantId, Year};
use eurovisor_core::error::{AppError, Result};
use eurovisor_core::port::ContestApi;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{debug, instrument};

// Helper to convert reqwest::Error to AppError
fn map_reqwest_error(err: reqwest::Error, url: &str) -> AppError {
    if err.is_decode() {
        AppError::Decode(format!("{}: {}", url, err))
    } else if err.is_timeout() {
        AppError::Transport(format!("timed out: {}", url))
    } else if let Some(status) = err.status() {
        AppError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        }
    } else {
        AppError::Transport(format!("{}: {}", url, err))
    }
}

pub struct HttpContestApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContestApi {
    pub fn new(config: &HttpApiConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.normalized_base_url()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, &url))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(url));
        }
        if !status.is_success() {
            return Err(AppError::Http {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| map_reqwest_error(e, &url))
    }
}

#[async_trait]
impl ContestApi for HttpContestApi {
    async fn countries(&self) -> Result<HashMap<String, String>> {
        self.get_json("countries").await
    }

    async fn years(&self) -> Result<Vec<Year>> {
        self.get_json("contests/years").await
    }

    async fn contests(&self) -> Result<Vec<ContestSummary>> {
        self.get_json("contests").await
    }

    async fn contest_by_year(&self, year: Year) -> Result<Contest> {
        self.get_json(&format!("contests/{}", year)).await
    }

    async fn contestant_details(&self, year: Year, id: ContestantId) -> Result<ContestantDetails> {
        self.get_json(&format!("contests/{}/contestants/{}", year, id))
            .await
    }
}
