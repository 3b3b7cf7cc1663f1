use crate::prelude::*;
use numclass_core::fact::{fact_url, interpret_fact_body, FactOutcome, DEFAULT_FACT_API_URL};
use std::time::Duration;

/// Default budget for one fun-fact lookup
pub const DEFAULT_FACT_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone)]
pub struct FactConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for FactConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FACT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_FACT_TIMEOUT_MS),
        }
    }
}

/// Client for the math-facts provider.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct FactClient {
    client: reqwest::Client,
    config: FactConfig,
}

impl FactClient {
    pub fn new(config: FactConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &FactConfig {
        &self.config
    }

    /// Fetch the fun fact for `n`, reporting exactly what went wrong.
    pub async fn fetch(&self, n: i64) -> std::result::Result<String, Error> {
        let url = fact_url(&self.config.base_url, n);
        log::debug!("Fetching fun fact: {url}");

        let response = self
            .client
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.request_error(e))?;

        match interpret_fact_body(status, &body) {
            FactOutcome::Found(text) => Ok(text),
            FactOutcome::Status(code) => Err(Error::FactStatus(code)),
            FactOutcome::Malformed(reason) => Err(Error::FactMalformed(reason)),
            FactOutcome::Timeout => Err(Error::FactTimeout(self.config.timeout.as_millis())),
            FactOutcome::Network(reason) => Err(Error::Network(reason)),
        }
    }

    /// Best-effort lookup. Never fails; the caller collapses misses to `""`.
    pub async fn lookup(&self, n: i64) -> FactOutcome {
        match self.fetch(n).await {
            Ok(text) => FactOutcome::Found(text),
            Err(err) => {
                log::warn!("Fun fact for {n} unavailable: {err}");
                match err {
                    Error::FactTimeout(_) => FactOutcome::Timeout,
                    Error::FactStatus(code) => FactOutcome::Status(code),
                    Error::FactMalformed(reason) => FactOutcome::Malformed(reason),
                    other => FactOutcome::Network(other.to_string()),
                }
            }
        }
    }

    fn request_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::FactTimeout(self.config.timeout.as_millis())
        } else {
            Error::Network(err.to_string())
        }
    }
}
