//! Backend Readiness Gate
//!
//! Polls the backend health endpoint until it answers with a success status or
//! the attempt budget runs out. Connection failures and error statuses count the
//! same: one failed attempt each.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{FetchError, Result};

// == Backoff ==
/// Delay schedule between readiness checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backoff {
    /// Same delay after every failed attempt
    Constant(Duration),
    /// `initial * 2^attempt`, capped at `max`. With `jitter`, the actual delay is
    /// drawn uniformly from `[0, computed]`.
    Exponential {
        initial: Duration,
        max: Duration,
        jitter: bool,
    },
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Constant(Duration::from_millis(1000))
    }
}

impl Backoff {
    /// Delay to wait after the failed attempt with zero-based index `attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match self {
            Backoff::Constant(delay) => *delay,
            Backoff::Exponential {
                initial,
                max,
                jitter,
            } => {
                let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
                let delay = initial.checked_mul(factor).unwrap_or(*max).min(*max);
                if *jitter {
                    let upper = delay.as_millis().min(u64::MAX as u128) as u64;
                    Duration::from_millis(rand::thread_rng().gen_range(0..=upper))
                } else {
                    delay
                }
            }
        }
    }
}

// == Readiness Gate ==
/// Bounded retry loop in front of bulk endpoints.
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    client: reqwest::Client,
    health_url: String,
    max_retries: u32,
    backoff: Backoff,
}

impl ReadinessGate {
    /// Creates a gate probing the health endpoint that belongs to `api_base_url`.
    pub fn new(
        client: reqwest::Client,
        api_base_url: &str,
        max_retries: u32,
        backoff: Backoff,
    ) -> Self {
        Self {
            client,
            health_url: health_url_for(api_base_url),
            max_retries,
            backoff,
        }
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Waits using the configured attempt budget and backoff.
    pub async fn wait_for_backend(&self) -> Result<()> {
        self.wait_with(self.max_retries, &self.backoff).await
    }

    /// Waits with an explicit attempt budget and a constant delay.
    pub async fn wait_for_backend_with(&self, max_retries: u32, delay: Duration) -> Result<()> {
        self.wait_with(max_retries, &Backoff::Constant(delay)).await
    }

    /// Checks health up to `max_retries` times, sleeping between attempts but not after
    /// the last one.
    ///
    /// # Errors
    /// `FetchError::BackendUnavailable` once every attempt has failed. A budget
    /// of zero fails without a request.
    pub async fn wait_with(&self, max_retries: u32, backoff: &Backoff) -> Result<()> {
        for attempt in 0..max_retries {
            match self.check_health().await {
                Ok(()) => {
                    info!("Backend is ready!");
                    return Ok(());
                }
                Err(e) => {
                    warn!(
                        "Backend not ready, attempt {}/{}: {}",
                        attempt + 1,
                        max_retries,
                        e
                    );
                }
            }

            if attempt + 1 < max_retries {
                let delay = backoff.delay_for(attempt);
                debug!("Retrying health check in {:?}", delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(FetchError::BackendUnavailable {
            attempts: max_retries,
        })
    }

    /// Single health request. Any 2xx is ready.
    async fn check_health(&self) -> Result<()> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FetchError::Http(status.as_u16()))
        }
    }
}

/// Health endpoint for a backend base path: the first `/api` is dropped and
/// `/health` appended.
pub fn health_url_for(api_base_url: &str) -> String {
    format!("{}/health", api_base_url.replacen("/api", "", 1))
}
