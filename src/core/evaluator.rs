use std::sync::Arc;
use std::time::Duration;

use crate::core::error::{CompatibilityError, ProviderError};
use crate::core::{parser::parse_compatibility, prompt::build_prompt};
use crate::models::{CompatibilityRequest, CompatibilityResult};
use crate::services::LlmClient;

/// Evaluate two profiles with a single model call
///
/// Build prompt, complete, parse. Every failure is returned as-is; there is
/// no retry, timeout or fallback at this level.
pub async fn evaluate_compatibility(
    profile1: &str,
    profile2: &str,
    llm: &dyn LlmClient,
) -> Result<CompatibilityResult, CompatibilityError> {
    let prompt = build_prompt(profile1, profile2)?;
    let raw = llm.complete(&prompt).await?;
    parse_compatibility(&raw)
}

/// Caller-side retry policy for retryable failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. `1` disables retries.
    pub max_attempts: u32,
    /// Delay before the second attempt, doubled for each later one
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    /// Delay to wait before `attempt` (1-based); zero for the first attempt
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        let factor = 1u32 << (attempt - 2).min(16);
        self.backoff.saturating_mul(factor)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Compatibility evaluator shared by request handlers
///
/// Wraps the provider client with a per-call timeout and the configured
/// retry policy. Holds no mutable state, so one instance serves all workers.
#[derive(Clone)]
pub struct CompatibilityEvaluator {
    llm: Arc<dyn LlmClient>,
    timeout: Duration,
    retry: RetryPolicy,
}

impl CompatibilityEvaluator {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            timeout: Self::DEFAULT_TIMEOUT,
            retry: RetryPolicy::none(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Evaluate a request, applying the timeout and retry policy
    pub async fn evaluate(
        &self,
        request: CompatibilityRequest,
    ) -> Result<CompatibilityResult, CompatibilityError> {
        let prompt = build_prompt(request.profile1.as_str(), request.profile2.as_str())?;
        let max_attempts = self.retry.max_attempts.max(1);

        let mut attempt = 1;
        loop {
            let delay = self.retry.delay_before(attempt);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match self.attempt(&prompt).await {
                Ok(result) => {
                    tracing::debug!(
                        "Compatibility evaluated on attempt {} (global: {})",
                        attempt,
                        result.global
                    );
                    return Ok(result);
                }
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    tracing::warn!(
                        "Compatibility attempt {}/{} failed, retrying: {}",
                        attempt,
                        max_attempts,
                        e
                    );
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(
                        "Compatibility evaluation failed after {} attempt(s) [{}]: {}",
                        attempt,
                        e.kind(),
                        e
                    );
                    return Err(e);
                }
            }
        }
    }

    async fn attempt(&self, prompt: &str) -> Result<CompatibilityResult, CompatibilityError> {
        let raw = tokio::time::timeout(self.timeout, self.llm.complete(prompt))
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))??;
        parse_compatibility(&raw)
    }
}
