/*!
 * Core assist service implementation.
 *
 * The service sends each request to the configured remote provider first.
 * Any failure (error status, network trouble, empty answer, timeout) is
 * logged and answered by the local fallback engine instead, so callers only
 * ever see an error for input the assistant cannot work on at all.
 */

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::app_config::{AssistProvider, Config};
use crate::errors::{AppError, ProviderError};
use crate::fallback::{FallbackEngine, TransformKind};
use crate::providers::gemini::{call_budget, Gemini};
use crate::providers::Provider;

use super::cache::ResultCache;
use super::prompts::build_prompt;

/// Why a result was produced locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalReason {
    /// No remote provider is configured
    Bypassed,
    /// The remote call failed with this message
    RemoteFailed(String),
}

/// Where a result came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Local(LocalReason),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("remote model"),
            Self::Local(LocalReason::Bypassed) => f.write_str("local rules"),
            Self::Local(LocalReason::RemoteFailed(_)) => f.write_str("local rules (remote unavailable)"),
        }
    }
}

/// Result of one assistant request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistOutcome {
    pub kind: TransformKind,
    pub text: String,
    pub origin: Origin,
}

impl AssistOutcome {
    pub fn is_remote(&self) -> bool {
        self.origin == Origin::Remote
    }

    /// Title shown above the result
    pub fn title(&self) -> String {
        self.kind.label()
    }
}

/// Remote-first text assistant with local fallback
pub struct AssistService {
    /// Remote provider, absent when running on local rules only
    provider: Option<Arc<dyn Provider>>,

    /// Local rule engine
    engine: FallbackEngine,

    /// Cache of remote results
    cache: ResultCache,

    /// Upper bound on one remote call, retries and backoff included
    timeout: Duration,
}

impl AssistService {
    pub fn new(provider: Option<Arc<dyn Provider>>, engine: FallbackEngine, cache: ResultCache, timeout: Duration) -> Self {
        Self {
            provider,
            engine,
            cache,
            timeout,
        }
    }

    /// Service that never leaves the machine
    pub fn local(engine: FallbackEngine) -> Self {
        Self::new(None, engine, ResultCache::new(false), Duration::from_secs(0))
    }

    /// Build the service described by `config`
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let engine = FallbackEngine::from_config(&config.fallback)?;
        let assistant = &config.assistant;

        let provider: Option<Arc<dyn Provider>> = match assistant.provider {
            AssistProvider::Gemini => {
                let gemini = &assistant.gemini;
                if gemini.api_key.trim().is_empty() {
                    warn!("Gemini API key is not set; requests will use local processing");
                }
                Some(Arc::new(
                    Gemini::new_with_config(
                        gemini.api_key.clone(),
                        gemini.model.clone(),
                        gemini.endpoint.clone(),
                        gemini.timeout_secs,
                        gemini.retry_count,
                        gemini.retry_backoff_ms,
                    )
                    .with_generation_config(gemini.generation_config()),
                ))
            }
            AssistProvider::Local => None,
        };

        Ok(Self::new(
            provider,
            engine,
            ResultCache::new(assistant.cache_enabled),
            call_budget(
                assistant.gemini.timeout_secs,
                assistant.gemini.retry_count,
                assistant.gemini.retry_backoff_ms,
            ),
        ))
    }

    pub fn engine(&self) -> &FallbackEngine {
        &self.engine
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Name of the remote provider, if any
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|provider| provider.name())
    }

    /// Check that the remote provider answers
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        match &self.provider {
            Some(provider) => provider.test_connection().await,
            None => Ok(()),
        }
    }

    /// Run `kind` over `text`
    pub async fn run(&self, kind: TransformKind, text: &str) -> Result<AssistOutcome, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }

        let Some(provider) = &self.provider else {
            debug!("No remote provider configured, running {} locally", kind);
            return Ok(self.run_local(kind, text, LocalReason::Bypassed));
        };

        if let Some(cached) = self.cache.get(&kind, text) {
            return Ok(AssistOutcome {
                kind,
                text: cached,
                origin: Origin::Remote,
            });
        }

        let started = Instant::now();
        match self.call_remote(provider.as_ref(), &kind, text).await {
            Ok(result) => {
                info!("{} completed by {} in {:.2?}", kind.label(), provider.name(), started.elapsed());
                self.cache.store(&kind, text, &result);
                Ok(AssistOutcome {
                    kind,
                    text: result,
                    origin: Origin::Remote,
                })
            }
            Err(e) => {
                warn!("{} request failed: {}. Falling back to local processing.", provider.name(), e);
                Ok(self.run_local(kind, text, LocalReason::RemoteFailed(e.to_string())))
            }
        }
    }

    async fn call_remote(&self, provider: &dyn Provider, kind: &TransformKind, text: &str) -> Result<String, ProviderError> {
        let prompt = build_prompt(kind, text);

        let result = tokio::time::timeout(self.timeout, provider.generate(&prompt))
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout.as_secs()))??;

        if result.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(result)
    }

    fn run_local(&self, kind: TransformKind, text: &str, reason: LocalReason) -> AssistOutcome {
        let result = self.engine.apply(&kind, text);
        AssistOutcome {
            kind,
            text: result,
            origin: Origin::Local(reason),
        }
    }
}
