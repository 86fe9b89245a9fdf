//! Generation orchestrator.
//!
//! [`ContentGenerator`] is the only thing presentation talks to:
//! [`ContentGenerator::generate_content`] starts a run, and
//! [`ContentGenerator::observer`] hands out read-only views of the state.
//!
//! Each call publishes `Loading` immediately, then runs its pipeline on a
//! tokio task and publishes exactly one of `Success` or `Error`. Failures
//! never escape the task; they are only visible as `UiState::Error`.
//!
//! Overlapping calls are not cancelled. Each finishes independently and the
//! last one to publish determines the final state.

pub mod enhance;
pub mod multi_call;
pub mod single_call;
mod strategy;

pub use enhance::validate_and_enhance;
pub use strategy::GenerationStrategy;

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::adapters::{GeminiModelService, ReqwestHttpClient};
use crate::config::{ConfigError, GeneratorConfig};
use crate::error::{GenerationResult, FALLBACK_ERROR_MESSAGE};
use crate::models::{ContentItem, UiState};
use crate::state::{state_channel, StateObserver, StateWriter};
use crate::traits::{HttpClient, ModelService};

/// Published as the error when a run cannot be started at all.
pub const NO_RUNTIME_MESSAGE: &str = "No async runtime available to run the generation";

/// Drives snapshot generation and owns the published state.
pub struct ContentGenerator {
    model: Arc<dyn ModelService>,
    strategy: GenerationStrategy,
    writer: Arc<StateWriter>,
    observer: StateObserver,
    /// Runtime current at construction, used when `generate_content` is
    /// called from outside any runtime
    runtime: Option<Handle>,
}

impl ContentGenerator {
    /// Create a generator over any model service. State starts `Initial`.
    ///
    /// If called inside a tokio runtime, that runtime is remembered for runs
    /// started from plain threads.
    pub fn new(model: Arc<dyn ModelService>, strategy: GenerationStrategy) -> Self {
        let (writer, observer) = state_channel();
        Self {
            model,
            strategy,
            writer: Arc::new(writer),
            observer,
            runtime: Handle::try_current().ok(),
        }
    }

    /// Run pipelines on `runtime` when no runtime is current at the call site.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Create a generator talking to the configured generative-language API.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let http: Arc<dyn HttpClient> = match config.request_timeout {
            Some(timeout) => Arc::new(
                ReqwestHttpClient::with_timeout(timeout)
                    .map_err(|e| ConfigError::HttpClient(e.to_string()))?,
            ),
            None => Arc::new(ReqwestHttpClient::new()),
        };
        let model = GeminiModelService::new(
            http,
            config.base_url.clone(),
            config.model.clone(),
            config.api_key.clone(),
        );
        Ok(Self::new(Arc::new(model), config.strategy))
    }

    pub fn strategy(&self) -> GenerationStrategy {
        self.strategy
    }

    /// A read-only handle on the published state.
    pub fn observer(&self) -> StateObserver {
        self.observer.clone()
    }

    pub fn current_state(&self) -> UiState {
        self.observer.current()
    }

    /// Start generating snapshots for `topic`.
    ///
    /// The topic is passed to the model unvalidated, empty strings included.
    /// `Loading` is published before this returns; the terminal state is
    /// published later from a task on the current runtime, or on the one
    /// remembered at construction. The returned handle can be ignored; it
    /// completes once the terminal state is published and never carries an
    /// error.
    ///
    /// With no runtime available nothing is spawned: `Loading` and then
    /// `Error(NO_RUNTIME_MESSAGE)` are published and `None` is returned.
    pub fn generate_content(&self, topic: impl Into<String>) -> Option<JoinHandle<()>> {
        let topic = topic.into();
        let request_id = Uuid::new_v4();
        let strategy = self.strategy;
        let model = Arc::clone(&self.model);
        let writer = Arc::clone(&self.writer);

        let span = info_span!("generate", %request_id, strategy = strategy.as_str());
        span.in_scope(|| info!(topic = %topic, "Generation requested"));
        writer.publish_loading(request_id);

        let Some(runtime) = Handle::try_current().ok().or_else(|| self.runtime.clone()) else {
            span.in_scope(|| error!("No tokio runtime to spawn the generation on"));
            writer.publish_error(request_id, NO_RUNTIME_MESSAGE.to_string());
            return None;
        };

        Some(runtime.spawn(
            async move {
                let run = AssertUnwindSafe(run_pipeline(model.as_ref(), strategy, &topic));
                match run.catch_unwind().await {
                    Ok(Ok(items)) => {
                        info!(count = items.len(), "Generation succeeded");
                        writer.publish_success(request_id, items);
                    }
                    Ok(Err(err)) => {
                        warn!(
                            code = err.error_code(),
                            category = %err.category(),
                            transient = err.category().is_transient(),
                            "Generation failed: {}",
                            err
                        );
                        writer.publish_error(request_id, err.user_message());
                    }
                    Err(_) => {
                        error!("Generation task panicked");
                        writer.publish_error(request_id, FALLBACK_ERROR_MESSAGE.to_string());
                    }
                }
            }
            .instrument(span),
        ))
    }
}

impl std::fmt::Debug for ContentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentGenerator")
            .field("strategy", &self.strategy)
            .field("state", &self.observer.current().label())
            .finish_non_exhaustive()
    }
}

async fn run_pipeline(
    model: &dyn ModelService,
    strategy: GenerationStrategy,
    topic: &str,
) -> GenerationResult<Vec<ContentItem>> {
    match strategy {
        GenerationStrategy::SingleCall => single_call::generate(model, topic).await,
        GenerationStrategy::MultiCall => multi_call::generate(model, topic).await,
    }
}
