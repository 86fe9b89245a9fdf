//! Generative model service trait abstraction.

use async_trait::async_trait;

use crate::error::ServiceError;

/// A text-in, text-out generative language model.
///
/// Implementations must be safe to call from many tasks at once; the
/// orchestrator shares one instance behind an `Arc`.
///
/// # Example
///
/// ```ignore
/// use snapshot::traits::ModelService;
///
/// async fn overview<M: ModelService + ?Sized>(model: &M) -> Option<String> {
///     model.generate("Give a brief overview of tides").await.ok().flatten()
/// }
/// ```
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Send one prompt and wait for the full answer.
    ///
    /// # Returns
    /// * `Ok(Some(text))` - the model answered with text
    /// * `Ok(None)` - the call succeeded but produced no usable text
    /// * `Err(_)` - the call itself failed
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ServiceError>;
}
