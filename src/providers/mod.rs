/*!
 * Provider implementations for remote text generation.
 *
 * This module contains client implementations for the language-model
 * services the assistant can call before falling back to local rules:
 * - Gemini: Google Generative Language API integration
 * - Mock: scripted provider used by the test suite
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all LLM providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the assist service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Short provider name used in log lines
    fn name(&self) -> &str;

    /// Generate text for a fully rendered prompt
    ///
    /// # Arguments
    /// * `prompt` - The prompt to send
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The generated text or an error
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod gemini;
pub mod mock;
