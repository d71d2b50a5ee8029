/*!
 * Oracle implementations for the text-completion service.
 *
 * The rest of the application only sees the narrow `Oracle` trait:
 * a prompt goes in, text comes out. This module contains:
 * - Gemini: Google Generative Language API client
 * - Mock: deterministic oracle for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::OracleError;

/// Common trait for all completion oracles
///
/// Implementations must be shareable across request tasks, so the
/// service can hold one behind an `Arc<dyn Oracle>`.
#[async_trait]
pub trait Oracle: Send + Sync + Debug {
    /// Generate a completion for the given prompt
    ///
    /// # Arguments
    /// * `prompt` - The full instruction prompt
    ///
    /// # Returns
    /// * `Result<String, OracleError>` - The raw reply text or an error
    async fn generate(&self, prompt: &str) -> Result<String, OracleError>;

    /// Model identifier used by this oracle, for logging and health output
    fn model(&self) -> &str;
}

pub mod gemini;
pub mod mock;

pub use gemini::GeminiOracle;
pub use mock::{MockBehavior, MockOracle};
