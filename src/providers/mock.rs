/*!
 * Mock oracle implementation for testing.
 *
 * This module provides a mock oracle that simulates different behaviors:
 * - `MockOracle::fixed(reply)` - Always answers with the same reply
 * - `MockOracle::echo()` - Answers with the prompt it received
 * - `MockOracle::failing()` - Always fails with an error
 *
 * Every prompt is recorded so tests can assert on what was sent and on
 * whether the oracle was called at all.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::OracleError;
use crate::providers::Oracle;

/// Behavior mode for the mock oracle
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the given reply
    Fixed(String),
    /// Succeeds with the prompt itself as the reply
    Echo,
    /// Always fails with an API error
    Failing,
}

/// Mock oracle for exercising the service without a network
#[derive(Debug, Clone)]
pub struct MockOracle {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of generate calls, shared between clones
    call_count: Arc<AtomicUsize>,
    /// Prompts received, in order, shared between clones
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockOracle {
    /// Create a new mock oracle with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock oracle that always returns `reply`
    pub fn fixed(reply: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(reply.into()))
    }

    /// Create a mock oracle that returns the prompt it was given
    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Create a failing mock oracle that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of times `generate` was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The most recent prompt, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().last().cloned()
    }

    /// All prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(prompt.to_string());

        match &self.behavior {
            MockBehavior::Fixed(reply) => Ok(reply.clone()),
            MockBehavior::Echo => Ok(prompt.to_string()),
            MockBehavior::Failing => Err(OracleError::ApiError {
                message: "Simulated oracle failure".to_string(),
                status_code: 500,
            }),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
