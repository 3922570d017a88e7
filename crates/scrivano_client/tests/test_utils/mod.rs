//! Test utilities for Scrivano client tests.
//!
//! This module provides a scripted mock transport and test helpers.

use async_trait::async_trait;
use scrivano_client::ChatTransport;
use scrivano_core::{Choice, ChoiceMessage, CompletionRequest, CompletionResponse};
use scrivano_error::{TransportError, TransportErrorKind, TransportResult};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted outcome for one mock request.
pub enum MockOutcome {
    /// Succeed with the given response
    Respond(CompletionResponse),
    /// Fail with the given transport error kind
    Fail(TransportErrorKind),
}

/// Mock transport that replays scripted outcomes in order and records every
/// request it receives.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockTransport {
    /// Creates a mock that replays the given outcomes in order.
    pub fn new(outcomes: Vec<MockOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns copies of the requests observed so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn complete(&self, request: &CompletionRequest) -> TransportResult<CompletionResponse> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());

        let outcome = self
            .outcomes
            .lock()
            .expect("outcomes lock poisoned")
            .pop_front()
            .expect("mock transport ran out of scripted outcomes");

        match outcome {
            MockOutcome::Respond(response) => Ok(response),
            MockOutcome::Fail(kind) => Err(TransportError::new(kind)),
        }
    }
}

/// Helper to build a response whose first choice carries the given text.
pub fn text_response(text: &str) -> CompletionResponse {
    CompletionResponse {
        choices: vec![Choice {
            message: ChoiceMessage {
                role: Some("assistant".to_string()),
                content: text.to_string(),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}
