//! Tests for grant-section message framing and error propagation.

use async_trait::async_trait;
use scrivano::{
    ChatTransport, CompletionRequest, CompletionResponse, GenerationStrategy, GrantComposer,
    GrantDetails, Role, ScrivanoErrorKind, DEFAULT_MODEL,
};
use scrivano_core::{Choice, ChoiceMessage};
use scrivano_error::{TransportError, TransportErrorKind, TransportResult};
use std::sync::Mutex;

/// Records requests and replies with a canned section, or always fails.
struct StubTransport {
    requests: Mutex<Vec<CompletionRequest>>,
    fail: bool,
}

impl StubTransport {
    fn succeeding() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl ChatTransport for StubTransport {
    async fn complete(&self, request: &CompletionRequest) -> TransportResult<CompletionResponse> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());

        if self.fail {
            return Err(TransportError::new(TransportErrorKind::RequestFailed {
                status: Some(500),
                message: "model overloaded".to_string(),
            }));
        }

        Ok(CompletionResponse {
            choices: vec![Choice {
                message: ChoiceMessage {
                    role: Some("assistant".to_string()),
                    content: "Our organization respectfully requests funding.".to_string(),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        })
    }
}

fn details() -> GrantDetails {
    GrantDetails::builder()
        .project_name("River Cleanup")
        .organization_name("Clearwater Trust")
        .funding_goal(50_000u64)
        .deadline("2026-03-01")
        .project_description("Remove industrial debris from the upper watershed.")
        .build()
        .expect("valid grant details")
}

#[tokio::test]
async fn frames_system_and_user_messages() -> anyhow::Result<()> {
    let transport = StubTransport::succeeding();
    let composer =
        GrantComposer::new(GenerationStrategy::new(&transport, DEFAULT_MODEL));

    let section = composer.generate_section(&details()).await?;
    assert_eq!(section, "Our organization respectfully requests funding.");

    let requests = transport.requests.lock().expect("requests lock poisoned");
    assert_eq!(requests.len(), 1);

    let messages = requests[0].messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(*messages[0].role(), Role::System);
    assert_eq!(messages[0].content().as_str(), "You are an expert grant writer.");
    assert_eq!(*messages[1].role(), Role::User);
    assert!(messages[1]
        .content()
        .starts_with("Create a grant section using these details:"));
    assert!(messages[1].content().contains("\"project_name\": \"River Cleanup\""));
    assert!(messages[1].content().contains("\"funding_goal\": 50000"));
    Ok(())
}

#[tokio::test]
async fn default_temperature_is_used_for_primary() -> anyhow::Result<()> {
    let transport = StubTransport::succeeding();
    let composer =
        GrantComposer::new(GenerationStrategy::new(&transport, DEFAULT_MODEL));

    composer.generate_section(&details()).await?;

    let requests = transport.requests.lock().expect("requests lock poisoned");
    assert!((requests[0].temperature() - 0.7).abs() < f32::EPSILON);
    assert_eq!(*requests[0].max_tokens(), 2000);
    Ok(())
}

#[tokio::test]
async fn exhausted_strategy_surfaces_generation_error() {
    let transport = StubTransport::failing();
    let composer = GrantComposer::new(GenerationStrategy::new(&transport, DEFAULT_MODEL))
        .with_temperature(0.9);

    let err = composer
        .generate_section(&details())
        .await
        .expect_err("all attempts fail");

    match err.kind() {
        ScrivanoErrorKind::Generation(e) => {
            assert!(format!("{}", e).contains("All generation attempts failed"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }

    // Primary and backup were both attempted
    let requests = transport.requests.lock().expect("requests lock poisoned");
    assert_eq!(requests.len(), 2);
}
