//! Grant-section composer.
//!
//! Frames structured grant details into a chat conversation and drives the
//! fallback generation strategy. Rendering failures to the user stays with
//! the caller; this layer only surfaces [`ScrivanoError`].

use derive_builder::Builder;
use derive_getters::Getters;
use scrivano_client::{ChatTransport, GenerationStrategy};
use scrivano_core::{Message, Role};
use scrivano_error::{JsonError, ScrivanoResult};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// System prompt for grant-section generation.
const GRANT_SYSTEM_PROMPT: &str = "You are an expert grant writer.";

/// Default sampling temperature for the primary attempt.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Field values collected for one grant section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct GrantDetails {
    /// Project name
    project_name: String,
    /// Organization applying for funding
    organization_name: String,
    /// Funding goal in whole dollars
    funding_goal: u64,
    /// Submission deadline, ISO 8601 date
    deadline: String,
    /// Free-form project description
    project_description: String,
}

impl GrantDetails {
    /// Returns a builder for constructing GrantDetails.
    pub fn builder() -> GrantDetailsBuilder {
        GrantDetailsBuilder::default()
    }
}

/// Composes grant sections through a generation strategy.
#[derive(Debug, Clone)]
pub struct GrantComposer<T: ChatTransport> {
    strategy: GenerationStrategy<T>,
    temperature: f32,
}

impl<T: ChatTransport> GrantComposer<T> {
    /// Creates a composer with the default temperature.
    pub fn new(strategy: GenerationStrategy<T>) -> Self {
        Self {
            strategy,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Overrides the sampling temperature for the primary attempt.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Generates a grant section from the given details.
    ///
    /// # Errors
    ///
    /// Propagates [`scrivano_error::GenerationErrorKind::AllAttemptsFailed`]
    /// when every payload variant fails.
    #[instrument(skip_all, fields(project = %details.project_name()))]
    pub async fn generate_section(&self, details: &GrantDetails) -> ScrivanoResult<String> {
        let details_json = serde_json::to_string_pretty(details)
            .map_err(|e| JsonError::new(format!("Failed to serialize grant details: {}", e)))?;

        let messages = vec![
            Message::new(Role::System, GRANT_SYSTEM_PROMPT),
            Message::new(
                Role::User,
                format!("Create a grant section using these details: {}", details_json),
            ),
        ];

        let generation = self
            .strategy
            .generate_with_fallback(&messages, self.temperature)
            .await?;

        Ok(generation.text().clone())
    }
}
