//! Two-tier generation strategy with degraded-settings fallback.

use crate::transport::ChatTransport;
use derive_getters::Getters;
use scrivano_core::{CompletionRequest, CompletionResponse, Message};
use scrivano_error::{GenerationError, GenerationErrorKind, GenerationResult};
use tracing::{debug, instrument, warn};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Token ceiling for the primary attempt.
const PRIMARY_MAX_TOKENS: u32 = 2000;
/// Fixed temperature for the conservative backup attempt.
const BACKUP_TEMPERATURE: f32 = 0.5;
/// Token ceiling for the conservative backup attempt.
const BACKUP_MAX_TOKENS: u32 = 1000;

/// One attempt tier: overrides applied to the caller's request.
///
/// The degradation policy is data, not code: a strategy holds an ordered
/// list of variants and tries them until one succeeds. A variant without a
/// temperature override uses the caller-supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct PayloadVariant {
    /// Temperature override; None keeps the caller-supplied value
    temperature: Option<f32>,
    /// Maximum tokens to generate
    max_tokens: u32,
}

impl PayloadVariant {
    /// Creates a new payload variant.
    pub fn new(temperature: Option<f32>, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }

    /// The default two-tier ladder: full-capability primary, then a
    /// conservative backup with lower temperature and a smaller token budget.
    pub fn default_ladder() -> Vec<Self> {
        vec![
            Self::new(None, PRIMARY_MAX_TOKENS),
            Self::new(Some(BACKUP_TEMPERATURE), BACKUP_MAX_TOKENS),
        ]
    }
}

/// A successful generation: the extracted text plus the raw response.
#[derive(Debug, Clone, Getters)]
pub struct Generation {
    /// Text content of the first completion choice
    text: String,
    /// Raw structured response
    response: CompletionResponse,
}

/// Drives a [`ChatTransport`] through an ordered list of payload variants
/// until one succeeds.
///
/// Holds no state across calls; each call is an independent sequential
/// attempt chain.
#[derive(Debug, Clone)]
pub struct GenerationStrategy<T: ChatTransport> {
    transport: T,
    model: String,
    variants: Vec<PayloadVariant>,
}

impl<T: ChatTransport> GenerationStrategy<T> {
    /// Creates a strategy with the default two-tier ladder.
    pub fn new(transport: T, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
            variants: PayloadVariant::default_ladder(),
        }
    }

    /// Replaces the variant ladder.
    pub fn with_variants(mut self, variants: Vec<PayloadVariant>) -> Self {
        self.variants = variants;
        self
    }

    /// Returns the model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generates text, degrading request settings across the variant ladder.
    ///
    /// Variants are tried strictly in order; the first success
    /// short-circuits the rest. Individual variant failures are recovered
    /// locally by moving to the next tier.
    ///
    /// # Errors
    /// - [`GenerationErrorKind::NoVariants`] if the ladder is empty
    /// - [`GenerationErrorKind::AllAttemptsFailed`] if every variant fails,
    ///   embedding the last failure description
    #[instrument(skip_all, fields(model = %self.model, variants = self.variants.len()))]
    pub async fn generate_with_fallback(
        &self,
        messages: &[Message],
        temperature: f32,
    ) -> GenerationResult<Generation> {
        if self.variants.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::NoVariants));
        }

        let mut last_error = String::new();

        for (tier, variant) in self.variants.iter().enumerate() {
            let request = CompletionRequest::new(
                self.model.clone(),
                messages.to_vec(),
                (*variant.temperature()).unwrap_or(temperature),
                *variant.max_tokens(),
            );

            match self.transport.complete(&request).await {
                Ok(response) => {
                    let text = response.content();
                    debug!(tier, chars = text.len(), "Generation succeeded");
                    return Ok(Generation { text, response });
                }
                Err(e) => {
                    warn!(tier, error = %e, "Variant failed, trying next");
                    last_error = e.to_string();
                }
            }
        }

        Err(GenerationError::new(GenerationErrorKind::AllAttemptsFailed {
            last_error,
        }))
    }
}
