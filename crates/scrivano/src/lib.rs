//! Unified interface for the Scrivano chat-completion client.
//!
//! Re-exports the core data model, the HTTP transport with connection-level
//! retry, and the fallback generation strategy, plus the grant-section
//! composer built on top of them.
//!
//! # Examples
//!
//! ```no_run
//! use scrivano::{
//!     EndpointConfig, GenerationStrategy, HttpTransport, Message, Role, DEFAULT_MODEL,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EndpointConfig::builder()
//!     .base_url("https://llm.example.com:57987")
//!     .username("root")
//!     .password("secret")
//!     .build()?;
//!
//! let transport = HttpTransport::new(config)?;
//! let strategy = GenerationStrategy::new(transport, DEFAULT_MODEL);
//!
//! let messages = vec![
//!     Message::new(Role::System, "You are an expert grant writer."),
//!     Message::new(Role::User, "Draft an opening paragraph."),
//! ];
//!
//! let generation = strategy.generate_with_fallback(&messages, 0.7).await?;
//! println!("{}", generation.text());
//! # Ok(()) }
//! ```

mod grant;

pub use grant::{GrantComposer, GrantDetails, GrantDetailsBuilder};

pub use scrivano_client::{
    ChatTransport, DEFAULT_MODEL, Generation, GenerationStrategy, HttpTransport, PayloadVariant,
    RetryConfig,
};
pub use scrivano_core::{
    CompletionRequest, CompletionResponse, EndpointConfig, Message, Role,
};
pub use scrivano_error::{
    GenerationError, GenerationErrorKind, ScrivanoError, ScrivanoErrorKind, ScrivanoResult,
    TransportError, TransportErrorKind,
};
