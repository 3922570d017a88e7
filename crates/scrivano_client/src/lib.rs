//! Chat-completion transport and fallback generation strategy.
//!
//! Two layers, composed linearly: [`HttpTransport`] delivers a single
//! request over HTTP with connection-level retry, and
//! [`GenerationStrategy`] drives a transport through an ordered ladder of
//! payload variants until one yields text. The two retry layers are
//! independent: the transport absorbs transient infrastructure faults, the
//! strategy degrades request ambitiousness.

mod retry;
mod strategy;
mod transport;

pub use retry::{RetryConfig, retry_with_backoff};
pub use strategy::{DEFAULT_MODEL, Generation, GenerationStrategy, PayloadVariant};
pub use transport::{ChatTransport, HttpTransport};
