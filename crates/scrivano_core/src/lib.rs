//! Core data types for the Scrivano chat-completion client.
//!
//! This crate provides the data model shared by the transport and the
//! generation strategy: conversation messages, the wire request/response
//! types for OpenAI-compatible chat completions, and endpoint configuration.

mod endpoint;
mod message;
mod request;
mod role;

pub use endpoint::{EndpointConfig, EndpointConfigBuilder};
pub use message::{Message, MessageBuilder};
pub use request::{
    Choice, ChoiceMessage, CompletionRequest, CompletionRequestBuilder, CompletionResponse, Usage,
};
pub use role::Role;
