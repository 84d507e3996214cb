//! Conversation engine for Colloquy.
//!
//! Provides:
//! - `ConversationSession`: ask questions against a rolling window of prior
//!   turns, generate sample questions, reset
//! - `BoundedConversationMemory`: the fixed-capacity FIFO history behind a session
//! - `ChatModel`: the narrow capability a session calls to generate text
//! - `OpenAiClient`: a `ChatModel` for OpenAI-compatible chat completion APIs

pub mod memory;
pub mod openai;
pub mod session;

use std::fmt;

use async_trait::async_trait;

pub use memory::{BoundedConversationMemory, DEFAULT_MAX_MESSAGES};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{ConversationSession, DEFAULT_MODEL, QUESTION_DELIMITER};

/// Anything that can turn an ordered list of messages into a reply.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

/// One conversational turn. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

impl AiResponse {
    /// A reply with no usage information.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Failures of a `ChatModel`.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors returned by `ConversationSession`.
#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("model invocation failed: {0}")]
    ModelInvocation(#[from] AiError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
