//! ConversationSession struct, construction, and history queries.

use std::fmt;
use std::sync::Arc;

use colloquy_common::SessionId;
use colloquy_config::{ColloquyConfig, DEFAULT_MODEL};
use tracing::debug;

use crate::memory::BoundedConversationMemory;
use crate::openai::{OpenAiClient, OpenAiConfig};
use crate::{AiError, ChatModel, ConversationError, Message};

/// A conversation with a chat model over a rolling window of turns.
pub struct ConversationSession {
    /// Identifies this session in log lines.
    pub(super) id: SessionId,
    /// Retained turns, oldest first.
    pub(super) memory: BoundedConversationMemory,
    /// The model every request goes to.
    pub(super) client: Arc<dyn ChatModel>,
}

impl ConversationSession {
    /// Talk to `model` on the OpenAI API with `credential`.
    ///
    /// Credential and model checks belong to the client; its configuration
    /// errors are returned as `ConversationError::Configuration`.
    pub fn new(
        credential: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, ConversationError> {
        let client = OpenAiClient::new(OpenAiConfig::new(credential, model))
            .map_err(configuration_error)?;
        Ok(Self::from_client(Arc::new(client)))
    }

    /// Like [`ConversationSession::new`] with [`DEFAULT_MODEL`].
    pub fn with_default_model(credential: impl Into<String>) -> Result<Self, ConversationError> {
        Self::new(credential, DEFAULT_MODEL)
    }

    /// Build the client and memory window from a loaded config.
    pub fn from_config(config: &ColloquyConfig) -> Result<Self, ConversationError> {
        let client = OpenAiConfig::from_model_config(&config.model)
            .and_then(OpenAiClient::new)
            .map_err(configuration_error)?;
        Ok(Self::from_client_with_capacity(
            Arc::new(client),
            config.memory.max_messages,
        ))
    }

    pub fn from_client(client: Arc<dyn ChatModel>) -> Self {
        Self::with_memory(client, BoundedConversationMemory::default())
    }

    pub fn from_client_with_capacity(client: Arc<dyn ChatModel>, max_messages: usize) -> Self {
        Self::with_memory(client, BoundedConversationMemory::new(max_messages))
    }

    fn with_memory(client: Arc<dyn ChatModel>, memory: BoundedConversationMemory) -> Self {
        let id = SessionId::new();
        debug!(session = %id, max_messages = memory.max_messages(), "conversation session created");
        Self { id, memory, client }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn max_messages(&self) -> usize {
        self.memory.max_messages()
    }

    /// Copy of the retained history, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.memory.snapshot()
    }

    /// Forget every retained turn. The window size is unchanged.
    pub fn reset_conversation(&mut self) {
        debug!(session = %self.id, dropped = self.memory.len(), "conversation reset");
        self.memory.clear();
    }

    /// Human-readable history, one `role: text` line per turn.
    pub fn render(&self) -> String {
        self.memory.to_string()
    }
}

impl fmt::Display for ConversationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.memory, f)
    }
}

impl fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationSession")
            .field("id", &self.id)
            .field("memory", &self.memory)
            .finish_non_exhaustive()
    }
}

fn configuration_error(err: AiError) -> ConversationError {
    match err {
        AiError::Configuration(msg) => ConversationError::Configuration(msg),
        other => ConversationError::Configuration(other.to_string()),
    }
}
