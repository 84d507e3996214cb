//! Conversation session management.
//!
//! A `ConversationSession` owns a bounded message history and sends the
//! whole retained window to its `ChatModel` on every question.

mod chat;
mod manager;
mod prompt;


pub use colloquy_config::DEFAULT_MODEL;
pub use manager::ConversationSession;
pub use prompt::{sample_questions_instruction, split_questions, QUESTION_DELIMITER};
