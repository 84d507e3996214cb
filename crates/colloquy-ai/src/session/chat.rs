//! Model calls for ConversationSession.

use colloquy_common::new_correlation_id;
use tracing::{debug, warn};

use crate::{ConversationError, Message};

use super::manager::ConversationSession;
use super::prompt::{sample_questions_prompt, split_questions};

impl ConversationSession {
    /// Ask `question` with `context` as the system instruction for this turn.
    ///
    /// The request is the retained window plus the context and question.
    /// History only changes once the model has answered: all three messages
    /// are committed together. A failed or cancelled call leaves history as
    /// it was.
    pub async fn ask_question(
        &mut self,
        context: impl Into<String>,
        question: impl Into<String>,
    ) -> Result<String, ConversationError> {
        let call = new_correlation_id();

        let mut next = self.memory.clone();
        next.append(Message::system(context));
        next.append(Message::user(question));
        let request = next.snapshot();

        debug!(session = %self.id, call = %call, messages = request.len(), "asking question");

        let response = self.client.generate(&request).await.map_err(|e| {
            warn!(session = %self.id, call = %call, error = %e, "model call failed");
            ConversationError::from(e)
        })?;

        debug!(
            session = %self.id,
            call = %call,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "question answered"
        );

        next.append(Message::assistant(response.content.clone()));
        self.memory = next;
        Ok(response.content)
    }

    /// Ask the model for `count` questions of at most `max_words` words about
    /// `context`.
    ///
    /// This is a standalone two-message prompt; history is neither sent nor
    /// changed. The reply is split on `%%` and each piece trimmed; pieces
    /// that are empty after trimming (such as after a trailing `%%`) are
    /// dropped. The rest come back in order without checking how many
    /// questions there are.
    pub async fn generate_sample_questions(
        &self,
        context: impl Into<String>,
        count: usize,
        max_words: usize,
    ) -> Result<Vec<String>, ConversationError> {
        if count == 0 {
            return Err(ConversationError::InvalidArgument(
                "count must be at least 1".into(),
            ));
        }
        if max_words == 0 {
            return Err(ConversationError::InvalidArgument(
                "max_words must be at least 1".into(),
            ));
        }

        let call = new_correlation_id();
        let prompt = sample_questions_prompt(context.into(), count, max_words);

        debug!(session = %self.id, call = %call, count, max_words, "generating sample questions");

        let response = self.client.generate(&prompt).await.map_err(|e| {
            warn!(session = %self.id, call = %call, error = %e, "model call failed");
            ConversationError::from(e)
        })?;

        let questions = split_questions(&response.content);
        if questions.len() != count {
            debug!(
                session = %self.id,
                call = %call,
                requested = count,
                received = questions.len(),
                "model returned a different number of questions"
            );
        }
        Ok(questions)
    }
}
