//! One-shot prompt for sample questions and parsing of its reply.

use crate::Message;

/// Separator the model is asked to put between generated questions.
pub const QUESTION_DELIMITER: &str = "%%";

pub fn sample_questions_instruction(count: usize, max_words: usize) -> String {
    format!(
        "For the context following, please provide a list of {count} questions \
         with a maximum of {max_words} words per question. \
         Return the questions as a string with delimiter '{QUESTION_DELIMITER}' \
         between each generated question"
    )
}

pub(super) fn sample_questions_prompt(
    context: String,
    count: usize,
    max_words: usize,
) -> Vec<Message> {
    vec![
        Message::system(sample_questions_instruction(count, max_words)),
        Message::user(context),
    ]
}

/// Split a reply on [`QUESTION_DELIMITER`], trimming each piece and
/// dropping pieces that are empty after trimming.
pub fn split_questions(reply: &str) -> Vec<String> {
    reply
        .split(QUESTION_DELIMITER)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(String::from)
        .collect()
}
