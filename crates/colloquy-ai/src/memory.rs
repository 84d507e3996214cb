//! Fixed-capacity conversation history.
//!
//! Messages are kept in chronological order. Appending past capacity drops
//! the oldest messages, so the window always holds the most recent turns.

use std::collections::VecDeque;
use std::fmt;

use crate::Message;

pub use colloquy_config::DEFAULT_MAX_MESSAGES;

#[derive(Debug, Clone)]
pub struct BoundedConversationMemory {
    messages: VecDeque<Message>,
    max_messages: usize,
}

impl BoundedConversationMemory {
    /// A capacity of zero is treated as one. Storage grows on demand, so a
    /// huge capacity costs nothing up front.
    pub fn new(max_messages: usize) -> Self {
        let max_messages = max_messages.max(1);
        Self {
            messages: VecDeque::with_capacity(max_messages.min(DEFAULT_MAX_MESSAGES)),
            max_messages,
        }
    }

    /// Add a message at the end, evicting from the front while over capacity.
    pub fn append(&mut self, message: Message) {
        self.messages.push_back(message);
        while self.messages.len() > self.max_messages {
            self.messages.pop_front();
        }
    }

    /// Owned copy of the current history, oldest first.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn max_messages(&self) -> usize {
        self.max_messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for BoundedConversationMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGES)
    }
}

/// One `role: text` line per message; empty history renders as "".
impl fmt::Display for BoundedConversationMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, msg) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{msg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn texts(memory: &BoundedConversationMemory) -> Vec<String> {
        memory
            .snapshot()
            .iter()
            .map(|m| m.text().to_string())
            .collect()
    }

    #[test]
    fn default_capacity_is_ten() {
        let memory = BoundedConversationMemory::default();
        assert_eq!(memory.max_messages(), 10);
        assert!(memory.is_empty());
    }

    #[test]
    fn keeps_last_capacity_messages_in_order() {
        let mut memory = BoundedConversationMemory::new(3);
        for i in 0..8 {
            memory.append(Message::user(format!("m{i}")));
        }
        assert_eq!(memory.len(), 3);
        assert_eq!(texts(&memory), vec!["m5", "m6", "m7"]);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut memory = BoundedConversationMemory::new(2);
        memory.append(Message::system("ctx1"));
        memory.append(Message::user("q1"));
        assert_eq!(texts(&memory), vec!["ctx1", "q1"]);

        memory.append(Message::assistant("a1"));
        let snapshot = memory.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0], Message::user("q1"));
        assert_eq!(snapshot[1], Message::assistant("a1"));
    }

    #[test]
    fn below_capacity_nothing_is_evicted() {
        let mut memory = BoundedConversationMemory::new(5);
        memory.append(Message::user("a"));
        memory.append(Message::assistant("b"));
        assert_eq!(texts(&memory), vec!["a", "b"]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut memory = BoundedConversationMemory::new(2);
        memory.append(Message::user("a"));
        memory.append(Message::user("b"));
        memory.clear();
        assert!(memory.snapshot().is_empty());
        assert_eq!(memory.max_messages(), 2);

        for text in ["c", "d", "e"] {
            memory.append(Message::user(text));
        }
        assert_eq!(texts(&memory), vec!["d", "e"]);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut memory = BoundedConversationMemory::new(4);
        memory.append(Message::user("kept"));

        let mut snapshot = memory.snapshot();
        snapshot.clear();
        snapshot.push(Message::assistant("injected"));

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.snapshot()[0].role(), Role::User);
        assert_eq!(memory.snapshot()[0].text(), "kept");
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut memory = BoundedConversationMemory::new(0);
        assert_eq!(memory.max_messages(), 1);
        memory.append(Message::user("a"));
        memory.append(Message::user("b"));
        assert_eq!(texts(&memory), vec!["b"]);
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let mut memory = BoundedConversationMemory::new(usize::MAX);
        memory.append(Message::user("a"));
        memory.append(Message::assistant("b"));
        assert_eq!(memory.max_messages(), usize::MAX);
        assert_eq!(texts(&memory), vec!["a", "b"]);
    }

    #[test]
    fn display_lists_role_and_text() {
        let mut memory = BoundedConversationMemory::new(4);
        memory.append(Message::system("You are a film expert"));
        memory.append(Message::user("Best films?"));
        assert_eq!(
            memory.to_string(),
            "system: You are a film expert\nuser: Best films?"
        );
    }

    #[test]
    fn display_of_empty_memory_is_empty() {
        assert_eq!(BoundedConversationMemory::default().to_string(), "");
    }
}
