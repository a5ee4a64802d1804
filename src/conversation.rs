use chrono::{DateTime, Local};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One chat turn. Immutable once created: the store exposes no operation
/// that edits or removes a message, so fields stay private.
#[derive(Debug, Clone)]
pub struct Message {
    id: Uuid,
    text: String,
    sender: Sender,
    timestamp: DateTime<Local>,
}

impl Message {
    fn new(text: String, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Authoritative in-memory chat history plus the input field state. Mutated
/// only from the UI task; the transport never touches it directly.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    draft_text: String,
    has_started_chat: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// True once the first user message has been accepted. One-way: nothing
    /// ever resets it.
    pub fn has_started_chat(&self) -> bool {
        self.has_started_chat
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.draft_text.push(c);
    }

    pub fn pop_draft_char(&mut self) {
        self.draft_text.pop();
    }

    /// Accepts the current draft as a user message. Returns the text to hand
    /// to the transport, or `None` when the trimmed draft is empty (the store
    /// is left untouched in that case). The draft is cleared the moment the
    /// message is accepted, before any network outcome is known.
    pub fn append_user_message(&mut self) -> Option<String> {
        if self.draft_text.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.draft_text);
        self.messages.push(Message::new(text.clone(), Sender::User));
        self.has_started_chat = true;
        Some(text)
    }

    /// Appends a bot reply at the end of the history. Replies from concurrent
    /// requests land here in whatever order they arrive.
    pub fn append_bot_message(&mut self, text: impl Into<String>) {
        self.messages.push(Message::new(text.into(), Sender::Bot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn conversation_with_draft(draft: &str) -> Conversation {
        let mut convo = Conversation::new();
        for c in draft.chars() {
            convo.push_draft_char(c);
        }
        convo
    }

    #[test]
    fn test_empty_draft_is_noop() {
        let mut convo = Conversation::new();
        assert_eq!(convo.append_user_message(), None);
        assert!(convo.messages().is_empty());
        assert!(!convo.has_started_chat());
    }

    #[test]
    fn test_whitespace_draft_is_noop() {
        for draft in ["   ", "\t", "\n", " \t \n "] {
            let mut convo = conversation_with_draft(draft);
            assert_eq!(convo.append_user_message(), None);
            assert!(convo.messages().is_empty());
            assert!(!convo.has_started_chat());
        }
    }

    #[test]
    fn test_accepted_message_clears_draft_and_appends() {
        let mut convo = conversation_with_draft("Hi");
        let outbound = convo.append_user_message();

        assert_eq!(outbound.as_deref(), Some("Hi"));
        assert_eq!(convo.draft_text(), "");
        assert!(convo.has_started_chat());

        let last = convo.messages().last().unwrap();
        assert_eq!(last.text(), "Hi");
        assert_eq!(last.sender(), Sender::User);
    }

    #[test]
    fn test_has_started_chat_transitions_once() {
        let mut convo = conversation_with_draft("first");
        convo.append_user_message();
        assert!(convo.has_started_chat());

        // Rejected sends and bot replies must not revert the flag.
        convo.append_user_message();
        convo.append_bot_message("reply");
        assert!(convo.has_started_chat());
    }

    #[test]
    fn test_bot_message_does_not_start_chat() {
        let mut convo = Conversation::new();
        convo.append_bot_message("unsolicited");
        assert!(!convo.has_started_chat());
        assert_eq!(convo.messages().len(), 1);
        assert_eq!(convo.messages()[0].sender(), Sender::Bot);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut convo = Conversation::new();
        for i in 0..50 {
            for c in format!("msg {}", i).chars() {
                convo.push_draft_char(c);
            }
            convo.append_user_message();
            convo.append_bot_message(format!("reply {}", i));
        }

        let ids: HashSet<Uuid> = convo.messages().iter().map(|m| m.id()).collect();
        assert_eq!(ids.len(), convo.messages().len());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut convo = conversation_with_draft("Hi");
        convo.append_user_message();
        convo.append_bot_message("Hello there!");

        let texts: Vec<&str> = convo.messages().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["Hi", "Hello there!"]);
        assert_eq!(convo.messages()[0].sender(), Sender::User);
        assert_eq!(convo.messages()[1].sender(), Sender::Bot);
    }

    #[test]
    fn test_draft_editing() {
        let mut convo = Conversation::new();
        convo.push_draft_char('h');
        convo.push_draft_char('i');
        assert_eq!(convo.draft_text(), "hi");
        convo.pop_draft_char();
        assert_eq!(convo.draft_text(), "h");
    }
}
