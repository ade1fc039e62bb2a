//! # Chat Transcript
//!
//! The chatbot view's conversation. Replies are canned: every user message
//! gets the same answer after [`BOT_REPLY_DELAY`].
//!
//! The transcript belongs to the chatbot view and is torn down with it.
//! Each teardown bumps `epoch`, so a reply scheduled for an earlier
//! conversation can be recognised and dropped.

use chrono::{DateTime, Local};
use std::time::Duration;

pub const BOT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Intro shown above the transcript. Not a transcript entry.
pub const GREETING: &str = "Hello! I'm your AI guide for Tangier. Ask me anything about the city, culture, events, or where to go!";

pub const CANNED_REPLY: &str = "That's a great question! Tangier offers amazing experiences year-round. \
    The best time to visit is spring (March-May) or fall (September-November) when the weather is mild \
    and perfect for exploring.";

pub const QUICK_QUESTIONS: [&str; 5] = [
    "Best time to visit Tangier?",
    "Traditional Moroccan food",
    "AFCON 2025 events",
    "Safety tips",
    "Currency exchange",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Local>,
}

#[derive(Debug, Default, Clone)]
pub struct ChatTranscript {
    pub epoch: u64,
    pub messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message. Blank input is ignored and returns `None`.
    pub fn send(&mut self, text: &str) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.push(text.to_string(), Sender::User))
    }

    pub fn append_bot_reply(&mut self) -> u64 {
        self.push(CANNED_REPLY.to_string(), Sender::Bot)
    }

    /// Drop the conversation and start a new epoch.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.epoch += 1;
    }

    pub fn shows_quick_questions(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, text: String, sender: Sender) -> u64 {
        let id = self.messages.len() as u64 + 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            sent_at: Local::now(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_appends_user_message() {
        let mut chat = ChatTranscript::new();
        assert_eq!(chat.send("Where is the Kasbah?"), Some(1));
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.messages[0].sender, Sender::User);
        assert_eq!(chat.messages[0].text, "Where is the Kasbah?");
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut chat = ChatTranscript::new();
        assert_eq!(chat.send("   \t"), None);
        assert!(chat.is_empty());
    }

    #[test]
    fn test_replies_append_in_order() {
        let mut chat = ChatTranscript::new();
        chat.send("one");
        chat.append_bot_reply();
        chat.send("two");
        chat.append_bot_reply();

        let senders: Vec<Sender> = chat.messages.iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]
        );
        let ids: Vec<u64> = chat.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reset_bumps_epoch() {
        let mut chat = ChatTranscript::new();
        chat.send("hello");
        assert!(!chat.shows_quick_questions());
        chat.reset();
        assert!(chat.shows_quick_questions());
        assert_eq!(chat.epoch, 1);
    }
}
