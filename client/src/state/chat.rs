//! Conversation log and single-turn exchanges with the inference endpoint.
//!
//! DESIGN
//! ======
//! `send` does its synchronous half immediately (validate, append the user
//! turn, raise the typing indicator) and returns the exchange as a future for
//! the caller to spawn. Overlapping sends are independent; each reply is
//! appended when it arrives.
//!
//! ERROR HANDLING
//! ==============
//! Transport and payload failures never reach the caller. They become a fixed
//! assistant turn so the log always pairs a reply with every user message.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::future::Future;
use std::rc::Rc;

use super::store::Store;
use crate::error::ClientError;
use crate::net::api::Backend;
use crate::net::types::{Message, QueryRequest};

/// Retrieved passages the backend should ground each answer on.
pub const QUERY_RESULT_COUNT: u32 = 3;
pub const GREETING_TEXT: &str = "Hi! Ask me about your queries.";
pub const NO_ANSWER_TEXT: &str = "No answer returned.";
pub const ERROR_REPLY_TEXT: &str = "Error contacting server.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    /// Append-only, in conversation order.
    pub messages: Vec<Message>,
    /// Exchanges awaiting a reply.
    pub pending: usize,
}

impl ChatState {
    /// Fresh conversation opened by the assistant greeting.
    pub fn with_greeting() -> Self {
        Self { messages: vec![Message::assistant(GREETING_TEXT)], pending: 0 }
    }

    /// Typing indicator: true while any exchange is outstanding.
    pub fn typing(&self) -> bool {
        self.pending > 0
    }
}

pub struct ChatSession<B> {
    backend: Rc<B>,
    state: Store<ChatState>,
}

impl<B> Clone for ChatSession<B> {
    fn clone(&self) -> Self {
        Self { backend: Rc::clone(&self.backend), state: self.state.clone() }
    }
}

impl<B: Backend + 'static> ChatSession<B> {
    pub fn new(backend: Rc<B>, initial: ChatState) -> Self {
        Self { backend, state: Store::new(initial) }
    }

    pub fn state(&self) -> Store<ChatState> {
        self.state.clone()
    }

    /// Start one exchange.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EmptyInput`] for empty or whitespace-only text,
    /// in which case nothing is appended and no request is issued.
    pub fn send(&self, text: &str) -> Result<impl Future<Output = ()> + use<B>, ClientError> {
        if text.trim().is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let history = self.state.update(|s| {
            let history = s.messages.clone();
            s.messages.push(Message::user(text));
            s.pending += 1;
            history
        });
        let request = QueryRequest { query: text.to_owned(), k: QUERY_RESULT_COUNT, history };

        let backend = Rc::clone(&self.backend);
        let state = self.state.clone();
        Ok(async move {
            let reply = match backend.query(&request).await {
                Ok(resp) => resp.answer.filter(|a| !a.is_empty()).unwrap_or_else(|| NO_ANSWER_TEXT.to_owned()),
                Err(err) => {
                    log::warn!("chat query failed: {err}");
                    ERROR_REPLY_TEXT.to_owned()
                }
            };
            state.update(|s| {
                s.messages.push(Message::assistant(reply));
                s.pending = s.pending.saturating_sub(1);
            });
        })
    }
}
