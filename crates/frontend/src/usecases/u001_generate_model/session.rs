//! Chat session state and the submission protocol
//!
//! `ChatSession` holds everything the chat screen mutates: the message store,
//! the single-flight flag and the typing indicator. It is plain data so the
//! protocol can be exercised without a browser; the view model keeps it in a
//! signal and drives it through [`SessionHandle`].

use super::api::{GenerateClient, GenerateError};
use super::message_store::MessageStore;
use contracts::domain::a001_chat_message::ChatMessage;
use contracts::usecases::u001_generate_model::GenerateReply;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Why an input was not sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Blank,
    Busy,
}

/// Accepted prompt waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub prompt: String,
}

/// Identifies one scheduled "hide typing indicator" callback.
/// A newer submission invalidates every older ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    store: MessageStore,
    in_flight: bool,
    typing_visible: bool,
    typing_generation: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.store.messages()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_typing_visible(&self) -> bool {
        self.typing_visible
    }

    /// Check an input against the single-flight policy
    pub fn validate(&self, input: &str) -> Result<String, Rejection> {
        let prompt = input.trim();
        if prompt.is_empty() {
            return Err(Rejection::Blank);
        }
        if self.in_flight {
            return Err(Rejection::Busy);
        }
        Ok(prompt.to_string())
    }

    /// Accept an input: append the user message and mark the request in flight.
    /// Rejected inputs leave the session untouched.
    pub fn submit(&mut self, input: &str) -> Result<Submission, Rejection> {
        let prompt = self.validate(input)?;
        self.store.append(ChatMessage::user(prompt.clone()));
        self.in_flight = true;
        self.typing_visible = true;
        // Any pending indicator timer from the previous reply is now stale
        self.typing_generation += 1;
        Ok(Submission { prompt })
    }

    /// Record the outcome of the in-flight request as exactly one bot message.
    /// Returns the ticket for the delayed indicator clear, or `None` when no
    /// request was in flight.
    pub fn complete(
        &mut self,
        result: Result<GenerateReply, GenerateError>,
    ) -> Option<IndicatorTicket> {
        if !self.in_flight {
            log::warn!("reply arrived with no request in flight; dropped");
            return None;
        }
        let message = match result {
            Ok(reply) => {
                log::info!("reply received (model: {})", reply.has_model());
                ChatMessage::bot_reply(&reply)
            }
            Err(err) => {
                log::warn!("generation failed: {}", err);
                ChatMessage::error(err.user_message())
            }
        };
        self.store.append(message);
        self.in_flight = false;
        self.typing_generation += 1;
        Some(IndicatorTicket(self.typing_generation))
    }

    /// Hide the typing indicator if `ticket` is still the latest one.
    pub fn clear_typing(&mut self, ticket: IndicatorTicket) -> bool {
        if self.in_flight || ticket.0 != self.typing_generation {
            return false;
        }
        self.typing_visible = false;
        true
    }

    /// Empty the conversation. An in-flight request keeps running and its
    /// reply is still appended.
    pub fn clear(&mut self) {
        self.store.clear();
    }
}

/// Mutable access to a session that may have gone away (screen unmounted)
pub trait SessionHandle {
    fn with_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R>;
}

impl SessionHandle for RwSignal<ChatSession> {
    fn with_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl SessionHandle for Rc<RefCell<ChatSession>> {
    fn with_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Result of driving one submission to the end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Bot message appended; hide the indicator later with this ticket
    Completed(IndicatorTicket),
    /// Session no longer exists; the reply was dropped
    Discarded,
}

/// Send an accepted submission and record its outcome in the session
pub async fn dispatch<H, C>(session: &H, client: &C, submission: Submission) -> DispatchOutcome
where
    H: SessionHandle,
    C: GenerateClient,
{
    let result = client.generate(&submission.prompt).await;
    match session.with_session(|s| s.complete(result)) {
        Some(Some(ticket)) => DispatchOutcome::Completed(ticket),
        _ => {
            log::debug!("late reply discarded");
            DispatchOutcome::Discarded
        }
    }
}
