//! Chat screen state.
//!
//! A turn is a two-phase transition: [`ChatView::begin_turn`] checks the
//! preconditions, appends the user message and moves to
//! [`Phase::Sending`]; [`ChatView::settle_turn`] appends exactly one reply
//! (character or system) and returns to [`Phase::Idle`]. The request
//! itself runs in between via [`PendingTurn::execute`], which holds no
//! borrow of the view.

use std::sync::Arc;

use reelchat_api::ChatBackend;
use reelchat_types::{ChatError, Message, SendPromptRequest};

use crate::context::AppContext;
use crate::navigation::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

/// How the most recent turn ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Committed,
    Failed(ChatError),
}

/// Result of [`ChatView::begin_turn`]
pub enum TurnStart {
    /// Blank input; nothing happened
    Ignored,
    /// A turn is already in flight
    Busy,
    /// A precondition failed; a system message was appended
    Rejected(ChatError),
    /// The user message was appended and the request is ready to go
    Pending(PendingTurn),
}

/// Result of a full [`ChatView::send_message`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Ignored,
    Busy,
    Replied,
    Failed(ChatError),
}

/// An in-flight request, detached from the view
pub struct PendingTurn {
    request: SendPromptRequest,
    token: String,
    backend: Arc<dyn ChatBackend>,
}

impl PendingTurn {
    pub fn request(&self) -> &SendPromptRequest {
        &self.request
    }

    pub async fn execute(&self) -> Result<String, ChatError> {
        self.backend.send_prompt(&self.request, &self.token).await
    }
}

/// Transcript and turn state of the chat screen
#[derive(Debug)]
pub struct ChatView {
    transcript: Vec<Message>,
    phase: Phase,
    last_outcome: Option<TurnOutcome>,
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            phase: Phase::Idle,
            last_outcome: None,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_outcome(&self) -> Option<&TurnOutcome> {
        self.last_outcome.as_ref()
    }

    /// Whether the send action would be enabled for `text`
    pub fn can_send(&self, text: &str) -> bool {
        self.phase == Phase::Idle && !text.trim().is_empty()
    }

    /// First phase of a turn.
    ///
    /// Missing configuration or a missing token append one system message
    /// and never reach the network; a missing token also redirects to
    /// login.
    pub fn begin_turn(&mut self, ctx: &mut AppContext, text: &str) -> TurnStart {
        let prompt = text.trim();
        if prompt.is_empty() {
            return TurnStart::Ignored;
        }
        if self.phase == Phase::Sending {
            return TurnStart::Busy;
        }

        let backend = match ctx.backend() {
            Ok(backend) => backend,
            Err(err) => return TurnStart::Rejected(self.reject(err)),
        };
        let token = match ctx.auth_token() {
            Ok(token) => token,
            Err(err) => {
                ctx.navigator.navigate(Route::Login);
                return TurnStart::Rejected(self.reject(err));
            }
        };

        self.transcript.push(Message::user(prompt));
        self.phase = Phase::Sending;

        TurnStart::Pending(PendingTurn {
            request: SendPromptRequest {
                chat_id: ctx.session.chat_id().to_string(),
                title: ctx.session.character_title().to_string(),
                user_prompt: prompt.to_string(),
            },
            token,
            backend,
        })
    }

    /// Second phase of a turn: record the reply or the failure
    pub fn settle_turn(&mut self, result: Result<String, ChatError>) -> SendOutcome {
        self.phase = Phase::Idle;

        match result {
            Ok(reply) => {
                self.transcript.push(Message::character(reply));
                self.last_outcome = Some(TurnOutcome::Committed);
                SendOutcome::Replied
            }
            Err(err) => {
                log::warn!("turn failed: {}", err);
                self.transcript.push(Message::from_error(&err));
                self.last_outcome = Some(TurnOutcome::Failed(err.clone()));
                SendOutcome::Failed(err)
            }
        }
    }

    /// Run a whole turn for `text`
    pub async fn send_message(&mut self, ctx: &mut AppContext, text: &str) -> SendOutcome {
        match self.begin_turn(ctx, text) {
            TurnStart::Ignored => SendOutcome::Ignored,
            TurnStart::Busy => SendOutcome::Busy,
            TurnStart::Rejected(err) => SendOutcome::Failed(err),
            TurnStart::Pending(pending) => {
                let result = pending.execute().await;
                self.settle_turn(result)
            }
        }
    }

    fn reject(&mut self, err: ChatError) -> ChatError {
        log::warn!("cannot send: {}", err);
        self.transcript.push(Message::from_error(&err));
        self.last_outcome = Some(TurnOutcome::Failed(err.clone()));
        err
    }
}
