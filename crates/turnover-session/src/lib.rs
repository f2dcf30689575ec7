//! Stateful sales-entry wizard managing the date → company → checks → total
//! dialogue for one user.
//!
//! `WizardSession` owns the per-traversal state and processes each chat
//! message, returning responses that the transport layer renders as prompts
//! and reply keyboards. `SessionStore` routes messages to per-user sessions.

pub(crate) mod types;

mod commit;
mod handlers;
mod response;
mod store;

#[cfg(test)]
mod tests;

use std::sync::{Arc, RwLock};

use turnover_core::history::{HistoryStore, UserId};
use turnover_core::pool::BrandPool;
use turnover_core::record::RecordSink;

pub use store::SessionStore;
pub use types::{KeyboardAction, StepResponse, WizardStep};

use types::{Draft, SessionState};

/// Stateful wizard collecting one sales record at a time for a single user.
pub struct WizardSession {
    pool: Arc<BrandPool>,
    history: Arc<RwLock<HistoryStore>>,
    sink: Arc<dyn RecordSink>,
    user: UserId,
    state: SessionState,
}

impl WizardSession {
    pub fn new(
        pool: Arc<BrandPool>,
        history: Arc<RwLock<HistoryStore>>,
        sink: Arc<dyn RecordSink>,
        user: UserId,
    ) -> Self {
        Self {
            pool,
            history,
            sink,
            user,
            state: SessionState::Idle,
        }
    }

    pub fn is_collecting(&self) -> bool {
        matches!(self.state, SessionState::Collecting(_))
    }

    /// Step awaiting input, or `None` when idle.
    pub fn current_step(&self) -> Option<WizardStep> {
        match &self.state {
            SessionState::Collecting(d) => Some(d.step),
            SessionState::Idle => None,
        }
    }

    /// Mutable reference to the in-flight draft. Panics if Idle.
    fn draft(&mut self) -> &mut Draft {
        match &mut self.state {
            SessionState::Collecting(ref mut d) => d,
            SessionState::Idle => unreachable!("draft() called in Idle state"),
        }
    }
}
