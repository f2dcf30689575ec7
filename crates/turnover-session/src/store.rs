//! Per-user session registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use turnover_core::history::{HistoryStore, UserId};
use turnover_core::pool::BrandPool;
use turnover_core::record::{RecordSink, SinkError};

use super::types::StepResponse;
use super::WizardSession;

/// Owns the shared pool/history/sink and one wizard per user.
///
/// Sessions are created lazily on a user's first message and never expire;
/// history likewise lives for the process lifetime.
pub struct SessionStore {
    pool: Arc<BrandPool>,
    history: Arc<RwLock<HistoryStore>>,
    sink: Arc<dyn RecordSink>,
    sessions: HashMap<UserId, WizardSession>,
}

impl SessionStore {
    pub fn new(pool: Arc<BrandPool>, sink: Arc<dyn RecordSink>) -> Self {
        Self {
            pool,
            history: Arc::new(RwLock::new(HistoryStore::new())),
            sink,
            sessions: HashMap::new(),
        }
    }

    /// Route a message to the sender's session, creating it if needed.
    pub fn handle_message(&mut self, user: UserId, text: &str) -> Result<StepResponse, SinkError> {
        let session = self.sessions.entry(user).or_insert_with(|| {
            WizardSession::new(
                self.pool.clone(),
                self.history.clone(),
                self.sink.clone(),
                user,
            )
        });
        session.handle_message(text)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Shared history handle, for diagnostics and tests.
    pub fn history(&self) -> Arc<RwLock<HistoryStore>> {
        self.history.clone()
    }
}
