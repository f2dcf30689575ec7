
use std::sync::Arc;

use turnover_core::pool::BrandPool;
use turnover_core::record::MemorySink;

use super::types::StepResponse;
use super::SessionStore;

pub(super) const USER: u64 = 7;

pub(super) fn make_test_pool() -> Arc<BrandPool> {
    Arc::new(BrandPool::from_brands(vec![
        "Acme Co".to_string(),
        "Acme Foods".to_string(),
        "Globex".to_string(),
        "Initech".to_string(),
        "Umbrella".to_string(),
    ]))
}

pub(super) fn make_store() -> (SessionStore, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let store = SessionStore::new(make_test_pool(), sink.clone());
    (store, sink)
}

pub(super) fn send(store: &mut SessionStore, user: u64, text: &str) -> StepResponse {
    store
        .handle_message(user, text)
        .expect("sink append failed")
}

/// Drive a session up to the company step.
pub(super) fn advance_to_company(store: &mut SessionStore, user: u64) {
    send(store, user, "/start");
    send(store, user, "2025/03/14");
}

/// Run one full traversal with the given company text.
pub(super) fn complete_entry(store: &mut SessionStore, user: u64, company: &str) -> StepResponse {
    advance_to_company(store, user);
    send(store, user, company);
    send(store, user, "12");
    send(store, user, "34800")
}
