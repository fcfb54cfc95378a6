//! Bounded per-user history ledger.
//!
//! # Responsibilities
//! - Append exchanges in chronological order
//! - Enforce the per-user retention cap at write time
//! - List one user's exchanges, oldest first
//!
//! # Eviction
//! After each append, if the user holds more than `max_per_user` entries,
//! the single oldest entry for that user is removed. Exactly one entry is
//! evicted per append, even if the user was already over the cap (e.g. a
//! seeded store). Such a user converges back to the cap one append at a
//! time.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::history::types::{HistoryEntry, NewHistoryEntry};
use crate::observability::metrics;
use crate::store::{IdAllocator, MemoryStore, RecordId, SequentialIds, Store};

/// Retention cap used when none is configured.
pub const DEFAULT_MAX_ENTRIES_PER_USER: usize = 50;

/// Append-only log of executed requests, capped per user.
pub struct HistoryLedger {
    store: Arc<dyn Store<HistoryEntry>>,
    ids: Arc<dyn IdAllocator>,
    max_per_user: usize,
    /// Serializes insert + evict so concurrent appends cannot interleave.
    append_lock: Mutex<()>,
}

impl HistoryLedger {
    /// Create a ledger over the given store and id source.
    pub fn new(
        store: Arc<dyn Store<HistoryEntry>>,
        ids: Arc<dyn IdAllocator>,
        max_per_user: usize,
    ) -> Self {
        Self {
            store,
            ids,
            max_per_user,
            append_lock: Mutex::new(()),
        }
    }

    /// Ledger backed by a fresh in-memory store.
    pub fn in_memory(max_per_user: usize) -> Self {
        Self::new(
            Arc::new(MemoryStore::<HistoryEntry>::new()),
            Arc::new(SequentialIds::new()),
            max_per_user,
        )
    }

    /// Retention cap per user.
    pub fn max_per_user(&self) -> usize {
        self.max_per_user
    }

    /// Record an exchange and enforce the cap for its user.
    pub fn append(&self, new: NewHistoryEntry) -> HistoryEntry {
        let _guard = self.append_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let entry = HistoryEntry {
            id: self.ids.next_id(),
            user_id: new.user_id,
            url: new.url,
            method: new.method,
            headers: new.headers,
            params: new.params,
            body: new.body,
            response: new.response,
            timestamp: Utc::now(),
        };
        self.store.put(entry.id, entry.clone());
        metrics::record_history_append();

        let user_entries = self.list(entry.user_id);
        if user_entries.len() > self.max_per_user {
            let oldest = &user_entries[0];
            self.store.delete(oldest.id);
            metrics::record_history_eviction();

            tracing::debug!(
                user_id = entry.user_id,
                evicted_id = oldest.id,
                "History cap reached, evicted oldest entry"
            );

            let remaining = user_entries.len() - 1;
            if remaining > self.max_per_user {
                tracing::warn!(
                    user_id = entry.user_id,
                    remaining,
                    cap = self.max_per_user,
                    "User history still over cap after eviction"
                );
            }
        }

        entry
    }

    /// All retained entries for `user_id`, in append order.
    pub fn list(&self, user_id: RecordId) -> Vec<HistoryEntry> {
        self.store
            .list()
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect()
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::in_memory(DEFAULT_MAX_ENTRIES_PER_USER)
    }
}
