//! Identifier allocation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::RecordId;

/// Hands out identifiers that are unique for the lifetime of the allocator.
pub trait IdAllocator: Send + Sync {
    fn next_id(&self) -> RecordId;
}

/// Monotonic counter starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start counting from `first`. Useful when seeding a store.
    pub fn starting_at(first: RecordId) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for SequentialIds {
    fn next_id(&self) -> RecordId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
