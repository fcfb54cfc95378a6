//! Storage subsystem.
//!
//! # Data Flow
//! ```text
//! accounts / collections / history
//!     → IdAllocator (ids.rs) assigns a fresh id
//!     → Store<T> (this module) keeps the record under that id
//!     → MemoryStore (memory.rs) is the in-process backing
//! ```
//!
//! # Design Decisions
//! - Components hold `Arc<dyn Store<T>>` so the backing can be swapped
//!   for a persistent one without touching the domain logic
//! - `list` yields records in ascending id order; ids are allocated
//!   monotonically, so this is insertion order
//! - Stores are concurrent but not transactional; components that need
//!   multi-step atomicity take their own lock

pub mod ids;
pub mod memory;

pub use ids::{IdAllocator, SequentialIds};
pub use memory::MemoryStore;

/// Record identifier, unique within one store for the process lifetime.
pub type RecordId = u64;

/// Keyed storage for one kind of record.
pub trait Store<T>: Send + Sync {
    /// Fetch a copy of the record stored under `id`.
    fn get(&self, id: RecordId) -> Option<T>;

    /// Insert or replace the record stored under `id`.
    fn put(&self, id: RecordId, value: T);

    /// Remove the record stored under `id`, returning it if it existed.
    fn delete(&self, id: RecordId) -> Option<T>;

    /// All records, oldest first.
    fn list(&self) -> Vec<T>;

    /// Mutate the record under `id` in place. Returns `false` if absent.
    fn update(&self, id: RecordId, f: &mut dyn FnMut(&mut T)) -> bool;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
