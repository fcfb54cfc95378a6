//! History subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/history
//!     → NewHistoryEntry (types.rs)
//!     → HistoryLedger::append (ledger.rs): assign id + timestamp, insert, evict
//!     → Store<HistoryEntry>
//!
//! GET /api/history/{userId}
//!     → HistoryLedger::list: filter by user, oldest first
//! ```
//!
//! The ledger never calls the forwarding gateway and the gateway never
//! writes history; clients record exchanges explicitly.

pub mod ledger;
pub mod types;

pub use ledger::{HistoryLedger, DEFAULT_MAX_ENTRIES_PER_USER};
pub use types::{HistoryEntry, NewHistoryEntry};
