//! Collections of saved request definitions, owned by users.

pub mod store;
pub mod types;

pub use store::CollectionStore;
pub use types::{Collection, NewCollection, RequestSpec, SavedRequest};
