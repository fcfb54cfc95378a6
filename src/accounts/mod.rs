//! Accounts: registration and login over a plain user store.
//!
//! No hashing, sessions or tokens; login only confirms that the
//! email/password pair exists.

pub mod types;
pub mod users;

pub use types::{Credentials, User, UserSummary};
pub use users::UserStore;
