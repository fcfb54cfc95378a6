//! Account types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::RecordId;

/// A registered user.
///
/// The password is stored as given; this backend does no credential
/// hardening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// The part of a user that is safe to return to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: RecordId,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Register/login payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
