//! User registration and authentication.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::accounts::types::User;
use crate::error::{ApiError, ApiResult};
use crate::observability::metrics;
use crate::store::{IdAllocator, MemoryStore, SequentialIds, Store};

/// Users keyed by id, unique by email.
pub struct UserStore {
    store: Arc<dyn Store<User>>,
    ids: Arc<dyn IdAllocator>,
    /// Makes the duplicate check and the insert one step.
    register_lock: Mutex<()>,
}

impl UserStore {
    pub fn new(store: Arc<dyn Store<User>>, ids: Arc<dyn IdAllocator>) -> Self {
        Self {
            store,
            ids,
            register_lock: Mutex::new(()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<User>::new()),
            Arc::new(SequentialIds::new()),
        )
    }

    /// Create a user. Fails if the email is already registered.
    pub fn register(&self, email: &str, password: &str) -> ApiResult<User> {
        let _guard = self.register_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if self.find_by_email(email).is_some() {
            metrics::record_account_event("duplicate");
            return Err(ApiError::DuplicateResource("User".to_string()));
        }

        let user = User {
            id: self.ids.next_id(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        };
        self.store.put(user.id, user.clone());
        metrics::record_account_event("registered");
        tracing::info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Look up a user by exact email and password match.
    pub fn authenticate(&self, email: &str, password: &str) -> ApiResult<User> {
        match self
            .store
            .list()
            .into_iter()
            .find(|u| u.email == email && u.password == password)
        {
            Some(user) => {
                metrics::record_account_event("login");
                Ok(user)
            }
            None => {
                metrics::record_account_event("login_failed");
                Err(ApiError::InvalidCredentials)
            }
        }
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.store.list().into_iter().find(|u| u.email == email)
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
