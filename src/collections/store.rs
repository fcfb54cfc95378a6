//! Collection storage.

use std::sync::Arc;

use chrono::Utc;

use crate::collections::types::{Collection, RequestSpec, SavedRequest};
use crate::error::{ApiError, ApiResult};
use crate::store::{IdAllocator, MemoryStore, RecordId, SequentialIds, Store};

/// Collections keyed by id.
pub struct CollectionStore {
    store: Arc<dyn Store<Collection>>,
    collection_ids: Arc<dyn IdAllocator>,
    request_ids: Arc<dyn IdAllocator>,
}

impl CollectionStore {
    pub fn new(
        store: Arc<dyn Store<Collection>>,
        collection_ids: Arc<dyn IdAllocator>,
        request_ids: Arc<dyn IdAllocator>,
    ) -> Self {
        Self {
            store,
            collection_ids,
            request_ids,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<Collection>::new()),
            Arc::new(SequentialIds::new()),
            Arc::new(SequentialIds::new()),
        )
    }

    /// Collections owned by `user_id`, oldest first.
    pub fn list_by_user(&self, user_id: RecordId) -> Vec<Collection> {
        self.store
            .list()
            .into_iter()
            .filter(|c| c.user_id == user_id)
            .collect()
    }

    /// Create an empty collection. The owner is not checked.
    pub fn create(&self, user_id: RecordId, name: &str) -> Collection {
        let collection = Collection {
            id: self.collection_ids.next_id(),
            user_id,
            name: name.to_string(),
            requests: Vec::new(),
            created_at: Utc::now(),
        };
        self.store.put(collection.id, collection.clone());
        collection
    }

    /// Append a saved request to an existing collection.
    pub fn add_request(&self, collection_id: RecordId, spec: RequestSpec) -> ApiResult<SavedRequest> {
        let request = SavedRequest {
            id: self.request_ids.next_id(),
            name: spec.name,
            url: spec.url,
            method: spec.method,
            headers: spec.headers,
            params: spec.params,
            body: spec.body,
            created_at: Utc::now(),
        };

        let found = self.store.update(collection_id, &mut |collection| {
            collection.requests.push(request.clone());
        });

        if found {
            Ok(request)
        } else {
            Err(ApiError::NotFound("Collection".to_string()))
        }
    }

    /// Remove a collection. Deleting an unknown id is not an error.
    pub fn delete(&self, collection_id: RecordId) -> Option<Collection> {
        self.store.delete(collection_id)
    }

    pub fn get(&self, collection_id: RecordId) -> Option<Collection> {
        self.store.get(collection_id)
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(name: &str) -> RequestSpec {
        RequestSpec {
            name: name.to_string(),
            url: "https://example.com/items".to_string(),
            method: "POST".to_string(),
            body: json!({ "qty": 1 }),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_and_list_by_user() {
        let collections = CollectionStore::default();
        let a = collections.create(1, "first");
        let b = collections.create(1, "second");
        collections.create(2, "other user");

        assert_eq!(collections.list_by_user(1), vec![a, b]);
        assert_eq!(collections.list_by_user(2).len(), 1);
        assert!(collections.list_by_user(3).is_empty());
    }

    #[test]
    fn test_add_request() {
        let collections = CollectionStore::default();
        let c = collections.create(1, "api");

        let first = collections.add_request(c.id, spec("create")).unwrap();
        let second = collections.add_request(c.id, spec("create again")).unwrap();
        assert_ne!(first.id, second.id);

        let stored = collections.get(c.id).unwrap();
        assert_eq!(stored.requests, vec![first, second]);
    }

    #[test]
    fn test_add_request_to_missing_collection() {
        let collections = CollectionStore::default();
        let err = collections.add_request(42, spec("lost")).unwrap_err();
        assert_eq!(err, ApiError::NotFound("Collection".into()));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let collections = CollectionStore::default();
        let c = collections.create(1, "temp");

        assert!(collections.delete(c.id).is_some());
        assert!(collections.delete(c.id).is_none());
        assert!(collections.list_by_user(1).is_empty());
    }
}
