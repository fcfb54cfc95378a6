//! In-memory store backed by a concurrent map.

use dashmap::DashMap;

use crate::store::{RecordId, Store};

/// Process-local store. Contents are lost on restart.
#[derive(Debug)]
pub struct MemoryStore<T> {
    inner: DashMap<RecordId, T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    fn get(&self, id: RecordId) -> Option<T> {
        self.inner.get(&id).map(|r| r.value().clone())
    }

    fn put(&self, id: RecordId, value: T) {
        self.inner.insert(id, value);
    }

    fn delete(&self, id: RecordId) -> Option<T> {
        self.inner.remove(&id).map(|(_, v)| v)
    }

    fn list(&self) -> Vec<T> {
        // DashMap iterates in shard order; sort by id to recover insertion order.
        let mut records: Vec<(RecordId, T)> = self
            .inner
            .iter()
            .map(|r| (*r.key(), r.value().clone()))
            .collect();
        records.sort_unstable_by_key(|(id, _)| *id);
        records.into_iter().map(|(_, v)| v).collect()
    }

    fn update(&self, id: RecordId, f: &mut dyn FnMut(&mut T)) -> bool {
        match self.inner.get_mut(&id) {
            Some(mut entry) => {
                f(entry.value_mut());
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
