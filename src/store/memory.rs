//! In-Memory Store Module
//!
//! HashMap-backed store guarded by a single coarse mutex.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{KvError, Result};
use crate::store::Store;

// == Memory Store ==
/// In-memory key-value store.
///
/// One mutex guards the whole map and is held for the full duration of each
/// operation, including the existence check before a delete. Every operation
/// is therefore linearizable with respect to every other: concurrent
/// Set/Set, Set/Get, and Set/Delete pairs observe a total order, and no
/// operation observes a partially-applied mutation. Contention is global,
/// which bounds throughput but keeps the correctness argument trivial.
///
/// Operations never block on I/O, only on the lock, so a synchronous mutex
/// is safe to use from async handlers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage, exclusively owned; never exposed raw
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys currently stored.
    pub fn len(&self) -> usize {
        self.data
            .lock()
            .map(|data| data.len())
            .unwrap_or_default()
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        // A poisoned lock means a panic happened mid-operation; surface it
        // as an internal error rather than propagating the panic.
        self.data
            .lock()
            .map_err(|_| KvError::Internal("store lock poisoned".to_string()))
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<String> {
        let data = self.lock()?;
        match data.get(key) {
            Some(value) => Ok(value.clone()),
            None => Err(KvError::NotFound(key.to_string())),
        }
    }

    fn set(&self, key: String, value: String) -> Result<()> {
        let mut data = self.lock()?;
        data.insert(key, value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut data = self.lock()?;
        if data.remove(key).is_none() {
            return Err(KvError::NotFound(key.to_string()));
        }
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("alpha".to_string(), "one".to_string()).unwrap();
        assert_eq!(store.get("alpha").unwrap(), "one");
    }

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        let err = store.get("ghost").unwrap_err();
        assert!(matches!(err, KvError::NotFound(_)));
    }

    #[test]
    fn test_set_overwrites_last_write_wins() {
        let store = MemoryStore::new();
        store.set("alpha".to_string(), "one".to_string()).unwrap();
        store.set("alpha".to_string(), "two".to_string()).unwrap();
        assert_eq!(store.get("alpha").unwrap(), "two");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_is_terminal() {
        let store = MemoryStore::new();
        store.set("alpha".to_string(), "one".to_string()).unwrap();
        store.delete("alpha").unwrap();
        let err = store.get("alpha").unwrap_err();
        assert!(matches!(err, KvError::NotFound(_)));
    }

    #[test]
    fn test_delete_missing_key() {
        let store = MemoryStore::new();
        store.set("alpha".to_string(), "one".to_string()).unwrap();

        let err = store.delete("ghost").unwrap_err();
        assert!(matches!(err, KvError::NotFound(_)));
        // A failed delete leaves the map unchanged
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("alpha").unwrap(), "one");
    }

    #[test]
    fn test_concurrent_disjoint_sets_no_lost_updates() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for t in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    let key = format!("key-{}-{}", t, i);
                    let value = format!("value-{}-{}", t, i);
                    store.set(key, value).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 800);
        for t in 0..8 {
            for i in 0..100 {
                let key = format!("key-{}-{}", t, i);
                assert_eq!(store.get(&key).unwrap(), format!("value-{}-{}", t, i));
            }
        }
    }

    #[test]
    fn test_concurrent_same_key_converges() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for t in 0..4 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    store
                        .set("contended".to_string(), format!("writer-{}", t))
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // The winning write is one of the writers', never an interleaving
        let value = store.get("contended").unwrap();
        assert!(value.starts_with("writer-"));
        assert_eq!(store.len(), 1);
    }
}
