use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::graph::{GraphStore, StoreStats};
use crate::persona::Persona;

/// Cloneable, thread-safe handle to one [`GraphStore`].
///
/// Reads share the lock; `register_user` and `connect` take it exclusively.
/// A BFS holds the read guard for the whole traversal, so it never sees a
/// friendship applied to only one endpoint.
#[derive(Clone, Default)]
pub struct SharedGraphStore {
    inner: Arc<RwLock<GraphStore>>,
}

impl SharedGraphStore {
    pub fn new(store: GraphStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::new(GraphStore::with_config(config))
    }

    /// Execute a closure with a read reference to the store.
    pub fn read<R, F: FnOnce(&GraphStore) -> R>(&self, f: F) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Execute a closure with exclusive access to the store.
    pub fn write<R, F: FnOnce(&mut GraphStore) -> R>(&self, f: F) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    pub fn register_user(&self, persona: impl Into<Arc<Persona>>) -> Result<()> {
        self.write(|g| g.register_user(persona))
    }

    pub fn connect(&self, id1: &str, id2: &str) -> Result<()> {
        self.write(|g| g.connect(id1, id2))
    }

    pub fn friends(&self, id: &str) -> Result<Vec<Arc<Persona>>> {
        self.read(|g| g.friends(id))
    }

    pub fn connection_path(&self, id1: &str, id2: &str) -> Result<Vec<Arc<Persona>>> {
        self.read(|g| g.connection_path(id1, id2))
    }

    pub fn connection_level(&self, id1: &str, id2: &str) -> Result<usize> {
        self.read(|g| g.connection_level(id1, id2))
    }

    pub fn users_by_registration(&self) -> Vec<Arc<Persona>> {
        self.read(|g| g.users_by_registration())
    }

    pub fn stats(&self) -> StoreStats {
        self.read(|g| g.stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use chrono::NaiveDate;
    use std::thread;

    fn persona(id: String) -> Persona {
        let day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        Persona::new(id.clone(), format!("User {}", id), day, "Springfield", day)
    }

    #[test]
    fn test_clones_share_state() {
        let a = SharedGraphStore::default();
        let b = a.clone();
        a.register_user(persona("1".into())).unwrap();
        b.register_user(persona("2".into())).unwrap();
        a.connect("1", "2").unwrap();
        assert_eq!(b.connection_level("2", "1").unwrap(), 1);
        assert_eq!(
            b.connect("2", "1"),
            Err(GraphError::ConnectionExists("2".into(), "1".into()))
        );
    }

    #[test]
    fn test_concurrent_connects_keep_symmetry() {
        let shared = SharedGraphStore::with_config(StoreConfig::default());
        for i in 0..40 {
            shared.register_user(persona(i.to_string())).unwrap();
        }

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..40 {
                        let j = (i + t + 1) % 40;
                        // Overlapping pairs across threads: duplicates must fail cleanly.
                        let _ = shared.connect(&i.to_string(), &j.to_string());
                        let _ = shared.connection_path("0", &j.to_string());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        shared.read(|g| {
            let mut degree_sum = 0;
            for p in g.users_by_registration() {
                let friends = g.friends(p.id()).unwrap();
                degree_sum += friends.len();
                for f in &friends {
                    assert!(g.are_connected(f.id(), p.id()).unwrap());
                }
            }
            assert_eq!(degree_sum, 2 * g.connection_count());
        });
        assert_eq!(shared.stats().persona_count, 40);
    }
}
