use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{GraphError, Result};
use crate::persona::{friend_order, Persona};
use crate::traversal;

/// Dense slot assigned at registration. Doubles as the registration position.
pub(crate) type NodeIndex = usize;

struct Node {
    persona: Arc<Persona>,
    /// Kept sorted by `friend_order` of the referenced personas.
    friends: Vec<NodeIndex>,
}

/// Counters reported by [`GraphStore::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub persona_count: usize,
    pub connection_count: usize,
    pub memory_bytes: usize,
}

/// In-memory social graph: personas in registration order, each with a
/// sorted, symmetric friend list.
///
/// Friendships are stored on both endpoints; `connect` is the only writer of
/// adjacency, so `a ∈ friends(b)` iff `b ∈ friends(a)` holds by construction.
pub struct GraphStore {
    nodes: Vec<Node>,
    index: HashMap<String, NodeIndex>,
    connection_count: usize,
    config: StoreConfig,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.initial_capacity),
            index: HashMap::with_capacity(config.initial_capacity),
            connection_count: 0,
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Register a persona. Rejects an id that is already present.
    pub fn register_user(&mut self, persona: impl Into<Arc<Persona>>) -> Result<()> {
        let persona = persona.into();
        if self.index.contains_key(persona.id()) {
            return Err(GraphError::DuplicateUser(persona.id().to_string()));
        }

        let slot = self.nodes.len();
        self.index.insert(persona.id().to_string(), slot);
        debug!(id = %persona.id(), position = slot, "registered persona");
        self.nodes.push(Node {
            persona,
            friends: Vec::new(),
        });
        Ok(())
    }

    /// Make two registered personas friends.
    pub fn connect(&mut self, id1: &str, id2: &str) -> Result<()> {
        if id1 == id2 {
            return Err(GraphError::invalid(format!(
                "cannot connect user {} to themselves",
                id1
            )));
        }

        let a = self.resolve(id1)?;
        let b = self.resolve(id2)?;

        let (slot_in_a, slot_in_b) = match (self.friend_slot(a, b), self.friend_slot(b, a)) {
            (Err(in_a), Err(in_b)) => (in_a, in_b),
            _ => {
                return Err(GraphError::ConnectionExists(
                    id1.to_string(),
                    id2.to_string(),
                ))
            }
        };

        self.nodes[a].friends.insert(slot_in_a, b);
        self.nodes[b].friends.insert(slot_in_b, a);
        self.connection_count += 1;
        debug!(from = %id1, to = %id2, "connected personas");
        Ok(())
    }

    /// Direct friends of `id`, ordered by name then id.
    pub fn friends(&self, id: &str) -> Result<Vec<Arc<Persona>>> {
        let node = self.resolve(id)?;
        Ok(self
            .neighbors(node)
            .iter()
            .map(|&f| Arc::clone(self.persona_at(f)))
            .collect())
    }

    /// Shortest chain of friendships from `id1` to `id2`, both endpoints included.
    pub fn connection_path(&self, id1: &str, id2: &str) -> Result<Vec<Arc<Persona>>> {
        traversal::shortest_path(self, id1, id2)
    }

    /// Number of friendships on the shortest path. 0 for the same persona.
    pub fn connection_level(&self, id1: &str, id2: &str) -> Result<usize> {
        traversal::connection_level(self, id1, id2)
    }

    /// Every persona, in the order `register_user` accepted them.
    ///
    /// This is call order, not a sort on `registration_date`.
    pub fn users_by_registration(&self) -> Vec<Arc<Persona>> {
        self.nodes.iter().map(|n| Arc::clone(&n.persona)).collect()
    }

    /// Friends of friends who are not already friends, in discovery order.
    pub fn suggestions(&self, id: &str) -> Result<Vec<Arc<Persona>>> {
        let reach = traversal::neighborhood(self, id, 2)?;
        Ok(reach
            .neighbors
            .into_iter()
            .filter(|n| n.distance == 2)
            .map(|n| n.persona)
            .collect())
    }

    pub fn are_connected(&self, id1: &str, id2: &str) -> Result<bool> {
        let a = self.resolve(id1)?;
        let b = self.resolve(id2)?;
        Ok(a != b && self.friend_slot(a, b).is_ok())
    }

    pub fn persona(&self, id: &str) -> Option<&Arc<Persona>> {
        self.index.get(id).map(|&slot| self.persona_at(slot))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn persona_count(&self) -> usize {
        self.nodes.len()
    }

    /// Undirected friendships (each counted once).
    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let personas: usize = self
            .nodes
            .iter()
            .map(|n| {
                size_of::<Node>()
                    + size_of::<Persona>()
                    + n.persona.id().len()
                    + n.persona.name().len()
                    + n.persona.city().len()
                    + n.friends.capacity() * size_of::<NodeIndex>()
            })
            .sum();
        let index: usize = self
            .index
            .keys()
            .map(|k| k.len() + size_of::<String>() + size_of::<NodeIndex>())
            .sum();

        personas + index
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            persona_count: self.persona_count(),
            connection_count: self.connection_count,
            memory_bytes: self.memory_usage(),
        }
    }

    pub(crate) fn resolve(&self, id: &str) -> Result<NodeIndex> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UserNotFound(id.to_string()))
    }

    pub(crate) fn persona_at(&self, slot: NodeIndex) -> &Arc<Persona> {
        &self.nodes[slot].persona
    }

    /// Friend slots of `slot`, already in `friend_order`.
    pub(crate) fn neighbors(&self, slot: NodeIndex) -> &[NodeIndex] {
        &self.nodes[slot].friends
    }

    /// `Ok(pos)` if `friend` is in `owner`'s list, else `Err(insert_pos)`.
    fn friend_slot(&self, owner: NodeIndex, friend: NodeIndex) -> std::result::Result<usize, usize> {
        let target = &self.nodes[friend].persona;
        self.nodes[owner]
            .friends
            .binary_search_by(|&f| friend_order(&self.nodes[f].persona, target))
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
