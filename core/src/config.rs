use serde::Deserialize;

/// Tunables for a [`GraphStore`](crate::GraphStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Upper bound on personas a single BFS may discover. 0 = unbounded.
    pub max_traversal_nodes: usize,
    /// Pre-allocation hint for the persona table.
    pub initial_capacity: usize,
}

impl StoreConfig {
    pub fn with_max_traversal_nodes(mut self, limit: usize) -> Self {
        self.max_traversal_nodes = limit;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// The traversal bound, or None when unbounded.
    pub fn traversal_limit(&self) -> Option<usize> {
        (self.max_traversal_nodes > 0).then_some(self.max_traversal_nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(StoreConfig::default().traversal_limit(), None);
        assert_eq!(
            StoreConfig::default().with_max_traversal_nodes(50).traversal_limit(),
            Some(50)
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let cfg: StoreConfig = serde_json::from_str(r#"{"max_traversal_nodes": 1000}"#).unwrap();
        assert_eq!(cfg.max_traversal_nodes, 1000);
        assert_eq!(cfg.initial_capacity, 0);
    }
}
