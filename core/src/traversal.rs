use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, NodeIndex};
use crate::persona::Persona;

/// A persona found during a neighborhood traversal.
#[derive(Debug, Clone)]
pub struct NeighborResult {
    pub persona: Arc<Persona>,
    /// Friendships between the start persona and this one.
    pub distance: u32,
}

/// Result of [`neighborhood`].
#[derive(Debug)]
pub struct NeighborhoodResult {
    /// Reachable personas in BFS discovery order, start excluded.
    pub neighbors: Vec<NeighborResult>,
    pub nodes_visited: usize,
}

/// Friend count for a single persona.
#[derive(Debug, Clone)]
pub struct DegreeResult {
    pub persona: Arc<Persona>,
    pub degree: usize,
}

/// Shortest path from `from` to `to` using BFS (unweighted, undirected).
///
/// Neighbors are explored in friend-list order (name, then id), so among
/// several shortest paths the one selected is fixed by that order and by
/// discovery order. The search stops the moment `to` is discovered.
///
/// Returns the path with both endpoints included; `[from]` when the two ids
/// are equal.
pub fn shortest_path(store: &GraphStore, from: &str, to: &str) -> Result<Vec<Arc<Persona>>> {
    let start = store.resolve(from)?;
    let target = store.resolve(to)?;

    if start == target {
        return Ok(vec![Arc::clone(store.persona_at(start))]);
    }

    let limit = store.config().traversal_limit();

    // node → parent. Sentinel: start's parent is itself.
    let mut parents: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();

    parents.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in store.neighbors(current) {
            let Entry::Vacant(slot) = parents.entry(next) else {
                continue;
            };
            slot.insert(current);

            if next == target {
                trace!(from = %from, to = %to, visited = parents.len(), "path found");
                return Ok(reconstruct_path(store, &parents, start, target));
            }

            if let Some(max) = limit {
                if parents.len() > max {
                    return Err(GraphError::TraversalLimitExceeded {
                        from: from.to_string(),
                        limit: max,
                    });
                }
            }

            queue.push_back(next);
        }
    }

    trace!(from = %from, to = %to, visited = parents.len(), "no path");
    Err(GraphError::NoPath {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Walk parent pointers from `target` back to `start`, then reverse.
fn reconstruct_path(
    store: &GraphStore,
    parents: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<Arc<Persona>> {
    let mut path = Vec::new();
    let mut current = target;

    loop {
        path.push(Arc::clone(store.persona_at(current)));
        if current == start {
            break;
        }
        current = parents[&current];
    }

    path.reverse();
    path
}

/// Degree of separation: friendships on the shortest path.
pub fn connection_level(store: &GraphStore, from: &str, to: &str) -> Result<usize> {
    shortest_path(store, from, to).map(|path| path.len() - 1)
}

/// BFS neighborhood: every persona reachable from `id` within `max_depth`
/// friendships, each at its minimum distance.
///
/// Subject to the same traversal bound as [`shortest_path`].
pub fn neighborhood(store: &GraphStore, id: &str, max_depth: u32) -> Result<NeighborhoodResult> {
    let start = store.resolve(id)?;
    let limit = store.config().traversal_limit();

    let mut distances: HashMap<NodeIndex, u32> = HashMap::new();
    let mut queue: VecDeque<(NodeIndex, u32)> = VecDeque::new();
    let mut neighbors = Vec::new();

    distances.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for &next in store.neighbors(current) {
            let Entry::Vacant(slot) = distances.entry(next) else {
                continue;
            };
            slot.insert(depth + 1);

            if let Some(max) = limit {
                if distances.len() > max {
                    return Err(GraphError::TraversalLimitExceeded {
                        from: id.to_string(),
                        limit: max,
                    });
                }
            }

            neighbors.push(NeighborResult {
                persona: Arc::clone(store.persona_at(next)),
                distance: depth + 1,
            });
            queue.push_back((next, depth + 1));
        }
    }

    trace!(id = %id, max_depth, visited = distances.len(), "neighborhood collected");
    Ok(NeighborhoodResult {
        neighbors,
        nodes_visited: distances.len(),
    })
}

/// Personas ranked by friend count.
///
/// If `top_n` is 0, returns everyone. Ties keep registration order.
pub fn degree_centrality(store: &GraphStore, top_n: usize) -> Vec<DegreeResult> {
    let mut results: Vec<DegreeResult> = (0..store.persona_count())
        .map(|slot| DegreeResult {
            persona: Arc::clone(store.persona_at(slot)),
            degree: store.neighbors(slot).len(),
        })
        .collect();

    // Stable sort: equal degrees stay in registration order.
    results.sort_by(|a, b| b.degree.cmp(&a.degree));

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}
