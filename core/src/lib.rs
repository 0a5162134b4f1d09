//! social-graph-core: In-memory social graph engine.
//!
//! Maintains personas in registration order, each with a friend list kept
//! sorted by (name, id), and answers friend, shortest-path and
//! degree-of-separation queries with BFS.
//! No I/O and no persistence; callers build the graph through the API.

mod config;
mod error;
mod graph;
mod persona;
mod shared;
mod traversal;

pub use config::StoreConfig;
pub use error::{GraphError, Result};
pub use graph::{GraphStore, StoreStats};
pub use persona::{friend_order, Persona, PersonaBuilder};
pub use shared::SharedGraphStore;
pub use traversal::{
    connection_level, degree_centrality, neighborhood, shortest_path, DegreeResult,
    NeighborResult, NeighborhoodResult,
};
