use thiserror::Error;

/// Failures returned by [`GraphStore`](crate::GraphStore) operations.
///
/// Every operation validates before it mutates, so an `Err` always leaves the
/// store exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A required persona field was absent, or a persona was connected to itself.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A persona with this id is already registered.
    #[error("user with ID {0} already exists")]
    DuplicateUser(String),

    /// No persona with this id is registered.
    #[error("user with ID {0} not found")]
    UserNotFound(String),

    /// The two personas are already friends.
    #[error("connection between users {0} and {1} already exists")]
    ConnectionExists(String, String),

    /// BFS exhausted the reachable set without discovering the target.
    #[error("no path exists between user {from} and user {to}")]
    NoPath { from: String, to: String },

    /// BFS discovered more personas than `StoreConfig::max_traversal_nodes` allows.
    #[error("traversal from user {from} exceeded the limit of {limit} visited users")]
    TraversalLimitExceeded { from: String, limit: usize },
}

impl GraphError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for lookups of an unregistered id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
