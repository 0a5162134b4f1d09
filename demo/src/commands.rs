use social_graph_core::{degree_centrality, GraphStore, Result};
use tracing::debug;

use crate::load::LoadReport;
use crate::render::Output;
use crate::settings::Command;

/// Run one query command against a loaded store.
pub fn execute(store: &GraphStore, command: &Command, load: LoadReport) -> Result<Output> {
    debug!(?command, "executing query");
    Ok(match command {
        Command::Friends { id } => Output::Personas(store.friends(id)?),
        Command::Path { from, to } => Output::Path(store.connection_path(from, to)?),
        Command::Level { from, to } => Output::Level {
            from: from.clone(),
            to: to.clone(),
            level: store.connection_level(from, to)?,
        },
        Command::Users => Output::Personas(store.users_by_registration()),
        Command::Suggest { id } => Output::Personas(store.suggestions(id)?),
        Command::Top { limit } => Output::Degrees(degree_centrality(store, *limit)),
        // main dispatches Walkthrough before any dataset is loaded.
        Command::Status | Command::Walkthrough => Output::Status {
            stats: store.stats(),
            load,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{build_store, Dataset};
    use social_graph_core::{GraphError, StoreConfig};

    fn sample() -> (GraphStore, LoadReport) {
        build_store(&Dataset::sample().unwrap(), StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_friends_command() {
        let (store, load) = sample();
        let out = execute(&store, &Command::Friends { id: "1".into() }, load).unwrap();
        let Output::Personas(list) = out else {
            panic!("expected personas");
        };
        let names: Vec<_> = list.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Bob Smith", "Charlie Brown"]);
    }

    #[test]
    fn test_level_command() {
        let (store, load) = sample();
        let cmd = Command::Level { from: "1".into(), to: "5".into() };
        let Output::Level { level, .. } = execute(&store, &cmd, load).unwrap() else {
            panic!("expected level");
        };
        assert_eq!(level, 2);
    }

    #[test]
    fn test_unknown_user_propagates() {
        let (store, load) = sample();
        let cmd = Command::Path { from: "1".into(), to: "6".into() };
        assert_eq!(
            execute(&store, &cmd, load).unwrap_err(),
            GraphError::UserNotFound("6".into())
        );
    }

    #[test]
    fn test_top_command() {
        let (store, load) = sample();
        let Output::Degrees(list) = execute(&store, &Command::Top { limit: 1 }, load).unwrap() else {
            panic!("expected degrees");
        };
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].persona.id(), "1");
        assert_eq!(list[0].degree, 2);
    }
}
