use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use social_graph_core::StoreConfig;

#[derive(Parser, Debug)]
#[command(name = "social-graph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build a social graph and query friends, paths and degrees of separation")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Defaults to `walkthrough`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// JSON file with `personas` and `connections`. Built-in sample if unset.
    #[arg(long, env = "SOCIAL_GRAPH_DATASET", global = true)]
    pub dataset: Option<PathBuf>,

    /// Output format for query commands
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "SOCIAL_GRAPH_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Most personas a single traversal may discover. 0 = unbounded.
    #[arg(
        long,
        env = "SOCIAL_GRAPH_MAX_TRAVERSAL_NODES",
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..=100_000_000),
        global = true
    )]
    pub max_traversal_nodes: u32,
}

impl GlobalOptions {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default().with_max_traversal_nodes(self.max_traversal_nodes as usize)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register the sample personas step by step and run every query (text only)
    Walkthrough,

    /// List a persona's friends, ordered by name then id
    Friends { id: String },

    /// Shortest chain of friendships between two personas
    Path { from: String, to: String },

    /// Degree of separation between two personas
    Level { from: String, to: String },

    /// All personas in registration order
    Users,

    /// Friends of friends who are not yet friends
    Suggest { id: String },

    /// Personas with the most friends
    Top {
        /// 0 lists everyone
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Counts and memory for the loaded graph
    Status,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_path_with_globals() {
        let cli = Cli::try_parse_from([
            "social-graph",
            "path",
            "1",
            "4",
            "--format",
            "json",
            "--max-traversal-nodes",
            "500",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Path {
                from: "1".into(),
                to: "4".into()
            })
        );
        assert_eq!(cli.global.format, OutputFormat::Json);
        assert_eq!(cli.global.store_config().max_traversal_nodes, 500);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["social-graph"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.global.store_config().traversal_limit(), None);
    }
}
