use std::io::Write;

use anyhow::{Context, Result};
use social_graph_core::{GraphStore, StoreConfig};

use crate::load::Dataset;
use crate::render::path_line;

/// Build the sample network one call at a time and exercise every query,
/// including the two expected failures.
pub fn run<W: Write>(out: &mut W, config: StoreConfig) -> Result<()> {
    let dataset = Dataset::sample()?;
    let mut network = GraphStore::with_config(config);

    writeln!(out, "Social Network Demonstration")?;
    writeln!(out, "===========================")?;

    writeln!(out, "\nRegistering users...")?;
    for persona in &dataset.personas {
        network
            .register_user(persona.clone())
            .with_context(|| format!("registering {}", persona.id()))?;
    }

    writeln!(out, "\nCreating connections...")?;
    for (a, b) in &dataset.connections {
        network.connect(a, b)?;
    }

    writeln!(out, "\nFriends of Alice:")?;
    for friend in network.friends("1")? {
        writeln!(out, "- {}", friend.name())?;
    }

    for (to, label) in [("4", "Diana"), ("5", "Edward")] {
        writeln!(out, "\nConnection path from Alice to {}:", label)?;
        writeln!(out, "{}", path_line(&network.connection_path("1", to)?))?;
        writeln!(
            out,
            "\nConnection level between Alice and {}: {}",
            label,
            network.connection_level("1", to)?
        )?;
    }

    writeln!(out, "\nUsers ordered by registration date:")?;
    for user in network.users_by_registration() {
        writeln!(out, "- {} (Registered: {})", user.name(), user.registration_date())?;
    }

    writeln!(
        out,
        "\nTrying to find connection path between Alice and a non-existent user..."
    )?;
    if let Err(e) = network.connection_path("1", "6") {
        writeln!(out, "Error caught: {}", e)?;
    }

    writeln!(out, "\nTrying to create a connection that already exists...")?;
    if let Err(e) = network.connect("1", "2") {
        writeln!(out, "Error caught: {}", e)?;
    }

    Ok(())
}
