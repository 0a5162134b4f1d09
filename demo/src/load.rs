use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use social_graph_core::{GraphStore, Persona, StoreConfig};
use tracing::info;

const SAMPLE: &str = include_str!("../data/sample.json");

/// Personas in registration order plus the friendships between them.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub personas: Vec<Persona>,
    #[serde(default)]
    pub connections: Vec<(String, String)>,
}

impl Dataset {
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE).context("built-in sample dataset is malformed")
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading dataset {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing dataset {}", path.display()))
    }
}

/// Dataset from `path`, or the built-in sample when none is given.
pub fn read_dataset(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(p) => Dataset::read(p),
        None => Dataset::sample(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoadReport {
    pub persona_count: usize,
    pub connection_count: usize,
    pub load_time_ms: f64,
}

/// Register every persona, then apply every connection, in file order.
///
/// Stops at the first rejected entry and names it.
pub fn build_store(dataset: &Dataset, config: StoreConfig) -> Result<(GraphStore, LoadReport)> {
    let start = Instant::now();
    let mut store = GraphStore::with_config(
        config.with_initial_capacity(config.initial_capacity.max(dataset.personas.len())),
    );

    for (i, persona) in dataset.personas.iter().enumerate() {
        store
            .register_user(persona.clone())
            .with_context(|| format!("persona #{} (id {})", i + 1, persona.id()))?;
    }

    for (i, (a, b)) in dataset.connections.iter().enumerate() {
        store
            .connect(a, b)
            .with_context(|| format!("connection #{} ({} - {})", i + 1, a, b))?;
    }

    let report = LoadReport {
        persona_count: store.persona_count(),
        connection_count: store.connection_count(),
        load_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    info!(
        personas = report.persona_count,
        connections = report.connection_count,
        load_time_ms = report.load_time_ms,
        "dataset loaded"
    );

    Ok((store, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use social_graph_core::GraphError;

    #[test]
    fn test_sample_loads() {
        let dataset = Dataset::sample().unwrap();
        let (store, report) = build_store(&dataset, StoreConfig::default()).unwrap();
        assert_eq!(report.persona_count, 5);
        assert_eq!(report.connection_count, 4);
        assert_eq!(store.connection_level("1", "5").unwrap(), 2);
    }

    #[test]
    fn test_connections_optional() {
        let dataset = Dataset::from_json(
            r#"{"personas":[{"id":"a","name":"A","birth_date":"2000-01-01","city":"X","registration_date":"2024-01-01"}]}"#,
        )
        .unwrap();
        assert!(dataset.connections.is_empty());
    }

    #[test]
    fn test_missing_persona_field_rejected() {
        let err = Dataset::from_json(r#"{"personas":[{"id":"a","name":"A"}]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_duplicate_persona_names_entry() {
        let mut dataset = Dataset::sample().unwrap();
        let dup = dataset.personas[0].clone();
        dataset.personas.push(dup);

        let err = build_store(&dataset, StoreConfig::default()).err().unwrap();
        assert_eq!(err.to_string(), "persona #6 (id 1)");
        assert_eq!(
            err.downcast_ref::<GraphError>(),
            Some(&GraphError::DuplicateUser("1".into()))
        );
    }

    #[test]
    fn test_bad_connection_names_entry() {
        let mut dataset = Dataset::sample().unwrap();
        dataset.connections.push(("1".into(), "9".into()));

        let err = build_store(&dataset, StoreConfig::default()).err().unwrap();
        assert_eq!(err.to_string(), "connection #5 (1 - 9)");
        assert!(err.downcast_ref::<GraphError>().unwrap().is_not_found());
    }
}
