use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};
use social_graph_core::{DegreeResult, Persona, StoreStats};

use crate::load::LoadReport;
use crate::settings::OutputFormat;

/// Result of one query command, rendered as text or JSON.
#[derive(Debug)]
pub enum Output {
    Personas(Vec<Arc<Persona>>),
    Path(Vec<Arc<Persona>>),
    Level { from: String, to: String, level: usize },
    Degrees(Vec<DegreeResult>),
    Status { stats: StoreStats, load: LoadReport },
}

/// Names joined with ` -> `.
pub fn path_line(path: &[Arc<Persona>]) -> String {
    path.iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn to_text(output: &Output) -> String {
    match output {
        Output::Personas(list) if list.is_empty() => "(none)".to_string(),
        Output::Personas(list) => list
            .iter()
            .map(|p| format!("- {} (Registered: {})", p.name(), p.registration_date()))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Path(path) => path_line(path),
        Output::Level { from, to, level } => {
            format!("Connection level between {} and {}: {}", from, to, level)
        }
        Output::Degrees(list) => list
            .iter()
            .map(|d| format!("{:>5}  {}", d.degree, d.persona.name()))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Status { stats, load } => format!(
            "personas:    {}\nconnections: {}\nmemory:      ~{} bytes\nload time:   {:.2}ms",
            stats.persona_count, stats.connection_count, stats.memory_bytes, load.load_time_ms
        ),
    }
}

pub fn to_json(output: &Output) -> Result<Value> {
    Ok(match output {
        Output::Personas(list) => Value::Array(personas_json(list)?),
        Output::Path(path) => json!({
            "level": path.len().saturating_sub(1),
            "path": personas_json(path)?,
        }),
        Output::Level { from, to, level } => json!({ "from": from, "to": to, "level": level }),
        Output::Degrees(list) => Value::Array(
            list.iter()
                .map(|d| json!({ "id": d.persona.id(), "name": d.persona.name(), "degree": d.degree }))
                .collect(),
        ),
        Output::Status { stats, load } => json!({
            "persona_count": stats.persona_count,
            "connection_count": stats.connection_count,
            "memory_bytes": stats.memory_bytes,
            "load_time_ms": load.load_time_ms,
        }),
    })
}

fn personas_json(list: &[Arc<Persona>]) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(list.len());
    for p in list {
        values.push(serde_json::to_value(p.as_ref())?);
    }
    Ok(values)
}

pub fn emit(output: &Output, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", to_text(output)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(output)?)?),
    }
    Ok(())
}
