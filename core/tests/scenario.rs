use std::sync::Arc;

use chrono::NaiveDate;
use social_graph_core::{GraphError, GraphStore, Persona};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn names(list: &[Arc<Persona>]) -> Vec<&str> {
    list.iter().map(|p| p.name()).collect()
}

fn sample_network() -> GraphStore {
    let mut network = GraphStore::new();
    let people = [
        Persona::new("1", "Alice Johnson", date(1990, 5, 15), "New York", date(2023, 1, 10)),
        Persona::new("2", "Bob Smith", date(1985, 8, 22), "Los Angeles", date(2023, 1, 15)),
        Persona::new("3", "Charlie Brown", date(1992, 3, 10), "Chicago", date(2023, 2, 5)),
        Persona::new("4", "Diana Prince", date(1988, 7, 1), "Washington", date(2023, 2, 20)),
        Persona::new("5", "Edward Stark", date(1995, 11, 30), "Boston", date(2023, 3, 1)),
    ];
    for p in people {
        network.register_user(p).unwrap();
    }
    network.connect("1", "2").unwrap();
    network.connect("1", "3").unwrap();
    network.connect("2", "4").unwrap();
    network.connect("3", "5").unwrap();
    network
}

#[test]
fn test_friends_of_alice() {
    let network = sample_network();
    assert_eq!(
        names(&network.friends("1").unwrap()),
        vec!["Bob Smith", "Charlie Brown"]
    );
}

#[test]
fn test_paths_and_levels() {
    let network = sample_network();

    let path = network.connection_path("1", "4").unwrap();
    assert_eq!(names(&path), vec!["Alice Johnson", "Bob Smith", "Diana Prince"]);
    assert_eq!(network.connection_level("1", "4").unwrap(), 2);

    let path = network.connection_path("1", "5").unwrap();
    assert_eq!(names(&path), vec!["Alice Johnson", "Charlie Brown", "Edward Stark"]);
    assert_eq!(network.connection_level("1", "5").unwrap(), 2);

    assert_eq!(network.connection_level("4", "5").unwrap(), 4);
}

#[test]
fn test_error_cases() {
    let mut network = sample_network();

    assert_eq!(
        network.connection_path("1", "nonexistent").unwrap_err(),
        GraphError::UserNotFound("nonexistent".into())
    );
    assert_eq!(
        network.connect("1", "2").unwrap_err(),
        GraphError::ConnectionExists("1".into(), "2".into())
    );

    network
        .register_user(Persona::new("6", "Frank Miller", date(1982, 6, 5), "San Francisco", date(2023, 3, 15)))
        .unwrap();
    assert!(matches!(
        network.connection_path("1", "6"),
        Err(GraphError::NoPath { .. })
    ));
}

#[test]
fn test_registration_order() {
    let network = sample_network();
    let ids: Vec<_> = network
        .users_by_registration()
        .iter()
        .map(|p| p.id().to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_chain_levels() {
    let mut network = GraphStore::new();
    for (id, name) in [("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")] {
        network
            .register_user(Persona::new(id, name, date(2000, 1, 1), "X", date(2023, 1, 1)))
            .unwrap();
    }
    network.connect("a", "b").unwrap();
    network.connect("b", "c").unwrap();
    network.connect("c", "d").unwrap();

    assert_eq!(network.connection_path("a", "d").unwrap().len(), 4);
    assert_eq!(network.connection_level("a", "d").unwrap(), 3);
    assert_eq!(network.connection_level("a", "b").unwrap(), 1);
    assert_eq!(names(&network.connection_path("c", "c").unwrap()), vec!["C"]);
}
