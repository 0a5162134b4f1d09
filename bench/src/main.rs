use chrono::{Days, NaiveDate};
use social_graph_core::{GraphStore, Persona, StoreConfig};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: social-graph-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  chain       One long line of friendships (deepest paths)");
        println!("  scalefree   Preferential attachment via edge sampling (hub-and-spoke)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random friendships");
        println!("  barbell     Two dense communities connected by a thin bridge");
        println!();
        println!("Default node_count: 200000");
        return;
    }

    if node_count < 32 {
        eprintln!("node_count must be at least 32");
        return;
    }

    println!("social-graph-bench");
    println!("==================");
    println!();

    let generators: Vec<(&str, fn(u64) -> GraphStore)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (community-bridge-community)", gen_barbell)],
        "all" => vec![
            ("Chain", gen_chain as fn(u64) -> GraphStore),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (community-bridge-community)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> GraphStore, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} personas", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} personas, {} friendships, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.persona_count(),
        graph.connection_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "depth", "found", "visited", "time");
    println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");

    for depth in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let result = match social_graph_core::neighborhood(&graph, &user_id(0), depth) {
            Ok(r) => r,
            Err(e) => {
                println!("{:>8} {}", depth, e);
                break;
            }
        };
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>12} {:>8.1}ms",
            depth,
            result.neighbors.len(),
            result.nodes_visited,
            elapsed.as_secs_f64() * 1000.0
        );
        if result.nodes_visited >= graph.persona_count() {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    // Shortest path: first persona to last persona
    let far = user_id(graph.persona_count() as u64 - 1);
    println!();
    let t = Instant::now();
    let path = graph.connection_path(&user_id(0), &far);
    let elapsed = t.elapsed();
    match path {
        Ok(p) => println!(
            "Shortest path u0 → {}: {} hops in {:.1}ms",
            far,
            p.len() - 1,
            elapsed.as_secs_f64() * 1000.0
        ),
        Err(e) => println!(
            "Shortest path u0 → {}: {} ({:.1}ms)",
            far,
            e,
            elapsed.as_secs_f64() * 1000.0
        ),
    }

    println!();
}

// ---------------------------------------------------------------------------
// Generators — all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Small pool so many personas share a name and ordering falls back to id.
const FIRST_NAMES: [&str; 8] = ["Ana", "Ben", "Chen", "Dara", "Eli", "Fay", "Gus", "Hana"];

fn user_id(i: u64) -> String {
    format!("u{}", i)
}

/// Fresh store with `node_count` personas registered in chronological order.
fn populate(node_count: u64) -> GraphStore {
    let mut graph = GraphStore::with_config(
        StoreConfig::default().with_initial_capacity(node_count as usize),
    );
    let epoch = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
    let born = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default();

    for i in 0..node_count {
        let registered = epoch
            .checked_add_days(Days::new(i / 100))
            .unwrap_or(epoch);
        let persona = Persona::new(
            user_id(i),
            FIRST_NAMES[(i % FIRST_NAMES.len() as u64) as usize],
            born,
            "Benchville",
            registered,
        );
        // Ids are unique by construction.
        let _ = graph.register_user(persona);
    }
    graph
}

/// Connect two personas by index; duplicates and self-links are skipped.
fn link(graph: &mut GraphStore, a: u64, b: u64) -> bool {
    graph.connect(&user_id(a), &user_id(b)).is_ok()
}

/// Chain: u0 - u1 - ... - u(n-1). Worst case for BFS depth.
fn gen_chain(node_count: u64) -> GraphStore {
    let mut graph = populate(node_count);
    for i in 1..node_count {
        link(&mut graph, i - 1, i);
    }
    graph
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Preferential attachment by picking a random existing edge and connecting
/// to one of its endpoints. Personas with more friends are more likely to be picked.
fn gen_scale_free(node_count: u64) -> GraphStore {
    let edges_per_node = 10u64;
    let mut graph = populate(node_count);
    let mut rng = FastRng::new(12345);

    let mut edge_endpoints: Vec<u64> = Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    // Seed: small clique
    let seed = 5u64;
    for i in 0..seed {
        for j in (i + 1)..seed {
            if link(&mut graph, i, j) {
                edge_endpoints.push(i);
                edge_endpoints.push(j);
            }
        }
    }

    for new_node in seed..node_count {
        let attach = edges_per_node.min(new_node);
        for _ in 0..attach {
            let idx = rng.next(edge_endpoints.len() as u64) as usize;
            let target = edge_endpoints[idx];
            if link(&mut graph, new_node, target) {
                edge_endpoints.push(new_node);
                edge_endpoints.push(target);
            }
        }
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
fn gen_small_world(node_count: u64) -> GraphStore {
    let k = 10u64;
    let p = 0.05f64;
    let mut graph = populate(node_count);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if !link(&mut graph, i, rewired) {
                    link(&mut graph, i, neighbor);
                }
            } else {
                link(&mut graph, i, neighbor);
            }
        }
    }

    graph
}

/// Erdos-Renyi: uniform random friendships, ~10 per persona.
fn gen_random(node_count: u64) -> GraphStore {
    let mut graph = populate(node_count);
    let mut rng = FastRng::new(54321);

    for _ in 0..node_count * 10 {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        link(&mut graph, from, to);
    }

    graph
}

/// Barbell: two dense communities joined by a chain of ~10 bridge personas.
///
/// Worst case for "find path through bottleneck."
fn gen_barbell(node_count: u64) -> GraphStore {
    let bridge_len = 10u64;
    let community = (node_count - bridge_len) / 2;
    let mut graph = populate(node_count);
    let mut rng = FastRng::new(99999);

    let b_start = community + bridge_len;
    for base in [0, b_start] {
        for i in 0..community {
            for _ in 0..20u64.min(community - 1) {
                let target = rng.next(community);
                link(&mut graph, base + i, base + target);
            }
        }
    }

    // Bridge: last of A, through the bridge personas, to first of B
    let mut prev = community - 1;
    for id in community..=b_start {
        link(&mut graph, prev, id);
        prev = id;
    }

    // Odd split leaves one trailing persona; it joins B
    for id in (b_start + community)..node_count {
        link(&mut graph, id, b_start);
    }

    graph
}
