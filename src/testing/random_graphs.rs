use crate::graph::Graph;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random connected simple graph with `n` nodes and up to `m` edges.
///
/// Starts from a random spanning tree, then tries `m - n + 1` random extra edges.
/// Self-loops and repeated pairs are skipped. Weights are small integers so ties happen.
pub fn random_graph(n: usize, m: usize, seed: usize) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::new();

    for i in 0..n as u32 {
        graph.add_node(i).unwrap();
        if i > 0 {
            let j = rng.random_range(0..i);
            let w = rng.random_range(0..5) as f64;
            graph.add_edge(&i, &j, Some(w)).unwrap();
        }
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n as u32);
        let t = rng.random_range(0..n as u32);
        let w = rng.random_range(0..5) as f64;
        if s != t && graph.weight(&s, &t).is_none() {
            graph.add_edge(&s, &t, Some(w)).unwrap();
        }
    }

    graph
}

/// Disjoint union of `parts` random graphs, labels shifted so they do not clash.
pub fn random_forest_of_graphs(parts: usize, n: usize, m: usize, seed: usize) -> Graph<u32> {
    let mut graph = Graph::new();
    for p in 0..parts {
        let offset = (p * n) as u32;
        let part = random_graph(n, m, seed * 31 + p);
        for label in part.labels() {
            graph.add_node(label + offset).unwrap();
        }
        for e in part.edges() {
            graph
                .add_edge(&(e.source + offset), &(e.target + offset), Some(e.weight))
                .unwrap();
        }
    }
    graph
}
