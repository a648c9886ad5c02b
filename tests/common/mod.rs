use marten_clique::structures::graph::{Graph, Vertex};

pub fn graph_from_edges(size: usize, edges: &[(Vertex, Vertex)]) -> Graph {
    let mut graph = Graph::new(size);
    for (u, v) in edges {
        assert!(graph.add_edge(*u, *v).is_ok());
    }
    graph
}

pub fn complete_graph(size: usize) -> Graph {
    let mut graph = Graph::new(size);
    for u in 0..size as Vertex {
        for v in (u + 1)..size as Vertex {
            assert!(graph.add_edge(u, v).is_ok());
        }
    }
    graph
}

pub fn cycle_graph(size: usize) -> Graph {
    let mut graph = Graph::new(size);
    for v in 0..size as Vertex {
        assert!(graph.add_edge(v, (v + 1) % size as Vertex).is_ok());
    }
    graph
}

/// The standard Petersen construction: an outer five cycle, spokes, and an
/// inner pentagram.
pub fn petersen_graph() -> Graph {
    let mut graph = Graph::new(10);
    for v in 0..5 {
        assert!(graph.add_edge(v, (v + 1) % 5).is_ok());
        assert!(graph.add_edge(v, v + 5).is_ok());
        assert!(graph.add_edge(5 + v, 5 + (v + 2) % 5).is_ok());
    }
    graph
}

/// Every pair of the claimed clique is adjacent in `graph`.
pub fn assert_is_clique(graph: &Graph, clique: &std::collections::BTreeSet<Vertex>) {
    for u in clique {
        for v in clique {
            if u != v {
                assert!(graph.adjacent(*u, *v), "{u} and {v} are not adjacent");
            }
        }
    }
}
