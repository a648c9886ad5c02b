use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use marten_clique::{
    config::{Config, Params, VertexOrder},
    reports::proof::Transcriber,
    reports::Report,
    structures::graph::Graph,
};

mod common;
use common::complete_graph;

/// A sink which can be read after the transcriber is consumed by the solve.
#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl SharedSink {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.borrow().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn proof_params(decide: Option<usize>, sink: &SharedSink) -> Params {
    Params {
        config: Config {
            vertex_order: VertexOrder::Input,
            decide,
            ..Config::default()
        },
        proof: Some(Box::new(Transcriber::new(sink.clone()))),
        ..Params::default()
    }
}

#[test]
fn optimisation_proof_on_a_triangle() {
    let graph = complete_graph(3);
    let sink = SharedSink::default();

    let result = marten_clique::solve(&graph, proof_params(None, &sink)).unwrap();
    assert_eq!(result.report, Report::Complete);
    assert_eq!(result.clique.len(), 3);

    assert_eq!(
        sink.lines(),
        vec![
            "var 0 0",
            "var 1 1",
            "var 2 2",
            "objective 3",
            "end model",
            "expand 0 [] [0 1 2]",
            "level 0",
            "incumbent 2=1 1=1 0=1",
            "level 1",
            "unexpand 0 []",
            "end proof",
        ],
    );
}

#[test]
fn vertex_names_reach_the_model() {
    let mut graph = complete_graph(2);
    graph.set_vertex_name(0, "left".to_string());
    graph.set_vertex_name(1, "right".to_string());

    let sink = SharedSink::default();
    marten_clique::solve(&graph, proof_params(None, &sink)).unwrap();

    let lines = sink.lines();
    assert_eq!(lines[0], "var 0 left");
    assert_eq!(lines[1], "var 1 right");
}

#[test]
fn non_edges_reach_the_model() {
    // a path, so exactly one non-adjacent pair
    let mut graph = Graph::new(3);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();

    let sink = SharedSink::default();
    marten_clique::solve(&graph, proof_params(None, &sink)).unwrap();

    let lines = sink.lines();
    assert!(lines.contains(&"nonedge 2 0".to_string()));
    assert_eq!(
        lines.iter().filter(|line| line.starts_with("nonedge")).count(),
        1,
    );
}

#[test]
fn unsatisfiable_decide_finishes_the_proof() {
    let graph = complete_graph(3);
    let sink = SharedSink::default();

    let result = marten_clique::solve(&graph, proof_params(Some(4), &sink)).unwrap();
    assert_eq!(result.report, Report::Complete);
    assert!(result.clique.is_empty());

    assert_eq!(
        sink.lines(),
        vec![
            "var 0 0",
            "var 1 1",
            "var 2 2",
            "objective 3 target 4",
            "end model",
            "expand 0 [] [0 1 2]",
            "bound [0][1][2]",
            "unexpand 0 []",
            "end proof",
        ],
    );
}

#[test]
fn satisfiable_decide_posts_the_solution() {
    let graph = complete_graph(3);
    let sink = SharedSink::default();

    let result = marten_clique::solve(&graph, proof_params(Some(2), &sink)).unwrap();
    assert_eq!(result.report, Report::DecidedTrue);

    let lines = sink.lines();
    assert_eq!(lines.last().unwrap(), "solution [2 1 0]");
    assert!(!lines.contains(&"end proof".to_string()));
}
