use std::cell::Cell;

use marten_clique::{
    config::{Config, Params},
    misc::timeout::Timeout,
    reports::Report,
    schedules::{GeometricRestartsSchedule, LubyRestartsSchedule},
    structures::graph::{Graph, Vertex},
};

mod common;
use common::{assert_is_clique, complete_graph, graph_from_edges};

/// A six clique in a sea of ring vertices, each ring vertex tied to one
/// clique vertex --- enough structure to make the search backtrack.
fn clique_in_a_ring() -> Graph {
    let mut edges: Vec<(Vertex, Vertex)> = complete_graph(6).edges().filter(|(u, v)| u < v).collect();
    for v in 6..19 {
        edges.push((v, v + 1));
        edges.push((v, v % 6));
    }
    edges.push((19, 6));
    edges.push((19, 1));
    graph_from_edges(20, &edges)
}

#[test]
fn aggressive_luby_restarts_reach_the_same_optimum() {
    let graph = clique_in_a_ring();

    let baseline = marten_clique::solve(&graph, Params::default()).unwrap();
    assert_eq!(baseline.clique.len(), 6);

    let params = Params {
        restarts_schedule: Box::new(LubyRestartsSchedule::new(1)),
        ..Params::default()
    };
    let result = marten_clique::solve(&graph, params).unwrap();

    assert_eq!(result.report, Report::Complete);
    assert_eq!(result.clique.len(), 6);
    assert_is_clique(&graph, &result.clique);
}

#[test]
fn geometric_restarts_reach_the_same_optimum() {
    let graph = clique_in_a_ring();

    let params = Params {
        restarts_schedule: Box::new(GeometricRestartsSchedule::new(1.0, 1.1)),
        ..Params::default()
    };
    let result = marten_clique::solve(&graph, params).unwrap();

    assert_eq!(result.report, Report::Complete);
    assert_eq!(result.clique.len(), 6);
    assert_is_clique(&graph, &result.clique);
}

#[test]
fn restart_statistics_are_reported() {
    let graph = clique_in_a_ring();

    let params = Params {
        restarts_schedule: Box::new(LubyRestartsSchedule::default()),
        ..Params::default()
    };
    let result = marten_clique::solve(&graph, params).unwrap();

    assert_eq!(result.extra_stats.len(), 1);
    assert!(result.extra_stats[0].starts_with("restarts = "));
}

/// Aborts after a fixed number of polls, one poll per branching step.
struct CountdownTimeout {
    remaining: Cell<u64>,
}

impl CountdownTimeout {
    fn new(budget: u64) -> Self {
        Self {
            remaining: Cell::new(budget),
        }
    }
}

impl Timeout for CountdownTimeout {
    fn should_abort(&self) -> bool {
        let remaining = self.remaining.get();
        if remaining == 0 {
            return true;
        }
        self.remaining.set(remaining - 1);
        false
    }
}

#[test]
fn an_aborted_run_returns_a_valid_partial_incumbent() {
    let graph = clique_in_a_ring();

    // four polls is not enough to finish the root loop, so this must abort
    let params = Params {
        timeout: Box::new(CountdownTimeout::new(4)),
        ..Params::default()
    };
    let result = marten_clique::solve(&graph, params).unwrap();

    assert_eq!(result.report, Report::Aborted);
    assert!(result.clique.len() <= 6);
    assert_is_clique(&graph, &result.clique);
}

#[test]
fn an_immediate_abort_returns_nothing() {
    let graph = clique_in_a_ring();

    let params = Params {
        timeout: Box::new(CountdownTimeout::new(0)),
        ..Params::default()
    };
    let result = marten_clique::solve(&graph, params).unwrap();

    assert_eq!(result.report, Report::Aborted);
    assert!(result.clique.is_empty());
    assert_eq!(result.nodes, 1);
}

#[test]
fn decide_mode_with_restarts() {
    let graph = clique_in_a_ring();

    let params = Params {
        config: Config {
            decide: Some(6),
            ..Config::default()
        },
        restarts_schedule: Box::new(LubyRestartsSchedule::new(1)),
        ..Params::default()
    };
    let result = marten_clique::solve(&graph, params).unwrap();

    assert_eq!(result.report, Report::DecidedTrue);
    assert_eq!(result.clique.len(), 6);
    assert_is_clique(&graph, &result.clique);

    let params = Params {
        config: Config {
            decide: Some(7),
            ..Config::default()
        },
        restarts_schedule: Box::new(LubyRestartsSchedule::new(1)),
        ..Params::default()
    };
    let result = marten_clique::solve(&graph, params).unwrap();

    assert_eq!(result.report, Report::Complete);
    assert!(result.clique.is_empty());
}
