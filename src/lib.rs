//! A library for finding a maximum clique of an undirected simple graph, or
//! deciding whether a clique of a given size exists.
//!
//! marten_clique is a branch and bound solver: a greedy colouring of the
//! candidate vertices bounds what any branch can achieve, an incumbent
//! records the best clique found so far, and subtrees whose bound cannot
//! beat the incumbent are cut.
//! Optionally, search restarts on a schedule, learning nogoods which make
//! sure no part of the tree is ever explored twice.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](context).
//!
//! A context is built from a [graph](structures::graph::Graph) and
//! [parameters](config::Params), and owns everything a solve touches.
//! Internally, and at a high level, a solve is a conversation between a
//! handful of databases and procedures:
//!
//! - The [graph database](db::graph) holds the adjacency matrix, permuted
//!   into the search order.
//! - The [colouring procedures](procedures::colour) bound what a candidate
//!   set can achieve.
//! - The [expander](procedures::expand) branches, cuts, and backtracks.
//! - The [watch database](db::watches) holds nogoods learnt at restarts and
//!   propagates them cheaply.
//! - The [runner](procedures::solve) drives descents and restarts to a
//!   [result](reports::CliqueResult).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](procedures::solve) to inspect the
//!   dynamics of a run.
//! - The [expander](procedures::expand) for the search itself.
//! - The [configuration](config) to see which knobs exist.
//!
//! # Examples
//!
//! + Find a maximum clique.
//!
//! ```rust
//! # use marten_clique::config::Params;
//! # use marten_clique::reports::Report;
//! # use marten_clique::structures::graph::Graph;
//! // two triangles sharing the vertex 2
//! let mut graph = Graph::new(5);
//! for (u, v) in [(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4)] {
//!     assert!(graph.add_edge(u, v).is_ok());
//! }
//!
//! let result = marten_clique::solve(&graph, Params::default()).unwrap();
//!
//! assert_eq!(result.report, Report::Complete);
//! assert_eq!(result.clique.len(), 3);
//! ```
//!
//! + Decide whether a clique of a given size exists.
//!
//! ```rust
//! # use marten_clique::config::{Config, Params};
//! # use marten_clique::reports::Report;
//! # use marten_clique::structures::graph::Graph;
//! let mut graph = Graph::new(4);
//! for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3)] {
//!     assert!(graph.add_edge(u, v).is_ok());
//! }
//!
//! let params = Params {
//!     config: Config {
//!         decide: Some(3),
//!         ..Config::default()
//!     },
//!     ..Params::default()
//! };
//!
//! let result = marten_clique::solve(&graph, params).unwrap();
//! assert_eq!(result.report, Report::DecidedTrue);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues, calls to [log](log) are made at the interesting
//! points of a solve, under the targets listed in [misc::log].
//! As no log implementation is provided, logging costs nothing unless an
//! implementation is installed.

pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod schedules;
pub mod structures;
pub mod types;

pub use procedures::solve::solve;
