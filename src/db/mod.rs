/*!
Databases holding information relevant to a solve.

- [The graph database](graph)
  + The permuted adjacency matrix, with the order and inverse order tables
    mapping between external ids and search indices.
    Built once per run, read-only thereafter.
- [The watch database](watches)
  + Nogoods learnt at restarts, watched by two of their vertices for cheap
    propagation.
    Grows monotonically over the run, and is only consulted when the restart
    schedule might restart.
*/

pub mod graph;
pub mod watches;
