//! Graph store and search operations
//!
//! Provides the pieces the demo is built from:
//! - Adjacency-list graph store with paired (undirected) edge insertion
//! - BFS, DFS and uniform-cost search over any `GraphProvider`
//! - Edge-list graph files (TOML or JSON)

pub mod algos;
pub mod file;
pub mod search;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{bfs_search, dfs_search, ucs_search, ucs_search_with, UcsFrontier};
pub use file::load_graph;
pub use search::{search, SearchAlgorithm, SearchOptions, SearchOutcome};
pub use store::{parse_cost, Graph};
pub use traversal::GraphProvider;
pub use types::{Cost, Edge, FrontierEntry, NodeId, SearchResult, UndirectedEdge};
