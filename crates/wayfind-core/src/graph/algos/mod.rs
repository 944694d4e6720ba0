//! Search algorithm implementations
//!
//! Contains the three uninformed search strategies:
//! - `bfs`: Breadth-first search over a FIFO queue
//! - `dfs`: Depth-first search over a LIFO stack
//! - `ucs`: Uniform-cost search over a cost-ordered frontier
//! - `shared`: Frontier trait and the loop shared by BFS and DFS

pub mod bfs;
pub mod dfs;
pub mod shared;
pub mod ucs;

pub use bfs::bfs_search;
pub use dfs::dfs_search;
pub use shared::{FifoFrontier, Frontier, LifoFrontier};
pub use ucs::{ucs_search, ucs_search_with, HeapFrontier, ResortFrontier, UcsFrontier};
