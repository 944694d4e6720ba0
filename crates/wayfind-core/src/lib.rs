//! Wayfind Core Library
//!
//! Graph store and uninformed search algorithms for the wayfind teaching demo.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
