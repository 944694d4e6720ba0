//! Command implementations for wayfind

pub mod algorithms;
pub mod config;
pub mod dispatch;
pub mod edges;
pub mod nodes;
pub mod search;
