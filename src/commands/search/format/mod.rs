//! Output formatting for search results

pub mod human;
pub mod json;
pub mod records;
