//! zimsearch - Search Orchestration for ZIM Library Catalogs
//!
//! Client-side library driving paginated full-text search against a
//! zimplorer-style `/books_search` backend: query gating, sequential
//! page fetching, result accumulation, and project grouping.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
