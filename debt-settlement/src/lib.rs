//! Debt Settlement
//!
//! Runs mutual debt simplification end to end.
//!
//! # Architecture
//!
//! 1. **Ingestion**: Read the JSON debt list and resolve name aliases
//! 2. **Simplification**: Net positions and greedy matching (`debt-core`)
//! 3. **Presentation**: Graphviz DOT / PDF, or a plain text dump
//! 4. **Report**: Netting statistics, optionally written as JSON
//!
//! # Example
//!
//! ```
//! use debt_settlement::{Config, DebtList, SettlementEngine};
//!
//! let debts = DebtList::from_json_str(
//!     r#"{"debt_list": [["A", "B", 10], ["B", "C", 10]], "names": null}"#,
//! )?;
//! let report = SettlementEngine::new(Config::default()).run(&debts)?;
//! assert_eq!(report.stats.transactions_after, 1);
//! # Ok::<(), debt_settlement::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod ingest;
pub mod render;
pub mod error;
pub mod config;
pub mod engine;

// Re-exports
pub use config::Config;
pub use engine::{NettingStats, SettlementEngine, SettlementReport};
pub use error::{Error, Result};
pub use ingest::{debt_list_to_graph, DebtList, DebtRecord};
pub use render::{RenderOutcome, Renderer};
