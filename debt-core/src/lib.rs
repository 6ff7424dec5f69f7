//! Debt Core
//!
//! Reduces a set of pairwise debts to a small set of net settlement
//! transfers that leaves every participant's net balance unchanged.
//!
//! # Architecture
//!
//! - **Graph**: debtor → creditor weighted edges with a mirrored reverse index
//! - **Resolver**: per-participant net position (outgoing − incoming)
//! - **Matcher**: greedy pairing of net debtors with net collectors
//!
//! # Invariants
//!
//! - Conservation: Σ(net debt) == Σ(net credit), exactly (Decimal arithmetic)
//! - Preservation: resolve(simplify(G)) == resolve(G)
//! - Bound: simplified edge count ≤ |debtors| + |collectors| − 1
//!
//! # Example
//!
//! ```
//! use debt_core::{simplify, WeightedDirectedGraph};
//! use rust_decimal::Decimal;
//!
//! let mut graph = WeightedDirectedGraph::new();
//! graph.add_edge("alice", "bob", Decimal::from(10)).unwrap();
//! graph.add_edge("bob", "carol", Decimal::from(10)).unwrap();
//!
//! let settled = simplify(&graph);
//! assert_eq!(settled.edge_count(), 1);
//! assert_eq!(settled.weight("alice", "carol"), Some(Decimal::from(10)));
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod types;
pub mod graph;
pub mod resolver;
pub mod matcher;
pub mod error;

// Re-exports
pub use error::{Error, Result};
pub use graph::WeightedDirectedGraph;
pub use matcher::{settle, settle_positions};
pub use resolver::{resolve, NetPositions};
pub use types::Participant;

/// Simplify a debt graph to its settlement transfers.
///
/// Equivalent to `settle_positions(resolve(graph))`. Applying it to its own
/// output yields the same graph.
pub fn simplify(graph: &WeightedDirectedGraph) -> WeightedDirectedGraph {
    settle_positions(resolve(graph))
}
