//! Settlement matching
//!
//! Pairs net debtors with net collectors and emits one transfer per pair
//! until every balance reaches zero.
//!
//! # Algorithm
//!
//! 1. Walk collectors in ascending identifier order
//! 2. For each, walk debtors in descending identifier order
//! 3. Transfer min(remaining credit, remaining debt) from debtor to collector
//! 4. Every transfer zeroes at least one side, so at most
//!    |debtors| + |collectors| − 1 transfers are emitted
//!
//! The walk is greedy in identifier order, not by amount, and does not
//! always reach the fewest possible transfers.
//!
//! # Example
//!
//! ```text
//! Debtors:    A: 30, C: 10
//! Collectors: B: 25, D: 15
//!
//! Transfers:
//!   C pays B: 10
//!   A pays B: 15
//!   A pays D: 15
//! ```

use crate::{NetPositions, Participant, WeightedDirectedGraph};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Match collectors against debtors and return the settlement graph.
///
/// Both maps are consumed as the running "remaining balance" state.
pub fn settle(
    mut collectors: BTreeMap<Participant, Decimal>,
    mut debtors: BTreeMap<Participant, Decimal>,
) -> WeightedDirectedGraph {
    let mut settlement = WeightedDirectedGraph::new();

    for (collector, credit) in collectors.iter_mut() {
        for (debtor, debt) in debtors.iter_mut().rev() {
            if *credit <= Decimal::ZERO {
                break;
            }
            if *debt <= Decimal::ZERO || debtor == collector {
                continue;
            }

            let transaction = (*credit).min(*debt);
            tracing::trace!(%debtor, %collector, %transaction, "Settlement transfer");
            // Each (debtor, collector) pair is visited once
            settlement.set_weight(debtor.clone(), collector.clone(), transaction);

            if *credit >= *debt {
                *credit -= *debt;
                *debt = Decimal::ZERO;
            } else {
                *debt -= *credit;
                *credit = Decimal::ZERO;
            }
        }
    }

    tracing::debug!(
        transfers = settlement.edge_count(),
        amount = %settlement.gross_amount(),
        "Settlement matched"
    );

    settlement
}

/// [`settle`] over the output of [`crate::resolve`].
pub fn settle_positions(positions: NetPositions) -> WeightedDirectedGraph {
    settle(positions.collectors, positions.debtors)
}
