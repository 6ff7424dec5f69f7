//! Net position resolution
//!
//! For each participant: net = Σ(outgoing) − Σ(incoming).
//! Positive net is a debtor, negative net a collector, zero drops out.
//!
//! ```text
//! Gross debts:
//!   A owes B: 10
//!   B owes C: 10
//!   A owes C: 5
//!
//! Net positions:
//!   A: +15 (debtor)
//!   B:   0 (omitted)
//!   C: -15 (collector, stored as 15)
//! ```

use crate::{Participant, WeightedDirectedGraph};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Net debtors and net collectors of a graph.
///
/// Both maps hold strictly positive amounts and never share a participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetPositions {
    /// Participant → amount they owe in total
    pub debtors: BTreeMap<Participant, Decimal>,

    /// Participant → amount owed to them in total
    pub collectors: BTreeMap<Participant, Decimal>,
}

impl NetPositions {
    /// Sum of all net debts
    pub fn total_debt(&self) -> Decimal {
        self.debtors.values().copied().sum()
    }

    /// Sum of all net credits
    pub fn total_credit(&self) -> Decimal {
        self.collectors.values().copied().sum()
    }

    /// True when every participant nets to zero
    pub fn is_settled(&self) -> bool {
        self.debtors.is_empty() && self.collectors.is_empty()
    }

    /// Signed net position: positive owes, negative is owed, zero if absent
    pub fn net_position(&self, participant: &str) -> Decimal {
        if let Some(debt) = self.debtors.get(participant) {
            *debt
        } else if let Some(credit) = self.collectors.get(participant) {
            -*credit
        } else {
            Decimal::ZERO
        }
    }

    /// Number of participants with a non-zero position
    pub fn participant_count(&self) -> usize {
        self.debtors.len() + self.collectors.len()
    }
}

/// Compute net debtors and collectors of `graph`.
pub fn resolve(graph: &WeightedDirectedGraph) -> NetPositions {
    let mut positions = NetPositions::default();

    for participant in graph.participants() {
        let owes: Decimal = graph
            .outgoing_edges(participant.as_str())
            .map(|(_, weight)| weight)
            .sum();
        let owed: Decimal = graph
            .incoming_edges(participant.as_str())
            .map(|(_, weight)| weight)
            .sum();
        let net = owes - owed;

        if net > Decimal::ZERO {
            positions.debtors.insert(participant.clone(), net);
        } else if net < Decimal::ZERO {
            positions.collectors.insert(participant.clone(), -net);
        }
    }

    tracing::debug!(
        debtors = positions.debtors.len(),
        collectors = positions.collectors.len(),
        total = %positions.total_debt(),
        "Resolved net positions"
    );

    positions
}
