//! Weighted directed debt graph
//!
//! Edges point from debtor to creditor and carry the accumulated amount owed.
//! A reverse index (creditor → debtor) is kept in step with the forward index
//! so "who owes me" is a direct lookup.

use crate::{types::ensure_amount, Error, Participant, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

type Adjacency = BTreeMap<Participant, BTreeMap<Participant, Decimal>>;

/// Directed debt graph with accumulated edge weights
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeightedDirectedGraph {
    /// debtor → creditor → amount
    #[serde(rename = "edges")]
    forward: Adjacency,

    /// creditor → debtor → amount
    #[serde(skip)]
    reverse: Adjacency,

    /// Sum of all edge weights. Bounds every per-participant total.
    #[serde(skip)]
    gross: Decimal,
}

impl WeightedDirectedGraph {
    /// Create empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(debtor, creditor, amount)` triples
    pub fn from_edges<I, P, Q>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, Q, Decimal)>,
        P: Into<Participant>,
        Q: Into<Participant>,
    {
        let mut graph = Self::new();
        for (from, to, amount) in edges {
            graph.add_edge(from, to, amount)?;
        }
        Ok(graph)
    }

    /// Add `amount` onto the edge `from → to`.
    ///
    /// Repeated pairs accumulate. A zero amount is accepted but never
    /// materializes an edge. Negative amounts, and amounts that would push the
    /// graph's total weight past [`Decimal::MAX`], fail with
    /// [`Error::InvalidAmount`] and leave the graph untouched.
    pub fn add_edge(
        &mut self,
        from: impl Into<Participant>,
        to: impl Into<Participant>,
        amount: Decimal,
    ) -> Result<()> {
        let amount = ensure_amount(amount)?;
        if amount.is_zero() {
            return Ok(());
        }

        let (from, to) = (from.into(), to.into());
        let current = self.weight(from.as_str(), to.as_str()).unwrap_or(Decimal::ZERO);
        // Every outgoing or incoming total is at most the gross total, so
        // keeping the gross representable keeps net positions representable.
        self.gross.checked_add(amount).ok_or_else(|| {
            Error::InvalidAmount(format!(
                "adding {} to {} -> {} overflows the graph total",
                amount, from, to
            ))
        })?;

        self.set_weight(from, to, current + amount);
        Ok(())
    }

    /// Write both index entries for one edge.
    pub(crate) fn set_weight(&mut self, from: Participant, to: Participant, weight: Decimal) {
        let previous = self
            .forward
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), weight)
            .unwrap_or(Decimal::ZERO);
        self.reverse.entry(to).or_default().insert(from, weight);
        self.gross = self.gross.saturating_sub(previous).saturating_add(weight);
    }

    /// Every participant with at least one outgoing or incoming edge, once each
    pub fn participants(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.forward.keys().chain(
            self.reverse
                .keys()
                .filter(move |p| !self.forward.contains_key(*p)),
        )
    }

    /// Debts owed by `participant`: `(creditor, amount)`
    pub fn outgoing_edges(&self, participant: &str) -> impl Iterator<Item = (&Participant, Decimal)> + '_ {
        Self::neighbours(&self.forward, participant)
    }

    /// Debts owed to `participant`: `(debtor, amount)`
    pub fn incoming_edges(&self, participant: &str) -> impl Iterator<Item = (&Participant, Decimal)> + '_ {
        Self::neighbours(&self.reverse, participant)
    }

    fn neighbours<'a>(
        index: &'a Adjacency,
        participant: &str,
    ) -> impl Iterator<Item = (&'a Participant, Decimal)> + 'a {
        index
            .get(participant)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(other, weight)| (other, *weight)))
    }

    /// Accumulated weight of `from → to`, if the edge exists
    pub fn weight(&self, from: &str, to: &str) -> Option<Decimal> {
        self.forward.get(from).and_then(|edges| edges.get(to)).copied()
    }

    /// All edges as `(debtor, creditor, amount)`, ordered by debtor then creditor
    pub fn edges(&self) -> impl Iterator<Item = (&Participant, &Participant, Decimal)> + '_ {
        self.forward.iter().flat_map(|(from, edges)| {
            edges.iter().map(move |(to, weight)| (from, to, *weight))
        })
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(BTreeMap::len).sum()
    }

    /// Number of distinct participants
    pub fn participant_count(&self) -> usize {
        self.participants().count()
    }

    /// True when no edge has been added
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Sum of all edge weights
    pub fn gross_amount(&self) -> Decimal {
        self.gross
    }

    /// Check the forward/reverse mirror and weight sign invariants.
    pub fn verify(&self) -> Result<()> {
        for (from, to, weight) in self.edges() {
            if weight.is_sign_negative() || weight.is_zero() {
                return Err(Error::InvariantViolation(format!(
                    "edge {} -> {} has non-positive weight {}",
                    from, to, weight
                )));
            }
            let mirrored = self
                .reverse
                .get(to)
                .and_then(|edges| edges.get(from))
                .copied();
            if mirrored != Some(weight) {
                return Err(Error::InvariantViolation(format!(
                    "edge {} -> {} ({}) not mirrored in reverse index",
                    from, to, weight
                )));
            }
        }

        let summed = self
            .edges()
            .try_fold(Decimal::ZERO, |total, (_, _, weight)| total.checked_add(weight));
        if summed != Some(self.gross) {
            return Err(Error::InvariantViolation(format!(
                "gross total {} does not match edge weights",
                self.gross
            )));
        }

        let reverse_count: usize = self.reverse.values().map(BTreeMap::len).sum();
        if reverse_count != self.edge_count() {
            return Err(Error::InvariantViolation(format!(
                "reverse index holds {} edges, forward index {}",
                reverse_count,
                self.edge_count()
            )));
        }

        Ok(())
    }
}

impl fmt::Display for WeightedDirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, to, weight) in self.edges() {
            writeln!(f, "{} -> {}: {}", from, to, weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_edge_accumulates() {
        let mut graph = WeightedDirectedGraph::new();
        graph.add_edge("A", "B", dec!(100)).unwrap();
        graph.add_edge("A", "B", dec!(50)).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight("A", "B"), Some(dec!(150)));
        assert_eq!(graph.weight("B", "A"), None);
        graph.verify().unwrap();
    }

    #[test]
    fn test_reverse_index_mirrors_forward() {
        let mut graph = WeightedDirectedGraph::new();
        graph.add_edge("A", "B", dec!(100)).unwrap();
        graph.add_edge("C", "B", dec!(50)).unwrap();

        let incoming: Vec<_> = graph
            .incoming_edges("B")
            .map(|(p, w)| (p.as_str().to_string(), w))
            .collect();
        assert_eq!(
            incoming,
            vec![("A".to_string(), dec!(100)), ("C".to_string(), dec!(50))]
        );
        assert_eq!(graph.outgoing_edges("B").count(), 0);
        assert_eq!(graph.incoming_edges("A").count(), 0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut graph = WeightedDirectedGraph::new();
        graph.add_edge("A", "B", dec!(10)).unwrap();

        let result = graph.add_edge("A", "B", dec!(-5));

        assert!(matches!(result, Err(Error::InvalidAmount(_))));
        assert_eq!(graph.weight("A", "B"), Some(dec!(10)));
    }

    #[test]
    fn test_total_overflow_rejected() {
        let mut graph = WeightedDirectedGraph::new();
        graph.add_edge("A", "B", Decimal::MAX).unwrap();

        let result = graph.add_edge("A", "C", dec!(1));

        assert!(matches!(result, Err(Error::InvalidAmount(_))));
        assert_eq!(graph.weight("A", "C"), None);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.gross_amount(), Decimal::MAX);
        graph.verify().unwrap();

        let positions = crate::resolve(&graph);
        assert_eq!(positions.net_position("A"), Decimal::MAX);
        assert_eq!(crate::simplify(&graph), graph);
    }

    #[test]
    fn test_incoming_total_overflow_rejected() {
        let mut graph = WeightedDirectedGraph::new();
        graph.add_edge("A", "C", Decimal::MAX - dec!(10)).unwrap();
        graph.add_edge("B", "C", dec!(5)).unwrap();

        assert!(matches!(
            graph.add_edge("D", "C", dec!(6)),
            Err(Error::InvalidAmount(_))
        ));
        assert_eq!(graph.incoming_edges("C").count(), 2);
        assert_eq!(crate::resolve(&graph).total_credit(), Decimal::MAX - dec!(5));
    }

    #[test]
    fn test_zero_amount_not_materialized() {
        let mut graph = WeightedDirectedGraph::new();
        graph.add_edge("A", "B", Decimal::ZERO).unwrap();

        assert!(graph.is_empty());
        assert_eq!(graph.participant_count(), 0);
    }

    #[test]
    fn test_participants_listed_once() {
        let mut graph = WeightedDirectedGraph::new();
        graph.add_edge("A", "B", dec!(1)).unwrap();
        graph.add_edge("B", "C", dec!(1)).unwrap();
        graph.add_edge("D", "B", dec!(1)).unwrap();

        let mut names: Vec<&str> = graph.participants().map(Participant::as_str).collect();
        names.sort();
        assert_eq!(names, vec!["A", "B", "C", "D"]);

        // Restartable
        assert_eq!(graph.participants().count(), 4);
    }

    #[test]
    fn test_unknown_participant_has_no_edges() {
        let graph = WeightedDirectedGraph::new();
        assert_eq!(graph.outgoing_edges("nobody").count(), 0);
        assert_eq!(graph.incoming_edges("nobody").count(), 0);
    }

    #[test]
    fn test_gross_amount_and_display() {
        let graph = WeightedDirectedGraph::from_edges(vec![
            ("A", "B", dec!(10)),
            ("B", "C", dec!(2.5)),
        ])
        .unwrap();

        assert_eq!(graph.gross_amount(), dec!(12.5));
        assert_eq!(graph.to_string(), "A -> B: 10\nB -> C: 2.5\n");
    }

    #[test]
    fn test_verify_detects_broken_mirror() {
        let mut graph = WeightedDirectedGraph::new();
        graph.add_edge("A", "B", dec!(10)).unwrap();
        graph.reverse.clear();

        assert!(matches!(graph.verify(), Err(Error::InvariantViolation(_))));
    }
}
