//! Worked settlement scenarios

use debt_core::{resolve, settle, simplify, Participant, WeightedDirectedGraph};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

fn graph(edges: &[(&str, &str, Decimal)]) -> WeightedDirectedGraph {
    WeightedDirectedGraph::from_edges(edges.iter().copied()).unwrap()
}

fn edge_list(graph: &WeightedDirectedGraph) -> Vec<(String, String, Decimal)> {
    graph
        .edges()
        .map(|(from, to, w)| (from.to_string(), to.to_string(), w))
        .collect()
}

#[test]
fn test_single_debt_is_kept() {
    let simplified = simplify(&graph(&[("A", "B", dec!(10))]));

    assert_eq!(
        edge_list(&simplified),
        vec![("A".to_string(), "B".to_string(), dec!(10))]
    );
}

#[test]
fn test_pure_cycle_cancels() {
    let simplified = simplify(&graph(&[
        ("A", "B", dec!(5)),
        ("B", "C", dec!(5)),
        ("C", "A", dec!(5)),
    ]));

    assert!(simplified.is_empty());
    assert_eq!(simplified.edge_count(), 0);
}

#[test]
fn test_three_party_reduction() {
    let original = graph(&[
        ("A", "B", dec!(10)),
        ("B", "C", dec!(10)),
        ("A", "C", dec!(5)),
    ]);

    let simplified = simplify(&original);

    assert_eq!(
        edge_list(&simplified),
        vec![("A".to_string(), "C".to_string(), dec!(15))]
    );
    assert_eq!(simplified.participant_count(), 2);
}

#[test]
fn test_partial_overlap() {
    let debtors: BTreeMap<Participant, Decimal> =
        [(Participant::from("A"), dec!(30)), (Participant::from("C"), dec!(10))].into_iter().collect();
    let collectors: BTreeMap<Participant, Decimal> =
        [(Participant::from("B"), dec!(25)), (Participant::from("D"), dec!(15))].into_iter().collect();

    let settlement = settle(collectors.clone(), debtors.clone());

    assert!(settlement.edge_count() <= 3);
    let positions = resolve(&settlement);
    assert_eq!(positions.debtors, debtors);
    assert_eq!(positions.collectors, collectors);
}

#[test]
fn test_shared_expenses() {
    // Dinner for four paid by alice (120), taxi paid by bob (40)
    let original = graph(&[
        ("bob", "alice", dec!(30)),
        ("carol", "alice", dec!(30)),
        ("dave", "alice", dec!(30)),
        ("alice", "bob", dec!(10)),
        ("carol", "bob", dec!(10)),
        ("dave", "bob", dec!(10)),
    ]);

    let simplified = simplify(&original);

    // alice is owed 80, bob breaks even, carol and dave owe 40 each
    let positions = resolve(&simplified);
    assert_eq!(positions.net_position("alice"), dec!(-80));
    assert_eq!(positions.net_position("bob"), Decimal::ZERO);
    assert_eq!(positions.net_position("carol"), dec!(40));
    assert_eq!(positions.net_position("dave"), dec!(40));
    assert_eq!(
        edge_list(&simplified),
        vec![
            ("carol".to_string(), "alice".to_string(), dec!(40)),
            ("dave".to_string(), "alice".to_string(), dec!(40)),
        ]
    );
}

#[test]
fn test_fractional_amounts_stay_exact() {
    let original = graph(&[
        ("A", "B", dec!(0.1)),
        ("A", "B", dec!(0.2)),
        ("B", "C", dec!(0.3)),
    ]);

    let simplified = simplify(&original);

    assert_eq!(simplified.weight("A", "C"), Some(dec!(0.3)));
    assert_eq!(simplified.edge_count(), 1);
}
