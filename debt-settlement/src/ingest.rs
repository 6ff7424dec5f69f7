//! Debt list ingestion
//!
//! Input document:
//!
//! ```json
//! {
//!   "debt_list": [["ana", "bru", 12.5], ["bru", "cat", "7"]],
//!   "names": {"ana": "Ana Silva", "bru": "Bruno Costa", "cat": "Catarina Sousa"}
//! }
//! ```
//!
//! Each record is `[debtor, collector, amount]`. When `names` is present and
//! non-empty every id is translated through it; an id it does not know is
//! rejected. Amounts may be JSON numbers or numeric strings.

use crate::{Error, Result};
use debt_core::types::parse_amount;
use debt_core::{Participant, WeightedDirectedGraph};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Raw `[debtor, collector, amount]` entry as it appears in the input
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDebt(String, String, Value);

/// Debt list with optional alias mapping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebtList {
    /// Debt entries in input order
    debt_list: Vec<RawDebt>,

    /// Alias → participant name
    #[serde(default)]
    names: Option<BTreeMap<String, String>>,
}

/// Validated debt record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebtRecord {
    /// Who owes
    pub debtor: Participant,

    /// Who is owed
    pub collector: Participant,

    /// Amount owed
    pub amount: Decimal,
}

impl DebtList {
    /// Create empty debt list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded debt list");
        Self::from_json_str(&content)
    }

    /// Append a debt
    pub fn push(&mut self, debtor: impl Into<String>, collector: impl Into<String>, amount: Decimal) {
        self.debt_list.push(RawDebt(
            debtor.into(),
            collector.into(),
            Value::String(amount.to_string()),
        ));
    }

    /// Set the alias mapping
    pub fn with_names(mut self, names: BTreeMap<String, String>) -> Self {
        self.names = Some(names);
        self
    }

    /// Number of debt entries
    pub fn len(&self) -> usize {
        self.debt_list.len()
    }

    /// True when there are no debt entries
    pub fn is_empty(&self) -> bool {
        self.debt_list.is_empty()
    }

    /// Validate every entry, translating names and amounts.
    ///
    /// Fails on the first bad entry; no partial list is returned.
    pub fn records(&self) -> Result<Vec<DebtRecord>> {
        self.debt_list
            .iter()
            .enumerate()
            .map(|(index, RawDebt(debtor, collector, amount))| -> Result<DebtRecord> {
                Ok(DebtRecord {
                    debtor: self.translate(debtor)?,
                    collector: self.translate(collector)?,
                    amount: amount_of(index, amount)?,
                })
            })
            .collect()
    }

    fn translate(&self, id: &str) -> Result<Participant> {
        match &self.names {
            Some(names) if !names.is_empty() => names
                .get(id)
                .map(Participant::new)
                .ok_or_else(|| Error::UnknownParticipant(id.to_string())),
            _ => Ok(Participant::new(id)),
        }
    }
}

fn amount_of(index: usize, value: &Value) -> Result<Decimal> {
    let parsed = match value {
        Value::Number(number) => parse_amount(&number.to_string()),
        Value::String(text) => parse_amount(text),
        other => {
            return Err(Error::InvalidAmount {
                index,
                reason: format!("expected a number, got {}", other),
            })
        }
    };

    parsed.map_err(|e| Error::InvalidAmount {
        index,
        reason: e.to_string(),
    })
}

/// Build the debt graph described by `debts`.
pub fn debt_list_to_graph(debts: &DebtList) -> Result<WeightedDirectedGraph> {
    let mut graph = WeightedDirectedGraph::new();

    for (index, record) in debts.records()?.into_iter().enumerate() {
        graph
            .add_edge(record.debtor, record.collector, record.amount)
            .map_err(|e| Error::InvalidAmount {
                index,
                reason: e.to_string(),
            })?;
    }

    tracing::info!(
        records = debts.len(),
        participants = graph.participant_count(),
        edges = graph.edge_count(),
        "Debt graph built"
    );

    Ok(graph)
}
