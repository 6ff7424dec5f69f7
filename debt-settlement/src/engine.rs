//! Settlement run
//!
//! Orchestrates ingestion, simplification, verification and reporting.

use crate::{
    config::Config,
    ingest::{debt_list_to_graph, DebtList},
    Result,
};
use chrono::{DateTime, Utc};
use debt_core::{resolve, settle_positions, NetPositions, WeightedDirectedGraph};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File name of the JSON report in the output directory
pub const REPORT_FILE_NAME: &str = "settlement-report.json";

/// Settlement engine
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    /// Configuration
    config: Config,
}

/// Netting statistics of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NettingStats {
    /// Participants with at least one debt
    pub participants: usize,

    /// Pairwise debts before simplification
    pub transactions_before: usize,

    /// Settlement transfers after simplification
    pub transactions_after: usize,

    /// Transfers removed by simplification
    pub transactions_eliminated: usize,

    /// Sum of all pairwise debts
    pub gross_amount: Decimal,

    /// Sum of all settlement transfers
    pub net_amount: Decimal,

    /// gross − net
    pub amount_saved: Decimal,

    /// (gross − net) / gross, 0 when there is nothing to settle
    pub netting_efficiency: f64,
}

impl NettingStats {
    fn compute(initial: &WeightedDirectedGraph, simplified: &WeightedDirectedGraph) -> Self {
        let gross_amount = initial.gross_amount();
        let net_amount = simplified.gross_amount();
        let amount_saved = gross_amount - net_amount;

        let netting_efficiency = if gross_amount > Decimal::ZERO {
            (amount_saved / gross_amount).to_f64().unwrap_or(0.0)
        } else {
            0.0
        };

        let transactions_before = initial.edge_count();
        let transactions_after = simplified.edge_count();

        Self {
            participants: initial.participant_count(),
            transactions_before,
            transactions_after,
            transactions_eliminated: transactions_before.saturating_sub(transactions_after),
            gross_amount,
            net_amount,
            amount_saved,
            netting_efficiency,
        }
    }
}

/// Outcome of one settlement run
#[derive(Debug, Clone, Serialize)]
pub struct SettlementReport {
    /// Run ID
    pub run_id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Debt graph as ingested
    pub initial: WeightedDirectedGraph,

    /// Settlement transfers
    pub simplified: WeightedDirectedGraph,

    /// Net positions shared by both graphs
    pub positions: NetPositions,

    /// Netting statistics
    pub stats: NettingStats,
}

impl fmt::Display for SettlementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settlement run {}", self.run_id)?;
        writeln!(f, "  participants:  {}", self.stats.participants)?;
        writeln!(
            f,
            "  transactions:  {} -> {}",
            self.stats.transactions_before, self.stats.transactions_after
        )?;
        writeln!(
            f,
            "  amount:        {} -> {}",
            self.stats.gross_amount, self.stats.net_amount
        )?;
        writeln!(
            f,
            "  efficiency:    {:.1}%",
            self.stats.netting_efficiency * 100.0
        )
    }
}

impl SettlementEngine {
    /// Create new settlement engine
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Ingest and settle a debt list
    pub fn run(&self, debts: &DebtList) -> Result<SettlementReport> {
        let initial = debt_list_to_graph(debts)?;
        self.settle(initial)
    }

    /// Load, ingest and settle a debt list file
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<SettlementReport> {
        let debts = DebtList::from_file(path)?;
        self.run(&debts)
    }

    /// Settle an already built debt graph
    pub fn settle(&self, initial: WeightedDirectedGraph) -> Result<SettlementReport> {
        initial.verify()?;

        let positions = resolve(&initial);
        let simplified = settle_positions(positions.clone());

        simplified.verify()?;
        let replayed = resolve(&simplified);
        if replayed != positions {
            return Err(debt_core::Error::InvariantViolation(
                "settlement changed net positions".to_string(),
            )
            .into());
        }

        let stats = NettingStats::compute(&initial, &simplified);

        if stats.netting_efficiency < self.config.netting.min_netting_efficiency {
            tracing::warn!(
                efficiency = stats.netting_efficiency,
                minimum = self.config.netting.min_netting_efficiency,
                "Netting efficiency below minimum"
            );
        }

        tracing::info!(
            "Settlement complete: {} debts → {} transfers, {} gross → {} net ({:.1}% efficiency)",
            stats.transactions_before,
            stats.transactions_after,
            stats.gross_amount,
            stats.net_amount,
            stats.netting_efficiency * 100.0
        );

        Ok(SettlementReport {
            run_id: Uuid::new_v4(),
            created_at: Utc::now(),
            initial,
            simplified,
            positions,
            stats,
        })
    }

    /// Write the report as JSON into the output directory
    pub fn write_report(&self, report: &SettlementReport) -> Result<PathBuf> {
        let output_dir = &self.config.render.output_dir;
        std::fs::create_dir_all(output_dir)?;

        let path = output_dir.join(REPORT_FILE_NAME);
        std::fs::write(&path, serde_json::to_string_pretty(report)?)?;

        tracing::info!(path = %path.display(), "Report written");
        Ok(path)
    }
}
