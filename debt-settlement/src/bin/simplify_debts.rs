//! Mutual debt simplification binary
//!
//! Usage: `simplify-debts [DEBT_LIST]`
//!
//! Configuration comes from the file named by `SIMPLIFY_DEBTS_CONFIG`, or from
//! `SIMPLIFY_DEBTS_*` environment variables. A positional argument overrides
//! the debt list path.

use anyhow::Context;
use debt_settlement::{render, Config, Renderer, SettlementEngine};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load configuration
    let mut config = if let Ok(config_path) = std::env::var("SIMPLIFY_DEBTS_CONFIG") {
        info!("Loading config from: {}", config_path);
        Config::from_file(&config_path)?
    } else {
        Config::from_env()?
    };

    if let Some(path) = std::env::args_os().nth(1) {
        config.input.debt_list_path = PathBuf::from(path);
    }

    info!(
        "Starting {} on {}",
        config.service_name,
        config.input.debt_list_path.display()
    );

    let engine = SettlementEngine::new(config.clone());
    let report = engine
        .run_file(&config.input.debt_list_path)
        .with_context(|| {
            format!(
                "failed to settle {}",
                config.input.debt_list_path.display()
            )
        })?;

    let renderer = Renderer::new(&config.render);
    for (graph, name) in [
        (&report.initial, "Initial_Mutual_Debt"),
        (&report.simplified, "Simplified_Mutual_Debt"),
    ] {
        print!("{}", render::to_text(graph, name));
        let outcome = renderer.render(graph, name)?;
        info!("{} rendered to {}", name, outcome.path().display());
    }

    if config.render.write_report {
        engine.write_report(&report)?;
    }

    print!("{}", report);
    Ok(())
}
