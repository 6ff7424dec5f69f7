//! Graph presentation
//!
//! Renders a debt graph as Graphviz DOT and, when the `dot` binary is
//! available, as PDF. The text form is always available as a fallback.
//!
//! # Example Output
//!
//! ```text
//! digraph "Simplified_Mutual_Debt" {
//!     node [color=orangered, shape=box, style=rounded, penwidth=2];
//!     "A";
//!     "A" -> "C" [xlabel="15"];
//! }
//! ```

use crate::{config::RenderConfig, Error, Result};
use debt_core::WeightedDirectedGraph;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where a rendered graph ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// DOT source and PDF written; holds the PDF path
    Pdf(PathBuf),

    /// Only DOT source written; holds the `.gv` path
    Dot(PathBuf),
}

impl RenderOutcome {
    /// Path of the most complete artifact
    pub fn path(&self) -> &Path {
        match self {
            RenderOutcome::Pdf(path) | RenderOutcome::Dot(path) => path,
        }
    }
}

/// Graphviz renderer
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Output directory
    output_dir: PathBuf,

    /// Invoke the `dot` binary
    graphviz: bool,

    /// `dot` binary name or path
    dot_binary: String,
}

impl Renderer {
    /// Create renderer from configuration
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            graphviz: config.graphviz,
            dot_binary: config.dot_binary.clone(),
        }
    }

    /// Write `<name>.gv` and, if enabled, `<name>.gv.pdf`.
    ///
    /// A missing or failing `dot` binary is not an error: the DOT source is
    /// kept and a warning is logged.
    pub fn render(&self, graph: &WeightedDirectedGraph, name: &str) -> Result<RenderOutcome> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(Error::Render(format!("invalid graph name {:?}", name)));
        }

        std::fs::create_dir_all(&self.output_dir)?;

        let dot_path = self.output_dir.join(format!("{}.gv", name));
        std::fs::write(&dot_path, to_dot(graph, name))?;

        if !self.graphviz {
            return Ok(RenderOutcome::Dot(dot_path));
        }

        let pdf_path = self.output_dir.join(format!("{}.gv.pdf", name));
        let status = Command::new(&self.dot_binary)
            .arg("-Tpdf")
            .arg(&dot_path)
            .arg("-o")
            .arg(&pdf_path)
            .status();

        match status {
            Ok(status) if status.success() => {
                tracing::info!(path = %pdf_path.display(), "Render saved");
                Ok(RenderOutcome::Pdf(pdf_path))
            }
            Ok(status) => {
                tracing::warn!(%status, binary = %self.dot_binary, "Graphviz failed, keeping DOT source");
                Ok(RenderOutcome::Dot(dot_path))
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    binary = %self.dot_binary,
                    "Graphviz not available; install graphviz for a much cleaner visualization of the graph"
                );
                Ok(RenderOutcome::Dot(dot_path))
            }
        }
    }
}

/// Graphviz DOT source for `graph`
pub fn to_dot(graph: &WeightedDirectedGraph, name: &str) -> String {
    let mut dot = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(dot, "digraph {} {{", quote(name));
    let _ = writeln!(
        dot,
        "    node [color=orangered, shape=box, style=rounded, penwidth=2];"
    );

    let mut current = None;
    for (from, to, weight) in graph.edges() {
        if current != Some(from) {
            let _ = writeln!(dot, "    {};", quote(from.as_str()));
            current = Some(from);
        }
        let _ = writeln!(
            dot,
            "    {} -> {} [xlabel={}];",
            quote(from.as_str()),
            quote(to.as_str()),
            quote(&weight.to_string())
        );
    }

    dot.push_str("}\n");
    dot
}

/// Plain text form: a `<name>:` header line followed by one line per edge
pub fn to_text(graph: &WeightedDirectedGraph, name: &str) -> String {
    if graph.is_empty() {
        format!("{}: (no transactions)\n", name)
    } else {
        format!("{}:\n{}", name, graph)
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
