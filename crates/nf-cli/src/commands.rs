//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use nf_engine::{normalize, parse_level};
use nf_ingest::load_inputs;
use nf_model::{NormalForm, Schema};
use nf_report::{render_statements, write_script};

use crate::cli::NormalizeArgs;
use crate::summary::apply_table_style;

/// Everything the normalize run produced, for the summary printer.
#[derive(Debug)]
pub struct NormalizeResult {
    pub level: NormalForm,
    pub schema: Schema,
    pub statements: Vec<String>,
    /// Where the script was written; `None` on a dry run.
    pub script_path: Option<PathBuf>,
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    // Reject a bad level token before any schema work happens, so an
    // invalid level never leaves a partial script behind.
    let level = parse_level(&args.level)?;

    let span = info_span!("normalize", level = %level);
    let _guard = span.enter();

    let (schema, dependencies) = load_inputs(&args.tables, &args.dependencies)
        .context("load schema and dependency records")?;
    info!(
        tables = schema.len(),
        dependencies = dependencies.len(),
        "loaded input records"
    );

    let normalized = normalize(&schema, &dependencies, level)?;
    let statements = render_statements(&normalized);

    let script_path = if args.dry_run {
        None
    } else {
        write_script(&args.output, &statements)
            .with_context(|| format!("write script {}", args.output.display()))?;
        Some(args.output.clone())
    };

    Ok(NormalizeResult {
        level,
        schema: normalized,
        statements,
        script_path,
    })
}

pub fn run_levels() {
    let mut table = Table::new();
    table.set_header(vec!["Level", "Guarantees"]);
    apply_table_style(&mut table);
    for level in NormalForm::ALL {
        table.add_row(vec![level.as_str(), level.description()]);
    }
    println!("{table}");
}
