use std::process::ExitCode;

use anyhow::Context;
use arb_lint::cli::{Cli, OutputFormat};
use arb_lint::files::find_arb_files;
use arb_lint::lint::{fix_text, lint_text};
use arb_lint::report::FileReport;
use clap::Parser;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::FAILURE,
        Ok(false) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr and are only enabled through `RUST_LOG`.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Check every requested file, returning whether any errors remain.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = cli.editor_config()?;
    let files = find_arb_files(&cli.paths);
    tracing::debug!(count = files.len(), "checking ARB files");

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        let mut text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut fixed = 0;
        if cli.fix {
            let outcome = fix_text(&text, &config);
            if outcome.applied > 0 {
                std::fs::write(path, &outcome.text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                text = outcome.text;
                fixed = outcome.applied;
            }
        }

        let mut report = FileReport::new(path, &lint_text(&text, &config));
        report.fixed = fixed;
        reports.push(report);
    }

    match cli.format {
        OutputFormat::Text => {
            for report in &reports {
                print!("{}", report.render_text());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(reports.iter().any(FileReport::has_errors))
}
