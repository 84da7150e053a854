/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render type-checker JSON output as an HTML page
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use flow_report::{RenderOptions, Report, Template, render_document};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "flow-report")]
#[command(version)]
#[command(about = "Render type-checker JSON error reports as HTML")]
struct Args {
    /// JSON report to render (reads standard input when omitted or '-')
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Show file paths relative to this directory
    #[arg(long, value_name = "PATH")]
    root: Option<PathBuf>,

    /// HTML template containing a %content% marker
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Write output to FILE (use '--output -' for stdout)
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbose logging to stderr (-v for info, -vv for debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let report = read_report(args.input.as_deref())?;
    let template = load_template(args.template.as_deref())?;

    let mut options = RenderOptions::new();
    if let Some(root) = &args.root {
        options = options.with_root(root);
    }

    info!(passed = report.passed, errors = report.errors.len(), "rendering report");
    let html =
        render_document(&report, &template, &options).context("Failed to render report")?;

    write_output(args.output.as_deref(), &html)
}

/// Log to stderr so the HTML on stdout stays clean.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "flow_report=warn",
        1 => "flow_report=info",
        _ => "flow_report=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_report(input: Option<&Path>) -> Result<Report> {
    match input {
        Some(path) if !is_stdio(path) => {
            debug!("reading report from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to read report: {}", path.display()))?;
            Report::from_reader(file)
                .with_context(|| format!("Failed to parse report: {}", path.display()))
        }
        _ => {
            debug!("reading report from standard input");
            Report::from_reader(io::stdin().lock()).context("Failed to parse report")
        }
    }
}

fn load_template(path: Option<&Path>) -> Result<Template> {
    match path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?;
            Template::new(source).with_context(|| format!("Invalid template: {}", path.display()))
        }
        None => Template::builtin().context("Failed to load built-in template"),
    }
}

fn write_output(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) if !is_stdio(path) => {
            fs::write(path, html)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("wrote {}", path.display());
            Ok(())
        }
        _ => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", html).context("Failed to write to standard output")?;
            stdout.flush().context("Failed to write to standard output")
        }
    }
}
