use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

mod bundlers;
mod core;
mod formatters;
mod parsers;

use crate::bundlers::{adapter_for, BundlerAdapter};
use crate::core::{ComparisonOptions, ComparisonRunner};
use crate::formatters::formatter_for;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "shakedown",
    version = "0.1.0",
    author = "shakedown developers",
    about = "Compare tree-shaking effectiveness across JavaScript bundlers"
)]
struct Cli {
    /// Project directory to bundle and analyze
    #[arg(short, long, value_name = "PATH")]
    project: PathBuf,

    /// Entry module, relative to the project directory
    #[arg(short, long, value_name = "MODULE", default_value = "index.ts")]
    entry: String,

    /// Bundler output directory, relative to the project directory
    #[arg(long, value_name = "DIR", default_value = "dist")]
    out_dir: String,

    /// Comma-separated list of bundlers to compare
    #[arg(
        short,
        long,
        value_name = "BUNDLERS",
        value_delimiter = ',',
        default_value = "webpack,vite,rolldown"
    )]
    bundlers: Vec<String>,

    /// Report file path
    #[arg(short, long, value_name = "FILE", default_value = "SHAKEDOWN.md")]
    report: PathBuf,

    /// Report format: markdown, json, html
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Markdown,
    Json,
    Html,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        project,
        entry,
        out_dir,
        bundlers,
        report,
        format,
    } = cli;

    let start_time = Instant::now();

    let bundler_names: Vec<String> = bundlers
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    println!("SHAKEDOWN - Bundler Tree Shaking Comparison");
    println!("Project: {}", project.display());
    println!("Entry: {}", entry);
    println!("Bundlers: {:?}", bundler_names);
    println!("Format: {}", format.as_str());

    let mut adapters: Vec<Box<dyn BundlerAdapter + Send + Sync>> =
        Vec::with_capacity(bundler_names.len());
    for name in &bundler_names {
        adapters.push(adapter_for(name)?);
    }

    let project_name = project
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "project".to_string());

    let options = ComparisonOptions {
        project_root: project,
        entry,
        out_dir,
        project_name,
    };

    let runner = ComparisonRunner::new(options, adapters)?;
    let comparison = runner.run()?;

    println!(
        "Best tree shaker: {} ({} symbols eliminated in total)",
        comparison.summary.best_bundler, comparison.summary.total_eliminated
    );

    let mut report_path = report;
    if report_path.extension().is_none() {
        report_path = report_path.with_extension(format.extension());
    }
    formatter_for(format.as_str())?.format_to_file(&comparison, &report_path)?;
    println!("Report written to {}", report_path.display());

    let total_time = start_time.elapsed();
    println!("Total execution time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
