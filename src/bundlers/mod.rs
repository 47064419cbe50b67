pub mod rolldown;
pub mod vite;
pub mod webpack;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::Instant;
use walkdir::WalkDir;

use crate::core::report::ArtifactMetrics;

/// One bundler behind a uniform contract. `out_rel` is the artifact
/// directory relative to `project_root`; the adapter writes its config file
/// into the project root, runs the bundler there, and reports what came out.
pub trait BundlerAdapter: std::fmt::Debug {
    fn name(&self) -> &str;
    fn build(&self, project_root: &Path, entry: &str, out_rel: &str) -> Result<ArtifactMetrics>;
}

pub fn adapter_for(name: &str) -> Result<Box<dyn BundlerAdapter + Send + Sync>> {
    match name {
        "webpack" => Ok(Box::new(webpack::WebpackAdapter::new())),
        "vite" => Ok(Box::new(vite::ViteAdapter::new())),
        "rolldown" => Ok(Box::new(rolldown::RolldownAdapter::new())),
        _ => anyhow::bail!("Unsupported bundler: {}", name),
    }
}

/// Writes the config, runs the bundler through `npx`, and collects metrics.
/// Shared by all adapters; only the config content and arguments differ.
pub(crate) fn run_build(
    bundler: &str,
    project_root: &Path,
    config_name: &str,
    config_content: &str,
    args: &[&str],
    out_rel: &str,
) -> Result<ArtifactMetrics> {
    let output_dir = project_root.join(out_rel);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output dir {}", output_dir.display()))?;

    let config_path = project_root.join(config_name);
    std::fs::write(&config_path, config_content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let started = Instant::now();
    let output = run_bundler_command(bundler, args, project_root)?;
    let build_time_ms = started.elapsed().as_millis() as u64;

    let (warnings, errors) = classify_output_lines(
        &String::from_utf8_lossy(&output.stdout),
        &String::from_utf8_lossy(&output.stderr),
    );
    let bundle_path = locate_artifact(&output_dir, "bundle.js")?;
    let bundle_size_bytes = std::fs::metadata(&bundle_path)
        .with_context(|| format!("Failed to stat {}", bundle_path.display()))?
        .len();

    Ok(ArtifactMetrics {
        bundle_path,
        bundle_size_bytes,
        build_time_ms,
        warnings,
        errors,
    })
}

fn run_bundler_command(bundler: &str, args: &[&str], cwd: &Path) -> Result<Output> {
    let output = Command::new("npx")
        .args(args)
        .current_dir(cwd)
        .output()
        .with_context(|| format!("Failed to launch {} via npx", bundler))?;

    if !output.status.success() {
        anyhow::bail!(
            "{} exited with {}:\n{}",
            bundler,
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

/// Sorts captured output into warning and error lines by substring. A line
/// mentioning both counts as an error.
pub fn classify_output_lines(stdout: &str, stderr: &str) -> (Vec<String>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    for line in stdout.lines().chain(stderr.lines()) {
        let lowered = line.to_lowercase();
        if lowered.contains("error") {
            errors.push(line.to_string());
        } else if lowered.contains("warn") {
            warnings.push(line.to_string());
        }
    }
    (warnings, errors)
}

/// Finds the built bundle. The expected name is tried first; when a bundler
/// picks its own names (vite may emit under `assets/`), the largest `.js`
/// file in the output tree wins, ties broken by path order.
pub fn locate_artifact(output_dir: &Path, expected: &str) -> Result<PathBuf> {
    let expected_path = output_dir.join(expected);
    if expected_path.exists() {
        return Ok(expected_path);
    }

    let mut candidates: Vec<(u64, PathBuf)> = WalkDir::new(output_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext == "js" || ext == "mjs")
                .unwrap_or(false)
        })
        .filter_map(|entry| {
            let size = entry.metadata().ok()?.len();
            Some((size, entry.path().to_path_buf()))
        })
        .collect();

    candidates.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    match candidates.into_iter().next() {
        Some((_, path)) => Ok(path),
        None => anyhow::bail!("No bundle artifact found in {}", output_dir.display()),
    }
}
