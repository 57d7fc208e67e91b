//! Convert command implementation
//!
//! Derives normal and AO maps for one albedo texture or for every albedo
//! texture in a folder. Existing outputs are skipped unless forced.

use anyhow::{bail, Result};
use colored::Colorize;
use normalgen_core::{convert_ao_map, convert_normal_map, MapKind, PipelineParams, ScalarField};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::discover::discover;
use crate::output::{load_luminance, write_rgb};
use crate::paths::output_path;
use crate::postprocess::{colorize_ao, flip_green};
use crate::resize::{resize_rgb, ResizeTarget};

/// Options for one convert run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Albedo file or folder.
    pub input: PathBuf,
    /// Normal-map parameters.
    pub params: PipelineParams,
    /// Output size.
    pub resize: ResizeTarget,
    /// Descend into subfolders.
    pub recursive: bool,
    /// Overwrite existing outputs.
    pub force: bool,
    /// Maps to produce, in order.
    pub maps: Vec<MapKind>,
    /// Suppress colored progress output.
    pub quiet: bool,
}

impl ConvertOptions {
    /// Options with default parameters for `input`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            params: PipelineParams::default(),
            resize: ResizeTarget::Original,
            recursive: false,
            force: false,
            maps: MapKind::ALL.to_vec(),
            quiet: false,
        }
    }
}

/// Parse the `--only` selection.
pub fn parse_map_selection(only: &str) -> Result<Vec<MapKind>> {
    match only {
        "all" => Ok(MapKind::ALL.to_vec()),
        "normal" => Ok(vec![MapKind::Normal]),
        "ao" => Ok(vec![MapKind::Ao]),
        other => bail!("Unknown map selection: {} (expected normal, ao or all)", other),
    }
}

/// Outcome of one output map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStatus {
    Created,
    Skipped,
    Failed,
}

/// Report for one output map.
#[derive(Debug, Clone, Serialize)]
pub struct MapReport {
    /// `normal` or `ao`.
    pub kind: String,
    /// Output path.
    pub path: String,
    pub status: OutputStatus,
    /// BLAKE3 hash of the written file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report for one albedo input.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Albedo path.
    pub input: String,
    /// One entry per requested map.
    pub outputs: Vec<MapReport>,
}

/// Summary of a convert run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertSummary {
    /// Albedo files found.
    pub total_files: usize,
    /// Maps written.
    pub created: usize,
    /// Maps left untouched because they already existed.
    pub skipped: usize,
    /// Maps that could not be produced.
    pub failed: usize,
    /// Per-file reports.
    pub files: Vec<FileReport>,
}

impl ConvertSummary {
    fn record(&mut self, report: FileReport) {
        for output in &report.outputs {
            match output.status {
                OutputStatus::Created => self.created += 1,
                OutputStatus::Skipped => self.skipped += 1,
                OutputStatus::Failed => self.failed += 1,
            }
        }
        self.files.push(report);
    }
}

/// Run the convert command
///
/// # Arguments
/// * `input` - Albedo file or folder
/// * `smooth` - Gaussian sigma applied before the gradient
/// * `intensity` - Normal map intensity
/// * `size` - Output size; zero or negative keeps the source size
/// * `recursive` - Search subfolders
/// * `force` - Overwrite existing outputs
/// * `only` - `normal`, `ao` or `all`
/// * `json_output` - Print a JSON summary instead of colored progress
///
/// # Returns
/// Exit code: 0 success, 1 if any map failed
#[allow(clippy::too_many_arguments)]
pub fn run(
    input: &str,
    smooth: f64,
    intensity: f64,
    size: i64,
    recursive: bool,
    force: bool,
    only: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let options = ConvertOptions {
        input: PathBuf::from(input),
        params: PipelineParams::default()
            .with_sigma(smooth)
            .with_intensity(intensity),
        resize: ResizeTarget::from_size(size),
        recursive,
        force,
        maps: parse_map_selection(only)?,
        quiet: json_output,
    };

    let summary = run_with_options(&options)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    if summary.failed > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Convert every albedo named by `options` and collect the results.
///
/// Parameter and discovery errors abort the run. Failures on individual
/// files are recorded in the summary and the batch continues.
pub fn run_with_options(options: &ConvertOptions) -> Result<ConvertSummary> {
    options.params.validate()?;
    let files = discover(&options.input, options.recursive)?;

    let mut summary = ConvertSummary {
        total_files: files.len(),
        ..Default::default()
    };

    if !options.quiet {
        println!(
            "{} Found {} albedo textures",
            "INFO".blue().bold(),
            files.len()
        );
    }

    for file in &files {
        summary.record(convert_file(file, options));
    }

    Ok(summary)
}

fn convert_file(input: &Path, options: &ConvertOptions) -> FileReport {
    let targets: Vec<(MapKind, PathBuf, bool)> = options
        .maps
        .iter()
        .map(|&kind| {
            let path = output_path(input, kind);
            let skip = !options.force && path.exists();
            (kind, path, skip)
        })
        .collect();

    // Decode once, and only if some map still has to be written.
    let luminance = if targets.iter().all(|(_, _, skip)| *skip) {
        None
    } else {
        if !options.quiet {
            println!("{} {}", "Converting".blue().bold(), input.display());
        }
        Some(load_luminance(input))
    };

    let outputs = targets
        .into_iter()
        .map(|(kind, path, skip)| match (skip, &luminance) {
            (true, _) | (_, None) => report_skipped(kind, &path, options.quiet),
            (false, Some(Ok(luminance))) => report_written(
                kind,
                &path,
                write_map(luminance, kind, &path, options),
                options.quiet,
            ),
            (false, Some(Err(e))) => report_written(
                kind,
                &path,
                Err(anyhow::anyhow!("{:#}", e)),
                options.quiet,
            ),
        })
        .collect();

    FileReport {
        input: input.display().to_string(),
        outputs,
    }
}

fn report_skipped(kind: MapKind, path: &Path, quiet: bool) -> MapReport {
    if !quiet {
        println!(
            "{}",
            format!("{} exists. Skipping it", path.display()).yellow()
        );
    }
    MapReport {
        kind: kind.to_string(),
        path: path.display().to_string(),
        status: OutputStatus::Skipped,
        hash: None,
        error: None,
    }
}

fn report_written(kind: MapKind, path: &Path, result: Result<String>, quiet: bool) -> MapReport {
    match result {
        Ok(hash) => {
            if !quiet {
                println!("  {} {}", "Created".green(), path.display());
            }
            MapReport {
                kind: kind.to_string(),
                path: path.display().to_string(),
                status: OutputStatus::Created,
                hash: Some(hash),
                error: None,
            }
        }
        Err(e) => {
            if !quiet {
                println!("  {} {} - {:#}", "FAILED".red(), path.display(), e);
            }
            MapReport {
                kind: kind.to_string(),
                path: path.display().to_string(),
                status: OutputStatus::Failed,
                hash: None,
                error: Some(format!("{:#}", e)),
            }
        }
    }
}

/// Produce one map from luminance and write it, returning the file hash.
fn write_map(
    luminance: &ScalarField,
    kind: MapKind,
    path: &Path,
    options: &ConvertOptions,
) -> Result<String> {
    let (width, height) = luminance.dimensions();
    let rgb = match kind {
        MapKind::Normal => {
            let mut rgb = convert_normal_map(luminance, &options.params)?.to_rgb8();
            flip_green(&mut rgb);
            rgb
        }
        MapKind::Ao => colorize_ao(&convert_ao_map(luminance)?.to_gray8_autoscaled()),
    };
    let (rgb, width, height) = resize_rgb(rgb, width, height, options.resize)?;
    write_rgb(path, &rgb, width, height)
}

fn print_summary(summary: &ConvertSummary) {
    println!();
    println!(
        "{} {} files: {} created, {} skipped, {} failed",
        "Completed".green().bold(),
        summary.total_files,
        summary.created,
        summary.skipped,
        summary.failed
    );

    let failed: Vec<_> = summary
        .files
        .iter()
        .flat_map(|f| &f.outputs)
        .filter(|o| o.status == OutputStatus::Failed)
        .collect();
    if !failed.is_empty() {
        println!("{}", "Failed maps:".red().bold());
        for output in failed {
            println!(
                "  - {}: {}",
                output.path,
                output.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}
