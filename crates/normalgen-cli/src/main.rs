//! Normalgen CLI - derive normal and ambient occlusion maps from albedo textures
//!
//! This binary converts `*_albedo.png|jpg` files into `*_normal` and `*_ao`
//! maps next to their source.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use normalgen_cli::commands;

/// Normalgen - Normal and AO map generation
#[derive(Parser)]
#[command(name = "normalgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert albedo textures into normal and AO maps
    Convert {
        /// Albedo file, or folder containing `*_albedo.png|jpg` files
        input: String,

        /// Gaussian smoothing sigma applied before the gradient (0 disables)
        #[arg(long, default_value_t = 0.0)]
        smooth: f64,

        /// Normal map intensity
        #[arg(long, default_value_t = 1.0)]
        intensity: f64,

        /// Output size; zero or negative keeps the source size
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        size: i64,

        /// Search subfolders for albedo textures
        #[arg(short, long)]
        recursive: bool,

        /// Overwrite existing maps
        #[arg(short, long)]
        force: bool,

        /// Which maps to produce
        #[arg(long, default_value = "all", value_parser = ["normal", "ao", "all"])]
        only: String,

        /// Output machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            smooth,
            intensity,
            size,
            recursive,
            force,
            only,
            json,
        } => commands::convert::run(
            &input, smooth, intensity, size, recursive, force, &only, json,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
