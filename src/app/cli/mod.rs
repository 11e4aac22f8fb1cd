//! CLI Adapter.
//!
//! Each packager binary takes positional arguments only and shares the
//! generation pipeline.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{AppError, ManifestKind};

/// Render a Homebrew formula from a template.
#[derive(Debug, Parser)]
#[command(name = "homebrew-packager")]
#[command(version)]
#[command(about = "Render a Homebrew formula from a template", long_about = None)]
pub struct HomebrewArgs {
    /// Release version, substituted as `version`
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: String,
    /// Formula template to render
    pub template_path: PathBuf,
    /// Where to write the rendered formula
    pub output_path: PathBuf,
    /// SHA-256 of the macOS x86_64 archive
    #[arg(allow_hyphen_values = true)]
    pub hash_mac: String,
    /// SHA-256 of the macOS arm64 archive
    #[arg(allow_hyphen_values = true)]
    pub hash_mac_arm: String,
    /// SHA-256 of the Linux archive
    #[arg(allow_hyphen_values = true)]
    pub hash_linux: String,
    /// Ignored; build pipelines may pass trailing values
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// Render a Scoop manifest from a template.
#[derive(Debug, Parser)]
#[command(name = "scoop-packager")]
#[command(version)]
#[command(about = "Render a Scoop manifest from a template", long_about = None)]
pub struct ScoopArgs {
    /// Release tag; a leading `v` is dropped before substituting `version64`
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: String,
    /// Manifest template to render
    pub template_path: PathBuf,
    /// Where to write the rendered manifest
    pub output_path: PathBuf,
    /// SHA-256 of the 64-bit Windows archive
    #[arg(allow_hyphen_values = true)]
    pub hash_64: String,
    /// Ignored; build pipelines may pass trailing values
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl From<&HomebrewArgs> for ManifestKind {
    fn from(args: &HomebrewArgs) -> Self {
        ManifestKind::homebrew(
            args.version.clone(),
            &args.hash_mac,
            &args.hash_mac_arm,
            &args.hash_linux,
        )
    }
}

impl From<&ScoopArgs> for ManifestKind {
    fn from(args: &ScoopArgs) -> Self {
        ManifestKind::scoop(&args.version, &args.hash_64)
    }
}

/// Entry point for `homebrew-packager`.
pub fn run_homebrew() {
    let args = HomebrewArgs::parse();
    super::logging::init();
    let kind = ManifestKind::from(&args);
    exit_on_error(crate::generate(&kind, &args.template_path, &args.output_path));
}

/// Entry point for `scoop-packager`.
pub fn run_scoop() {
    let args = ScoopArgs::parse();
    super::logging::init();
    let kind = ManifestKind::from(&args);
    exit_on_error(crate::generate(&kind, &args.template_path, &args.output_path));
}

fn exit_on_error<T>(result: Result<T, AppError>) {
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
