//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use dbgsym_core::SymbolSource;
use dbgsym_core::config::DEFAULT_ARCH;
use dbgsym_core::config::DEFAULT_CACHE_FILE;
use dbgsym_core::config::DEFAULT_MIRROR_URL;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dbgsym")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available kernel versions
    List(ListArgs),
    /// Download and extract debug symbols for a kernel version
    Fetch(FetchArgs),
    /// Extract debug symbols from a local ddeb file
    Extract(ExtractArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

/// Flags selecting the package mirror, architecture, and cache file.
#[derive(clap::Args)]
pub struct SourceArgs {
    /// Architecture identifying string to look for in ddeb file names
    /// (amd64, arm64, powerpc, ...)
    #[arg(short, long, default_value = DEFAULT_ARCH)]
    pub arch: String,

    /// Base URL of the ddeb package mirror directory
    #[arg(long, value_name = "URL", default_value = DEFAULT_MIRROR_URL)]
    pub mirror: String,

    /// Location of the cached version listing
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,

    /// Re-scrape the package listing even if a cache file exists
    #[arg(short, long)]
    pub refresh: bool,
}

impl SourceArgs {
    pub fn to_source(&self) -> SymbolSource {
        SymbolSource {
            mirror_url: self.mirror.clone(),
            arch: self.arch.clone(),
            cache_path: self.cache.clone(),
        }
    }
}

#[derive(clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(clap::Args)]
pub struct FetchArgs {
    /// Kernel version to download debug symbols for (only -generic kernels)
    #[arg(id = "kernel_version", value_name = "VERSION")]
    pub version: String,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the ddeb file
    #[arg(value_name = "DDEB")]
    pub ddeb: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
