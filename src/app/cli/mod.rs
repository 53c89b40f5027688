//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::AppContext;
use crate::app::commands::{path, render, version};
use crate::app::config::ReleaseConfig;
use crate::app::services::ResolvedVersion;
use crate::domain::{AppError, parse_base_url};
use crate::ports::ManifestSource;

#[derive(Parser)]
#[command(name = "epf-release")]
#[command(version)]
#[command(
    about = "Resolve the bundled epf version and its release download path",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Project root containing node_modules/ (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Manifest path relative to the project root
    #[arg(short, long, global = true)]
    manifest: Option<PathBuf>,
    /// Fail when the manifest has no version instead of producing an empty one
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the epf version from the package manifest
    #[clap(visible_alias = "v")]
    Version,
    /// Print the release archive path
    #[clap(visible_alias = "p")]
    Path {
        /// Join the path onto this base URL
        #[arg(short, long)]
        base_url: Option<String>,
    },
    /// Render a template file with release_path() and epf_version() available
    #[clap(visible_alias = "r")]
    Render {
        /// Template file to render
        template: PathBuf,
        /// Write the output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let root = match cli.global.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = ReleaseConfig::load(&root)?.with_overrides(
        cli.global.manifest,
        cli.global.strict,
        None,
    );
    let ctx = AppContext::from_config(root, &config);

    match cli.command {
        Commands::Version => {
            let resolved = version::execute(&ctx)?;
            warn_if_absent(&resolved, &ctx.resolver().source().location());
            println!("{}", resolved.as_str());
        }
        Commands::Path { base_url } => {
            let base_url = base_url.as_deref().map(parse_base_url).transpose()?;
            let outcome = path::execute(&ctx, base_url.as_ref())?;
            warn_if_absent(&outcome.version, &ctx.resolver().source().location());
            println!("{}", outcome.display_target());
        }
        Commands::Render { template, output } => {
            let outcome = render::execute(&ctx, &template, output.as_deref())?;
            match outcome.written_to {
                Some(written) => {
                    println!("✅ Rendered {} to {}", template.display(), written.display());
                }
                None => print!("{}", outcome.content),
            }
        }
    }
    Ok(())
}

fn warn_if_absent(version: &ResolvedVersion, location: &str) {
    if version.is_absent() {
        eprintln!("Warning: {} has no 'version' field; using an empty version", location);
    }
}
