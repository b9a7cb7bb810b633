mod cmd;
mod logging;

use clap::{ArgGroup, Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "seo-helper",
    version,
    about = "Generate SEO descriptions and keywords for static site content"
)]
struct Cli {
    /// Path to config file (default: ~/.config/seo-helper/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add description and keywords to Zola content
    Zola(ZolaArgs),

    /// Validate configuration and print resolved settings
    Doctor,

    /// Generate shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("target").required(true).args(["content_folder", "file_path"])
))]
pub struct ZolaArgs {
    /// Content folder to process recursively (skips _index.md)
    #[arg(short = 'c', long)]
    pub content_folder: Option<PathBuf>,

    /// Single markdown file to process
    #[arg(short = 'f', long)]
    pub file_path: Option<PathBuf>,

    /// Generate metadata without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Zola(args) => cmd::zola::run(
            cli.config.as_deref(),
            args.file_path.as_deref(),
            args.content_folder.as_deref(),
            args.dry_run,
        ),
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref()),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "seo-helper",
                &mut std::io::stdout(),
            );
        }
    }
}
