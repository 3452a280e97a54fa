use std::path::PathBuf;

use clap::{Parser, Subcommand};
use version_tree::cli::commands;
use version_tree::cli::logging::init_logging;
use version_tree::config::load_config;

#[derive(Parser)]
#[command(name = "version-tree")]
#[command(version, about = "Inspect and edit hierarchical version metadata")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/version-tree/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Separator for new trees and properties files, overriding the config
    #[arg(long, global = true)]
    separator: Option<char>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tree structure
    Show { file: PathBuf },
    /// Print the name and flattened version map
    Summary { file: PathBuf },
    /// Print every version as key=value
    Flatten {
        file: PathBuf,
        /// Print full key paths instead of joined keys
        #[arg(long)]
        component_keys: bool,
    },
    /// Print the version at a key path
    Get {
        file: PathBuf,
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print the depth of the deepest version (-1 if none)
    Depth { file: PathBuf },
    /// Set the version at a key path
    Set {
        file: PathBuf,
        version: String,
        #[arg(required = true)]
        keys: Vec<String>,
        /// Write to this file instead of FILE
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace the sub-tree at a key path with the tree in SUBTREE
    Graft {
        file: PathBuf,
        subtree: PathBuf,
        #[arg(required = true)]
        keys: Vec<String>,
        /// Write to this file instead of FILE
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print implementation title, vendor and version of this tool
    About {
        /// Configuration version to report alongside the implementation
        #[arg(long)]
        configuration_version: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let _guard = init_logging(&config.log)?;
    let separator = cli.separator.unwrap_or(config.separator);

    let output = match cli.command {
        Command::Show { file } => commands::show(&file, separator)?,
        Command::Summary { file } => commands::summary(&file, separator)?,
        Command::Flatten {
            file,
            component_keys,
        } => commands::flatten(&file, separator, component_keys)?,
        Command::Get { file, keys } => commands::get(&file, separator, &keys)?,
        Command::Depth { file } => commands::depth(&file, separator)?,
        Command::Set {
            file,
            version,
            keys,
            output,
        } => commands::set(&file, separator, &version, &keys, output.as_deref())?,
        Command::Graft {
            file,
            subtree,
            keys,
            output,
        } => commands::graft(&file, separator, &subtree, &keys, output.as_deref())?,
        Command::About {
            configuration_version,
        } => commands::about(configuration_version.as_deref()),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
