//! butlergen CLI - C# binding generator for butlerd
//!
//! Commands:
//! - `butlergen generate` - Compile a schema document into C# units
//! - `butlergen check` - Validate a schema document

use butlergen_core::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "butlergen")]
#[command(author, version, about = "C# binding generator for the butlerd protocol", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate C# bindings from a schema document
    Generate {
        /// Path to the butlerd schema JSON
        #[arg(short, long)]
        schema: PathBuf,

        /// Output directory; units are written to <output>/<Category>/<Name>.cs
        #[arg(short, long)]
        output: PathBuf,

        /// Path to butlergen.toml (default: built-in settings)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Base namespace, overriding the config file
        #[arg(short, long)]
        namespace: Option<String>,

        /// Compile units in parallel
        #[arg(long)]
        parallel: bool,

        /// Log level (trace, debug, info, warn, error, off)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Validate a schema document and print entry counts
    Check {
        /// Path to the butlerd schema JSON
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            output,
            config,
            namespace,
            parallel,
            log_level,
        } => {
            let overrides = generate::Overrides {
                namespace,
                parallel,
                log_level,
            };
            let config = generate::load_config(config.as_deref(), overrides)?;
            logging::init(config.level()?);

            generate::run(&schema, &output, &config)?;
        }
        Commands::Check { schema } => {
            logging::init(LogLevel::Warn);

            check::run(&schema)?;
        }
    }

    Ok(())
}
