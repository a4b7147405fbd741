use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use argtree::args::{self, Objects};
use argtree::config::Config;

#[derive(Parser, Debug)]
#[command(name = "argtree", version, about = "Tokenize command lines against a command tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse tokens into objects and print them as JSON
    Parse(ParseArgs),
    /// Assemble a JSON objects array back into tokens
    Assemble {
        /// Objects file (reads stdin when omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// Command tree (TOML)
    #[arg(long, short)]
    config: PathBuf,

    #[arg(long)]
    allow_unconfigured_flags: bool,

    #[arg(long)]
    allow_multiple_flags: bool,

    #[arg(long)]
    disallow_combined_flag_values: bool,

    #[arg(long)]
    disallow_double_dash: bool,

    /// Tokens to parse, root command first
    #[arg(last = true, required = true)]
    tokens: Vec<String>,
}

impl ParseArgs {
    /// Switches given on the command line override the file, never the other way.
    fn apply_overrides(&self, config: &mut Config) {
        config.allow_unconfigured_flags |= self.allow_unconfigured_flags;
        config.allow_multiple_flags |= self.allow_multiple_flags;
        config.disallow_combined_flag_values |= self.disallow_combined_flag_values;
        config.disallow_double_dash |= self.disallow_double_dash;
    }
}

fn main() -> ExitCode {
    argtree::logging::init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse(parse_args) => {
            let mut config = Config::load_from(&parse_args.config)?;
            parse_args.apply_overrides(&mut config);

            let objects = args::parse(&config, &parse_args.tokens)?;
            tracing::debug!(objects = objects.len(), "parsed");
            println!("{}", serde_json::to_string_pretty(&objects)?);
        }
        Commands::Assemble { input } => {
            let content = match &input {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read stdin")?;
                    buf
                }
            };

            let objects: Objects =
                serde_json::from_str(&content).context("Invalid objects JSON")?;
            let tokens = objects.assemble()?;
            println!("{}", serde_json::to_string(&tokens)?);
        }
    }
    Ok(())
}
