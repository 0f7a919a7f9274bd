use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use design_patterns::behavioral::strategy::Operation;
use design_patterns::creational::Platform;
use design_patterns::{interpret, logging, CatalogConfig, CatalogError, Category, Pattern};

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Run the design pattern demos and the Roman numeral interpreter")]
#[command(version)]
struct Cli {
    /// TOML or JSON settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `platform` from the config file
    #[arg(long, global = true)]
    platform: Option<Platform>,

    /// Overrides `strategy` from the config file
    #[arg(long, global = true)]
    strategy: Option<Operation>,

    /// Plain output
    #[arg(long, global = true)]
    no_color: bool,

    /// -v for info, -vv for debug
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every pattern, grouped by category
    List,

    /// Run a demo and print its transcript
    Demo {
        /// Pattern name, e.g. `strategy` or `chain-of-responsibility`
        #[arg(value_parser = parse_pattern, required_unless_present = "all")]
        pattern: Option<Pattern>,

        /// Run every demo
        #[arg(long, conflicts_with = "pattern")]
        all: bool,
    },

    /// Interpret Roman numerals
    Roman {
        #[arg(required = true)]
        numerals: Vec<String>,
    },
}

fn parse_pattern(name: &str) -> Result<Pattern, String> {
    Pattern::find(name).map_err(|err| err.to_string())
}

fn load_config(path: Option<&PathBuf>) -> Result<CatalogConfig, CatalogError> {
    match path {
        Some(path) => Ok(CatalogConfig::load(path)?),
        None => Ok(CatalogConfig::default()),
    }
}

fn print_list() {
    for category in Category::ALL {
        println!("{}", category.to_string().bold());
        for pattern in Pattern::in_category(category) {
            println!("  {:<24} {}", pattern.name().cyan(), pattern.summary());
        }
    }
}

/// Returns false if the demo failed.
fn run_demo(pattern: Pattern, config: &CatalogConfig) -> bool {
    println!("{}", format!("== {pattern} ==").bold());
    match pattern.run(config) {
        Ok(lines) => {
            for line in lines {
                println!("  {line}");
            }
            true
        }
        Err(err) => {
            warn!(%pattern, error = %err, "demo failed");
            eprintln!("  {} {err}", "error:".red().bold());
            false
        }
    }
}

/// Returns false if any numeral was invalid.
fn run_roman(numerals: &[String]) -> bool {
    let mut ok = true;
    for numeral in numerals {
        match interpret(numeral) {
            Ok(value) => println!("{numeral} = {}", value.to_string().green()),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                ok = false;
            }
        }
    }
    ok
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };
    if let Some(platform) = cli.platform {
        config.platform = platform;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if cli.no_color || !config.use_colors() {
        colored::control::set_override(false);
    }

    let ok = match cli.command {
        Commands::List => {
            print_list();
            true
        }
        Commands::Demo { all: true, .. } => Pattern::ALL
            .into_iter()
            .map(|pattern| run_demo(pattern, &config))
            .fold(true, |acc, ok| acc && ok),
        Commands::Demo {
            pattern: Some(pattern),
            ..
        } => run_demo(pattern, &config),
        Commands::Demo { pattern: None, .. } => unreachable!("clap requires a pattern or --all"),
        Commands::Roman { numerals } => run_roman(&numerals),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
