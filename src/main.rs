//! Motion Catalog CLI
//!
//! Usage:
//!   motion-catalog [OPTIONS] <COMMAND>
//!
//! Commands:
//!   generate          Generate the catalog and write every artifact
//!   list              Print generated templates per category
//!   search <QUERY>    Search the generated catalog
//!   validate <FILE>.. Check authored preset files without writing anything

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use motion_catalog::presets::load_preset_file;
use motion_catalog::template::{Category, TemplateIndex, TemplateRegistry};
use motion_catalog::{generate, generate_and_export, GenerateError, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "motion-catalog")]
#[command(about = "Registry and generator for parameterized animation templates")]
struct Cli {
    /// Verbose output, repeat for more (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Generator configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output directory, overrides the configuration file
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Restrict the run to these categories (slug or label)
    #[arg(long = "category", global = true)]
    categories: Vec<Category>,

    /// Extra directory of authored preset files
    #[arg(long = "presets", global = true)]
    preset_dirs: Vec<PathBuf>,

    /// Skip the built-in presets
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Register authored presets only, without generated fill
    #[arg(long, global = true)]
    no_fill: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the catalog and write every artifact
    Generate,

    /// Print generated templates per category
    List,

    /// Search names, descriptions, keywords and prompts
    Search {
        /// Case-insensitive substring
        query: String,
    },

    /// Register preset files against a scratch registry and report violations
    Validate {
        /// Preset files (.toml or .json)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let result = match &cli.command {
        Commands::Generate => run_generate(&config),
        Commands::List => run_list(&config),
        Commands::Search { query } => run_search(&config, query),
        Commands::Validate { files } => return run_validate(files),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Configuration file values, with command-line flags applied on top
fn load_config(cli: &Cli) -> Result<GeneratorConfig, GenerateError> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }
    if !cli.categories.is_empty() {
        config = config.with_categories(cli.categories.clone());
    }
    for dir in &cli.preset_dirs {
        config = config.with_preset_dir(dir);
    }
    if cli.no_builtin {
        config = config.with_builtin_presets(false);
    }
    if cli.no_fill {
        config = config.with_fill_ranges(false);
    }
    Ok(config)
}

fn run_generate(config: &GeneratorConfig) -> Result<(), GenerateError> {
    let (catalog, report) = generate_and_export(config, chrono::Utc::now())?;

    for batch in catalog.batches() {
        println!(
            "{:<24} {:>4} templates ({} authored, {} generated, {} derived)",
            batch.category.label(),
            batch.total(),
            batch.authored,
            batch.generated,
            batch.derived
        );
    }
    for (artifact, path) in &report.written {
        println!("wrote {} -> {}", artifact, path.display());
    }
    println!("Total templates generated: {}", catalog.len());
    Ok(())
}

fn run_list(config: &GeneratorConfig) -> Result<(), GenerateError> {
    let catalog = generate(config)?;
    for category in catalog.categories() {
        let templates = catalog.templates_by_category(category);
        println!("{} ({})", category.label(), templates.len());
        for template in templates {
            println!("  {:<8} {}", template.id.to_string(), template.name);
        }
    }
    Ok(())
}

fn run_search(config: &GeneratorConfig, query: &str) -> Result<(), GenerateError> {
    let catalog = generate(config)?;
    let index = TemplateIndex::new(catalog.templates().into_iter().cloned());
    let hits = index.search(query);
    if hits.is_empty() {
        println!("no templates match '{}'", query);
    }
    for template in hits {
        println!(
            "{:<8} {:<32} {}",
            template.id.to_string(),
            template.name,
            template.category.label()
        );
    }
    Ok(())
}

fn run_validate(files: &[PathBuf]) -> ExitCode {
    let mut registry = TemplateRegistry::new();
    let mut failed = 0usize;

    for file in files {
        let configs = match load_preset_file(file) {
            Ok(configs) => configs,
            Err(e) => {
                eprintln!("Error: {}", e);
                failed += 1;
                continue;
            }
        };
        for config in configs {
            let name = config.name.clone();
            match registry.create_template(config) {
                Ok(template) => println!("ok    {} {}", template.id, template.name),
                Err(e) => {
                    failed += 1;
                    println!("FAIL  {}: {}", name, e);
                }
            }
        }
    }

    if failed > 0 {
        eprintln!("{} problem(s) found", failed);
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
