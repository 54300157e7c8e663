//! unimatch: student/program matching and recommendation engine
//!
//! Scores a student profile against a catalog of study programs and
//! produces a ranked, categorized, explainable recommendation.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unimatch::{
    catalog::CatalogQuery,
    cli,
    config::{self, Validatable},
    reports::ReportFormat,
};

/// Build long version string with scoring overview
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScoring components:",
        "\n  Academic:    GPA 0-25, language 0-20, tests 0-15",
        "\n  Competitive: 0-30 (acceptance rate vs student standing)",
        "\n  Financial:   0-20 (budget coverage, scholarships)",
        "\n  Special:     0-10 (achievements)",
        "\n\nCategories:",
        "\n  reach < 40, target 40-69, safety >= 70"
    )
}

#[derive(Parser)]
#[command(name = "unimatch")]
#[command(version, long_version = build_long_version())]
#[command(about = "Student/program matching and recommendation engine", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Matching completed
    1  Best score below --min-score
    3  Error occurred

EXAMPLES:
    # Match a profile against a program catalog
    unimatch match --profile profile.json --programs programs.json

    # Filter the catalog and export JSON
    unimatch match --profile profile.json --programs programs.json \\
        --country US --degree-level bachelor -o json > report.json

    # CI gate: require at least one target-or-better program
    unimatch match --profile profile.json --programs programs.json --min-score 40")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "UNIMATCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `match` subcommand
#[derive(Parser)]
struct MatchArgs {
    /// Path to the student profile JSON document
    #[arg(short, long)]
    profile: PathBuf,

    /// Path to the program catalog JSON document
    #[arg(long)]
    programs: PathBuf,

    /// Filter by country code (repeatable)
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Filter by field of study (repeatable)
    #[arg(long = "field")]
    fields: Vec<String>,

    /// Filter by degree level (repeatable)
    #[arg(long = "degree-level")]
    degree_levels: Vec<String>,

    /// Filter by maximum annual tuition (USD)
    #[arg(long)]
    max_tuition: Option<f64>,

    /// Maximum number of programs to score (default 30, capped at 50)
    #[arg(long)]
    limit: Option<usize>,

    /// Output format (auto detects TTY: summary if interactive, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when no program reaches this overall score
    #[arg(long)]
    min_score: Option<i32>,

    /// Fail on invalid program records instead of warning
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a student profile against a program catalog
    Match(MatchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .unimatch.yaml in the current directory
    Init,
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Match(args) => {
            let (app_config, loaded_from) = config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("using config file {}", path.display());
            }
            let errors = app_config.validate();
            if !errors.is_empty() {
                let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
                bail!("invalid configuration:\n  {}", rendered.join("\n  "));
            }

            // CLI flags win over config file defaults
            let output = match args.output {
                ReportFormat::Auto => app_config.output.format,
                explicit => explicit,
            };
            let no_color = cli.no_color || app_config.output.no_color;

            let command_config = cli::MatchCommandConfig {
                profile_path: args.profile,
                programs_path: args.programs,
                query: CatalogQuery {
                    countries: args.countries,
                    fields: args.fields,
                    degree_levels: args.degree_levels,
                    max_tuition: args.max_tuition,
                    limit: args.limit,
                },
                scoring: app_config.scoring,
                output,
                output_file: args.output_file,
                min_score: args.min_score,
                no_color,
                strict: args.strict,
                quiet: cli.quiet,
            };

            let exit_code = cli::run_match(command_config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "unimatch", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (app_config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml::to_string(&app_config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("unimatch").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[".unimatch.yaml", ".unimatch.yml", "unimatch.yaml"] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".unimatch.yaml");
                if target.exists() {
                    bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
            ConfigAction::Schema { output } => {
                let schema = config::generate_json_schema();
                match output {
                    Some(path) => {
                        std::fs::write(&path, &schema)?;
                        eprintln!("Schema written to {}", path.display());
                    }
                    None => {
                        println!("{schema}");
                    }
                }
                Ok(())
            }
        },
    }
}
