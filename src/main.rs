use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use gp_access::config::ModelParams;
use gp_access::scorer::Scorer;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with model parameters; explicit flags override it
    #[arg(global = true, long)]
    params: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Calc(cmd::calc::CalcArgs),
    Example(cmd::example::ExampleArgs),
    Score(cmd::score::ScoreArgs),
    Curve(cmd::curve::CurveArgs),
    Routes(cmd::routes::RoutesArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Calc(_) => "calc",
            Self::Example(_) => "example",
            Self::Score(_) => "score",
            Self::Curve(_) => "curve",
            Self::Routes(_) => "routes",
        }
    }

    fn params(&self) -> &ModelParams {
        match self {
            Self::Calc(a) => &a.params,
            Self::Example(a) => &a.params,
            Self::Score(a) => &a.params,
            Self::Curve(a) => &a.params,
            Self::Routes(a) => &a.params,
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    // Model parameters live inside the subcommand's matches, not the root.
    let cli_params = *cli.command.params();
    let params = match &cli.params {
        Some(path) => {
            info!("Loading model parameters from: {}", path);
            let mut file_params = ModelParams::load_from_file(path).unwrap_or_else(|e| {
                error!("Failed to load '{}': {}", path, e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(cli.command.name()) {
                file_params.merge_from_cli(&cli_params, sub_matches);
            } else {
                warn!("No subcommand matches found; CLI overrides ignored.");
            }
            file_params
        }
        None => cli_params,
    };

    let scorer = Scorer::new(params).unwrap_or_else(|e| {
        error!("Invalid model parameters: {}", e);
        process::exit(1);
    });

    let outcome = match cli.command {
        Commands::Calc(args) => cmd::calc::run(&args, &scorer, cli.json),
        Commands::Example(args) => cmd::example::run(&args, &scorer, cli.json),
        Commands::Score(args) => cmd::score::run(&args, &scorer, cli.json),
        Commands::Curve(args) => cmd::curve::run(&args, &scorer, cli.json),
        Commands::Routes(args) => cmd::routes::run(&args, &scorer, cli.json),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
