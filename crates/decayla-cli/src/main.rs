use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use decayla_lang::{DEFAULT_MAX_RANGE, LpRequest, Method, TransportRequest};
use decayla_solver::GridOptions;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "decayla")]
#[command(about = "Two-variable LP grid search and northwest-corner transportation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a two-variable linear program in x1 and x2
    Lp {
        /// Objective, e.g. "max 2x1 + 3x2"
        #[arg(short, long)]
        objective: String,
        /// One constraint, e.g. "x1 + x2 <= 10" (repeatable)
        #[arg(short, long = "constraint")]
        constraints: Vec<String>,
        /// File with one constraint per line
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Upper bound of x1 and x2
        #[arg(long, default_value_t = DEFAULT_MAX_RANGE)]
        max_range: u32,
        /// Grid increment
        #[arg(long, default_value_t = 1)]
        step: u32,
        /// Solution method
        #[arg(short, long, value_enum, default_value_t = MethodArg::Grid)]
        method: MethodArg,
        /// List every feasible point that was found
        #[arg(short, long)]
        all: bool,
        /// Output format (json, pretty)
        #[arg(long, default_value = "pretty")]
        format: String,
    },
    /// Build a northwest-corner allocation for a transportation problem
    Transport {
        /// Comma-separated supplies, e.g. "20, 30, 25"
        #[arg(short, long)]
        supply: String,
        /// Comma-separated demands, e.g. "10, 25, 40"
        #[arg(short, long)]
        demand: String,
        /// One comma-separated cost row (repeatable)
        #[arg(short, long = "cost")]
        costs: Vec<String>,
        /// File with one comma-separated cost row per line
        #[arg(short = 'f', long)]
        costs_file: Option<PathBuf>,
        /// Output format (json, pretty)
        #[arg(long, default_value = "pretty")]
        format: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    /// Integer grid search (approximate)
    Grid,
    /// Corner-point enumeration (exact within range)
    Vertex,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Grid => Method::Grid,
            MethodArg::Vertex => Method::Vertex,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match cli.command {
        Commands::Lp {
            objective,
            constraints,
            file,
            max_range,
            step,
            method,
            all,
            format,
        } => {
            let mut lines = constraints;
            if let Some(file) = file {
                lines.push(read_source(&file));
            }

            let options = GridOptions::new().with_max_range(max_range).with_step(step);
            log::info!("solving LP over 0..{} with step {}", options.max_range, options.step);

            let request = LpRequest::new(objective, lines.join("\n"))
                .with_options(options)
                .with_method(method.into());

            let report = match request.solve() {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            if format == "json" {
                println!("{}", to_json(&report));
                return;
            }

            println!("Objective: {} {}", report.objective.sense, report.objective.coeffs);
            println!("Constraints:");
            for c in &report.constraints {
                println!("  {}", c);
            }
            println!();
            println!("{}", report);

            if all {
                println!();
                println!("Feasible points ({}):", report.feasible.len());
                for p in &report.feasible {
                    println!("  x1 = {:8}  x2 = {:8}  Z = {}", p.x1, p.x2, p.z);
                }
            }
        }
        Commands::Transport {
            supply,
            demand,
            costs,
            costs_file,
            format,
        } => {
            let mut rows = costs;
            if let Some(file) = costs_file {
                rows.push(read_source(&file));
            }

            let request = TransportRequest::new(supply, demand, rows.join("\n"));
            let report = match request.solve() {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            if format == "json" {
                println!("{}", to_json(&report));
            } else {
                println!("{}", report);
            }
        }
    }
}

fn read_source(file: &Path) -> String {
    match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Error: {}", e))
}
