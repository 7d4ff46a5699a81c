use std::{path::PathBuf, process};

use chest_hunt::{
    game::{DEFAULT_CHESTS, DEFAULT_MIMICS},
    report, HuntError, Solver,
};
use clap::{Parser, Subcommand};
use log::{error, info};

#[derive(Parser)]
#[command(author, version, about = "Expected loot for the chest hunt", long_about = None)]
struct Args {
    /// Chests in a fresh hunt
    #[arg(long, default_value_t = DEFAULT_CHESTS)]
    chests: i32,

    /// Mimics among those chests
    #[arg(long, default_value_t = DEFAULT_MIMICS)]
    mimics: i32,

    /// Solver cache to load before and save after the run
    #[arg(long)]
    cache: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Compare the standard hunt with and without skip priority (default)
    Summary,
    /// Solve every upgrade combination and write them to a CSV file
    Report {
        #[arg(short, long, default_value = "chest_hunt.csv")]
        out: PathBuf,
        /// Solve rows across threads, one cache per worker, merged afterwards
        #[arg(short, long)]
        parallel: bool,
    },
}

fn run(args: &Args) -> Result<(), HuntError> {
    let mut solver = match &args.cache {
        Some(path) => Solver::load(path)?,
        None => Solver::new(),
    };

    match args.command.clone().unwrap_or(Commands::Summary) {
        Commands::Summary => {
            let summary = report::summarize(&mut solver, args.chests, args.mimics);
            println!("{summary}");
        }
        Commands::Report { out, parallel } => {
            let rows = if parallel {
                report::rows_parallel(&mut solver, args.chests, args.mimics)
            } else {
                report::rows(&mut solver, args.chests, args.mimics)
            };
            report::save_report(&out, &rows)?;
            info!("report written to {}", out.display());
        }
    }

    if let Some(path) = &args.cache {
        solver.save(path)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        error!("{err}");
        process::exit(1);
    }
}
