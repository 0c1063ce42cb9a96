//! Find a route across an ASCII room and print it.
//!
//! Run: cargo run --bin roompath -- [LAYOUT] [--config FILE] [--scatter N --seed S] [--background]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use delve_demos::{BUILTIN_LAYOUT, DemoConfig, render, scatter_obstacles};
use delve_paths::{Path, SearchOutcome};
use delve_room::{Layout, PathRequest, PathWorker};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Route an agent from `S` to `G` in an ASCII room.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Layout file; the builtin room when omitted
    layout: Option<PathBuf>,

    /// TOML file with room and search options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of movable obstacles to scatter before searching
    #[arg(long, default_value_t = 0)]
    scatter: usize,

    /// Seed for obstacle scattering
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Run the search on the background worker thread
    #[arg(long)]
    background: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(found) => {
            if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let text = match &args.layout {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUILTIN_LAYOUT.to_string(),
    };
    let layout = Layout::parse(&text)?;
    let start = layout.start().ok_or("layout has no start marker 'S'")?;
    let goal = layout.goal().ok_or("layout has no goal marker 'G'")?;

    let mut room = layout.to_room(config.lower, config.room);
    if args.scatter > 0 {
        let mut rng = StdRng::seed_from_u64(args.seed);
        let placed = scatter_obstacles(&mut room, &layout, args.scatter, &mut rng);
        log::info!("scattered {} obstacles with seed {}", placed.len(), args.seed);
    }

    let from = room.local_to_world(start);
    let to = room.local_to_world(goal);
    let path = if args.background {
        let room = Arc::new(room.clone());
        let mut worker = PathWorker::spawn()?;
        let ticket = worker.submit(PathRequest { room, from, to })?;
        let resp = worker.recv().ok_or("path worker stopped without answering")?;
        debug_assert_eq!(resp.id, ticket.id);
        match resp.result? {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NoPath => None,
            SearchOutcome::Cancelled => return Err("search was cancelled".into()),
        }
    } else {
        room.path_to(from, to)?
    };

    print!("{}", render(&layout, &room, path.as_ref()));
    match path {
        Some(path) => {
            report(&path);
            Ok(true)
        }
        None => {
            println!("no path from {start} to {goal}");
            Ok(false)
        }
    }
}

fn report(path: &Path) {
    println!("cost {} over {} steps", path.cost(), path.len());
    for (i, (cell, pos)) in path.cells().zip(path.waypoints()).enumerate() {
        println!("{:>3}: cell {cell} -> world ({:.2}, {:.2})", i + 1, pos.x, pos.y);
    }
}
