//! Generate a map, run one query, print the result.
//!
//! Run: RUST_LOG=debug cargo run --bin pathdemo -- --cave --seed 7

use clap::{Parser, ValueEnum};
use gridpath_core::{GridMap, MapError, Point};
use gridpath_gen::{CaveGen, RandomBlocks, render};
use gridpath_paths::{Heuristic, PathFinder, SearchConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Chebyshev,
    Octile,
}

impl From<HeuristicArg> for Heuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Chebyshev => Heuristic::Chebyshev,
            HeuristicArg::Octile => Heuristic::Octile,
        }
    }
}

/// Grid pathfinding demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map width in cells
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Map height in cells
    #[arg(long, default_value_t = 20)]
    height: i32,

    /// RNG seed for map generation
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Chance of a cell being blocked (random maps)
    #[arg(short, long, default_value_t = 0.2)]
    blocked: f64,

    /// Generate a cellular-automata cave instead of random blocks
    #[arg(long)]
    cave: bool,

    /// Heuristic for the h estimate
    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,

    /// Let cheaper routes replace costs of cells already on the frontier
    #[arg(long)]
    relax: bool,
}

fn build_map(args: &Args, start: Point, goal: Point) -> Result<GridMap, MapError> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    if args.cave {
        CaveGen::default().generate(args.width, args.height, &mut rng)
    } else {
        RandomBlocks::new(args.blocked)
            .keep_clear(start)
            .keep_clear(goal)
            .generate(args.width, args.height, &mut rng)
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let start = Point::ZERO;
    let goal = Point::new(args.width - 1, args.height - 1);
    let map = match build_map(&args, start, goal) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Caves may wall off the corners; fall back to the first and last open
    // cells in row-major order.
    let bounds = map.bounds();
    let start = if map.is_walkable(start) {
        start
    } else {
        bounds.iter().find(|&p| map.is_walkable(p)).unwrap_or(start)
    };
    let goal = if map.is_walkable(goal) {
        goal
    } else {
        bounds
            .iter()
            .filter(|&p| map.is_walkable(p))
            .last()
            .unwrap_or(goal)
    };

    let config = SearchConfig::default()
        .with_heuristic(args.heuristic.into())
        .with_relaxation(args.relax);
    let mut finder = match PathFinder::with_config(&map, config) {
        Ok(finder) => finder,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match finder.find_path(start, goal) {
        Ok(path) => {
            log::info!(
                "path {} -> {}: {} cells, cost {:.1}, {} expanded",
                start,
                goal,
                path.len(),
                config.path_cost(&path),
                finder.expanded()
            );
            print!("{}", render(&map, &path));
        }
        Err(e) => {
            log::warn!("no path after {} expansions: {e}", finder.expanded());
            print!("{}", render(&map, &[]));
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
