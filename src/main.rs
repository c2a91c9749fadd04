use docopt::Docopt;
use error_chain::bail;
use itertools::Itertools;
use serde_derive::Deserialize;
use spanning_mazes::{
    cells::CompassPrimary,
    maze::{Maze, MazeConfig},
    navigation::{MoveOutcome, Navigator},
    traversal::{FrontierPolicy, Progress},
    units::VertexId,
};
use std::io;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Spanning Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--grid-size=<n>] [--seed=<s>] [--weight-bound=<w>] [(bfs|dfs)] [--dfs-insert-at=<i>] [--moves=<keys>] [--verbose]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n [default: 25].
    --seed=<s>             Seed for the random edge weights. A random seed is picked if not given.
    --weight-bound=<w>     Edge weights are drawn from 0 up to but excluding w [default: 1000].
    --dfs-insert-at=<i>    Frontier position that depth first search pushes newly found cells to [default: 0].
    --moves=<keys>         Walk from the top left cell with a string of moves: u(p) d(own) l(eft) r(ight).
    --verbose              Log at debug level. RUST_LOG overrides this.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: usize,
    flag_seed: Option<u64>,
    flag_weight_bound: u32,
    cmd_bfs: bool,
    cmd_dfs: bool,
    flag_dfs_insert_at: usize,
    flag_moves: String,
    flag_verbose: bool,
}

// Errors for the driver, wrapping the library's error with error_chain.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            MazeFailure(::spanning_mazes::MazeError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    init_logging(args.flag_verbose);

    let config = MazeConfig {
        side: args.flag_grid_size,
        seed: args.flag_seed.unwrap_or_else(rand::random),
        weight_bound: args.flag_weight_bound,
    };
    let maze = Maze::generate(&config)
        .chain_err(|| format!("Failed to generate a {0}x{0} maze", config.side))?;

    println!("maze {0}x{0} seed {1}: {2} passages, {3} walls",
             config.side,
             config.seed,
             maze.spanning_tree().len(),
             maze.spanning_tree().rejected_edges().len());

    let policy = if args.cmd_dfs {
        FrontierPolicy::DepthFirst { insert_at: args.flag_dfs_insert_at }
    } else {
        FrontierPolicy::BreadthFirst
    };
    solve_step_by_step(&maze, policy)?;

    if !args.flag_moves.is_empty() {
        walk_moves(&maze, &args.flag_moves)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Drive a traversal one step at a time, the way a tick based presenter would.
fn solve_step_by_step(maze: &Maze, policy: FrontierPolicy) -> Result<()> {
    let mut traversal = maze.traverse(policy)?;
    while traversal.step()? == Progress::Continue {}

    let path = traversal.path()?;
    println!("{:?} reached the goal in {} steps, visited {} of {} cells",
             policy,
             traversal.steps_taken(),
             traversal.visited().len(),
             maze.size());
    println!("path ({} cells): {}", path.len(), describe_path(maze, &path));
    Ok(())
}

fn walk_moves(maze: &Maze, moves: &str) -> Result<()> {
    let mut navigator = Navigator::new(maze)?;
    let mut blocked = 0;

    for key in moves.chars() {
        let direction = match key.to_ascii_lowercase() {
            'u' => CompassPrimary::North,
            'd' => CompassPrimary::South,
            'l' => CompassPrimary::West,
            'r' => CompassPrimary::East,
            other => bail!("Unknown move '{}', expected one of u, d, l, r", other),
        };
        if navigator.try_move(direction) == MoveOutcome::Blocked {
            blocked += 1;
        }
        if navigator.has_won() {
            break;
        }
    }

    println!("player at {} after {} moves ({} blocked), wrong moves: {}{}",
             describe_path(maze, &[navigator.position()]),
             navigator.moves(),
             blocked,
             navigator.wrong_moves(),
             if navigator.has_won() { ", reached the goal" } else { "" });
    Ok(())
}

fn describe_path(maze: &Maze, path: &[VertexId]) -> String {
    path.iter()
        .filter_map(|&v| maze.grid().cell(v))
        .map(|cell| format!("({},{})", cell.row().0, cell.column().0))
        .join(" -> ")
}
