//! CLI for maze generation

use clap::Parser;
use maze_solver::maze_generator::MazeGenerator;

/// Random maze generator, writes a maze file for `solve-maze`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated field height
    #[arg(long, default_value_t = 19)]
    height: usize,

    /// Generated field width
    #[arg(long, default_value_t = 15)]
    width: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print it in maze file format
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let maze = gen.generate_maze(args.width, args.height)?;
    println!("{}", maze.to_text());
    Ok(())
}
