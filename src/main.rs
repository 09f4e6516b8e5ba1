//! CLI for maze solving

use std::{
    io::{self, IsTerminal, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use maze_solver::{render, EndingCondition, Maze, MazeError};

/// Find a way through a maze with a wall-following walker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Display solution on the terminal square by square
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 300)]
    frame_length: usize,

    /// Exit without waiting for a keypress
    #[arg(long)]
    no_wait: bool,

    /// File, where to read the maze. Use `-` for stdin.
    file: Option<PathBuf>,
}

impl Args {
    fn reads_stdin(&self) -> bool {
        self.file.as_ref().and_then(|file| file.to_str()) == Some("-")
    }
}

/// Process exit status
#[derive(Debug, Clone, Copy)]
enum Status {
    Solved = 0,
    BadInput = 1,
    Unsolvable = 2,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status as u8)
    }
}

/// Read maze, print it and the solution
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            let no_wait = std::env::args().any(|arg| arg == "--no-wait");
            if !no_wait && io::stdin().is_terminal() {
                wait_for_keypress();
            }
            return Status::BadInput.into();
        }
    };

    let status = match run(&args) {
        Ok(status) => status,
        Err(err) => {
            debug!("{err:?}");
            println!("{err:#}");
            Status::BadInput
        }
    };

    if !args.no_wait && !args.reads_stdin() && io::stdin().is_terminal() {
        wait_for_keypress();
    }
    status.into()
}

fn run(args: &Args) -> anyhow::Result<Status> {
    let maze = match &args.file {
        None => return Err(MazeError::MissingArgument.into()),
        Some(_) if args.reads_stdin() => {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("Could not read maze from stdin")?;
            Maze::parse(&buf)?
        }
        Some(path) => Maze::from_file(path)?,
    };

    println!("The following maze has been generated from the file:\n");
    println!("{}", render::render(maze.grid()));
    println!("\nWill now attempt to solve the maze and return the result");

    let solution = maze.solve();
    info!(
        "Visited {} squares in {} steps",
        solution.visited, solution.steps
    );

    if args.playback {
        maze.playback(&solution, args.frame_length);
    } else {
        maze.print_report(&solution);
    }

    Ok(match solution.ending_condition {
        EndingCondition::Solved => Status::Solved,
        EndingCondition::Unsolvable => Status::Unsolvable,
    })
}

fn wait_for_keypress() {
    println!("\nPress Enter to exit");
    // Best effort: a failed flush or read just ends the wait
    let _ = io::stdout().flush();
    let _ = io::stdin().read(&mut [0u8]);
}
