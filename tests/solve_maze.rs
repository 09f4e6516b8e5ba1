use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use maze_solver::{render, EndingCondition, Maze};

const CORRIDOR: &str = "7 5
1 1
5 3
1 1 1 1 1 1 1
1 0 0 0 1 0 1
1 1 1 0 1 0 1
1 0 0 0 0 0 1
1 1 1 1 1 1 1
";

const SEALED: &str = "5 5
1 1
3 3
1 1 1 1 1
1 0 1 0 1
1 1 1 1 1
1 0 1 0 1
1 1 1 1 1
";

fn maze_file(name: &str, contents: &str) -> PathBuf {
    let file_name = format!("maze-solver-{}-{name}.txt", std::process::id());
    let path = std::env::temp_dir().join(file_name);
    fs::write(&path, contents).unwrap();
    path
}

fn solve_maze(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_solve-maze"))
        .arg("--no-wait")
        .args(args)
        .output()
        .expect("failed to run solve-maze")
}

#[test]
fn corridor_is_solved_and_drawn() {
    let maze = Maze::parse(CORRIDOR).unwrap();
    let solution = maze.solve();
    assert_eq!(solution.ending_condition, EndingCondition::Solved);

    let drawn = render::render(&maze.draw_solution(&solution).unwrap());
    assert_eq!(drawn, "#######\n#SXX# #\n###X# #\n#  XXE#\n#######");
}

#[test]
fn solved_maze_exits_zero() {
    let path = maze_file("corridor", CORRIDOR);
    let output = solve_maze(&[path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "{stdout}");
    assert!(stdout.contains("Maze has been solved. Solution below:"));
    assert!(stdout.contains("#  XXE#"));
}

#[test]
fn unsolvable_maze_exits_two() {
    let path = maze_file("sealed", SEALED);
    let output = solve_maze(&[path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(2), "{stdout}");
    assert!(stdout.contains("Maze is not solveable"));
    assert!(!stdout.contains('X'));
}

#[test]
fn missing_argument_exits_one() {
    let output = solve_maze(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Please pass file path for the desired maze"));
}

#[test]
fn unknown_flag_exits_one() {
    let output = solve_maze(&["--bogus", "maze.txt"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "{stderr}");
    assert!(stderr.contains("--bogus"));
}

#[test]
fn bad_frame_length_exits_one() {
    let output = solve_maze(&["--frame-length", "fast", "maze.txt"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_exits_zero() {
    let output = solve_maze(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("--no-wait"));
}

#[test]
fn missing_file_exits_one() {
    let output = solve_maze(&["no/such/maze.txt"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("not valid or does not exist"));
}

#[test]
fn malformed_file_is_not_solved() {
    let path = maze_file("short", "3 3\n0 0\n2 2\n000\n000\n");
    let output = solve_maze(&[path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Malformed maze file, line 6"), "{stdout}");
    assert!(!stdout.contains("attempt to solve"));
}

#[cfg(feature = "mapgen")]
#[test]
fn generated_maze_can_be_solved_from_file() {
    use maze_solver::maze_generator::MazeGenerator;

    let maze = MazeGenerator::new(Some(42)).generate_maze(15, 19).unwrap();
    let path = maze_file("generated", &maze.to_text());
    let output = solve_maze(&[path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    let expected = match maze.solve().ending_condition {
        EndingCondition::Solved => 0,
        EndingCondition::Unsolvable => 2,
    };
    assert_eq!(output.status.code(), Some(expected));
}
