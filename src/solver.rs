//! Backtracking wall-follower
//!
//! The walker tries the four compass directions in a fixed rotation from
//! its current square. A square it has already stepped into counts as a
//! failed attempt, just like a wall. Once a full rotation fails the square
//! is a dead end: it is evicted from the candidate route and the walker is
//! rewound along its move history. Each further failed rotation rewinds one
//! square more. The maze is declared unsolvable once the number of
//! consecutive failed rotations reaches `width * height`.
//!
//! This is not a shortest-path search. The route found depends on the
//! rotation order and may contain detours.

use std::collections::HashSet;

use log::{debug, trace};

use crate::grid::{Grid, Position};
use crate::moves::{self, Direction, Outcome};

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// Walking forward
    Exploring,
    /// Current square is a dead end; evicting and rewinding
    Backtracking,
    /// Goal reached
    Solved,
    /// Failure budget exhausted
    Unsolvable,
}

impl SolveState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SolveState::Solved | SolveState::Unsolvable)
    }
}

/// Every square ever stepped into, oldest first
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    moves: Vec<Position>,
    seen: HashSet<Position>,
}

impl MoveHistory {
    fn push(&mut self, position: Position) {
        debug_assert!(!self.seen.contains(&position), "{position} stepped into twice");
        self.seen.insert(position);
        self.moves.push(position);
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.seen.contains(position)
    }

    /// Entry `back` steps from the end, `back >= 1`
    fn rewind(&self, back: usize) -> Option<Position> {
        self.moves.len().checked_sub(back).map(|i| self.moves[i])
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.moves
    }
}

/// Wall-follower over a borrowed grid
pub struct Solver<'a> {
    grid: &'a Grid,
    goal: Position,
    state: SolveState,
    position: Position,
    /// Index into [Direction::ALL]
    direction: usize,
    /// Failed attempts from the current square
    failed_attempts: usize,
    /// Counts up on each failed rotation, reset after a successful move
    iterations: usize,
    failure_budget: usize,
    history: MoveHistory,
    route: Vec<Position>,
    steps: usize,
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a Grid, start: Position, goal: Position) -> Self {
        let (width, height) = grid.dimensions();
        Self {
            grid,
            goal,
            state: if start == goal {
                SolveState::Solved
            } else {
                SolveState::Exploring
            },
            position: start,
            direction: 0,
            failed_attempts: 0,
            iterations: 1,
            failure_budget: width * height,
            history: MoveHistory::default(),
            route: Vec::new(),
            steps: 0,
        }
    }

    /// Perform one transition and return the resulting state.
    ///
    /// Terminal states are sticky.
    pub fn step(&mut self) -> SolveState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.steps += 1;

        if self.iterations == self.failure_budget {
            debug!(
                "Giving up after {} failed rotations at {}",
                self.iterations, self.position
            );
            self.state = SolveState::Unsolvable;
            return self.state;
        }

        if self.failed_attempts >= Direction::ALL.len() {
            self.state = SolveState::Backtracking;
            self.evict_dead_end();
        } else {
            self.state = SolveState::Exploring;
        }

        if self.direction >= Direction::ALL.len() {
            self.direction = 0;
            self.iterations += 1;
        }

        let direction = Direction::ALL[self.direction];
        match moves::step(self.grid, self.position, direction) {
            Outcome::Moved(target) if target == self.goal => {
                debug!("Reached goal {} from {}", target, self.position);
                self.state = SolveState::Solved;
            }
            Outcome::Moved(target) if !self.history.contains(&target) => {
                trace!("{:?} from {} to {}", direction, self.position, target);
                self.history.push(target);
                self.route.push(target);
                self.position = target;
                self.failed_attempts = 0;
                self.iterations = 1;
                self.state = SolveState::Exploring;
            }
            Outcome::Moved(_) | Outcome::Blocked => {
                self.direction += 1;
                self.failed_attempts += 1;
            }
        }
        self.state
    }

    /// Step until a terminal state is reached
    pub fn run(&mut self) -> SolveState {
        while !self.step().is_terminal() {}
        debug!(
            "Finished as {:?} after {} steps, {} squares visited, route length {}",
            self.state,
            self.steps,
            self.history.len(),
            self.route.len()
        );
        self.state
    }

    /// Drop the current square from the route and rewind the walker by
    /// `iterations` moves. Out-of-range rewinds leave the walker in place.
    fn evict_dead_end(&mut self) {
        let dead_end = self.position;
        self.route.retain(|position| *position != dead_end);
        if let Some(previous) = self.history.rewind(self.iterations) {
            trace!(
                "Dead end at {}, rewinding {} to {}",
                dead_end,
                self.iterations,
                previous
            );
            self.position = previous;
        }
    }

    pub fn state(&self) -> SolveState {
        self.state
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Current candidate route, excluding start and goal
    pub fn route(&self) -> &[Position] {
        &self.route
    }

    /// Number of transitions taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn into_route(self) -> Vec<Position> {
        self.route
    }
}
