//! The sliding tile puzzle (8-puzzle, 15-puzzle, ...).

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use std::convert::TryFrom;
use std::fmt;

use searcher::{Action, Cost, Problem, Solution};

use crate::runner;
use crate::Settings;

pub type Tile = u32;

#[derive(Debug, Error, PartialEq)]
pub enum PuzzleError {
    #[error("A board must be at least 2x2, not {0}x{0}")]
    TooSmall(usize),

    #[error("A {0}x{0} board has too many tiles")]
    TooLarge(usize),

    #[error("Row {row} has {columns} tiles, but the board has {size} rows")]
    NotSquare {
        row: usize,
        columns: usize,
        size: usize,
    },

    #[error("A board of size {size} needs {expected} tiles, got {actual}")]
    WrongLength {
        size: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Tiles must be the numbers 0 to {0}, each used once")]
    NotAPermutation(Tile),

    #[error("Can't move the blank {0} on this board")]
    MoveNotApplicable(Move),
}

pub type Result<T> = ::std::result::Result<T, PuzzleError>;

/// Moves of the blank space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

const MOVES: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

impl Move {
    pub fn all() -> impl Iterator<Item = Self> {
        MOVES.iter().cloned()
    }

    /// The move which undoes this one.
    pub fn reverse(self) -> Move {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }

    /// Change in (row, column) of the blank.
    fn offset(self) -> (isize, isize) {
        match self {
            Move::Left => (0, -1),
            Move::Right => (0, 1),
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
            Move::Up => "UP",
            Move::Down => "DOWN",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An n x n arrangement of tiles, stored in row-major order,
/// where 0 is the blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
    blank: usize,
}

impl Board {
    /// Build a board from its rows.
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let size = rows.len();
        if size < 2 {
            return Err(PuzzleError::TooSmall(size));
        }

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(PuzzleError::NotSquare {
                row,
                columns: r.len(),
                size,
            });
        }

        Board::from_tiles(size, rows.into_iter().flatten().collect())
    }

    /// Number of tiles on a board of this size, blank included.
    fn area(size: usize) -> Result<usize> {
        if size < 2 {
            return Err(PuzzleError::TooSmall(size));
        }

        size
            .checked_mul(size)
            .filter(|&area| Tile::try_from(area).is_ok())
            .ok_or(PuzzleError::TooLarge(size))
    }

    /// Build a board from its tiles, in reading order.
    pub fn from_tiles(size: usize, tiles: Vec<Tile>) -> Result<Self> {
        let expected = Board::area(size)?;
        if tiles.len() != expected {
            return Err(PuzzleError::WrongLength {
                size,
                expected,
                actual: tiles.len(),
            });
        }

        let mut seen = vec![false; expected];
        for &tile in &tiles {
            match seen.get_mut(tile as usize) {
                Some(s) if !*s => *s = true,
                _ => return Err(PuzzleError::NotAPermutation(expected as Tile - 1)),
            }
        }

        // Every tile is present, so the blank is too.
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();

        Ok(Board { size, tiles, blank })
    }

    /// The goal arrangement: blank first, then every tile in order.
    pub fn solved(size: usize) -> Result<Self> {
        let area = Board::area(size)? as Tile;
        Board::from_tiles(size, (0..area).collect())
    }

    /// A uniformly random arrangement of the tiles.
    ///
    /// Only half of all arrangements can reach the goal, so a shuffled
    /// board may well have no solution.
    pub fn shuffled<R>(size: usize, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let area = Board::area(size)? as Tile;
        let mut tiles: Vec<Tile> = (0..area).collect();
        tiles.shuffle(rng);
        Board::from_tiles(size, tiles)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at (row, column), if that is on the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Tile> {
        if row < self.size && column < self.size {
            Some(self.tiles[row * self.size + column])
        } else {
            None
        }
    }

    /// Position of the blank as (row, column).
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Where the blank would end up after this move.
    fn target(&self, movement: Move) -> Option<usize> {
        let (row, column) = self.blank();
        let (dr, dc) = movement.offset();
        let row = row as isize + dr;
        let column = column as isize + dc;

        let bound = 0..(self.size as isize);
        if bound.contains(&row) && bound.contains(&column) {
            Some(row as usize * self.size + column as usize)
        } else {
            None
        }
    }

    pub fn is_applicable(&self, movement: Move) -> bool {
        self.target(movement).is_some()
    }

    /// Slide the blank, swapping it with its neighbour.
    pub fn apply(&self, movement: Move) -> Result<Board> {
        let target = self
            .target(movement)
            .ok_or(PuzzleError::MoveNotApplicable(movement))?;

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);

        Ok(Board {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(i, &t)| t as usize == i)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            write!(f, "|")?;
            for tile in row {
                match tile {
                    0 => write!(f, "-")?,
                    t => write!(f, "{}", t)?,
                }
                write!(f, " | ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Find the moves which put a board in order.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    initial: Board,
}

impl SlidingPuzzle {
    pub fn new(board: Board) -> Self {
        Self { initial: board }
    }

    pub fn random<R>(size: usize, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        Ok(Self::new(Board::shuffled(size, rng)?))
    }
}

impl Problem for SlidingPuzzle {
    type State = Board;

    fn initial_state(&self) -> Board {
        self.initial.clone()
    }

    fn successors(&self, board: &Board) -> Vec<Action<Board>> {
        Move::all()
            .filter_map(|m| {
                board
                    .apply(m)
                    .ok()
                    .map(|next| Action::new(m.name(), next, Cost::UNIFORM))
            })
            .collect()
    }

    fn is_goal(&self, board: &Board) -> bool {
        board.is_solved()
    }
}

fn board(settings: &Settings) -> ::std::result::Result<Board, anyhow::Error> {
    if let Some(ref tiles) = settings.board {
        return Ok(Board::from_tiles(settings.size, tiles.clone())?);
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(
        "Shuffling a {0}x{0} board with seed {1}",
        settings.size, seed
    );
    Ok(Board::shuffled(
        settings.size,
        &mut StdRng::seed_from_u64(seed),
    )?)
}

fn describe(solution: &Solution<Board>) -> String {
    let mut output = String::new();
    for action in solution {
        output.push_str(&format!("{}\n{}\n", action.name(), action.target()));
    }
    output
}

pub(crate) fn main(settings: &Settings) -> ::std::result::Result<(), anyhow::Error> {
    let puzzle = SlidingPuzzle::new(board(settings)?);
    println!("Initial state\n{}", puzzle.initial_state());

    for report in runner::race(&puzzle, &settings.strategies)? {
        println!("{}", report);
        if let Ok(Some(ref solution)) = report.result {
            println!("{}", describe(solution));
        }
    }

    Ok(())
}
