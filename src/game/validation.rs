//! Board word validation
//!
//! Every pass rescans the whole grid:
//! 1. Collect maximal horizontal and vertical runs of two or more tiles
//! 2. Look each run up in the dictionary
//! 3. Mark a tile valid only if every run it belongs to is a word
//! 4. Check that all tiles form one orthogonally connected group
//!
//! The full rescan is O(width * height) per mutation. At 42x24 that is cheap;
//! a much larger board would want per-row/column dirty tracking instead.

use super::board::{Board, Coordinate};
use super::dictionary::WordValidator;
use std::collections::{HashMap, HashSet, VecDeque};

/// Scan direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A maximal line of adjacent tiles, two or more long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub word: String,
    pub positions: Vec<Coordinate>,
    pub orientation: Orientation,
}

/// A run together with its dictionary verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedRun {
    pub run: Run,
    pub valid: bool,
}

/// Result of one validation pass over the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub runs: Vec<CheckedRun>,
    /// Tiles whose every run is a valid word
    pub valid_positions: HashSet<Coordinate>,
    /// Every placed tile is in `valid_positions` (true for an empty board)
    pub all_placed_valid: bool,
    /// Placed tiles form a single connected group (true for an empty board)
    pub contiguous: bool,
}

impl Evaluation {
    /// Whether the board is finished: every tile valid and all tiles connected.
    pub fn is_complete(&self) -> bool {
        self.all_placed_valid && self.contiguous
    }

    pub fn is_valid(&self, at: Coordinate) -> bool {
        self.valid_positions.contains(&at)
    }
}

/// Evaluate the board against a word list.
pub fn evaluate<V: WordValidator + ?Sized>(board: &Board, words: &V) -> Evaluation {
    let runs = extract_runs(board);

    let mut valid_words: HashSet<String> = HashSet::new();
    let mut words_at: HashMap<Coordinate, HashSet<String>> = HashMap::new();
    let mut checked = Vec::with_capacity(runs.len());

    for run in runs {
        let lower = run.word.to_lowercase();
        let valid = words.is_valid_word(&lower);
        if valid {
            valid_words.insert(lower.clone());
        }
        for &at in &run.positions {
            words_at.entry(at).or_default().insert(lower.clone());
        }
        checked.push(CheckedRun { run, valid });
    }

    // Lone tiles never appear in `words_at`, so they are never valid
    let valid_positions: HashSet<Coordinate> = words_at
        .into_iter()
        .filter(|(_, words)| words.iter().all(|w| valid_words.contains(w)))
        .map(|(at, _)| at)
        .collect();

    let all_placed_valid = board.occupied().all(|at| valid_positions.contains(&at));
    let contiguous = is_contiguous(board);

    Evaluation {
        runs: checked,
        valid_positions,
        all_placed_valid,
        contiguous,
    }
}

/// Collect every maximal run, rows left-to-right first, then columns top-to-bottom.
pub fn extract_runs(board: &Board) -> Vec<Run> {
    let mut runs = Vec::new();

    for y in 0..board.height() {
        let line = (0..board.width()).map(|x| Coordinate::new(x, y));
        collect_line(board, line, Orientation::Horizontal, &mut runs);
    }
    for x in 0..board.width() {
        let line = (0..board.height()).map(|y| Coordinate::new(x, y));
        collect_line(board, line, Orientation::Vertical, &mut runs);
    }

    runs
}

fn collect_line(
    board: &Board,
    line: impl Iterator<Item = Coordinate>,
    orientation: Orientation,
    runs: &mut Vec<Run>,
) {
    let mut word = String::new();
    let mut positions = Vec::new();

    for at in line {
        match board.get(at) {
            Some(tile) => {
                word.push(tile.letter);
                positions.push(at);
            }
            None => flush_run(&mut word, &mut positions, orientation, runs),
        }
    }
    flush_run(&mut word, &mut positions, orientation, runs);
}

fn flush_run(
    word: &mut String,
    positions: &mut Vec<Coordinate>,
    orientation: Orientation,
    runs: &mut Vec<Run>,
) {
    if positions.len() >= 2 {
        runs.push(Run {
            word: std::mem::take(word),
            positions: std::mem::take(positions),
            orientation,
        });
    } else {
        word.clear();
        positions.clear();
    }
}

/// Breadth-first flood from any tile; connected iff it reaches every tile.
pub fn is_contiguous(board: &Board) -> bool {
    let Some(start) = board.occupied().next() else {
        return true;
    };

    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(at) = queue.pop_front() {
        for next in at.neighbors(board.width(), board.height()) {
            if board.is_occupied(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited.len() == board.len()
}
