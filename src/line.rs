// vim: set ai et ts=4 sw=4 sts=4:
use super::square::SquareStatus;
use super::util::{Direction, Direction::*};

/// Uniform access to one line of a square grid, in either direction;
/// rows and columns share a single scanner and matcher through this trait.
pub trait DirectionalSequence {
    fn get_row_index(&self) -> usize;
    fn get_direction(&self) -> Direction;
    fn get_grid(&self) -> &[Vec<SquareStatus>];

    fn length(&self) -> usize {
        self.get_grid().len()
    }
    fn square_index(&self, at: usize) -> (usize, usize) {
        match self.get_direction() {
            Horizontal => (at, self.get_row_index()),
            Vertical   => (self.get_row_index(), at),
        }
    }
    fn get_square(&self, at: usize) -> SquareStatus {
        let (x, y) = self.square_index(at);
        self.get_grid()[y][x]
    }

    /// Scans forward from `start_at` while squares are filled in; returns the run
    /// length and the index of the last filled square, or `(0, start_at)` when the
    /// starting square is not filled in. Unknown squares never extend a run.
    fn traverse_run(&self, start_at: usize) -> (usize, usize) {
        let mut index = start_at;
        let mut length: usize = 0;
        while index < self.length() && self.get_square(index) == SquareStatus::FilledIn {
            length += 1;
            index += 1;
        }
        match length {
            0 => (0, start_at),
            _ => (length, index - 1),
        }
    }

    /// Whether this line's filled runs match the given run lengths, in order.
    /// Runs beyond the expected ones or of the wrong length disqualify the line;
    /// expected run lengths with no matching run left in the line do not.
    fn satisfies(&self, run_lengths: &[usize]) -> bool {
        let mut current_run: usize = 0;
        let mut position: usize = 0;
        while position < self.length() {
            let (length, last_index) = self.traverse_run(position);
            if length > 0 {
                match run_lengths.get(current_run) {
                    None => return false, // found a run past the expected ones
                    Some(&expected) => {
                        if length != expected {
                            return false;
                        }
                        // a 0 entry means "no runs" and must never consume a real run
                        if expected != 0 {
                            current_run += 1;
                        }
                    }
                }
            }
            position = last_index + 1;
        }
        true
    }

    /// Run lengths of this line's filled runs, left to right; `[0]` if there are none.
    fn derive_run_lengths(&self) -> Vec<usize> {
        let mut run_lengths = Vec::<usize>::new();
        let mut position: usize = 0;
        while position < self.length() {
            let (length, last_index) = self.traverse_run(position);
            if length > 0 {
                run_lengths.push(length);
            }
            position = last_index + 1;
        }
        if run_lengths.is_empty() {
            run_lengths.push(0);
        }
        run_lengths
    }
}

pub struct Line<'a> {
    pub direction: Direction,
    pub index: usize,
    grid: &'a [Vec<SquareStatus>],
}

impl<'a> Line<'a> {
    pub fn new(grid: &'a [Vec<SquareStatus>], direction: Direction, index: usize) -> Self {
        Line {
            direction,
            index,
            grid,
        }
    }
}

impl DirectionalSequence for Line<'_> {
    fn get_row_index(&self) -> usize { self.index }
    fn get_direction(&self) -> Direction { self.direction }
    fn get_grid(&self) -> &[Vec<SquareStatus>] { self.grid }
}
