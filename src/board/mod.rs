// vim: set ai et ts=4 sw=4 sts=4:
mod display;

use std::error;
use std::fmt;
use std::convert::TryFrom;
use log::{debug, trace};
use rand::prelude::*;
use rand_pcg::Pcg64;

use super::line::{DirectionalSequence, Line};
use super::square::SquareStatus;
use super::util::{Direction, Direction::*};

pub type RunLengths = Vec<usize>;
pub type BoardState = Vec<Vec<SquareStatus>>;

#[derive(PartialEq, Debug)]
pub enum BoardError {
    InvalidSize(usize),
    OutOfRange { row: usize, col: usize, size: usize },
    InvalidCellValue(i8),
    InvalidGridShape { expected: usize, found: usize },
    InvalidClueShape { direction: Direction, expected: usize, found: usize },
    MissingClues,
}
impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            BoardError::InvalidSize(size) =>
                format!("board size must be at least 1, got {}", size),
            BoardError::OutOfRange { row, col, size } =>
                format!("square (row={}, col={}) lies outside a {}x{} board", row, col, size, size),
            BoardError::InvalidCellValue(value) =>
                format!("board cell must be one of -1, 0 or 1, got {}", value),
            BoardError::InvalidGridShape { expected, found } =>
                format!("board state must have exactly {} rows of {} squares, got {}", expected, expected, found),
            BoardError::InvalidClueShape { direction, expected, found } =>
                format!("{} clues must have exactly {} run length lists, got {}", direction, expected, found),
            BoardError::MissingClues =>
                "run lengths must be set for both rows and columns".to_string(),
        })
    }
}
impl error::Error for BoardError {}

/// Converts rows of the numeric cell encoding (1 filled, 0 crossed out,
/// -1 unknown) into a grid of square statuses.
pub fn state_from_values(values: &[Vec<i8>]) -> Result<BoardState, BoardError> {
    values.iter()
          .map(|row| row.iter()
                        .map(|&value| SquareStatus::try_from(value)
                                          .map_err(|_| BoardError::InvalidCellValue(value)))
                        .collect::<Result<Vec<_>, _>>())
          .collect()
}

#[derive(Clone)]
pub struct Board {
    size: usize,
    grid: BoardState,
    row_clues: Option<Vec<RunLengths>>,
    col_clues: Option<Vec<RunLengths>>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Board {
            size,
            grid: Self::blank_grid(size),
            row_clues: None,
            col_clues: None,
        })
    }

    pub fn with_clues(size: usize,
                      row_clues: Option<Vec<RunLengths>>,
                      col_clues: Option<Vec<RunLengths>>)
        -> Result<Self, BoardError>
    {
        let mut board = Self::new(size)?;
        if let Some(clues) = row_clues {
            board.set_row_clues(clues)?;
        }
        if let Some(clues) = col_clues {
            board.set_col_clues(clues)?;
        }
        Ok(board)
    }

    fn blank_grid(size: usize) -> BoardState {
        (0..size).map(|_| (0..size).map(|_| SquareStatus::CrossedOut)
                                   .collect::<Vec<_>>())
                 .collect()
    }

    pub fn size(&self) -> usize { self.size }
    pub fn get_row_clues(&self) -> Option<&Vec<RunLengths>> { self.row_clues.as_ref() }
    pub fn get_col_clues(&self) -> Option<&Vec<RunLengths>> { self.col_clues.as_ref() }

    fn check_position(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfRange { row, col, size: self.size });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<SquareStatus, BoardError> {
        self.check_position(row, col)?;
        Ok(self.grid[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, status: SquareStatus) -> Result<(), BoardError> {
        self.check_position(row, col)?;
        self.grid[row][col] = status;
        Ok(())
    }

    /// Replaces the entire grid; the new state must be exactly size x size.
    /// The board is left untouched when the replacement is rejected.
    pub fn set_state(&mut self, state: BoardState) -> Result<(), BoardError> {
        if state.len() != self.size {
            return Err(BoardError::InvalidGridShape { expected: self.size, found: state.len() });
        }
        for row in &state {
            if row.len() != self.size {
                return Err(BoardError::InvalidGridShape { expected: self.size, found: row.len() });
            }
        }
        self.grid = state;
        Ok(())
    }

    pub fn set_state_from_values(&mut self, values: &[Vec<i8>]) -> Result<(), BoardError> {
        self.set_state(state_from_values(values)?)
    }

    pub fn set_row_clues(&mut self, clues: Vec<RunLengths>) -> Result<(), BoardError> {
        if clues.len() != self.size {
            return Err(BoardError::InvalidClueShape {
                direction: Horizontal,
                expected: self.size,
                found: clues.len(),
            });
        }
        self.row_clues = Some(clues);
        Ok(())
    }

    pub fn set_col_clues(&mut self, clues: Vec<RunLengths>) -> Result<(), BoardError> {
        if clues.len() != self.size {
            return Err(BoardError::InvalidClueShape {
                direction: Vertical,
                expected: self.size,
                found: clues.len(),
            });
        }
        self.col_clues = Some(clues);
        Ok(())
    }

    fn line(&self, direction: Direction, index: usize) -> Line {
        Line::new(&self.grid, direction, index)
    }

    /// Returns whether the current grid satisfies the row and column clues.
    /// A line whose filled runs stop before its run length list is exhausted
    /// still counts as solved; only mismatched or extra runs disqualify it.
    pub fn solved(&self) -> Result<bool, BoardError> {
        let row_clues = self.row_clues.as_ref().ok_or(BoardError::MissingClues)?;
        let col_clues = self.col_clues.as_ref().ok_or(BoardError::MissingClues)?;

        for (index, run_lengths) in row_clues.iter().enumerate() {
            if !self.line(Horizontal, index).satisfies(run_lengths) {
                trace!("row {} does not satisfy its run lengths {:?}", index, run_lengths);
                return Ok(false);
            }
        }
        for (index, run_lengths) in col_clues.iter().enumerate() {
            if !self.line(Vertical, index).satisfies(run_lengths) {
                trace!("column {} does not satisfy its run lengths {:?}", index, run_lengths);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Derives and stores both clue sets from the current grid, so that
    /// solved() holds for the grid the clues were read off of.
    pub fn derive_clues(&mut self) {
        self.col_clues = Some(self.derive_direction_clues(Vertical));
        self.row_clues = Some(self.derive_direction_clues(Horizontal));
    }

    fn derive_direction_clues(&self, direction: Direction) -> Vec<RunLengths> {
        (0..self.size).map(|index| self.line(direction, index).derive_run_lengths())
                      .collect()
    }

    /// Generate a random puzzle whose solution is the generated grid: every
    /// square is drawn filled or crossed out with equal probability, and both
    /// clue sets are derived from the result. A fixed seed reproduces the same
    /// grid and clues on every call; the generator never touches global
    /// random state.
    pub fn generate_valid_puzzle(&mut self, seed: Option<u64>) -> BoardState {
        let mut rng: Pcg64 = match seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None       => Pcg64::from_entropy(),
        };
        self.grid = (0..self.size)
            .map(|_| (0..self.size).map(|_| match rng.gen::<f64>() >= 0.5 {
                                            true  => SquareStatus::FilledIn,
                                            false => SquareStatus::CrossedOut,
                                        })
                                   .collect::<Vec<_>>())
            .collect();
        self.derive_clues();
        debug!("generated {}x{} puzzle (seed: {:?})", self.size, self.size, seed);
        self.grid.clone()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(size={})", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_an_empty_board() {
        assert_eq!(Board::new(0).unwrap_err(), BoardError::InvalidSize(0));
    }

    #[test]
    fn starts_blank() {
        let board = Board::new(3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(row, col).unwrap(), SquareStatus::CrossedOut);
            }
        }
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut board = Board::new(2).unwrap();
        board.set(1, 0, SquareStatus::FilledIn).unwrap();
        assert_eq!(board.get(1, 0).unwrap(), SquareStatus::FilledIn);

        assert_eq!(board.get(2, 0).unwrap_err(),
                   BoardError::OutOfRange { row: 2, col: 0, size: 2 });
        assert_eq!(board.set(0, 2, SquareStatus::Unknown).unwrap_err(),
                   BoardError::OutOfRange { row: 0, col: 2, size: 2 });
    }

    #[test]
    fn set_state_rejects_wrong_shapes() {
        let mut board = Board::new(2).unwrap();
        let err = board.set_state_from_values(&[vec![1, 0]]).unwrap_err();
        assert_eq!(err, BoardError::InvalidGridShape { expected: 2, found: 1 });

        let err = board.set_state_from_values(&[vec![1, 0], vec![0, 1, 0]]).unwrap_err();
        assert_eq!(err, BoardError::InvalidGridShape { expected: 2, found: 3 });
    }

    #[test]
    fn set_state_rejects_illegal_values() {
        let mut board = Board::new(2).unwrap();
        let err = board.set_state_from_values(&[vec![1, 0], vec![0, 2]]).unwrap_err();
        assert_eq!(err, BoardError::InvalidCellValue(2));
    }

    #[test]
    fn rejected_state_leaves_the_board_untouched() {
        let mut board = Board::new(2).unwrap();
        board.set(0, 0, SquareStatus::FilledIn).unwrap();

        assert!(board.set_state_from_values(&[vec![0, 0], vec![0, -2]]).is_err());
        assert!(board.set_state_from_values(&[vec![0, 0]]).is_err());
        assert_eq!(board.get(0, 0).unwrap(), SquareStatus::FilledIn);
        assert_eq!(board.get(0, 1).unwrap(), SquareStatus::CrossedOut);
    }

    #[test]
    fn clue_setters_check_the_number_of_lines() {
        let mut board = Board::new(2).unwrap();
        let err = board.set_row_clues(vec![vec![1]]).unwrap_err();
        assert_eq!(err, BoardError::InvalidClueShape {
            direction: Direction::Horizontal,
            expected: 2,
            found: 1,
        });
        let err = board.set_col_clues(vec![vec![1], vec![0], vec![0]]).unwrap_err();
        assert_eq!(err, BoardError::InvalidClueShape {
            direction: Direction::Vertical,
            expected: 2,
            found: 3,
        });
    }

    #[test]
    fn with_clues_validates_both_sets() {
        assert!(Board::with_clues(2, Some(vec![vec![1], vec![0]]), Some(vec![vec![1], vec![0]])).is_ok());
        assert!(Board::with_clues(2, Some(vec![vec![1]]), None).is_err());
        assert!(Board::with_clues(2, None, Some(vec![vec![1]])).is_err());
    }

    #[test]
    fn solved_requires_both_clue_sets() {
        let mut board = Board::new(2).unwrap();
        assert_eq!(board.solved().unwrap_err(), BoardError::MissingClues);

        board.set_row_clues(vec![vec![0], vec![0]]).unwrap();
        assert_eq!(board.solved().unwrap_err(), BoardError::MissingClues);

        board.set_col_clues(vec![vec![0], vec![0]]).unwrap();
        assert_eq!(board.solved().unwrap(), true); // blank board vs all-empty clues
    }

    #[test]
    fn derived_clues_always_verify() {
        let states: Vec<Vec<Vec<i8>>> = vec![
            vec![vec![1]],
            vec![vec![0, 0], vec![0, 0]],
            vec![vec![1, 0, 1], vec![1, 1, 1], vec![0, 1, 0]],
            vec![vec![1, 1, 1, 0], vec![0, 1, 1, 1], vec![1, 1, 0, 0], vec![0, 0, 1, 1]],
        ];
        for state in states {
            let mut board = Board::new(state.len()).unwrap();
            board.set_state_from_values(&state).unwrap();
            board.derive_clues();
            assert_eq!(board.solved().unwrap(), true, "state: {:?}", state);
        }
    }

    #[test]
    fn derive_clues_reads_runs_off_the_grid() {
        let mut board = Board::new(3).unwrap();
        board.set_state_from_values(&[vec![1, 0, 1],
                                      vec![1, 0, 1],
                                      vec![0, 0, 1]]).unwrap();
        board.derive_clues();
        assert_eq!(board.get_row_clues().unwrap(), &vec![vec![1, 1], vec![1, 1], vec![1]]);
        assert_eq!(board.get_col_clues().unwrap(), &vec![vec![2], vec![0], vec![3]]);
    }
}
