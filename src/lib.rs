// vim: set ai et ts=4 sts=4 sw=4:
pub mod util;
pub mod square;
pub mod line;
pub mod board;
pub mod logging;

pub use self::board::{state_from_values, Board, BoardError, BoardState, RunLengths};
pub use self::square::SquareStatus;
pub use self::util::Direction;
