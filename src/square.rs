// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use std::convert::TryFrom;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum SquareStatus {
    FilledIn,
    CrossedOut,
    Unknown,
}

impl SquareStatus {
    /// Numeric form used in compact board state literals: 1, 0 and -1 respectively.
    pub fn as_value(self) -> i8 {
        match self {
            SquareStatus::FilledIn   => 1,
            SquareStatus::CrossedOut => 0,
            SquareStatus::Unknown    => -1,
        }
    }
    pub fn fmt_visual(self) -> &'static str {
        match self {
            SquareStatus::CrossedOut => " ",
            SquareStatus::FilledIn   => "\u{25A0}",
            SquareStatus::Unknown    => ".",
        }
    }
}

impl fmt::Display for SquareStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            SquareStatus::FilledIn   => "FilledIn",
            SquareStatus::CrossedOut => "CrossedOut",
            SquareStatus::Unknown    => "Unknown",
        })
    }
}
impl TryFrom<i8> for SquareStatus {
    type Error = &'static str;
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1  => Ok(SquareStatus::FilledIn),
            0  => Ok(SquareStatus::CrossedOut),
            -1 => Ok(SquareStatus::Unknown),
            _  => Err("Not a valid SquareStatus value")
        }
    }
}
impl TryFrom<&str> for SquareStatus {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "FilledIn"   => Ok(SquareStatus::FilledIn),
            "CrossedOut" => Ok(SquareStatus::CrossedOut),
            "Unknown"    => Ok(SquareStatus::Unknown),
            _            => Err("Not a valid SquareStatus value")
        }
    }
}
