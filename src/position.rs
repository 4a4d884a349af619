use crate::board::Board;
use std::fmt;
use std::str::FromStr;

/// A cell address, entered as a lowercase letter in row-major order:
/// `'a'` is the top-left cell, `'i'` the bottom-right.
///
/// The letter scheme would cover boards of up to 26 cells; this game fixes
/// the count at 9. Uppercase letters are rejected, not folded.
///
/// ```
/// use tictactoe_rs::position::Position;
///
/// let p = Position::try_from('e').unwrap();
/// assert_eq!(p.index(), 4);
/// assert_eq!((p.row(), p.col()), (1, 1));
/// assert!(Position::try_from('j').is_err());
/// assert!(Position::try_from('A').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PositionParseError {
    #[error("invalid position: '{0}'")]
    Invalid(char),
    #[error("no position given")]
    Empty,
}

impl Position {
    /// Every cell address, in board order.
    pub const ALL: [Position; Board::SIZE] = [
        Position(0),
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
    ];

    /// The address for a raw board index, when in range.
    pub fn from_index(index: usize) -> Option<Position> {
        (index < Board::SIZE).then_some(Position(index as u8))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter a player types to pick this cell.
    pub const fn symbol(self) -> char {
        (b'a' + self.0) as char
    }

    pub const fn row(self) -> usize {
        self.0 as usize / Board::SIDE
    }

    pub const fn col(self) -> usize {
        self.0 as usize % Board::SIDE
    }
}

impl TryFrom<char> for Position {
    type Error = PositionParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='i' => Ok(Position(c as u8 - b'a')),
            _ => Err(PositionParseError::Invalid(c)),
        }
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Decodes the first non-whitespace character; the rest of the token
    /// carries no meaning.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = s
            .chars()
            .find(|c| !c.is_whitespace())
            .ok_or(PositionParseError::Empty)?;
        Position::try_from(c)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
