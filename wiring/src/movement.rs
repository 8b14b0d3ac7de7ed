use crate::error::{Error, Result};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::convert::{TryFrom, TryInto};
use std::str::FromStr;

/// The four cardinal directions, keyed by their token character.
#[derive(FromPrimitive, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up = b'U' as isize,
    Down = b'D' as isize,
    Left = b'L' as isize,
    Right = b'R' as isize,
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Direction::from_u32(c as u32).ok_or(c)
    }
}

impl Direction {
    /// Unit step along this direction's axis.
    pub fn unit(self) -> (isize, isize) {
        use Direction::*;
        match self {
            Up => (0, 1),
            Down => (0, -1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    pub distance: usize,
}

impl Move {
    pub fn new(direction: Direction, distance: usize) -> Move {
        Move {
            direction,
            distance,
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(token: &str) -> Result<Move> {
        let mut chars = token.chars();
        let direction = chars
            .next()
            .ok_or_else(|| Error::invalid_move(token, "empty token"))?;
        let direction: Direction = direction
            .try_into()
            .map_err(|_| Error::invalid_move(token, "unknown direction"))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_move(
                token,
                "distance is not a non-negative integer",
            ));
        }
        let distance = isize::from_str(digits)
            .map_err(|_| Error::invalid_move(token, "distance out of range"))?;

        Ok(Move::new(direction, distance as usize))
    }
}

/// Decodes a single move token such as `R1004`.
pub fn parse(code: &str) -> Result<Move> {
    code.parse()
}

/// Decodes every token of a comma-separated wire line.
/// Surrounding whitespace and empty tokens are ignored.
pub fn parse_wire(line: &str) -> Result<Vec<Move>> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse)
        .collect()
}

pub(crate) fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Move>> {
    tokens.iter().map(|token| parse(token.as_ref())).collect()
}
