use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

const STARTING_FEN: &str = "4knbr/4p3/8/7P/4RBNK/8/8/8 w Kk - 0 1";
const EMPTY_BOARD: &str = "8/8/8/8/8/8/8/8";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Color::White => "w",
            Color::Black => "b",
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _ => Err(format!("Unknown turn token: {}", s)),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A board encoded as FEN. The side to move is the second space separated field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(String);

impl Position {
    pub fn new(fen: impl Into<String>) -> Self {
        Self(fen.into())
    }

    pub fn starting() -> Self {
        Self::new(STARTING_FEN)
    }

    /// Empty board with `color` to move, appended after a finished game.
    pub fn end(color: Color) -> Self {
        Self(format!("{} {} - - 0 1", EMPTY_BOARD, color.token()))
    }

    pub fn color(&self) -> Option<Color> {
        self.0.split(' ').nth(1).and_then(|token| token.parse().ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Position {
    fn from(fen: &str) -> Self {
        Self::new(fen)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(String);

impl Move {
    pub fn new(san: impl Into<String>) -> Self {
        Self(san.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Move {
    fn from(san: &str) -> Self {
        Self::new(san)
    }
}
