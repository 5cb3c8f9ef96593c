use engine::{Color, Outcome};
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// Final result of one game, rendered in PGN notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameResult {
    /// Labels an end corrected outcome history. A history ending in a draw is a draw,
    /// otherwise an odd length means white won and an even length means black won.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Option<Self> {
        let last = outcomes.last()?;

        Some(if *last == Outcome::Draw {
            GameResult::Draw
        } else if outcomes.len() % 2 == 1 {
            GameResult::WhiteWin
        } else {
            GameResult::BlackWin
        })
    }

    /// Labels an end corrected history of a game that started with `first` to move. Parity
    /// counts plies from the first mover, so a black-first game has its sides swapped.
    pub fn from_history(first: Color, outcomes: &[Outcome]) -> Option<Self> {
        let result = Self::from_outcomes(outcomes)?;

        Some(match first {
            Color::White => result,
            Color::Black => result.swapped(),
        })
    }

    pub fn swapped(self) -> Self {
        match self {
            GameResult::WhiteWin => GameResult::BlackWin,
            GameResult::BlackWin => GameResult::WhiteWin,
            GameResult::Draw => GameResult::Draw,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWin => Some(Color::White),
            GameResult::BlackWin => Some(Color::Black),
            GameResult::Draw => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameResult::WhiteWin => "1-0",
            GameResult::BlackWin => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for GameResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Outcome::*;

    #[test]
    fn test_from_outcomes() {
        assert_eq!(GameResult::from_outcomes(&[None, None, Draw]), Some(GameResult::Draw));
        assert_eq!(GameResult::from_outcomes(&[None, Decisive]), Some(GameResult::BlackWin));
        assert_eq!(GameResult::from_outcomes(&[Decisive]), Some(GameResult::WhiteWin));
        assert_eq!(GameResult::from_outcomes(&[]), Option::None);
    }

    #[test]
    fn test_from_history_follows_first_mover() {
        let decided_on_fourth_ply = [None, None, None, Decisive];

        assert_eq!(
            GameResult::from_history(Color::White, &decided_on_fourth_ply),
            Some(GameResult::BlackWin)
        );
        assert_eq!(
            GameResult::from_history(Color::Black, &decided_on_fourth_ply),
            Some(GameResult::WhiteWin)
        );
        assert_eq!(
            GameResult::from_history(Color::Black, &[None, Draw, Draw]),
            Some(GameResult::Draw)
        );
        assert_eq!(GameResult::from_history(Color::Black, &[]), Option::None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(GameResult::WhiteWin.to_string(), "1-0");
        assert_eq!(GameResult::BlackWin.to_string(), "0-1");
        assert_eq!(GameResult::Draw.to_string(), "1/2-1/2");
        assert_eq!(serde_json::to_string(&GameResult::Draw).unwrap(), "\"1/2-1/2\"");
        assert_eq!(GameResult::BlackWin.winner(), Some(Color::Black));
        assert_eq!(GameResult::Draw.winner(), Option::None);
    }
}
