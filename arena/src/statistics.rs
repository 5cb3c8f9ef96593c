use engine::{Color, Position};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use trace::Trace;

use super::GameResult;

/// Tally of one side's results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInfo {
    pub score: f32,
    pub win: usize,
    pub draw: usize,
    pub lose: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementReport {
    pub white_info: MeasurementInfo,
    pub black_info: MeasurementInfo,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
}

impl Statistics {
    pub fn from_results(results: impl IntoIterator<Item = GameResult>) -> Self {
        let counts = results.into_iter().counts();
        let count = |result: GameResult| counts.get(&result).copied().unwrap_or(0);

        Self {
            white_wins: count(GameResult::WhiteWin),
            black_wins: count(GameResult::BlackWin),
            draws: count(GameResult::Draw),
        }
    }

    /// Labels every instance of an end corrected trace from the side that moved first.
    /// Instances without outcomes or without a side to move are skipped.
    pub fn from_trace(trace: &Trace) -> Self {
        Self::from_results(
            trace
                .positions
                .iter()
                .zip(&trace.outcomes)
                .filter_map(|(positions, outcomes)| {
                    let first = positions.first().and_then(Position::color)?;

                    GameResult::from_history(first, outcomes)
                }),
        )
    }

    pub fn games(&self) -> usize {
        self.white_wins + self.black_wins + self.draws
    }

    pub fn info(&self, color: Color) -> MeasurementInfo {
        let (win, lose) = match color {
            Color::White => (self.white_wins, self.black_wins),
            Color::Black => (self.black_wins, self.white_wins),
        };

        MeasurementInfo {
            score: win as f32 + self.draws as f32 * 0.5,
            win,
            draw: self.draws,
            lose,
        }
    }

    pub fn report(&self) -> MeasurementReport {
        MeasurementReport {
            white_info: self.info(Color::White),
            black_info: self.info(Color::Black),
        }
    }
}
