use anyhow::{anyhow, Context, Result};
use engine::{Move, MovementOracle, Position, StatusOracle};
use log::info;
use serde::Serialize;
use trace::Infinite;

use super::{GameResult, Players};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub positions: Vec<Position>,
    pub moves: Vec<Move>,
    pub result: GameResult,
}

/// Plays a single game from the starting position to its end.
pub struct Game<S, W, B> {
    players: Players<S, W, B>,
}

impl<S, W, B> Game<S, W, B>
where
    S: StatusOracle,
    W: MovementOracle,
    B: MovementOracle,
{
    pub fn new(players: Players<S, W, B>) -> Self {
        Self { players }
    }

    pub async fn executed(&self) -> Result<GameRecord> {
        let starting = &self.players.starting;

        let trace = self
            .players
            .producer(Infinite)
            .produced(std::slice::from_ref(starting))
            .await
            .context("Failed to play game")?;

        let result = starting
            .color()
            .zip(trace.clone().end_corrected().outcomes.first().cloned())
            .and_then(|(first, outcomes)| GameResult::from_history(first, &outcomes))
            .ok_or_else(|| anyhow!("Game from {} was never played, no side to move", starting))?;

        let record = GameRecord {
            positions: trace.positions.into_iter().next().unwrap_or_default(),
            moves: trace.moves.into_iter().next().unwrap_or_default(),
            result,
        };

        info!("Game finished {} after {} moves", record.result, record.moves.len());

        Ok(record)
    }
}
