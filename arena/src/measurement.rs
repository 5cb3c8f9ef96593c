use anyhow::{Context, Result};
use engine::{MovementOracle, StatusOracle};
use log::info;
use trace::Infinite;

use super::{MeasurementReport, Players, Statistics};

/// Plays `playtime` games from the starting position in one batch and tallies the results.
pub struct Measurement<S, W, B> {
    players: Players<S, W, B>,
}

impl<S, W, B> Measurement<S, W, B>
where
    S: StatusOracle,
    W: MovementOracle,
    B: MovementOracle,
{
    pub fn new(players: Players<S, W, B>) -> Self {
        Self { players }
    }

    pub async fn executed(&self, playtime: usize) -> Result<MeasurementReport> {
        let positions = vec![self.players.starting.clone(); playtime];

        let trace = self
            .players
            .producer(Infinite)
            .produced(&positions)
            .await
            .context("Failed to measure players")?;

        let statistics = Statistics::from_trace(&trace.end_corrected());

        info!(
            "Measured {} games: {} white wins, {} black wins, {} draws",
            statistics.games(),
            statistics.white_wins,
            statistics.black_wins,
            statistics.draws
        );

        Ok(statistics.report())
    }
}
