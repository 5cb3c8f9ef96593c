use anyhow::{Context, Result};
use engine::{MovementOracle, Position, StatusOracle};
use log::info;
use trace::{FiniteSteps, Trace};

use super::Players;

/// Plays a bounded number of steps from the given positions and reports each side's view.
pub struct Trajectory<S, W, B> {
    players: Players<S, W, B>,
}

impl<S, W, B> Trajectory<S, W, B>
where
    S: StatusOracle,
    W: MovementOracle,
    B: MovementOracle,
{
    pub fn new(players: Players<S, W, B>) -> Self {
        Self { players }
    }

    /// White's perspective instances followed by black's. Without positions a single game
    /// is played from the starting position.
    pub async fn executed(&self, positions: &[Position], step: usize) -> Result<Trace> {
        let positions = if positions.is_empty() {
            vec![self.players.starting.clone()]
        } else {
            positions.to_vec()
        };

        info!("Trajectory: {} instances, {} steps", positions.len(), step);

        let colored = self
            .players
            .producer(FiniteSteps(step))
            .produced_with_splitting(&positions)
            .await
            .context("Failed to produce trajectory")?;

        Ok(colored.concatenated())
    }
}
