use anyhow::{Context, Result};
use engine::{MovementOracle, Position, StatusOracle};
use oracle::{HttpMovementOracle, HttpStatusOracle, PostClient};
use trace::{StepBudget, TraceProducer};

use super::PlayerOptions;

/// Everything a match is played with: the environment's status oracle, one movement oracle
/// per side and the position games start from when none is given.
pub struct Players<S, W, B> {
    pub status: S,
    pub white: W,
    pub black: B,
    pub starting: Position,
}

pub type HttpPlayers = Players<HttpStatusOracle, HttpMovementOracle, HttpMovementOracle>;

impl HttpPlayers {
    /// Wires the HTTP oracles. Both agents share one environment and one connection pool.
    pub fn from_urls(options: &PlayerOptions, white_url: &str, black_url: &str) -> Result<Self> {
        let client = PostClient::new(options.request_timeout()).context("Failed to build HTTP client")?;

        Ok(Self {
            status: HttpStatusOracle::new(client.clone(), &options.env_url),
            white: HttpMovementOracle::new(client.clone(), &options.env_url, white_url),
            black: HttpMovementOracle::new(client, &options.env_url, black_url),
            starting: options.starting_position(),
        })
    }
}

impl<S, W, B> Players<S, W, B>
where
    S: StatusOracle,
    W: MovementOracle,
    B: MovementOracle,
{
    pub fn new(status: S, white: W, black: B) -> Self {
        Self {
            status,
            white,
            black,
            starting: Position::starting(),
        }
    }

    pub fn with_starting(self, starting: Position) -> Self {
        Self { starting, ..self }
    }

    pub fn producer<K: StepBudget>(&self, budget: K) -> TraceProducer<&S, &W, &B, K> {
        TraceProducer::new(&self.status, &self.white, &self.black, budget)
    }
}
