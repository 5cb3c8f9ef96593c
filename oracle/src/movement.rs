use engine::{Move, MovementOracle, MovementResult, OracleError, Position, Service};
use log::debug;

use super::client::{endpoint, PostClient};
use super::dto::{NextFenRequest, NextFenResponse, NextSanRequest, NextSanResponse};

/// Asks the agent for a move (`next-san`), then asks the environment to play it
/// (`next-fen`). The second call needs the first one's answer, so they run in order.
#[derive(Clone, Debug)]
pub struct HttpMovementOracle {
    client: PostClient,
    next_san_url: String,
    next_fen_url: String,
}

impl HttpMovementOracle {
    pub fn new(client: PostClient, env_url: &str, agent_url: &str) -> Self {
        Self {
            client,
            next_san_url: endpoint(agent_url, "ai/next-san"),
            next_fen_url: endpoint(env_url, "model/next-fen"),
        }
    }

    async fn next_sans(&self, positions: &[Position], legal_moves: &[Vec<Move>]) -> Result<Vec<Move>, OracleError> {
        let request = NextSanRequest {
            fens: positions,
            legal_moves,
        };
        let response: NextSanResponse = self
            .client
            .post(Service::NextSan, &self.next_san_url, &request)
            .await?;

        if response.next_sans.len() != positions.len() {
            return Err(OracleError::mismatched(
                Service::NextSan,
                &self.next_san_url,
                positions.len(),
                response.next_sans.len(),
            ));
        }

        Ok(response.next_sans)
    }

    async fn next_fens(&self, positions: &[Position], sans: &[Move]) -> Result<Vec<Position>, OracleError> {
        let request = NextFenRequest {
            fens: positions,
            sans,
        };
        let response: NextFenResponse = self
            .client
            .post(Service::NextFen, &self.next_fen_url, &request)
            .await?;

        if response.next_fens.len() != positions.len() {
            return Err(OracleError::mismatched(
                Service::NextFen,
                &self.next_fen_url,
                positions.len(),
                response.next_fens.len(),
            ));
        }

        Ok(response.next_fens)
    }
}

impl MovementOracle for HttpMovementOracle {
    async fn movement(&self, positions: &[Position], legal_moves: &[Vec<Move>]) -> MovementResult {
        if positions.is_empty() {
            return Ok((vec![], vec![]));
        }

        let next_sans = self.next_sans(positions, legal_moves).await?;
        let next_fens = self.next_fens(positions, &next_sans).await?;

        debug!("movement: {} moves played", next_sans.len());

        Ok((next_fens, next_sans))
    }
}
