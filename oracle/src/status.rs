use engine::{BoardStatus, OracleError, Position, Service, StatusOracle, StatusResult};
use log::debug;

use super::client::{endpoint, PostClient};
use super::dto::{FenStatusRequest, FenStatusResponse};

/// Status oracle backed by the environment's `fen-status` endpoint.
#[derive(Clone, Debug)]
pub struct HttpStatusOracle {
    client: PostClient,
    url: String,
}

impl HttpStatusOracle {
    pub fn new(client: PostClient, env_url: &str) -> Self {
        Self {
            client,
            url: endpoint(env_url, "model/fen-status"),
        }
    }
}

impl StatusOracle for HttpStatusOracle {
    async fn status(&self, positions: &[Position]) -> StatusResult {
        if positions.is_empty() {
            return Ok((vec![], vec![]));
        }

        let response: FenStatusResponse = self
            .client
            .post(Service::FenStatus, &self.url, &FenStatusRequest { fens: positions })
            .await?;

        let received = [response.statuses.len(), response.legal_moves.len()]
            .into_iter()
            .find(|&len| len != positions.len());
        if let Some(received) = received {
            return Err(OracleError::mismatched(
                Service::FenStatus,
                &self.url,
                positions.len(),
                received,
            ));
        }

        let outcomes: Vec<_> = response
            .statuses
            .into_iter()
            .map(|code| BoardStatus::from_code(code).to_outcome())
            .collect();

        debug!(
            "fen-status: {} positions, {} terminal",
            outcomes.len(),
            outcomes.iter().filter(|o| o.is_terminal()).count()
        );

        Ok((outcomes, response.legal_moves))
    }
}
