use std::future::Future;

use super::{Move, OracleError, Outcome, Position};

pub type StatusResult = Result<(Vec<Outcome>, Vec<Vec<Move>>), OracleError>;
pub type MovementResult = Result<(Vec<Position>, Vec<Move>), OracleError>;

/// Classifies a batch of positions and lists the legal moves from each of them.
///
/// Outputs are index aligned with the input. An empty batch must produce `([], [])`.
pub trait StatusOracle {
    fn status(&self, positions: &[Position]) -> impl Future<Output = StatusResult> + Send;
}

/// Picks one move per position among its legal moves and applies it.
///
/// Returns the resulting positions together with the moves played, both index aligned with
/// the input.
pub trait MovementOracle {
    fn movement(
        &self,
        positions: &[Position],
        legal_moves: &[Vec<Move>],
    ) -> impl Future<Output = MovementResult> + Send;
}

impl<T: StatusOracle + ?Sized> StatusOracle for &T {
    fn status(&self, positions: &[Position]) -> impl Future<Output = StatusResult> + Send {
        (**self).status(positions)
    }
}

impl<T: MovementOracle + ?Sized> MovementOracle for &T {
    fn movement(
        &self,
        positions: &[Position],
        legal_moves: &[Vec<Move>],
    ) -> impl Future<Output = MovementResult> + Send {
        (**self).movement(positions, legal_moves)
    }
}
