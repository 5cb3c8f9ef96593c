//! In-process oracles with scripted behaviour, for driving the production engine without an
//! environment or agent service.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    Move, MovementOracle, MovementResult, OracleError, Outcome, Position, StatusOracle,
    StatusResult,
};

pub const FIRST_FEN: &str = "4knbr/4p3/7P/8/4RBNK/8/8/8 b Kk - 0 1";
pub const FIRST_SAN: &str = "h5h6";

const LEGAL_MOVES: [&str; 11] = [
    "e4e5", "e4e6", "e4e7", "f4e5", "f4g5", "f4h6", "g4e5", "g4f6", "g4h6", "h4g5", "h5h6",
];

fn legal_moves() -> Vec<Move> {
    LEGAL_MOVES.iter().map(|&m| Move::from(m)).collect()
}

/// Every position is in progress and offers the same legal moves.
#[derive(Default)]
pub struct FakeStatus {
    calls: AtomicUsize,
}

impl FakeStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StatusOracle for FakeStatus {
    async fn status(&self, positions: &[Position]) -> StatusResult {
        if positions.is_empty() {
            return Ok((vec![], vec![]));
        }

        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok((
            vec![Outcome::None; positions.len()],
            vec![legal_moves(); positions.len()],
        ))
    }
}

/// Reports every position as in progress for the first `prefix` calls, then reports `after`
/// for every position of every later call.
pub struct PrefixStatus {
    rest_prefix: AtomicUsize,
    after: Outcome,
    calls: AtomicUsize,
}

impl PrefixStatus {
    pub fn new(prefix: usize, after: Outcome) -> Self {
        Self {
            rest_prefix: AtomicUsize::new(prefix),
            after,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn checkmate(prefix: usize) -> Self {
        Self::new(prefix, Outcome::Decisive)
    }

    pub fn stalemate(prefix: usize) -> Self {
        Self::new(prefix, Outcome::Draw)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StatusOracle for PrefixStatus {
    async fn status(&self, positions: &[Position]) -> StatusResult {
        if positions.is_empty() {
            return Ok((vec![], vec![]));
        }

        self.calls.fetch_add(1, Ordering::SeqCst);

        let in_prefix = self
            .rest_prefix
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |rest| rest.checked_sub(1))
            .is_ok();

        if in_prefix {
            Ok((
                vec![Outcome::None; positions.len()],
                vec![legal_moves(); positions.len()],
            ))
        } else {
            Ok((vec![self.after; positions.len()], vec![vec![]; positions.len()]))
        }
    }
}

/// Answers each call with the next scripted outcome list. Positions beyond the scripted
/// entries, and every call after the script runs out, are in progress.
pub struct ScriptedStatus {
    script: Mutex<VecDeque<Vec<Outcome>>>,
}

impl ScriptedStatus {
    pub fn new(script: Vec<Vec<Outcome>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

impl StatusOracle for ScriptedStatus {
    async fn status(&self, positions: &[Position]) -> StatusResult {
        if positions.is_empty() {
            return Ok((vec![], vec![]));
        }

        let scripted = self.script.lock().pop_front().unwrap_or_default();
        let outcomes: Vec<_> = (0..positions.len())
            .map(|i| scripted.get(i).copied().unwrap_or_default())
            .collect();
        let legal_moves = outcomes
            .iter()
            .map(|o| if o.is_terminal() { vec![] } else { legal_moves() })
            .collect();

        Ok((outcomes, legal_moves))
    }
}

/// Plays `FIRST_SAN` everywhere and hands the turn to the other side: white to move becomes
/// `FIRST_FEN`, anything else becomes the starting position.
#[derive(Default)]
pub struct FlippingMovement {
    calls: AtomicUsize,
    positions_seen: AtomicUsize,
    mismatched_legal_moves: AtomicUsize,
}

impl FlippingMovement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn positions_seen(&self) -> usize {
        self.positions_seen.load(Ordering::SeqCst)
    }

    /// Number of calls whose legal move list was not aligned with its positions.
    pub fn mismatched_legal_moves(&self) -> usize {
        self.mismatched_legal_moves.load(Ordering::SeqCst)
    }

    pub fn successor(position: &Position) -> Position {
        match position.color() {
            Some(super::Color::White) => Position::new(FIRST_FEN),
            _ => Position::starting(),
        }
    }
}

impl MovementOracle for FlippingMovement {
    async fn movement(&self, positions: &[Position], legal_moves: &[Vec<Move>]) -> MovementResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.positions_seen
            .fetch_add(positions.len(), Ordering::SeqCst);

        if positions.len() != legal_moves.len() {
            self.mismatched_legal_moves.fetch_add(1, Ordering::SeqCst);
        }

        Ok((
            positions.iter().map(Self::successor).collect(),
            vec![Move::from(FIRST_SAN); positions.len()],
        ))
    }
}

pub struct FailingStatus(pub OracleError);

impl StatusOracle for FailingStatus {
    async fn status(&self, positions: &[Position]) -> StatusResult {
        if positions.is_empty() {
            return Ok((vec![], vec![]));
        }

        Err(self.0.clone())
    }
}

pub struct FailingMovement(pub OracleError);

impl MovementOracle for FailingMovement {
    async fn movement(&self, _: &[Position], _: &[Vec<Move>]) -> MovementResult {
        Err(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prefix_status_counts_down() {
        let status = PrefixStatus::checkmate(2);
        let positions = vec![Position::starting(); 2];

        assert_eq!(status.status(&positions).await.unwrap().0, vec![Outcome::None; 2]);
        assert_eq!(status.status(&[]).await.unwrap(), (vec![], vec![]));
        assert_eq!(status.status(&positions).await.unwrap().0, vec![Outcome::None; 2]);
        assert_eq!(
            status.status(&positions).await.unwrap().0,
            vec![Outcome::Decisive; 2]
        );
        assert_eq!(status.calls(), 3);
    }

    #[tokio::test]
    async fn test_scripted_status_pads_with_in_progress() {
        let status = ScriptedStatus::new(vec![vec![Outcome::Draw]]);
        let positions = vec![Position::starting(); 2];

        let (outcomes, legal_moves) = status.status(&positions).await.unwrap();
        assert_eq!(outcomes, vec![Outcome::Draw, Outcome::None]);
        assert!(legal_moves[0].is_empty());
        assert_eq!(legal_moves[1].len(), LEGAL_MOVES.len());

        let (outcomes, _) = status.status(&positions).await.unwrap();
        assert_eq!(outcomes, vec![Outcome::None; 2]);
    }

    #[tokio::test]
    async fn test_flipping_movement() {
        let movement = FlippingMovement::new();
        let positions = vec![Position::starting(), Position::new(FIRST_FEN)];

        let (next_positions, moves) = movement
            .movement(&positions, &[vec![], vec![]])
            .await
            .unwrap();

        assert_eq!(
            next_positions,
            vec![Position::new(FIRST_FEN), Position::starting()]
        );
        assert_eq!(moves, vec![Move::from(FIRST_SAN); 2]);
        assert_eq!(movement.calls(), 1);
        assert_eq!(movement.positions_seen(), 2);
        assert_eq!(movement.mismatched_legal_moves(), 0);
    }
}
