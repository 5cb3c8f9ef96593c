use common::{disjoint_unioned, IndexExt};
use engine::{Color, Move, MovementOracle, OracleError, Outcome, Position, StatusOracle};
use futures::try_join;

use super::Trace;

/// Latest positions of the instances waiting on one side's move, with their indices in the
/// production trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    pub indices: Vec<usize>,
    pub positions: Vec<Position>,
}

/// What one side's oracle calls produced during a step.
#[derive(Debug, Default)]
struct SideStep {
    /// Every instance the status oracle was asked about.
    queried: Vec<usize>,
    outcomes: Vec<Outcome>,
    /// Instances that were still running and moved.
    moved: Vec<usize>,
    positions: Vec<Position>,
    moves: Vec<Move>,
}

/// Production state between steps: the accumulated trace plus the batch each side has to
/// play next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OneStepProduct {
    pub trace: Trace,
    pub white: Batch,
    pub black: Batch,
}

impl Batch {
    /// Instances of `trace` whose first position has `color` to move, at their latest position.
    pub fn colored(trace: &Trace, color: Color) -> Self {
        let indices = trace.color_indices(color);
        let positions = indices
            .iter()
            .filter_map(|&i| trace.positions[i].last().cloned())
            .collect();

        Self { indices, positions }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    async fn moved<S, M>(&self, status: &S, movement: &M) -> Result<SideStep, OracleError>
    where
        S: StatusOracle,
        M: MovementOracle,
    {
        if self.is_empty() {
            return Ok(SideStep::default());
        }

        let (outcomes, legal_moves) = status.status(&self.positions).await?;
        let running = outcomes.to_conditional_indices(|outcome| !outcome.is_terminal());

        let (positions, moves) = if running.is_empty() {
            (vec![], vec![])
        } else {
            movement
                .movement(&self.positions.indexed(&running), &legal_moves.indexed(&running))
                .await?
        };

        Ok(SideStep {
            queried: self.indices.clone(),
            outcomes,
            moved: self.indices.indexed(&running),
            positions,
            moves,
        })
    }

    async fn last_status_updated<S: StatusOracle>(&self, status: &S) -> Result<SideStep, OracleError> {
        if self.is_empty() {
            return Ok(SideStep::default());
        }

        let (outcomes, _) = status.status(&self.positions).await?;

        Ok(SideStep {
            queried: self.indices.clone(),
            outcomes,
            ..SideStep::default()
        })
    }
}

impl SideStep {
    /// The batch that plays next in these instances, which is the opposite side.
    fn into_next_batch(self) -> Batch {
        Batch {
            indices: self.moved,
            positions: self.positions,
        }
    }
}

impl OneStepProduct {
    pub fn from_trace(trace: Trace) -> Self {
        let white = Batch::colored(&trace, Color::White);
        let black = Batch::colored(&trace, Color::Black);

        Self { trace, white, black }
    }

    pub fn from_positions(positions: &[Position]) -> Self {
        Self::from_trace(Trace::from_positions(positions))
    }

    /// True once no instance is waiting on either side.
    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// Plays one ply in every running instance.
    ///
    /// Both sides are driven concurrently. The instances white moved are black's to play
    /// next and the other way round.
    pub async fn one_step_produced<S, W, B>(
        self,
        status: &S,
        white_movement: &W,
        black_movement: &B,
    ) -> Result<Self, OracleError>
    where
        S: StatusOracle,
        W: MovementOracle,
        B: MovementOracle,
    {
        let (white, black) = try_join!(
            self.white.moved(status, white_movement),
            self.black.moved(status, black_movement)
        )?;

        Ok(self.merged(white, black))
    }

    /// Records the final status of every running instance without moving. The product is
    /// empty afterwards.
    pub async fn none_step_produced<S: StatusOracle>(self, status: &S) -> Result<Self, OracleError> {
        let (white, black) = try_join!(
            self.white.last_status_updated(status),
            self.black.last_status_updated(status)
        )?;

        Ok(self.merged(white, black))
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }

    fn merged(self, white: SideStep, black: SideStep) -> Self {
        let len = self.trace.len();

        let ply = Trace::new(
            disjoint_unioned(
                vec![],
                len,
                [
                    (white.moved.clone(), white.positions.wrapped()),
                    (black.moved.clone(), black.positions.wrapped()),
                ],
            ),
            disjoint_unioned(
                vec![],
                len,
                [
                    (white.moved.clone(), white.moves.wrapped()),
                    (black.moved.clone(), black.moves.wrapped()),
                ],
            ),
            disjoint_unioned(
                vec![],
                len,
                [
                    (white.queried.clone(), white.outcomes.wrapped()),
                    (black.queried.clone(), black.outcomes.wrapped()),
                ],
            ),
        );

        Self {
            trace: self.trace.zip_extended(ply),
            white: black.into_next_batch(),
            black: white.into_next_batch(),
        }
    }
}
