use common::{filled, IndexExt};
use engine::{Color, Move, Outcome, Position};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// Histories of a batch of game instances played in lockstep.
///
/// The three outer vectors always have one entry per instance, and the entry at a given index
/// belongs to the same game in all three. Selection methods return a new trace and never
/// mutate the receiver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub positions: Vec<Vec<Position>>,
    pub moves: Vec<Vec<Move>>,
    pub outcomes: Vec<Vec<Outcome>>,
}

/// A trace split into the perspective of each side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredTrace {
    pub white: Trace,
    pub black: Trace,
}

impl Trace {
    pub fn new(positions: Vec<Vec<Position>>, moves: Vec<Vec<Move>>, outcomes: Vec<Vec<Outcome>>) -> Self {
        Self {
            positions,
            moves,
            outcomes,
        }
    }

    /// One instance per starting position, with no moves or outcomes yet.
    pub fn from_positions(positions: &[Position]) -> Self {
        Self {
            positions: positions.wrapped(),
            moves: filled(vec![], positions.len()),
            outcomes: filled(vec![], positions.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Instances whose first position has `color` to move.
    pub fn color_indices(&self, color: Color) -> Vec<usize> {
        self.positions
            .to_conditional_indices(|positions| positions.first().and_then(Position::color) == Some(color))
    }

    pub fn indexed(&self, indices: &[usize]) -> Self {
        Self {
            positions: self.positions.indexed(indices),
            moves: self.moves.indexed(indices),
            outcomes: self.outcomes.indexed(indices),
        }
    }

    pub fn colored(&self, color: Color) -> Self {
        self.indexed(&self.color_indices(color))
    }

    /// Keeps every other ply of each instance, starting from the first ply for `Even` and
    /// the second for `Odd`.
    pub fn parity_indexed(&self, parity: Parity) -> Self {
        fn inner<T: Clone>(nested: &[Vec<T>], parity: Parity) -> Vec<Vec<T>> {
            nested
                .iter()
                .map(|plies| match parity {
                    Parity::Even => plies.even_indexed(),
                    Parity::Odd => plies.odd_indexed(),
                })
                .collect()
        }

        Self {
            positions: inner(&self.positions, parity),
            moves: inner(&self.moves, parity),
            outcomes: inner(&self.outcomes, parity),
        }
    }

    pub fn not_empty_indexed(&self) -> Self {
        self.indexed(&self.positions.to_conditional_indices(|positions| !positions.is_empty()))
    }

    /// Drops trailing moves that have no resulting position.
    pub fn san_normalized(mut self) -> Self {
        for (positions, moves) in self.positions.iter().zip(self.moves.iter_mut()) {
            if moves.len() >= positions.len() {
                moves.truncate(positions.len().saturating_sub(1));
            }
        }

        self
    }

    /// Closes every instance that finished after at least one move.
    ///
    /// An empty board with the opponent to move is appended to the positions. A decisive
    /// history `[.., 1]` becomes `[.., 0, 1]` and a drawn history gets another `0.5`, so the
    /// parity of the outcome history names the winner. Moves are left alone.
    pub fn end_corrected(mut self) -> Self {
        for (positions, outcomes) in self.positions.iter_mut().zip(self.outcomes.iter_mut()) {
            let last = match outcomes.last() {
                Some(last) if outcomes.len() > 1 && last.is_terminal() => *last,
                _ => continue,
            };

            if let Some(color) = positions.last().and_then(Position::color) {
                positions.push(Position::end(color.opposite()));
            }

            if last == Outcome::Decisive {
                if let Some(last) = outcomes.last_mut() {
                    *last = Outcome::None;
                }
            }

            outcomes.push(last);
        }

        self
    }

    /// Instances of `self` followed by the instances of `other`.
    pub fn concatenated(mut self, other: Self) -> Self {
        self.positions.extend(other.positions);
        self.moves.extend(other.moves);
        self.outcomes.extend(other.outcomes);

        self
    }

    /// Appends the plies of each instance of `other` to the instance at the same index.
    pub fn zip_extended(mut self, other: Self) -> Self {
        fn extend<T>(target: &mut [Vec<T>], other: Vec<Vec<T>>) {
            for (plies, more) in target.iter_mut().zip(other) {
                plies.extend(more);
            }
        }

        extend(&mut self.positions, other.positions);
        extend(&mut self.moves, other.moves);
        extend(&mut self.outcomes, other.outcomes);

        self
    }

    /// Shape of a trace straight out of production: one outcome per position and one move
    /// between each pair of consecutive positions.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.moves.len() != self.len() || self.outcomes.len() != self.len() {
            return Err(format!(
                "Instance count mismatch: {} positions, {} moves, {} outcomes",
                self.len(),
                self.moves.len(),
                self.outcomes.len()
            ));
        }

        for (i, ((positions, moves), outcomes)) in
            self.positions.iter().zip(&self.moves).zip(&self.outcomes).enumerate()
        {
            if moves.len() + 1 != positions.len() || outcomes.len() != positions.len() {
                return Err(format!(
                    "Instance {} has {} positions, {} moves and {} outcomes",
                    i,
                    positions.len(),
                    moves.len(),
                    outcomes.len()
                ));
            }
        }

        Ok(())
    }

    /// Rebuilds each side's view of the whole batch.
    ///
    /// Instances are grouped by the side to move first. Within a group the even plies are
    /// that side's own turns and the odd plies are the opponent's replies, so white's view is
    /// the even plies of white-first games followed by the odd plies of black-first games,
    /// and the other way round for black.
    pub fn split_with_color_turn(&self) -> ColoredTrace {
        let white = self.colored(Color::White);
        let black = self.colored(Color::Black);

        let half = |trace: &Trace, parity| trace.parity_indexed(parity).not_empty_indexed().san_normalized();

        ColoredTrace {
            white: half(&white, Parity::Even).concatenated(half(&black, Parity::Odd)),
            black: half(&black, Parity::Even).concatenated(half(&white, Parity::Odd)),
        }
    }
}

impl ColoredTrace {
    /// White's instances followed by black's.
    pub fn concatenated(self) -> Trace {
        self.white.concatenated(self.black)
    }
}
