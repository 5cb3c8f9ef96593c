use engine::{MovementOracle, OracleError, Position, StatusOracle};
use log::{debug, info, warn};
use std::time::Instant;

use super::{ColoredTrace, OneStepProduct, Trace};

/// Decides how many steps a production run may take.
pub trait StepBudget {
    /// Whether another step may run once `taken` steps have run.
    fn allows(&self, taken: usize) -> bool;
}

/// At most the given number of steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiniteSteps(pub usize);

/// Runs until every instance has finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Infinite;

impl StepBudget for FiniteSteps {
    fn allows(&self, taken: usize) -> bool {
        taken < self.0
    }
}

impl StepBudget for Infinite {
    fn allows(&self, _taken: usize) -> bool {
        true
    }
}

impl<T: StepBudget + ?Sized> StepBudget for &T {
    fn allows(&self, taken: usize) -> bool {
        (**self).allows(taken)
    }
}

/// Plays batches of games with one status oracle and a movement oracle per side.
pub struct TraceProducer<S, W, B, K> {
    status: S,
    white: W,
    black: B,
    budget: K,
}

impl<S, W, B, K> TraceProducer<S, W, B, K>
where
    S: StatusOracle,
    W: MovementOracle,
    B: MovementOracle,
    K: StepBudget,
{
    pub fn new(status: S, white: W, black: B, budget: K) -> Self {
        Self {
            status,
            white,
            black,
            budget,
        }
    }

    /// Steps `product` until the budget runs out or nothing is left to play.
    pub async fn n_step_produced(&self, mut product: OneStepProduct) -> Result<OneStepProduct, OracleError> {
        let mut taken = 0;

        while !product.is_empty() && self.budget.allows(taken) {
            debug!(
                "Step {}: {} white and {} black instances to play",
                taken,
                product.white.len(),
                product.black.len()
            );

            product = product
                .one_step_produced(&self.status, &self.white, &self.black)
                .await?;
            taken += 1;
        }

        debug!("Stopped after {} steps", taken);

        Ok(product)
    }

    /// Plays one game per starting position and returns the raw trace.
    ///
    /// When the budget runs out first, the positions still in play get one last status
    /// query so every instance ends with an outcome.
    pub async fn produced(&self, positions: &[Position]) -> Result<Trace, OracleError> {
        let start = Instant::now();

        let mut product = self
            .n_step_produced(OneStepProduct::from_positions(positions))
            .await?;

        if !product.is_empty() {
            info!(
                "Step budget exhausted with {} white and {} black instances in play",
                product.white.len(),
                product.black.len()
            );

            product = product.none_step_produced(&self.status).await?;
        }

        let trace = product.into_trace();

        if let Err(violation) = trace.check_invariants() {
            warn!("Produced trace is malformed: {}", violation);
        }

        info!(
            "Produced {} instances in {:.2}s",
            trace.len(),
            start.elapsed().as_secs_f32()
        );

        Ok(trace)
    }

    /// Plays like [`Self::produced`], then end corrects and splits the trace into each
    /// side's perspective.
    pub async fn produced_with_splitting(&self, positions: &[Position]) -> Result<ColoredTrace, OracleError> {
        let trace = self.produced(positions).await?;

        Ok(trace.end_corrected().split_with_color_turn())
    }
}
