use super::step::{SimulationResult, SimulationStep};
use futures::stream::{self, Stream, StreamExt};
use std::time::Duration;

/// A finished simulation whose steps are handed out one at a time.
///
/// Each step is yielded after `reveal_delay`, so a caller can render them
/// progressively. Dropping the stream abandons the reveal.
#[derive(Debug, Clone)]
pub struct StagedSimulation {
    result: SimulationResult,
    reveal_delay: Duration,
}

impl StagedSimulation {
    pub(crate) fn new(result: SimulationResult, reveal_delay: Duration) -> Self {
        Self {
            result,
            reveal_delay,
        }
    }

    pub fn success(&self) -> bool {
        self.result.success
    }

    pub fn errors(&self) -> &[String] {
        &self.result.errors
    }

    pub fn step_count(&self) -> usize {
        self.result.steps.len()
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// Yields the steps in order, pausing `reveal_delay` before each one.
    pub fn steps(self) -> impl Stream<Item = SimulationStep> + Send {
        let delay = self.reveal_delay;
        stream::iter(self.result.steps).then(move |step| async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            step
        })
    }

    /// Reveals every step through `on_step`, then returns the complete result.
    pub async fn reveal<F>(self, mut on_step: F) -> SimulationResult
    where
        F: FnMut(&SimulationStep),
    {
        let success = self.result.success;
        let errors = self.result.errors.clone();
        let mut steps = Vec::with_capacity(self.step_count());

        let mut stream = Box::pin(self.steps());
        while let Some(step) = stream.next().await {
            on_step(&step);
            steps.push(step);
        }

        SimulationResult {
            success,
            steps,
            errors,
        }
    }

    /// Skips the reveal and returns the result right away.
    pub fn into_result(self) -> SimulationResult {
        self.result
    }
}
