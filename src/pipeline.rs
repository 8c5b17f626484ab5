//! Ordered chains of dependent backend calls.
//!
//! DESIGN
//! ======
//! Some user actions need one call's output as the next call's input
//! (resolve a lecture instance, then file an appeal against it). A
//! `Pipeline` makes that order explicit: each named step consumes the
//! previous step's typed output and the chain stops at the first failure,
//! reporting which step failed. Independent calls do not belong here; run
//! them concurrently with `futures::join!` instead.

use std::future::Future;

use futures::future::LocalBoxFuture;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("step `{step}` failed: {source}")]
pub struct PipelineError {
    pub step: &'static str,
    pub source: ApiError,
}

type Runner<I, O> = Box<dyn FnOnce(I) -> LocalBoxFuture<'static, Result<O, PipelineError>>>;

pub struct Pipeline<I, O> {
    steps: Vec<&'static str>,
    run: Runner<I, O>,
}

impl<I: 'static> Pipeline<I, I> {
    /// Identity pipeline; add steps with [`Pipeline::then`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            run: Box::new(|input| Box::pin(async move { Ok(input) })),
        }
    }
}

impl<I: 'static> Default for Pipeline<I, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: 'static, O: 'static> Pipeline<I, O> {
    /// Append a step that runs after every step already added.
    #[must_use]
    pub fn then<N, F, Fut>(self, name: &'static str, step: F) -> Pipeline<I, N>
    where
        N: 'static,
        F: FnOnce(O) -> Fut + 'static,
        Fut: Future<Output = Result<N, ApiError>> + 'static,
    {
        let prev = self.run;
        let mut steps = self.steps;
        steps.push(name);
        Pipeline {
            steps,
            run: Box::new(move |input| {
                Box::pin(async move {
                    let value = prev(input).await?;
                    tracing::debug!(step = name, "running pipeline step");
                    step(value).await.map_err(|source| {
                        tracing::warn!(step = name, error = %source, "pipeline step failed");
                        PipelineError { step: name, source }
                    })
                })
            }),
        }
    }

    /// Step names in execution order.
    #[must_use]
    pub fn steps(&self) -> &[&'static str] {
        &self.steps
    }

    /// Run every step in order.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's name and error; later steps do not
    /// run.
    pub async fn run(self, input: I) -> Result<O, PipelineError> {
        (self.run)(input).await
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
