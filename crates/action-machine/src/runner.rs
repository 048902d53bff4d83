//! Active-action bookkeeping for an external scheduler.
//!
//! A [`Runner`] holds the one action that is current and its persisted
//! stage. It enforces the reset rules of the driver contract:
//!
//! - Switching to a *different* action starts it from [`RawStage::INITIAL`]
//! - A run that ends (`Complete` or `Failed`) leaves the stage at initial,
//!   so the next invocation is always a fresh run
//!
//! Choosing *which* action comes next is left to the caller.

use core::fmt;

use crate::{ActionSet, Outcome, RawStage};

/// A run that was abandoned before it ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interrupted<N> {
    pub name: N,
    pub stage: RawStage,
}

/// Tracks the current action of an [`ActionSet`] across ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Runner<N> {
    current: Option<N>,
    stage: RawStage,
}

impl<N> Runner<N>
where
    N: Copy + Eq + fmt::Debug + fmt::Display,
{
    /// Creates a runner with no current action.
    pub const fn new() -> Self {
        Self {
            current: None,
            stage: RawStage::INITIAL,
        }
    }

    /// Rebuilds a runner from persisted parts.
    ///
    /// The stage is taken verbatim; an undeclared value surfaces as
    /// `Outcome::Failed` on the next tick.
    pub const fn resume(current: Option<N>, stage: RawStage) -> Self {
        Self { current, stage }
    }

    /// Returns the current action, if any.
    pub fn current(&self) -> Option<N> {
        self.current
    }

    /// Returns the persisted stage of the current action.
    pub fn stage(&self) -> RawStage {
        self.stage
    }

    /// Returns true if the current action is partway through a run.
    pub fn is_mid_run(&self) -> bool {
        self.current.is_some() && !self.stage.is_initial()
    }

    /// Makes `name` the current action.
    ///
    /// Selecting the action that is already current keeps its stage. Any
    /// other switch resets the stage and reports the abandoned run, if one
    /// was in flight, so the caller can deliver the interrupt hook.
    pub fn switch_to(&mut self, name: N) -> Option<Interrupted<N>> {
        if self.current == Some(name) {
            return None;
        }

        let interrupted = self.take_mid_run();
        tracing::debug!("action {:?} -> {}", self.current, name);
        self.current = Some(name);
        self.stage = RawStage::INITIAL;
        interrupted
    }

    /// Clears the current action, reporting an abandoned run if any.
    pub fn clear(&mut self) -> Option<Interrupted<N>> {
        let interrupted = self.take_mid_run();
        self.current = None;
        self.stage = RawStage::INITIAL;
        interrupted
    }

    /// Resets the stage of the current action to initial.
    pub fn reset(&mut self) {
        self.stage = RawStage::INITIAL;
    }

    /// Advances the current action once.
    ///
    /// Returns `None` if there is no current action.
    pub fn tick<S, C>(&mut self, set: &mut S, ctx: &mut C) -> Option<Outcome>
    where
        S: ActionSet<C, Name = N> + ?Sized,
        C: ?Sized,
    {
        let name = self.current?;
        let outcome = set.advance(name, &mut self.stage, ctx);

        if outcome.ends_run() {
            tracing::debug!("action {} ended: {:?}", name, outcome);
            self.stage = RawStage::INITIAL;
        }

        Some(outcome)
    }

    fn take_mid_run(&self) -> Option<Interrupted<N>> {
        match self.current {
            Some(name) if !self.stage.is_initial() => Some(Interrupted {
                name,
                stage: self.stage,
            }),
            _ => None,
        }
    }
}

impl<N> Default for Runner<N>
where
    N: Copy + Eq + fmt::Debug + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}
