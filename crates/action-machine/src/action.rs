//! Core action traits.
//!
//! This module defines the [`Action`] trait, the fundamental abstraction for
//! a resumable multi-tick behavior, and [`ActionSet`], which groups named
//! actions behind a single dispatch point. Both are generic over a context
//! type `C` carrying the capabilities an action may use.

use core::fmt;

use crate::{Outcome, RawStage, Stage};

/// A resumable behavior that is re-entered once per tick.
pub trait Action<C: ?Sized> {
    /// The action's private stage numbering.
    type Stage: Stage;

    /// Advance this action by one tick.
    ///
    /// # Arguments
    ///
    /// * `stage` - The resume point written by the previous call (or the
    ///   default stage on a fresh run). The action mutates it in place.
    /// * `ctx` - Capabilities the action may invoke this tick.
    ///
    /// # Returns
    ///
    /// - `Outcome::InProgress` to be called again next tick
    /// - `Outcome::Complete` when the run is over
    fn advance(&mut self, stage: &mut Self::Stage, ctx: &mut C) -> Outcome;

    /// Called when the scheduler abandons a run that has not finished.
    ///
    /// The default does nothing: in-flight state is simply dropped and any
    /// started side effect is left for the next action to override.
    fn on_interrupt(&mut self, _stage: Self::Stage, _ctx: &mut C) {}
}

/// A family of actions addressed by name.
///
/// This is the surface an external scheduler drives: it owns the current
/// name and the persisted stage, and calls [`ActionSet::advance`] once per tick.
pub trait ActionSet<C: ?Sized> {
    /// Identity of an action within this set.
    type Name: Copy + Eq + fmt::Debug + fmt::Display;

    /// Resets persistent fields shared across runs.
    fn init(&mut self);

    /// Advance the named action by one tick.
    ///
    /// Returns `Outcome::Failed` when `stage` is not one the action declares.
    fn advance(&mut self, name: Self::Name, stage: &mut RawStage, ctx: &mut C) -> Outcome;

    /// Notifies the named action that its run at `stage` was abandoned.
    fn interrupt(&mut self, _name: Self::Name, _stage: RawStage, _ctx: &mut C) {}
}
