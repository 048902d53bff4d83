//! Per-tick context handed to weapon actions.

use crate::{WeaponOwner, WeaponState};

/// Capabilities available to an action during one tick.
///
/// Wraps the owner's engine capabilities and records a forced top-level
/// state, which only [`crate::Lower`] uses (to holster the weapon).
pub struct WeaponCtx<'a> {
    pub owner: &'a mut dyn WeaponOwner,
    forced: Option<WeaponState>,
}

impl<'a> WeaponCtx<'a> {
    pub fn new(owner: &'a mut dyn WeaponOwner) -> Self {
        Self {
            owner,
            forced: None,
        }
    }

    /// Jumps the behavior set to `state` once this tick finishes.
    pub fn force_state(&mut self, state: WeaponState) {
        self.forced = Some(state);
    }

    /// Returns the state forced this tick, if any.
    pub fn forced_state(&self) -> Option<WeaponState> {
        self.forced
    }

    pub(crate) fn take_forced(&mut self) -> Option<WeaponState> {
        self.forced.take()
    }
}
