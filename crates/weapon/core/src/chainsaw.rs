//! The chainsaw's behavior set.

use core::str::FromStr;

use action_machine::{ActionSet, Outcome, RawStage, driver};

use crate::{Fire, Idle, Lower, Raise, Reload, WeaponAction, WeaponConfig, WeaponCtx, WeaponError};

/// Raise, Lower, Idle, Reload, and Fire for a continuous melee weapon.
///
/// Dispatches by [`WeaponAction`] to the action bodies. The persisted stage
/// belongs to whichever action the caller names; this type never reads it.
#[derive(Clone, Debug)]
pub struct Chainsaw {
    raise: Raise,
    lower: Lower,
    idle: Idle,
    reload: Reload,
    fire: Fire,
}

impl Chainsaw {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            raise: Raise::new(config),
            lower: Lower::new(config),
            idle: Idle::new(config),
            reload: Reload,
            fire: Fire::new(config),
        }
    }

    /// Returns the fire action, e.g. to inspect its gate.
    pub fn fire(&self) -> &Fire {
        &self.fire
    }

    /// Advances an action addressed by its display name (`"Fire"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`WeaponError::UnknownAction`] if `name` is not an action of
    /// this set; nothing is invoked in that case.
    pub fn advance_named(
        &mut self,
        name: &str,
        stage: &mut RawStage,
        ctx: &mut WeaponCtx<'_>,
    ) -> Result<Outcome, WeaponError> {
        let action = WeaponAction::from_str(name)
            .map_err(|_| WeaponError::UnknownAction(name.to_string()))?;
        Ok(self.advance(action, stage, ctx))
    }
}

impl Default for Chainsaw {
    fn default() -> Self {
        Self::new(&WeaponConfig::chainsaw())
    }
}

impl<'a> ActionSet<WeaponCtx<'a>> for Chainsaw {
    type Name = WeaponAction;

    fn init(&mut self) {
        self.fire.reset_gate();
    }

    fn advance(
        &mut self,
        name: WeaponAction,
        stage: &mut RawStage,
        ctx: &mut WeaponCtx<'a>,
    ) -> Outcome {
        match name {
            WeaponAction::Raise => driver::advance(&mut self.raise, stage, ctx),
            WeaponAction::Lower => driver::advance(&mut self.lower, stage, ctx),
            WeaponAction::Idle => driver::advance(&mut self.idle, stage, ctx),
            WeaponAction::Reload => driver::advance(&mut self.reload, stage, ctx),
            WeaponAction::Fire => driver::advance(&mut self.fire, stage, ctx),
        }
    }

    fn interrupt(&mut self, name: WeaponAction, stage: RawStage, ctx: &mut WeaponCtx<'a>) {
        match name {
            WeaponAction::Raise => driver::interrupt(&mut self.raise, stage, ctx),
            WeaponAction::Lower => driver::interrupt(&mut self.lower, stage, ctx),
            WeaponAction::Idle => driver::interrupt(&mut self.idle, stage, ctx),
            WeaponAction::Reload => driver::interrupt(&mut self.reload, stage, ctx),
            WeaponAction::Fire => driver::interrupt(&mut self.fire, stage, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimTime;
    use crate::testing::FakeOwner;

    #[test]
    fn stage_numbers_are_action_local() {
        let mut chainsaw = Chainsaw::default();
        let mut owner = FakeOwner::new();
        let mut ctx = WeaponCtx::new(&mut owner);

        // Stage 1 is Idle's final wait but only Fire's windup wait
        let mut stage = RawStage::new(1);
        assert_eq!(
            chainsaw.advance(WeaponAction::Idle, &mut stage, &mut ctx),
            Outcome::Complete
        );
        let mut stage = RawStage::new(1);
        assert_eq!(
            chainsaw.advance(WeaponAction::Fire, &mut stage, &mut ctx),
            Outcome::InProgress
        );

        // Stage 5 is only declared by Fire
        let mut stage = RawStage::new(5);
        assert_eq!(
            chainsaw.advance(WeaponAction::Raise, &mut stage, &mut ctx),
            Outcome::Failed
        );
    }

    #[test]
    fn fire_and_reload_accept_leftover_stages() {
        let mut chainsaw = Chainsaw::default();
        let mut owner = FakeOwner::new();
        owner.anim_done = true;
        let mut ctx = WeaponCtx::new(&mut owner);

        let mut stage = RawStage::new(8);
        assert_eq!(
            chainsaw.advance(WeaponAction::Fire, &mut stage, &mut ctx),
            Outcome::Complete
        );
        let mut stage = RawStage::new(1);
        assert_eq!(
            chainsaw.advance(WeaponAction::Reload, &mut stage, &mut ctx),
            Outcome::Complete
        );
    }

    #[test]
    fn advance_named_parses_action_names() {
        let mut chainsaw = Chainsaw::default();
        let mut owner = FakeOwner::new();
        let mut ctx = WeaponCtx::new(&mut owner);
        let mut stage = RawStage::INITIAL;

        assert_eq!(
            chainsaw.advance_named("Reload", &mut stage, &mut ctx),
            Ok(Outcome::Complete)
        );
        assert_eq!(
            chainsaw.advance_named("Holster", &mut stage, &mut ctx),
            Err(WeaponError::UnknownAction("Holster".into()))
        );
    }

    #[test]
    fn init_resets_fire_gate() {
        let mut chainsaw = Chainsaw::default();
        let mut owner = FakeOwner::new();
        owner.now = SimTime::from_millis(750);
        owner.anim_done = true;
        owner.firing = true;

        let mut ctx = WeaponCtx::new(&mut owner);
        let mut stage = RawStage::new(4); // loop entry
        chainsaw.advance(WeaponAction::Fire, &mut stage, &mut ctx);
        assert_eq!(chainsaw.fire().next_strike(), SimTime::from_millis(750));

        ActionSet::<WeaponCtx<'_>>::init(&mut chainsaw);
        assert_eq!(chainsaw.fire().next_strike(), SimTime::ZERO);
    }
}
