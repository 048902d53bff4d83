use action_machine::{Action, Outcome, RawStage, Stage};

use crate::WeaponCtx;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ReloadStage {
    #[default]
    Start = 0,
}

impl Stage for ReloadStage {
    /// Reload finishes in one call, so every persisted value is a fresh run.
    fn from_raw(_raw: RawStage) -> Option<Self> {
        Some(ReloadStage::Start)
    }

    fn into_raw(self) -> RawStage {
        RawStage::new(self as u8)
    }
}

/// Reload slot of the behavior set.
///
/// Melee weapons carry no ammunition, so this finishes immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reload;

impl<'a> Action<WeaponCtx<'a>> for Reload {
    type Stage = ReloadStage;

    fn advance(&mut self, _stage: &mut ReloadStage, _ctx: &mut WeaponCtx<'a>) -> Outcome {
        Outcome::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeOwner, step};

    #[test]
    fn completes_on_first_call_without_side_effects() {
        let mut owner = FakeOwner::new();
        owner.firing = true;
        let mut stage = RawStage::INITIAL;

        assert_eq!(step(&mut Reload, &mut stage, &mut owner).0, Outcome::Complete);
        assert!(owner.calls.is_empty());
    }

    #[test]
    fn completes_from_any_leftover_stage() {
        let mut owner = FakeOwner::new();

        for raw in [1, 7, u8::MAX] {
            let mut stage = RawStage::new(raw);
            assert_eq!(step(&mut Reload, &mut stage, &mut owner).0, Outcome::Complete);
        }
        assert!(owner.calls.is_empty());
    }
}
