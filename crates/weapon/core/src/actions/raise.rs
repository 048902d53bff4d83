use action_machine::{Action, Outcome};

use crate::{AnimChannel, Playback, WeaponConfig, WeaponCtx};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::FromRepr)]
#[repr(u8)]
pub enum RaiseStage {
    /// Start the raise clip.
    #[default]
    Start = 0,
    /// Wait for the clip, minus its blend into idle.
    Wait = 1,
}

/// Brings the weapon up after it is equipped.
#[derive(Clone, Debug)]
pub struct Raise {
    anim: String,
    blend_frames: u32,
}

impl Raise {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            anim: config.anims.raise.clone(),
            blend_frames: config.blend.raise,
        }
    }
}

impl<'a> Action<WeaponCtx<'a>> for Raise {
    type Stage = RaiseStage;

    fn advance(&mut self, stage: &mut RaiseStage, ctx: &mut WeaponCtx<'a>) -> Outcome {
        match stage {
            RaiseStage::Start => {
                ctx.owner
                    .play_anim(AnimChannel::All, &self.anim, Playback::Once);
                *stage = RaiseStage::Wait;
                Outcome::InProgress
            }
            RaiseStage::Wait => Outcome::complete_if(
                ctx.owner.is_anim_done(AnimChannel::All, self.blend_frames),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use action_machine::RawStage;

    use super::*;
    use crate::testing::{FakeOwner, never_moves_backwards, record_stages, step};

    #[test]
    fn plays_clip_then_waits_for_blend_window() {
        let mut raise = Raise::new(&WeaponConfig::chainsaw());
        let mut owner = FakeOwner::new();
        let mut stage = RawStage::INITIAL;

        assert_eq!(step(&mut raise, &mut stage, &mut owner).0, Outcome::InProgress);
        assert_eq!(owner.anims(), vec![("raise", Playback::Once)]);

        assert_eq!(step(&mut raise, &mut stage, &mut owner).0, Outcome::InProgress);
        owner.anim_done = true;
        assert_eq!(step(&mut raise, &mut stage, &mut owner).0, Outcome::Complete);

        assert_eq!(*owner.anim_queries.borrow(), vec![4, 4]);
        assert_eq!(owner.anims().len(), 1); // clip started once
    }

    #[test]
    fn stages_never_move_backwards() {
        let mut raise = Raise::new(&WeaponConfig::chainsaw());
        let mut owner = FakeOwner::new();

        let seen = record_stages(&mut raise, &mut owner, 6, 4);
        assert_eq!(seen.len(), 6); // initial plus five calls
        assert!(never_moves_backwards(&seen));
    }
}
