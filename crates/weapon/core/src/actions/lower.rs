use action_machine::{Action, Outcome};

use crate::{AnimChannel, Playback, WeaponConfig, WeaponCtx, WeaponState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::FromRepr)]
#[repr(u8)]
pub enum LowerStage {
    /// Start the put-away clip.
    #[default]
    Start = 0,
    /// Wait for the clip, then holster.
    Wait = 1,
}

/// Puts the weapon away.
///
/// This is the only action that forces a top-level state: holstering ends
/// the weapon's active lifecycle.
#[derive(Clone, Debug)]
pub struct Lower {
    anim: String,
    blend_frames: u32,
}

impl Lower {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            anim: config.anims.lower.clone(),
            blend_frames: config.blend.lower,
        }
    }
}

impl<'a> Action<WeaponCtx<'a>> for Lower {
    type Stage = LowerStage;

    fn advance(&mut self, stage: &mut LowerStage, ctx: &mut WeaponCtx<'a>) -> Outcome {
        match stage {
            LowerStage::Start => {
                ctx.owner
                    .play_anim(AnimChannel::All, &self.anim, Playback::Once);
                *stage = LowerStage::Wait;
                Outcome::InProgress
            }
            LowerStage::Wait => {
                if !ctx.owner.is_anim_done(AnimChannel::All, self.blend_frames) {
                    return Outcome::InProgress;
                }
                ctx.force_state(WeaponState::Holstered);
                Outcome::Complete
            }
        }
    }
}
