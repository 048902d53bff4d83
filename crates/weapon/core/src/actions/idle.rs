use action_machine::{Action, Outcome};

use crate::{AnimChannel, Playback, WeaponConfig, WeaponCtx};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::FromRepr)]
#[repr(u8)]
pub enum IdleStage {
    /// Report ready and start the idle cycle.
    #[default]
    Start = 0,
    /// Finish without waiting on the cycle.
    Wait = 1,
}

/// Reports the weapon ready and loops the idle cycle.
///
/// The cycle never finishes on its own, so Idle completes on its second
/// invocation; only a new request or the trigger moves the weapon on.
#[derive(Clone, Debug)]
pub struct Idle {
    anim: String,
}

impl Idle {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            anim: config.anims.idle.clone(),
        }
    }
}

impl<'a> Action<WeaponCtx<'a>> for Idle {
    type Stage = IdleStage;

    fn advance(&mut self, stage: &mut IdleStage, ctx: &mut WeaponCtx<'a>) -> Outcome {
        match stage {
            IdleStage::Start => {
                ctx.owner.weapon_ready();
                ctx.owner
                    .play_anim(AnimChannel::All, &self.anim, Playback::Loop);
                *stage = IdleStage::Wait;
                Outcome::InProgress
            }
            IdleStage::Wait => Outcome::Complete,
        }
    }
}
