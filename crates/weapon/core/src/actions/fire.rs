//! Continuous fire: windup, rate-gated attack loop, wind-down.
//!
//! The windup is split into two separately awaited phases so the attack
//! sound and the windup clip can diverge in timing without extra
//! synchronization. Strikes inside the loop are scheduled on the simulation
//! clock, not once per tick.

use action_machine::{Action, Outcome, RawStage, Stage};

use crate::{
    AnimChannel, AnimNames, Playback, SimTime, SoundChannel, SoundCues, WeaponConfig, WeaponCtx,
};

/// Stages of a fire run, in execution order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::FromRepr)]
#[repr(u8)]
pub enum FireStage {
    /// Start the windup clip, strike once, play the start-attack cue.
    #[default]
    Windup = 0,
    /// Wait for the windup clip, minus its blend window.
    WindupWait = 1,
    /// Play the sustained-attack cue.
    AttackCue = 2,
    /// Wait for the rest of the windup clip.
    WindupSettle = 3,
    /// Start the attack loop and open the fire gate.
    EnterLoop = 4,
    /// Strike whenever the gate allows, until the trigger is released.
    Sustain = 5,
    /// Play the stop-attack cue and the wind-down clip.
    StopCue = 6,
    /// Wait for the wind-down clip.
    WindDown = 7,
}

impl Stage for FireStage {
    /// Values past the last stage resume the wind-down wait.
    fn from_raw(raw: RawStage) -> Option<Self> {
        Some(Self::from_repr(raw.get()).unwrap_or(FireStage::WindDown))
    }

    fn into_raw(self) -> RawStage {
        RawStage::new(self as u8)
    }
}

/// Chainsaw-style continuous attack.
#[derive(Clone, Debug)]
pub struct Fire {
    anims: AnimNames,
    sounds: SoundCues,
    windup_blend: u32,
    fire_interval_ms: u64,
    stop_sound_on_interrupt: bool,
    /// Earliest time the next gated strike may land. Only meaningful
    /// during [`FireStage::Sustain`].
    next_strike: SimTime,
}

impl Fire {
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            anims: config.anims.clone(),
            sounds: config.sounds.clone(),
            windup_blend: config.blend.windup,
            fire_interval_ms: config.fire_interval_ms,
            stop_sound_on_interrupt: config.stop_sound_on_interrupt,
            next_strike: SimTime::ZERO,
        }
    }

    /// Returns the fire gate.
    pub fn next_strike(&self) -> SimTime {
        self.next_strike
    }

    pub fn reset_gate(&mut self) {
        self.next_strike = SimTime::ZERO;
    }

    fn sustain(&mut self, stage: &mut FireStage, ctx: &mut WeaponCtx<'_>) {
        if !ctx.owner.is_firing() {
            *stage = FireStage::StopCue;
            return;
        }

        let now = ctx.owner.now();
        if now >= self.next_strike {
            ctx.owner.melee();
            self.next_strike = now.after(self.fire_interval_ms);
            tracing::trace!("strike at {}, next at {}", now, self.next_strike);
        }
    }
}

impl<'a> Action<WeaponCtx<'a>> for Fire {
    type Stage = FireStage;

    fn advance(&mut self, stage: &mut FireStage, ctx: &mut WeaponCtx<'a>) -> Outcome {
        match stage {
            FireStage::Windup => {
                ctx.owner
                    .play_anim(AnimChannel::All, &self.anims.fire_start, Playback::Once);
                ctx.owner.melee();
                ctx.owner
                    .start_sound(&self.sounds.start_attack, SoundChannel::Weapon);
                *stage = FireStage::WindupWait;
            }
            FireStage::WindupWait => {
                if ctx.owner.is_anim_done(AnimChannel::All, self.windup_blend) {
                    *stage = FireStage::AttackCue;
                }
            }
            FireStage::AttackCue => {
                ctx.owner
                    .start_sound(&self.sounds.attack, SoundChannel::Weapon);
                *stage = FireStage::WindupSettle;
            }
            FireStage::WindupSettle => {
                if ctx.owner.is_anim_done(AnimChannel::All, 0) {
                    *stage = FireStage::EnterLoop;
                }
            }
            FireStage::EnterLoop => {
                ctx.owner
                    .play_anim(AnimChannel::All, &self.anims.fire_loop, Playback::Loop);
                self.next_strike = ctx.owner.now();
                *stage = FireStage::Sustain;
            }
            FireStage::Sustain => self.sustain(stage, ctx),
            FireStage::StopCue => {
                ctx.owner
                    .start_sound(&self.sounds.stop_attack, SoundChannel::Weapon);
                ctx.owner
                    .play_anim(AnimChannel::All, &self.anims.fire_end, Playback::Once);
                *stage = FireStage::WindDown;
            }
            FireStage::WindDown => {
                return Outcome::complete_if(ctx.owner.is_anim_done(AnimChannel::All, 0));
            }
        }

        Outcome::InProgress
    }

    fn on_interrupt(&mut self, stage: FireStage, ctx: &mut WeaponCtx<'a>) {
        if self.stop_sound_on_interrupt {
            tracing::debug!("fire interrupted at {:?}; stopping weapon sound", stage);
            ctx.owner.stop_sound(SoundChannel::Weapon);
        }
    }
}
