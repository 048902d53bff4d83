//! Recording owner for unit tests.

use std::cell::RefCell;

use action_machine::{Action, Outcome, RawStage, driver};

use crate::{AnimChannel, Playback, SimTime, SoundChannel, WeaponCtx, WeaponOwner, WeaponState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Anim(AnimChannel, String, Playback),
    Sound(String, SoundChannel),
    StopSound(SoundChannel),
    Melee(SimTime),
    Ready,
}

/// Owner whose clock, trigger, and clip completion are set by the test.
#[derive(Debug, Default)]
pub struct FakeOwner {
    pub now: SimTime,
    pub firing: bool,
    pub anim_done: bool,
    /// Blend frames of every completion query, in order.
    pub anim_queries: RefCell<Vec<u32>>,
    pub calls: Vec<Call>,
}

impl FakeOwner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_clock(&mut self, millis: u64) {
        self.now = self.now.after(millis);
    }

    pub fn strikes(&self) -> Vec<SimTime> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Melee(at) => Some(*at),
                _ => None,
            })
            .collect()
    }

    pub fn sounds(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Sound(cue, _) => Some(cue.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn anims(&self) -> Vec<(&str, Playback)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Anim(_, name, playback) => Some((name.as_str(), *playback)),
                _ => None,
            })
            .collect()
    }
}

impl WeaponOwner for FakeOwner {
    fn play_anim(&mut self, channel: AnimChannel, anim: &str, playback: Playback) {
        self.calls.push(Call::Anim(channel, anim.to_string(), playback));
    }

    fn is_anim_done(&self, _channel: AnimChannel, blend_frames: u32) -> bool {
        self.anim_queries.borrow_mut().push(blend_frames);
        self.anim_done
    }

    fn start_sound(&mut self, cue: &str, channel: SoundChannel) {
        self.calls.push(Call::Sound(cue.to_string(), channel));
    }

    fn stop_sound(&mut self, channel: SoundChannel) {
        self.calls.push(Call::StopSound(channel));
    }

    fn melee(&mut self) {
        self.calls.push(Call::Melee(self.now));
    }

    fn is_firing(&self) -> bool {
        self.firing
    }

    fn now(&self) -> SimTime {
        self.now
    }

    fn weapon_ready(&mut self) {
        self.calls.push(Call::Ready);
    }
}

/// Runs one driver step of `action` against `owner`.
///
/// Returns the outcome and any state the action forced during the tick.
pub fn step<A>(
    action: &mut A,
    stage: &mut RawStage,
    owner: &mut FakeOwner,
) -> (Outcome, Option<WeaponState>)
where
    A: for<'a> Action<WeaponCtx<'a>>,
{
    let mut ctx = WeaponCtx::new(owner);
    let outcome = driver::advance(action, stage, &mut ctx);
    (outcome, ctx.forced_state())
}

/// Runs a fresh run of `action` for at most `ticks` calls, with clips
/// reported finished from call `done_from` on.
///
/// Returns the initial stage followed by the stage left after each call.
pub fn record_stages<A>(
    action: &mut A,
    owner: &mut FakeOwner,
    ticks: usize,
    done_from: usize,
) -> Vec<RawStage>
where
    A: for<'a> Action<WeaponCtx<'a>>,
{
    let mut stage = RawStage::INITIAL;
    let mut seen = vec![stage];
    for tick in 0..ticks {
        owner.anim_done = tick >= done_from;
        let (outcome, _) = step(action, &mut stage, owner);
        seen.push(stage);
        if outcome.ends_run() {
            break;
        }
    }
    seen
}

pub fn never_moves_backwards(stages: &[RawStage]) -> bool {
    stages.windows(2).all(|pair| pair[0] <= pair[1])
}
