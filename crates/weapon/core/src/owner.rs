//! Capabilities the weapon consumes from its owning actor.
//!
//! Rendering, animation blending, audio, hit detection, and input live
//! outside this crate. Actions reach them only through [`WeaponOwner`],
//! which is handed to every invocation as a parameter so tests can
//! substitute a fake.

use crate::SimTime;

/// Skeletal animation channel a clip plays on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AnimChannel {
    /// Every bone of the weapon model.
    All,
    /// Upper body of the owner's model.
    Torso,
}

/// Whether a clip plays once or loops until replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Playback {
    Once,
    Loop,
}

/// Audio channel a sound cue is started on.
///
/// Starting a cue on a channel replaces whatever that channel was playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SoundChannel {
    Weapon,
}

/// Engine-side operations available to weapon actions.
pub trait WeaponOwner {
    /// Starts `anim` on `channel`, one-shot or looping.
    fn play_anim(&mut self, channel: AnimChannel, anim: &str, playback: Playback);

    /// Returns true once the clip on `channel` has finished, treating the
    /// trailing `blend_frames` as already finished.
    ///
    /// A missing or unknown clip is reported as not finished.
    fn is_anim_done(&self, channel: AnimChannel, blend_frames: u32) -> bool;

    /// Starts a fire-and-forget sound cue.
    fn start_sound(&mut self, cue: &str, channel: SoundChannel);

    /// Silences `channel`.
    fn stop_sound(&mut self, channel: SoundChannel);

    /// Applies one instance of the weapon's contact effect.
    fn melee(&mut self);

    /// Returns true while the owner still wants to fire.
    fn is_firing(&self) -> bool;

    /// Reads the simulation clock.
    fn now(&self) -> SimTime;

    /// Tells upstream systems the weapon accepts new commands.
    fn weapon_ready(&mut self);
}
