//! Engine stand-in with timed clips.

use std::collections::HashMap;

use weapon_core::{AnimChannel, Playback, SimTime, SoundChannel, WeaponOwner};

/// Clip length used for animations missing from the table.
const DEFAULT_CLIP_MS: u64 = 300;

#[derive(Clone, Debug)]
struct ActiveClip {
    name: String,
    started: SimTime,
    playback: Playback,
}

/// Owner that plays clips for fixed lengths and logs every effect.
#[derive(Debug)]
pub struct ScriptedOwner {
    now: SimTime,
    trigger: bool,
    frame_ms: u64,
    lengths: HashMap<String, u64>,
    clips: HashMap<AnimChannel, ActiveClip>,
    strikes: Vec<SimTime>,
    ready_count: usize,
}

impl ScriptedOwner {
    pub fn new(frame_ms: u64) -> Self {
        let lengths = [
            ("raise", 400),
            ("putaway", 400),
            ("melee_start", 480),
            ("melee_end", 400),
        ]
        .into_iter()
        .map(|(name, ms)| (name.to_string(), ms))
        .collect();

        Self {
            now: SimTime::ZERO,
            trigger: false,
            frame_ms,
            lengths,
            clips: HashMap::new(),
            strikes: Vec::new(),
            ready_count: 0,
        }
    }

    /// Overrides the length of one clip.
    pub fn with_clip(mut self, name: &str, length_ms: u64) -> Self {
        self.lengths.insert(name.to_string(), length_ms);
        self
    }

    pub fn advance(&mut self, millis: u64) {
        self.now = self.now.after(millis);
    }

    pub fn set_trigger(&mut self, held: bool) {
        self.trigger = held;
    }

    pub fn strikes(&self) -> &[SimTime] {
        &self.strikes
    }

    pub fn ready_count(&self) -> usize {
        self.ready_count
    }

    fn clip_length(&self, name: &str) -> u64 {
        self.lengths.get(name).copied().unwrap_or(DEFAULT_CLIP_MS)
    }
}

impl WeaponOwner for ScriptedOwner {
    fn play_anim(&mut self, channel: AnimChannel, anim: &str, playback: Playback) {
        tracing::debug!("[{}] anim {} on {} ({:?})", self.now, anim, channel, playback);
        self.clips.insert(
            channel,
            ActiveClip {
                name: anim.to_string(),
                started: self.now,
                playback,
            },
        );
    }

    fn is_anim_done(&self, channel: AnimChannel, blend_frames: u32) -> bool {
        let Some(clip) = self.clips.get(&channel) else {
            return false;
        };
        if clip.playback == Playback::Loop {
            return false;
        }

        let blend_ms = u64::from(blend_frames).saturating_mul(self.frame_ms);
        self.now.since(clip.started).saturating_add(blend_ms) >= self.clip_length(&clip.name)
    }

    fn start_sound(&mut self, cue: &str, channel: SoundChannel) {
        tracing::debug!("[{}] sound {} on {}", self.now, cue, channel);
    }

    fn stop_sound(&mut self, channel: SoundChannel) {
        tracing::debug!("[{}] stop sound on {}", self.now, channel);
    }

    fn melee(&mut self) {
        tracing::debug!("[{}] strike", self.now);
        self.strikes.push(self.now);
    }

    fn is_firing(&self) -> bool {
        self.trigger
    }

    fn now(&self) -> SimTime {
        self.now
    }

    fn weapon_ready(&mut self) {
        tracing::debug!("[{}] weapon ready", self.now);
        self.ready_count += 1;
    }
}
