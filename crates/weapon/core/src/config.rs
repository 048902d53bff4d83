//! Weapon definition: clip names, sound cues, blend windows, and fire rate.

/// Tunable parameters of a continuous melee weapon.
///
/// Defaults describe the chainsaw. Data files may override any subset of
/// fields; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponConfig {
    /// Minimum time between two gated strikes while the trigger is held.
    pub fire_interval_ms: u64,

    pub anims: AnimNames,
    pub sounds: SoundCues,
    pub blend: BlendFrames,

    /// Stop the weapon sound channel when a fire run is interrupted.
    ///
    /// Off by default: an interrupted action leaves its sounds playing and
    /// the next action overrides them.
    pub stop_sound_on_interrupt: bool,
}

impl WeaponConfig {
    // ===== chainsaw defaults =====
    pub const DEFAULT_FIRE_INTERVAL_MS: u64 = 100;

    pub fn new() -> Self {
        Self::chainsaw()
    }

    pub fn chainsaw() -> Self {
        Self {
            fire_interval_ms: Self::DEFAULT_FIRE_INTERVAL_MS,
            anims: AnimNames::default(),
            sounds: SoundCues::default(),
            blend: BlendFrames::default(),
            stop_sound_on_interrupt: false,
        }
    }

    pub fn with_fire_interval_ms(mut self, fire_interval_ms: u64) -> Self {
        self.fire_interval_ms = fire_interval_ms;
        self
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Clip names played by each action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimNames {
    pub raise: String,
    pub lower: String,
    /// Looping cycle while ready.
    pub idle: String,
    pub fire_start: String,
    /// Looping cycle while the trigger is held.
    pub fire_loop: String,
    pub fire_end: String,
}

impl Default for AnimNames {
    fn default() -> Self {
        Self {
            raise: "raise".into(),
            lower: "putaway".into(),
            idle: "idle".into(),
            fire_start: "melee_start".into(),
            fire_loop: "melee_loop".into(),
            fire_end: "melee_end".into(),
        }
    }
}

/// Sound cues started during a fire run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SoundCues {
    pub start_attack: String,
    pub attack: String,
    pub stop_attack: String,
}

impl Default for SoundCues {
    fn default() -> Self {
        Self {
            start_attack: "snd_startattack".into(),
            attack: "snd_attack".into(),
            stop_attack: "snd_stopattack".into(),
        }
    }
}

/// Trailing blend windows, in animation frames, accepted as "finished".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlendFrames {
    /// Raise blends into idle.
    pub raise: u32,
    pub lower: u32,
    /// Windup blends into the attack segment.
    pub windup: u32,
}

impl BlendFrames {
    pub const RAISE_TO_IDLE: u32 = 4;
    pub const WINDUP_TO_ATTACK: u32 = 3;
}

impl Default for BlendFrames {
    fn default() -> Self {
        Self {
            raise: Self::RAISE_TO_IDLE,
            lower: 0,
            windup: Self::WINDUP_TO_ATTACK,
        }
    }
}
