//! Simulation configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Timing of a scripted weapon session, in ticks unless noted.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Simulation clock advance per tick, in milliseconds.
    pub tick_ms: u64,
    pub ticks: u64,
    /// Tick on which the trigger is pressed.
    pub trigger_at: u64,
    /// Number of ticks the trigger stays held.
    pub trigger_ticks: u64,
    /// Tick on which holstering is requested.
    pub holster_at: u64,
    /// Length of one animation frame, in milliseconds.
    pub frame_ms: u64,
    /// Optional weapon definition file (`.ron` or `.toml`).
    pub weapon_def: Option<PathBuf>,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_TICK_MS` - Milliseconds per tick (default: 16)
    /// - `SIM_TICKS` - Ticks to simulate (default: 240)
    /// - `SIM_TRIGGER_AT` - Tick the trigger is pressed (default: 40)
    /// - `SIM_TRIGGER_TICKS` - Ticks the trigger is held (default: 60)
    /// - `SIM_HOLSTER_AT` - Tick holstering is requested (default: 200)
    /// - `SIM_FRAME_MS` - Milliseconds per animation frame (default: 40)
    /// - `WEAPON_DEF` - Weapon definition file (default: built-in chainsaw)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(tick_ms) = read_env::<u64>("SIM_TICK_MS") {
            config.tick_ms = tick_ms.max(1);
        }
        if let Some(ticks) = read_env::<u64>("SIM_TICKS") {
            config.ticks = ticks;
        }
        if let Some(at) = read_env::<u64>("SIM_TRIGGER_AT") {
            config.trigger_at = at;
        }
        if let Some(ticks) = read_env::<u64>("SIM_TRIGGER_TICKS") {
            config.trigger_ticks = ticks;
        }
        if let Some(at) = read_env::<u64>("SIM_HOLSTER_AT") {
            config.holster_at = at;
        }
        if let Some(frame_ms) = read_env::<u64>("SIM_FRAME_MS") {
            config.frame_ms = frame_ms;
        }

        config.weapon_def = env::var("WEAPON_DEF").ok().map(PathBuf::from);

        config
    }

    /// Returns true if the trigger is held on `tick`.
    pub fn trigger_held(&self, tick: u64) -> bool {
        (self.trigger_at..self.trigger_at.saturating_add(self.trigger_ticks)).contains(&tick)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            ticks: 240,
            trigger_at: 40,
            trigger_ticks: 60,
            holster_at: 200,
            frame_ms: 40,
            weapon_def: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_window_is_half_open() {
        let config = SimConfig {
            trigger_at: 10,
            trigger_ticks: 3,
            ..SimConfig::default()
        };

        assert!(!config.trigger_held(9));
        assert!(config.trigger_held(10));
        assert!(config.trigger_held(12));
        assert!(!config.trigger_held(13));
    }
}
