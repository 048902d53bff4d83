//! Action names and the weapon's top-level state.

/// Names of the actions a weapon can run.
///
/// Names display and parse as `"Raise"`, `"Fire"`, and so on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum WeaponAction {
    /// Bring the weapon up after equipping.
    Raise,
    /// Put the weapon away; ends in [`WeaponState::Holstered`].
    Lower,
    /// Start the idle cycle and report ready.
    Idle,
    /// Reload slot; melee weapons finish immediately.
    Reload,
    /// Windup, continuous attack while triggered, wind-down.
    Fire,
}

/// Top-level designation of the weapon's behavior set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponState {
    /// Put away; no action runs until the weapon is equipped.
    #[default]
    Holstered,
    /// Idle cycle playing, waiting for a request or the trigger.
    Ready,
    /// An action is mid-run.
    Running(WeaponAction),
}

impl WeaponState {
    /// Returns the running action, if any.
    pub const fn action(self) -> Option<WeaponAction> {
        match self {
            WeaponState::Running(action) => Some(action),
            _ => None,
        }
    }

    pub const fn is_holstered(self) -> bool {
        matches!(self, WeaponState::Holstered)
    }

    pub const fn is_ready(self) -> bool {
        matches!(self, WeaponState::Ready)
    }
}

impl core::fmt::Display for WeaponState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WeaponState::Holstered => f.write_str("Holstered"),
            WeaponState::Ready => f.write_str("Ready"),
            WeaponState::Running(action) => write!(f, "Running({action})"),
        }
    }
}
