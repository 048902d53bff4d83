//! Persisted stage values.
//!
//! The driver stores a stage as an opaque [`RawStage`] between ticks. Each
//! action declares its own [`Stage`] enum; the same raw value means different
//! things in different actions.

use core::fmt;

/// Opaque stage value persisted between invocations of an action.
///
/// `RawStage::INITIAL` is the fresh-run value for every action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawStage(pub u8);

impl RawStage {
    /// Stage of an action that has not started its current run.
    pub const INITIAL: RawStage = RawStage(0);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns true if no run is in flight.
    pub const fn is_initial(self) -> bool {
        self.0 == Self::INITIAL.0
    }
}

impl fmt::Display for RawStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Typed resume point of one action.
///
/// Implementors are small enums whose `Default` variant is the fresh-run
/// stage and encodes to [`RawStage::INITIAL`].
///
/// # Implementation Guidelines
///
/// - Derive `strum::FromRepr` with `#[repr(u8)]` and delegate `from_raw` to it
/// - Keep discriminants dense and in execution order
pub trait Stage: Copy + Default + fmt::Debug {
    /// Decodes a persisted value, or `None` if the action never writes it.
    fn from_raw(raw: RawStage) -> Option<Self>;

    /// Encodes this stage for persistence.
    fn into_raw(self) -> RawStage;
}
