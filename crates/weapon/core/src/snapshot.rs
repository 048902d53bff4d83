//! Persisted controller state.

use action_machine::RawStage;

use crate::WeaponState;

/// Requests waiting for the controller to act on them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingRequests {
    pub equip: bool,
    pub holster: bool,
    pub reload: bool,
}

/// Everything needed to resume a [`crate::WeaponController`] mid-run.
///
/// The stage is stored raw. Restoring a snapshot whose stage the running
/// action does not declare is accepted; the next tick reports it as
/// [`crate::WeaponError::InvalidStage`] and restarts the run.
///
/// The fire gate is not part of the snapshot: a run restored inside the
/// attack loop strikes on its first tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSnapshot {
    pub state: WeaponState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stage: RawStage,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pending: PendingRequests,
}
