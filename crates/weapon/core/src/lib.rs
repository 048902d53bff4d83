//! Weapon behavior built on resumable actions.
//!
//! `weapon-core` defines a chainsaw-style continuous melee weapon as a set of
//! multi-tick actions (raise, lower, idle, reload, fire) and the controller
//! that sequences them. Engine effects (animation, sound, melee, input,
//! clock) are reached only through the [`WeaponOwner`] capability trait,
//! which is passed into every tick.
pub mod actions;
pub mod chainsaw;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod owner;
pub mod snapshot;
pub mod state;
pub mod time;

#[cfg(test)]
pub(crate) mod testing;

pub use actions::{
    Fire, FireStage, Idle, IdleStage, Lower, LowerStage, Raise, RaiseStage, Reload, ReloadStage,
};
pub use chainsaw::Chainsaw;
pub use config::{AnimNames, BlendFrames, SoundCues, WeaponConfig};
pub use context::WeaponCtx;
pub use controller::{TickReport, WeaponController};
pub use error::{ErrorSeverity, WeaponError};
pub use owner::{AnimChannel, Playback, SoundChannel, WeaponOwner};
pub use snapshot::{PendingRequests, WeaponSnapshot};
pub use state::{WeaponAction, WeaponState};
pub use time::SimTime;
