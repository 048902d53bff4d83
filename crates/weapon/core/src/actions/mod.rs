//! The weapon's resumable actions.
//!
//! Each action keeps its own stage enum; the same raw value means different
//! things in different actions. Stage enums derive `strum::FromRepr` so the
//! driver can reject values an action never writes. Fire and Reload decode
//! by hand: Fire folds high values into its wind-down wait, and Reload has
//! no stages to corrupt.

mod fire;
mod idle;
mod lower;
mod raise;
mod reload;

pub use fire::{Fire, FireStage};
pub use idle::{Idle, IdleStage};
pub use lower::{Lower, LowerStage};
pub use raise::{Raise, RaiseStage};
pub use reload::{Reload, ReloadStage};

use action_machine::{RawStage, Stage};

macro_rules! impl_stage {
    ($($stage:ty),+ $(,)?) => {
        $(
            impl Stage for $stage {
                #[inline]
                fn from_raw(raw: RawStage) -> Option<Self> {
                    Self::from_repr(raw.get())
                }

                #[inline]
                fn into_raw(self) -> RawStage {
                    RawStage::new(self as u8)
                }
            }
        )+
    };
}

impl_stage!(RaiseStage, LowerStage, IdleStage);
