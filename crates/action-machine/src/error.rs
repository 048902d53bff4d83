//! Driver errors.

use crate::RawStage;

/// A persisted stage value that the action does not declare.
///
/// Raised when the driver cannot decode a [`RawStage`] into the action's
/// stage enum. This signals a programming or data-corruption defect; the
/// owning scheduler must reset the stage before invoking the action again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("stage {stage} is not declared by the action")]
pub struct InvalidStage {
    pub stage: RawStage,
}
