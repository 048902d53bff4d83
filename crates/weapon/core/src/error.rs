//! Error types for weapon-core.
//!
//! # Design Principles
//!
//! - **One defect kind**: an undeclared stage is the only driver error
//! - **Gameplay is not an error**: a missing clip is just "not finished yet"
//! - **Severity Classification**: errors are categorized for recovery strategies

use action_machine::RawStage;

use crate::WeaponAction;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown action name
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: corrupted or uninitialized stage
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Errors surfaced by the weapon action set and controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WeaponError {
    #[error("{action} rejected stage {stage}; run was reset")]
    InvalidStage { action: WeaponAction, stage: RawStage },

    #[error("unknown weapon action '{0}'")]
    UnknownAction(String),
}

impl WeaponError {
    /// Returns the severity level of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidStage { .. } => ErrorSeverity::Internal,
            Self::UnknownAction(_) => ErrorSeverity::Validation,
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStage { .. } => "WEAPON_INVALID_STAGE",
            Self::UnknownAction(_) => "WEAPON_UNKNOWN_ACTION",
        }
    }
}
