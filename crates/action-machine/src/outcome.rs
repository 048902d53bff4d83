//! Outcome returned by one invocation of an action.

/// The result of advancing an action by one tick.
///
/// # Tick Semantics
///
/// An action is invoked at most once per tick. It never blocks; instead it
/// reports whether the caller should invoke it again on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The action has more work to do.
    ///
    /// The caller re-enters it next tick with the stage it just wrote.
    InProgress,

    /// The action finished this run.
    ///
    /// The stage must be reset before the action is invoked again.
    Complete,

    /// The persisted stage was not one the action declares.
    ///
    /// This is an internal-consistency violation (corrupted or uninitialized
    /// stage), never a gameplay failure.
    Failed,
}

impl Outcome {
    /// Returns `Complete` when `done` holds, `InProgress` otherwise.
    ///
    /// This is the shape of every "wait until" stage.
    #[inline]
    pub fn complete_if(done: bool) -> Self {
        if done {
            Outcome::Complete
        } else {
            Outcome::InProgress
        }
    }

    /// Returns `true` if this outcome is `InProgress`.
    #[inline]
    pub fn is_in_progress(self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// Returns `true` if this outcome is `Complete`.
    #[inline]
    pub fn is_complete(self) -> bool {
        matches!(self, Outcome::Complete)
    }

    /// Returns `true` if this outcome is `Failed`.
    #[inline]
    pub fn is_failed(self) -> bool {
        matches!(self, Outcome::Failed)
    }

    /// Returns `true` if the current run is over (`Complete` or `Failed`).
    #[inline]
    pub fn ends_run(self) -> bool {
        !self.is_in_progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_if_maps_predicate() {
        assert_eq!(Outcome::complete_if(true), Outcome::Complete);
        assert_eq!(Outcome::complete_if(false), Outcome::InProgress);
    }

    #[test]
    fn only_in_progress_keeps_run_alive() {
        assert!(!Outcome::InProgress.ends_run());
        assert!(Outcome::Complete.ends_run());
        assert!(Outcome::Failed.ends_run());
    }
}
