//! Stage decoding and single-step invocation.
//!
//! The driver routes control to an action body. It decodes the persisted
//! [`RawStage`], calls the action exactly once, and writes back whatever
//! stage the action left behind. It has no side effects of its own and never
//! retries within a tick.

use crate::{Action, InvalidStage, Outcome, RawStage, Stage};

/// Advances `action` by one tick, surfacing an undeclared stage as an error.
///
/// On error the action is not invoked and `stage` is left untouched.
pub fn try_advance<A, C>(
    action: &mut A,
    stage: &mut RawStage,
    ctx: &mut C,
) -> Result<Outcome, InvalidStage>
where
    A: Action<C>,
    C: ?Sized,
{
    let mut typed = A::Stage::from_raw(*stage).ok_or(InvalidStage { stage: *stage })?;
    let before = typed;

    let outcome = action.advance(&mut typed, ctx);

    let after = typed.into_raw();
    if after != *stage {
        tracing::trace!("stage {:?} -> {:?} ({:?})", before, typed, outcome);
    }
    *stage = after;

    Ok(outcome)
}

/// Advances `action` by one tick.
///
/// An undeclared stage is logged and reported as [`Outcome::Failed`].
pub fn advance<A, C>(action: &mut A, stage: &mut RawStage, ctx: &mut C) -> Outcome
where
    A: Action<C>,
    C: ?Sized,
{
    match try_advance(action, stage, ctx) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("{} ({})", err, core::any::type_name::<A>());
            Outcome::Failed
        }
    }
}

/// Delivers the interrupt hook for a run abandoned at `stage`.
///
/// Undeclared stages are ignored: there is no run to clean up.
pub fn interrupt<A, C>(action: &mut A, stage: RawStage, ctx: &mut C)
where
    A: Action<C>,
    C: ?Sized,
{
    if let Some(typed) = A::Stage::from_raw(stage) {
        action.on_interrupt(typed, ctx);
    }
}
