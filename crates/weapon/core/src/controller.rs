//! Tick-by-tick sequencing of weapon actions.
//!
//! The [`WeaponController`] is the scheduler on top of the driver. It owns
//! the current action name and its persisted stage, invokes exactly one
//! action per tick, and picks the next action when a run completes:
//!
//! ```text
//! Holstered --equip--> Raise --> Idle --> Ready
//! Ready --trigger--> Fire --> Idle
//! Ready --reload--> Reload --> Idle
//! Ready --holster--> Lower --> Holstered
//! ```

use core::mem;

use action_machine::{ActionSet, Interrupted, Outcome, Runner};

use crate::{
    PendingRequests, WeaponAction, WeaponCtx, WeaponError, WeaponOwner, WeaponSnapshot,
    WeaponState,
};

/// Result of one controller tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Action invoked this tick, if any.
    pub action: Option<WeaponAction>,
    /// Outcome of that invocation.
    pub outcome: Option<Outcome>,
    /// State after the tick.
    pub state: WeaponState,
}

/// Schedules the actions of a weapon behavior set.
///
/// # Design
///
/// - **One action per tick**: the driver is called at most once per [`tick`](Self::tick)
/// - **Fresh runs**: switching actions or finishing a run resets the stage
/// - **Requests are queued**: equip, holster, and reload take effect when
///   the weapon is idle (or holstered, for equip)
/// - **Hard reset on corruption**: an undeclared stage restarts the run and
///   is reported as [`WeaponError::InvalidStage`]
pub struct WeaponController<S> {
    set: S,
    runner: Runner<WeaponAction>,
    state: WeaponState,
    pending: PendingRequests,
}

impl<S> WeaponController<S>
where
    S: for<'a> ActionSet<WeaponCtx<'a>, Name = WeaponAction>,
{
    /// Creates a holstered controller and resets the set's persistent fields.
    pub fn new(mut set: S) -> Self {
        <S as ActionSet<WeaponCtx<'_>>>::init(&mut set);
        Self {
            set,
            runner: Runner::new(),
            state: WeaponState::Holstered,
            pending: PendingRequests::default(),
        }
    }

    pub fn state(&self) -> WeaponState {
        self.state
    }

    /// Returns the running action, if any.
    pub fn current(&self) -> Option<WeaponAction> {
        self.state.action()
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    pub fn pending(&self) -> PendingRequests {
        self.pending
    }

    /// Requests the weapon be raised on the next tick.
    pub fn equip(&mut self) {
        if !self.state.is_holstered() {
            tracing::warn!("equip ignored: weapon is {}", self.state);
            return;
        }
        self.pending.equip = true;
    }

    /// Requests the weapon be put away once it is idle.
    pub fn holster(&mut self) {
        if self.state.is_holstered() {
            tracing::warn!("holster ignored: weapon is already holstered");
            self.pending.equip = false;
            return;
        }
        self.pending.holster = true;
    }

    /// Requests a reload once the weapon is idle.
    pub fn reload(&mut self) {
        if self.state.is_holstered() {
            tracing::warn!("reload ignored: weapon is holstered");
            return;
        }
        self.pending.reload = true;
    }

    /// Switches to `action` immediately, abandoning the current run.
    ///
    /// The abandoned action's interrupt hook runs before the switch.
    pub fn interrupt(&mut self, action: WeaponAction, owner: &mut dyn WeaponOwner) {
        tracing::info!("{} overridden by {}", self.state, action);
        let mut ctx = WeaponCtx::new(owner);
        self.begin(action, &mut ctx);
    }

    /// Advances the weapon by one simulation tick.
    ///
    /// # Errors
    ///
    /// Returns [`WeaponError::InvalidStage`] if the running action rejected
    /// its persisted stage. The run has already been reset to its initial
    /// stage and restarts on the next tick.
    pub fn tick(&mut self, owner: &mut dyn WeaponOwner) -> Result<TickReport, WeaponError> {
        let mut ctx = WeaponCtx::new(owner);

        if let Some(next) = self.pick_next(&*ctx.owner) {
            self.begin(next, &mut ctx);
        }

        let Some(action) = self.state.action() else {
            return Ok(self.report(None, None));
        };

        let stage = self.runner.stage();
        let Some(outcome) = self.runner.tick(&mut self.set, &mut ctx) else {
            return Ok(self.report(None, None));
        };
        tracing::trace!("{} at stage {}: {:?}", action, stage, outcome);

        if let Some(forced) = ctx.take_forced() {
            self.force(forced);
            return Ok(self.report(Some(action), Some(outcome)));
        }

        match outcome {
            Outcome::InProgress => {}
            Outcome::Complete => self.finish(action, &mut ctx),
            Outcome::Failed => {
                tracing::error!("{} rejected stage {}; restarting run", action, stage);
                return Err(WeaponError::InvalidStage { action, stage });
            }
        }

        Ok(self.report(Some(action), Some(outcome)))
    }

    /// Captures the controller state for persistence.
    pub fn snapshot(&self) -> WeaponSnapshot {
        WeaponSnapshot {
            state: self.state,
            stage: self.runner.stage(),
            pending: self.pending,
        }
    }

    /// Replaces the controller state with `snapshot`, verbatim.
    pub fn restore(&mut self, snapshot: WeaponSnapshot) {
        tracing::debug!("restoring {} at stage {}", snapshot.state, snapshot.stage);
        self.state = snapshot.state;
        self.runner = Runner::resume(snapshot.state.action(), snapshot.stage);
        self.pending = snapshot.pending;
    }

    /// Picks an action to start when nothing is running.
    fn pick_next(&mut self, owner: &dyn WeaponOwner) -> Option<WeaponAction> {
        match self.state {
            WeaponState::Holstered => {
                mem::take(&mut self.pending.equip).then_some(WeaponAction::Raise)
            }
            WeaponState::Ready => self.pick_from_ready(owner),
            WeaponState::Running(_) => None,
        }
    }

    fn pick_from_ready(&mut self, owner: &dyn WeaponOwner) -> Option<WeaponAction> {
        if mem::take(&mut self.pending.holster) {
            Some(WeaponAction::Lower)
        } else if owner.is_firing() {
            Some(WeaponAction::Fire)
        } else if mem::take(&mut self.pending.reload) {
            Some(WeaponAction::Reload)
        } else {
            None
        }
    }

    fn finish(&mut self, action: WeaponAction, ctx: &mut WeaponCtx<'_>) {
        let next = match action {
            WeaponAction::Raise | WeaponAction::Fire | WeaponAction::Reload => {
                if mem::take(&mut self.pending.holster) {
                    Some(WeaponAction::Lower)
                } else {
                    Some(WeaponAction::Idle)
                }
            }
            WeaponAction::Idle => self.pick_from_ready(&*ctx.owner),
            WeaponAction::Lower => {
                tracing::warn!("lower completed without holstering the weapon");
                None
            }
        };

        match next {
            Some(next) => self.begin(next, ctx),
            None => {
                self.runner.clear();
                self.state = WeaponState::Ready;
                tracing::debug!("weapon ready");
            }
        }
    }

    fn begin(&mut self, action: WeaponAction, ctx: &mut WeaponCtx<'_>) {
        if let Some(Interrupted { name, stage }) = self.runner.switch_to(action) {
            tracing::debug!("{} interrupted at stage {}", name, stage);
            self.set.interrupt(name, stage, ctx);
        }
        if self.state.is_holstered() {
            tracing::info!("weapon equipped");
        }
        self.state = WeaponState::Running(action);
    }

    fn force(&mut self, state: WeaponState) {
        self.runner.clear();
        self.state = state;
        if state.is_holstered() {
            self.pending = PendingRequests::default();
            tracing::info!("weapon holstered");
        } else {
            tracing::info!("weapon forced to {}", state);
        }
    }

    fn report(&self, action: Option<WeaponAction>, outcome: Option<Outcome>) -> TickReport {
        TickReport {
            action,
            outcome,
            state: self.state,
        }
    }
}
