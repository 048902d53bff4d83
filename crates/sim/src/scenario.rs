//! Scripted weapon session.

use weapon_core::{
    Chainsaw, ErrorSeverity, SimTime, WeaponConfig, WeaponController, WeaponOwner, WeaponSnapshot,
    WeaponState,
};

use crate::{ScriptedOwner, SimConfig};

/// What happened during a simulated session.
#[derive(Clone, Debug)]
pub struct SimSummary {
    /// State changes in order, stamped with the tick's clock reading.
    pub transitions: Vec<(SimTime, WeaponState)>,
    /// Clock readings of every contact strike.
    pub strikes: Vec<SimTime>,
    /// Number of times the weapon announced it was ready.
    pub ready_signals: usize,
    /// Severity of every tick that reported an error, in order.
    pub errors: Vec<ErrorSeverity>,
    pub final_snapshot: WeaponSnapshot,
}

impl SimSummary {
    pub fn final_state(&self) -> WeaponState {
        self.final_snapshot.state
    }
}

/// Runs one session: equip on the first tick, hold the trigger for the
/// configured window, then holster.
pub fn run(config: &SimConfig, weapon: &WeaponConfig) -> SimSummary {
    simulate(config, weapon, None)
}

/// Runs a session that starts from a saved controller state.
///
/// The weapon is only equipped on the first tick if the snapshot is
/// holstered.
pub fn resume(config: &SimConfig, weapon: &WeaponConfig, snapshot: WeaponSnapshot) -> SimSummary {
    simulate(config, weapon, Some(snapshot))
}

fn simulate(
    config: &SimConfig,
    weapon: &WeaponConfig,
    snapshot: Option<WeaponSnapshot>,
) -> SimSummary {
    let mut owner = ScriptedOwner::new(config.frame_ms);
    let mut controller = WeaponController::new(Chainsaw::new(weapon));
    if let Some(snapshot) = snapshot {
        controller.restore(snapshot);
    }

    let mut transitions = Vec::new();
    let mut errors = Vec::new();
    let mut last = controller.state();

    for tick in 0..config.ticks {
        if tick == 0 && controller.state().is_holstered() {
            controller.equip();
        }
        if tick == config.holster_at {
            controller.holster();
        }
        owner.set_trigger(config.trigger_held(tick));

        match controller.tick(&mut owner) {
            Ok(report) if report.state != last => {
                tracing::info!("[{}] tick {}: {} -> {}", owner.now(), tick, last, report.state);
                transitions.push((owner.now(), report.state));
                last = report.state;
            }
            Ok(_) => {}
            Err(e) => {
                let severity = e.severity();
                let code = e.error_code();
                if severity.is_internal() {
                    tracing::error!(
                        "[{}] tick {}: {} error {}: {}",
                        owner.now(),
                        tick,
                        severity.as_str(),
                        code,
                        e
                    );
                } else {
                    tracing::warn!(
                        "[{}] tick {}: {} error {}: {}",
                        owner.now(),
                        tick,
                        severity.as_str(),
                        code,
                        e
                    );
                }
                errors.push(severity);
            }
        }

        owner.advance(config.tick_ms);
    }

    SimSummary {
        transitions,
        strikes: owner.strikes().to_vec(),
        ready_signals: owner.ready_count(),
        errors,
        final_snapshot: controller.snapshot(),
    }
}
