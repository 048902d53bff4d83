use action_machine::RawStage;
use weapon_core::{
    ErrorSeverity, PendingRequests, WeaponAction, WeaponConfig, WeaponSnapshot, WeaponState,
};
use weapon_sim::{SimConfig, resume, run};

#[test]
fn default_session_ends_holstered() {
    let summary = run(&SimConfig::default(), &WeaponConfig::chainsaw());

    assert!(summary.errors.is_empty());
    assert_eq!(summary.final_state(), WeaponState::Holstered);
    assert!(summary.ready_signals >= 2);

    let states: Vec<_> = summary.transitions.iter().map(|(_, s)| *s).collect();
    assert_eq!(states.first(), Some(&WeaponState::Running(WeaponAction::Raise)));
    assert!(states.contains(&WeaponState::Running(WeaponAction::Fire)));
    assert!(states.contains(&WeaponState::Running(WeaponAction::Lower)));
    assert_eq!(states.last(), Some(&WeaponState::Holstered));
}

#[test]
fn strikes_respect_fire_interval() {
    let config = SimConfig::default();
    let default = run(&config, &WeaponConfig::chainsaw());
    let fast_weapon = WeaponConfig::chainsaw().with_fire_interval_ms(50);
    let fast = run(&config, &fast_weapon);

    assert!(default.strikes.len() >= 3, "strikes: {:?}", default.strikes);
    assert!(fast.strikes.len() > default.strikes.len());
    for pair in fast.strikes.windows(2) {
        assert!(pair[1].since(pair[0]) >= fast_weapon.fire_interval_ms);
    }
}

#[test]
fn no_trigger_means_no_strikes() {
    let config = SimConfig {
        trigger_ticks: 0,
        ..SimConfig::default()
    };
    let summary = run(&config, &WeaponConfig::chainsaw());

    assert!(summary.strikes.is_empty());
    assert_eq!(summary.final_state(), WeaponState::Holstered);
}

#[test]
fn corrupt_snapshot_is_reported_as_internal_and_recovers() {
    let snapshot = WeaponSnapshot {
        state: WeaponState::Running(WeaponAction::Raise),
        stage: RawStage::new(42),
        pending: PendingRequests::default(),
    };
    let summary = resume(&SimConfig::default(), &WeaponConfig::chainsaw(), snapshot);

    assert_eq!(summary.errors, vec![ErrorSeverity::Internal]);
    assert_eq!(summary.final_state(), WeaponState::Holstered);
    assert!(!summary.strikes.is_empty());
}
