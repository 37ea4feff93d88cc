use reset_rules::{
    construct_reset_rules_manager, CrashRule, EpisodeCompleteRule, EpisodeStatus, ImmobilizedRule,
    ResetConfig, ResetError, RuleManager, StateSnapshot, DEFAULT_RACE_DURATION,
};

fn config(is_continuous: bool, number_of_trials: u32) -> ResetConfig {
    ResetConfig {
        is_continuous,
        number_of_trials,
        agent_name: "agent0".into(),
        is_virtual_event: false,
        race_duration: DEFAULT_RACE_DURATION,
    }
}

// an agent driving forward along the track, well inside the lap
fn driving(progress: f64) -> StateSnapshot {
    let positions = (0..20).map(|i| (f64::from(i) * 0.1, 0.0)).collect();
    StateSnapshot::default()
        .with_agent_name("agent0")
        .with_collision(false, None)
        .with_all_wheels_off_track(false)
        .with_pose((1.9, 0.0), 0.0)
        .with_position_history(positions)
        .with_heading_history(vec![(0.0, 0.0); 20])
        .with_progress(progress)
        .with_trial(1)
        .with_elapsed_secs(12.0)
}

#[test]
fn scenario_a_off_track() {
    let manager = construct_reset_rules_manager(&config(false, 1));
    let snapshot = driving(40.0).with_all_wheels_off_track(true);
    assert_eq!(manager.evaluate(&snapshot), Ok(EpisodeStatus::OffTrack));
}

#[test]
fn scenario_b_lap_complete() {
    let manager = construct_reset_rules_manager(&config(false, 1));
    assert_eq!(
        manager.evaluate(&driving(100.0)),
        Ok(EpisodeStatus::EpisodeComplete)
    );
}

#[test]
fn scenario_c_continuous_trials() {
    let manager = construct_reset_rules_manager(&config(true, 3));
    let on_trial = |trial| manager.evaluate(&driving(100.0).with_trial(trial));
    assert_eq!(on_trial(2), Ok(EpisodeStatus::InProgress));
    assert_eq!(on_trial(3), Ok(EpisodeStatus::EpisodeComplete));
}

#[test]
fn scenario_d_immobilized() {
    let manager = construct_reset_rules_manager(&config(false, 1));
    let stuck = vec![(3.0, 4.0); ImmobilizedRule::DEFAULT_WINDOW];
    let snapshot = driving(40.0).with_position_history(stuck);
    assert_eq!(manager.evaluate(&snapshot), Ok(EpisodeStatus::Immobilized));
}

#[test]
fn scenario_e_completion_beats_crash() {
    let manager = RuleManager::from_rules([
        EpisodeCompleteRule::new(false, 1).into(),
        CrashRule::new("agent0").into(),
    ]);
    let snapshot = driving(100.0).with_collision(true, Some("agent0"));
    assert_eq!(
        manager.evaluate(&snapshot),
        Ok(EpisodeStatus::EpisodeComplete)
    );
}

#[test]
fn crash_with_other_agent_keeps_running() {
    let manager = construct_reset_rules_manager(&config(false, 1));
    let snapshot = driving(40.0).with_collision(true, Some("agent1"));
    assert_eq!(manager.evaluate(&snapshot), Ok(EpisodeStatus::InProgress));
}

#[test]
fn reversed_after_turning_around() {
    let manager = construct_reset_rules_manager(&config(false, 1));
    let snapshot = driving(40.0).with_heading_history(vec![(std::f64::consts::PI, 0.0); 20]);
    assert_eq!(manager.evaluate(&snapshot), Ok(EpisodeStatus::Reversed));
}

#[test]
fn race_time_ends_virtual_events() {
    let virtual_event = ResetConfig {
        is_virtual_event: true,
        race_duration: 60.0,
        ..config(false, 1)
    };
    let manager = construct_reset_rules_manager(&virtual_event);
    let snapshot = driving(40.0).with_elapsed_secs(61.0);
    assert_eq!(
        manager.evaluate(&snapshot),
        Ok(EpisodeStatus::EpisodeComplete)
    );
    let training = construct_reset_rules_manager(&config(false, 1));
    let without_clock = StateSnapshot {
        elapsed_secs: None,
        ..driving(40.0)
    };
    assert_eq!(
        training.evaluate(&without_clock),
        Ok(EpisodeStatus::InProgress)
    );
}

#[test]
fn missing_required_field_is_surfaced() {
    let manager = construct_reset_rules_manager(&config(false, 1));
    let snapshot = StateSnapshot {
        all_wheels_off_track: None,
        ..driving(40.0)
    };
    assert_eq!(
        manager.evaluate(&snapshot),
        Err(ResetError::MissingStateField {
            rule: "off_track",
            field: "all_wheels_off_track"
        })
    );
}

#[test]
fn snapshot_from_backend_json() {
    let manager = construct_reset_rules_manager(&config(false, 1));
    let snapshot: StateSnapshot = serde_json::from_str(
        r#"{
            "collided": false,
            "all_wheels_off_track": true,
            "position_history": [[0.0, 0.0], [0.1, 0.0]],
            "heading_history": [[0.0, 0.0]],
            "progress": 40.0
        }"#,
    )
    .unwrap();
    assert_eq!(manager.evaluate(&snapshot), Ok(EpisodeStatus::OffTrack));
}
