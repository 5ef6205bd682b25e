//! Controls and alerting through the full tick: inputs → commands →
//! sensor refresh → classification → LEDs and buzzer.

use deskthermo::alert::{AlertState, WarningPolicy};
use deskthermo::app::commands::Command;
use deskthermo::app::events::AppEvent;
use deskthermo::app::service::DeskService;
use deskthermo::config::DeskConfig;
use deskthermo::display::DisplayMode;
use deskthermo::error::Error;

use crate::mock_hw::{MockHardware, RecordingSink};
use crate::rig::Rig;

fn hot(temperature_c: f32) -> MockHardware {
    let mut hw = MockHardware::new();
    hw.set_temperature(temperature_c);
    hw
}

// ── Lifecycle ─────────────────────────────────────────────────

#[test]
fn start_announces_target_and_mode() {
    let rig = Rig::new();
    assert_eq!(
        rig.sink.events.first(),
        Some(&AppEvent::Started {
            target_c: 80,
            mode: DisplayMode::Temperature
        })
    );
    assert_eq!(rig.app.target(), 80);
}

#[test]
fn initial_target_is_clamped_into_range() {
    let config = DeskConfig {
        initial_target_c: 120,
        ..DeskConfig::default()
    };
    let rig = Rig::with_config(config);
    assert_eq!(rig.app.target(), 100);
}

#[test]
fn invalid_config_is_rejected() {
    let config = DeskConfig {
        mode_count: 5,
        ..DeskConfig::default()
    };
    assert!(matches!(DeskService::new(config), Err(Error::Config(_))));
}

#[test]
fn every_tick_ends_with_pacing_sleep() {
    let mut rig = Rig::new();
    rig.tick();
    rig.tick();
    assert_eq!(rig.clock.delays, vec![50, 50]);
    assert_eq!(rig.app.tick_count(), 2);
}

// ── Alert state machine ───────────────────────────────────────

#[test]
fn dangerous_reading_pulses_buzzer_blocking() {
    let mut rig = Rig::with(DeskConfig::default(), hot(96.0));
    rig.tick();

    assert_eq!(rig.app.alert_state(), AlertState::Dangerous);
    assert_eq!(rig.hw.buzzer_duties(), vec![3000, 0]);
    // Pulse length is slept through the clock, before the pacing sleep.
    assert_eq!(rig.clock.delays, vec![100, 50]);
    assert!(rig.sink.events.contains(&AppEvent::AlertChanged {
        from: AlertState::Safe,
        to: AlertState::Dangerous,
        temperature_c: 96.0,
    }));
}

#[test]
fn buzzer_repeats_on_every_sensor_refresh() {
    let mut rig = Rig::with(DeskConfig::default(), hot(96.0));
    rig.run_until(5001);
    assert_eq!(rig.app.beep_count(), 2);
    assert_eq!(rig.hw.buzzer_duties(), vec![3000, 0, 3000, 0]);

    // The transition is only reported once.
    let transitions = rig
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::AlertChanged { .. }))
        .count();
    assert_eq!(transitions, 1);
}

#[test]
fn critical_threshold_is_inclusive() {
    let mut rig = Rig::with(DeskConfig::default(), hot(95.0));
    rig.tick();
    assert_eq!(rig.app.alert_state(), AlertState::Dangerous);
}

#[test]
fn warning_above_target_beeps_by_default() {
    let mut rig = Rig::with(DeskConfig::default(), hot(91.0));
    rig.tick();
    assert_eq!(rig.app.alert_state(), AlertState::Warning);
    assert_eq!(rig.app.beep_count(), 1);
}

#[test]
fn warning_can_be_silent() {
    let config = DeskConfig {
        beep_on_warning: false,
        ..DeskConfig::default()
    };
    let mut rig = Rig::with(config, hot(91.0));
    rig.tick();
    assert_eq!(rig.app.alert_state(), AlertState::Warning);
    assert!(rig.hw.buzzer_duties().is_empty());
}

#[test]
fn below_target_warns_only_with_either_side_policy() {
    let mut above = Rig::with(DeskConfig::default(), hot(69.0));
    above.tick();
    assert_eq!(above.app.alert_state(), AlertState::Safe);

    let config = DeskConfig {
        warning_policy: WarningPolicy::EitherSide,
        ..DeskConfig::default()
    };
    let mut either = Rig::with(config, hot(69.0));
    either.tick();
    assert_eq!(either.app.alert_state(), AlertState::Warning);
}

#[test]
fn alert_follows_latest_reading() {
    let mut rig = Rig::with(DeskConfig::default(), hot(96.0));
    rig.tick();
    assert_eq!(rig.app.alert_state(), AlertState::Dangerous);

    rig.hw.set_temperature(70.0);
    rig.run_until(5001);
    assert_eq!(rig.app.alert_state(), AlertState::Safe);
    assert!(rig.sink.events.contains(&AppEvent::AlertChanged {
        from: AlertState::Dangerous,
        to: AlertState::Safe,
        temperature_c: 70.0,
    }));
    assert_eq!(rig.app.beep_count(), 1);
}

// ── Target controller ─────────────────────────────────────────

#[test]
fn encoder_moves_target_within_range() {
    let config = DeskConfig {
        target_min_c: 40,
        target_max_c: 110,
        ..DeskConfig::default()
    };
    let mut rig = Rig::with_config(config);

    rig.hw.encoder = Ok(50);
    rig.tick();
    assert_eq!(rig.app.target(), 110);

    rig.hw.encoder = Ok(-150);
    rig.tick();
    assert_eq!(rig.app.target(), 40);

    // No movement, no event.
    rig.tick();
    let changes: Vec<_> = rig
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::TargetChanged { target_c } => Some(*target_c),
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec![110, 40]);
}

#[test]
fn target_change_waits_for_next_sensor_refresh_to_reclassify() {
    let mut rig = Rig::with(DeskConfig::default(), hot(85.0));
    rig.tick();
    assert_eq!(rig.app.alert_state(), AlertState::Safe);

    // Lower the target to 70: 85 is now 15 above.
    rig.hw.encoder = Ok(-10);
    rig.tick();
    assert_eq!(rig.app.target(), 70);
    assert_eq!(rig.app.alert_state(), AlertState::Safe);

    rig.run_until(5001);
    assert_eq!(rig.app.alert_state(), AlertState::Warning);
}

// ── Stopwatch ─────────────────────────────────────────────────

#[test]
fn main_button_toggles_stopwatch_once_per_press() {
    let mut rig = Rig::new();

    rig.hw.main_button = Ok(false);
    rig.tick();
    rig.tick(); // still held
    assert!(rig.app.stopwatch().is_running());

    rig.hw.main_button = Ok(true);
    rig.run_until(10_000);

    rig.hw.main_button = Ok(false);
    rig.tick();
    assert!(!rig.app.stopwatch().is_running());
    assert!(rig.sink.events.contains(&AppEvent::StopwatchStopped { elapsed_ms: 10_000 }));
    assert_eq!(rig.app.stopwatch().elapsed_secs(u64::MAX), 10);
}

#[test]
fn stopwatch_accumulates_across_restarts() {
    let mut app = DeskService::new(DeskConfig::default()).unwrap();
    let mut sink = RecordingSink::default();

    app.handle_command(Command::ToggleStopwatch, 0, &mut sink);
    app.handle_command(Command::ToggleStopwatch, 5_000, &mut sink);
    assert_eq!(app.stopwatch().elapsed_ms(5_000), 5_000);

    app.handle_command(Command::ToggleStopwatch, 5_000, &mut sink);
    assert_eq!(app.stopwatch().elapsed_ms(8_000), 8_000);
    assert_eq!(
        sink.events,
        vec![
            AppEvent::StopwatchStarted,
            AppEvent::StopwatchStopped { elapsed_ms: 5_000 },
            AppEvent::StopwatchStarted,
        ]
    );
}

#[test]
fn long_press_resets_stopwatch() {
    let config = DeskConfig {
        stopwatch_reset_hold_ms: Some(2_000),
        ..DeskConfig::default()
    };
    let mut rig = Rig::with_config(config);

    rig.hw.main_button = Ok(false);
    rig.run_until(2_500);
    assert!(rig.app.stopwatch().is_running());

    rig.hw.main_button = Ok(true);
    rig.tick();
    assert!(!rig.app.stopwatch().is_running());
    assert_eq!(rig.app.stopwatch().elapsed_ms(rig.clock.now), 0);
    assert!(rig.sink.events.contains(&AppEvent::StopwatchReset));
}

#[test]
fn short_press_does_not_reset() {
    let config = DeskConfig {
        stopwatch_reset_hold_ms: Some(2_000),
        ..DeskConfig::default()
    };
    let mut rig = Rig::with_config(config);

    rig.hw.main_button = Ok(false);
    rig.tick();
    rig.hw.main_button = Ok(true);
    rig.tick();
    assert!(rig.app.stopwatch().is_running());
    assert!(!rig.sink.events.contains(&AppEvent::StopwatchReset));
}
