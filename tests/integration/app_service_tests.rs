//! AppService against the mock adapter: scheduling, per-mode steps and
//! mode switching.

use spws::app::events::AppEvent;
use spws::app::service::AppService;
use spws::config::SystemSettings;
use spws::controller::state::{IndicatorState, PumpState, SystemMode};
use spws::controller::{StopCause, WateringKind};

use super::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

fn make_app(hw: &mut MockHardware) -> (AppService, RecordingSink) {
    let mut app = AppService::new(SystemSettings::default());
    let mut sink = RecordingSink::new();
    app.start(hw, &mut sink);
    (app, sink)
}

fn run(
    app: &mut AppService,
    hw: &mut MockHardware,
    sink: &mut RecordingSink,
    ticks: std::ops::RangeInclusive<u32>,
) {
    for now in ticks {
        app.tick(now, hw, sink);
        assert!(app.state().is_consistent(), "pump/flag invariant broken at t={now}");
        assert_eq!(app.state().indicator, IndicatorState::for_pump(app.state().pump));
    }
}

#[test]
fn start_shows_normal_indicator_with_pump_off() {
    let mut hw = MockHardware::new(50.0);
    let (app, sink) = make_app(&mut hw);
    assert_eq!(hw.calls, vec![ActuatorCall::Indicator(IndicatorState::Green)]);
    assert_eq!(app.state().pump, PumpState::Off);
    assert!(matches!(sink.events[0], AppEvent::Started(_)));
}

#[test]
fn sensors_read_on_first_tick_then_every_interval() {
    let mut hw = MockHardware::new(50.0);
    let (mut app, mut sink) = make_app(&mut hw);
    run(&mut app, &mut hw, &mut sink, 0..=9);
    assert_eq!(hw.moisture_reads, 2);
    assert_eq!(app.last_sample().captured_at, 5);

    let telemetry = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::Telemetry(_)))
        .count();
    assert_eq!(telemetry, 2);
}

#[test]
fn dry_soil_starts_auto_cycle() {
    let mut hw = MockHardware::new(20.0);
    let (mut app, mut sink) = make_app(&mut hw);
    run(&mut app, &mut hw, &mut sink, 0..=0);

    assert!(hw.pump_on());
    assert!(app.state().auto_watering_active);
    assert_eq!(hw.last_indicator(), Some(IndicatorState::Yellow));
    assert_eq!(
        sink.watering_events(),
        vec![AppEvent::WateringStarted {
            kind: WateringKind::Auto,
            at: 0
        }]
    );
}

#[test]
fn auto_cycle_times_out_then_restarts() {
    let mut hw = MockHardware::new(20.0);
    let (mut app, mut sink) = make_app(&mut hw);
    run(&mut app, &mut hw, &mut sink, 0..=21);

    assert_eq!(
        sink.watering_events(),
        vec![
            AppEvent::WateringStarted { kind: WateringKind::Auto, at: 0 },
            AppEvent::WateringStopped { cause: StopCause::Timeout, at: 20 },
            AppEvent::WateringStarted { kind: WateringKind::Auto, at: 21 },
        ]
    );
}

#[test]
fn wet_reading_stops_auto_cycle() {
    let mut hw = MockHardware::new(20.0);
    let (mut app, mut sink) = make_app(&mut hw);
    run(&mut app, &mut hw, &mut sink, 0..=4);
    assert!(hw.pump_on());

    hw.moisture = 70.0;
    run(&mut app, &mut hw, &mut sink, 5..=5);
    assert!(!hw.pump_on());
    assert_eq!(
        sink.watering_events().last(),
        Some(&AppEvent::WateringStopped {
            cause: StopCause::MoistureReached,
            at: 5
        })
    );
}

#[test]
fn manual_button_ignored_in_auto() {
    let mut hw = MockHardware::new(50.0).with_manual_presses(&[1, 2, 3]);
    let (mut app, mut sink) = make_app(&mut hw);
    run(&mut app, &mut hw, &mut sink, 0..=5);
    assert_eq!(hw.manual_polls, 0);
    assert!(!hw.pump_on());
}

#[test]
fn switch_to_manual_stops_pump_before_manual_logic() {
    let mut hw = MockHardware::new(20.0)
        .with_mode_toggles(&[3])
        .with_manual_presses(&[3]);
    let (mut app, mut sink) = make_app(&mut hw);
    run(&mut app, &mut hw, &mut sink, 0..=3);

    assert_eq!(app.state().mode, SystemMode::Manual);
    assert_eq!(
        sink.watering_events(),
        vec![
            AppEvent::WateringStarted { kind: WateringKind::Auto, at: 0 },
            AppEvent::WateringStopped { cause: StopCause::ModeSwitch, at: 3 },
            AppEvent::WateringStarted { kind: WateringKind::Manual, at: 3 },
        ]
    );
    assert!(app.state().manual_watering_active);
    assert!(!app.state().auto_watering_active);
}

#[test]
fn switch_to_manual_without_press_leaves_pump_off() {
    let mut hw = MockHardware::new(20.0).with_mode_toggles(&[3]);
    let (mut app, mut sink) = make_app(&mut hw);
    run(&mut app, &mut hw, &mut sink, 0..=10);

    assert!(!hw.pump_on());
    assert_eq!(hw.count(ActuatorCall::PumpOff), 1);
    assert!(sink.events.contains(&AppEvent::ModeChanged {
        from: SystemMode::Auto,
        to: SystemMode::Manual
    }));
}

#[test]
fn manual_repress_restarts_duration_window() {
    let mut hw = MockHardware::new(50.0)
        .with_mode_toggles(&[1])
        .with_manual_presses(&[2, 6]);
    let (mut app, mut sink) = make_app(&mut hw);
    run(&mut app, &mut hw, &mut sink, 0..=20);

    assert_eq!(
        sink.watering_events(),
        vec![
            AppEvent::WateringStarted { kind: WateringKind::Manual, at: 2 },
            AppEvent::WateringStarted { kind: WateringKind::Manual, at: 6 },
            AppEvent::WateringStopped { cause: StopCause::ManualDurationElapsed, at: 16 },
        ]
    );
}

#[test]
fn manual_cycle_carried_into_auto_follows_auto_rules() {
    let mut hw = MockHardware::new(50.0)
        .with_mode_toggles(&[1, 4])
        .with_manual_presses(&[2]);
    let (mut app, mut sink) = make_app(&mut hw);
    run(&mut app, &mut hw, &mut sink, 0..=22);

    assert_eq!(app.state().mode, SystemMode::Auto);
    assert_eq!(
        sink.watering_events(),
        vec![
            AppEvent::WateringStarted { kind: WateringKind::Manual, at: 2 },
            AppEvent::WateringStopped { cause: StopCause::Timeout, at: 22 },
        ]
    );
}
