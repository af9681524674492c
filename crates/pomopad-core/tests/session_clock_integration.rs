//! Integration tests for the session clock and progress dial.

use pomopad_core::{format_time, Event, ProgressRenderer, SessionClock, SessionConfig, SessionKind};
use proptest::prelude::*;

fn clock(work_secs: u64, break_secs: u64) -> SessionClock {
    SessionClock::new(SessionConfig::new(work_secs as i64, break_secs as i64).unwrap())
}

#[test]
fn test_full_pomodoro_cycle() {
    let mut clock = SessionClock::new(SessionConfig::default());
    clock.start();

    let mut switches = Vec::new();
    for _ in 0..1500 {
        if let Some(event) = clock.tick() {
            switches.push(event);
        }
    }

    assert_eq!(switches.len(), 1);
    assert_eq!(clock.kind(), SessionKind::Break);
    assert_eq!(clock.remaining_secs(), 300);
    assert!(!clock.is_running());

    // The break does not start by itself.
    assert!(clock.tick().is_none());
    assert_eq!(clock.remaining_secs(), 300);

    clock.start();
    for _ in 0..300 {
        clock.tick();
    }
    assert_eq!(clock.kind(), SessionKind::Work);
    assert_eq!(clock.remaining_secs(), 1500);
    assert!(!clock.is_running());
}

#[test]
fn test_rejected_reconfigure_keeps_previous_durations() {
    let mut clock = SessionClock::new(SessionConfig::default());
    for (work, brk) in [("0", "5"), ("-3", "5"), ("abc", "5"), ("25", "")] {
        assert!(clock.reconfigure_minutes(work, brk).is_err(), "{work}/{brk}");
    }
    assert!(clock.reconfigure(0, 300).is_err());
    assert!(clock.reconfigure(-180, 300).is_err());

    assert_eq!(clock.config(), &SessionConfig::default());
    assert_eq!(clock.remaining_secs(), 1500);
}

#[test]
fn test_reconfigure_during_break_resyncs_break() {
    let mut clock = clock(1, 300);
    clock.start();
    clock.tick();
    assert_eq!(clock.kind(), SessionKind::Break);

    let event = clock.reconfigure_minutes("30", "10").unwrap();
    match event {
        Event::DurationsReconfigured {
            work_secs,
            break_secs,
            remaining_secs,
            ..
        } => {
            assert_eq!(work_secs, 1800);
            assert_eq!(break_secs, 600);
            assert_eq!(remaining_secs, 600);
        }
        other => panic!("Expected DurationsReconfigured, got {other:?}"),
    }
}

#[test]
fn test_dial_tracks_clock() {
    let renderer = ProgressRenderer::default();
    let mut clock = clock(4, 2);
    clock.start();
    clock.tick();

    let view = renderer.render(clock.progress_fraction(), clock.kind(), clock.remaining_secs());
    assert_eq!(view.formatted_time, "00:03");
    assert!((view.dash_offset - renderer.circumference() * 0.75).abs() < 1e-9);
}

proptest! {
    #[test]
    fn prop_reset_restores_work_session(
        work in 1u64..5_000,
        brk in 1u64..5_000,
        ticks in 0usize..200,
        start in any::<bool>(),
    ) {
        let mut clock = clock(work, brk);
        clock.start();
        for _ in 0..ticks {
            if clock.tick().is_some() {
                clock.start();
            }
        }
        if start {
            clock.start();
        }
        clock.reset();
        prop_assert_eq!(clock.kind(), SessionKind::Work);
        prop_assert_eq!(clock.remaining_secs(), work);
        prop_assert!(!clock.is_running());
    }

    #[test]
    fn prop_r_ticks_finish_the_session(work in 1u64..400, brk in 1u64..400) {
        let mut clock = clock(work, brk);
        clock.start();
        for expected in (1..work).rev() {
            prop_assert!(clock.tick().is_none());
            prop_assert_eq!(clock.remaining_secs(), expected);
            prop_assert!(clock.is_running());
        }
        let switched = clock.tick();
        let is_switch = matches!(switched, Some(Event::SessionSwitched { .. }));
        prop_assert!(is_switch);
        prop_assert_eq!(clock.kind(), SessionKind::Break);
        prop_assert_eq!(clock.remaining_secs(), brk);
        prop_assert!(!clock.is_running());
    }

    #[test]
    fn prop_progress_is_monotone_and_resets(work in 1u64..300, brk in 1u64..300) {
        let mut clock = clock(work, brk);
        clock.start();
        let mut last = clock.progress_fraction();
        prop_assert_eq!(last, 0.0);
        loop {
            let switched = clock.tick().is_some();
            let now = clock.progress_fraction();
            if switched {
                prop_assert_eq!(now, 0.0);
                break;
            }
            prop_assert!(now >= last);
            prop_assert!((0.0..=1.0).contains(&now));
            last = now;
        }
    }

    #[test]
    fn prop_running_implies_time_left(ops in proptest::collection::vec(0u8..5, 0..300)) {
        let mut clock = clock(3, 2);
        for op in ops {
            match op {
                0 => { clock.start(); }
                1 => { clock.pause(); }
                2 | 3 => { clock.tick(); }
                _ => { clock.reset(); }
            }
            if clock.is_running() {
                prop_assert!(clock.remaining_secs() > 0);
            }
            prop_assert!(clock.remaining_secs() <= clock.total_secs());
        }
    }

    #[test]
    fn prop_format_time_shape(secs in 0u64..6_000) {
        let text = format_time(secs);
        let (mm, ss) = text.split_once(':').unwrap();
        prop_assert_eq!(mm.parse::<u64>().unwrap(), secs / 60);
        prop_assert_eq!(ss.parse::<u64>().unwrap(), secs % 60);
        prop_assert_eq!(ss.len(), 2);
        prop_assert!(mm.len() >= 2);
    }

    #[test]
    fn prop_render_is_deterministic(fraction in 0.0f64..=1.0, secs in 0u64..6_000, work in any::<bool>()) {
        let kind = if work { SessionKind::Work } else { SessionKind::Break };
        let renderer = ProgressRenderer::default();
        prop_assert_eq!(renderer.render(fraction, kind, secs), renderer.render(fraction, kind, secs));
    }
}
