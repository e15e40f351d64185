//! Property tests for the breathing cycle engine.

use breathwork_core::{BreathingSession, CoreError, Event, Phase};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Command {
    Start,
    Tick,
    Pause,
    Resume,
    Reset,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        1 => Just(Command::Start),
        8 => Just(Command::Tick),
        1 => Just(Command::Pause),
        1 => Just(Command::Resume),
        1 => Just(Command::Reset),
    ]
}

fn apply(session: &mut BreathingSession, command: Command) -> Option<Event> {
    match command {
        Command::Start => Some(session.start()),
        Command::Tick => session.tick(),
        Command::Pause => session.pause(),
        Command::Resume => session.resume(),
        Command::Reset => Some(session.reset()),
    }
}

fn arbitrary_session() -> impl Strategy<Value = BreathingSession> {
    (1u32..8, prop::collection::vec(command(), 0..120)).prop_map(|(d, commands)| {
        let mut session = BreathingSession::new(d).unwrap();
        for c in commands {
            apply(&mut session, c);
        }
        session
    })
}

proptest! {
    #[test]
    fn phases_follow_the_fixed_cycle(d in 1u32..10, n in 0usize..200) {
        let mut session = BreathingSession::new(d).unwrap();
        session.start();
        let mut visited = vec![session.phase()];
        for _ in 0..n {
            if session.tick().is_some() {
                visited.push(session.phase());
            }
        }
        for (i, phase) in visited.iter().enumerate() {
            prop_assert_eq!(*phase, Phase::CYCLE[i % 4]);
        }
    }

    #[test]
    fn remaining_stays_in_bounds(d in 1u32..8, commands in prop::collection::vec(command(), 0..200)) {
        let mut session = BreathingSession::new(d).unwrap();
        for c in commands {
            apply(&mut session, c);
            prop_assert!(session.remaining() >= 1);
            prop_assert!(session.remaining() <= d);
            prop_assert_eq!(session.phase_duration(), d);
        }
    }

    #[test]
    fn cycles_count_full_traversals(d in 1u32..8, n in 0u64..300) {
        let mut session = BreathingSession::new(d).unwrap();
        session.start();
        let mut completions = 0u64;
        for _ in 0..n {
            let before = session.cycles_completed();
            let event = session.tick();
            let after = session.cycles_completed();
            match event {
                Some(Event::CycleCompleted { cycles_completed, .. }) => {
                    completions += 1;
                    prop_assert_eq!(after, before + 1);
                    prop_assert_eq!(cycles_completed, after);
                }
                _ => prop_assert_eq!(after, before),
            }
        }
        prop_assert_eq!(completions, n / (4 * u64::from(d)));
        prop_assert_eq!(session.cycles_completed(), completions);
    }

    #[test]
    fn paused_session_ignores_ticks(mut session in arbitrary_session(), k in 0usize..50, m in 0usize..20) {
        session.pause();
        let frozen = session.clone();
        for _ in 0..k {
            prop_assert!(session.tick().is_none());
        }
        prop_assert_eq!(&session, &frozen);

        // Resuming continues from the frozen point, same as a copy that was
        // never ticked while paused.
        let mut reference = frozen.clone();
        session.resume();
        reference.resume();
        for _ in 0..m {
            session.tick();
            reference.tick();
        }
        prop_assert_eq!(session, reference);
    }

    #[test]
    fn reset_is_total_and_idempotent(mut session in arbitrary_session()) {
        let d = session.phase_duration();
        session.reset();
        prop_assert_eq!(session.phase(), Phase::Ready);
        prop_assert_eq!(session.remaining(), d);
        prop_assert_eq!(session.cycles_completed(), 0);
        prop_assert!(!session.is_running());
        let once = session.clone();
        session.reset();
        prop_assert_eq!(session, once);
    }

    #[test]
    fn at_most_one_transition_per_tick(mut session in arbitrary_session()) {
        let before = session.phase();
        let event = session.tick();
        let after = session.phase();
        if before == after {
            prop_assert!(event.is_none());
        } else {
            prop_assert_eq!(after, before.next());
            prop_assert!(event.map(|e| e.is_transition()).unwrap_or(false));
        }
    }
}

#[test]
fn scenario_four_second_phases() {
    let mut session = BreathingSession::new(4).unwrap();
    session.start();
    assert_eq!((session.phase(), session.remaining()), (Phase::Inhale, 4));
    for _ in 0..4 {
        session.tick();
    }
    assert_eq!((session.phase(), session.remaining()), (Phase::HoldAfterInhale, 4));
    for _ in 0..12 {
        session.tick();
    }
    assert_eq!((session.phase(), session.remaining()), (Phase::Inhale, 4));
    assert_eq!(session.cycles_completed(), 1);
}

#[test]
fn scenario_one_second_phases() {
    let mut session = BreathingSession::new(1).unwrap();
    session.start();
    for _ in 0..4 {
        assert!(session.tick().is_some());
    }
    assert_eq!(session.cycles_completed(), 1);
}

#[test]
fn scenario_pause_during_exhale() {
    let mut session = BreathingSession::new(4).unwrap();
    session.start();
    while !(session.phase() == Phase::Exhale && session.remaining() == 2) {
        session.tick();
    }
    session.pause();
    let frozen = session.clone();
    for _ in 0..5 {
        session.tick();
    }
    assert_eq!(session, frozen);
    session.resume();
    session.tick();
    session.tick();
    assert_eq!(session.phase(), Phase::HoldAfterExhale);
    assert_eq!(session.remaining(), session.phase_duration());
}

#[test]
fn scenario_zero_duration() {
    assert!(matches!(
        BreathingSession::new(0),
        Err(CoreError::InvalidConfiguration { .. })
    ));
}
