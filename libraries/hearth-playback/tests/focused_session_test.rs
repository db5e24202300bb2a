//! End-to-end focused listening sessions
//!
//! A session over a mock device with progress recorded into a real
//! `ListeningLog`, the way the host application wires it.

mod common;

use common::{episode, episodes, MockDevice};
use hearth_core::EpisodeId;
use hearth_playback::{
    FocusedSession, PlaybackConfig, PlaybackEngine, PlaylistEvent, ProgressRecorder, SleepTick,
};
use hearth_storage::{ListeningLog, MemoryBackend};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

// ===== Test Helpers =====

fn session_with_log() -> (FocusedSession<MockDevice>, ListeningLog) {
    let log = ListeningLog::new(Arc::new(MemoryBackend::new()));
    let mut engine = PlaybackEngine::new(MockDevice::default(), PlaybackConfig::default());
    engine.subscribe(ProgressRecorder::new(log.progress().clone()));
    (FocusedSession::new(engine), log)
}

fn advance(session: &mut FocusedSession<MockDevice>, seconds: f64, duration: f64) {
    let event = session.engine_mut().device_mut().advance(seconds, duration);
    session.handle_device_event(event);
}

fn finish(session: &mut FocusedSession<MockDevice>) {
    let event = session.engine_mut().device_mut().ended();
    session.handle_device_event(event);
}

fn current(session: &FocusedSession<MockDevice>) -> Option<&str> {
    session.engine().current_episode().map(|e| e.id.as_str())
}

// ===== Scenarios =====

#[test]
fn listening_through_a_playlist_records_progress() {
    let (mut session, log) = session_with_log();
    session.start(episodes(&["a", "b", "c"]), 0, false);

    advance(&mut session, 30.0, 60.0);
    assert_eq!(
        log.get_progress(&EpisodeId::new("a")).map(|r| r.progress_percent),
        Some(50.0)
    );

    advance(&mut session, 30.0, 60.0);
    finish(&mut session);
    assert_eq!(current(&session), Some("b"));
    assert_eq!(
        log.get_progress(&EpisodeId::new("a")).map(|r| r.progress_percent),
        Some(100.0)
    );

    advance(&mut session, 10.0, 100.0);
    finish(&mut session);
    assert_eq!(current(&session), Some("c"));

    finish(&mut session);
    assert_eq!(current(&session), Some("c"));
    assert!(!session.engine().is_playing());
    assert_eq!(session.engine().device().loads.len(), 3);
}

#[test]
fn progress_before_duration_is_not_written() {
    let (mut session, log) = session_with_log();
    session.start(episodes(&["a"]), 0, false);

    advance(&mut session, 5.0, f64::NAN);
    assert!(log.get_progress(&EpisodeId::new("a")).is_none());
}

#[test]
fn continue_listening_after_partial_session() {
    let (mut session, log) = session_with_log();
    let list = episodes(&["a", "b", "c"]);
    session.start(list.clone(), 0, false);

    advance(&mut session, 20.0, 80.0);
    session.skip_next();
    advance(&mut session, 80.0, 80.0);
    finish(&mut session);

    let in_progress: Vec<String> = log
        .in_progress(&list)
        .into_iter()
        .map(|view| view.episode.id.to_string())
        .collect();
    assert_eq!(in_progress, vec!["a".to_string()]);
}

#[test]
fn sleep_timer_stops_auto_advance_chain() {
    let (mut session, _log) = session_with_log();
    session.start(episodes(&["a", "b"]), 0, false);
    session.engine_mut().set_sleep_timer(Some(1));

    let mut expired = false;
    for _ in 0..60 {
        expired = session.tick_sleep_timer() == SleepTick::Expired;
    }
    assert!(expired);
    assert!(!session.engine().is_playing());

    // Paused by the timer: nothing ends, nothing advances
    assert_eq!(current(&session), Some("a"));
    assert_eq!(session.playlist().cursor(), Some(0));
}

#[test]
fn reorder_during_playback_keeps_current() {
    let (mut session, _log) = session_with_log();
    session.start(episodes(&["a", "b", "c", "d"]), 2, false);

    session.playlist_mut().reorder(0, 3).unwrap();
    assert_eq!(session.playlist().current().map(|e| e.id.as_str()), Some("c"));

    finish(&mut session);
    assert_eq!(current(&session), Some("d"));
}

#[test]
fn appended_episode_is_reached_by_auto_advance() {
    let (mut session, _log) = session_with_log();
    session.start(episodes(&["a"]), 0, false);
    session.playlist_mut().append(episode("late"));

    finish(&mut session);
    assert_eq!(current(&session), Some("late"));
}

#[test]
fn removing_the_playing_episode_moves_on() {
    let (mut session, _log) = session_with_log();
    session.start(episodes(&["a", "b", "c"]), 1, false);

    let removed = session.remove(&EpisodeId::new("b"));
    assert_eq!(removed.map(|e| e.id), Some(EpisodeId::new("b")));
    assert_eq!(current(&session), Some("c"));
    assert!(session.engine().is_playing());
}

#[test]
fn failed_episode_blocks_auto_advance() {
    let (mut session, _log) = session_with_log();
    session.start(vec![episode("broken"), episode("b")], 0, false);

    assert!(!session.engine().is_playing());
    assert_eq!(session.playlist().cursor(), Some(0));

    // User skips past it manually
    assert!(session.skip_next());
    assert_eq!(current(&session), Some("b"));
    assert!(session.engine().is_playing());
}

#[test]
fn playlist_listeners_follow_the_session() {
    let (mut session, _log) = session_with_log();
    let cursors = Rc::new(RefCell::new(Vec::new()));
    let sink = cursors.clone();
    session
        .playlist_mut()
        .subscribe(move |PlaylistEvent::Changed(snapshot): &PlaylistEvent| {
            sink.borrow_mut().push((snapshot.cursor, snapshot.is_active));
        });

    session.start(episodes(&["a", "b"]), 0, false);
    finish(&mut session);
    session.exit();

    assert_eq!(
        *cursors.borrow(),
        vec![(Some(0), true), (Some(1), true), (None, false)]
    );
    assert_eq!(current(&session), Some("b"));
}
