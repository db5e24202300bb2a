//! Progress persistence listener

use crate::events::{Listener, PlaybackEvent};
use hearth_core::{ProgressRecord, ProgressSink};

/// Writes a progress record for every time update with a known duration
///
/// Subscribe it to a `PlaybackEngine`:
///
/// ```ignore
/// engine.subscribe(ProgressRecorder::new(store.clone()));
/// ```
///
/// Ticks reported before the duration is known are skipped, so a resumed
/// episode never gets its saved percentage overwritten with 0.
#[derive(Debug)]
pub struct ProgressRecorder<S: ProgressSink> {
    sink: S,
}

impl<S: ProgressSink> ProgressRecorder<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: ProgressSink> Listener<PlaybackEvent> for ProgressRecorder<S> {
    fn on_event(&mut self, event: &PlaybackEvent) {
        let PlaybackEvent::TimeUpdate(tick) = event else {
            return;
        };
        if !tick.has_duration() {
            return;
        }

        self.sink.record_progress(ProgressRecord::from_position(
            tick.episode_id.clone(),
            tick.current_time_seconds,
            tick.duration_seconds,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeTick;
    use hearth_core::EpisodeId;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CollectingSink(RefCell<Vec<ProgressRecord>>);

    impl ProgressSink for CollectingSink {
        fn record_progress(&self, record: ProgressRecord) {
            self.0.borrow_mut().push(record);
        }
    }

    fn tick(current: f64, duration: f64) -> PlaybackEvent {
        PlaybackEvent::TimeUpdate(TimeTick {
            episode_id: EpisodeId::new("ep-1"),
            current_time_seconds: current,
            duration_seconds: duration,
            progress_percent: 0.0,
        })
    }

    #[test]
    fn records_ticks_with_duration() {
        let mut recorder = ProgressRecorder::new(CollectingSink::default());
        recorder.on_event(&tick(30.0, 120.0));

        let records = recorder.sink().0.borrow();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].episode_id, EpisodeId::new("ep-1"));
        assert!((records[0].progress_percent - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn skips_ticks_without_duration() {
        let mut recorder = ProgressRecorder::new(CollectingSink::default());
        recorder.on_event(&tick(3.0, 0.0));
        recorder.on_event(&tick(3.0, f64::NAN));
        assert!(recorder.sink().0.borrow().is_empty());
    }

    #[test]
    fn ignores_other_events() {
        let mut recorder = ProgressRecorder::new(CollectingSink::default());
        recorder.on_event(&PlaybackEvent::StateChanged { is_playing: true });
        recorder.on_event(&PlaybackEvent::Ended {
            episode_id: EpisodeId::new("ep-1"),
        });
        assert!(recorder.sink().0.borrow().is_empty());
    }
}
