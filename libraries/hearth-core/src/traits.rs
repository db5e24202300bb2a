/// Core traits for Hearth
use crate::types::ProgressRecord;

/// Destination for per-episode listening progress
///
/// Implemented by the persistent progress store. The playback crate only sees
/// this trait, so it never depends on how (or whether) progress is stored.
///
/// Writes are fire-and-forget: a sink that cannot persist a record is expected
/// to log and drop it rather than fail the playback tick that produced it.
pub trait ProgressSink {
    /// Upsert the progress record for `record.episode_id`
    fn record_progress(&self, record: ProgressRecord);
}

impl<T: ProgressSink + ?Sized> ProgressSink for &T {
    fn record_progress(&self, record: ProgressRecord) {
        (**self).record_progress(record);
    }
}

impl<T: ProgressSink + ?Sized> ProgressSink for std::rc::Rc<T> {
    fn record_progress(&self, record: ProgressRecord) {
        (**self).record_progress(record);
    }
}

impl<T: ProgressSink + ?Sized> ProgressSink for std::sync::Arc<T> {
    fn record_progress(&self, record: ProgressRecord) {
        (**self).record_progress(record);
    }
}
