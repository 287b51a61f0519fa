// crates/ports/src/progress.rs

/// Fire-and-forget progress display.
pub trait ProgressSink {
    fn set_visible(&self, visible: bool);
    fn report(&self, percent: u8);
}

/// Sink that discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn set_visible(&self, _visible: bool) {}

    fn report(&self, _percent: u8) {}
}
