// crates/infra/src/progress.rs
use std::cell::Cell;

use decompose_inp_ports::progress::ProgressSink;
use log::debug;

/// Progress sink for non-interactive runs: logs each distinct percentage.
#[derive(Debug, Default)]
pub struct LogProgress {
    last: Cell<Option<u8>>,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<u8> {
        self.last.get()
    }
}

impl ProgressSink for LogProgress {
    fn set_visible(&self, visible: bool) {
        if visible {
            self.last.set(None);
        }
    }

    fn report(&self, percent: u8) {
        if self.last.get() != Some(percent) {
            debug!("decomposition {percent}%");
            self.last.set(Some(percent));
        }
    }
}
