/// Progress reporting for the row loop.
/// Front ends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of rows to process.
    fn begin(&mut self, _total: usize) {}

    /// Called once per row, including duplicates and unresolved rows.
    fn item_done(&mut self, _done: usize) {}

    /// Called when the loop completes.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Logs progress at `info`, at most once per `step` percent.
pub struct LogProgress {
    total: usize,
    step: usize,
    last_reported: usize,
}

impl LogProgress {
    pub fn new(step: usize) -> Self {
        Self {
            total: 0,
            step: step.max(1),
            last_reported: 0,
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.last_reported = 0;
        log::info!("Processing {} rows...", total);
    }

    fn item_done(&mut self, done: usize) {
        if self.total == 0 {
            return;
        }
        let percent = done * 100 / self.total;
        if percent >= self.last_reported + self.step || done == self.total {
            self.last_reported = percent;
            log::info!("Progress: {}/{} rows ({}%)", done, self.total, percent);
        }
    }

    fn finish(&mut self) {
        log::info!("Finished processing {} rows", self.total);
    }
}
