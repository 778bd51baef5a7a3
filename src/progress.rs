// src/progress.rs
/// Status reporting for long-running operations (scrape, analysis).
/// Frontends implement this to surface what happened to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something failed and the user should see it.
    fn failed(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects everything it is told. Handy for tests and for UIs that render later.
#[derive(Debug, Default)]
pub struct RecordedProgress {
    pub lines: Vec<String>,
    pub failures: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordedProgress {
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn failed(&mut self, msg: &str) { self.failures.push(s!(msg)); }
    fn finish(&mut self) { self.finished = true; }
}
