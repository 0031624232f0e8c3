// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for the render loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to write.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each page image is on disk. `index` is 1-based.
    fn page_done(&mut self, _index: usize, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Collects what it is told; handy for tests and summaries.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub done: Vec<usize>,
    pub messages: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.messages.push(s!(msg));
    }
    fn page_done(&mut self, index: usize, _path: &Path) {
        self.done.push(index);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
