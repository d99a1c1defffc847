// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for a pipeline run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _stages: usize) {}

    /// A pipeline stage is starting.
    fn stage(&mut self, _name: &str) {}

    /// One artifact file was written.
    fn artifact_written(&mut self, _path: &Path) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
