//! In-memory print job registry
//!
//! Jobs are keyed by id and listed in creation order. Nothing is evicted;
//! the registry lives as long as the process.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::PrintJob;

/// Job persistence seam
pub trait JobStore: Send + Sync {
    /// Add a new job. Fails if the id is already taken.
    fn insert(&self, job: PrintJob) -> AppResult<()>;

    fn get(&self, id: &str) -> Option<PrintJob>;

    /// Apply `f` to the stored job and return the updated copy.
    ///
    /// The job is left untouched when `f` fails.
    fn update(
        &self,
        id: &str,
        f: &mut dyn FnMut(&mut PrintJob) -> AppResult<()>,
    ) -> AppResult<PrintJob>;

    /// All jobs, oldest first
    fn list(&self) -> Vec<PrintJob>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn job_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::PrintJobNotFound,
        format!("Print job not found: {}", id),
    )
    .with_detail("job_id", id)
}

#[derive(Default)]
struct Inner {
    jobs: Vec<PrintJob>,
    index: HashMap<String, usize>,
}

/// Process-local job store
#[derive(Default)]
pub struct MemoryJobStore {
    inner: RwLock<Inner>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobStore for MemoryJobStore {
    fn insert(&self, job: PrintJob) -> AppResult<()> {
        let mut inner = self.inner.write();
        if inner.index.contains_key(&job.id) {
            return Err(AppError::with_message(
                ErrorCode::InternalError,
                format!("Duplicate print job id: {}", job.id),
            ));
        }
        let pos = inner.jobs.len();
        inner.index.insert(job.id.clone(), pos);
        inner.jobs.push(job);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<PrintJob> {
        let inner = self.inner.read();
        inner.index.get(id).map(|&pos| inner.jobs[pos].clone())
    }

    fn update(
        &self,
        id: &str,
        f: &mut dyn FnMut(&mut PrintJob) -> AppResult<()>,
    ) -> AppResult<PrintJob> {
        let mut inner = self.inner.write();
        let pos = *inner.index.get(id).ok_or_else(|| job_not_found(id))?;

        let mut job = inner.jobs[pos].clone();
        f(&mut job)?;
        inner.jobs[pos] = job.clone();
        Ok(job)
    }

    fn list(&self) -> Vec<PrintJob> {
        self.inner.read().jobs.clone()
    }

    fn len(&self) -> usize {
        self.inner.read().jobs.len()
    }
}
