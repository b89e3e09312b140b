//! Running a batch on a background thread.
//!
//! [`spawn_batch`] moves one batch onto a worker thread so an interactive
//! front end stays responsive. Files are still processed one at a time and
//! reported in input order.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use pdfunlock_core::{BatchResult, FileReport};

use crate::Unlocker;

/// Progress of a background batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// The worker started; `total` files will be processed.
    Started {
        /// Number of files in the batch.
        total: usize,
    },
    /// One file is done.
    FileDone {
        /// 0-based position of the file in the batch.
        index: usize,
        /// What happened to it.
        report: FileReport,
    },
    /// Every file has been processed.
    Finished,
}

/// Handle to a batch running on a worker thread.
pub struct BatchHandle {
    events: Receiver<BatchEvent>,
    worker: JoinHandle<BatchResult>,
}

impl BatchHandle {
    /// Events in the order the worker produced them.
    ///
    /// The iterator ends once the worker has sent [`BatchEvent::Finished`]
    /// and dropped its sender.
    pub fn events(&self) -> mpsc::Iter<'_, BatchEvent> {
        self.events.iter()
    }

    /// Return the next event if one is ready, without blocking.
    pub fn try_next_event(&self) -> Option<BatchEvent> {
        self.events.try_recv().ok()
    }

    /// Whether the worker thread has finished.
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Block until the batch is done and return its result.
    ///
    /// If the worker thread panicked, the panic is resumed on the caller.
    pub fn wait(self) -> BatchResult {
        match self.worker.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

impl std::fmt::Debug for BatchHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchHandle")
            .field("finished", &self.worker.is_finished())
            .finish_non_exhaustive()
    }
}

/// Process `paths` with `password` on a new thread.
///
/// Events are buffered, so the batch completes even if nobody reads them.
pub fn spawn_batch(unlocker: Unlocker, paths: Vec<PathBuf>, password: String) -> BatchHandle {
    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        // Sends only fail once the handle is dropped; the batch still runs to
        // completion so every file ends up in a consistent state.
        let _ = tx.send(BatchEvent::Started { total: paths.len() });
        let result = unlocker.process_with_progress(&paths, &password, |index, report| {
            let _ = tx.send(BatchEvent::FileDone {
                index,
                report: report.clone(),
            });
        });
        let _ = tx.send(BatchEvent::Finished);
        result
    });
    BatchHandle { events: rx, worker }
}
