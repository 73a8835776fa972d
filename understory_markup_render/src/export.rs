// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background export over an immutable snapshot.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use image::RgbaImage;
use tracing::{debug, info};
use understory_markup::Snapshot;

use crate::{Compositor, ExportError};

/// Shared flag for cooperative cancellation.
///
/// Clones observe the same state; cancelling is idempotent.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested on this token or any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub(crate) fn check(&self) -> Result<(), ExportError> {
        if self.is_cancelled() {
            Err(ExportError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Entry point for running [`Compositor::export_with`] on a worker thread.
#[derive(Debug)]
pub struct ExportJob;

impl ExportJob {
    /// Start exporting `snapshot` at `scale` on a new thread.
    #[must_use]
    pub fn spawn(snapshot: Snapshot, scale: f64, compositor: Compositor) -> ExportHandle {
        Self::spawn_with_token(snapshot, scale, compositor, CancellationToken::new())
    }

    /// Like [`spawn`](Self::spawn), observing an existing token.
    #[must_use]
    pub fn spawn_with_token(
        snapshot: Snapshot,
        scale: f64,
        compositor: Compositor,
        token: CancellationToken,
    ) -> ExportHandle {
        let worker_token = token.clone();
        let worker = thread::Builder::new()
            .name("markup-export".to_string())
            .spawn(move || {
                debug!(scale, "export started");
                let result = compositor.export_with(&snapshot, scale, &worker_token);
                match &result {
                    Ok(image) => info!(
                        width = image.width(),
                        height = image.height(),
                        "export finished"
                    ),
                    Err(err) => debug!(%err, "export ended without image"),
                }
                result
            });
        ExportHandle {
            token,
            worker: match worker {
                Ok(handle) => Worker::Running(handle),
                Err(err) => Worker::Failed(err),
            },
        }
    }
}

#[derive(Debug)]
enum Worker {
    Running(JoinHandle<Result<RgbaImage, ExportError>>),
    Failed(std::io::Error),
}

/// A running (or finished) export.
///
/// Dropping the handle detaches the worker; cancel first to stop it early.
#[derive(Debug)]
pub struct ExportHandle {
    token: CancellationToken,
    worker: Worker,
}

impl ExportHandle {
    /// Ask the worker to stop; its result becomes [`ExportError::Cancelled`].
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// The token the worker observes.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Whether the worker has stopped, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        match &self.worker {
            Worker::Running(handle) => handle.is_finished(),
            Worker::Failed(_) => true,
        }
    }

    /// Block until the worker finishes and take its result.
    pub fn wait(self) -> Result<RgbaImage, ExportError> {
        match self.worker {
            Worker::Running(handle) => handle.join().map_err(|_| ExportError::WorkerPanicked)?,
            Worker::Failed(err) => Err(ExportError::Spawn(err)),
        }
    }
}
