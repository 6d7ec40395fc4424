// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cancellation and deadline propagation for control plane calls.

use crate::error::{OktetoError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};

/// Carries cancellation and an optional deadline into async operations.
///
/// Cloning a `Context` shares the same cancellation signal.
#[derive(Debug, Clone)]
pub struct Context {
    cancelled: watch::Receiver<bool>,
    deadline: Option<Instant>,
}

/// Cancels every `Context` created alongside it
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        let (_, cancelled) = watch::channel(false);
        Self {
            cancelled,
            deadline: None,
        }
    }

    /// A context that is cancelled when the returned handle is
    pub fn with_cancel() -> (Self, CancelHandle) {
        let (tx, cancelled) = watch::channel(false);
        let ctx = Self {
            cancelled,
            deadline: None,
        };
        (ctx, CancelHandle { tx })
    }

    /// Bound the context by `timeout` from now. An earlier existing deadline wins.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }

    /// Fail fast if the context is already done
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(OktetoError::Cancelled);
        }
        if self.deadline.is_some_and(|d| d <= Instant::now()) {
            return Err(OktetoError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Drive `fut` to completion unless the context is cancelled or its deadline passes first.
    /// The future is dropped on cancellation, aborting whatever it had in flight.
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.check()?;

        let mut cancelled = self.cancelled.clone();
        let on_cancel = async move {
            loop {
                if *cancelled.borrow_and_update() {
                    return;
                }
                // All handles gone: nobody can cancel any more
                if cancelled.changed().await.is_err() {
                    std::future::pending::<()>().await;
                }
            }
        };
        let on_deadline = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            res = fut => res,
            () = on_cancel => Err(OktetoError::Cancelled),
            () = on_deadline => Err(OktetoError::DeadlineExceeded),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}
