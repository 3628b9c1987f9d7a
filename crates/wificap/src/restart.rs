//! Bounded-retry restart of a service-manager unit.
//!
//! Each attempt asks the manager to restart the unit and then waits for the
//! job's terminal status on a fresh single-use channel. `"done"` ends the
//! loop; anything else consumes an attempt.

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::deadline::with_deadline;
use crate::netlink::error::{Error, Result};

/// Status reported for a successfully completed job.
pub const JOB_DONE: &str = "done";

/// Status recorded when the manager dropped the channel without reporting.
const JOB_LOST: &str = "lost";

/// A service manager able to restart units.
#[allow(async_fn_in_trait)]
pub trait UnitManager {
    /// Queue a restart of `unit` with the given job `mode` and return the
    /// job handle. The job's terminal status must be sent on `done`.
    async fn restart_unit(
        &self,
        unit: &str,
        mode: &str,
        done: oneshot::Sender<String>,
    ) -> Result<String>;
}

/// Restarts one unit with a bounded number of attempts.
#[derive(Debug, Clone)]
pub struct RestartCoordinator {
    unit: String,
    mode: String,
    max_attempts: usize,
    attempt_timeout: Option<Duration>,
}

impl RestartCoordinator {
    /// Unit name of systemd's network daemon.
    pub const NETWORKD: &'static str = "systemd-networkd.service";

    /// Coordinator for `unit` with mode `"replace"` and 5 attempts.
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            mode: "replace".to_string(),
            max_attempts: 5,
            attempt_timeout: None,
        }
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Fail with [`Error::Timeout`] when one attempt reports nothing within `after`.
    pub fn attempt_timeout(mut self, after: Duration) -> Self {
        self.attempt_timeout = Some(after);
        self
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Connect to the manager with `connect`, then restart the unit.
    ///
    /// A connection failure is returned as is and consumes no attempt.
    pub async fn restart<M, F, Fut>(&self, connect: F) -> Result<()>
    where
        M: UnitManager,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<M>>,
    {
        let manager = connect().await?;
        self.restart_with(&manager).await
    }

    /// Restart the unit through an already connected manager.
    pub async fn restart_with<M: UnitManager>(&self, manager: &M) -> Result<()> {
        let mut last_status = String::new();

        for attempt in 1..=self.max_attempts {
            let (tx, rx) = oneshot::channel();
            let job = manager.restart_unit(&self.unit, &self.mode, tx).await?;
            info!(unit = %self.unit, attempt, %job, "restart queued");

            let status = with_deadline("unit restart", self.attempt_timeout, async {
                Ok(rx.await.unwrap_or_else(|_| JOB_LOST.to_string()))
            })
            .await?;

            if status == JOB_DONE {
                info!(unit = %self.unit, attempt, "restart finished");
                return Ok(());
            }

            warn!(unit = %self.unit, attempt, %status, "restart did not complete");
            last_status = status;
        }

        Err(Error::RestartFailed {
            unit: self.unit.clone(),
            attempts: self.max_attempts,
            last_status,
        })
    }
}
