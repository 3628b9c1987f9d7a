//! systemd unit manager over the system D-Bus.

use tokio::sync::oneshot;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;
use zbus::zvariant::OwnedObjectPath;
use zbus::{Connection, Proxy};

use crate::netlink::error::Result;
use crate::restart::UnitManager;

const SYSTEMD_BUS: &str = "org.freedesktop.systemd1";
const SYSTEMD_PATH: &str = "/org/freedesktop/systemd1";
const MANAGER_IFACE: &str = "org.freedesktop.systemd1.Manager";

/// Body of `org.freedesktop.systemd1.Manager.JobRemoved`: id, job, unit, result.
type JobRemoved = (u32, OwnedObjectPath, String, String);

/// `org.freedesktop.systemd1.Manager` on the system bus.
pub struct SystemdManager {
    proxy: Proxy<'static>,
}

impl SystemdManager {
    /// Connect to the system bus and subscribe to manager signals.
    pub async fn connect() -> Result<Self> {
        let conn = Connection::system().await?;
        let proxy = Proxy::new(&conn, SYSTEMD_BUS, SYSTEMD_PATH, MANAGER_IFACE).await?;
        // JobRemoved is only broadcast to subscribed clients.
        proxy.call_method("Subscribe", &()).await?;
        Ok(Self { proxy })
    }
}

impl UnitManager for SystemdManager {
    async fn restart_unit(
        &self,
        unit: &str,
        mode: &str,
        done: oneshot::Sender<String>,
    ) -> Result<String> {
        // Listen before queueing so a fast job cannot finish unseen.
        let signals = self.proxy.receive_signal("JobRemoved").await?;
        let job: OwnedObjectPath = self.proxy.call("RestartUnit", &(unit, mode)).await?;
        debug!(unit, mode, job = %job.as_str(), "RestartUnit queued");

        let signals = signals.filter_map(|msg| msg.body().deserialize::<JobRemoved>().ok());
        tokio::spawn(forward_job_result(signals, job.clone(), done));

        Ok(job.as_str().to_string())
    }
}

/// Send the result of job `wanted` on `done`.
///
/// Ends without sending when the receiver is dropped (the attempt was
/// abandoned) or the signal stream closes.
async fn forward_job_result<S>(signals: S, wanted: OwnedObjectPath, done: oneshot::Sender<String>)
where
    S: Stream<Item = JobRemoved>,
{
    let mut done = done;
    tokio::pin!(signals);
    loop {
        tokio::select! {
            _ = done.closed() => {
                debug!(job = %wanted.as_str(), "restart attempt abandoned, dropping listener");
                return;
            }
            signal = signals.next() => match signal {
                Some(signal) => {
                    if let Some(result) = job_result(signal, &wanted) {
                        let _ = done.send(result);
                        return;
                    }
                }
                None => return,
            },
        }
    }
}

/// The result string of a `JobRemoved` signal, if it is about `wanted`.
fn job_result(signal: JobRemoved, wanted: &OwnedObjectPath) -> Option<String> {
    let (_id, job, _unit, result) = signal;
    (job == *wanted).then_some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> OwnedObjectPath {
        OwnedObjectPath::try_from(s).unwrap()
    }

    #[test]
    fn test_job_result_matches_path() {
        let wanted = path("/org/freedesktop/systemd1/job/42");
        let signal = (
            42,
            path("/org/freedesktop/systemd1/job/42"),
            "systemd-networkd.service".to_string(),
            "done".to_string(),
        );
        assert_eq!(job_result(signal, &wanted).as_deref(), Some("done"));
    }

    fn removed(id: u32, result: &str) -> JobRemoved {
        (
            id,
            path(&format!("/org/freedesktop/systemd1/job/{id}")),
            "systemd-networkd.service".to_string(),
            result.to_string(),
        )
    }

    #[tokio::test]
    async fn test_forward_skips_other_jobs() {
        let (tx, rx) = oneshot::channel();
        let signals = tokio_stream::iter([removed(41, "failed"), removed(42, "done")]);
        forward_job_result(signals, path("/org/freedesktop/systemd1/job/42"), tx).await;
        assert_eq!(rx.await.unwrap(), "done");
    }

    #[tokio::test]
    async fn test_forward_ends_when_receiver_dropped() {
        let (tx, rx) = oneshot::channel();
        let listener = tokio::spawn(forward_job_result(
            tokio_stream::pending::<JobRemoved>(),
            path("/org/freedesktop/systemd1/job/42"),
            tx,
        ));
        drop(rx);
        tokio::time::timeout(std::time::Duration::from_secs(5), listener)
            .await
            .expect("listener still running")
            .unwrap();
    }

    #[tokio::test]
    async fn test_forward_ends_with_stream() {
        let (tx, rx) = oneshot::channel();
        let signals = tokio_stream::iter([removed(41, "done")]);
        forward_job_result(signals, path("/org/freedesktop/systemd1/job/42"), tx).await;
        assert!(rx.await.is_err());
    }

    #[test]
    fn test_job_result_ignores_other_jobs() {
        let wanted = path("/org/freedesktop/systemd1/job/42");
        let signal = (
            41,
            path("/org/freedesktop/systemd1/job/41"),
            "other.service".to_string(),
            "failed".to_string(),
        );
        assert!(job_result(signal, &wanted).is_none());
    }
}
