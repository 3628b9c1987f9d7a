//! Optional deadlines on waits for kernel or service-manager replies.

use std::future::Future;
use std::time::Duration;

use crate::netlink::error::{Error, Result};

/// Await `fut`, failing with [`Error::Timeout`] once `after` elapses.
///
/// `None` waits forever.
pub(crate) async fn with_deadline<T>(
    operation: &'static str,
    after: Option<Duration>,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    match after {
        Some(after) => tokio::time::timeout(after, fut)
            .await
            .map_err(|_| Error::Timeout { operation, after })?,
        None => fut.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_deadline_elapses() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        };
        let err = with_deadline("test wait", Some(Duration::from_secs(1)), slow)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout { operation: "test wait", .. }));
    }

    #[tokio::test]
    async fn test_no_deadline_passes_through() {
        let value = with_deadline("test wait", None, async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
    }
}
