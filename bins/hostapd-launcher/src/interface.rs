//! Make sure the wireless interface hostapd will serve on exists.

use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::{Context, bail};
use tracing::{debug, info};
use wificap::netlink::RouteConnection;
use wificap::nl80211::{CapabilityQuery, DumpSource};
use wificap::{RestartCoordinator, SystemdManager};

/// Attempts at restarting systemd-networkd after a rename.
const NETWORKD_RESTARTS: usize = 5;

/// Which interface has to be renamed so that `wanted` exists.
///
/// `None` when `wanted` is already present; otherwise the first interface
/// by name. Fails when there are no wireless interfaces at all.
pub fn rename_source<'a>(
    interfaces: &'a BTreeSet<String>,
    wanted: &str,
) -> anyhow::Result<Option<&'a str>> {
    let Some(first) = interfaces.first() else {
        bail!("found no WiFi interfaces");
    };
    if interfaces.contains(wanted) {
        return Ok(None);
    }
    Ok(Some(first))
}

/// Rename the first wireless interface to `name` unless it already exists,
/// then let systemd-networkd pick up the new name.
pub async fn ensure_interface_exists<D: DumpSource>(
    query: &CapabilityQuery<D>,
    name: &str,
    settle: Duration,
) -> anyhow::Result<()> {
    let interfaces = query
        .list_logical_interfaces()
        .await
        .context("failed to list WiFi interfaces")?;
    debug!(?interfaces, "wireless interfaces");

    let Some(from) = rename_source(&interfaces, name)? else {
        debug!(interface = name, "interface present");
        return Ok(());
    };

    info!(from, to = name, "interface missing, renaming");
    RouteConnection::new()?
        .rename_link(from, name)
        .await
        .with_context(|| format!("failed to rename {from} to {name}"))?;
    tokio::time::sleep(settle).await;

    debug!("restarting systemd-networkd");
    RestartCoordinator::new(RestartCoordinator::NETWORKD)
        .max_attempts(NETWORKD_RESTARTS)
        .restart(SystemdManager::connect)
        .await
        .context("failed to restart systemd-networkd")?;
    tokio::time::sleep(settle).await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_present_interface_needs_no_rename() {
        let interfaces = set(&["wlan0", "wl_private"]);
        assert_eq!(rename_source(&interfaces, "wl_private").unwrap(), None);
    }

    #[test]
    fn test_first_interface_is_renamed() {
        let interfaces = set(&["wlan1", "wlan0"]);
        assert_eq!(rename_source(&interfaces, "wl_private").unwrap(), Some("wlan0"));
    }

    #[test]
    fn test_no_interfaces() {
        let err = rename_source(&BTreeSet::new(), "wl_private").unwrap_err();
        assert!(err.to_string().contains("no WiFi interfaces"));
    }
}
