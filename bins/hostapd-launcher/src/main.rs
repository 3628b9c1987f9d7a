//! hostapd-launcher - configure and exec hostapd from SKVS settings.
//!
//! Reads the enabled networks from the SKVS tree, makes sure the wireless
//! interface is named after the first of them, writes a hostapd
//! configuration matching the radio's capabilities and replaces itself with
//! hostapd.

use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wificap::netlink::ifname;
use wificap::nl80211::{CapabilityQuery, KernelDumpSource};

mod hostapd;
mod interface;
mod settings;

use settings::Skvs;

#[derive(Parser)]
#[command(name = "hostapd-launcher", version, about = "Generate a hostapd config from SKVS and exec hostapd")]
struct Cli {
    /// Path to write hostapd.conf to.
    #[arg(long)]
    config_file: PathBuf,

    /// Path to the hostapd binary.
    #[arg(long)]
    hostapd_binary: PathBuf,

    /// SKVS root directory mountpoint.
    #[arg(long)]
    skvs_dir: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,

    /// Seconds to wait after renaming the interface and after restarting
    /// systemd-networkd.
    #[arg(long, default_value_t = 5)]
    sleep_time: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
    debug!("debug mode enabled");

    let skvs = Skvs::new(&cli.skvs_dir);
    let networks = skvs.networks().context("failed to get network list")?;
    if networks.is_empty() {
        info!("no WiFi networks are enabled, exiting");
        return Ok(());
    }
    for network in &networks {
        info!(network = %network.name, "found WiFi network");
    }

    // Validate settings before touching any interface.
    let channel = skvs.channel().context("failed to read channel")?;

    let query = CapabilityQuery::new(KernelDumpSource::new());
    interface::ensure_interface_exists(&query, &networks[0].name, Duration::from_secs(cli.sleep_time))
        .await?;

    let config = hostapd::generate_config(&query, &networks, channel, ifname::mac_address)
        .await
        .context("failed to generate config file")?;
    debug!("generated config file:\n{config}");

    info!(path = %cli.config_file.display(), "writing hostapd config");
    write_config(&cli.config_file, &config)
        .with_context(|| format!("failed to save config file {}", cli.config_file.display()))?;

    info!(binary = %cli.hostapd_binary.display(), "starting hostapd");
    let err = Command::new(&cli.hostapd_binary)
        .arg(&cli.config_file)
        .env_clear()
        .exec();
    Err(err).with_context(|| format!("failed to exec {}", cli.hostapd_binary.display()))
}

fn write_config(path: &Path, config: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)?;
    file.write_all(config.as_bytes())
}
