//! hostapd configuration rendering.

use std::fmt::Write as _;

use anyhow::{Context, bail};
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use tracing::{debug, info};
use wificap::nl80211::{CapabilityQuery, DumpSource, ht_capabilities_of};

use crate::settings::Network;

/// PBKDF2 rounds for a WPA pre-shared key (IEEE 802.11i).
const PSK_ROUNDS: u32 = 4096;

/// Derive the 256-bit WPA PSK for `ssid` and return it as lowercase hex.
pub fn wpa_psk(ssid: &str, passphrase: &str) -> String {
    let mut key = [0u8; 32];
    pbkdf2_hmac::<Sha1>(passphrase.as_bytes(), ssid.as_bytes(), PSK_ROUNDS, &mut key);
    hex(&key)
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

/// BSSID for the second BSS: the primary address, locally administered,
/// with its last octet set to 1.
pub fn derive_bssid(mut mac: [u8; 6]) -> [u8; 6] {
    mac[0] |= 0x02;
    mac[5] = 0x01;
    mac
}

pub fn format_mac(mac: &[u8; 6]) -> String {
    mac.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(":")
}

/// Everything the configuration file depends on.
#[derive(Debug, Clone)]
pub struct ConfigParams<'a> {
    pub ieee80211n: bool,
    pub channel: u32,
    pub ht_capab: String,
    pub primary: &'a Network,
    /// Second network and the BSSID it is served on.
    pub secondary: Option<(&'a Network, String)>,
}

/// Render a hostapd configuration file.
pub fn render(params: &ConfigParams<'_>) -> String {
    let mut out = String::new();
    let ieee80211n = if params.ieee80211n { 1 } else { 0 };

    let _ = writeln!(out, "ctrl_interface=/var/run/hostapd");
    let _ = writeln!(out, "driver=nl80211");
    let _ = writeln!(out, "hw_mode=g");
    let _ = writeln!(out, "ieee80211n={ieee80211n}");
    let _ = writeln!(out, "ieee80211d=1");
    let _ = writeln!(out, "ieee80211h=0");
    let _ = writeln!(out, "country_code=US");
    let _ = writeln!(out, "wme_enabled=1");
    let _ = writeln!(out, "wmm_enabled=1");
    let _ = writeln!(out, "channel={}", params.channel);
    let _ = writeln!(out, "ht_capab={}", params.ht_capab);
    let _ = writeln!(out, "interface={}", params.primary.name);
    let _ = writeln!(out, "logger_stdout=-1");
    let _ = writeln!(out, "logger_stdout_level=2");
    let _ = writeln!(out);
    let _ = writeln!(out, "ssid={}", params.primary.ssid);
    let _ = writeln!(out, "macaddr_acl=0");
    let _ = writeln!(out, "auth_algs=1");
    let _ = writeln!(out, "ignore_broadcast_ssid=0");
    write_wpa(&mut out, params.primary);

    if let Some((network, bssid)) = &params.secondary {
        let _ = writeln!(out);
        let _ = writeln!(out, "bss={}", network.name);
        let _ = writeln!(out, "bssid={bssid}");
        let _ = writeln!(out, "ssid={}", network.ssid);
        write_wpa(&mut out, network);
    }

    out
}

fn write_wpa(out: &mut String, network: &Network) {
    let _ = writeln!(out, "wpa=2");
    let _ = writeln!(out, "wpa_key_mgmt=WPA-PSK");
    let _ = writeln!(out, "rsn_pairwise=CCMP");
    let _ = writeln!(out, "wpa_psk={}", wpa_psk(&network.ssid, &network.password));
}

/// Query the radios and render the configuration for `networks`.
///
/// The first radio by name supplies the HT capabilities (from its first
/// band). A second network gets a BSSID derived from the hardware address
/// of the first network's interface, looked up with `mac_of`.
pub async fn generate_config<D, F>(
    query: &CapabilityQuery<D>,
    networks: &[Network],
    channel: u32,
    mac_of: F,
) -> anyhow::Result<String>
where
    D: DumpSource,
    F: Fn(&str) -> wificap::Result<[u8; 6]>,
{
    let Some(primary) = networks.first() else {
        bail!("no networks to configure");
    };

    let ieee80211n = query
        .has_5mhz_support()
        .await
        .context("failed to query 5 MHz support")?;

    let radios = query
        .list_physical_radios()
        .await
        .context("failed to list WiFi radios")?;
    let Some(radio) = radios.first() else {
        bail!("no WiFi physical interfaces found");
    };

    let bands = query
        .find_radio_bands(radio)
        .await
        .with_context(|| format!("failed to read bands of {radio}"))?;
    let caps = ht_capabilities_of(&bands[0].attrs)
        .with_context(|| format!("failed to read HT capabilities of {radio}"))?;
    let ht_capab = caps.to_hostapd(channel);
    debug!(%radio, band = %bands[0].kind, %ht_capab, "HT capabilities");

    let secondary = match networks.get(1) {
        Some(network) => {
            let mac = mac_of(&primary.name)
                .with_context(|| format!("failed to read hardware address of {}", primary.name))?;
            let bssid = format_mac(&derive_bssid(mac));
            info!(bss = %network.name, %bssid, "adding second BSS");
            Some((network, bssid))
        }
        None => None,
    };

    Ok(render(&ConfigParams {
        ieee80211n,
        channel,
        ht_capab,
        primary,
        secondary,
    }))
}
