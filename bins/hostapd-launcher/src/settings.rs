//! Operator settings read from the SKVS directory tree.
//!
//! ```text
//! <skvs>/box_name                    SSID of the private network
//! <skvs>/system/wifi/enabled         private network on (presence)
//! <skvs>/system/wifi/password
//! <skvs>/system/wifi/guest/enabled   public network on (presence)
//! <skvs>/system/wifi/guest/password
//! <skvs>/system/wifi/channel         decimal channel number
//! ```

use std::io;
use std::path::PathBuf;

use tracing::debug;

/// SSID used when the box has no name.
pub const DEFAULT_SSID: &str = "Protonet-default";

/// Longest SSID allowed by 802.11, in bytes.
pub const MAX_SSID_LEN: usize = 32;

const TRIMMED: &[char] = &[' ', '\n', '\r', '\t'];

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("channel {value:?} in {} is not an integer", path.display())]
    ChannelNotInteger { path: PathBuf, value: String },

    #[error("channel {value} in {} must be positive", path.display())]
    ChannelNotPositive { path: PathBuf, value: i64 },
}

/// One access-point network to configure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// Interface name, also used as the hostapd BSS name.
    pub name: String,
    pub ssid: String,
    pub password: String,
}

/// Read-only view of an SKVS tree.
#[derive(Debug, Clone)]
pub struct Skvs {
    root: PathBuf,
}

impl Skvs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Network name from `box_name`, or [`DEFAULT_SSID`] when unreadable.
    pub fn ssid(&self) -> String {
        match std::fs::read(self.path("box_name")) {
            Ok(data) => truncate_ssid(&data).trim_matches(TRIMMED).to_string(),
            Err(_) => DEFAULT_SSID.to_string(),
        }
    }

    /// Networks switched on in the tree: private first, then public.
    pub fn networks(&self) -> Result<Vec<Network>, SettingsError> {
        let ssid = self.ssid();
        let mut networks = Vec::new();

        if let Some(password) = self.enabled_password("system/wifi")? {
            debug!("private network enabled");
            networks.push(Network {
                name: "wl_private".to_string(),
                ssid: ssid.clone(),
                password,
            });
        }

        if let Some(password) = self.enabled_password("system/wifi/guest")? {
            debug!("public network enabled");
            networks.push(Network {
                name: "wl_public".to_string(),
                ssid: format!("{ssid} (public)"),
                password,
            });
        }

        Ok(networks)
    }

    /// Configured channel; 1 when not set.
    pub fn channel(&self) -> Result<u32, SettingsError> {
        let path = self.path("system/wifi/channel");
        let Ok(data) = std::fs::read_to_string(&path) else {
            return Ok(1);
        };

        let value = data.trim_matches(TRIMMED);
        let channel: i64 = value.parse().map_err(|_| SettingsError::ChannelNotInteger {
            path: path.clone(),
            value: value.to_string(),
        })?;

        if channel <= 0 {
            return Err(SettingsError::ChannelNotPositive { path, value: channel });
        }
        u32::try_from(channel).map_err(|_| SettingsError::ChannelNotInteger {
            path,
            value: value.to_string(),
        })
    }

    /// The trimmed password under `dir` when `dir/enabled` exists.
    fn enabled_password(&self, dir: &str) -> Result<Option<String>, SettingsError> {
        let dir = self.path(dir);
        let enabled = dir.join("enabled");
        debug!(path = %enabled.display(), "looking for network switch");

        match std::fs::metadata(&enabled) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SettingsError::Read { path: enabled, source }),
        }

        let password = dir.join("password");
        let data = std::fs::read_to_string(&password)
            .map_err(|source| SettingsError::Read { path: password, source })?;
        Ok(Some(data.trim_matches(TRIMMED).to_string()))
    }
}

/// Cut `data` to at most [`MAX_SSID_LEN`] bytes by dropping whole
/// characters from the end, then decode it.
///
/// An invalid byte counts as a one-byte character and decodes to U+FFFD.
pub fn truncate_ssid(data: &[u8]) -> String {
    let mut end = data.len();
    while end > MAX_SSID_LEN {
        end -= last_char_len(&data[..end]);
    }
    String::from_utf8_lossy(&data[..end]).into_owned()
}

/// Byte length of the character ending `data`; 1 when it is not valid UTF-8.
fn last_char_len(data: &[u8]) -> usize {
    (2..=4)
        .filter(|&n| n <= data.len())
        .find(|&n| {
            std::str::from_utf8(&data[data.len() - n..]).is_ok_and(|s| s.chars().count() == 1)
        })
        .unwrap_or(1)
}
