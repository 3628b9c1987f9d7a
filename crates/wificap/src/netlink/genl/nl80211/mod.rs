//! nl80211 capability discovery.
//!
//! Read-only access to the wireless configuration family: enumerate radios
//! (wiphys) and logical interfaces, fetch a radio's attribute tree and turn
//! its bands into typed facts.
//!
//! # Example
//!
//! ```rust,no_run
//! use wificap::nl80211::{CapabilityQuery, KernelDumpSource, ht_capabilities_of};
//!
//! # async fn example() -> wificap::Result<()> {
//! let query = CapabilityQuery::new(KernelDumpSource::new());
//!
//! for radio in query.list_physical_radios().await? {
//!     for band in query.find_radio_bands(&radio).await? {
//!         let caps = ht_capabilities_of(&band.attrs)?;
//!         println!("{radio} {}: {}", band.kind, caps.to_hostapd(1));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod interpret;
pub mod policy;
mod query;
mod types;

pub use interpret::{bands_of, frequencies_of, ht_capabilities_of};
pub use policy::{BAND, BITRATE_ATTR, FREQUENCY_ATTR, NL80211_ATTR};
pub use query::{CapabilityQuery, DumpSource, KernelDumpSource};
pub use types::{AmsduSize, Band, BandKind, ChannelWidth, HtCapabilities};

/// Generic netlink family name.
pub const NL80211_GENL_NAME: &str = "nl80211";

/// nl80211 commands used for discovery.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nl80211Cmd {
    Unspec = 0,
    GetWiphy = 1,
    SetWiphy = 2,
    NewWiphy = 3,
    DelWiphy = 4,
    GetInterface = 5,
    SetInterface = 6,
    NewInterface = 7,
    DelInterface = 8,
}

/// Top-level attributes read by this crate.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nl80211Attr {
    Wiphy = 1,
    WiphyName = 2,
    Ifindex = 3,
    Ifname = 4,
    Iftype = 5,
    Mac = 6,
    WiphyBands = 22,
    WiphyFreq = 38,
    Generation = 46,
    Wdev = 153,
    SplitWiphyDump = 174,
    Support5Mhz = 192,
    Support10Mhz = 193,
}

impl From<Nl80211Attr> for u16 {
    fn from(attr: Nl80211Attr) -> Self {
        attr as u16
    }
}

/// Attributes of one `BAND` entry.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandAttr {
    Freqs = 1,
    Rates = 2,
    HtMcsSet = 3,
    HtCapa = 4,
    HtAmpduFactor = 5,
    HtAmpduDensity = 6,
    VhtMcsSet = 7,
    VhtCapa = 8,
}

impl From<BandAttr> for u16 {
    fn from(attr: BandAttr) -> Self {
        attr as u16
    }
}

/// Attributes of one `FREQUENCY_ATTR` entry.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyAttr {
    Freq = 1,
    Disabled = 2,
    NoIr = 3,
    NoIbss = 4,
    Radar = 5,
    MaxTxPower = 6,
}

impl From<FrequencyAttr> for u16 {
    fn from(attr: FrequencyAttr) -> Self {
        attr as u16
    }
}
