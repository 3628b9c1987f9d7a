//! Typed views over nl80211 capability attributes.

use std::fmt;

use crate::netlink::tree::AttrMap;

/// HT channel width the radio supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelWidth {
    /// 20 MHz only.
    Ht20,
    /// 20 and 40 MHz.
    Ht40,
}

/// Maximum A-MSDU length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmsduSize {
    Max3839,
    Max7935,
}

/// HT capability flags, projected from the 16-bit `BAND_ATTR_HT_CAPA` word.
///
/// Mutually exclusive capabilities are enums, so a value can never claim
/// both widths or both A-MSDU sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtCapabilities {
    pub rx_ldpc: bool,
    pub width: ChannelWidth,
    pub short_gi_20: bool,
    pub short_gi_40: bool,
    pub tx_stbc: bool,
    /// Number of RX STBC streams (0..=3).
    pub rx_stbc: u8,
    pub max_amsdu: AmsduSize,
    pub dsss_cck_40: bool,
}

impl HtCapabilities {
    const LDPC: u16 = 0x0001;
    const HT40: u16 = 0x0002;
    const SGI20: u16 = 0x0020;
    const SGI40: u16 = 0x0040;
    const TX_STBC: u16 = 0x0080;
    const RX_STBC_SHIFT: u16 = 8;
    const MAX_AMSDU_7935: u16 = 0x0800;
    const DSSS_CCK_40: u16 = 0x1000;

    /// Project a raw capability word.
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            rx_ldpc: bits & Self::LDPC != 0,
            width: if bits & Self::HT40 != 0 {
                ChannelWidth::Ht40
            } else {
                ChannelWidth::Ht20
            },
            short_gi_20: bits & Self::SGI20 != 0,
            short_gi_40: bits & Self::SGI40 != 0,
            tx_stbc: bits & Self::TX_STBC != 0,
            rx_stbc: ((bits >> Self::RX_STBC_SHIFT) & 0x3) as u8,
            max_amsdu: if bits & Self::MAX_AMSDU_7935 != 0 {
                AmsduSize::Max7935
            } else {
                AmsduSize::Max3839
            },
            dsss_cck_40: bits & Self::DSSS_CCK_40 != 0,
        }
    }

    /// Render the hostapd `ht_capab` value for a radio tuned to `channel`.
    ///
    /// With 40 MHz support the secondary channel sits above the primary on
    /// channels 1-7 and below it from 8 on. LDPC and the 7935-byte A-MSDU
    /// size are not advertised; only one RX STBC stream is.
    pub fn to_hostapd(&self, channel: u32) -> String {
        let mut out = String::new();
        match self.width {
            ChannelWidth::Ht20 => out.push_str("[HT20]"),
            ChannelWidth::Ht40 if channel < 8 => out.push_str("[HT40+]"),
            ChannelWidth::Ht40 => out.push_str("[HT40-]"),
        }
        if self.short_gi_20 {
            out.push_str("[SHORT-GI-20]");
        }
        if self.short_gi_40 {
            out.push_str("[SHORT-GI-40]");
        }
        if self.dsss_cck_40 {
            out.push_str("[DSSS_CCK-40]");
        }
        if self.max_amsdu == AmsduSize::Max3839 {
            out.push_str("[MAX-AMSDU-3839]");
        }
        if self.tx_stbc {
            out.push_str("[TX-STBC]");
        }
        if self.rx_stbc == 1 {
            out.push_str("[RX-STBC1]");
        }
        out
    }
}

impl From<u16> for HtCapabilities {
    fn from(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

/// Frequency band, keyed by the index of its `WIPHY_BANDS` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BandKind {
    Band2GHz,
    Band5GHz,
    Band60GHz,
    Band6GHz,
    BandS1GHz,
    BandLc,
    Other(u16),
}

impl BandKind {
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => BandKind::Band2GHz,
            1 => BandKind::Band5GHz,
            2 => BandKind::Band60GHz,
            3 => BandKind::Band6GHz,
            4 => BandKind::BandS1GHz,
            5 => BandKind::BandLc,
            other => BandKind::Other(other),
        }
    }
}

impl fmt::Display for BandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandKind::Band2GHz => f.write_str("2.4 GHz"),
            BandKind::Band5GHz => f.write_str("5 GHz"),
            BandKind::Band60GHz => f.write_str("60 GHz"),
            BandKind::Band6GHz => f.write_str("6 GHz"),
            BandKind::BandS1GHz => f.write_str("S1G"),
            BandKind::BandLc => f.write_str("LC"),
            BandKind::Other(i) => write!(f, "band {i}"),
        }
    }
}

/// One band of a radio, with its `BAND` attribute map.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub index: u16,
    pub kind: BandKind,
    pub attrs: AttrMap,
}
