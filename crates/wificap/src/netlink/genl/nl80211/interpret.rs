//! Interpreters turning decoded nl80211 trees into typed facts.
//!
//! Each interpreter asserts the policy of its input map first, so handing a
//! frequency entry where a band is expected fails with
//! [`Error::PolicyMismatch`](crate::Error::PolicyMismatch) instead of
//! reading the wrong ids.

use super::policy::{BAND, FREQUENCY_ATTR, NL80211_ATTR};
use super::types::{Band, BandKind, HtCapabilities};
use super::{BandAttr, FrequencyAttr, Nl80211Attr};
use crate::netlink::error::Result;
use crate::netlink::tree::AttrMap;

/// Bands of a radio in wire order.
///
/// A radio without `WIPHY_BANDS` yields an empty vector.
pub fn bands_of(radio: &AttrMap) -> Result<Vec<Band>> {
    let radio = radio.expect_policy(NL80211_ATTR.prefix)?;

    let Some(entries) = radio.sequence(Nl80211Attr::WiphyBands)? else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .map(|entry| Band {
            index: entry.index,
            kind: BandKind::from_index(entry.index),
            attrs: entry.map.clone(),
        })
        .collect())
}

/// HT capabilities of one band.
pub fn ht_capabilities_of(band: &AttrMap) -> Result<HtCapabilities> {
    let band = band.expect_policy(BAND.prefix)?;
    let bits = band.require(BandAttr::HtCapa, band.u16(BandAttr::HtCapa)?)?;
    Ok(HtCapabilities::from_bits(bits))
}

/// Center frequencies (MHz) of a band's channels, in wire order.
///
/// Any entry without a frequency fails the whole extraction.
pub fn frequencies_of(band: &AttrMap) -> Result<Vec<u32>> {
    let band = band.expect_policy(BAND.prefix)?;

    let Some(entries) = band.sequence(BandAttr::Freqs)? else {
        return Ok(Vec::new());
    };

    entries
        .iter()
        .map(|entry| {
            let channel = entry.map.expect_policy(FREQUENCY_ATTR.prefix)?;
            channel.require(FrequencyAttr::Freq, channel.u32(FrequencyAttr::Freq)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlink::error::Error;
    use crate::netlink::fixtures;

    fn radio(build: impl FnOnce(&mut crate::netlink::builder::MessageBuilder)) -> AttrMap {
        let body = fixtures::wiphy(0, "phy0", |b| {
            let bands = b.nest_start(Nl80211Attr::WiphyBands as u16);
            build(b);
            b.nest_end(bands);
        });
        NL80211_ATTR.decode(&body).unwrap()
    }

    #[test]
    fn test_bands_in_wire_order() {
        let radio = radio(|b| {
            fixtures::push_band(b, 0, Some(0x00C3), &[2412]);
            fixtures::push_band(b, 1, Some(0x0002), &[5180]);
        });

        let bands = bands_of(&radio).unwrap();
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].kind, BandKind::Band2GHz);
        assert_eq!(bands[1].kind, BandKind::Band5GHz);
        assert_eq!(bands[1].attrs.prefix(), "BAND");
    }

    #[test]
    fn test_radio_without_bands() {
        let body = fixtures::wiphy(0, "phy0", |_| {});
        let radio = NL80211_ATTR.decode(&body).unwrap();
        assert!(bands_of(&radio).unwrap().is_empty());
    }

    #[test]
    fn test_frequencies_preserve_order() {
        let radio = radio(|b| fixtures::push_band(b, 0, Some(0), &[2412, 2417, 2422]));
        let bands = bands_of(&radio).unwrap();
        assert_eq!(frequencies_of(&bands[0].attrs).unwrap(), vec![2412, 2417, 2422]);
    }

    #[test]
    fn test_frequency_entry_without_freq_fails() {
        let radio = radio(|b| {
            let band = b.nest_start(0);
            let list = b.nest_start(BandAttr::Freqs as u16);
            let ok = b.nest_start(0);
            b.append_attr_u32(FrequencyAttr::Freq as u16, 2412);
            b.nest_end(ok);
            let bad = b.nest_start(1);
            b.append_attr_empty(FrequencyAttr::Disabled as u16);
            b.nest_end(bad);
            b.nest_end(list);
            b.nest_end(band);
        });
        let bands = bands_of(&radio).unwrap();
        let err = frequencies_of(&bands[0].attrs).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAttribute {
                policy: "FREQUENCY_ATTR",
                name: "FREQ"
            }
        ));
    }

    #[test]
    fn test_ht_capabilities() {
        let radio = radio(|b| fixtures::push_band(b, 0, Some(0x00C3), &[2412]));
        let bands = bands_of(&radio).unwrap();
        let caps = ht_capabilities_of(&bands[0].attrs).unwrap();
        assert!(caps.rx_ldpc);
        assert!(caps.tx_stbc);
    }

    #[test]
    fn test_ht_capabilities_missing() {
        let radio = radio(|b| fixtures::push_band(b, 0, None, &[2412]));
        let bands = bands_of(&radio).unwrap();
        assert!(matches!(
            ht_capabilities_of(&bands[0].attrs),
            Err(Error::MissingAttribute { name: "HT_CAPA", .. })
        ));
    }

    #[test]
    fn test_interpreters_reject_wrong_policy() {
        let radio = radio(|b| fixtures::push_band(b, 0, Some(0), &[2412]));

        let err = ht_capabilities_of(&radio).unwrap_err();
        assert!(matches!(
            err,
            Error::PolicyMismatch {
                expected: "BAND",
                actual: "NL80211_ATTR"
            }
        ));

        let bands = bands_of(&radio).unwrap();
        assert!(matches!(
            bands_of(&bands[0].attrs),
            Err(Error::PolicyMismatch { .. })
        ));
        assert!(frequencies_of(&radio).is_err());
    }
}
