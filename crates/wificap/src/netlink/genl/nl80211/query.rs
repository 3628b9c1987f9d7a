//! Capability queries over nl80211 dumps.

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::{debug, warn};

use super::interpret::bands_of;
use super::policy::NL80211_ATTR;
use super::types::Band;
use super::{NL80211_GENL_NAME, Nl80211Attr, Nl80211Cmd};
use crate::deadline::with_deadline;
use crate::netlink::error::{Error, Result};
use crate::netlink::genl::{DumpRequest, GenlSession};
use crate::netlink::reply::ReplySequence;
use crate::netlink::tree::AttrMap;

/// Something that can answer an nl80211 dump request.
#[allow(async_fn_in_trait)]
pub trait DumpSource {
    /// Run one dump of `cmd` and return every reply.
    async fn dump(&self, cmd: Nl80211Cmd) -> Result<ReplySequence>;
}

/// Dumps from the running kernel.
///
/// Every call opens a fresh generic netlink session, resolves the family and
/// closes the session again, so no state survives between queries.
#[derive(Debug, Clone, Default)]
pub struct KernelDumpSource {
    timeout: Option<Duration>,
}

impl KernelDumpSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up on a dump that has not completed after `after`.
    pub fn timeout(mut self, after: Duration) -> Self {
        self.timeout = Some(after);
        self
    }
}

impl DumpSource for KernelDumpSource {
    async fn dump(&self, cmd: Nl80211Cmd) -> Result<ReplySequence> {
        with_deadline("nl80211 dump", self.timeout, async {
            let session = GenlSession::open()?;
            let family = session.family(NL80211_GENL_NAME).await?;
            session
                .dump_sync(DumpRequest::new(family.id, cmd as u8))
                .await
        })
        .await
    }
}

/// Capability facts about the radios and interfaces of the host.
#[derive(Debug, Clone)]
pub struct CapabilityQuery<D> {
    source: D,
}

impl<D: DumpSource> CapabilityQuery<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    /// Names of all radios (wiphys).
    pub async fn list_physical_radios(&self) -> Result<BTreeSet<String>> {
        self.collect_names(Nl80211Cmd::GetWiphy, Nl80211Attr::WiphyName)
            .await
    }

    /// Names of all wireless network interfaces.
    pub async fn list_logical_interfaces(&self) -> Result<BTreeSet<String>> {
        self.collect_names(Nl80211Cmd::GetInterface, Nl80211Attr::Ifname)
            .await
    }

    /// Attribute tree of the radio called `name`.
    ///
    /// When the kernel answers with more than one message for the radio,
    /// the first one wins.
    pub async fn radio_attributes(&self, name: &str) -> Result<AttrMap> {
        let radios = self.decode_all(Nl80211Cmd::GetWiphy).await?;

        let mut matching = radios
            .into_iter()
            .filter(|radio| radio.string(Nl80211Attr::WiphyName).ok().flatten() == Some(name));

        let first = matching.next().ok_or_else(|| Error::RadioNotFound {
            name: name.to_string(),
        })?;

        let extra = matching.count();
        if extra > 0 {
            warn!(radio = name, extra, "radio reported more than once, using the first reply");
        }

        Ok(first)
    }

    /// Whether any radio advertises 5 MHz channel support.
    ///
    /// The first reply carrying the attribute decides; no reply carrying
    /// it means `false`.
    pub async fn has_5mhz_support(&self) -> Result<bool> {
        for radio in self.decode_all(Nl80211Cmd::GetWiphy).await? {
            if radio.contains(Nl80211Attr::Support5Mhz) {
                return radio.flag(Nl80211Attr::Support5Mhz);
            }
        }
        Ok(false)
    }

    /// Bands of the radio called `name`.
    ///
    /// Fails with [`Error::NoBands`] when the radio exists but reports none.
    pub async fn find_radio_bands(&self, name: &str) -> Result<Vec<Band>> {
        let radio = self.radio_attributes(name).await?;
        let bands = bands_of(&radio)?;
        if bands.is_empty() {
            return Err(Error::NoBands {
                radio: name.to_string(),
            });
        }
        Ok(bands)
    }

    async fn decode_all(&self, cmd: Nl80211Cmd) -> Result<Vec<AttrMap>> {
        let replies = self.source.dump(cmd).await?;
        let maps = replies
            .data_bodies()?
            .into_iter()
            .map(|body| NL80211_ATTR.decode(body))
            .collect::<Result<Vec<_>>>()?;
        debug!(?cmd, replies = maps.len(), "decoded nl80211 dump");
        Ok(maps)
    }

    async fn collect_names(&self, cmd: Nl80211Cmd, attr: Nl80211Attr) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for map in self.decode_all(cmd).await? {
            if let Some(name) = map.string(attr)? {
                names.insert(name.to_string());
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::netlink::fixtures;
    use crate::netlink::genl::nl80211::BandKind;

    /// Serves the same canned replies for every command.
    struct Canned {
        replies: ReplySequence,
        calls: AtomicUsize,
    }

    impl Canned {
        fn new(replies: ReplySequence) -> Self {
            Self {
                replies,
                calls: AtomicUsize::new(0),
            }
        }

        fn bodies(bodies: &[Vec<u8>]) -> Self {
            Self::new(fixtures::dump(3, bodies))
        }
    }

    impl DumpSource for Canned {
        async fn dump(&self, _cmd: Nl80211Cmd) -> Result<ReplySequence> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.replies.clone())
        }
    }

    fn wiphy_with_freq(name: &str, freq: u32) -> Vec<u8> {
        fixtures::wiphy(0, name, |b| b.append_attr_u32(Nl80211Attr::WiphyFreq as u16, freq))
    }

    #[tokio::test]
    async fn test_radio_names_are_deduplicated() {
        let query = CapabilityQuery::new(Canned::bodies(&[
            fixtures::wiphy(0, "phy0", |_| {}),
            fixtures::wiphy(0, "phy0", |_| {}),
            fixtures::wiphy(1, "phy1", |_| {}),
        ]));

        let radios = query.list_physical_radios().await.unwrap();
        assert_eq!(radios.into_iter().collect::<Vec<_>>(), vec!["phy0", "phy1"]);
    }

    #[tokio::test]
    async fn test_interface_names() {
        let query = CapabilityQuery::new(Canned::bodies(&[
            fixtures::interface(3, "wlan0", 0),
            fixtures::interface(4, "wlan1", 0),
            fixtures::interface(3, "wlan0", 0),
        ]));

        let names = query.list_logical_interfaces().await.unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("wlan1"));
    }

    #[tokio::test]
    async fn test_radio_not_found() {
        let query = CapabilityQuery::new(Canned::bodies(&[fixtures::wiphy(0, "phy0", |_| {})]));

        let err = query.radio_attributes("phy1").await.unwrap_err();
        assert!(matches!(err, Error::RadioNotFound { ref name } if name == "phy1"));
    }

    #[tokio::test]
    async fn test_radio_first_match_wins() {
        let query = CapabilityQuery::new(Canned::bodies(&[
            wiphy_with_freq("phy1", 2412),
            wiphy_with_freq("phy1", 2437),
        ]));

        let radio = query.radio_attributes("phy1").await.unwrap();
        assert_eq!(radio.u32(Nl80211Attr::WiphyFreq).unwrap(), Some(2412));
    }

    #[tokio::test]
    async fn test_5mhz_flag_in_third_message() {
        let query = CapabilityQuery::new(Canned::bodies(&[
            fixtures::wiphy(0, "phy0", |_| {}),
            fixtures::wiphy(1, "phy1", |_| {}),
            fixtures::wiphy(2, "phy2", |b| {
                b.append_attr_empty(Nl80211Attr::Support5Mhz as u16)
            }),
        ]));
        assert!(query.has_5mhz_support().await.unwrap());
    }

    #[tokio::test]
    async fn test_5mhz_flag_absent() {
        let query = CapabilityQuery::new(Canned::bodies(&[
            fixtures::wiphy(0, "phy0", |_| {}),
            fixtures::wiphy(1, "phy1", |_| {}),
        ]));
        assert!(!query.has_5mhz_support().await.unwrap());
    }

    #[tokio::test]
    async fn test_kernel_error_fails_query() {
        let mut raw = fixtures::data_message(3, &fixtures::wiphy(0, "phy0", |_| {}));
        raw.extend(fixtures::error_message(3, -libc::ENOBUFS));
        let query = CapabilityQuery::new(Canned::new(ReplySequence::from_bytes(&raw).unwrap()));

        let err = query.list_physical_radios().await.unwrap_err();
        assert_eq!(err.errno(), Some(libc::ENOBUFS));
    }

    #[tokio::test]
    async fn test_find_radio_bands() {
        let query = CapabilityQuery::new(Canned::bodies(&[
            fixtures::wiphy(0, "phy0", |b| {
                let bands = b.nest_start(Nl80211Attr::WiphyBands as u16);
                fixtures::push_band(b, 0, Some(0x00C3), &[2412, 2417]);
                fixtures::push_band(b, 1, Some(0x0002), &[5180]);
                b.nest_end(bands);
            }),
            fixtures::wiphy(1, "phy1", |_| {}),
        ]));

        let bands = query.find_radio_bands("phy0").await.unwrap();
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].kind, BandKind::Band2GHz);

        let err = query.find_radio_bands("phy1").await.unwrap_err();
        assert!(matches!(err, Error::NoBands { ref radio } if radio == "phy1"));
    }

    #[tokio::test]
    async fn test_each_query_dumps_again() {
        let query = CapabilityQuery::new(Canned::bodies(&[fixtures::wiphy(0, "phy0", |_| {})]));
        query.list_physical_radios().await.unwrap();
        query.has_5mhz_support().await.unwrap();
        assert_eq!(query.source().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_undeclared_attribute_fails_decode() {
        let body = fixtures::attrs(|b| b.append_attr_u32(900, 1));
        let query = CapabilityQuery::new(Canned::bodies(&[body]));
        let err = query.list_physical_radios().await.unwrap_err();
        assert!(err.is_decode());
    }
}
