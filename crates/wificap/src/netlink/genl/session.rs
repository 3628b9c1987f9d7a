//! Generic netlink session with family resolution.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, trace, warn};

use super::header::GenlMsgHdr;
use super::{CTRL_ATTR, CtrlAttr, CtrlAttrMcastGrp, CtrlCmd, GENL_ID_CTRL};
use crate::netlink::builder::MessageBuilder;
use crate::netlink::error::{Error, Result};
use crate::netlink::message::{MessageIter, NLM_F_ACK, NLM_F_DUMP, NLM_F_REQUEST};
use crate::netlink::reply::{ReplyKind, ReplyMessage, ReplySequence};
use crate::netlink::socket::{NetlinkSocket, Protocol};
use crate::netlink::tree::AttrMap;

/// A resolved generic netlink family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    /// Dynamically assigned family id (used as nlmsg_type).
    pub id: u16,
    pub name: String,
    pub version: u32,
    /// Extra header bytes after genlmsghdr.
    pub hdr_size: u32,
    pub max_attr: u32,
    /// Multicast groups: name -> group id.
    pub mcast_groups: HashMap<String, u32>,
}

impl Family {
    /// Build from a controller reply decoded under `CTRL_ATTR`.
    pub fn from_attrs(attrs: &AttrMap) -> Result<Self> {
        let attrs = attrs.expect_policy(CTRL_ATTR.prefix)?;

        let id = attrs.require(CtrlAttr::FamilyId, attrs.u16(CtrlAttr::FamilyId)?)?;
        let name = attrs
            .string(CtrlAttr::FamilyName)?
            .unwrap_or_default()
            .to_string();

        let mut mcast_groups = HashMap::new();
        for group in attrs.sequence(CtrlAttr::McastGroups)?.unwrap_or_default() {
            let name = group.map.string(CtrlAttrMcastGrp::Name)?;
            let id = group.map.u32(CtrlAttrMcastGrp::Id)?;
            if let (Some(name), Some(id)) = (name, id) {
                mcast_groups.insert(name.to_string(), id);
            }
        }

        Ok(Self {
            id,
            name,
            version: attrs.u32(CtrlAttr::Version)?.unwrap_or(0),
            hdr_size: attrs.u32(CtrlAttr::HdrSize)?.unwrap_or(0),
            max_attr: attrs.u32(CtrlAttr::MaxAttr)?.unwrap_or(0),
            mcast_groups,
        })
    }
}

/// A dump request for one family command.
///
/// ```ignore
/// let request = DumpRequest::new(family.id, Nl80211Cmd::GetWiphy as u8);
/// let replies = session.dump_sync(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DumpRequest {
    builder: MessageBuilder,
}

impl DumpRequest {
    /// Start a dump of `cmd` on the family with id `family_id`.
    pub fn new(family_id: u16, cmd: u8) -> Self {
        Self::with_version(family_id, cmd, 0)
    }

    /// Like [`DumpRequest::new`] with an explicit interface version.
    pub fn with_version(family_id: u16, cmd: u8, version: u8) -> Self {
        let mut builder = MessageBuilder::new(family_id, NLM_F_REQUEST | NLM_F_DUMP);
        builder.append(&GenlMsgHdr::new(cmd, version));
        Self { builder }
    }

    /// Add a u32 filter attribute.
    pub fn attr_u32(mut self, attr: u16, value: u32) -> Self {
        self.builder.append_attr_u32(attr, value);
        self
    }

    /// Add a flag attribute.
    pub fn flag(mut self, attr: u16) -> Self {
        self.builder.append_attr_empty(attr);
        self
    }
}

/// Generic netlink session.
///
/// Owns one socket and a per-session family cache. Requests are sent one at
/// a time: every method awaits the complete answer before returning. The
/// socket is closed when the session is dropped.
pub struct GenlSession {
    socket: NetlinkSocket,
    families: RwLock<HashMap<String, Family>>,
}

impl GenlSession {
    /// Open a generic netlink socket.
    pub fn open() -> Result<Self> {
        Ok(Self::from_socket(NetlinkSocket::new(Protocol::Generic)?))
    }

    /// Wrap an existing `Protocol::Generic` socket.
    pub fn from_socket(socket: NetlinkSocket) -> Self {
        Self {
            socket,
            families: RwLock::new(HashMap::new()),
        }
    }

    pub fn socket(&self) -> &NetlinkSocket {
        &self.socket
    }

    /// Resolve a family by name, consulting this session's cache first.
    pub async fn family(&self, name: &str) -> Result<Family> {
        {
            let cache = self.families.read().unwrap_or_else(|e| e.into_inner());
            if let Some(family) = cache.get(name) {
                return Ok(family.clone());
            }
        }

        let family = self.query_family(name).await?;
        debug!(family = name, id = family.id, "resolved generic netlink family");

        self.families
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), family.clone());

        Ok(family)
    }

    /// Send a dump request and collect every reply up to DONE or ERROR.
    ///
    /// The returned sequence still contains bookkeeping messages; an ERROR
    /// terminates it and is surfaced by [`ReplySequence::data_bodies`].
    pub async fn dump_sync(&self, request: DumpRequest) -> Result<ReplySequence> {
        let replies = self.exchange(request.builder).await?;
        debug!(messages = replies.len(), "dump complete");
        Ok(replies)
    }

    async fn query_family(&self, name: &str) -> Result<Family> {
        let mut builder = MessageBuilder::new(GENL_ID_CTRL, NLM_F_REQUEST | NLM_F_ACK);
        builder.append(&GenlMsgHdr::new(CtrlCmd::GetFamily as u8, 1));
        builder.append_attr_str(CtrlAttr::FamilyName as u16, name);

        let replies = self.exchange(builder).await?;
        family_from_replies(&replies, name)
    }

    async fn exchange(&self, mut builder: MessageBuilder) -> Result<ReplySequence> {
        let seq = self.socket.next_seq();
        builder.set_seq(seq);
        builder.set_pid(self.socket.pid());
        self.socket.send(&builder.finish()).await?;

        let mut replies = ReplySequence::new();
        loop {
            let data = self.socket.recv_msg().await?;
            if absorb(&data, seq, &mut replies)? {
                return Ok(replies);
            }
        }
    }
}

/// Add the messages of one datagram that answer `seq` to `replies`.
///
/// Returns `true` once a DONE, ACK or ERROR message ends the exchange;
/// anything after it in the datagram is ignored.
fn absorb(data: &[u8], seq: u32, replies: &mut ReplySequence) -> Result<bool> {
    for result in MessageIter::new(data) {
        let (header, payload) = result?;

        if header.nlmsg_seq != seq {
            trace!(seq = header.nlmsg_seq, "skipping message for another request");
            continue;
        }
        if header.is_dump_interrupted() {
            warn!(seq, "kernel reported an interrupted dump");
        }

        let message = ReplyMessage::new(*header, payload.to_vec())?;
        let terminal = matches!(
            message.kind(),
            ReplyKind::Done | ReplyKind::Ack | ReplyKind::Error(_)
        );
        replies.push(message);

        if terminal {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Extract the family from a `CTRL_CMD_GETFAMILY` exchange.
fn family_from_replies(replies: &ReplySequence, name: &str) -> Result<Family> {
    if let Some(code) = replies.first_error() {
        if code == -libc::ENOENT {
            return Err(Error::FamilyNotFound {
                name: name.to_string(),
            });
        }
        return Err(Error::from_errno(code).with_context(format!("resolving family {name}")));
    }

    let message = replies
        .iter()
        .find(|m| m.kind() == ReplyKind::Control)
        .ok_or_else(|| Error::FamilyNotFound {
            name: name.to_string(),
        })?;

    let attrs = CTRL_ATTR.decode(message.body()?)?;
    Family::from_attrs(&attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlink::fixtures;

    #[test]
    fn test_family_from_controller_reply() {
        let mut raw = fixtures::family_message(7, "nl80211", 0x1c, &[("config", 5), ("scan", 6)]);
        raw.extend(fixtures::ack_message(7));
        let replies = ReplySequence::from_bytes(&raw).unwrap();

        let family = family_from_replies(&replies, "nl80211").unwrap();
        assert_eq!(family.id, 0x1c);
        assert_eq!(family.name, "nl80211");
        assert_eq!(family.version, 1);
        assert_eq!(family.mcast_groups.get("scan"), Some(&6));
        assert_eq!(family.mcast_groups.len(), 2);
    }

    #[test]
    fn test_family_enoent_is_not_found() {
        let raw = fixtures::error_message(7, -libc::ENOENT);
        let replies = ReplySequence::from_bytes(&raw).unwrap();

        let err = family_from_replies(&replies, "nl80211").unwrap_err();
        assert!(matches!(err, Error::FamilyNotFound { ref name } if name == "nl80211"));
    }

    #[test]
    fn test_family_other_errors_keep_errno() {
        let raw = fixtures::error_message(7, -libc::EPERM);
        let replies = ReplySequence::from_bytes(&raw).unwrap();

        let err = family_from_replies(&replies, "nl80211").unwrap_err();
        assert_eq!(err.errno(), Some(libc::EPERM));
        assert!(err.to_string().contains("resolving family nl80211"));
    }

    #[test]
    fn test_family_missing_reply() {
        let raw = fixtures::ack_message(7);
        let replies = ReplySequence::from_bytes(&raw).unwrap();
        assert!(family_from_replies(&replies, "nl80211").unwrap_err().is_not_found());
    }

    fn kinds(replies: &ReplySequence) -> Vec<ReplyKind> {
        replies.iter().map(ReplyMessage::kind).collect()
    }

    #[test]
    fn test_absorb_skips_other_sequence_numbers() {
        let mut data = fixtures::data_message(4, &fixtures::wiphy(0, "phy0", |_| {}));
        data.extend(fixtures::data_message(5, &fixtures::wiphy(1, "phy1", |_| {})));
        data.extend(fixtures::done_message(4));
        data.extend(fixtures::done_message(5));

        let mut replies = ReplySequence::new();
        assert!(absorb(&data, 5, &mut replies).unwrap());
        assert_eq!(kinds(&replies), vec![ReplyKind::Data, ReplyKind::Done]);
        assert!(replies.iter().all(|m| m.header.nlmsg_seq == 5));
    }

    #[test]
    fn test_absorb_collects_across_datagrams() {
        let first = [
            fixtures::data_message(9, &fixtures::wiphy(0, "phy0", |_| {})),
            fixtures::data_message(9, &fixtures::wiphy(1, "phy1", |_| {})),
        ]
        .concat();
        let mut second = fixtures::data_message(9, &fixtures::wiphy(2, "phy2", |_| {}));
        second.extend(fixtures::done_message(9));

        let mut replies = ReplySequence::new();
        assert!(!absorb(&first, 9, &mut replies).unwrap());
        assert_eq!(replies.len(), 2);
        assert!(absorb(&second, 9, &mut replies).unwrap());

        let bodies = replies.data_bodies().unwrap();
        let names: Vec<_> = bodies
            .iter()
            .map(|body| {
                let radio = crate::nl80211::NL80211_ATTR.decode(body).unwrap();
                radio
                    .string(crate::nl80211::Nl80211Attr::WiphyName)
                    .unwrap()
                    .unwrap()
                    .to_string()
            })
            .collect();
        assert_eq!(names, ["phy0", "phy1", "phy2"]);
        assert!(replies.is_complete());
    }

    #[test]
    fn test_absorb_stops_at_error_mid_datagram() {
        let mut data = fixtures::data_message(3, &fixtures::wiphy(0, "phy0", |_| {}));
        data.extend(fixtures::error_message(3, -libc::EBUSY));
        data.extend(fixtures::data_message(3, &fixtures::wiphy(1, "phy1", |_| {})));

        let mut replies = ReplySequence::new();
        assert!(absorb(&data, 3, &mut replies).unwrap());
        assert_eq!(kinds(&replies), vec![ReplyKind::Data, ReplyKind::Error(-libc::EBUSY)]);
        assert_eq!(replies.first_error(), Some(-libc::EBUSY));
    }

    #[test]
    fn test_absorb_without_terminal_keeps_waiting() {
        let mut replies = ReplySequence::new();
        assert!(!absorb(&fixtures::done_message(8), 2, &mut replies).unwrap());
        assert!(replies.is_empty());
    }

    #[test]
    fn test_dump_request_layout() {
        let request = DumpRequest::new(0x1c, 1).flag(174);
        let msg = request.builder.finish();
        let (header, payload) = MessageIter::new(&msg).next().unwrap().unwrap();
        assert_eq!(header.nlmsg_type, 0x1c);
        assert_eq!(header.nlmsg_flags, NLM_F_REQUEST | NLM_F_DUMP);
        assert_eq!(GenlMsgHdr::from_bytes(payload).unwrap().cmd, 1);
        // genl header + empty flag attribute
        assert_eq!(payload.len(), 4 + 4);
    }
}
