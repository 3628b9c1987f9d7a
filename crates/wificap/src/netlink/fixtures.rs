//! Wire fixtures for unit tests.
//!
//! Messages are built with the crate's own [`MessageBuilder`] so they carry
//! exactly the layout the kernel would send: netlink header, genl header,
//! attributes.

use super::builder::MessageBuilder;
use super::genl::nl80211::{BandAttr, FrequencyAttr, Nl80211Attr, Nl80211Cmd};
use super::genl::{CtrlAttr, CtrlAttrMcastGrp, CtrlCmd, GENL_ID_CTRL, GenlMsgHdr};
use super::message::{NLM_F_MULTI, NlMsgHdr, NlMsgType};
use super::reply::ReplySequence;

/// Family id the fixtures pretend nl80211 was assigned.
pub const NL80211_ID: u16 = 0x1c;

/// Encode a bare attribute buffer.
pub fn attrs(build: impl FnOnce(&mut MessageBuilder)) -> Vec<u8> {
    let mut b = MessageBuilder::new(0, 0);
    build(&mut b);
    b.payload().to_vec()
}

pub fn message(msg_type: u16, flags: u16, seq: u32, payload: &[u8]) -> Vec<u8> {
    let mut b = MessageBuilder::new(msg_type, flags);
    b.append_bytes(payload);
    b.set_seq(seq);
    b.finish()
}

pub fn genl_message(msg_type: u16, seq: u32, cmd: u8, attrs: &[u8]) -> Vec<u8> {
    let mut b = MessageBuilder::new(msg_type, NLM_F_MULTI);
    b.append(&GenlMsgHdr::new(cmd, 1));
    b.append_bytes(attrs);
    b.set_seq(seq);
    b.finish()
}

/// An nl80211 data message carrying `attrs`.
pub fn data_message(seq: u32, attrs: &[u8]) -> Vec<u8> {
    genl_message(NL80211_ID, seq, Nl80211Cmd::NewWiphy as u8, attrs)
}

/// A controller-family message with no attributes.
pub fn control_message(seq: u32) -> Vec<u8> {
    genl_message(GENL_ID_CTRL, seq, CtrlCmd::NewFamily as u8, &[])
}

/// A `CTRL_CMD_NEWFAMILY` reply.
pub fn family_message(seq: u32, name: &str, id: u16, groups: &[(&str, u32)]) -> Vec<u8> {
    let body = attrs(|b| {
        b.append_attr_u16(CtrlAttr::FamilyId as u16, id);
        b.append_attr_str(CtrlAttr::FamilyName as u16, name);
        b.append_attr_u32(CtrlAttr::Version as u16, 1);
        b.append_attr_u32(CtrlAttr::HdrSize as u16, 0);
        b.append_attr_u32(CtrlAttr::MaxAttr as u16, 333);

        let list = b.nest_start(CtrlAttr::McastGroups as u16);
        for (i, (group, group_id)) in groups.iter().enumerate() {
            let entry = b.nest_start(i as u16 + 1);
            b.append_attr_u32(CtrlAttrMcastGrp::Id as u16, *group_id);
            b.append_attr_str(CtrlAttrMcastGrp::Name as u16, group);
            b.nest_end(entry);
        }
        b.nest_end(list);
    });
    genl_message(GENL_ID_CTRL, seq, CtrlCmd::NewFamily as u8, &body)
}

/// An ERROR message with `code` (0 for an ACK).
pub fn error_message(seq: u32, code: i32) -> Vec<u8> {
    let mut payload = code.to_ne_bytes().to_vec();
    payload.extend_from_slice(NlMsgHdr::new(NL80211_ID, 0).as_bytes());
    message(NlMsgType::ERROR, 0, seq, &payload)
}

pub fn ack_message(seq: u32) -> Vec<u8> {
    error_message(seq, 0)
}

pub fn done_message(seq: u32) -> Vec<u8> {
    message(NlMsgType::DONE, NLM_F_MULTI, seq, &0i32.to_ne_bytes())
}

/// Attributes of a wiphy dump entry; `extra` appends more.
pub fn wiphy(index: u32, name: &str, extra: impl FnOnce(&mut MessageBuilder)) -> Vec<u8> {
    attrs(|b| {
        b.append_attr_u32(Nl80211Attr::Wiphy as u16, index);
        b.append_attr_str(Nl80211Attr::WiphyName as u16, name);
        b.append_attr_u32(Nl80211Attr::Generation as u16, 1);
        extra(b);
    })
}

/// Attributes of an interface dump entry.
pub fn interface(ifindex: u32, name: &str, wiphy: u32) -> Vec<u8> {
    attrs(|b| {
        b.append_attr_u32(Nl80211Attr::Ifindex as u16, ifindex);
        b.append_attr_str(Nl80211Attr::Ifname as u16, name);
        b.append_attr_u32(Nl80211Attr::Wiphy as u16, wiphy);
        b.append_attr_u32(Nl80211Attr::Iftype as u16, 2);
        b.append_attr_u64(Nl80211Attr::Wdev as u16, 1);
        b.append_attr(Nl80211Attr::Mac as u16, &[0x02, 0x11, 0x22, 0x33, 0x44, 0x55]);
    })
}

/// Append one `WIPHY_BANDS` entry. Call between `nest_start`/`nest_end`
/// of the bands attribute.
pub fn push_band(b: &mut MessageBuilder, index: u16, ht_capa: Option<u16>, freqs: &[u32]) {
    let band = b.nest_start(index);
    if let Some(caps) = ht_capa {
        b.append_attr_u16(BandAttr::HtCapa as u16, caps);
    }
    b.append_attr_u8(BandAttr::HtAmpduFactor as u16, 3);

    let list = b.nest_start(BandAttr::Freqs as u16);
    for (i, freq) in freqs.iter().enumerate() {
        let entry = b.nest_start(i as u16);
        b.append_attr_u32(FrequencyAttr::Freq as u16, *freq);
        b.append_attr_u32(FrequencyAttr::MaxTxPower as u16, 2000);
        b.nest_end(entry);
    }
    b.nest_end(list);
    b.nest_end(band);
}

/// A complete dump: one data message per body, then DONE.
pub fn dump(seq: u32, bodies: &[Vec<u8>]) -> ReplySequence {
    let mut raw = Vec::new();
    for body in bodies {
        raw.extend(data_message(seq, body));
    }
    raw.extend(done_message(seq));
    // Fixtures are well-formed by construction.
    ReplySequence::from_bytes(&raw).expect("fixture dump")
}
