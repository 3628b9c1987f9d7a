//! Netlink message framing: the `nlmsghdr` view and a buffer walker.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use super::error::{Error, Result};

/// Messages in a datagram start on 4-byte boundaries.
pub const NLMSG_ALIGNTO: usize = 4;

#[inline]
pub const fn nlmsg_align(len: usize) -> usize {
    len.next_multiple_of(NLMSG_ALIGNTO)
}

pub const NLMSG_HDRLEN: usize = nlmsg_align(size_of::<NlMsgHdr>());

/// `struct nlmsghdr`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NlMsgHdr {
    pub nlmsg_len: u32,
    pub nlmsg_type: u16,
    pub nlmsg_flags: u16,
    pub nlmsg_seq: u32,
    /// Port id of the sender, 0 for the kernel.
    pub nlmsg_pid: u32,
}

impl NlMsgHdr {
    /// Header of an otherwise empty message.
    pub fn new(msg_type: u16, flags: u16) -> Self {
        Self {
            nlmsg_len: NLMSG_HDRLEN as u32,
            nlmsg_type: msg_type,
            nlmsg_flags: flags,
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.nlmsg_type == NlMsgType::ERROR
    }

    /// The kernel's state changed while the dump was running; the reply set
    /// may be inconsistent.
    pub fn is_dump_interrupted(&self) -> bool {
        self.nlmsg_flags & NLM_F_DUMP_INTR != 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        IntoBytes::as_bytes(self)
    }

    pub fn from_bytes(data: &[u8]) -> Result<&Self> {
        Self::ref_from_prefix(data)
            .map(|(header, _)| header)
            .map_err(|_| Error::Truncated {
                expected: size_of::<Self>(),
                actual: data.len(),
            })
    }
}

/// Control message types shared by every netlink family.
pub struct NlMsgType;

impl NlMsgType {
    /// Error report, or an ACK when the code is 0.
    pub const ERROR: u16 = 2;
    /// End of a multipart dump.
    pub const DONE: u16 = 3;

    // Route link messages
    pub const RTM_SETLINK: u16 = 19;
}

pub const NLM_F_REQUEST: u16 = 0x01;
pub const NLM_F_MULTI: u16 = 0x02;
pub const NLM_F_ACK: u16 = 0x04;
pub const NLM_F_DUMP_INTR: u16 = 0x10;
pub const NLM_F_DUMP: u16 = 0x100 | 0x200;

/// Walks the messages packed into one datagram.
///
/// A length field that does not fit the remaining buffer is reported once
/// and ends the walk.
pub struct MessageIter<'a> {
    rest: &'a [u8],
}

impl<'a> MessageIter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { rest: data }
    }
}

impl<'a> Iterator for MessageIter<'a> {
    type Item = Result<(&'a NlMsgHdr, &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.len() < NLMSG_HDRLEN {
            return None;
        }
        let data = std::mem::take(&mut self.rest);

        let header = match NlMsgHdr::from_bytes(data) {
            Ok(header) => header,
            Err(e) => return Some(Err(e)),
        };
        let len = header.nlmsg_len as usize;
        if !(NLMSG_HDRLEN..=data.len()).contains(&len) {
            return Some(Err(Error::InvalidMessage(format!(
                "message length {len} outside {NLMSG_HDRLEN}..={}",
                data.len()
            ))));
        }

        self.rest = data.get(nlmsg_align(len)..).unwrap_or_default();
        Some(Ok((header, &data[NLMSG_HDRLEN..len])))
    }
}

/// Code carried by an ERROR message payload: 0 for an ACK, else a negative
/// errno. The echoed request header that follows is not needed.
pub fn error_code(payload: &[u8]) -> Result<i32> {
    payload
        .first_chunk::<4>()
        .map(|code| i32::from_ne_bytes(*code))
        .ok_or(Error::Truncated {
            expected: 4,
            actual: payload.len(),
        })
}
