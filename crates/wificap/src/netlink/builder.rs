//! Request encoder.
//!
//! A [`MessageBuilder`] owns one netlink message: the header is reserved up
//! front and its length is patched in by [`finish`](MessageBuilder::finish).
//! Every append keeps the buffer 4-byte aligned, so attributes and nests can
//! follow each other without bookkeeping at the call site.

use zerocopy::{Immutable, IntoBytes};

use super::attr::{NLA_ALIGNTO, NLA_F_NESTED, NlAttr};
use super::message::{NLMSG_HDRLEN, NlMsgHdr};

// Byte offsets of the mutable header fields.
const LEN_FIELD: usize = 0;
const SEQ_FIELD: usize = 8;
const PID_FIELD: usize = 12;

/// Open nested attribute; hand back to [`MessageBuilder::nest_end`].
#[derive(Debug, Clone, Copy)]
#[must_use = "a nest must be closed with nest_end"]
pub struct NestToken {
    at: usize,
}

/// Builder for one netlink message.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    buf: Vec<u8>,
}

macro_rules! scalar_appender {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Append a native-endian `", stringify!($ty), "` attribute.")]
            pub fn $name(&mut self, attr_type: u16, value: $ty) {
                self.append_attr(attr_type, &value.to_ne_bytes());
            }
        )*
    };
}

impl MessageBuilder {
    pub fn new(msg_type: u16, flags: u16) -> Self {
        let mut buf = Vec::with_capacity(256);
        buf.extend_from_slice(NlMsgHdr::new(msg_type, flags).as_bytes());
        buf.resize(NLMSG_HDRLEN, 0);
        Self { buf }
    }

    fn pad(&mut self) {
        let rem = self.buf.len() % NLA_ALIGNTO;
        if rem != 0 {
            self.buf.resize(self.buf.len() + NLA_ALIGNTO - rem, 0);
        }
    }

    fn patch(&mut self, at: usize, bytes: &[u8]) {
        self.buf[at..at + bytes.len()].copy_from_slice(bytes);
    }

    /// Append raw payload bytes, padded.
    pub fn append_bytes(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
        self.pad();
    }

    /// Append a fixed family header (`genlmsghdr`, `ifinfomsg`).
    pub fn append<T: IntoBytes + Immutable>(&mut self, header: &T) {
        self.append_bytes(header.as_bytes());
    }

    pub fn append_attr(&mut self, attr_type: u16, data: &[u8]) {
        self.buf
            .extend_from_slice(NlAttr::new(attr_type, data.len()).as_bytes());
        self.append_bytes(data);
    }

    /// Append a flag attribute: present, no payload.
    pub fn append_attr_empty(&mut self, attr_type: u16) {
        self.append_attr(attr_type, &[]);
    }

    scalar_appender! {
        append_attr_u8: u8,
        append_attr_u16: u16,
        append_attr_u32: u32,
        append_attr_u64: u64,
    }

    /// Append a NUL-terminated string attribute.
    pub fn append_attr_str(&mut self, attr_type: u16, value: &str) {
        self.buf
            .extend_from_slice(NlAttr::new(attr_type, value.len() + 1).as_bytes());
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.push(0);
        self.pad();
    }

    /// Open a nested attribute. Its length is filled in by [`nest_end`](Self::nest_end).
    pub fn nest_start(&mut self, attr_type: u16) -> NestToken {
        let at = self.buf.len();
        self.buf
            .extend_from_slice(NlAttr::new(attr_type | NLA_F_NESTED, 0).as_bytes());
        NestToken { at }
    }

    pub fn nest_end(&mut self, nest: NestToken) {
        let len = (self.buf.len() - nest.at) as u16;
        self.patch(nest.at, &len.to_ne_bytes());
        self.pad();
    }

    pub fn set_seq(&mut self, seq: u32) {
        self.patch(SEQ_FIELD, &seq.to_ne_bytes());
    }

    pub fn set_pid(&mut self, pid: u32) {
        self.patch(PID_FIELD, &pid.to_ne_bytes());
    }

    /// Everything written after the netlink header.
    pub fn payload(&self) -> &[u8] {
        &self.buf[NLMSG_HDRLEN..]
    }

    /// Patch the total length into the header and return the wire bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let len = self.buf.len() as u32;
        self.patch(LEN_FIELD, &len.to_ne_bytes());
        self.buf
    }
}
