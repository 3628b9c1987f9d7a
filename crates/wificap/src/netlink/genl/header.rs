//! `genlmsghdr`: the 4-byte command header after `nlmsghdr`.
//!
//! ```text
//! nlmsghdr   len | type = family id | flags | seq | pid
//! genlmsghdr cmd | version | reserved
//! attributes ...
//! ```

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::netlink::error::{Error, Result};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct GenlMsgHdr {
    /// Family-specific command.
    pub cmd: u8,
    pub version: u8,
    pub reserved: u16,
}

pub const GENL_HDRLEN: usize = size_of::<GenlMsgHdr>();

impl GenlMsgHdr {
    pub const fn new(cmd: u8, version: u8) -> Self {
        Self {
            cmd,
            version,
            reserved: 0,
        }
    }

    pub fn from_bytes(payload: &[u8]) -> Result<&Self> {
        match Self::ref_from_prefix(payload) {
            Ok((header, _)) => Ok(header),
            Err(_) => Err(Error::Truncated {
                expected: GENL_HDRLEN,
                actual: payload.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_one_word() {
        assert_eq!(GENL_HDRLEN, 4);
    }

    #[test]
    fn test_view_ignores_trailing_attributes() {
        let payload = [3, 1, 0, 0, 0xaa, 0xbb];
        assert_eq!(*GenlMsgHdr::from_bytes(&payload).unwrap(), GenlMsgHdr::new(3, 1));
        assert!(GenlMsgHdr::from_bytes(&payload[..3]).is_err());
    }
}
