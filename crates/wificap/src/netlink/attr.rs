//! Attribute (TLV) framing: the `nlattr` header and a strict walker.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use super::error::{Error, Result};

pub const NLA_ALIGNTO: usize = 4;

#[inline]
pub const fn nla_align(len: usize) -> usize {
    len.next_multiple_of(NLA_ALIGNTO)
}

pub const NLA_HDRLEN: usize = nla_align(size_of::<NlAttr>());

/// Set on attributes whose payload is itself an attribute stream.
pub const NLA_F_NESTED: u16 = 1 << 15;
pub const NLA_F_NET_BYTEORDER: u16 = 1 << 14;
pub const NLA_TYPE_MASK: u16 = !(NLA_F_NESTED | NLA_F_NET_BYTEORDER);

/// `struct nlattr`. The length covers the header but not the padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NlAttr {
    pub nla_len: u16,
    pub nla_type: u16,
}

impl NlAttr {
    pub fn new(attr_type: u16, payload_len: usize) -> Self {
        Self {
            nla_len: (NLA_HDRLEN + payload_len) as u16,
            nla_type: attr_type,
        }
    }

    /// Type id with the flag bits masked off.
    pub fn kind(&self) -> u16 {
        self.nla_type & NLA_TYPE_MASK
    }

    pub fn is_nested(&self) -> bool {
        self.nla_type & NLA_F_NESTED != 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        IntoBytes::as_bytes(self)
    }

    pub fn from_bytes(data: &[u8]) -> Result<&Self> {
        Self::ref_from_prefix(data)
            .map(|(attr, _)| attr)
            .map_err(|_| Error::Truncated {
                expected: NLA_HDRLEN,
                actual: data.len(),
            })
    }
}

/// Walks an attribute stream.
///
/// A length field pointing past the buffer, or trailing bytes too short for
/// a header, is reported once and ends the walk: a bad offset cannot be
/// trusted to resynchronize.
pub struct AttrIter<'a> {
    rest: &'a [u8],
}

impl<'a> AttrIter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { rest: data }
    }
}

impl<'a> Iterator for AttrIter<'a> {
    type Item = Result<(NlAttr, &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let data = std::mem::take(&mut self.rest);

        let attr = match NlAttr::from_bytes(data) {
            Ok(attr) => *attr,
            Err(e) => return Some(Err(e)),
        };
        let len = attr.nla_len as usize;
        if !(NLA_HDRLEN..=data.len()).contains(&len) {
            return Some(Err(Error::Truncated {
                expected: len.max(NLA_HDRLEN),
                actual: data.len(),
            }));
        }

        self.rest = data.get(nla_align(len)..).unwrap_or_default();
        Some(Ok((attr, &data[NLA_HDRLEN..len])))
    }
}

/// Payload readers.
pub mod get {
    use zerocopy::FromBytes;

    use crate::netlink::error::{Error, Result};

    /// A native-endian scalar filling the whole payload.
    pub fn ne<T: FromBytes>(data: &[u8]) -> Result<T> {
        T::read_from_bytes(data).map_err(|_| {
            Error::InvalidAttribute(format!(
                "{} needs {} bytes, got {}",
                std::any::type_name::<T>(),
                size_of::<T>(),
                data.len()
            ))
        })
    }

    /// Text up to the first NUL, or the whole payload when there is none.
    pub fn string(data: &[u8]) -> Result<&str> {
        let text = data.split(|&b| b == 0).next().unwrap_or_default();
        std::str::from_utf8(text)
            .map_err(|e| Error::InvalidAttribute(format!("invalid UTF-8: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nla_align() {
        assert_eq!(nla_align(0), 0);
        assert_eq!(nla_align(5), 8);
        assert_eq!(nla_align(8), 8);
    }

    #[test]
    fn test_iter_walks_padded_attributes() {
        let data = [
            0x05, 0x00, 0x01, 0x00, 0x2a, 0x00, 0x00, 0x00, // u8 = 42 + padding
            0x08, 0x00, 0x02, 0x00, 0x6c, 0x09, 0x00, 0x00, // u32 = 2412
        ];
        let attrs: Vec<_> = AttrIter::new(&data).collect::<Result<_>>().unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!((attrs[0].0.kind(), attrs[0].1), (1, &[0x2a][..]));
        assert_eq!(attrs[1].0.kind(), 2);
        assert_eq!(get::ne::<u32>(attrs[1].1).unwrap(), u32::from_ne_bytes([0x6c, 0x09, 0, 0]));
    }

    #[test]
    fn test_iter_rejects_overlong_length() {
        let data = [0x10, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00];
        let mut iter = AttrIter::new(&data);
        assert!(matches!(iter.next(), Some(Err(Error::Truncated { .. }))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iter_rejects_trailing_garbage() {
        let data = [0x04, 0x00, 0x01, 0x00, 0xff, 0xff];
        let mut iter = AttrIter::new(&data);
        assert!(iter.next().unwrap().is_ok());
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_nested_flag_is_masked() {
        let attr = NlAttr::new(22 | NLA_F_NESTED, 0);
        assert!(attr.is_nested());
        assert_eq!(attr.kind(), 22);
    }

    #[test]
    fn test_scalar_width_must_match() {
        assert_eq!(get::ne::<u16>(&7u16.to_ne_bytes()).unwrap(), 7);
        assert!(get::ne::<u16>(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_string_stops_at_nul() {
        assert_eq!(get::string(b"phy0\0\0\0").unwrap(), "phy0");
        assert_eq!(get::string(b"phy1").unwrap(), "phy1");
        assert!(get::string(&[0xff, 0]).is_err());
    }
}
