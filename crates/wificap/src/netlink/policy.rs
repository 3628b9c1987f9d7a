//! Attribute policies and the policy-driven decoder.
//!
//! A [`Policy`] is a static table describing one attribute context
//! (`NL80211_ATTR`, `BAND`, `FREQUENCY_ATTR`, ...): which type-ids may
//! appear, what they are called and how their payload is decoded. Decoding
//! dispatches on the closed [`AttrKind`] tag of each entry and never guesses
//! from the bytes.
//!
//! ```text
//! NL80211_ATTR ──WIPHY_BANDS──▶ Sequence(BAND)
//!                                  │
//!                                  └──FREQS──▶ Sequence(FREQUENCY_ATTR)
//! ```
//!
//! Decoding is all-or-nothing: the first undeclared type-id, duplicate key,
//! wrong scalar width or truncated length fails the whole buffer.

use std::fmt;

use super::attr::{AttrIter, get};
use super::error::{Error, Result};
use super::tree::{Attr, AttrMap, AttrValue, Entry};

/// Decode rule for one attribute type.
#[derive(Clone, Copy)]
pub enum AttrKind {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer (native endian).
    U16,
    /// 32-bit unsigned integer (native endian).
    U32,
    /// 64-bit unsigned integer (native endian).
    U64,
    /// Zero-length presence flag.
    Flag,
    /// NUL-terminated UTF-8 string.
    NulString,
    /// Opaque bytes, kept verbatim.
    Binary,
    /// A map of attributes decoded under another policy.
    Nested(&'static Policy),
    /// Indexed entries, each a map decoded under another policy.
    Sequence(&'static Policy),
}

impl AttrKind {
    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            AttrKind::U8 => "u8",
            AttrKind::U16 => "u16",
            AttrKind::U32 => "u32",
            AttrKind::U64 => "u64",
            AttrKind::Flag => "flag",
            AttrKind::NulString => "string",
            AttrKind::Binary => "binary",
            AttrKind::Nested(_) => "map",
            AttrKind::Sequence(_) => "sequence",
        }
    }

    fn fixed_width(&self) -> Option<usize> {
        match self {
            AttrKind::U8 => Some(1),
            AttrKind::U16 => Some(2),
            AttrKind::U32 => Some(4),
            AttrKind::U64 => Some(8),
            AttrKind::Flag => Some(0),
            _ => None,
        }
    }
}

impl fmt::Debug for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrKind::Nested(p) => write!(f, "Nested({})", p.prefix),
            AttrKind::Sequence(p) => write!(f, "Sequence({})", p.prefix),
            other => f.write_str(other.name()),
        }
    }
}

/// One declared attribute of a policy.
#[derive(Debug, Clone, Copy)]
pub struct AttrSpec {
    /// Numeric type-id (without NLA_F_* flags).
    pub id: u16,
    /// Name without the policy prefix (`"WIPHY_NAME"`).
    pub name: &'static str,
    /// Decode rule.
    pub kind: AttrKind,
}

impl AttrSpec {
    /// Declare an attribute.
    pub const fn new(id: u16, name: &'static str, kind: AttrKind) -> Self {
        Self { id, name, kind }
    }
}

/// A static attribute schema for one message context.
///
/// `attrs` must be sorted by id with no duplicates; lookups binary-search it.
pub struct Policy {
    /// Context prefix, e.g. `"BAND"`.
    pub prefix: &'static str,
    /// Declared attributes, sorted by id.
    pub attrs: &'static [AttrSpec],
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("prefix", &self.prefix)
            .field("attrs", &self.attrs.len())
            .finish()
    }
}

impl Policy {
    /// Create a policy from a sorted attribute table.
    pub const fn new(prefix: &'static str, attrs: &'static [AttrSpec]) -> Self {
        Self { prefix, attrs }
    }

    /// Look up the declaration for a type-id.
    pub fn spec(&self, id: u16) -> Option<&'static AttrSpec> {
        let attrs: &'static [AttrSpec] = self.attrs;
        attrs
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .map(|i| &attrs[i])
    }

    /// Look up the declaration for a name (without prefix).
    pub fn spec_named(&self, name: &str) -> Option<&'static AttrSpec> {
        let attrs: &'static [AttrSpec] = self.attrs;
        attrs.iter().find(|s| s.name == name)
    }

    /// Name of a type-id, or `"?"` when undeclared.
    pub fn name_of(&self, id: u16) -> &'static str {
        self.spec(id).map(|s| s.name).unwrap_or("?")
    }

    /// Decode an attribute buffer under this policy.
    pub fn decode(&'static self, data: &[u8]) -> Result<AttrMap> {
        decode_map(self, data)
    }

    /// Decode an attribute buffer, asserting that this is the `expected` policy.
    ///
    /// Fails with [`Error::PolicyMismatch`] before touching the bytes when
    /// the prefixes differ.
    pub fn decode_expecting(&'static self, expected: &'static str, data: &[u8]) -> Result<AttrMap> {
        if self.prefix != expected {
            return Err(Error::PolicyMismatch {
                expected,
                actual: self.prefix,
            });
        }
        decode_map(self, data)
    }
}

fn decode_map(policy: &'static Policy, data: &[u8]) -> Result<AttrMap> {
    let mut attrs: Vec<Attr> = Vec::new();

    for item in AttrIter::new(data) {
        let (header, payload) = item?;
        let id = header.kind();

        let spec = policy.spec(id).ok_or(Error::UnknownAttribute {
            policy: policy.prefix,
            id,
        })?;

        if attrs.iter().any(|a| a.spec.id == id) {
            return Err(Error::DuplicateAttribute {
                policy: policy.prefix,
                name: spec.name,
            });
        }

        let value = decode_value(policy, spec, header.is_nested(), payload)?;
        attrs.push(Attr { spec, value });
    }

    Ok(AttrMap::from_parts(policy, attrs))
}

fn decode_value(
    policy: &'static Policy,
    spec: &'static AttrSpec,
    nested: bool,
    payload: &[u8],
) -> Result<AttrValue> {
    if let Some(width) = spec.kind.fixed_width() {
        if nested {
            return Err(Error::KindMismatch {
                policy: policy.prefix,
                name: spec.name,
                expected: spec.kind.name(),
                actual: "nested",
            });
        }
        if payload.len() != width {
            return Err(Error::InvalidAttribute(format!(
                "{}_{}: {} needs {} bytes, got {}",
                policy.prefix,
                spec.name,
                spec.kind.name(),
                width,
                payload.len()
            )));
        }
    }

    let value = match spec.kind {
        AttrKind::U8 => AttrValue::U8(get::ne::<u8>(payload)?),
        AttrKind::U16 => AttrValue::U16(get::ne::<u16>(payload)?),
        AttrKind::U32 => AttrValue::U32(get::ne::<u32>(payload)?),
        AttrKind::U64 => AttrValue::U64(get::ne::<u64>(payload)?),
        AttrKind::Flag => AttrValue::Flag,
        AttrKind::NulString => {
            if nested {
                return Err(Error::KindMismatch {
                    policy: policy.prefix,
                    name: spec.name,
                    expected: "string",
                    actual: "nested",
                });
            }
            AttrValue::String(get::string(payload)?.to_string())
        }
        AttrKind::Binary => AttrValue::Binary(payload.to_vec()),
        AttrKind::Nested(sub) => AttrValue::Map(decode_map(sub, payload)?),
        AttrKind::Sequence(sub) => {
            let mut entries: Vec<Entry> = Vec::new();
            for item in AttrIter::new(payload) {
                let (header, entry_payload) = item?;
                let index = header.kind();
                if entries.iter().any(|e| e.index == index) {
                    return Err(Error::DuplicateAttribute {
                        policy: policy.prefix,
                        name: spec.name,
                    });
                }
                entries.push(Entry {
                    index,
                    map: decode_map(sub, entry_payload)?,
                });
            }
            AttrValue::Sequence(entries)
        }
    };

    Ok(value)
}
