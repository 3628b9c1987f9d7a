//! Decoded attribute trees.
//!
//! An [`AttrMap`] remembers the [`Policy`] it was decoded under, so callers
//! can assert where a map came from before interpreting it. Keys are the
//! numeric type-ids; the policy supplies names for diagnostics.

use super::error::{Error, Result};
use super::policy::{AttrSpec, Policy};

/// A decoded attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    /// Presence flag. The attribute existing is the value.
    Flag,
    String(String),
    Binary(Vec<u8>),
    Map(AttrMap),
    Sequence(Vec<Entry>),
}

impl AttrValue {
    /// Short kind name, matching [`AttrKind::name`](super::policy::AttrKind::name).
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttrValue::U8(_) => "u8",
            AttrValue::U16(_) => "u16",
            AttrValue::U32(_) => "u32",
            AttrValue::U64(_) => "u64",
            AttrValue::Flag => "flag",
            AttrValue::String(_) => "string",
            AttrValue::Binary(_) => "binary",
            AttrValue::Map(_) => "map",
            AttrValue::Sequence(_) => "sequence",
        }
    }
}

/// One entry of a sequence attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Index carried in the entry's type field.
    pub index: u16,
    /// The decoded entry.
    pub map: AttrMap,
}

/// A decoded attribute with its declaration.
#[derive(Debug, Clone)]
pub struct Attr {
    pub spec: &'static AttrSpec,
    pub value: AttrValue,
}

impl PartialEq for Attr {
    fn eq(&self, other: &Self) -> bool {
        self.spec.id == other.spec.id && self.value == other.value
    }
}

/// A decoded attribute map, tagged with its policy.
#[derive(Clone)]
pub struct AttrMap {
    policy: &'static Policy,
    attrs: Vec<Attr>,
}

impl std::fmt::Debug for AttrMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for attr in &self.attrs {
            map.entry(
                &format_args!("{}_{}", self.policy.prefix, attr.spec.name),
                &attr.value,
            );
        }
        map.finish()
    }
}

impl PartialEq for AttrMap {
    fn eq(&self, other: &Self) -> bool {
        self.policy.prefix == other.policy.prefix && self.attrs == other.attrs
    }
}

macro_rules! scalar_getter {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(&self, id: impl Into<u16>) -> Result<Option<$ty>> {
            let id = id.into();
            match self.get(id) {
                None => Ok(None),
                Some(AttrValue::$variant(v)) => Ok(Some(*v)),
                Some(other) => Err(self.mismatch(id, stringify!($name), other)),
            }
        }
    };
}

impl AttrMap {
    pub(crate) fn from_parts(policy: &'static Policy, attrs: Vec<Attr>) -> Self {
        Self { policy, attrs }
    }

    /// The policy this map was decoded under.
    pub fn policy(&self) -> &'static Policy {
        self.policy
    }

    /// Prefix of the policy this map was decoded under.
    pub fn prefix(&self) -> &'static str {
        self.policy.prefix
    }

    /// Assert the map was decoded under the `expected` policy.
    pub fn expect_policy(&self, expected: &'static str) -> Result<&Self> {
        if self.policy.prefix == expected {
            Ok(self)
        } else {
            Err(Error::PolicyMismatch {
                expected,
                actual: self.policy.prefix,
            })
        }
    }

    /// Number of attributes present.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate over the attributes in wire order.
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attrs.iter()
    }

    /// Look up an attribute by type-id.
    pub fn get(&self, id: impl Into<u16>) -> Option<&AttrValue> {
        let id = id.into();
        self.attrs
            .iter()
            .find(|a| a.spec.id == id)
            .map(|a| &a.value)
    }

    /// Look up an attribute by its name within the policy.
    pub fn get_named(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|a| a.spec.name == name)
            .map(|a| &a.value)
    }

    /// Whether the attribute is present.
    pub fn contains(&self, id: impl Into<u16>) -> bool {
        self.get(id).is_some()
    }

    scalar_getter!(
        /// Read a u8 attribute. `Ok(None)` when absent.
        u8, U8, u8
    );
    scalar_getter!(
        /// Read a u16 attribute. `Ok(None)` when absent.
        u16, U16, u16
    );
    scalar_getter!(
        /// Read a u32 attribute. `Ok(None)` when absent.
        u32, U32, u32
    );
    scalar_getter!(
        /// Read a u64 attribute. `Ok(None)` when absent.
        u64, U64, u64
    );

    /// Read a flag attribute: present means `true`.
    pub fn flag(&self, id: impl Into<u16>) -> Result<bool> {
        let id = id.into();
        match self.get(id) {
            None => Ok(false),
            Some(AttrValue::Flag) => Ok(true),
            Some(other) => Err(self.mismatch(id, "flag", other)),
        }
    }

    /// Read a string attribute.
    pub fn string(&self, id: impl Into<u16>) -> Result<Option<&str>> {
        let id = id.into();
        match self.get(id) {
            None => Ok(None),
            Some(AttrValue::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(self.mismatch(id, "string", other)),
        }
    }

    /// Read an opaque binary attribute.
    pub fn binary(&self, id: impl Into<u16>) -> Result<Option<&[u8]>> {
        let id = id.into();
        match self.get(id) {
            None => Ok(None),
            Some(AttrValue::Binary(b)) => Ok(Some(b.as_slice())),
            Some(other) => Err(self.mismatch(id, "binary", other)),
        }
    }

    /// Read a nested map attribute.
    pub fn map(&self, id: impl Into<u16>) -> Result<Option<&AttrMap>> {
        let id = id.into();
        match self.get(id) {
            None => Ok(None),
            Some(AttrValue::Map(m)) => Ok(Some(m)),
            Some(other) => Err(self.mismatch(id, "map", other)),
        }
    }

    /// Read a sequence attribute.
    pub fn sequence(&self, id: impl Into<u16>) -> Result<Option<&[Entry]>> {
        let id = id.into();
        match self.get(id) {
            None => Ok(None),
            Some(AttrValue::Sequence(s)) => Ok(Some(s.as_slice())),
            Some(other) => Err(self.mismatch(id, "sequence", other)),
        }
    }

    /// Turn an absent optional value into [`Error::MissingAttribute`].
    pub fn require<T>(&self, id: impl Into<u16>, value: Option<T>) -> Result<T> {
        let id = id.into();
        value.ok_or(Error::MissingAttribute {
            policy: self.policy.prefix,
            name: self.policy.name_of(id),
        })
    }

    fn mismatch(&self, id: u16, expected: &'static str, actual: &AttrValue) -> Error {
        Error::KindMismatch {
            policy: self.policy.prefix,
            name: self.policy.name_of(id),
            expected,
            actual: actual.kind_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlink::builder::MessageBuilder;
    use crate::netlink::policy::AttrKind;

    static SAMPLE: Policy = Policy::new(
        "SAMPLE",
        &[
            AttrSpec::new(1, "ID", AttrKind::U32),
            AttrSpec::new(2, "NAME", AttrKind::NulString),
            AttrSpec::new(3, "SHORT", AttrKind::Flag),
        ],
    );

    fn sample() -> AttrMap {
        let mut b = MessageBuilder::new(0, 0);
        b.append_attr_u32(1, 7);
        b.append_attr_str(2, "wlan0");
        SAMPLE.decode(b.payload()).unwrap()
    }

    #[test]
    fn test_typed_getters() {
        let map = sample();
        assert_eq!(map.u32(1u16).unwrap(), Some(7));
        assert_eq!(map.string(2u16).unwrap(), Some("wlan0"));
        assert!(!map.flag(3u16).unwrap());
        assert_eq!(map.get_named("NAME"), Some(&AttrValue::String("wlan0".into())));
        assert!(map.contains(1u16));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_getter_kind_mismatch() {
        let map = sample();
        let err = map.u16(1u16).unwrap_err();
        assert!(matches!(
            err,
            Error::KindMismatch {
                name: "ID",
                expected: "u16",
                actual: "u32",
                ..
            }
        ));
        assert!(map.string(1u16).is_err());
    }

    #[test]
    fn test_expect_policy() {
        let map = sample();
        assert!(map.expect_policy("SAMPLE").is_ok());
        assert!(matches!(
            map.expect_policy("BAND"),
            Err(Error::PolicyMismatch {
                expected: "BAND",
                actual: "SAMPLE"
            })
        ));
    }

    #[test]
    fn test_require_reports_name() {
        let map = sample();
        let err = map.require(3u16, map.u32(3u16).ok().flatten()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAttribute {
                policy: "SAMPLE",
                name: "SHORT"
            }
        ));
    }

    #[test]
    fn test_debug_uses_prefixed_names() {
        let text = format!("{:?}", sample());
        assert!(text.contains("SAMPLE_ID"));
        assert!(text.contains("SAMPLE_NAME"));
    }
}
