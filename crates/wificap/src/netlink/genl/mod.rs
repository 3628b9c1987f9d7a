//! Generic Netlink (GENL) support.
//!
//! Generic netlink multiplexes many kernel subsystems over one protocol.
//! Families get their message type dynamically; the controller family
//! (fixed id `0x10`) maps names to ids.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ CapabilityQuery (nl80211 facts)         │
//! └────────────────┬────────────────────────┘
//!                  │ DumpSource
//! ┌────────────────▼────────────────────────┐
//! │ GenlSession                             │
//! │ (family resolution, dumps, family cache)│
//! └────────────────┬────────────────────────┘
//!                  │
//! ┌────────────────▼────────────────────────┐
//! │ NetlinkSocket (Protocol::Generic)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Controller replies are decoded through the same policy decoder as
//! nl80211, using the tables below.

pub mod header;
pub mod nl80211;
mod session;

pub use header::{GENL_HDRLEN, GenlMsgHdr};
pub use session::{DumpRequest, Family, GenlSession};

use crate::netlink::policy::{AttrKind, AttrSpec, Policy};

/// Controller family id (fixed, not dynamically assigned).
pub const GENL_ID_CTRL: u16 = 0x10;

/// Controller family commands.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtrlCmd {
    Unspec = 0,
    NewFamily = 1,
    DelFamily = 2,
    GetFamily = 3,
}

/// Controller family attributes.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtrlAttr {
    Unspec = 0,
    FamilyId = 1,
    FamilyName = 2,
    Version = 3,
    HdrSize = 4,
    MaxAttr = 5,
    Ops = 6,
    McastGroups = 7,
    Policy = 8,
    OpPolicy = 9,
    Op = 10,
}

impl From<CtrlAttr> for u16 {
    fn from(attr: CtrlAttr) -> Self {
        attr as u16
    }
}

/// Attributes of one entry in `CTRL_ATTR_OPS`.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtrlAttrOp {
    Unspec = 0,
    Id = 1,
    Flags = 2,
}

impl From<CtrlAttrOp> for u16 {
    fn from(attr: CtrlAttrOp) -> Self {
        attr as u16
    }
}

/// Attributes of one entry in `CTRL_ATTR_MCAST_GROUPS`.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtrlAttrMcastGrp {
    Unspec = 0,
    Name = 1,
    Id = 2,
}

impl From<CtrlAttrMcastGrp> for u16 {
    fn from(attr: CtrlAttrMcastGrp) -> Self {
        attr as u16
    }
}

pub static CTRL_ATTR_OP: Policy = Policy::new(
    "CTRL_ATTR_OP",
    &[
        AttrSpec::new(1, "ID", AttrKind::U32),
        AttrSpec::new(2, "FLAGS", AttrKind::U32),
    ],
);

pub static CTRL_ATTR_MCAST_GRP: Policy = Policy::new(
    "CTRL_ATTR_MCAST_GRP",
    &[
        AttrSpec::new(1, "NAME", AttrKind::NulString),
        AttrSpec::new(2, "ID", AttrKind::U32),
    ],
);

/// Top-level controller policy.
pub static CTRL_ATTR: Policy = Policy::new(
    "CTRL_ATTR",
    &[
        AttrSpec::new(1, "FAMILY_ID", AttrKind::U16),
        AttrSpec::new(2, "FAMILY_NAME", AttrKind::NulString),
        AttrSpec::new(3, "VERSION", AttrKind::U32),
        AttrSpec::new(4, "HDRSIZE", AttrKind::U32),
        AttrSpec::new(5, "MAXATTR", AttrKind::U32),
        AttrSpec::new(6, "OPS", AttrKind::Sequence(&CTRL_ATTR_OP)),
        AttrSpec::new(7, "MCAST_GROUPS", AttrKind::Sequence(&CTRL_ATTR_MCAST_GRP)),
        AttrSpec::new(8, "POLICY", AttrKind::Binary),
        AttrSpec::new(9, "OP_POLICY", AttrKind::Binary),
        AttrSpec::new(10, "OP", AttrKind::U32),
    ],
);
