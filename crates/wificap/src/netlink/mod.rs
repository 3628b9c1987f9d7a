//! Async netlink plumbing for nl80211 capability discovery.
//!
//! Wire handling (headers, attributes, builder, socket) sits at the bottom;
//! [`policy`] and [`tree`] turn attribute bytes into typed maps; [`genl`]
//! talks to generic netlink families; [`link`] renames interfaces over
//! route netlink.
//!
//! # Decoding a reply
//!
//! ```ignore
//! use wificap::netlink::genl::nl80211::{Nl80211Attr, NL80211_ATTR};
//!
//! let radio = NL80211_ATTR.decode(body)?;
//! let name = radio.string(Nl80211Attr::WiphyName)?;
//! ```

pub mod attr;
pub mod builder;
pub mod error;
pub mod genl;
pub mod ifname;
pub mod link;
pub mod message;
pub mod policy;
pub mod reply;
pub mod socket;
pub mod tree;

#[cfg(test)]
pub(crate) mod fixtures;

pub use builder::MessageBuilder;
pub use error::{Error, Result};
pub use link::RouteConnection;
pub use policy::{AttrKind, AttrSpec, Policy};
pub use reply::{ReplyKind, ReplyMessage, ReplySequence};
pub use socket::{NetlinkSocket, Protocol};
pub use tree::{AttrMap, AttrValue, Entry};
