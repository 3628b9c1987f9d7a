//! Link state and renaming over route netlink.

use tracing::debug;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use super::builder::MessageBuilder;
use super::error::{Error, Result};
use super::ifname;
use super::message::{MessageIter, NLM_F_ACK, NLM_F_REQUEST, NlMsgType, error_code};
use super::socket::{NetlinkSocket, Protocol};

/// `IFLA_IFNAME` link attribute.
const IFLA_IFNAME: u16 = 3;

/// Interface info message (mirrors struct ifinfomsg).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct IfInfoMsg {
    /// Address family (usually AF_UNSPEC).
    pub ifi_family: u8,
    pub __ifi_pad: u8,
    /// Device type (ARPHRD_*).
    pub ifi_type: u16,
    pub ifi_index: i32,
    /// Device flags (IFF_*).
    pub ifi_flags: u32,
    /// Change mask.
    pub ifi_change: u32,
}

impl IfInfoMsg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.ifi_index = index;
        self
    }
}

/// Interface flags.
pub mod iff {
    pub const UP: u32 = 1 << 0;
}

fn setlink_request() -> MessageBuilder {
    MessageBuilder::new(NlMsgType::RTM_SETLINK, NLM_F_REQUEST | NLM_F_ACK)
}

fn link_state_request(ifindex: u32, up: bool) -> MessageBuilder {
    let mut ifinfo = IfInfoMsg::new().with_index(ifindex as i32);
    ifinfo.ifi_flags = if up { iff::UP } else { 0 };
    ifinfo.ifi_change = iff::UP;

    let mut builder = setlink_request();
    builder.append(&ifinfo);
    builder
}

fn link_name_request(ifindex: u32, new_name: &str) -> MessageBuilder {
    let mut builder = setlink_request();
    builder.append(&IfInfoMsg::new().with_index(ifindex as i32));
    builder.append_attr_str(IFLA_IFNAME, new_name);
    builder
}

/// Check the kernel's answer to an ACK request.
fn process_ack(data: &[u8], expected_seq: u32) -> Result<Option<()>> {
    for result in MessageIter::new(data) {
        let (header, payload) = result?;

        if header.nlmsg_seq != expected_seq || !header.is_error() {
            continue;
        }

        return match error_code(payload)? {
            0 => Ok(Some(())),
            code => Err(Error::from_errno(code)),
        };
    }
    Ok(None)
}

/// Route netlink connection for link changes.
pub struct RouteConnection {
    socket: NetlinkSocket,
}

impl RouteConnection {
    /// Open a route netlink socket.
    pub fn new() -> Result<Self> {
        Ok(Self {
            socket: NetlinkSocket::new(Protocol::Route)?,
        })
    }

    /// Send a request that expects an ACK only.
    pub async fn request_ack(&self, mut builder: MessageBuilder) -> Result<()> {
        let seq = self.socket.next_seq();
        builder.set_seq(seq);
        builder.set_pid(self.socket.pid());
        self.socket.send(&builder.finish()).await?;

        loop {
            let response = self.socket.recv_msg().await?;
            if process_ack(&response, seq)?.is_some() {
                return Ok(());
            }
        }
    }

    /// Bring an interface up or down by index.
    pub async fn set_link_state_by_index(&self, ifindex: u32, up: bool) -> Result<()> {
        self.request_ack(link_state_request(ifindex, up))
            .await
            .map_err(|e| e.with_context(format!("setting link {ifindex} {}", if up { "up" } else { "down" })))
    }

    /// Rename an interface by index. The interface must be down.
    pub async fn set_link_name_by_index(&self, ifindex: u32, new_name: &str) -> Result<()> {
        ifname::validate(new_name)?;
        self.request_ack(link_name_request(ifindex, new_name))
            .await
            .map_err(|e| e.with_context(format!("renaming link {ifindex} to {new_name}")))
    }

    /// Take `ifname` down, rename it to `new_name` and bring it back up.
    pub async fn rename_link(&self, ifname: &str, new_name: &str) -> Result<()> {
        let ifindex = ifname::name_to_index(ifname)?;
        debug!(from = ifname, to = new_name, ifindex, "renaming interface");

        self.set_link_state_by_index(ifindex, false).await?;
        self.set_link_name_by_index(ifindex, new_name).await?;
        self.set_link_state_by_index(ifindex, true).await
    }
}
