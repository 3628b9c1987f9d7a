//! Non-blocking netlink socket driven by tokio readiness.

use std::io;
use std::sync::atomic::{AtomicU32, Ordering};

use bytes::BytesMut;
use netlink_sys::{Socket, SocketAddr, protocols};
use tokio::io::Interest;
use tokio::io::unix::AsyncFd;
use tracing::trace;

use super::error::{Error, Result};

/// A non-split wiphy dump puts a whole radio in one message, which easily
/// exceeds a page.
const RECV_BUF_SIZE: usize = 64 * 1024;

/// Netlink protocols this crate speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Link rename and up/down.
    Route,
    /// nl80211 and the controller.
    Generic,
}

impl Protocol {
    fn number(self) -> isize {
        match self {
            Protocol::Route => protocols::NETLINK_ROUTE,
            Protocol::Generic => protocols::NETLINK_GENERIC,
        }
    }

    fn transport(self) -> &'static str {
        match self {
            Protocol::Route => "route netlink",
            Protocol::Generic => "generic netlink",
        }
    }
}

/// Bound netlink socket. Closed on drop.
pub struct NetlinkSocket {
    fd: AsyncFd<Socket>,
    seq: AtomicU32,
    pid: u32,
}

impl NetlinkSocket {
    /// Open and bind a socket; failures surface as [`Error::Connect`].
    pub fn new(protocol: Protocol) -> Result<Self> {
        Self::bind(protocol).map_err(|source| Error::Connect {
            transport: protocol.transport(),
            source,
        })
    }

    fn bind(protocol: Protocol) -> io::Result<Self> {
        let mut socket = Socket::new(protocol.number())?;
        socket.set_non_blocking(true)?;

        let mut addr = SocketAddr::new(0, 0);
        socket.bind(&addr)?;
        socket.get_address(&mut addr)?;

        // Extended ACKs only enrich error replies; older kernels lack them.
        let _ = socket.set_ext_ack(true);

        let pid = addr.port_number();
        trace!(?protocol, pid, "netlink socket bound");
        Ok(Self {
            fd: AsyncFd::new(socket)?,
            seq: AtomicU32::new(1),
            pid,
        })
    }

    /// Sequence number for the next request.
    pub fn next_seq(&self) -> u32 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    /// Port id the kernel assigned at bind time.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub async fn send(&self, msg: &[u8]) -> Result<()> {
        self.fd
            .async_io(Interest::WRITABLE, |socket| socket.send(msg, 0))
            .await?;
        Ok(())
    }

    /// Receive one datagram.
    pub async fn recv_msg(&self) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(RECV_BUF_SIZE);
        self.fd
            .async_io(Interest::READABLE, |socket| socket.recv(&mut buf, 0))
            .await?;
        Ok(buf.to_vec())
    }
}
