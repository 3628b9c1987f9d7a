//! Wireless capability discovery for access-point launchers.
//!
//! Queries the kernel's nl80211 generic netlink family for radios,
//! interfaces and per-band capabilities, decoding every reply through pinned
//! attribute policies. Also restarts systemd units over D-Bus with bounded
//! retries, for bringing the network daemon back after an interface rename.
//!
//! # Example
//!
//! ```ignore
//! use wificap::nl80211::{CapabilityQuery, KernelDumpSource};
//!
//! #[tokio::main]
//! async fn main() -> wificap::Result<()> {
//!     let query = CapabilityQuery::new(KernelDumpSource::new());
//!
//!     println!("radios: {:?}", query.list_physical_radios().await?);
//!     println!("5 MHz: {}", query.has_5mhz_support().await?);
//!     Ok(())
//! }
//! ```

mod deadline;
pub mod netlink;
pub mod restart;
pub mod systemd;

pub use netlink::genl::nl80211;
pub use netlink::{Error, Result};
pub use restart::{RestartCoordinator, UnitManager};
pub use systemd::SystemdManager;
