//! Error types for netlink and capability operations.

use std::io;
use std::time::Duration;

/// Result type for wificap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the kernel or the service manager.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from socket operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The transport could not be opened.
    #[error("cannot open {transport} connection: {source}")]
    Connect {
        /// Which transport failed ("generic netlink", "route netlink", ...).
        transport: &'static str,
        /// Underlying socket error.
        #[source]
        source: io::Error,
    },

    /// Kernel returned an error code.
    #[error("kernel error: {message} (errno {errno})")]
    Kernel {
        /// The errno value from the kernel.
        errno: i32,
        /// Human-readable error message.
        message: String,
    },

    /// Kernel error with operation context.
    #[error("{operation}: {message} (errno {errno})")]
    KernelWithContext {
        /// The operation that failed.
        operation: String,
        /// The errno value from the kernel.
        errno: i32,
        /// Human-readable error message.
        message: String,
    },

    /// Message was truncated.
    #[error("message truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Expected message length.
        expected: usize,
        /// Actual bytes received.
        actual: usize,
    },

    /// Invalid message format.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// Invalid attribute format.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// Attribute type-id not declared by the policy it was decoded under.
    #[error("unknown attribute {id} in {policy} policy")]
    UnknownAttribute {
        /// Policy prefix.
        policy: &'static str,
        /// Numeric attribute type.
        id: u16,
    },

    /// The same attribute appeared twice in one map.
    #[error("duplicate attribute {policy}_{name}")]
    DuplicateAttribute {
        /// Policy prefix.
        policy: &'static str,
        /// Attribute name.
        name: &'static str,
    },

    /// The stored kind of an attribute disagrees with what was asked for.
    #[error("attribute {policy}_{name} is {actual}, not {expected}")]
    KindMismatch {
        /// Policy prefix.
        policy: &'static str,
        /// Attribute name.
        name: &'static str,
        /// Kind the caller asked for.
        expected: &'static str,
        /// Kind actually stored.
        actual: &'static str,
    },

    /// An attribute map was decoded under a different policy than expected.
    #[error("expected a '{expected}' attribute map but found '{actual}'")]
    PolicyMismatch {
        /// Prefix the caller asserted.
        expected: &'static str,
        /// Prefix of the policy the map was decoded under.
        actual: &'static str,
    },

    /// A required attribute was absent.
    #[error("missing attribute {policy}_{name}")]
    MissingAttribute {
        /// Policy prefix.
        policy: &'static str,
        /// Attribute name.
        name: &'static str,
    },

    /// Generic netlink family not registered with the controller.
    #[error("generic netlink family not found: {name}")]
    FamilyNotFound {
        /// The family name that was looked up.
        name: String,
    },

    /// The dump completed without a reply for this radio.
    #[error("radio not found: {name}")]
    RadioNotFound {
        /// The radio (wiphy) name.
        name: String,
    },

    /// The radio was found but reports no bands.
    #[error("no bands found for radio '{radio}'")]
    NoBands {
        /// The radio (wiphy) name.
        radio: String,
    },

    /// Interface not found.
    #[error("interface not found: {name}")]
    InterfaceNotFound {
        /// The interface name that was not found.
        name: String,
    },

    /// Invalid interface name.
    #[error("invalid interface name '{name}': {reason}")]
    InvalidInterfaceName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A wait for an external completion signal exceeded its deadline.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        /// What was being waited for.
        operation: &'static str,
        /// The deadline that elapsed.
        after: Duration,
    },

    /// Unit restart never reported "done".
    #[error("failed to restart {unit} after {attempts} attempts, last status was '{last_status}'")]
    RestartFailed {
        /// The systemd unit.
        unit: String,
        /// Attempts consumed.
        attempts: usize,
        /// Status string of the final attempt.
        last_status: String,
    },

    /// D-Bus error from the service manager.
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),
}

impl Error {
    /// Create a kernel error from an errno value.
    pub fn from_errno(errno: i32) -> Self {
        let message = io::Error::from_raw_os_error(-errno).to_string();
        Self::Kernel {
            errno: -errno,
            message,
        }
    }

    /// Add context to this error.
    ///
    /// Wraps kernel errors with operation context. Other errors are returned unchanged.
    pub fn with_context(self, operation: impl Into<String>) -> Self {
        match self {
            Self::Kernel { errno, message } => Self::KernelWithContext {
                operation: operation.into(),
                errno,
                message,
            },
            other => other,
        }
    }

    /// Check if this is a "not found" error.
    ///
    /// Callers may treat these as "feature absent" rather than "system broken".
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Kernel { errno, .. } | Self::KernelWithContext { errno, .. } => {
                matches!(*errno, 2 | 19) // ENOENT=2, ENODEV=19
            }
            Self::FamilyNotFound { .. }
            | Self::RadioNotFound { .. }
            | Self::NoBands { .. }
            | Self::InterfaceNotFound { .. } => true,
            _ => false,
        }
    }

    /// Check if this is a permission error (EPERM, EACCES).
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Kernel { errno, .. } | Self::KernelWithContext { errno, .. } => {
                matches!(*errno, 1 | 13) // EPERM=1, EACCES=13
            }
            Self::Connect { source, .. } => source.kind() == io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Check if this error came from malformed or policy-mismatched bytes.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Truncated { .. }
                | Self::InvalidMessage(_)
                | Self::InvalidAttribute(_)
                | Self::UnknownAttribute { .. }
                | Self::DuplicateAttribute { .. }
                | Self::KindMismatch { .. }
                | Self::PolicyMismatch { .. }
        )
    }

    /// Get the errno value if this is a kernel error.
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::Kernel { errno, .. } | Self::KernelWithContext { errno, .. } => Some(*errno),
            _ => None,
        }
    }
}
