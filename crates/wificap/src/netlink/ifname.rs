//! Interface name, index and hardware address lookups via sysfs.

use std::path::Path;

use super::error::{Error, Result};

/// Maximum interface name length (including null terminator).
pub const IFNAMSIZ: usize = 16;

const SYS_CLASS_NET: &str = "/sys/class/net";

/// Validate an interface name.
pub fn validate(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "empty name"
    } else if name.len() >= IFNAMSIZ {
        "name too long (max 15 bytes)"
    } else if name.contains('/') || name.contains('\0') {
        "name contains invalid characters"
    } else if name.chars().any(char::is_whitespace) {
        "name contains whitespace"
    } else {
        return Ok(());
    };

    Err(Error::InvalidInterfaceName {
        name: name.to_string(),
        reason,
    })
}

/// Convert an interface name to its index.
pub fn name_to_index(name: &str) -> Result<u32> {
    validate(name)?;
    let content = read_attr(Path::new(SYS_CLASS_NET), name, "ifindex")?;
    content.trim().parse().map_err(|_| Error::InterfaceNotFound {
        name: name.to_string(),
    })
}

/// Read the hardware address of an interface.
pub fn mac_address(name: &str) -> Result<[u8; 6]> {
    validate(name)?;
    mac_address_in(Path::new(SYS_CLASS_NET), name)
}

fn mac_address_in(root: &Path, name: &str) -> Result<[u8; 6]> {
    let content = read_attr(root, name, "address")?;
    parse_mac(content.trim()).ok_or_else(|| {
        Error::InvalidMessage(format!("unparseable hardware address for {name}: {}", content.trim()))
    })
}

fn read_attr(root: &Path, name: &str, attr: &str) -> Result<String> {
    std::fs::read_to_string(root.join(name).join(attr)).map_err(|_| Error::InterfaceNotFound {
        name: name.to_string(),
    })
}

/// Parse a colon-separated MAC address.
pub fn parse_mac(s: &str) -> Option<[u8; 6]> {
    let mut mac = [0u8; 6];
    let mut parts = s.split(':');
    for byte in &mut mac {
        *byte = u8::from_str_radix(parts.next()?, 16).ok()?;
    }
    parts.next().is_none().then_some(mac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate("wlan0").is_ok());
        assert!(validate("wl_private").is_ok());

        assert!(validate("").is_err());
        assert!(validate("this_name_is_too_long").is_err());
        assert!(validate("wl/0").is_err());
        assert!(matches!(
            validate("wl 0"),
            Err(Error::InvalidInterfaceName { reason: "name contains whitespace", .. })
        ));
    }

    #[test]
    fn test_parse_mac() {
        assert_eq!(
            parse_mac("00:1a:2B:3c:4d:5e"),
            Some([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e])
        );
        assert_eq!(parse_mac("00:1a:2b:3c:4d"), None);
        assert_eq!(parse_mac("00:1a:2b:3c:4d:5e:6f"), None);
        assert_eq!(parse_mac("zz:1a:2b:3c:4d:5e"), None);
    }

    #[test]
    fn test_mac_address_from_sysfs_layout() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("wl_private")).unwrap();
        std::fs::write(root.path().join("wl_private/address"), "00:11:22:33:44:55\n").unwrap();

        assert_eq!(
            mac_address_in(root.path(), "wl_private").unwrap(),
            [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]
        );
        assert!(matches!(
            mac_address_in(root.path(), "wl_public"),
            Err(Error::InterfaceNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_interface() {
        assert!(matches!(
            name_to_index("nonexistent99"),
            Err(Error::InterfaceNotFound { .. })
        ));
    }
}
