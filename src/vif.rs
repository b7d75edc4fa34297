//! Virtual interface model
//!
//! Only the operating mode is tracked here; the rest of the interface lives in
//! the networking layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating mode of a virtual interface (`nw_type`)
///
/// Discriminants are the firmware's network type bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum NetworkType {
    /// Infrastructure client (station)
    #[default]
    Infra = 0x01,
    /// IBSS joiner
    Adhoc = 0x02,
    /// IBSS creator
    AdhocCreator = 0x04,
    /// Access point
    Ap = 0x10,
}

impl NetworkType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0x01 => Some(Self::Infra),
            0x02 => Some(Self::Adhoc),
            0x04 => Some(Self::AdhocCreator),
            0x10 => Some(Self::Ap),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infra => "infra",
            Self::Adhoc => "adhoc",
            Self::AdhocCreator => "adhoc-creator",
            Self::Ap => "ap",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A virtual interface on the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vif {
    /// Firmware interface index
    pub fw_vif_idx: u8,
    /// Current operating mode
    pub nw_type: NetworkType,
}

impl Vif {
    pub fn new(fw_vif_idx: u8, nw_type: NetworkType) -> Self {
        Self {
            fw_vif_idx,
            nw_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_type_bits() {
        assert_eq!(NetworkType::Ap as u8, 0x10);
        assert_eq!(NetworkType::from_u8(0x04), Some(NetworkType::AdhocCreator));
        assert_eq!(NetworkType::from_u8(0x03), None);
    }

    #[test]
    fn test_network_type_display() {
        assert_eq!(NetworkType::AdhocCreator.to_string(), "adhoc-creator");
        assert_eq!(NetworkType::Infra.to_string(), "infra");
    }
}
