//! Protocol constants for ath6kl Bluetooth-coexistence commands

use std::fmt;

/// WMI command ids (WMI_*_CMDID) for the coexistence block
///
/// Values must byte-match the target firmware. The legacy AR6002 pair lives in
/// the low range, the AR6003 coexistence set in the developer range (0xF000+).
pub mod cmd {
    /// Reserved: "no command", returned for unrecognized requests
    pub const NONE: u16 = 0x0000;

    // COEX AR6002
    pub const SET_BT_STATUS: u16 = 0x003B;
    pub const SET_BT_PARAMS: u16 = 0x003C;

    // COEX AR6003
    pub const SET_BTCOEX_FE_ANT: u16 = 0xF02A;
    pub const SET_BTCOEX_COLOCATED_BT_DEV: u16 = 0xF02B;
    pub const SET_BTCOEX_SCO_CONFIG: u16 = 0xF02C;
    pub const SET_BTCOEX_A2DP_CONFIG: u16 = 0xF02D;
    pub const SET_BTCOEX_ACLCOEX_CONFIG: u16 = 0xF02E;
    pub const SET_BTCOEX_BTINQUIRY_PAGE_CONFIG: u16 = 0xF02F;
    pub const SET_BTCOEX_DEBUG: u16 = 0xF030;
    pub const SET_BTCOEX_BT_OPERATING_STATUS: u16 = 0xF031;
    pub const GET_BTCOEX_STATS: u16 = 0xF032;
    pub const GET_BTCOEX_CONFIG: u16 = 0xF033;
    pub const SET_BTCOEX_HID_CONFIG: u16 = 0xF034;

    /// Get human-readable name for a WMI command id
    pub fn name(cmd: u16) -> &'static str {
        match cmd {
            NONE => "NONE",
            SET_BT_STATUS => "SET_BT_STATUS",
            SET_BT_PARAMS => "SET_BT_PARAMS",
            SET_BTCOEX_FE_ANT => "SET_BTCOEX_FE_ANT",
            SET_BTCOEX_COLOCATED_BT_DEV => "SET_BTCOEX_COLOCATED_BT_DEV",
            SET_BTCOEX_SCO_CONFIG => "SET_BTCOEX_SCO_CONFIG",
            SET_BTCOEX_A2DP_CONFIG => "SET_BTCOEX_A2DP_CONFIG",
            SET_BTCOEX_ACLCOEX_CONFIG => "SET_BTCOEX_ACLCOEX_CONFIG",
            SET_BTCOEX_BTINQUIRY_PAGE_CONFIG => "SET_BTCOEX_BTINQUIRY_PAGE_CONFIG",
            SET_BTCOEX_DEBUG => "SET_BTCOEX_DEBUG",
            SET_BTCOEX_BT_OPERATING_STATUS => "SET_BTCOEX_BT_OPERATING_STATUS",
            GET_BTCOEX_STATS => "GET_BTCOEX_STATS",
            GET_BTCOEX_CONFIG => "GET_BTCOEX_CONFIG",
            SET_BTCOEX_HID_CONFIG => "SET_BTCOEX_HID_CONFIG",
            _ => "UNKNOWN",
        }
    }
}

/// nl80211 testmode request tags (NL80211_WMI_*) as sent from user space
pub mod nl {
    pub const SET_BT_STATUS: u32 = 0;
    pub const SET_BT_PARAMS: u32 = 1;
    pub const SET_BT_FT_ANT: u32 = 2;
    pub const SET_COLOCATED_BT_DEV: u32 = 3;
    pub const SET_BT_INQUIRY_PAGE_CONFIG: u32 = 4;
    pub const SET_BT_SCO_CONFIG: u32 = 5;
    pub const SET_BT_A2DP_CONFIG: u32 = 6;
    pub const SET_BT_ACLCOEX_CONFIG: u32 = 7;
    pub const SET_BT_DEBUG: u32 = 8;
    pub const SET_BT_OPSTATUS: u32 = 9;
    pub const GET_BT_CONFIG: u32 = 10;
    pub const GET_BT_STATS: u32 = 11;
    /// Not in the upstream nl80211 header; defined by the driver.
    pub const SET_BT_HID_CONFIG: u32 = 12;

    /// Size of the tag prefix on every request
    pub const TAG_SIZE: usize = 4;
}

/// A2DP configuration flag bits (a2dp_flags, little-endian u32)
pub mod a2dp {
    pub const ALLOW_OPTIMIZATION: u32 = 1 << 0;
    pub const IS_EDR_CAPABLE: u32 = 1 << 1;
    pub const IS_BT_ROLE_MASTER: u32 = 1 << 2;
    pub const IS_A2DP_HIGH_PRI: u32 = 1 << 3;
    pub const FIND_BT_ROLE: u32 = 1 << 4;
    pub const DIS_SCANCONN_STOMP: u32 = 1 << 5;

    /// Bit position of the max Bluetooth airtime field
    pub const MAX_BLUETOOTH_TIME_LSB: u32 = 24;
    /// Max Bluetooth airtime (40 units), pre-shifted into place
    pub const MAX_BLUETOOTH_TIME: u32 = 40 << MAX_BLUETOOTH_TIME_LSB;
    /// Mask covering the max airtime field
    pub const MAX_BLUETOOTH_TIME_MASK: u32 = 0xFF << MAX_BLUETOOTH_TIME_LSB;

    /// Names of the set flag bits, for printing
    pub fn flag_names(flags: u32) -> Vec<&'static str> {
        [
            (ALLOW_OPTIMIZATION, "ALLOW_OPTIMIZATION"),
            (IS_EDR_CAPABLE, "IS_EDR_CAPABLE"),
            (IS_BT_ROLE_MASTER, "IS_BT_ROLE_MASTER"),
            (IS_A2DP_HIGH_PRI, "IS_A2DP_HIGH_PRI"),
            (FIND_BT_ROLE, "FIND_BT_ROLE"),
            (DIS_SCANCONN_STOMP, "DIS_SCANCONN_STOMP"),
        ]
        .into_iter()
        .filter(|(bit, _)| flags & bit != 0)
        .map(|(_, name)| name)
        .collect()
    }

    /// Decode the max airtime field
    #[inline]
    pub fn max_bluetooth_time(flags: u32) -> u8 {
        ((flags & MAX_BLUETOOTH_TIME_MASK) >> MAX_BLUETOOTH_TIME_LSB) as u8
    }
}

/// Colocated Bluetooth device type (vendor) as understood by the firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BtDeviceType(pub u8);

impl BtDeviceType {
    /// Nothing recorded yet
    pub const UNKNOWN: Self = Self(0);
    /// Qualcomm colocated BT, the only mode tuned for infrastructure links
    pub const QCOM: Self = Self(2);

    pub fn is_qcom(&self) -> bool {
        *self == Self::QCOM
    }
}

impl fmt::Display for BtDeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UNKNOWN => write!(f, "unknown"),
            Self::QCOM => write!(f, "qcom-colocated"),
            Self(other) => write!(f, "type {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_names() {
        assert_eq!(cmd::name(cmd::SET_BTCOEX_A2DP_CONFIG), "SET_BTCOEX_A2DP_CONFIG");
        assert_eq!(cmd::name(cmd::SET_BT_STATUS), "SET_BT_STATUS");
        assert_eq!(cmd::name(0x1234), "UNKNOWN");
    }

    #[test]
    fn test_max_bluetooth_time_encoding() {
        assert_eq!(a2dp::MAX_BLUETOOTH_TIME, 0x2800_0000);
        assert_eq!(a2dp::max_bluetooth_time(a2dp::MAX_BLUETOOTH_TIME | 0x21), 40);
    }

    #[test]
    fn test_flag_names() {
        let names = a2dp::flag_names(a2dp::IS_A2DP_HIGH_PRI | a2dp::DIS_SCANCONN_STOMP);
        assert_eq!(names, vec!["IS_A2DP_HIGH_PRI", "DIS_SCANCONN_STOMP"]);
    }

    #[test]
    fn test_bt_device_type_display() {
        assert_eq!(BtDeviceType::QCOM.to_string(), "qcom-colocated");
        assert_eq!(BtDeviceType(7).to_string(), "type 7");
        assert!(!BtDeviceType(7).is_qcom());
    }
}
