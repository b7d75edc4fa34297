//! nl80211 request tag -> WMI command id

use tracing::debug;
use wmi_transport::protocol::{cmd, nl};

/// The closed set of coexistence commands user space can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BtcoexCommand {
    SetBtStatus,
    SetBtParams,
    SetFeAntenna,
    SetColocatedBtDev,
    SetInquiryPageConfig,
    SetScoConfig,
    SetA2dpConfig,
    SetAclCoexConfig,
    SetDebug,
    SetOperatingStatus,
    GetConfig,
    GetStats,
    SetHidConfig,
}

impl BtcoexCommand {
    /// Every command, in tag order
    pub const ALL: [Self; 13] = [
        Self::SetBtStatus,
        Self::SetBtParams,
        Self::SetFeAntenna,
        Self::SetColocatedBtDev,
        Self::SetInquiryPageConfig,
        Self::SetScoConfig,
        Self::SetA2dpConfig,
        Self::SetAclCoexConfig,
        Self::SetDebug,
        Self::SetOperatingStatus,
        Self::GetConfig,
        Self::GetStats,
        Self::SetHidConfig,
    ];

    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            nl::SET_BT_STATUS => Some(Self::SetBtStatus),
            nl::SET_BT_PARAMS => Some(Self::SetBtParams),
            nl::SET_BT_FT_ANT => Some(Self::SetFeAntenna),
            nl::SET_COLOCATED_BT_DEV => Some(Self::SetColocatedBtDev),
            nl::SET_BT_INQUIRY_PAGE_CONFIG => Some(Self::SetInquiryPageConfig),
            nl::SET_BT_SCO_CONFIG => Some(Self::SetScoConfig),
            nl::SET_BT_A2DP_CONFIG => Some(Self::SetA2dpConfig),
            nl::SET_BT_ACLCOEX_CONFIG => Some(Self::SetAclCoexConfig),
            nl::SET_BT_DEBUG => Some(Self::SetDebug),
            nl::SET_BT_OPSTATUS => Some(Self::SetOperatingStatus),
            nl::GET_BT_CONFIG => Some(Self::GetConfig),
            nl::GET_BT_STATS => Some(Self::GetStats),
            nl::SET_BT_HID_CONFIG => Some(Self::SetHidConfig),
            _ => None,
        }
    }

    /// nl80211 tag user space sends for this command
    pub fn tag(&self) -> u32 {
        match self {
            Self::SetBtStatus => nl::SET_BT_STATUS,
            Self::SetBtParams => nl::SET_BT_PARAMS,
            Self::SetFeAntenna => nl::SET_BT_FT_ANT,
            Self::SetColocatedBtDev => nl::SET_COLOCATED_BT_DEV,
            Self::SetInquiryPageConfig => nl::SET_BT_INQUIRY_PAGE_CONFIG,
            Self::SetScoConfig => nl::SET_BT_SCO_CONFIG,
            Self::SetA2dpConfig => nl::SET_BT_A2DP_CONFIG,
            Self::SetAclCoexConfig => nl::SET_BT_ACLCOEX_CONFIG,
            Self::SetDebug => nl::SET_BT_DEBUG,
            Self::SetOperatingStatus => nl::SET_BT_OPSTATUS,
            Self::GetConfig => nl::GET_BT_CONFIG,
            Self::GetStats => nl::GET_BT_STATS,
            Self::SetHidConfig => nl::SET_BT_HID_CONFIG,
        }
    }

    /// WMI command id sent to the firmware
    pub fn wmi_cmd_id(&self) -> u16 {
        match self {
            Self::SetBtStatus => cmd::SET_BT_STATUS,
            Self::SetBtParams => cmd::SET_BT_PARAMS,
            Self::SetFeAntenna => cmd::SET_BTCOEX_FE_ANT,
            Self::SetColocatedBtDev => cmd::SET_BTCOEX_COLOCATED_BT_DEV,
            Self::SetInquiryPageConfig => cmd::SET_BTCOEX_BTINQUIRY_PAGE_CONFIG,
            Self::SetScoConfig => cmd::SET_BTCOEX_SCO_CONFIG,
            Self::SetA2dpConfig => cmd::SET_BTCOEX_A2DP_CONFIG,
            Self::SetAclCoexConfig => cmd::SET_BTCOEX_ACLCOEX_CONFIG,
            Self::SetDebug => cmd::SET_BTCOEX_DEBUG,
            Self::SetOperatingStatus => cmd::SET_BTCOEX_BT_OPERATING_STATUS,
            Self::GetConfig => cmd::GET_BTCOEX_CONFIG,
            Self::GetStats => cmd::GET_BTCOEX_STATS,
            Self::SetHidConfig => cmd::SET_BTCOEX_HID_CONFIG,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::SetBtStatus => "Set BT status",
            Self::SetBtParams => "Set BT params",
            Self::SetFeAntenna => "Set BT FT antenna",
            Self::SetColocatedBtDev => "Set BT collocated dev",
            Self::SetInquiryPageConfig => "Set BT inquiry page",
            Self::SetScoConfig => "Set BT sco config",
            Self::SetA2dpConfig => "Set BT a2dp config",
            Self::SetAclCoexConfig => "Set BT acl config",
            Self::SetDebug => "Set BT bt debug",
            Self::SetOperatingStatus => "Set BT op status",
            Self::GetConfig => "Get BT config",
            Self::GetStats => "Get BT stats",
            Self::SetHidConfig => "Set BT hid config",
        }
    }
}

/// Resolve a request tag, logging the request it names
pub fn resolve(tag: u32) -> Option<BtcoexCommand> {
    let command = BtcoexCommand::from_tag(tag)?;
    debug!("{}", command.description());
    Some(command)
}

/// Resolve a request tag to its WMI command id, `cmd::NONE` if unrecognized
pub fn wmi_cmd_id(tag: u32) -> u16 {
    resolve(tag).map_or(cmd::NONE, |c| c.wmi_cmd_id())
}
