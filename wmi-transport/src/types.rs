//! Common types for transport layer

/// Synchronization requested around a WMI command
///
/// Sync variants make the target flush data endpoints before and/or after the
/// command is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SyncFlag {
    /// Fire and forget
    #[default]
    NoSync = 0,
    /// Flush data before the command
    SyncBefore = 1,
    /// Flush data after the command
    SyncAfter = 2,
    /// Flush on both sides
    SyncBoth = 3,
}

impl SyncFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoSync => "no-sync",
            Self::SyncBefore => "sync-before",
            Self::SyncAfter => "sync-after",
            Self::SyncBoth => "sync-both",
        }
    }
}

/// Target identification information
#[derive(Debug, Clone)]
pub struct TransportDeviceInfo {
    /// Interface or bus path of the target
    pub device_path: String,
    /// Firmware/target name if known
    pub target_name: Option<String>,
}

impl TransportDeviceInfo {
    pub fn new(device_path: impl Into<String>) -> Self {
        Self {
            device_path: device_path.into(),
            target_name: None,
        }
    }
}

/// A command as it was handed to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentCommand {
    /// Interface index the command was addressed to
    pub if_idx: u8,
    /// WMI command id
    pub cmd_id: u16,
    /// Command payload
    pub data: Vec<u8>,
    /// Requested synchronization
    pub sync: SyncFlag,
}
