//! Transport error types

use thiserror::Error;

/// Linux errno values used on the status-code boundary
pub mod errno {
    pub const EIO: i32 = 5;
    pub const ENOMEM: i32 = 12;
    pub const EBUSY: i32 = 16;
    pub const ENODEV: i32 = 19;
    pub const EINVAL: i32 = 22;
    pub const ETIMEDOUT: i32 = 110;
}

/// Errors that can occur while handing a command to the firmware
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Target disconnected")]
    Disconnected,

    #[error("Command queue full")]
    QueueFull,

    #[error("Communication timeout")]
    Timeout,

    #[error("Command 0x{cmd_id:04X} rejected by firmware")]
    Rejected { cmd_id: u16 },

    /// Raw negative status reported by a lower layer, passed through as-is
    #[error("Transport status {0}")]
    Status(i32),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TransportError {
    /// Negative errno for the legacy integer status contract
    pub fn errno(&self) -> i32 {
        match self {
            Self::DeviceNotFound(_) | Self::Disconnected => -errno::ENODEV,
            Self::QueueFull => -errno::EBUSY,
            Self::Timeout => -errno::ETIMEDOUT,
            Self::Rejected { .. } => -errno::EINVAL,
            Self::Status(code) => *code,
            Self::Internal(_) => -errno::EIO,
        }
    }
}
