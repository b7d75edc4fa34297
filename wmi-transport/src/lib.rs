//! WMI command transport abstraction for ath6kl targets
//!
//! This crate provides the interface the driver uses to hand fully-formed
//! firmware (WMI) commands to the target, plus the command id tables and
//! typed payload views shared by its users:
//!
//! - `WmiTransport` - the command-dispatch channel
//! - `LoopbackTransport` - in-memory sink that records what was sent
//! - `PrinterTransport` - middleware that prints every outbound command

pub mod command;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod types;

mod loopback;

pub use command::{
    try_parse_command, A2dpConfigHeader, ParsedCommand, SetColocatedBtDevCmd, SetFeAntennaCmd,
};
pub use error::TransportError;
pub use loopback::LoopbackTransport;
pub use printer::{CommandFilter, OutputFormat, PrinterConfig, PrinterTransport};
pub use protocol::BtDeviceType;
pub use types::{SentCommand, SyncFlag, TransportDeviceInfo};

use std::sync::Arc;

/// The core transport trait - all backends implement this
///
/// Sending is synchronous: the call returns once the command has been queued
/// to the target, not when the firmware acknowledges it.
pub trait WmiTransport: Send + Sync {
    /// Send a WMI command
    ///
    /// # Arguments
    /// * `if_idx` - Virtual interface index the command is addressed to
    /// * `cmd_id` - WMI command id (e.g., `protocol::cmd::SET_BTCOEX_FE_ANT`)
    /// * `data` - Command payload; ownership passes to the transport
    /// * `sync` - Synchronization to apply around the command
    fn cmd_send(
        &self,
        if_idx: u8,
        cmd_id: u16,
        data: Vec<u8>,
        sync: SyncFlag,
    ) -> Result<(), TransportError>;

    /// Get target information
    fn device_info(&self) -> &TransportDeviceInfo;
}

/// Type alias for a shared transport
pub type BoxedTransport = Arc<dyn WmiTransport>;
