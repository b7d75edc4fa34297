//! In-memory transport that records every command it is given

use parking_lot::Mutex;
use tracing::debug;

use crate::error::TransportError;
use crate::protocol::cmd;
use crate::types::{SentCommand, SyncFlag, TransportDeviceInfo};
use crate::WmiTransport;

/// Loopback transport
///
/// Stores commands instead of delivering them. Used for dry runs and as the
/// inner transport in tests. A queued failure is returned by the next send,
/// and that command is not recorded.
pub struct LoopbackTransport {
    info: TransportDeviceInfo,
    sent: Mutex<Vec<SentCommand>>,
    fail_next: Mutex<Option<TransportError>>,
}

impl LoopbackTransport {
    pub fn new() -> Self {
        Self {
            info: TransportDeviceInfo::new("loopback"),
            sent: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    /// Make the next `cmd_send` fail with `err`
    pub fn fail_next(&self, err: TransportError) {
        *self.fail_next.lock() = Some(err);
    }

    /// Commands sent so far, oldest first
    pub fn sent(&self) -> Vec<SentCommand> {
        self.sent.lock().clone()
    }

    /// Most recently sent command
    pub fn last(&self) -> Option<SentCommand> {
        self.sent.lock().last().cloned()
    }

    /// Number of commands sent
    pub fn count(&self) -> usize {
        self.sent.lock().len()
    }
}

impl Default for LoopbackTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl WmiTransport for LoopbackTransport {
    fn cmd_send(
        &self,
        if_idx: u8,
        cmd_id: u16,
        data: Vec<u8>,
        sync: SyncFlag,
    ) -> Result<(), TransportError> {
        if let Some(err) = self.fail_next.lock().take() {
            debug!("loopback: failing {} with {}", cmd::name(cmd_id), err);
            return Err(err);
        }
        debug!(
            "loopback: {} (0x{:04x}) if={} len={} {}",
            cmd::name(cmd_id),
            cmd_id,
            if_idx,
            data.len(),
            sync.as_str()
        );
        self.sent.lock().push(SentCommand {
            if_idx,
            cmd_id,
            data,
            sync,
        });
        Ok(())
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_commands() {
        let t = LoopbackTransport::new();
        t.cmd_send(0, cmd::SET_BT_STATUS, vec![1, 2], SyncFlag::NoSync)
            .unwrap();
        assert_eq!(t.count(), 1);
        let last = t.last().unwrap();
        assert_eq!(last.cmd_id, cmd::SET_BT_STATUS);
        assert_eq!(last.data, vec![1, 2]);
        assert_eq!(last.sync, SyncFlag::NoSync);
    }

    #[test]
    fn test_fail_next_is_one_shot() {
        let t = LoopbackTransport::new();
        t.fail_next(TransportError::QueueFull);
        assert_eq!(
            t.cmd_send(0, cmd::SET_BT_STATUS, vec![], SyncFlag::NoSync),
            Err(TransportError::QueueFull)
        );
        assert_eq!(t.count(), 0);
        assert!(t
            .cmd_send(0, cmd::SET_BT_STATUS, vec![], SyncFlag::NoSync)
            .is_ok());
        assert_eq!(t.count(), 1);
    }
}
