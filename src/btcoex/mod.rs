//! Bluetooth-coexistence command path
//!
//! ```text
//! [tag:u32 LE][payload ...]          <- request from user space
//!        |
//!   translate::resolve               tag -> BtcoexCommand -> WMI id
//!        |
//!   patch::adjust_params             board / state overrides, in place
//!        |
//!   WmiTransport::cmd_send           zeroed buffer, NoSync
//! ```

pub mod patch;
pub mod translate;

pub use patch::{adjust_params, PatchOutcome};
pub use translate::{resolve, wmi_cmd_id, BtcoexCommand};

use tracing::debug;
use wmi_transport::protocol::nl::TAG_SIZE;
use wmi_transport::{SyncFlag, WmiTransport};

use crate::device::Ath6kl;
use crate::error::BtcoexError;

/// Interface index coexistence commands are addressed to
const BTCOEX_IF_IDX: u8 = 0;

/// Allocate a zero-filled command buffer of exactly `size` bytes
fn get_new_buf(size: usize) -> Result<Vec<u8>, BtcoexError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| BtcoexError::NoMemory(size))?;
    buf.resize(size, 0);
    Ok(buf)
}

impl Ath6kl {
    /// Translate, adjust and send a coexistence request
    ///
    /// `request` is the raw user-space buffer: a 4-byte tag followed by the
    /// command payload. The payload is adjusted in place before a copy of it
    /// is handed to the transport, so the caller sees the bytes that were
    /// sent.
    pub fn send_btcoex_cmd(&mut self, request: &mut [u8]) -> Result<(), BtcoexError> {
        if request.len() < TAG_SIZE {
            return Err(BtcoexError::RequestTooShort { len: request.len() });
        }
        let (tag_bytes, payload) = request.split_at_mut(TAG_SIZE);
        let tag = u32::from_le_bytes([tag_bytes[0], tag_bytes[1], tag_bytes[2], tag_bytes[3]]);

        let command = resolve(tag).ok_or(BtcoexError::UnknownCommand(tag))?;

        let mut buf = get_new_buf(payload.len())?;

        adjust_params(self, command, payload);

        buf.copy_from_slice(payload);

        debug!(
            "btcoex: tag {} -> 0x{:04x}, {} bytes",
            tag,
            command.wmi_cmd_id(),
            buf.len()
        );
        self.transport()
            .cmd_send(BTCOEX_IF_IDX, command.wmi_cmd_id(), buf, SyncFlag::NoSync)?;
        Ok(())
    }

    /// [`Ath6kl::send_btcoex_cmd`] with the legacy status-code contract:
    /// 0 on success, negative errno on failure
    pub fn send_btcoex_cmd_errno(&mut self, request: &mut [u8]) -> i32 {
        match self.send_btcoex_cmd(request) {
            Ok(()) => 0,
            Err(e) => e.errno(),
        }
    }
}

/// Build a request buffer: tag followed by payload
pub fn build_request(tag: u32, payload: &[u8]) -> Vec<u8> {
    let mut request = Vec::with_capacity(TAG_SIZE + payload.len());
    request.extend_from_slice(&tag.to_le_bytes());
    request.extend_from_slice(payload);
    request
}
