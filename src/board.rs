//! Board calibration data access
//!
//! The board data blob is loaded once at device bring-up and never modified
//! afterwards. Coexistence only reads two bytes from it.

use std::num::NonZeroU8;
use std::path::Path;
use std::sync::Arc;

/// Offset of the antenna configuration byte
pub const ANTCONF_OFFSET: usize = 4069;
/// Offset of the colocated Bluetooth device type byte
pub const BTDEV_OFFSET: usize = 4070;

/// Read-only board calibration data
#[derive(Debug, Clone, Default)]
pub struct BoardData {
    bytes: Arc<[u8]>,
}

impl BoardData {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Load a board data file from disk
    pub fn load(path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(std::fs::read(path)?))
    }

    /// Board data large enough to carry both coexistence bytes, all zero
    pub fn blank() -> Self {
        Self::new(vec![0u8; BTDEV_OFFSET + 1])
    }

    /// Copy of `self` with one byte replaced; grows the blob if needed
    pub fn with_byte(&self, offset: usize, value: u8) -> Self {
        let mut bytes = self.bytes.to_vec();
        if bytes.len() <= offset {
            bytes.resize(offset + 1, 0);
        }
        bytes[offset] = value;
        Self::new(bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `offset`, `None` past the end of the blob
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Antenna configuration, if the board provides one
    pub fn antenna_config(&self) -> Option<NonZeroU8> {
        self.byte_at(ANTCONF_OFFSET).and_then(NonZeroU8::new)
    }

    /// Colocated BT device type, if the board provides one
    pub fn colocated_bt_dev(&self) -> Option<NonZeroU8> {
        self.byte_at(BTDEV_OFFSET).and_then(NonZeroU8::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_board_has_no_overrides() {
        let board = BoardData::blank();
        assert_eq!(board.len(), 4071);
        assert_eq!(board.antenna_config(), None);
        assert_eq!(board.colocated_bt_dev(), None);
    }

    #[test]
    fn test_short_board_reads_as_absent() {
        let board = BoardData::new(vec![0xFFu8; 100]);
        assert_eq!(board.byte_at(ANTCONF_OFFSET), None);
        assert_eq!(board.antenna_config(), None);
        assert_eq!(board.byte_at(99), Some(0xFF));
    }

    #[test]
    fn test_with_byte() {
        let board = BoardData::default()
            .with_byte(ANTCONF_OFFSET, 3)
            .with_byte(BTDEV_OFFSET, 7);
        assert_eq!(board.antenna_config().map(NonZeroU8::get), Some(3));
        assert_eq!(board.colocated_bt_dev().map(NonZeroU8::get), Some(7));
    }
}
