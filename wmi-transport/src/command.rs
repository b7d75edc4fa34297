//! Typed views over coexistence command payloads and a decoder for printing
//!
//! The payload layouts are owned by the firmware. Only the fields the driver
//! reads or patches are modelled; everything after them is opaque and left
//! untouched.

use serde::Serialize;
use zerocopy::byteorder::little_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::protocol::{a2dp, cmd};

// =============================================================================
// Typed Packet Structs (zerocopy)
// =============================================================================

/// SET_BTCOEX_FE_ANT payload: front-end antenna configuration, 1 byte.
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct SetFeAntennaCmd {
    pub fe_antenna_type: u8,
}

/// SET_BTCOEX_COLOCATED_BT_DEV payload: colocated BT device type, 1 byte.
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct SetColocatedBtDevCmd {
    pub colocated_bt_dev: u8,
}

/// Leading word of SET_BTCOEX_A2DP_CONFIG (`btcoex_a2dp_config.a2dp_flags`).
///
/// The rest of the command (pspoll and opt-mode blocks) follows and is not
/// interpreted here.
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct A2dpConfigHeader {
    pub a2dp_flags: U32,
}

impl A2dpConfigHeader {
    pub fn flags(&self) -> u32 {
        self.a2dp_flags.get()
    }

    /// OR bits into the flags word; never clears anything
    pub fn insert_flags(&mut self, bits: u32) {
        self.a2dp_flags.set(self.a2dp_flags.get() | bits);
    }
}

// =============================================================================
// Packet dispatcher for printing
// =============================================================================

/// Decoded outbound command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ParsedCommand {
    FeAntenna {
        fe_antenna_type: u8,
    },
    ColocatedBtDev {
        colocated_bt_dev: u8,
    },
    A2dpConfig {
        flags: u32,
        flag_names: Vec<&'static str>,
        max_bt_time: u8,
    },
    /// Known id whose payload is passed through opaquely, or a payload too
    /// short for its typed view
    Opaque {
        cmd_id: u16,
        name: &'static str,
        len: usize,
    },
}

/// Decode a payload by command id
pub fn try_parse_command(cmd_id: u16, data: &[u8]) -> ParsedCommand {
    let opaque = || ParsedCommand::Opaque {
        cmd_id,
        name: cmd::name(cmd_id),
        len: data.len(),
    };
    match cmd_id {
        cmd::SET_BTCOEX_FE_ANT => SetFeAntennaCmd::ref_from_prefix(data)
            .map(|(c, _)| ParsedCommand::FeAntenna {
                fe_antenna_type: c.fe_antenna_type,
            })
            .unwrap_or_else(|_| opaque()),
        cmd::SET_BTCOEX_COLOCATED_BT_DEV => SetColocatedBtDevCmd::ref_from_prefix(data)
            .map(|(c, _)| ParsedCommand::ColocatedBtDev {
                colocated_bt_dev: c.colocated_bt_dev,
            })
            .unwrap_or_else(|_| opaque()),
        cmd::SET_BTCOEX_A2DP_CONFIG => A2dpConfigHeader::ref_from_prefix(data)
            .map(|(c, _)| {
                let flags = c.flags();
                ParsedCommand::A2dpConfig {
                    flags,
                    flag_names: a2dp::flag_names(flags),
                    max_bt_time: a2dp::max_bluetooth_time(flags),
                }
            })
            .unwrap_or_else(|_| opaque()),
        _ => opaque(),
    }
}
