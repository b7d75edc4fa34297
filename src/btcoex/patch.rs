//! Parameter adjustment before a coexistence command is sent
//!
//! Some fields supplied by user space are overridden by board calibration data
//! or by coexistence state recorded from earlier commands. Writes go through
//! typed prefix views, so a payload shorter than the patched field is never
//! written; it is forwarded as-is and reported as [`PatchOutcome::TooShort`].

use std::mem::size_of;

use tracing::{debug, warn};
use wmi_transport::protocol::a2dp;
use wmi_transport::{A2dpConfigHeader, BtDeviceType, SetColocatedBtDevCmd, SetFeAntennaCmd};
use zerocopy::FromBytes;

use super::BtcoexCommand;
use crate::device::Ath6kl;
use crate::vif::NetworkType;

/// What the adjustment did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// No rule for this command, or the rule left everything as supplied
    Unchanged,
    /// `fe_antenna_type` replaced with the board's antenna configuration
    AntennaFromBoard { fe_antenna_type: u8 },
    /// Infrastructure link: vendor forced to QCOM
    VendorForcedQcom,
    /// AP: vendor taken from board data
    VendorFromBoard(BtDeviceType),
    /// AP: vendor taken from the command
    VendorFromCommand(BtDeviceType),
    /// Interface mode has no colocated-device rule; state left alone
    UnsupportedMode(NetworkType),
    /// Device has no virtual interface; state left alone
    NoInterface,
    /// A2DP flags after adjustment
    A2dpFlags { flags: u32 },
    /// Payload shorter than the field the rule needs
    TooShort { need: usize, got: usize },
}

/// Adjust `buf` (and device coexistence state) for `command`
pub fn adjust_params(ar: &mut Ath6kl, command: BtcoexCommand, buf: &mut [u8]) -> PatchOutcome {
    let outcome = match command {
        BtcoexCommand::SetFeAntenna => adjust_fe_antenna(ar, buf),
        BtcoexCommand::SetColocatedBtDev => adjust_colocated_bt_dev(ar, buf),
        BtcoexCommand::SetA2dpConfig => adjust_a2dp_config(ar, buf),
        BtcoexCommand::SetBtStatus
        | BtcoexCommand::SetBtParams
        | BtcoexCommand::SetInquiryPageConfig
        | BtcoexCommand::SetScoConfig
        | BtcoexCommand::SetAclCoexConfig
        | BtcoexCommand::SetDebug
        | BtcoexCommand::SetOperatingStatus
        | BtcoexCommand::GetConfig
        | BtcoexCommand::GetStats
        | BtcoexCommand::SetHidConfig => PatchOutcome::Unchanged,
    };

    match outcome {
        PatchOutcome::TooShort { need, got } => warn!(
            "{}: payload {} bytes, need {}; sending unadjusted",
            command.description(),
            got,
            need
        ),
        PatchOutcome::UnsupportedMode(mode) => warn!(
            "{}: no colocated BT rule for {} interface, vendor left at {}",
            command.description(),
            mode,
            ar.btcoex_info().bt_vendor
        ),
        PatchOutcome::NoInterface => warn!(
            "{}: no virtual interface, vendor left at {}",
            command.description(),
            ar.btcoex_info().bt_vendor
        ),
        PatchOutcome::Unchanged => {}
        other => debug!("{}: {:?}", command.description(), other),
    }
    outcome
}

/// Board antenna configuration, when present, wins over the runtime value
fn adjust_fe_antenna(ar: &Ath6kl, buf: &mut [u8]) -> PatchOutcome {
    let Some(antconf) = ar.board().antenna_config() else {
        return PatchOutcome::Unchanged;
    };
    let got = buf.len();
    match SetFeAntennaCmd::mut_from_prefix(buf) {
        Ok((cmd, _)) => {
            cmd.fe_antenna_type = antconf.get();
            PatchOutcome::AntennaFromBoard {
                fe_antenna_type: antconf.get(),
            }
        }
        Err(_) => PatchOutcome::TooShort {
            need: size_of::<SetFeAntennaCmd>(),
            got,
        },
    }
}

/// Record the colocated BT vendor; the command payload itself is not changed
fn adjust_colocated_bt_dev(ar: &mut Ath6kl, buf: &mut [u8]) -> PatchOutcome {
    let Some(nw_type) = ar.first_vif().map(|v| v.nw_type) else {
        return PatchOutcome::NoInterface;
    };
    let got = buf.len();

    let (vendor, outcome) = match nw_type {
        // QCOM-colocated is the only working mode for station links
        NetworkType::Infra => (BtDeviceType::QCOM, PatchOutcome::VendorForcedQcom),
        NetworkType::Ap => match ar.board().colocated_bt_dev() {
            Some(btdev) => {
                let vendor = BtDeviceType(btdev.get());
                (vendor, PatchOutcome::VendorFromBoard(vendor))
            }
            None => match SetColocatedBtDevCmd::ref_from_prefix(buf) {
                Ok((cmd, _)) => {
                    let vendor = BtDeviceType(cmd.colocated_bt_dev);
                    (vendor, PatchOutcome::VendorFromCommand(vendor))
                }
                Err(_) => {
                    return PatchOutcome::TooShort {
                        need: size_of::<SetColocatedBtDevCmd>(),
                        got,
                    }
                }
            },
        },
        NetworkType::Adhoc | NetworkType::AdhocCreator => {
            return PatchOutcome::UnsupportedMode(nw_type)
        }
    };

    ar.btcoex_info_mut().bt_vendor = vendor;
    outcome
}

/// Tune A2DP flags for the recorded vendor; bits are only ever added
fn adjust_a2dp_config(ar: &Ath6kl, buf: &mut [u8]) -> PatchOutcome {
    let got = buf.len();
    let Ok((cmd, _)) = A2dpConfigHeader::mut_from_prefix(buf) else {
        return PatchOutcome::TooShort {
            need: size_of::<A2dpConfigHeader>(),
            got,
        };
    };

    if ar.btcoex_info().bt_vendor.is_qcom() {
        cmd.insert_flags(a2dp::ALLOW_OPTIMIZATION | a2dp::MAX_BLUETOOTH_TIME);
    } else {
        cmd.insert_flags(a2dp::IS_A2DP_HIGH_PRI);
    }

    // Don't stomp BT during WLAN scan or connection
    cmd.insert_flags(a2dp::DIS_SCANCONN_STOMP);

    PatchOutcome::A2dpFlags { flags: cmd.flags() }
}
