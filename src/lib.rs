// ath6kl Bluetooth-coexistence command shim
// Request translation, board-data adjustment and dispatch to the WMI transport

pub mod board;
pub mod btcoex;
pub mod config;
pub mod device;
pub mod error;
pub mod vif;

pub use board::{BoardData, ANTCONF_OFFSET, BTDEV_OFFSET};
pub use btcoex::{adjust_params, build_request, resolve, wmi_cmd_id, BtcoexCommand, PatchOutcome};
pub use config::BtcoexConfig;
pub use device::{Ath6kl, BtcoexInfo};
pub use error::BtcoexError;
pub use vif::{NetworkType, Vif};

pub use wmi_transport::protocol::{a2dp, cmd, nl};
pub use wmi_transport::BtDeviceType;
