//! Per-device driver context

use std::sync::Arc;

use wmi_transport::{BoxedTransport, BtDeviceType, WmiTransport};

use crate::board::BoardData;
use crate::vif::{NetworkType, Vif};

/// Coexistence state remembered across commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BtcoexInfo {
    /// Colocated BT vendor recorded by the last colocated-device command
    pub bt_vendor: BtDeviceType,
}

/// Long-lived device context
///
/// Everything that mutates coexistence state takes `&mut self`. Callers that
/// share a device between threads must serialize access themselves (for
/// example by holding it in a `Mutex`); this type does no locking.
pub struct Ath6kl {
    transport: BoxedTransport,
    board: BoardData,
    vifs: Vec<Vif>,
    btcoex_info: BtcoexInfo,
}

impl Ath6kl {
    /// Create a device context with no virtual interfaces
    ///
    /// # Arguments
    /// * `transport` - WMI command channel to the target
    /// * `board` - Board calibration data loaded at bring-up
    pub fn new(transport: Arc<dyn WmiTransport>, board: BoardData) -> Self {
        Self {
            transport,
            board,
            vifs: Vec::new(),
            btcoex_info: BtcoexInfo::default(),
        }
    }

    /// Builder-style variant of [`Ath6kl::add_vif`]
    pub fn with_vif(mut self, nw_type: NetworkType) -> Self {
        self.add_vif(nw_type);
        self
    }

    /// Add a virtual interface, returning its index
    pub fn add_vif(&mut self, nw_type: NetworkType) -> u8 {
        let idx = self.vifs.len() as u8;
        self.vifs.push(Vif::new(idx, nw_type));
        idx
    }

    /// Change the operating mode of an existing interface
    pub fn set_vif_mode(&mut self, fw_vif_idx: u8, nw_type: NetworkType) -> bool {
        match self.vifs.iter_mut().find(|v| v.fw_vif_idx == fw_vif_idx) {
            Some(vif) => {
                vif.nw_type = nw_type;
                true
            }
            None => false,
        }
    }

    /// First virtual interface, the one coexistence decisions are based on
    pub fn first_vif(&self) -> Option<&Vif> {
        self.vifs.first()
    }

    pub fn board(&self) -> &BoardData {
        &self.board
    }

    pub fn transport(&self) -> &BoxedTransport {
        &self.transport
    }

    pub fn btcoex_info(&self) -> &BtcoexInfo {
        &self.btcoex_info
    }

    pub(crate) fn btcoex_info_mut(&mut self) -> &mut BtcoexInfo {
        &mut self.btcoex_info
    }

    /// Seed the recorded BT vendor (e.g. restored from configuration)
    pub fn set_bt_vendor(&mut self, vendor: BtDeviceType) {
        self.btcoex_info.bt_vendor = vendor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wmi_transport::LoopbackTransport;

    #[test]
    fn test_first_vif() {
        let ar = Ath6kl::new(Arc::new(LoopbackTransport::new()), BoardData::blank());
        assert!(ar.first_vif().is_none());

        let ar = ar.with_vif(NetworkType::Ap).with_vif(NetworkType::Infra);
        assert_eq!(ar.first_vif().unwrap().nw_type, NetworkType::Ap);
    }

    #[test]
    fn test_set_vif_mode() {
        let mut ar = Ath6kl::new(Arc::new(LoopbackTransport::new()), BoardData::blank());
        let idx = ar.add_vif(NetworkType::Infra);
        assert!(ar.set_vif_mode(idx, NetworkType::Ap));
        assert!(!ar.set_vif_mode(5, NetworkType::Ap));
        assert_eq!(ar.first_vif().unwrap().nw_type, NetworkType::Ap);
    }

    #[test]
    fn test_default_vendor_is_unknown() {
        let ar = Ath6kl::new(Arc::new(LoopbackTransport::new()), BoardData::blank());
        assert_eq!(ar.btcoex_info().bt_vendor, BtDeviceType::UNKNOWN);
    }
}
