//! Device configuration (TOML)
//!
//! ```toml
//! board_file = "/lib/firmware/ath6k/AR6003/hw2.1.1/bdata.bin"
//! interface = "ap"
//! bt_vendor = 2
//! show_hex = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::BoardData;
use crate::vif::NetworkType;

/// Configuration for a device context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BtcoexConfig {
    /// Board calibration data file; blank board data when unset
    pub board_file: Option<PathBuf>,
    /// Operating mode of the first virtual interface
    pub interface: NetworkType,
    /// Initial colocated BT vendor byte
    pub bt_vendor: Option<u8>,
    /// Print hex dumps of outbound commands
    pub show_hex: bool,
}

impl BtcoexConfig {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ath6kl")
            .join("btcoex.toml")
    }

    /// Load config from a file, or return default if not found
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display()))?;
            let config: BtcoexConfig = toml::from_str(&content)
                .with_context(|| format!("parse {}", path.display()))?;
            Ok(config)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load the configured board data, or blank board data
    pub fn board_data(&self) -> anyhow::Result<BoardData> {
        match &self.board_file {
            Some(path) => BoardData::load(path)
                .with_context(|| format!("load board data {}", path.display())),
            None => Ok(BoardData::blank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: BtcoexConfig = toml::from_str(
            r#"
board_file = "/tmp/bdata.bin"
interface = "adhoc-creator"
bt_vendor = 2
show_hex = true
"#,
        )
        .unwrap();
        assert_eq!(config.board_file, Some(PathBuf::from("/tmp/bdata.bin")));
        assert_eq!(config.interface, NetworkType::AdhocCreator);
        assert_eq!(config.bt_vendor, Some(2));
        assert!(config.show_hex);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: BtcoexConfig = toml::from_str("").unwrap();
        assert_eq!(config, BtcoexConfig::default());
        assert_eq!(config.interface, NetworkType::Infra);
    }

    #[test]
    fn test_unknown_interface_rejected() {
        assert!(toml::from_str::<BtcoexConfig>("interface = \"mesh\"").is_err());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let config = BtcoexConfig::load(Path::new("/nonexistent/btcoex.toml")).unwrap();
        assert_eq!(config, BtcoexConfig::default());
        assert_eq!(config.board_data().unwrap().len(), 4071);
    }

    #[test]
    fn test_roundtrip() {
        let config = BtcoexConfig {
            board_file: None,
            interface: NetworkType::Ap,
            bt_vendor: Some(7),
            show_hex: false,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("interface = \"ap\""));
        let parsed: BtcoexConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
