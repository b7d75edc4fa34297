// CLI definitions using clap

use ath6kl_btcoex::NetworkType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "btcoex")]
#[command(author, version, about = "ath6kl Bluetooth-coexistence command tool")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path (default: ~/.config/ath6kl/btcoex.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List coexistence request tags and their WMI commands
    #[command(visible_aliases = ["ls"])]
    List,

    /// Resolve a request tag to its WMI command id
    Resolve {
        /// Request tag (decimal or 0x hex)
        #[arg(value_parser = parse_u32)]
        tag: u32,
    },

    /// Run a request through the send path against a loopback target
    Send {
        /// Request tag (decimal or 0x hex)
        #[arg(value_parser = parse_u32)]
        tag: u32,

        /// Payload as hex bytes ("01 02", "0102" or "01:02")
        #[arg(default_value = "")]
        payload: String,

        /// Interface mode (overrides config)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Board data file (overrides config)
        #[arg(long, value_name = "FILE")]
        board: Option<PathBuf>,

        /// Initial colocated BT vendor byte (overrides config)
        #[arg(long)]
        vendor: Option<u8>,

        /// Show raw hex dump of the outbound command
        #[arg(long)]
        hex: bool,

        /// Print outbound commands as JSON lines
        #[arg(long)]
        json: bool,
    },
}

/// Interface mode as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Infra,
    Adhoc,
    AdhocCreator,
    Ap,
}

impl From<ModeArg> for NetworkType {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Infra => NetworkType::Infra,
            ModeArg::Adhoc => NetworkType::Adhoc,
            ModeArg::AdhocCreator => NetworkType::AdhocCreator,
            ModeArg::Ap => NetworkType::Ap,
        }
    }
}

fn parse_u32(s: &str) -> Result<u32, String> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    }
    .map_err(|e| format!("invalid number '{}': {}", s, e))
}

/// Parse a hex byte string, ignoring spaces, colons and commas
pub fn parse_hex_bytes(s: &str) -> Result<Vec<u8>, String> {
    let digits: String = s
        .chars()
        .filter(|c| !matches!(c, ' ' | ':' | ',' | '\t'))
        .collect();
    let digits = digits.strip_prefix("0x").unwrap_or(&digits);
    if !digits.is_ascii() {
        return Err(format!("non-hex characters in '{}'", s));
    }
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in '{}'", s));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| format!("invalid hex byte '{}': {}", &digits[i..i + 2], e))
        })
        .collect()
}
