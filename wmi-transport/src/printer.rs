//! PrinterTransport middleware for monitoring outbound WMI commands
//!
//! Wraps any `WmiTransport` and prints every command passing through it.
//!
//! # Example
//!
//! ```ignore
//! use wmi_transport::{LoopbackTransport, PrinterConfig, PrinterTransport};
//!
//! let monitored = PrinterTransport::wrap(Arc::new(LoopbackTransport::new()), PrinterConfig::default());
//! // Now all commands will be printed to stderr
//! ```

use std::str::FromStr;
use std::sync::Arc;

use crossterm::style::Stylize;
use serde::Serialize;
use tracing::warn;

use crate::command::{try_parse_command, ParsedCommand};
use crate::protocol::cmd;
use crate::{SyncFlag, TransportDeviceInfo, TransportError, WmiTransport};

/// Output format for the printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Command filter for selective display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandFilter {
    #[default]
    All,
    Cmd(u16),
}

impl FromStr for CommandFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            s if s.starts_with("cmd=") || s.starts_with("0x") => {
                let hex_str = s.strip_prefix("cmd=").unwrap_or(s);
                let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
                u16::from_str_radix(hex_str, 16)
                    .map(Self::Cmd)
                    .map_err(|e| format!("Invalid command id: {}", e))
            }
            _ => Err(format!("Unknown filter: {}", s)),
        }
    }
}

/// Configuration for the PrinterTransport
#[derive(Debug, Clone, Default)]
pub struct PrinterConfig {
    /// Show raw hex dump alongside decoded output
    pub show_hex: bool,
    /// Filter for selective display
    pub filter: CommandFilter,
    /// Output format
    pub format: OutputFormat,
}

impl PrinterConfig {
    pub fn with_hex(mut self, show: bool) -> Self {
        self.show_hex = show;
        self
    }

    pub fn with_filter(mut self, filter: CommandFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    cmd_id: u16,
    name: &'static str,
    if_idx: u8,
    sync: &'static str,
    parsed: ParsedCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    hex: Option<&'a [u8]>,
}

/// Transport middleware that prints all outbound commands
pub struct PrinterTransport {
    inner: Arc<dyn WmiTransport>,
    config: PrinterConfig,
}

impl PrinterTransport {
    /// Wrap a transport with printing middleware
    pub fn wrap(transport: Arc<dyn WmiTransport>, config: PrinterConfig) -> Arc<dyn WmiTransport> {
        Arc::new(Self {
            inner: transport,
            config,
        })
    }

    fn should_show(&self, cmd_id: u16) -> bool {
        match self.config.filter {
            CommandFilter::All => true,
            CommandFilter::Cmd(c) => c == cmd_id,
        }
    }

    /// Print a command being sent
    fn print_command(&self, if_idx: u8, cmd_id: u16, data: &[u8], sync: SyncFlag) {
        if !self.should_show(cmd_id) {
            return;
        }

        let parsed = try_parse_command(cmd_id, data);
        match self.config.format {
            OutputFormat::Json => {
                let record = JsonRecord {
                    cmd_id,
                    name: cmd::name(cmd_id),
                    if_idx,
                    sync: sync.as_str(),
                    parsed,
                    hex: self.config.show_hex.then_some(data),
                };
                match serde_json::to_string(&record) {
                    Ok(line) => eprintln!("{}", line),
                    Err(e) => warn!("printer: failed to encode record: {}", e),
                }
            }
            OutputFormat::Text => {
                match &parsed {
                    ParsedCommand::Opaque { .. } => {
                        eprintln!(
                            "{} {}  0x{:04x} {} if={} len={} {}",
                            ">>>".cyan(),
                            "WMI".cyan().bold(),
                            cmd_id,
                            cmd::name(cmd_id).yellow(),
                            if_idx,
                            data.len(),
                            sync.as_str()
                        );
                    }
                    _ => {
                        eprintln!(
                            "{} {}  0x{:04x} {:?} if={} {}",
                            ">>>".cyan(),
                            "WMI".cyan().bold(),
                            cmd_id,
                            parsed,
                            if_idx,
                            sync.as_str()
                        );
                    }
                }
                if self.config.show_hex {
                    eprintln!("    {}  {:02x?}", "HEX".dim(), data);
                }
            }
        }
    }
}

impl WmiTransport for PrinterTransport {
    fn cmd_send(
        &self,
        if_idx: u8,
        cmd_id: u16,
        data: Vec<u8>,
        sync: SyncFlag,
    ) -> Result<(), TransportError> {
        self.print_command(if_idx, cmd_id, &data, sync);
        let result = self.inner.cmd_send(if_idx, cmd_id, data, sync);
        if let Err(ref e) = result {
            eprintln!("{} {}  {}", "<<<".red(), "ERR".red().bold(), e);
        }
        result
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        self.inner.device_info()
    }
}
