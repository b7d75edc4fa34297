//! ath6kl Bluetooth-coexistence command tool
//!
//! Runs coexistence requests through the driver's send path against a
//! loopback target and prints what would reach the firmware.

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn};

use ath6kl_btcoex::{cmd, resolve, Ath6kl, BtDeviceType, BtcoexCommand, BtcoexConfig, BoardData};
use wmi_transport::{LoopbackTransport, OutputFormat, PrinterConfig, PrinterTransport};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(BtcoexConfig::default_path);
    let config = BtcoexConfig::load(&config_path)?;

    match cli.command {
        Commands::List => list(),
        Commands::Resolve { tag } => {
            match resolve(tag) {
                Some(command) => println!(
                    "{} -> 0x{:04x} {} ({})",
                    tag,
                    command.wmi_cmd_id(),
                    cmd::name(command.wmi_cmd_id()),
                    command.description()
                ),
                None => println!("{} -> unrecognized (0x{:04x})", tag, cmd::NONE),
            }
            Ok(())
        }
        Commands::Send {
            tag,
            payload,
            mode,
            board,
            vendor,
            hex,
            json,
        } => {
            let payload = cli::parse_hex_bytes(&payload).map_err(anyhow::Error::msg)?;

            let mut config = config;
            if let Some(mode) = mode {
                config.interface = mode.into();
            }
            if board.is_some() {
                config.board_file = board;
            }
            if vendor.is_some() {
                config.bt_vendor = vendor;
            }
            config.show_hex |= hex;

            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            send(&config, tag, &payload, format)
        }
    }
}

fn list() -> Result<()> {
    println!("{:>4}  {:>6}  {:<36} {}", "TAG", "WMI", "COMMAND", "DESCRIPTION");
    for command in BtcoexCommand::ALL {
        println!(
            "{:>4}  0x{:04x}  {:<36} {}",
            command.tag(),
            command.wmi_cmd_id(),
            cmd::name(command.wmi_cmd_id()),
            command.description()
        );
    }
    Ok(())
}

fn send(config: &BtcoexConfig, tag: u32, payload: &[u8], format: OutputFormat) -> Result<()> {
    let board = config.board_data()?;
    if board.len() < BoardData::blank().len() {
        warn!(
            "Board data is {} bytes; coexistence overrides will read as absent",
            board.len()
        );
    }

    let loopback = Arc::new(LoopbackTransport::new());
    let printer = PrinterTransport::wrap(
        loopback.clone(),
        PrinterConfig::default()
            .with_hex(config.show_hex)
            .with_format(format),
    );

    let mut ar = Ath6kl::new(printer, board).with_vif(config.interface);
    if let Some(vendor) = config.bt_vendor {
        ar.set_bt_vendor(BtDeviceType(vendor));
    }
    info!(
        "Interface {}, BT vendor {}",
        config.interface,
        ar.btcoex_info().bt_vendor
    );

    let mut request = ath6kl_btcoex::build_request(tag, payload);
    if let Err(e) = ar.send_btcoex_cmd(&mut request) {
        bail!("send failed ({}): {}", e.errno(), e);
    }

    info!(
        "Sent {} command(s), BT vendor now {}",
        loopback.count(),
        ar.btcoex_info().bt_vendor
    );
    Ok(())
}
