//! Integration tests for the coexistence send path.
//!
//! These drive the public API the way the netlink handler does: a raw
//! request buffer goes in, and the loopback transport shows what would have
//! reached the firmware.

use std::sync::Arc;

use ath6kl_btcoex::{
    a2dp, build_request, cmd, nl, wmi_cmd_id, Ath6kl, BoardData, BtDeviceType, BtcoexCommand,
    BtcoexError, NetworkType, ANTCONF_OFFSET, BTDEV_OFFSET,
};
use wmi_transport::{LoopbackTransport, SyncFlag, TransportError};

fn device(board: BoardData, mode: NetworkType) -> (Ath6kl, Arc<LoopbackTransport>) {
    let transport = Arc::new(LoopbackTransport::new());
    let ar = Ath6kl::new(transport.clone(), board).with_vif(mode);
    (ar, transport)
}

fn flags_of(data: &[u8]) -> u32 {
    u32::from_le_bytes([data[0], data[1], data[2], data[3]])
}

// ── Translation ──

#[test]
fn every_known_tag_maps_to_a_nonzero_id() {
    for tag in 0..=12u32 {
        assert_ne!(wmi_cmd_id(tag), cmd::NONE, "tag {}", tag);
    }
    assert_eq!(wmi_cmd_id(nl::SET_BT_HID_CONFIG), cmd::SET_BTCOEX_HID_CONFIG);
    assert_eq!(wmi_cmd_id(13), cmd::NONE);
    assert_eq!(wmi_cmd_id(0xDEAD_BEEF), cmd::NONE);
}

#[test]
fn unknown_tag_fails_with_enomem_and_sends_nothing() {
    let (mut ar, transport) = device(BoardData::blank(), NetworkType::Infra);
    let mut request = build_request(77, &[0; 8]);
    assert_eq!(ar.send_btcoex_cmd_errno(&mut request), -12);
    assert!(matches!(
        ar.send_btcoex_cmd(&mut request),
        Err(BtcoexError::UnknownCommand(77))
    ));
    assert_eq!(transport.count(), 0);
}

// ── Pass-through ──

#[test]
fn unpatched_commands_forward_payload_verbatim() {
    let board = BoardData::blank()
        .with_byte(ANTCONF_OFFSET, 1)
        .with_byte(BTDEV_OFFSET, 1);
    let (mut ar, transport) = device(board, NetworkType::Ap);
    let payload: Vec<u8> = (0u8..24).map(|b| b.wrapping_mul(37)).collect();

    for command in BtcoexCommand::ALL {
        if matches!(
            command,
            BtcoexCommand::SetFeAntenna
                | BtcoexCommand::SetColocatedBtDev
                | BtcoexCommand::SetA2dpConfig
        ) {
            continue;
        }
        let mut request = build_request(command.tag(), &payload);
        assert_eq!(ar.send_btcoex_cmd_errno(&mut request), 0);
        let sent = transport.last().unwrap();
        assert_eq!(sent.cmd_id, command.wmi_cmd_id());
        assert_eq!(sent.data, payload, "{:?}", command);
        assert_eq!(sent.sync, SyncFlag::NoSync);
    }
}

#[test]
fn outbound_length_is_request_minus_tag() {
    let (mut ar, transport) = device(BoardData::blank(), NetworkType::Infra);
    for len in [0usize, 1, 3, 4, 17, 256] {
        let mut request = build_request(nl::SET_BT_A2DP_CONFIG, &vec![0u8; len]);
        ar.send_btcoex_cmd(&mut request).unwrap();
        assert_eq!(transport.last().unwrap().data.len(), request.len() - 4);
    }
}

// ── Antenna ──

#[test]
fn antenna_board_value_overrides_request() {
    let board = BoardData::blank().with_byte(ANTCONF_OFFSET, 4);
    let (mut ar, transport) = device(board, NetworkType::Infra);
    for input in [0u8, 1, 4, 200] {
        ar.send_btcoex_cmd(&mut build_request(nl::SET_BT_FT_ANT, &[input]))
            .unwrap();
        assert_eq!(transport.last().unwrap().data, vec![4]);
    }
}

#[test]
fn antenna_request_kept_without_board_value() {
    let (mut ar, transport) = device(BoardData::blank(), NetworkType::Infra);
    ar.send_btcoex_cmd(&mut build_request(nl::SET_BT_FT_ANT, &[2]))
        .unwrap();
    assert_eq!(transport.last().unwrap().data, vec![2]);
}

// ── Colocated device and A2DP ──

#[test]
fn infra_always_records_qcom() {
    let board = BoardData::blank().with_byte(BTDEV_OFFSET, 7);
    let (mut ar, transport) = device(board, NetworkType::Infra);
    ar.send_btcoex_cmd(&mut build_request(nl::SET_COLOCATED_BT_DEV, &[3]))
        .unwrap();
    assert_eq!(ar.btcoex_info().bt_vendor, BtDeviceType::QCOM);
    // The command itself goes out as supplied
    assert_eq!(transport.last().unwrap().data, vec![3]);
}

#[test]
fn ap_records_board_value_then_request_value() {
    let board = BoardData::blank().with_byte(BTDEV_OFFSET, 7);
    let (mut ar, _) = device(board, NetworkType::Ap);
    ar.send_btcoex_cmd(&mut build_request(nl::SET_COLOCATED_BT_DEV, &[3]))
        .unwrap();
    assert_eq!(ar.btcoex_info().bt_vendor, BtDeviceType(7));

    let (mut ar, _) = device(BoardData::blank(), NetworkType::Ap);
    ar.send_btcoex_cmd(&mut build_request(nl::SET_COLOCATED_BT_DEV, &[3]))
        .unwrap();
    assert_eq!(ar.btcoex_info().bt_vendor, BtDeviceType(3));
}

#[test]
fn a2dp_flags_follow_recorded_vendor() {
    // Infra -> QCOM -> optimization + airtime
    let (mut ar, transport) = device(BoardData::blank(), NetworkType::Infra);
    ar.send_btcoex_cmd(&mut build_request(nl::SET_COLOCATED_BT_DEV, &[0]))
        .unwrap();
    ar.send_btcoex_cmd(&mut build_request(nl::SET_BT_A2DP_CONFIG, &[0; 16]))
        .unwrap();
    let flags = flags_of(&transport.last().unwrap().data);
    assert_ne!(flags & a2dp::ALLOW_OPTIMIZATION, 0);
    assert_eq!(a2dp::max_bluetooth_time(flags), 40);
    assert_ne!(flags & a2dp::DIS_SCANCONN_STOMP, 0);
    assert_eq!(flags & a2dp::IS_A2DP_HIGH_PRI, 0);

    // AP with a non-QCOM device -> high priority
    let (mut ar, transport) = device(BoardData::blank(), NetworkType::Ap);
    ar.send_btcoex_cmd(&mut build_request(nl::SET_COLOCATED_BT_DEV, &[5]))
        .unwrap();
    ar.send_btcoex_cmd(&mut build_request(nl::SET_BT_A2DP_CONFIG, &[0; 16]))
        .unwrap();
    let flags = flags_of(&transport.last().unwrap().data);
    assert_ne!(flags & a2dp::IS_A2DP_HIGH_PRI, 0);
    assert_ne!(flags & a2dp::DIS_SCANCONN_STOMP, 0);
    assert_eq!(flags & a2dp::ALLOW_OPTIMIZATION, 0);
    assert_eq!(a2dp::max_bluetooth_time(flags), 0);
}

#[test]
fn adhoc_colocated_request_keeps_previous_vendor() {
    let (mut ar, _) = device(BoardData::blank(), NetworkType::Ap);
    ar.send_btcoex_cmd(&mut build_request(nl::SET_COLOCATED_BT_DEV, &[2]))
        .unwrap();
    assert!(ar.set_vif_mode(0, NetworkType::Adhoc));
    ar.send_btcoex_cmd(&mut build_request(nl::SET_COLOCATED_BT_DEV, &[9]))
        .unwrap();
    assert_eq!(ar.btcoex_info().bt_vendor, BtDeviceType::QCOM);
}

// ── Errors ──

#[test]
fn transport_status_is_returned_unchanged() {
    let (mut ar, transport) = device(BoardData::blank(), NetworkType::Infra);
    transport.fail_next(TransportError::Timeout);
    let mut request = build_request(nl::GET_BT_CONFIG, &[]);
    assert_eq!(ar.send_btcoex_cmd_errno(&mut request), -110);
}
