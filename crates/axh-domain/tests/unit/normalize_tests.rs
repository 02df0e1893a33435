//! Unit tests for name cleaning and address formatting

use axh_domain::normalize::{AddressFormat, clean_player_name, extract_uuid, parse_address};

#[test]
fn test_clean_player_name_strips_line_breaks() {
    assert_eq!(clean_player_name("Alice\r\n"), "Alice");
    assert_eq!(clean_player_name("  Bo\nb  "), "Bob");
}

#[test]
fn test_clean_player_name_strips_color_tags() {
    assert_eq!(clean_player_name("<#ff0000>Red"), "Red");
    assert_eq!(clean_player_name("<color=#00ff00>Green"), "Green");
    assert_eq!(clean_player_name("<color=#abc>Tiny<#123>"), "Tiny");
}

#[test]
fn test_clean_player_name_keeps_plain_names() {
    assert_eq!(clean_player_name("Plain Name"), "Plain Name");
}

#[test]
fn test_parse_address_to_ronin() {
    let hex = "ABCDEF0123456789ABCDEF0123456789ABCDEF01";
    assert_eq!(
        parse_address(hex, AddressFormat::Ronin),
        "ronin:abcdef0123456789abcdef0123456789abcdef01"
    );
    assert_eq!(
        parse_address("0xabcdef0123456789abcdef0123456789abcdef01", AddressFormat::Ronin),
        "ronin:abcdef0123456789abcdef0123456789abcdef01"
    );
}

#[test]
fn test_parse_address_to_ethereum() {
    assert_eq!(
        parse_address(
            "ronin:abcdef0123456789abcdef0123456789abcdef01",
            AddressFormat::Ethereum
        ),
        "0xabcdef0123456789abcdef0123456789abcdef01"
    );
}

#[test]
fn test_extract_uuid_finds_the_first_id() {
    let text = "a 11111111-2222-3333-4444-555555555555 b 66666666-7777-8888-9999-000000000000";
    assert_eq!(
        extract_uuid(text).as_deref(),
        Some("11111111-2222-3333-4444-555555555555")
    );
    assert_eq!(extract_uuid("1111-2222"), None);
}
