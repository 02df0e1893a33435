//! Unit tests for inventory and catalog types

use axh_domain::value_objects::{ItemCatalogKind, PlayerInventory, PlayerItem, TokenType};

fn item(id: &str, quantity: i64, withdrawable: Option<i64>) -> PlayerItem {
    PlayerItem {
        user_id: "u1".to_string(),
        item_id: id.to_string(),
        quantity,
        withdrawable,
        next_withdraw_time: None,
    }
}

#[test]
fn test_inventory_split() {
    let items = vec![
        item("ecard_fire", 2, Some(1)),
        item("ecard_empty", 0, None),
        item("rune_water", 1, None),
        item("card_other", 5, None),
    ];
    let inventory = PlayerInventory::from_items(&items);

    assert_eq!(inventory.charms.len(), 1);
    assert_eq!(inventory.charms[0].item_id, "ecard_fire");
    assert_eq!(inventory.runes.len(), 1);
    assert_eq!(inventory.withdrawable_count(), 1);
}

#[test]
fn test_empty_inventory() {
    assert!(PlayerInventory::from_items(&[item("ecard_x", 0, None)]).is_empty());
}

#[test]
fn test_player_item_wire_names() {
    let parsed: PlayerItem = serde_json::from_str(
        r#"{"userId":"u1","itemId":"rune_a","quantity":3,"withdrawable":1}"#,
    )
    .expect("player item");
    assert_eq!(parsed.item_id, "rune_a");
    assert_eq!(parsed.withdrawable, Some(1));
}

#[test]
fn test_catalog_kind_parse() {
    assert_eq!("Runes".parse::<ItemCatalogKind>().ok(), Some(ItemCatalogKind::Runes));
    assert!("axies".parse::<ItemCatalogKind>().is_err());
    assert_eq!("charm".parse::<TokenType>().ok(), Some(TokenType::Charm));
}
