use geist_blocks::{Block, BlockRegistry};
use proptest::prelude::*;

#[test]
fn air_is_always_present() {
    let reg = BlockRegistry::new();
    assert_eq!(reg.get("air"), Some(Block::AIR));
    assert_eq!(reg.len(), 1);
    assert!(Block::AIR.is_air());
}

#[test]
fn parses_simple_and_detailed_entries() {
    let reg = BlockRegistry::from_toml_str(
        r#"
        [blocks]
        stone = 1
        oak_log = { id = 4, state = 2 }
        glass = { id = 7 }
    "#,
    )
    .unwrap();
    assert_eq!(reg.get("stone"), Some(Block::new(1, 0)));
    assert_eq!(reg.get("oak_log"), Some(Block::new(4, 2)));
    assert_eq!(reg.get("glass"), Some(Block::new(7, 0)));
    assert_eq!(reg.get("dirt"), None);
    assert_eq!(reg.name_of(Block::new(4, 2)), Some("oak_log"));
}

#[test]
fn air_cannot_be_redefined() {
    let reg = BlockRegistry::from_toml_str(
        r#"
        [blocks]
        air = 9
    "#,
    )
    .unwrap();
    assert_eq!(reg.get("air"), Some(Block::AIR));
}

#[test]
fn missing_table_yields_air_only() {
    let reg = BlockRegistry::from_toml_str("").unwrap();
    assert_eq!(reg.len(), 1);
}

proptest! {
    #[test]
    fn inserted_names_resolve(name in "[a-z_]{1,12}", id in 1u16..512, state in 0u16..16) {
        prop_assume!(name != "air");
        let mut reg = BlockRegistry::new();
        reg.insert(name.clone(), Block::new(id, state));
        prop_assert_eq!(reg.get(&name), Some(Block::new(id, state)));
        prop_assert_eq!(reg.name_of(Block::new(id, state)), Some(name.as_str()));
    }
}
