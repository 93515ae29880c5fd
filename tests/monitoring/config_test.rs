/*!
 * List Configuration Tests
 * Environment overrides for list construction
 */

use blocklist::core::config::{ENV_INITIAL_CAPACITY, ENV_VERIFY_INVARIANTS};
use blocklist::{ListConfig, MemoryBlock, OrderedBlockList};
use pretty_assertions::assert_eq;
use serial_test::serial;

fn clear_env() {
    std::env::remove_var(ENV_INITIAL_CAPACITY);
    std::env::remove_var(ENV_VERIFY_INVARIANTS);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    assert_eq!(ListConfig::from_env(), ListConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var(ENV_INITIAL_CAPACITY, "256");
    std::env::set_var(ENV_VERIFY_INVARIANTS, "true");

    let config = ListConfig::from_env();
    assert_eq!(config.initial_capacity, 256);
    assert!(config.verify_invariants);
    clear_env();
}

#[test]
#[serial]
fn test_from_env_ignores_invalid_values() {
    clear_env();
    std::env::set_var(ENV_INITIAL_CAPACITY, "lots");
    std::env::set_var(ENV_VERIFY_INVARIANTS, "maybe");

    assert_eq!(ListConfig::from_env(), ListConfig::default());
    clear_env();
}

#[test]
#[serial]
fn test_list_from_env_config() {
    clear_env();
    std::env::set_var(ENV_VERIFY_INVARIANTS, "1");

    let mut list = OrderedBlockList::with_config(&ListConfig::from_env());
    list.insert_back(MemoryBlock::new(0, 4));
    list.insert_front(MemoryBlock::new(4, 4));
    assert_eq!(list.remove_at(1), Ok(Some(MemoryBlock::new(0, 4))));
    assert_eq!(list.size(), 1);
    clear_env();
}
