#![cfg(test)]
use meshaddr_common::config::Config;
use meshaddr_core::{
    GroupAddress, PublishableAddress, SubscriptionAddress, UnicastAddress, VirtualAddress,
};

#[test]
fn class_addresses_use_hex_strings() {
    let group = GroupAddress::new(0xC001).unwrap();
    let json = serde_json::to_string(&group).unwrap();
    assert_eq!(json, "\"C001\"");
    assert_eq!(serde_json::from_str::<GroupAddress>(&json).unwrap(), group);

    let virt = VirtualAddress::from_label_hash(0x1234);
    assert_eq!(serde_json::to_string(&virt).unwrap(), "\"9234\"");
}

#[test]
fn deserializing_checks_the_class() {
    assert!(serde_json::from_str::<UnicastAddress>("\"FFFF\"").is_err());
    assert!(serde_json::from_str::<GroupAddress>("\"FFFF\"").is_err());
    assert!(serde_json::from_str::<VirtualAddress>("\"0001\"").is_err());
    assert!(serde_json::from_str::<UnicastAddress>("\"not hex\"").is_err());
}

#[test]
fn publishable_round_trips_through_integer() {
    let unicast = PublishableAddress::from(UnicastAddress::new(0x0102).unwrap());
    let json = serde_json::to_string(&unicast).unwrap();
    assert_eq!(json, "258");
    assert_eq!(serde_json::from_str::<PublishableAddress>(&json).unwrap(), unicast);
}

#[test]
fn subscription_round_trips_through_hex() {
    let group = SubscriptionAddress::from_value(0xC001).unwrap();
    let json = serde_json::to_string(&group).unwrap();
    assert_eq!(json, "\"C001\"");
    assert_eq!(serde_json::from_str::<SubscriptionAddress>(&json).unwrap(), group);

    let virt = serde_json::from_str::<SubscriptionAddress>("\"8abc\"").unwrap();
    assert!(matches!(virt, SubscriptionAddress::Virtual(_)));
    assert_eq!(serde_json::to_string(&virt).unwrap(), "\"8ABC\"");

    let fixed = serde_json::from_str::<SubscriptionAddress>("\"FFFC\"").unwrap();
    assert!(matches!(fixed, SubscriptionAddress::Group(_)));
}

#[test]
fn subscription_rejects_non_subscribable_values() {
    assert!(serde_json::from_str::<SubscriptionAddress>("\"FFFF\"").is_err());
    assert!(serde_json::from_str::<SubscriptionAddress>("\"FF00\"").is_err());
    assert!(serde_json::from_str::<SubscriptionAddress>("\"0001\"").is_err());
    assert!(serde_json::from_str::<SubscriptionAddress>("\"10000\"").is_err());
}

#[test]
fn default_config_prefixes_addresses() {
    let cfg = Config::default();
    assert!(cfg.prefix);
    assert_eq!(cfg.quiet, 0);
}
